// ── Slides ──
//
// A `Slide` is one unit of carousel content. A `SlideSet` is the
// immutable, never-empty sequence a carousel rotates through; changing
// the content means building a new set and a new carousel.

use std::ops::Index;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::command::{CommandLine, classify};
use crate::error::CarouselError;

/// A titled block of example command lines.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Slide {
    pub title: String,
    pub description: String,
    #[serde(default)]
    pub commands: Vec<String>,
}

impl Slide {
    pub fn new<I, S>(title: impl Into<String>, description: impl Into<String>, commands: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            title: title.into(),
            description: description.into(),
            commands: commands.into_iter().map(Into::into).collect(),
        }
    }

    /// Command lines classified for display, in order.
    pub fn lines(&self) -> impl Iterator<Item = CommandLine<'_>> {
        self.commands.iter().map(|cmd| classify(cmd))
    }
}

/// Immutable, non-empty ordered sequence of slides.
///
/// Cheaply cloneable; clones share the same backing storage.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SlideSet {
    slides: Arc<[Slide]>,
}

impl SlideSet {
    /// Build a slide set, rejecting an empty list.
    pub fn new(slides: Vec<Slide>) -> Result<Self, CarouselError> {
        if slides.is_empty() {
            return Err(CarouselError::invalid_configuration(
                "slide set must contain at least one slide",
            ));
        }
        Ok(Self {
            slides: slides.into(),
        })
    }

    /// Number of slides. Always at least 1.
    pub fn len(&self) -> usize {
        self.slides.len()
    }

    /// Always `false`: a slide set cannot be constructed empty.
    pub fn is_empty(&self) -> bool {
        self.slides.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Slide> {
        self.slides.get(index)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Slide> {
        self.slides.iter()
    }

    pub fn as_slice(&self) -> &[Slide] {
        &self.slides
    }
}

impl Index<usize> for SlideSet {
    type Output = Slide;

    fn index(&self, index: usize) -> &Self::Output {
        &self.slides[index]
    }
}

impl<'a> IntoIterator for &'a SlideSet {
    type Item = &'a Slide;
    type IntoIter = std::slice::Iter<'a, Slide>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl TryFrom<Vec<Slide>> for SlideSet {
    type Error = CarouselError;

    fn try_from(slides: Vec<Slide>) -> Result<Self, Self::Error> {
        Self::new(slides)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn slide(title: &str) -> Slide {
        Slide::new(title, "desc", ["llms ls"])
    }

    #[test]
    fn empty_set_is_rejected() {
        let err = SlideSet::new(Vec::new()).unwrap_err();
        assert!(matches!(err, CarouselError::InvalidConfiguration { .. }));
    }

    #[test]
    fn preserves_order_and_length() {
        let set = SlideSet::new(vec![slide("a"), slide("b"), slide("c")]).unwrap();
        assert_eq!(set.len(), 3);
        assert!(!set.is_empty());
        let titles: Vec<&str> = set.iter().map(|s| s.title.as_str()).collect();
        assert_eq!(titles, ["a", "b", "c"]);
        assert_eq!(set[1].title, "b");
    }

    #[test]
    fn get_out_of_bounds_is_none() {
        let set = SlideSet::new(vec![slide("only")]).unwrap();
        assert!(set.get(0).is_some());
        assert!(set.get(1).is_none());
    }

    #[test]
    fn clones_share_storage() {
        let set = SlideSet::new(vec![slide("a")]).unwrap();
        let copy = set.clone();
        assert!(std::ptr::eq(set.as_slice(), copy.as_slice()));
    }

    #[test]
    fn lines_classify_each_command() {
        let s = Slide::new("t", "d", ["# list", "", "llms ls"]);
        let lines: Vec<CommandLine<'_>> = s.lines().collect();
        assert_eq!(
            lines,
            [
                CommandLine::Comment("# list"),
                CommandLine::Blank,
                CommandLine::Executable("llms ls"),
            ]
        );
    }
}
