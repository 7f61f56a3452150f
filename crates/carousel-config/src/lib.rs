//! Deck configuration for the console carousel.
//!
//! A deck is a TOML file holding the autoplay interval and the slides to
//! rotate through. Loading layers built-in defaults, the deck file, and
//! `CAROUSEL_*` environment variables, then validates the result into
//! `carousel_core` types. Decks without a `slides` key fall back to the
//! built-in llms.py deck.

use std::path::{Path, PathBuf};

use carousel_core::{CarouselConfig, CarouselError, DEFAULT_INTERVAL, Slide, SlideSet};
use directories::ProjectDirs;
use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

/// The llms.py homepage deck, shipped with the binary.
pub const LLMS_DECK: &str = include_str!("../decks/llms.toml");

// ── Error ───────────────────────────────────────────────────────────

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("deck file not found: {}", path.display())]
    DeckNotFound { path: PathBuf },

    #[error("invalid deck: {0}")]
    Carousel(#[from] CarouselError),

    #[error("failed to parse deck: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("failed to serialize deck: {0}")]
    Serialization(#[from] toml::ser::Error),

    #[error("deck loading failed: {0}")]
    Figment(Box<figment::Error>),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<figment::Error> for ConfigError {
    fn from(err: figment::Error) -> Self {
        Self::Figment(Box::new(err))
    }
}

// ── TOML deck structs ───────────────────────────────────────────────

/// On-disk deck layout.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct DeckFile {
    /// Autoplay cadence in milliseconds.
    #[serde(default = "default_interval_ms")]
    pub interval_ms: u64,

    /// Slides in display order. `None` selects the built-in deck.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub slides: Option<Vec<Slide>>,
}

impl Default for DeckFile {
    fn default() -> Self {
        Self {
            interval_ms: default_interval_ms(),
            slides: None,
        }
    }
}

fn default_interval_ms() -> u64 {
    u64::try_from(DEFAULT_INTERVAL.as_millis()).unwrap_or(10_000)
}

/// A validated deck, ready to start a carousel from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Deck {
    pub slides: SlideSet,
    pub config: CarouselConfig,
}

impl DeckFile {
    /// Validate into core types.
    pub fn resolve(self) -> Result<Deck, ConfigError> {
        let slides = match self.slides {
            Some(slides) => SlideSet::new(slides)?,
            None => SlideSet::new(builtin_slides()?)?,
        };
        let config = CarouselConfig::from_millis(self.interval_ms);
        config.validate()?;
        Ok(Deck { slides, config })
    }
}

impl From<&Deck> for DeckFile {
    fn from(deck: &Deck) -> Self {
        Self {
            interval_ms: u64::try_from(deck.config.interval.as_millis()).unwrap_or(u64::MAX),
            slides: Some(deck.slides.as_slice().to_vec()),
        }
    }
}

// ── Built-in deck ───────────────────────────────────────────────────

fn builtin_slides() -> Result<Vec<Slide>, ConfigError> {
    let file: DeckFile = toml::from_str(LLMS_DECK)?;
    Ok(file.slides.unwrap_or_default())
}

/// The built-in llms.py deck with its default interval.
pub fn builtin_deck() -> Result<Deck, ConfigError> {
    let file: DeckFile = toml::from_str(LLMS_DECK)?;
    file.resolve()
}

// ── Deck file path ──────────────────────────────────────────────────

/// Resolve the default deck path via XDG / platform conventions.
pub fn deck_path() -> PathBuf {
    ProjectDirs::from("com", "console-carousel", "carousel").map_or_else(
        || {
            let mut p = dirs_fallback();
            p.push("deck.toml");
            p
        },
        |dirs| dirs.config_dir().join("deck.toml"),
    )
}

fn dirs_fallback() -> PathBuf {
    let mut p = PathBuf::from(std::env::var("HOME").unwrap_or_else(|_| ".".into()));
    p.push(".config");
    p.push("carousel");
    p
}

// ── Deck loading ────────────────────────────────────────────────────

/// Layered sources for a deck at `path`: defaults, file, environment.
///
/// A missing file contributes nothing.
pub fn deck_figment(path: &Path) -> Figment {
    Figment::new()
        .merge(Serialized::defaults(DeckFile::default()))
        .merge(Toml::file(path))
        .merge(Env::prefixed("CAROUSEL_").only(&["interval_ms"]))
}

/// Load the raw deck file.
///
/// An explicit `path` must exist; with `None` the default [`deck_path`]
/// is used and may be absent.
pub fn load_deck_file(path: Option<&Path>) -> Result<DeckFile, ConfigError> {
    let path = match path {
        Some(p) if !p.exists() => {
            return Err(ConfigError::DeckNotFound { path: p.to_owned() });
        }
        Some(p) => p.to_owned(),
        None => deck_path(),
    };

    debug!(path = %path.display(), "loading deck");
    let file: DeckFile = deck_figment(&path).extract()?;
    Ok(file)
}

/// Load and validate a deck.
pub fn load_deck(path: Option<&Path>) -> Result<Deck, ConfigError> {
    load_deck_file(path)?.resolve()
}

/// Serialize a deck to pretty TOML.
pub fn render_deck(deck: &Deck) -> Result<String, ConfigError> {
    Ok(toml::to_string_pretty(&DeckFile::from(deck))?)
}

/// Write a deck to `path`, creating parent directories.
pub fn save_deck(deck: &Deck, path: &Path) -> Result<(), ConfigError> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(path, render_deck(deck)?)?;
    Ok(())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use std::time::Duration;

    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn builtin_deck_has_five_slides_in_order() {
        let deck = builtin_deck().unwrap();
        let titles: Vec<&str> = deck.slides.iter().map(|s| s.title.as_str()).collect();
        assert_eq!(
            titles,
            [
                "Quick Start",
                "Multi-Provider Support",
                "Vision & Multi-Modal",
                "Web UI & Server",
                "Intelligent Routing",
            ]
        );
        assert_eq!(deck.config.interval, Duration::from_secs(10));
    }

    #[test]
    fn builtin_deck_keeps_blank_and_quoted_lines() {
        let deck = builtin_deck().unwrap();
        let vision = &deck.slides[2];
        assert_eq!(vision.commands.len(), 8);
        assert_eq!(vision.commands[2], "");
        assert_eq!(
            vision.commands[1],
            "llms --image screenshot.png \"What's in this image?\""
        );
    }

    #[test]
    fn missing_slides_key_falls_back_to_builtin() {
        let file = DeckFile {
            interval_ms: 2_500,
            slides: None,
        };
        let deck = file.resolve().unwrap();
        assert_eq!(deck.slides.len(), 5);
        assert_eq!(deck.config.interval, Duration::from_millis(2_500));
    }

    #[test]
    fn empty_slides_list_is_invalid() {
        let file = DeckFile {
            interval_ms: 1_000,
            slides: Some(Vec::new()),
        };
        assert!(matches!(
            file.resolve(),
            Err(ConfigError::Carousel(CarouselError::InvalidConfiguration { .. }))
        ));
    }

    #[test]
    fn zero_interval_is_invalid() {
        let file = DeckFile {
            interval_ms: 0,
            slides: None,
        };
        assert!(matches!(
            file.resolve(),
            Err(ConfigError::Carousel(CarouselError::InvalidConfiguration { .. }))
        ));
    }

    #[test]
    fn deck_path_ends_with_deck_toml() {
        assert!(deck_path().ends_with("deck.toml"));
    }
}
