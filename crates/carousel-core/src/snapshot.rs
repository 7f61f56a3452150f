//! Read-only view of a carousel handed to renderers.

use crate::slide::{Slide, SlideSet};
use crate::state::{CarouselPhase, CarouselState};

/// Point-in-time carousel state plus the slides it indexes into.
///
/// Cheap to clone: the slide set is shared.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CarouselSnapshot {
    state: CarouselState,
    slides: SlideSet,
}

impl CarouselSnapshot {
    pub(crate) fn new(slides: SlideSet, state: CarouselState) -> Self {
        Self { state, slides }
    }

    pub fn state(&self) -> CarouselState {
        self.state
    }

    pub fn current_index(&self) -> usize {
        self.state.current_index()
    }

    pub fn auto_playing(&self) -> bool {
        self.state.auto_playing()
    }

    pub fn phase(&self) -> CarouselPhase {
        self.state.phase()
    }

    /// The slide at `current_index`.
    pub fn current_slide(&self) -> &Slide {
        // `current_index < len` is a state invariant.
        &self.slides[self.state.current_index()]
    }

    pub fn slide_count(&self) -> usize {
        self.slides.len()
    }

    pub fn slides(&self) -> &SlideSet {
        &self.slides
    }
}
