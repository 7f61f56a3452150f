// ── Carousel state machine ──
//
// Pure transition logic. The controller owns one `CarouselState` inside
// its watch channel and applies these transitions atomically; nothing in
// here knows about timers or subscribers.
//
//   Autoplaying ──next/previous/go_to──▶ Manual
//        │                                 │
//        └────────────dispose──────────────┴──▶ Disposed

use strum::{AsRefStr, Display};

use crate::error::CarouselError;

/// Macro-state of a carousel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, AsRefStr)]
#[strum(serialize_all = "lowercase")]
pub enum CarouselPhase {
    /// Timer ticks advance the index.
    Autoplaying,
    /// The viewer navigated manually; ticks are ignored.
    Manual,
    /// Timer released; every mutator fails.
    Disposed,
}

/// Presentation state of one carousel.
///
/// `current_index` is always in `0..len` for the slide set the state was
/// created for, and `auto_playing` never flips back to `true`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CarouselState {
    current_index: usize,
    auto_playing: bool,
    disposed: bool,
}

impl Default for CarouselState {
    fn default() -> Self {
        Self::initial()
    }
}

impl CarouselState {
    pub const fn initial() -> Self {
        Self {
            current_index: 0,
            auto_playing: true,
            disposed: false,
        }
    }

    pub const fn current_index(&self) -> usize {
        self.current_index
    }

    pub const fn auto_playing(&self) -> bool {
        self.auto_playing
    }

    pub const fn is_disposed(&self) -> bool {
        self.disposed
    }

    pub const fn phase(&self) -> CarouselPhase {
        if self.disposed {
            CarouselPhase::Disposed
        } else if self.auto_playing {
            CarouselPhase::Autoplaying
        } else {
            CarouselPhase::Manual
        }
    }

    // ── Transitions ──────────────────────────────────────────────
    //
    // Each returns whether the state actually changed, so the caller
    // can skip notifying subscribers on no-ops. On `Err` the state is
    // left untouched.

    /// Timer-driven advance. No-op outside autoplay.
    pub(crate) fn tick(&mut self, len: usize) -> Result<bool, CarouselError> {
        self.ensure_live()?;
        if !self.auto_playing {
            return Ok(false);
        }
        Ok(self.set_index(wrap_next(self.current_index, len)))
    }

    pub(crate) fn next(&mut self, len: usize) -> Result<bool, CarouselError> {
        self.ensure_live()?;
        let moved = self.set_index(wrap_next(self.current_index, len));
        Ok(self.stop_autoplay() | moved)
    }

    pub(crate) fn previous(&mut self, len: usize) -> Result<bool, CarouselError> {
        self.ensure_live()?;
        let moved = self.set_index(wrap_previous(self.current_index, len));
        Ok(self.stop_autoplay() | moved)
    }

    pub(crate) fn go_to(&mut self, index: usize, len: usize) -> Result<bool, CarouselError> {
        self.ensure_live()?;
        if index >= len {
            return Err(CarouselError::OutOfRange { index, len });
        }
        let moved = self.set_index(index);
        Ok(self.stop_autoplay() | moved)
    }

    pub(crate) fn dispose(&mut self) -> Result<bool, CarouselError> {
        self.ensure_live()?;
        self.disposed = true;
        Ok(true)
    }

    fn ensure_live(&self) -> Result<(), CarouselError> {
        if self.disposed {
            Err(CarouselError::InvalidState)
        } else {
            Ok(())
        }
    }

    fn set_index(&mut self, index: usize) -> bool {
        let changed = self.current_index != index;
        self.current_index = index;
        changed
    }

    fn stop_autoplay(&mut self) -> bool {
        std::mem::replace(&mut self.auto_playing, false)
    }
}

fn wrap_next(index: usize, len: usize) -> usize {
    (index + 1) % len
}

fn wrap_previous(index: usize, len: usize) -> usize {
    (index + len - 1) % len
}
