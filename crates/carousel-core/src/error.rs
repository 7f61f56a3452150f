// ── Core error types ──
//
// Every carousel operation reports failure synchronously through
// `CarouselError`. Nothing is retried or swallowed internally, and a
// rejected operation leaves the carousel state untouched.

use thiserror::Error;

/// Unified error type for the carousel core.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CarouselError {
    // ── Construction ─────────────────────────────────────────────────
    /// Empty slide list or zero interval. No carousel is produced.
    #[error("Invalid carousel configuration: {message}")]
    InvalidConfiguration { message: String },

    // ── Navigation ───────────────────────────────────────────────────
    /// `go_to` was given an index outside `0..len`.
    #[error("Slide index {index} is out of range (carousel has {len} slides)")]
    OutOfRange { index: usize, len: usize },

    // ── Lifecycle ────────────────────────────────────────────────────
    /// A mutator was invoked after `dispose()`.
    #[error("Carousel has been disposed")]
    InvalidState,
}

impl CarouselError {
    pub(crate) fn invalid_configuration(message: impl Into<String>) -> Self {
        Self::InvalidConfiguration {
            message: message.into(),
        }
    }
}
