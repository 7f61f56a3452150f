//! All possible UI actions. Actions are the sole mechanism for state mutation.

use carousel_core::CarouselSnapshot;

/// Every state transition in the TUI is expressed as an Action.
#[derive(Debug, Clone)]
pub enum Action {
    // ── Lifecycle ──────────────────────────────────────────────────
    Quit,
    Render,
    Resize(u16, u16),

    // ── Navigation (forwarded to the carousel) ─────────────────────
    NextSlide,
    PreviousSlide,
    GoToSlide(usize),

    // ── Data Events (from the carousel stream) ─────────────────────
    CarouselUpdated(CarouselSnapshot),

    // ── UI ─────────────────────────────────────────────────────────
    /// Show a rejected-operation message in the status line.
    NotifyError(String),
}
