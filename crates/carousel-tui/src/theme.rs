//! SilkCircuit Neon palette and semantic styling for the carousel.

use carousel_core::LineKind;
use ratatui::style::{Color, Modifier, Style};

// ── Core Palette ──────────────────────────────────────────────────────

pub const ELECTRIC_PURPLE: Color = Color::Rgb(225, 53, 255); // #e135ff
pub const NEON_CYAN: Color = Color::Rgb(128, 255, 234); // #80ffea
pub const ELECTRIC_YELLOW: Color = Color::Rgb(241, 250, 140); // #f1fa8c
pub const SUCCESS_GREEN: Color = Color::Rgb(80, 250, 123); // #50fa7b
pub const ERROR_RED: Color = Color::Rgb(255, 99, 99); // #ff6363

// ── Extended Palette ──────────────────────────────────────────────────

pub const DIM_WHITE: Color = Color::Rgb(189, 193, 207); // #bdc1cf
pub const BORDER_GRAY: Color = Color::Rgb(98, 114, 164); // #6272a4
pub const COMMENT_GREEN: Color = Color::Rgb(106, 153, 85); // #6a9955

// ── Semantic Styles ───────────────────────────────────────────────────

/// Slide title.
pub fn title_style() -> Style {
    Style::default().fg(NEON_CYAN).add_modifier(Modifier::BOLD)
}

/// Slide description under the title.
pub fn description() -> Style {
    Style::default().fg(DIM_WHITE)
}

/// Console window border.
pub fn border_default() -> Style {
    Style::default().fg(BORDER_GRAY)
}

/// `$` prompt before each non-blank command line.
pub fn prompt() -> Style {
    Style::default()
        .fg(ELECTRIC_PURPLE)
        .add_modifier(Modifier::BOLD)
}

/// Executable command text.
pub fn command() -> Style {
    Style::default().fg(DIM_WHITE)
}

/// `#` comment lines.
pub fn comment() -> Style {
    Style::default().fg(COMMENT_GREEN)
}

/// Text style for a console line of the given kind.
pub fn line_text(kind: LineKind) -> Style {
    match kind {
        LineKind::Blank => Style::default(),
        LineKind::Comment => comment(),
        LineKind::Executable => command(),
    }
}

/// Active slide dot.
pub fn dot_active() -> Style {
    Style::default()
        .fg(ELECTRIC_PURPLE)
        .add_modifier(Modifier::BOLD)
}

/// Inactive slide dot.
pub fn dot_inactive() -> Style {
    Style::default().fg(BORDER_GRAY)
}

/// Prev / next arrows.
pub fn arrow() -> Style {
    Style::default().fg(NEON_CYAN)
}

/// Autoplay status label.
pub fn status_autoplay() -> Style {
    Style::default().fg(SUCCESS_GREEN)
}

/// Manual / disposed status label.
pub fn status_manual() -> Style {
    Style::default().fg(ELECTRIC_YELLOW)
}

/// Error notification text.
pub fn notice_error() -> Style {
    Style::default().fg(ERROR_RED)
}

/// Key hint text (e.g., "q quit").
pub fn key_hint() -> Style {
    Style::default().fg(BORDER_GRAY)
}

/// Key hint key character.
pub fn key_hint_key() -> Style {
    Style::default().fg(NEON_CYAN).add_modifier(Modifier::BOLD)
}

/// Console window buttons: close, minimize, maximize.
pub const WINDOW_BUTTONS: [Color; 3] = [ERROR_RED, ELECTRIC_YELLOW, SUCCESS_GREEN];
