//! Carousel controls row: prev arrow, one dot per slide, next arrow.

use ratatui::text::{Line, Span};

use crate::theme;

pub const PREV_ARROW: &str = "‹";
pub const NEXT_ARROW: &str = "›";
const DOT_ACTIVE: &str = "●";
const DOT_INACTIVE: &str = "○";

/// Renders a row of slide dots with the active one highlighted.
pub fn render_dots(count: usize, active_index: usize) -> Line<'static> {
    let mut spans = Vec::with_capacity(count * 2);

    for i in 0..count {
        if i > 0 {
            spans.push(Span::raw(" "));
        }

        if i == active_index {
            spans.push(Span::styled(DOT_ACTIVE, theme::dot_active()));
        } else {
            spans.push(Span::styled(DOT_INACTIVE, theme::dot_inactive()));
        }
    }

    Line::from(spans)
}

/// The full controls row: `‹  ○ ● ○  ›`.
pub fn render_controls(count: usize, active_index: usize) -> Line<'static> {
    let mut spans = vec![
        Span::styled(PREV_ARROW, theme::arrow()),
        Span::raw("  "),
    ];
    spans.extend(render_dots(count, active_index).spans);
    spans.push(Span::raw("  "));
    spans.push(Span::styled(NEXT_ARROW, theme::arrow()));
    Line::from(spans)
}
