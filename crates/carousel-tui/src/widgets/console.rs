//! Console window body: one styled line per slide command.

use carousel_core::{CommandLine, Slide};
use ratatui::text::{Line, Span};

use crate::theme;

const PROMPT: &str = "$ ";

/// Render a classified command line.
///
/// Comments and executables get a `$` prompt; blank lines stay empty.
pub fn command_line(line: CommandLine<'_>) -> Line<'_> {
    if !line.has_prompt() {
        return Line::default();
    }
    Line::from(vec![
        Span::styled(PROMPT, theme::prompt()),
        Span::styled(line.text(), theme::line_text(line.kind())),
    ])
}

/// All command lines of a slide, in order.
pub fn console_lines(slide: &Slide) -> Vec<Line<'_>> {
    slide.lines().map(command_line).collect()
}
