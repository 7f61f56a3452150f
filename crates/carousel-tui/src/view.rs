//! Console carousel view: header, terminal window, dot controls and status line.
//!
//! Holds only the last snapshot received from the carousel stream.
//! Navigation keys become actions; the app forwards them to the carousel
//! and the resulting change arrives back here as `CarouselUpdated`.

use carousel_core::{CarouselPhase, CarouselSnapshot};
use color_eyre::eyre::Result;
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Block, Paragraph, Wrap},
};

use crate::action::Action;
use crate::component::Component;
use crate::theme;
use crate::widgets::{console, dots};

pub struct ConsoleView {
    snapshot: CarouselSnapshot,
    notice: Option<String>,
}

impl ConsoleView {
    pub fn new(snapshot: CarouselSnapshot) -> Self {
        Self {
            snapshot,
            notice: None,
        }
    }

    pub fn snapshot(&self) -> &CarouselSnapshot {
        &self.snapshot
    }

    fn header(&self) -> Paragraph<'_> {
        let slide = self.snapshot.current_slide();
        Paragraph::new(vec![
            Line::styled(slide.title.as_str(), theme::title_style()),
            Line::styled(slide.description.as_str(), theme::description()),
        ])
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true })
    }

    fn console_window(&self) -> Paragraph<'_> {
        let buttons: Vec<Span<'static>> = theme::WINDOW_BUTTONS
            .iter()
            .map(|&color| Span::styled("● ", Style::default().fg(color)))
            .collect();

        let block = Block::bordered()
            .border_style(theme::border_default())
            .title(Line::styled(" Terminal ", theme::title_style()))
            .title(Line::from(buttons).right_aligned());

        Paragraph::new(console::console_lines(self.snapshot.current_slide())).block(block)
    }

    fn status_line(&self) -> Line<'_> {
        if let Some(ref notice) = self.notice {
            return Line::styled(notice.as_str(), theme::notice_error());
        }

        let (label, style) = match self.snapshot.phase() {
            CarouselPhase::Autoplaying => ("autoplay", theme::status_autoplay()),
            CarouselPhase::Manual => ("manual", theme::status_manual()),
            CarouselPhase::Disposed => ("stopped", theme::status_manual()),
        };

        Line::from(vec![
            Span::styled(label, style),
            Span::styled(
                format!(
                    "  {}/{}   ",
                    self.snapshot.current_index() + 1,
                    self.snapshot.slide_count()
                ),
                theme::key_hint(),
            ),
            Span::styled("←/→", theme::key_hint_key()),
            Span::styled(" navigate  ", theme::key_hint()),
            Span::styled("1-9", theme::key_hint_key()),
            Span::styled(" jump  ", theme::key_hint()),
            Span::styled("q", theme::key_hint_key()),
            Span::styled(" quit", theme::key_hint()),
        ])
    }
}

impl Component for ConsoleView {
    fn handle_key_event(&mut self, key: KeyEvent) -> Result<Option<Action>> {
        let action = match key.code {
            KeyCode::Right | KeyCode::Char('l') => Some(Action::NextSlide),
            KeyCode::Left | KeyCode::Char('h') => Some(Action::PreviousSlide),
            KeyCode::Char(c @ '1'..='9') => c
                .to_digit(10)
                .and_then(|d| usize::try_from(d).ok())
                .map(|d| Action::GoToSlide(d - 1)),
            _ => None,
        };
        Ok(action)
    }

    fn update(&mut self, action: &Action) -> Result<Option<Action>> {
        match action {
            Action::CarouselUpdated(snapshot) => {
                self.snapshot = snapshot.clone();
                self.notice = None;
            }
            Action::NotifyError(message) => {
                self.notice = Some(message.clone());
            }
            _ => {}
        }
        Ok(None)
    }

    fn render(&self, frame: &mut Frame, area: Rect) {
        let [header, window, controls, status] = Layout::vertical([
            Constraint::Length(3),
            Constraint::Min(3),
            Constraint::Length(1),
            Constraint::Length(1),
        ])
        .areas(area);

        frame.render_widget(self.header(), header);
        frame.render_widget(self.console_window(), window);
        frame.render_widget(
            Paragraph::new(dots::render_controls(
                self.snapshot.slide_count(),
                self.snapshot.current_index(),
            ))
            .alignment(Alignment::Center),
            controls,
        );
        frame.render_widget(Paragraph::new(self.status_line()), status);
    }

    fn id(&self) -> &str {
        "console"
    }
}
