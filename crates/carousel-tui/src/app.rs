//! Application loop: terminal events in, carousel navigation out.
//!
//! Keys become actions, navigation actions become carousel calls, and the
//! resulting state comes back through the bridge as `CarouselUpdated` for
//! the view to draw. The view never reads the carousel directly.

use std::time::Duration;

use carousel_core::{Carousel, CarouselError};
use color_eyre::eyre::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::Frame;
use tokio::sync::mpsc;
use tokio_util::sync::CancellationToken;
use tracing::{info, warn};

use crate::action::Action;
use crate::component::Component;
use crate::event::{Event, EventReader};
use crate::tui::Tui;
use crate::view::ConsoleView;

pub struct App {
    carousel: Carousel,
    view: ConsoleView,
    running: bool,
    action_tx: mpsc::UnboundedSender<Action>,
    action_rx: mpsc::UnboundedReceiver<Action>,
    bridge_cancel: CancellationToken,
}

impl App {
    pub fn new(carousel: Carousel) -> Self {
        let (action_tx, action_rx) = mpsc::unbounded_channel();
        let view = ConsoleView::new(carousel.snapshot());
        Self {
            carousel,
            view,
            running: true,
            action_tx,
            action_rx,
            bridge_cancel: CancellationToken::new(),
        }
    }

    /// Run the TUI until the user quits.
    pub async fn run(&mut self) -> Result<()> {
        let mut tui = Tui::new(self.carousel.slides())?;
        tui.enter()?;
        self.view.init(self.action_tx.clone())?;

        let bridge = tokio::spawn(crate::bridge::run_carousel_bridge(
            self.carousel.subscribe(),
            self.action_tx.clone(),
            self.bridge_cancel.clone(),
        ));

        let mut events = EventReader::new(Duration::from_millis(33)); // ~30 FPS render

        info!(
            view = self.view.id(),
            slides = self.view.snapshot().slide_count(),
            "TUI event loop started"
        );

        while self.running {
            // 1. Wait for the next event
            let Some(event) = events.next().await else {
                break;
            };

            // 2. Map event → action
            match event {
                Event::Key(key) => {
                    if let Some(action) = self.handle_key_event(key)? {
                        self.action_tx.send(action)?;
                    }
                }
                Event::Resize(w, h) => {
                    self.action_tx.send(Action::Resize(w, h))?;
                }
                Event::Render => {
                    self.action_tx.send(Action::Render)?;
                }
            }

            // 3. Drain and process all queued actions
            while let Ok(action) = self.action_rx.try_recv() {
                self.process_action(&action)?;

                if let Action::Render = action {
                    tui.draw(|frame| self.render(frame))?;
                }
            }
        }

        self.bridge_cancel.cancel();
        events.stop();
        let _ = bridge.await;
        info!("TUI event loop ended");
        Ok(())
    }

    /// Map a key event to an action. Quit keys are global; everything
    /// else is delegated to the view.
    fn handle_key_event(&mut self, key: KeyEvent) -> Result<Option<Action>> {
        match key.code {
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                Ok(Some(Action::Quit))
            }
            KeyCode::Char('q') | KeyCode::Esc => Ok(Some(Action::Quit)),
            _ => self.view.handle_key_event(key),
        }
    }

    fn process_action(&mut self, action: &Action) -> Result<()> {
        match action {
            Action::Quit => self.running = false,
            Action::NextSlide => self.navigate("next", self.carousel.next())?,
            Action::PreviousSlide => self.navigate("previous", self.carousel.previous())?,
            Action::GoToSlide(index) => self.navigate("go_to", self.carousel.go_to(*index))?,
            Action::Render | Action::Resize(..) => {}
            Action::CarouselUpdated(_) | Action::NotifyError(_) => {
                if let Some(follow_up) = self.view.update(action)? {
                    self.action_tx.send(follow_up)?;
                }
            }
        }
        Ok(())
    }

    /// Surface a rejected navigation in the status line.
    fn navigate(&self, op: &'static str, result: Result<(), CarouselError>) -> Result<()> {
        if let Err(e) = result {
            warn!(op, error = %e, "navigation rejected");
            self.action_tx.send(Action::NotifyError(e.to_string()))?;
        }
        Ok(())
    }

    fn render(&self, frame: &mut Frame) {
        self.view.render(frame, frame.area());
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use carousel_core::{CarouselConfig, CarouselPhase, Slide};

    use super::*;

    fn app(n: usize) -> App {
        let slides = (0..n)
            .map(|i| Slide::new(format!("s{i}"), "", ["llms ls"]))
            .collect();
        App::new(Carousel::from_slides(slides, CarouselConfig::default()).unwrap())
    }

    #[tokio::test(start_paused = true)]
    async fn navigation_actions_drive_the_carousel() {
        let mut app = app(3);
        app.process_action(&Action::NextSlide).unwrap();
        assert_eq!(app.carousel.state().current_index(), 1);
        assert_eq!(app.carousel.state().phase(), CarouselPhase::Manual);

        app.process_action(&Action::PreviousSlide).unwrap();
        app.process_action(&Action::PreviousSlide).unwrap();
        assert_eq!(app.carousel.state().current_index(), 2);

        app.process_action(&Action::GoToSlide(0)).unwrap();
        assert_eq!(app.carousel.state().current_index(), 0);
        assert!(app.action_rx.try_recv().is_err());
    }

    #[tokio::test(start_paused = true)]
    async fn out_of_range_jump_becomes_notification() {
        let mut app = app(3);
        app.process_action(&Action::GoToSlide(8)).unwrap();

        assert_eq!(app.carousel.state().current_index(), 0);
        assert!(app.carousel.state().auto_playing());
        match app.action_rx.try_recv().unwrap() {
            Action::NotifyError(msg) => assert!(msg.contains("out of range"), "{msg}"),
            other => panic!("expected NotifyError, got {other:?}"),
        }
    }

    #[tokio::test(start_paused = true)]
    async fn disposed_carousel_reports_invalid_state() {
        let mut app = app(2);
        app.carousel.dispose().unwrap();
        app.process_action(&Action::NextSlide).unwrap();
        match app.action_rx.try_recv().unwrap() {
            Action::NotifyError(msg) => assert!(msg.contains("disposed"), "{msg}"),
            other => panic!("expected NotifyError, got {other:?}"),
        }
    }

    #[tokio::test(start_paused = true)]
    async fn quit_keys() {
        let mut app = app(2);
        for key in [
            KeyEvent::new(KeyCode::Char('q'), KeyModifiers::NONE),
            KeyEvent::new(KeyCode::Esc, KeyModifiers::NONE),
            KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL),
        ] {
            assert!(matches!(
                app.handle_key_event(key).unwrap(),
                Some(Action::Quit)
            ));
        }
        app.process_action(&Action::Quit).unwrap();
        assert!(!app.running);
    }

    #[tokio::test(start_paused = true)]
    async fn carousel_updates_reach_the_view() {
        let mut app = app(3);
        app.carousel.go_to(2).unwrap();
        app.process_action(&Action::CarouselUpdated(app.carousel.snapshot()))
            .unwrap();
        assert_eq!(app.view.snapshot().current_index(), 2);
    }
}
