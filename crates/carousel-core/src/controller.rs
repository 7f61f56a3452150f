// ── Carousel controller ──
//
// Owns the presentation state and the autoplay timer for one slide set.
// All transitions funnel through the watch sender's modify call, which
// serializes them and notifies subscribers in the same step.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError, Weak};
use std::time::Duration;

use tokio::sync::watch;
use tokio::task::JoinHandle;
use tokio::time::MissedTickBehavior;
use tokio_util::sync::CancellationToken;
use tracing::{debug, info};

use crate::config::CarouselConfig;
use crate::error::CarouselError;
use crate::slide::{Slide, SlideSet};
use crate::snapshot::CarouselSnapshot;
use crate::state::CarouselState;
use crate::stream::CarouselStream;

// ── Carousel ─────────────────────────────────────────────────────

/// The main entry point for renderers.
///
/// Cheaply cloneable via `Arc<CarouselInner>`. The autoplay timer holds
/// only a weak reference, so dropping the last handle releases it even
/// if [`dispose()`](Self::dispose) was never called.
#[derive(Clone)]
pub struct Carousel {
    inner: Arc<CarouselInner>,
}

struct CarouselInner {
    slides: SlideSet,
    config: CarouselConfig,
    state: watch::Sender<CarouselState>,
    cancel: CancellationToken,
    timer: Mutex<Option<JoinHandle<()>>>,
}

impl Carousel {
    /// Build a carousel and start its autoplay timer.
    ///
    /// Must be called from within a Tokio runtime. Fails with
    /// [`CarouselError::InvalidConfiguration`] for a zero interval; in that
    /// case no timer is started.
    pub fn start(slides: SlideSet, config: CarouselConfig) -> Result<Self, CarouselError> {
        config.validate()?;

        let (state, _) = watch::channel(CarouselState::initial());
        let inner = Arc::new(CarouselInner {
            slides,
            config,
            state,
            cancel: CancellationToken::new(),
            timer: Mutex::new(None),
        });

        let handle = tokio::spawn(autoplay_task(
            Arc::downgrade(&inner),
            config.interval,
            inner.cancel.clone(),
        ));
        *lock_timer(&inner.timer) = Some(handle);

        info!(
            slides = inner.slides.len(),
            interval_ms = u64::try_from(config.interval.as_millis()).unwrap_or(u64::MAX),
            "carousel started"
        );
        Ok(Self { inner })
    }

    /// Convenience: validate a raw slide list and start.
    pub fn from_slides(slides: Vec<Slide>, config: CarouselConfig) -> Result<Self, CarouselError> {
        Self::start(SlideSet::new(slides)?, config)
    }

    pub fn slides(&self) -> &SlideSet {
        &self.inner.slides
    }

    pub fn config(&self) -> &CarouselConfig {
        &self.inner.config
    }

    pub fn interval(&self) -> Duration {
        self.inner.config.interval
    }

    // ── Transitions ──────────────────────────────────────────────

    /// Timer-driven advance. No-op once the viewer has navigated manually.
    ///
    /// Normally invoked by the autoplay timer only.
    pub fn tick(&self) -> Result<(), CarouselError> {
        self.transition("tick", CarouselState::tick)
    }

    /// Show the next slide (wrapping) and stop autoplay.
    pub fn next(&self) -> Result<(), CarouselError> {
        self.transition("next", CarouselState::next)
    }

    /// Show the previous slide (wrapping) and stop autoplay.
    pub fn previous(&self) -> Result<(), CarouselError> {
        self.transition("previous", CarouselState::previous)
    }

    /// Jump to `index` and stop autoplay.
    ///
    /// Out-of-range indices are rejected, not clamped.
    pub fn go_to(&self, index: usize) -> Result<(), CarouselError> {
        self.transition("go_to", |state, len| state.go_to(index, len))
    }

    /// Release the timer and make the carousel terminal.
    ///
    /// Once this returns no further tick can mutate state. Every later
    /// mutator call, including a second `dispose`, fails with
    /// [`CarouselError::InvalidState`].
    pub fn dispose(&self) -> Result<(), CarouselError> {
        self.transition("dispose", |state, _| state.dispose())?;
        self.inner.cancel.cancel();
        if let Some(handle) = lock_timer(&self.inner.timer).as_ref() {
            handle.abort();
        }
        info!("carousel disposed");
        Ok(())
    }

    /// Dispose (if still live) and wait for the timer task to finish.
    ///
    /// Idempotent; intended for the owning scope's teardown path.
    pub async fn shutdown(&self) {
        if !self.is_disposed() {
            // Losing a race with a concurrent dispose is fine here.
            let _ = self.dispose();
        }
        let handle = lock_timer(&self.inner.timer).take();
        if let Some(handle) = handle {
            let _ = handle.await;
            debug!("autoplay timer joined");
        }
    }

    // ── State observation ────────────────────────────────────────

    pub fn state(&self) -> CarouselState {
        *self.inner.state.borrow()
    }

    pub fn snapshot(&self) -> CarouselSnapshot {
        CarouselSnapshot::new(self.inner.slides.clone(), self.state())
    }

    pub fn is_disposed(&self) -> bool {
        self.state().is_disposed()
    }

    /// Subscribe to state changes. Subscribers are woken after every
    /// applied transition, including disposal.
    pub fn subscribe(&self) -> CarouselStream {
        CarouselStream::new(self.inner.slides.clone(), self.inner.state.subscribe())
    }

    // ── Helpers ──────────────────────────────────────────────────

    /// Apply one transition atomically, notifying subscribers only if
    /// the state actually changed.
    fn transition<F>(&self, op: &'static str, apply: F) -> Result<(), CarouselError>
    where
        F: FnOnce(&mut CarouselState, usize) -> Result<bool, CarouselError>,
    {
        let len = self.inner.slides.len();
        let mut outcome = Ok(());

        self.inner.state.send_if_modified(|state| match apply(state, len) {
            Ok(changed) => {
                if changed {
                    debug!(
                        op,
                        index = state.current_index(),
                        phase = %state.phase(),
                        "carousel transition"
                    );
                }
                changed
            }
            Err(e) => {
                debug!(op, error = %e, "carousel transition rejected");
                outcome = Err(e);
                false
            }
        });

        outcome
    }
}

impl std::fmt::Debug for Carousel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Carousel")
            .field("slides", &self.inner.slides.len())
            .field("interval", &self.inner.config.interval)
            .field("state", &self.state())
            .finish()
    }
}

impl Drop for CarouselInner {
    fn drop(&mut self) {
        self.cancel.cancel();
        let slot = self.timer.get_mut().unwrap_or_else(PoisonError::into_inner);
        if let Some(handle) = slot.take() {
            handle.abort();
        }
    }
}

fn lock_timer(timer: &Mutex<Option<JoinHandle<()>>>) -> MutexGuard<'_, Option<JoinHandle<()>>> {
    timer.lock().unwrap_or_else(PoisonError::into_inner)
}

// ── Background tasks ─────────────────────────────────────────────

/// Tick the carousel every `period` until cancelled, disposed, or dropped.
async fn autoplay_task(carousel: Weak<CarouselInner>, period: Duration, cancel: CancellationToken) {
    let mut interval = tokio::time::interval(period);
    interval.set_missed_tick_behavior(MissedTickBehavior::Skip);
    interval.tick().await; // consume the immediate first tick

    loop {
        tokio::select! {
            biased;
            () = cancel.cancelled() => break,
            _ = interval.tick() => {
                let Some(inner) = carousel.upgrade() else { break };
                if let Err(e) = (Carousel { inner }).tick() {
                    debug!(error = %e, "autoplay tick rejected");
                    break;
                }
            }
        }
    }

    debug!("autoplay timer released");
}
