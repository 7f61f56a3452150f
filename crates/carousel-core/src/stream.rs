// ── Carousel change streams ──
//
// Subscription types for renderers. Every applied transition bumps the
// watch channel, so a subscriber wakes once per mutation it has not yet
// observed (intermediate states may coalesce if it falls behind).

use std::pin::Pin;
use std::task::{Context, Poll};

use futures_core::Stream;
use tokio::sync::watch;
use tokio_stream::wrappers::WatchStream;

use crate::slide::SlideSet;
use crate::snapshot::CarouselSnapshot;
use crate::state::CarouselState;

/// A subscription to one carousel's state.
///
/// Provides both point-in-time snapshot access and change notification
/// via [`changed()`](Self::changed) or by converting to a `Stream`.
pub struct CarouselStream {
    current: CarouselSnapshot,
    slides: SlideSet,
    receiver: watch::Receiver<CarouselState>,
}

impl CarouselStream {
    pub(crate) fn new(slides: SlideSet, mut receiver: watch::Receiver<CarouselState>) -> Self {
        let state = *receiver.borrow_and_update();
        Self {
            current: CarouselSnapshot::new(slides.clone(), state),
            slides,
            receiver,
        }
    }

    /// The snapshot most recently observed by this subscription.
    pub fn current(&self) -> &CarouselSnapshot {
        &self.current
    }

    /// The latest snapshot (may have changed since it was last observed).
    pub fn latest(&self) -> CarouselSnapshot {
        CarouselSnapshot::new(self.slides.clone(), *self.receiver.borrow())
    }

    /// Wait for the next change, returning the new snapshot.
    /// Returns `None` once the carousel has been dropped.
    pub async fn changed(&mut self) -> Option<CarouselSnapshot> {
        self.receiver.changed().await.ok()?;
        let state = *self.receiver.borrow_and_update();
        self.current = CarouselSnapshot::new(self.slides.clone(), state);
        Some(self.current.clone())
    }

    /// Convert into a `Stream` for use with `StreamExt` combinators.
    ///
    /// The stream yields the current snapshot first, then one item per
    /// observed change.
    pub fn into_stream(self) -> CarouselWatchStream {
        CarouselWatchStream {
            slides: self.slides,
            inner: WatchStream::new(self.receiver),
        }
    }
}

impl std::fmt::Debug for CarouselStream {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CarouselStream")
            .field("current", &self.current.state())
            .finish_non_exhaustive()
    }
}

/// `Stream` adapter backed by a `watch::Receiver`.
pub struct CarouselWatchStream {
    slides: SlideSet,
    inner: WatchStream<CarouselState>,
}

impl Stream for CarouselWatchStream {
    type Item = CarouselSnapshot;

    fn poll_next(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Option<Self::Item>> {
        // Both fields are Unpin, so projecting through `get_mut` is fine.
        let this = self.get_mut();
        Pin::new(&mut this.inner)
            .poll_next(cx)
            .map(|state| state.map(|state| CarouselSnapshot::new(this.slides.clone(), state)))
    }
}
