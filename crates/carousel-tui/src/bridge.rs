//! Carousel bridge: connects a [`CarouselStream`] to TUI actions.
//!
//! Runs as a background task, forwarding every carousel state change as an
//! [`Action::CarouselUpdated`] through the TUI's action channel.

use tokio::sync::mpsc;
use tokio_util::sync::CancellationToken;
use tracing::debug;

use carousel_core::CarouselStream;

use crate::action::Action;

/// Forward carousel snapshots to the app until cancelled or the carousel
/// is dropped.
///
/// Sends the current snapshot immediately so the view never starts stale.
pub async fn run_carousel_bridge(
    mut stream: CarouselStream,
    action_tx: mpsc::UnboundedSender<Action>,
    cancel: CancellationToken,
) {
    if action_tx
        .send(Action::CarouselUpdated(stream.current().clone()))
        .is_err()
    {
        debug!("action channel closed before first snapshot");
        return;
    }

    loop {
        tokio::select! {
            biased;

            () = cancel.cancelled() => break,

            changed = stream.changed() => {
                let Some(snapshot) = changed else { break };
                debug!(
                    index = snapshot.current_index(),
                    phase = %snapshot.phase(),
                    "Dispatching CarouselUpdated"
                );
                if action_tx.send(Action::CarouselUpdated(snapshot)).is_err() {
                    break;
                }
            }
        }
    }

    debug!("carousel bridge shut down");
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use std::time::Duration;

    use carousel_core::{Carousel, CarouselConfig, CarouselPhase, Slide};

    use super::*;

    fn carousel() -> Carousel {
        Carousel::from_slides(
            vec![Slide::new("a", "", ["x"]), Slide::new("b", "", ["y"])],
            CarouselConfig::with_interval(Duration::from_secs(5)),
        )
        .unwrap()
    }

    fn index_of(action: Action) -> usize {
        match action {
            Action::CarouselUpdated(snap) => snap.current_index(),
            other => panic!("expected CarouselUpdated, got {other:?}"),
        }
    }

    #[tokio::test(start_paused = true)]
    async fn forwards_initial_and_changed_snapshots() {
        let carousel = carousel();
        let (tx, mut rx) = mpsc::unbounded_channel();
        let cancel = CancellationToken::new();
        let task = tokio::spawn(run_carousel_bridge(carousel.subscribe(), tx, cancel.clone()));

        assert_eq!(index_of(rx.recv().await.unwrap()), 0);

        // Autoplay tick after one interval
        assert_eq!(index_of(rx.recv().await.unwrap()), 1);

        carousel.next().unwrap();
        match rx.recv().await.unwrap() {
            Action::CarouselUpdated(snap) => {
                assert_eq!(snap.current_index(), 0);
                assert_eq!(snap.phase(), CarouselPhase::Manual);
            }
            other => panic!("expected CarouselUpdated, got {other:?}"),
        }

        cancel.cancel();
        task.await.unwrap();
    }

    #[tokio::test(start_paused = true)]
    async fn stops_when_carousel_dropped() {
        let carousel = carousel();
        let (tx, mut rx) = mpsc::unbounded_channel();
        let task = tokio::spawn(run_carousel_bridge(
            carousel.subscribe(),
            tx,
            CancellationToken::new(),
        ));

        assert_eq!(index_of(rx.recv().await.unwrap()), 0);
        drop(carousel);
        task.await.unwrap();
        assert!(rx.recv().await.is_none());
    }

    #[tokio::test(start_paused = true)]
    async fn returns_immediately_when_app_is_gone() {
        let carousel = carousel();
        // Manual mode: ticks are no-ops, so no change would ever wake the loop.
        carousel.next().unwrap();

        let (tx, rx) = mpsc::unbounded_channel();
        drop(rx);
        let task = tokio::spawn(run_carousel_bridge(
            carousel.subscribe(),
            tx,
            CancellationToken::new(),
        ));

        tokio::time::timeout(Duration::from_secs(60), task)
            .await
            .expect("bridge should exit when the action channel is closed")
            .unwrap();
    }
}
