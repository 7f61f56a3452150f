// ── Carousel configuration ──
//
// Construction-time options. The interval is fixed for the lifetime of a
// carousel; a different cadence means building a new one.

use std::time::Duration;

use crate::error::CarouselError;

/// Autoplay cadence used when none is configured.
pub const DEFAULT_INTERVAL: Duration = Duration::from_millis(10_000);

/// Options for [`Carousel::start`](crate::Carousel::start).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CarouselConfig {
    /// Time between autoplay ticks. Must be non-zero.
    pub interval: Duration,
}

impl Default for CarouselConfig {
    fn default() -> Self {
        Self {
            interval: DEFAULT_INTERVAL,
        }
    }
}

impl CarouselConfig {
    pub fn with_interval(interval: Duration) -> Self {
        Self { interval }
    }

    pub fn from_millis(interval_ms: u64) -> Self {
        Self::with_interval(Duration::from_millis(interval_ms))
    }

    pub fn validate(&self) -> Result<(), CarouselError> {
        if self.interval.is_zero() {
            return Err(CarouselError::invalid_configuration(
                "autoplay interval must be greater than zero",
            ));
        }
        Ok(())
    }
}
