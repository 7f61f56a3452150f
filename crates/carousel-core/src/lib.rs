// carousel-core: Slide carousel state machine between slide content and renderers.

pub mod command;
pub mod config;
pub mod controller;
pub mod error;
pub mod slide;
pub mod snapshot;
pub mod state;
pub mod stream;

// ── Primary re-exports ──────────────────────────────────────────────
pub use command::{CommandLine, LineKind, classify};
pub use config::{CarouselConfig, DEFAULT_INTERVAL};
pub use controller::Carousel;
pub use error::CarouselError;
pub use slide::{Slide, SlideSet};
pub use snapshot::CarouselSnapshot;
pub use state::{CarouselPhase, CarouselState};
pub use stream::{CarouselStream, CarouselWatchStream};
