//! # bounce - request-event particle animation
//!
//! Animate discrete events (individual network requests) as balls that
//! fly from a source point to a destination line, bounce or streak past
//! depending on outcome, flash a glow on arrival, and decay away.
//!
//! The crate is the CPU side of a log visualizer: motion, state and
//! decay math, plus hit-testing for interactive inspection. Actual
//! pixels go through three narrow traits ([`Canvas2D`], [`TextRenderer`],
//! [`Inspectable`]) the host application implements; recording
//! implementations of all three ship with the crate for tests and
//! headless use.
//!
//! ## Quick Start
//!
//! ```ignore
//! use bounce::prelude::*;
//!
//! let mut stage = Stage::new();
//! let mut clock = FrameClock::new();
//! let visuals = Visuals::default();
//!
//! let event = EventRecord::new("/index.html", "200", 0.042)
//!     .hostname("203.0.113.7")
//!     .colour(Vec3::new(0.2, 0.8, 0.3));
//!
//! stage.spawn(Ball::new(
//!     event,
//!     Vec2::new(-300.0, 240.0), // offscreen left
//!     Vec2::new(0.0, 240.0),    // the arrival line
//!     400.0,
//! )?);
//!
//! loop {
//!     let dt = clock.tick();
//!     let newly_visible = stage.advance(dt);
//!     stage.prune();
//!     stage.draw(&mut canvas, &mut text, &visuals);
//! }
//! ```
//!
//! ## Core Concepts
//!
//! ### Balls and events
//!
//! An [`EventRecord`] is the immutable data behind one event: latencies,
//! status code, success flag, tint, descriptive strings. A [`Ball`] takes
//! exclusive ownership of its record at construction and derives its
//! visual size (log scale of latency, floored at 12 units) and tint from
//! it once.
//!
//! ### Arrival: bounce vs pass-through
//!
//! Every ball aims at a vertical line. Successful events *bounce*: they
//! settle at the crossing point and decay in place. Failed events never
//! bounce - they streak past the line forever, a reading convention that
//! separates "landed but errored" from "never landed" at a glance.
//!
//! ### Progress and decay
//!
//! After arrival a dimensionless *progress* signal rises monotonically
//! and drives every decay curve: the glow flash (gone by progress 0.15
//! with default tuning), the drifting status label (faded by 0.5), and
//! the [`Ball::expired`] removal predicate (1.0).
//!
//! ### Presentation config
//!
//! [`Visuals`] holds the process-wide toggles - glow on/off and tuning,
//! whether bounced balls stay visible. It is a plain value passed to the
//! draw calls, so tests can run any combination deterministically.

pub mod ball;
pub mod error;
pub mod event;
pub mod glow;
pub mod inspect;
pub mod overlay;
pub mod render;
pub mod stage;
pub mod time;
pub mod trajectory;
pub mod visuals;

pub use ball::Ball;
pub use error::BallError;
pub use event::EventRecord;
pub use glow::GlowFootprint;
pub use overlay::Overlay;
pub use render::{Canvas2D, Inspectable, TextRenderer};
pub use stage::Stage;
pub use time::FrameClock;
pub use trajectory::Projection;
pub use visuals::Visuals;

/// Convenient re-exports for common usage.
///
/// ```ignore
/// use bounce::prelude::*;
/// ```
pub mod prelude {
    pub use crate::ball::Ball;
    pub use crate::error::BallError;
    pub use crate::event::EventRecord;
    pub use crate::glow::GlowFootprint;
    pub use crate::overlay::Overlay;
    pub use crate::render::{
        Canvas2D, Inspectable, RecordingCanvas, RecordingText, RecordingTooltip, TextRenderer,
    };
    pub use crate::stage::Stage;
    pub use crate::time::FrameClock;
    pub use crate::trajectory::Projection;
    pub use crate::visuals::Visuals;
    pub use glam::{Vec2, Vec3};
}
