//! The ball: one event's visual journey from source to destination.
//!
//! A [`Ball`] owns its [`EventRecord`] exclusively, derives its visual
//! size and tint from it once at construction, and wires the motion model
//! to the decoration models:
//!
//! - [`advance`](Ball::advance) moves the trajectory and reports the
//!   one-shot "became visible" signal for score counters.
//! - [`draw`](Ball::draw) / [`draw_glow`](Ball::draw_glow) /
//!   [`draw_overlay`](Ball::draw_overlay) emit into the capability traits
//!   from [`render`](crate::render).
//! - [`inspect`](Ball::inspect) hit-tests a pointer and, on a hit, fills
//!   a tooltip with the event's detail block.
//!
//! Size follows a log scale of the response latency,
//! `50 * log10(seconds + 1)` floored at 12, so both instant and very slow
//! responses map to a readable range: 0s floors at 12 units, 9s is 50,
//! 99s is 100.

use crate::error::BallError;
use crate::event::EventRecord;
use crate::glow::GlowFootprint;
use crate::inspect;
use crate::overlay::Overlay;
use crate::render::{Canvas2D, Inspectable, TextRenderer};
use crate::trajectory::{Projection, DEFAULT_ETA};
use crate::visuals::Visuals;
use glam::{Vec2, Vec3};

/// Minimum visual size in units.
pub const MIN_SIZE: f32 = 12.0;

/// Log-scale factor mapping latency seconds to size units.
const SIZE_SCALE: f32 = 50.0;

/// An animated particle for a single event.
#[derive(Debug, Clone)]
pub struct Ball {
    event: EventRecord,
    projection: Projection,
    start: Vec2,
    /// Resting anchor on the arrival line, fixed at construction.
    dest: Vec2,
    size: f32,
    /// Half-size offset so quads are drawn centred on the position.
    offset: Vec2,
    colour: Vec3,
    was_visible: bool,
}

impl Ball {
    /// Create a ball for `event`, travelling from `position` toward
    /// `dest` at `speed` units per second.
    ///
    /// `dest.x` is the arrival line; the resting point is where the
    /// heading crosses it. Failed events have bouncing disabled
    /// permanently and will fly past the line instead of settling.
    ///
    /// Fails when any coordinate is non-finite, `speed` is not a
    /// positive finite number, or `position` equals `dest` (no heading).
    pub fn new(
        event: EventRecord,
        position: Vec2,
        dest: Vec2,
        speed: f32,
    ) -> Result<Self, BallError> {
        Self::with_eta(event, position, dest, speed, DEFAULT_ETA)
    }

    /// Like [`Ball::new`] with an explicit arrival window.
    ///
    /// `eta` caps the approach duration in seconds; see
    /// [`Projection::new`](crate::trajectory::Projection::new).
    pub fn with_eta(
        event: EventRecord,
        position: Vec2,
        dest: Vec2,
        speed: f32,
        eta: f32,
    ) -> Result<Self, BallError> {
        if !position.is_finite() || !dest.is_finite() {
            return Err(BallError::NonFiniteCoordinate);
        }
        if !speed.is_finite() || speed <= 0.0 {
            return Err(BallError::InvalidSpeed(speed));
        }
        if !eta.is_finite() || eta <= 0.0 {
            return Err(BallError::InvalidEta(eta));
        }

        let heading = dest - position;
        if heading.length_squared() == 0.0 {
            return Err(BallError::DegeneratePath);
        }
        let velocity = heading.normalize();

        let seconds = event.response_time.max(0.0);
        let size = (SIZE_SCALE * (seconds + 1.0).log10()).max(MIN_SIZE);

        let mut projection = Projection::new(position, velocity, dest.x, eta, speed);
        if !event.successful {
            projection.disable_bounce();
        }

        let colour = event.colour;
        let dest = projection.resting_position();
        let halfsize = size * 0.5;

        Ok(Self {
            event,
            projection,
            start: position,
            dest,
            size,
            offset: Vec2::splat(halfsize),
            colour,
            was_visible: position.x >= 0.0,
        })
    }

    /// Advance the ball by `dt` seconds.
    ///
    /// Returns true exactly on the frame where the ball crosses into the
    /// visible region (`position.x` reaching 0.0 from the left), and
    /// never again afterwards. Callers use this to increment counters.
    pub fn advance(&mut self, dt: f32) -> bool {
        self.projection.advance(dt);

        let visible = self.projection.position().x >= 0.0;
        let became_visible = visible && !self.was_visible;
        self.was_visible = self.was_visible || visible;
        became_visible
    }

    /// Draw the base quad.
    ///
    /// Bounced balls stop rendering once `visuals.always_visible` is off;
    /// no-bounce balls render for as long as they exist.
    pub fn draw(&self, canvas: &mut dyn Canvas2D, visuals: &Visuals) {
        let has_bounced = self.has_bounced();
        if visuals.always_visible || !has_bounced || !self.projection.bounces() {
            let corner = self.projection.position() - self.offset;
            canvas.fill_quad(corner, Vec2::splat(self.size), self.colour, 1.0);
        }
    }

    /// Draw the post-arrival glow flash.
    ///
    /// Emits nothing before arrival or when glow is globally disabled;
    /// the footprint is never even computed in those cases.
    pub fn draw_glow(&self, canvas: &mut dyn Canvas2D, visuals: &Visuals) {
        if !visuals.glow_enabled || !self.projection.has_arrived() {
            return;
        }

        let glow = GlowFootprint::compute(
            self.size,
            self.colour,
            self.projection.progress(),
            visuals,
        );

        let corner = self.projection.position() - Vec2::splat(glow.radius);
        canvas.fill_quad(corner, Vec2::splat(glow.radius * 2.0), glow.colour, 1.0);
    }

    /// Draw the drifting status label, when the outcome warrants one.
    pub fn draw_overlay(&self, text: &mut dyn TextRenderer) {
        let overlay = Overlay::for_event(
            &self.event,
            self.dest,
            self.projection.velocity(),
            self.projection.progress(),
        );

        if let Some(overlay) = overlay {
            for (i, line) in overlay.lines.iter().enumerate() {
                text.draw_text(overlay.line_position(i), line, overlay.colour, overlay.alpha);
            }
        }
    }

    /// Hit-test `pointer` against the ball.
    ///
    /// On a hit, fills `target` with the event's content block, moves it
    /// to the pointer and tints it with the ball colour, then returns
    /// true. On a miss returns false and leaves `target` untouched.
    pub fn inspect(&self, target: &mut dyn Inspectable, pointer: Vec2) -> bool {
        if !inspect::is_hit(self.projection.position(), pointer) {
            return false;
        }

        target.set_text(inspect::content_lines(&self.event));
        target.set_position(pointer);
        target.set_colour(self.colour);
        true
    }

    /// Whether every decay curve has finished.
    ///
    /// True once progress reaches 1.0: the glow flash and the overlay
    /// label are both long gone, so the ball has nothing left to show.
    /// The usual removal predicate for callers that prune.
    #[inline]
    pub fn expired(&self) -> bool {
        self.projection.progress() >= 1.0
    }

    /// The owned event record.
    #[inline]
    pub fn event(&self) -> &EventRecord {
        &self.event
    }

    /// Current position.
    #[inline]
    pub fn position(&self) -> Vec2 {
        self.projection.position()
    }

    /// Unit heading from start toward the destination.
    #[inline]
    pub fn velocity(&self) -> Vec2 {
        self.projection.velocity()
    }

    /// Spawn position.
    #[inline]
    pub fn start(&self) -> Vec2 {
        self.start
    }

    /// Resting anchor on the arrival line.
    #[inline]
    pub fn dest(&self) -> Vec2 {
        self.dest
    }

    /// Visual size in units (≥ [`MIN_SIZE`]).
    #[inline]
    pub fn size(&self) -> f32 {
        self.size
    }

    /// Tint colour.
    #[inline]
    pub fn colour(&self) -> Vec3 {
        self.colour
    }

    /// Whether the ball has settled on the arrival line.
    ///
    /// Always false for no-bounce balls, even after they cross the line.
    #[inline]
    pub fn has_bounced(&self) -> bool {
        self.projection.has_arrived() && self.projection.bounces()
    }

    /// Whether the arrival transition has happened (bounce or the start
    /// of pass-through).
    #[inline]
    pub fn has_arrived(&self) -> bool {
        self.projection.has_arrived()
    }

    /// Post-arrival progress; 0.0 before arrival, unbounded above 1.0.
    #[inline]
    pub fn progress(&self) -> f32 {
        self.projection.progress()
    }
}
