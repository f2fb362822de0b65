//! Trajectory projection: the continuous motion model behind each ball.
//!
//! A [`Projection`] carries a point from a start position toward a vertical
//! arrival line at `dest_x` and owns the one discrete transition in a
//! ball's life: *arrival*. The approach is constant-velocity linear motion
//! along the unit heading; what happens at the line depends on the bounce
//! policy:
//!
//! - **Bounce** (the default): the point snaps to its resting position on
//!   the line and stays there while *progress* accumulates.
//! - **No bounce** (failed events, set permanently via
//!   [`Projection::disable_bounce`]): the point keeps translating along
//!   its original heading past the line forever, accumulating progress
//!   all the while.
//!
//! Progress is elapsed time since arrival divided by [`DECAY_DURATION`].
//! It is meaningless before arrival (reported as 0.0), monotonically
//! non-decreasing after, and unbounded above 1.0 - every consumer clamps
//! for its own purpose.
//!
//! The `eta` parameter bounds the approach duration: the effective speed
//! is raised to `distance / eta` when the configured speed would take
//! longer. That keeps slow balls from dawdling offscreen without
//! affecting anything post-arrival.

use glam::Vec2;

/// Progress accumulates in units of this many seconds after arrival.
pub const DECAY_DURATION: f32 = 1.0;

/// Default arrival window in seconds. Purely cosmetic tuning; controls
/// how springy the approach looks, never post-arrival behaviour.
pub const DEFAULT_ETA: f32 = 5.0;

/// Time-parameterized point travelling toward an arrival line.
#[derive(Debug, Clone)]
pub struct Projection {
    position: Vec2,
    velocity: Vec2,
    dest_x: f32,
    speed: f32,
    resting: Vec2,
    bounce: bool,
    arrived: bool,
    /// Seconds since arrival. Only meaningful once `arrived`.
    since_arrival: f32,
}

impl Projection {
    /// Set up a projection from `start` along the unit heading `velocity`
    /// toward the vertical line at `dest_x`.
    ///
    /// `velocity` must already be normalized; `speed` and `eta` must be
    /// finite and positive (validated by [`Ball::new`](crate::Ball::new)).
    pub fn new(start: Vec2, velocity: Vec2, dest_x: f32, eta: f32, speed: f32) -> Self {
        // Distance along the heading to the arrival line. A heading
        // parallel to the line never crosses it; treat that as already
        // at rest so the state machine stays well defined.
        let travel = if velocity.x.abs() > f32::EPSILON {
            (dest_x - start.x) / velocity.x
        } else {
            0.0
        };

        // Guarantee arrival within eta seconds.
        let speed = speed.max(travel.abs() / eta);

        let resting = start + velocity * travel.max(0.0);
        let arrived = travel <= 0.0;

        Self {
            position: if arrived { resting } else { start },
            velocity,
            dest_x,
            speed,
            resting,
            bounce: true,
            arrived,
            since_arrival: 0.0,
        }
    }

    /// Permanently switch to pass-through behaviour at the arrival line.
    ///
    /// There is no re-enable path; failed events stay no-bounce for life.
    pub fn disable_bounce(&mut self) {
        self.bounce = false;
    }

    /// Advance the motion model by `dt` seconds.
    pub fn advance(&mut self, dt: f32) {
        if self.arrived {
            self.since_arrival += dt;
            if !self.bounce {
                self.position += self.velocity * self.speed * dt;
            }
            return;
        }

        self.position += self.velocity * self.speed * dt;

        let crossed = if self.velocity.x >= 0.0 {
            self.position.x >= self.dest_x
        } else {
            self.position.x <= self.dest_x
        };

        if crossed {
            self.arrived = true;
            if self.bounce {
                self.position = self.resting;
            }
        }
    }

    /// Whether the arrival transition has happened (bounce or the start
    /// of pass-through).
    #[inline]
    pub fn has_arrived(&self) -> bool {
        self.arrived
    }

    /// Whether this projection settles in place at the line.
    #[inline]
    pub fn bounces(&self) -> bool {
        self.bounce
    }

    /// Normalized time since arrival, in units of [`DECAY_DURATION`].
    ///
    /// 0.0 before arrival; unbounded above 1.0 - clamp per use.
    #[inline]
    pub fn progress(&self) -> f32 {
        self.since_arrival / DECAY_DURATION
    }

    /// Current position.
    #[inline]
    pub fn position(&self) -> Vec2 {
        self.position
    }

    /// Unit heading from start toward the arrival line.
    #[inline]
    pub fn velocity(&self) -> Vec2 {
        self.velocity
    }

    /// Effective speed along the heading, after the eta adjustment.
    #[inline]
    pub fn speed(&self) -> f32 {
        self.speed
    }

    /// The point this projection settles at on the arrival line.
    ///
    /// Fixed at construction; pass-through drift never moves it. Used as
    /// the anchor for labels that must not chase a flying ball.
    #[inline]
    pub fn resting_position(&self) -> Vec2 {
        self.resting
    }
}
