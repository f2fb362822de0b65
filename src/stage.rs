//! The stage: a frame-driven collection of in-flight balls.
//!
//! [`Stage`] owns every live [`Ball`] and runs the per-frame protocol for
//! the whole set: advance, draw, inspect, prune. It is deliberately thin -
//! all per-ball behaviour lives on [`Ball`] - but it is where the
//! caller-side responsibilities from the ball's contract (counting newly
//! visible balls, removing expired ones) get a concrete home.
//!
//! # Frame protocol
//!
//! ```ignore
//! let dt = clock.tick();
//! stats.hits += stage.advance(dt);       // move everything
//! stage.prune();                         // drop fully decayed balls
//! stage.draw(&mut canvas, &mut text, &visuals);
//! if let Some(pointer) = pointer {
//!     stage.inspect(&mut tooltip, pointer);
//! }
//! ```

use crate::ball::Ball;
use crate::render::{Canvas2D, Inspectable, TextRenderer};
use crate::visuals::Visuals;
use glam::Vec2;

/// Container for all in-flight balls.
#[derive(Debug, Default)]
pub struct Stage {
    balls: Vec<Ball>,
}

impl Stage {
    /// Create an empty stage.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a ball to the stage.
    pub fn spawn(&mut self, ball: Ball) {
        self.balls.push(ball);
    }

    /// Advance every ball by `dt` seconds.
    ///
    /// Returns how many balls became visible this frame, for score and
    /// rate counters.
    pub fn advance(&mut self, dt: f32) -> usize {
        self.balls
            .iter_mut()
            .map(|ball| ball.advance(dt))
            .filter(|became_visible| *became_visible)
            .count()
    }

    /// Remove every fully decayed ball; returns how many were dropped.
    ///
    /// Each removed ball takes its owned event record with it.
    pub fn prune(&mut self) -> usize {
        let before = self.balls.len();
        self.balls.retain(|ball| !ball.expired());
        before - self.balls.len()
    }

    /// Draw all balls: glow underneath, base quads on top, overlays last.
    pub fn draw(
        &self,
        canvas: &mut dyn Canvas2D,
        text: &mut dyn TextRenderer,
        visuals: &Visuals,
    ) {
        for ball in &self.balls {
            ball.draw_glow(canvas, visuals);
        }
        for ball in &self.balls {
            ball.draw(canvas, visuals);
        }
        for ball in &self.balls {
            ball.draw_overlay(text);
        }
    }

    /// Hit-test `pointer` against all balls, front to back.
    ///
    /// The first hit fills `target` and stops the scan; returns whether
    /// anything was hit.
    pub fn inspect(&self, target: &mut dyn Inspectable, pointer: Vec2) -> bool {
        self.balls
            .iter()
            .any(|ball| ball.inspect(target, pointer))
    }

    /// Number of balls currently in flight.
    #[inline]
    pub fn len(&self) -> usize {
        self.balls.len()
    }

    /// Whether the stage holds no balls.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.balls.is_empty()
    }

    /// Iterate the live balls.
    pub fn balls(&self) -> impl Iterator<Item = &Ball> {
        self.balls.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::event::EventRecord;
    use crate::render::{RecordingCanvas, RecordingText, RecordingTooltip};

    fn ball(start_x: f32, code: &str) -> Ball {
        Ball::new(
            EventRecord::new("/", code, 0.0),
            Vec2::new(start_x, 0.0),
            Vec2::new(0.0, 0.0),
            100.0,
        )
        .unwrap()
    }

    #[test]
    fn test_advance_counts_newly_visible() {
        let mut stage = Stage::new();
        stage.spawn(ball(-10.0, "200"));
        stage.spawn(ball(-50.0, "200"));

        // first ball crosses at 0.1s, second at 0.5s
        assert_eq!(stage.advance(0.2), 1);
        assert_eq!(stage.advance(0.2), 0);
        assert_eq!(stage.advance(0.2), 1);
        assert_eq!(stage.advance(0.2), 0);
    }

    #[test]
    fn test_prune_drops_expired() {
        let mut stage = Stage::new();
        stage.spawn(ball(-10.0, "200"));
        stage.spawn(ball(-200.0, "200"));

        stage.advance(0.2); // first ball arrives
        stage.advance(1.1); // and decays past a full progress unit
        assert_eq!(stage.prune(), 1);
        assert_eq!(stage.len(), 1);
    }

    #[test]
    fn test_draw_layers_glow_below_base() {
        let mut stage = Stage::new();
        stage.spawn(ball(-10.0, "200"));
        stage.advance(0.2); // arrived, glow active

        let mut canvas = RecordingCanvas::new();
        let mut text = RecordingText::new();
        stage.draw(&mut canvas, &mut text, &Visuals::default());

        assert_eq!(canvas.quads.len(), 2);
        // glow quad first (larger), base quad second
        assert!(canvas.quads[0].extent.x > canvas.quads[1].extent.x);
    }

    #[test]
    fn test_inspect_first_hit_wins() {
        let mut stage = Stage::new();
        stage.spawn(ball(-10.0, "200"));
        stage.spawn(ball(-10.0, "404"));
        stage.advance(1.0); // both rest at the origin

        let mut tooltip = RecordingTooltip::new();
        assert!(stage.inspect(&mut tooltip, Vec2::new(1.0, 1.0)));
        assert!(!tooltip.lines.is_empty());

        assert!(!stage.inspect(&mut tooltip, Vec2::new(100.0, 100.0)));
    }
}
