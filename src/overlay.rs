//! Overlay drift: the floating status label for interesting outcomes.
//!
//! Routine traffic (the two default codes, `200` and `302`) gets no
//! overlay. Anything else - errors, redirects gone wrong, slow upstreams -
//! grows a small block of text anchored near the ball's resting position
//! that drifts along the approach heading and fades as progress
//! accumulates.
//!
//! Drift direction encodes outcome at a glance: successful events drift
//! forward along their heading, failed events drift backward against it,
//! visually separating "bounced but errored" from "never bounced".
//! The label fades twice as fast as a default glow so text never outlives
//! its ball's flash.

use crate::event::EventRecord;
use glam::{Vec2, Vec3};

/// Drift distance per progress unit.
pub const DRIFT_RATE: f32 = 100.0;

/// Horizontal pull-back of the label anchor from the resting position,
/// so text does not overlap the settled ball.
pub const ANCHOR_OFFSET_X: f32 = 45.0;

/// Vertical spacing between stacked label lines.
pub const LINE_SPACING: f32 = 20.0;

/// Status codes that are too routine to label.
const DEFAULT_CODES: [&str; 2] = ["200", "302"];

/// One frame's overlay state for a single ball.
#[derive(Debug, Clone, PartialEq)]
pub struct Overlay {
    /// Position of the first line.
    pub anchor: Vec2,
    /// Label opacity in 0.0-1.0.
    pub alpha: f32,
    /// Label tint (the ball's colour).
    pub colour: Vec3,
    /// Lines to render, stacked [`LINE_SPACING`] apart. Never empty.
    pub lines: Vec<String>,
}

impl Overlay {
    /// Build the overlay for an event, or `None` when the outcome is a
    /// default code and not worth labelling.
    ///
    /// `resting` is the ball's final resting position (fixed at
    /// construction), `heading` its unit velocity, `progress` its
    /// post-arrival progress (0.0 before arrival, so a not-yet-arrived
    /// ball shows a stationary, fully opaque label at the anchor).
    pub fn for_event(
        event: &EventRecord,
        resting: Vec2,
        heading: Vec2,
        progress: f32,
    ) -> Option<Self> {
        if DEFAULT_CODES.contains(&event.response_code.as_str()) {
            return None;
        }

        let mut drift = progress * DRIFT_RATE;
        if !event.successful {
            drift = -drift;
        }

        let anchor = Vec2::new(resting.x - ANCHOR_OFFSET_X, resting.y) + heading * drift;
        let alpha = 1.0 - (progress * 2.0).clamp(0.0, 1.0);

        let mut lines = Vec::with_capacity(4);
        lines.push(format!("Response: {}", event.response_code));
        if let Some(upstream) = event.upstream_time {
            lines.push(format!("Upstream: {}", upstream));
        }
        if event.response_time >= 0.0 {
            lines.push(format!("Nginx: {}", event.response_time));
        }
        if !event.server_message.is_empty() {
            lines.push(format!("Failure: {}", event.server_message));
        }

        Some(Self {
            anchor,
            alpha,
            colour: event.colour,
            lines,
        })
    }

    /// Position of line `index`, stacked downward from the anchor.
    #[inline]
    pub fn line_position(&self, index: usize) -> Vec2 {
        Vec2::new(self.anchor.x, self.anchor.y + index as f32 * LINE_SPACING)
    }

    /// Whether the label has fully faded.
    #[inline]
    pub fn spent(&self) -> bool {
        self.alpha <= 0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn failing_event() -> EventRecord {
        EventRecord::new("/api/users", "500", 1.2)
            .success(false)
            .upstream_time(0.9)
            .server_message("upstream timed out")
    }

    #[test]
    fn test_default_codes_have_no_overlay() {
        let rest = Vec2::ZERO;
        for code in ["200", "302"] {
            let event = EventRecord::new("/", code, 0.05);
            assert!(Overlay::for_event(&event, rest, Vec2::X, 0.2).is_none());
        }
        let event = EventRecord::new("/", "404", 0.05);
        assert!(Overlay::for_event(&event, rest, Vec2::X, 0.2).is_some());
    }

    #[test]
    fn test_line_order_and_absent_fields() {
        let overlay =
            Overlay::for_event(&failing_event(), Vec2::ZERO, Vec2::X, 0.0).unwrap();
        assert_eq!(
            overlay.lines,
            vec![
                "Response: 500",
                "Upstream: 0.9",
                "Nginx: 1.2",
                "Failure: upstream timed out",
            ]
        );

        // no upstream, no failure message: those lines vanish entirely
        let event = EventRecord::new("/x", "404", 0.3);
        let overlay = Overlay::for_event(&event, Vec2::ZERO, Vec2::X, 0.0).unwrap();
        assert_eq!(overlay.lines, vec!["Response: 404", "Nginx: 0.3"]);
    }

    #[test]
    fn test_drift_sign_flips_on_failure() {
        let ok = EventRecord::new("/", "404", 0.1);
        let failed = EventRecord::new("/", "404", 0.1).success(false);
        let rest = Vec2::new(10.0, 5.0);

        let a = Overlay::for_event(&ok, rest, Vec2::X, 0.2).unwrap();
        let b = Overlay::for_event(&failed, rest, Vec2::X, 0.2).unwrap();

        let base_x = rest.x - ANCHOR_OFFSET_X;
        let da = a.anchor.x - base_x;
        let db = b.anchor.x - base_x;
        assert!(da > 0.0);
        assert!(db < 0.0);
        assert!((da + db).abs() < 1e-4);
    }

    #[test]
    fn test_fade_is_twice_progress() {
        let event = EventRecord::new("/", "404", 0.1);
        let at = |p| Overlay::for_event(&event, Vec2::ZERO, Vec2::X, p).unwrap();

        assert_eq!(at(0.0).alpha, 1.0);
        assert!((at(0.25).alpha - 0.5).abs() < 1e-4);
        assert_eq!(at(0.5).alpha, 0.0);
        assert!(at(0.5).spent());
        // unbounded progress still clamps
        assert_eq!(at(4.0).alpha, 0.0);
    }

    #[test]
    fn test_line_positions_stack_downward() {
        let overlay =
            Overlay::for_event(&failing_event(), Vec2::ZERO, Vec2::X, 0.0).unwrap();
        let first = overlay.line_position(0);
        let third = overlay.line_position(2);
        assert_eq!(first, overlay.anchor);
        assert_eq!(third.y - first.y, 2.0 * LINE_SPACING);
    }
}
