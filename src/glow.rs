//! Glow decay: the short-lived radial flash a ball emits at arrival.
//!
//! The glow exists only after arrival and fades out over
//! `Visuals::glow_duration` progress units (0.15 by default, a brief
//! flash right at the bounce). Callers gate on
//! [`Projection::has_arrived`](crate::trajectory::Projection::has_arrived)
//! before computing a footprint; pre-arrival there is nothing to draw and
//! no work to do.

use crate::visuals::Visuals;
use glam::Vec3;

/// One frame's glow parameters for a single ball.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GlowFootprint {
    /// Half-extent of the glow quad, centered on the ball.
    pub radius: f32,
    /// Remaining glow strength in 0.0-1.0.
    pub alpha: f32,
    /// Tint premultiplied by intensity and alpha.
    pub colour: Vec3,
}

impl GlowFootprint {
    /// Compute the glow for a ball of the given size and tint at the
    /// given post-arrival progress.
    ///
    /// Precondition: the ball has arrived. Progress from before arrival
    /// would produce a full-strength glow for a bounce that has not
    /// happened yet.
    pub fn compute(size: f32, tint: Vec3, progress: f32, visuals: &Visuals) -> Self {
        let radius = size * size * visuals.glow_multiplier;
        let alpha = (1.0 - progress / visuals.glow_duration).clamp(0.0, 1.0);
        let colour = tint * visuals.glow_intensity * alpha;
        Self { radius, alpha, colour }
    }

    /// Whether the glow has fully faded.
    #[inline]
    pub fn spent(&self) -> bool {
        self.alpha <= 0.0
    }
}
