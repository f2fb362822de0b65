//! Presentation configuration for ball rendering.
//!
//! This module provides the process-wide rendering options that control
//! how balls appear, separate from the trajectory logic that controls how
//! they move. The configuration is an explicit value the caller passes to
//! the draw entry points each frame; mutate it between frames only.
//!
//! # Usage
//!
//! ```ignore
//! let visuals = Visuals::new()
//!     .glow_intensity(0.8)
//!     .always_visible(true);
//!
//! for ball in stage.balls() {
//!     ball.draw(&mut canvas, &visuals);
//!     ball.draw_glow(&mut canvas, &visuals);
//! }
//! ```

/// Process-wide presentation toggles and glow tuning.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Visuals {
    /// Keep drawing the base quad after a ball has bounced.
    ///
    /// When false, bounced balls disappear and only their glow remains;
    /// no-bounce balls are unaffected and always render.
    pub always_visible: bool,
    /// Master switch for glow rendering.
    pub glow_enabled: bool,
    /// Glow brightness applied to the ball tint.
    pub glow_intensity: f32,
    /// Glow footprint scale: radius = size * size * multiplier.
    pub glow_multiplier: f32,
    /// How long the glow lasts, in progress units.
    pub glow_duration: f32,
}

impl Default for Visuals {
    fn default() -> Self {
        Self {
            always_visible: true,
            glow_enabled: true,
            glow_intensity: 0.5,
            glow_multiplier: 1.25,
            glow_duration: 0.15,
        }
    }
}

impl Visuals {
    /// Create a config with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Keep bounced balls visible (default: true).
    pub fn always_visible(mut self, on: bool) -> Self {
        self.always_visible = on;
        self
    }

    /// Enable or disable glow rendering entirely (default: enabled).
    pub fn glow_enabled(mut self, on: bool) -> Self {
        self.glow_enabled = on;
        self
    }

    /// Set the glow brightness (default: 0.5).
    pub fn glow_intensity(mut self, intensity: f32) -> Self {
        self.glow_intensity = intensity;
        self
    }

    /// Set the glow footprint multiplier (default: 1.25).
    pub fn glow_multiplier(mut self, multiplier: f32) -> Self {
        self.glow_multiplier = multiplier;
        self
    }

    /// Set the glow duration in progress units (default: 0.15).
    pub fn glow_duration(mut self, duration: f32) -> Self {
        self.glow_duration = duration;
        self
    }
}
