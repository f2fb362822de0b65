//! Event records: the immutable data behind each animated ball.
//!
//! An [`EventRecord`] captures one discrete event (typically a single
//! network request) as seen by the data source. The record is built once,
//! handed to a [`Ball`](crate::Ball) which becomes its exclusive owner,
//! and never mutated afterwards.
//!
//! # Example
//!
//! ```ignore
//! let event = EventRecord::new("/index.html", "200", 0.042)
//!     .hostname("203.0.113.7")
//!     .referrer("https://example.com/")
//!     .upstream_time(0.031)
//!     .colour(Vec3::new(0.2, 0.8, 0.3));
//! ```
//!
//! # Absent fields
//!
//! Upstream latency is optional; data sources that encode absence as a
//! negative number can pass the raw value straight through - negatives
//! normalize to `None`. Text fields use the empty string for absence and
//! contribute no output line anywhere they would be displayed.

use glam::Vec3;

/// Immutable record of a single event.
///
/// Latencies are in seconds, payload size in bytes. The `colour` is the
/// tint the ball and all of its decorations (glow, overlay, tooltip)
/// inherit.
#[derive(Debug, Clone, PartialEq)]
pub struct EventRecord {
    /// Request path, e.g. `/index.html`.
    pub path: String,
    /// Response status code as reported, e.g. `"200"`.
    pub response_code: String,
    /// Total response latency in seconds.
    pub response_time: f32,
    /// Payload size in bytes.
    pub response_size: u64,
    /// Whether the event completed successfully.
    pub successful: bool,
    /// Upstream (backend) latency in seconds, if measured.
    pub upstream_time: Option<f32>,
    /// Tint colour (RGB, 0.0-1.0).
    pub colour: Vec3,
    /// Remote host the event originated from.
    pub hostname: String,
    /// Virtual host that served the event (empty = absent).
    pub vhost: String,
    /// Referrer header (empty = absent).
    pub referrer: String,
    /// Server-side failure detail (empty = absent).
    pub server_message: String,
}

impl EventRecord {
    /// Create a record with the required fields.
    ///
    /// The event defaults to successful with a white tint; chain the
    /// builder methods to fill in the rest.
    pub fn new(path: impl Into<String>, response_code: impl Into<String>, response_time: f32) -> Self {
        Self {
            path: path.into(),
            response_code: response_code.into(),
            response_time,
            response_size: 0,
            successful: true,
            upstream_time: None,
            colour: Vec3::ONE,
            hostname: String::new(),
            vhost: String::new(),
            referrer: String::new(),
            server_message: String::new(),
        }
    }

    /// Set the payload size in bytes.
    pub fn response_size(mut self, bytes: u64) -> Self {
        self.response_size = bytes;
        self
    }

    /// Mark the event as successful or failed.
    ///
    /// Failed events never bounce: their balls fly past the destination
    /// line instead of settling on it.
    pub fn success(mut self, successful: bool) -> Self {
        self.successful = successful;
        self
    }

    /// Set the upstream latency in seconds.
    ///
    /// Negative values mean "not measured" and normalize to `None`.
    pub fn upstream_time(mut self, seconds: f32) -> Self {
        self.upstream_time = if seconds >= 0.0 { Some(seconds) } else { None };
        self
    }

    /// Set the tint colour (RGB, 0.0-1.0).
    pub fn colour(mut self, colour: Vec3) -> Self {
        self.colour = colour;
        self
    }

    /// Set the remote host.
    pub fn hostname(mut self, hostname: impl Into<String>) -> Self {
        self.hostname = hostname.into();
        self
    }

    /// Set the virtual host.
    pub fn vhost(mut self, vhost: impl Into<String>) -> Self {
        self.vhost = vhost.into();
        self
    }

    /// Set the referrer.
    pub fn referrer(mut self, referrer: impl Into<String>) -> Self {
        self.referrer = referrer.into();
        self
    }

    /// Set the server-side failure detail.
    pub fn server_message(mut self, message: impl Into<String>) -> Self {
        self.server_message = message.into();
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_defaults() {
        let event = EventRecord::new("/", "200", 0.1);
        assert!(event.successful);
        assert_eq!(event.upstream_time, None);
        assert_eq!(event.colour, Vec3::ONE);
        assert!(event.vhost.is_empty());
    }

    #[test]
    fn test_negative_upstream_is_absent() {
        let event = EventRecord::new("/", "200", 0.1).upstream_time(-1.0);
        assert_eq!(event.upstream_time, None);

        let event = EventRecord::new("/", "200", 0.1).upstream_time(0.0);
        assert_eq!(event.upstream_time, Some(0.0));
    }

    #[test]
    fn test_builder_chain() {
        let event = EventRecord::new("/api", "503", 2.5)
            .success(false)
            .hostname("198.51.100.1")
            .server_message("connect() failed");

        assert!(!event.successful);
        assert_eq!(event.hostname, "198.51.100.1");
        assert_eq!(event.server_message, "connect() failed");
    }
}
