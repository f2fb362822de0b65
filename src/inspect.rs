//! Pointer hit-testing and tooltip content assembly.
//!
//! A ball is "hit" when the pointer is within [`HIT_RADIUS`] units of its
//! current position. The comparison uses squared distance so the hot path
//! never takes a square root, and the boundary is strict: a pointer at
//! exactly the radius is a miss.
//!
//! On a hit the event record is flattened into an ordered block of text
//! for the tooltip. Absent fields (empty strings, unmeasured latencies)
//! contribute no line at all.

use crate::event::EventRecord;
use glam::Vec2;

/// Pointer pick radius around the ball centre.
pub const HIT_RADIUS: f32 = 6.0;

const HIT_RADIUS_SQ: f32 = HIT_RADIUS * HIT_RADIUS;

/// Whether `pointer` is strictly within [`HIT_RADIUS`] of `position`.
#[inline]
pub fn is_hit(position: Vec2, pointer: Vec2) -> bool {
    position.distance_squared(pointer) < HIT_RADIUS_SQ
}

/// Assemble the tooltip content block for an event.
///
/// Fixed order: path, a separator, remote host, then every present
/// optional field - virtual host, referrer, upstream latency, response
/// latency, failure message.
pub fn content_lines(event: &EventRecord) -> Vec<String> {
    let mut content = Vec::with_capacity(8);

    content.push(event.path.clone());
    content.push(String::from(" "));

    content.push(format!("Remote-Host:  {}", event.hostname));
    if !event.vhost.is_empty() {
        content.push(format!("Virtual-Host: {}", event.vhost));
    }
    if !event.referrer.is_empty() {
        content.push(format!("Referrer:     {}", event.referrer));
    }

    if let Some(upstream) = event.upstream_time {
        content.push(format!("Upstream:   {}", upstream));
    }
    if event.response_time >= 0.0 {
        content.push(format!("Nginx:   {}", event.response_time));
    }
    if !event.server_message.is_empty() {
        content.push(format!("Failure:   {}", event.server_message));
    }

    content
}
