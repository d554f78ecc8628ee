//! Multi-touch gestures.
//!
//! Each `touch` call compares the current finger positions with the ones
//! recorded by the previous call:
//! - two fingers with two previous positions: unique similarity
//!   (translation, uniform scale, rotation) mapping old pair onto new pair;
//! - otherwise, one finger with a previous position: translation;
//! - no previous position: baseline only.
//!
//! Platforms may reorder touch points between frames. When both previous
//! positions exist, the new first point is paired with whichever previous
//! point is nearer (strictly, by squared distance), so a swap does not jump.

use std::mem;

use super::PolygonView;
use crate::geom::{Point, StarPolygon};

#[derive(Clone, Copy, Debug, Default)]
pub(super) struct TouchState {
    a: Option<Point>,
    b: Option<Point>,
}

impl PolygonView {
    pub fn touch(&mut self, a: Point, b: Option<Point>) {
        let TouchState {
            a: mut last_a,
            b: mut last_b,
        } = self.touch;
        if let (Some(pa), Some(pb)) = (last_a, last_b) {
            if a.length_squared_to(pb) < a.length_squared_to(pa) {
                mem::swap(&mut last_a, &mut last_b);
            }
        }
        match (last_a, last_b, b) {
            (Some(a0), Some(b0), Some(b)) if a0 != b0 => {
                let polygon = similarity(&self.polygon, (a0, b0), (a, b));
                tracing::trace!(
                    center = %polygon.center(),
                    radius = polygon.radius(),
                    "touch: two fingers"
                );
                self.replace_polygon(polygon);
            }
            (Some(a0), ..) => {
                tracing::trace!(delta = %(a - a0), "touch: one finger");
                self.move_by(a - a0);
            }
            (None, ..) => tracing::trace!(at = %a, "touch: baseline"),
        }
        self.touch = TouchState { a: Some(a), b };
    }

    /// End the gesture; the next `touch` only records a baseline.
    pub fn stop_touch(&mut self) {
        self.touch = TouchState::default();
    }
}

/// Apply the similarity that maps `(a0, b0)` onto `(a, b)`. Requires `a0 != b0`.
fn similarity(
    polygon: &StarPolygon,
    (a0, b0): (Point, Point),
    (a, b): (Point, Point),
) -> StarPolygon {
    let before = b0 - a0;
    let after = b - a;
    let angle = after.angle_from(before);
    let scale = after.length() / before.length();
    let center = ((polygon.center() - a0) * scale).rotate(angle) + a;
    StarPolygon::with_start_angle(
        center,
        polygon.radius() * scale,
        polygon.vertex_count(),
        polygon.start_angle() + angle,
    )
}
