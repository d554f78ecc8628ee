//! Interactive viewport around a single `StarPolygon`.
//!
//! Purpose
//! - Own the current polygon plus viewport size and turn UI input (drag
//!   deltas, wheel pivots, touch points) into polygon transforms.
//! - Keep a memoized `Configuration` snapshot for the editable text panel.
//! - Yield colored chord circles for a drawing layer.
//!
//! Model
//! - The polygon is replaced wholesale on every transform. Each replacement
//!   goes through `replace_polygon`, which also drops the cached configuration.
//! - Single-threaded: every handler runs to completion; no interior mutability.
//!
//! Layout
//! - `mod.rs`: construction, resize, drag/wheel transforms.
//! - `touch.rs`: two-finger gesture state and similarity solve.
//! - `config.rs`: `Configuration` wire type, cache, derive/apply.
//! - `nudge.rs`: in-place numeric edit of JSON text.
//! - `render.rs`: colored circle iteration.

mod config;
mod nudge;
mod render;
mod touch;

use std::f64::consts::FRAC_PI_2;
use std::sync::Arc;

use crate::cfg::{DEFAULT_VERTEX_COUNT, NORMALIZING_CIRCLE};
use crate::geom::{Point, StarPolygon};

pub use config::Configuration;
pub use nudge::{manipulate_json, Nudge};
pub use render::{CircleView, CircleViews};

use touch::TouchState;

/// Palette of a fresh viewport (rainbow, innermost circle first).
pub const DEFAULT_PALETTE: [&str; 6] = [
    "#A000C0", "#0000FF", "#008000", "#FFFF00", "#FF8000", "#FF0000",
];

/// Viewport state for one UI session.
#[derive(Clone, Debug)]
pub struct PolygonView {
    width: f64,
    height: f64,
    polygon: StarPolygon,
    start_circle: usize,
    visible_circle_count: usize,
    palette: Vec<String>,
    config: Option<Arc<Configuration>>,
    touch: TouchState,
}

impl PolygonView {
    /// Polygon anchored at bottom-center, pointing down, sized so that chord
    /// circle 7 spans the viewport height.
    pub fn new(width: f64, height: f64) -> Self {
        let polygon = StarPolygon::with_start_angle(
            Point::new(width / 2.0, height),
            1.0,
            DEFAULT_VERTEX_COUNT,
            -FRAC_PI_2,
        );
        let polygon =
            polygon.change_radius_to(height / polygon.calculate_circle_radius(NORMALIZING_CIRCLE));
        let palette: Vec<String> = DEFAULT_PALETTE.iter().map(|c| c.to_string()).collect();
        Self {
            width,
            height,
            polygon,
            start_circle: 0,
            visible_circle_count: palette.len(),
            palette,
            config: None,
            touch: TouchState::default(),
        }
    }

    #[inline]
    pub fn width(&self) -> f64 {
        self.width
    }
    #[inline]
    pub fn height(&self) -> f64 {
        self.height
    }
    #[inline]
    pub fn polygon(&self) -> &StarPolygon {
        &self.polygon
    }
    #[inline]
    pub fn start_circle(&self) -> usize {
        self.start_circle
    }
    #[inline]
    pub fn visible_circle_count(&self) -> usize {
        self.visible_circle_count
    }
    #[inline]
    pub fn palette(&self) -> &[String] {
        &self.palette
    }

    fn replace_polygon(&mut self, polygon: StarPolygon) {
        self.polygon = polygon;
        self.config = None;
    }

    #[inline]
    fn max_side(&self) -> f64 {
        self.width.max(self.height)
    }

    /// Polygon center as fractions of the viewport size.
    pub fn relative_position(&self) -> Point {
        let c = self.polygon.center();
        Point::new(c.x / self.width, c.y / self.height)
    }

    /// Keep relative position and the `radius / max(width, height)` ratio.
    pub fn resize(&mut self, width: f64, height: f64) {
        let rel = self.relative_position();
        let old_max = self.max_side();
        self.width = width;
        self.height = height;
        let polygon = self
            .polygon
            .move_to(Point::new(width * rel.x, height * rel.y))
            .change_radius_to(self.polygon.radius() * self.max_side() / old_max);
        tracing::debug!(width, height, radius = polygon.radius(), "resize");
        self.replace_polygon(polygon);
    }

    pub fn scale(&mut self, pivot: Point, factor: f64) {
        let polygon = self.polygon.scale(pivot, factor);
        self.replace_polygon(polygon);
    }

    pub fn move_by(&mut self, delta: Point) {
        let polygon = self.polygon.move_by(delta);
        self.replace_polygon(polygon);
    }

    pub fn rotate(&mut self, delta: f64) {
        let polygon = self.polygon.rotate(delta);
        self.replace_polygon(polygon);
    }

    /// Rotate about the polygon center so that `from` turns towards `to`.
    pub fn rotate_between(&mut self, from: Point, to: Point) {
        let center = self.polygon.center();
        let angle = (to - center).angle_from(from - center);
        self.rotate(angle);
    }
}
