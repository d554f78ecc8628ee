//! Regular polygon with derived chord-circle patterns.
//!
//! Model
//! - `n` vertices on a circle of `radius` around `center`. Vertex 0 sits at
//!   `start_angle`; vertex `k` at `start_angle − k·2π/n`, i.e. clockwise in
//!   standard (y-up) orientation.
//! - `⌊n/2⌋` chord circles. Circle `k` joins every vertex to the one
//!   `⌊n/2⌋ − k` steps further (see `circle.rs`).
//! - Immutable: all transforms return a freshly computed polygon.

use std::f64::consts::{FRAC_PI_2, TAU};

use super::circle::{ChordCircle, Circles};
use super::point::Point;

#[derive(Clone, Debug, PartialEq)]
pub struct StarPolygon {
    center: Point,
    radius: f64,
    start_angle: f64,
    vertices: Vec<Point>,
    chord_circle_count: usize,
}

impl StarPolygon {
    /// Polygon whose first vertex points up (`start_angle = π/2`).
    pub fn new(center: Point, radius: f64, vertex_count: usize) -> Self {
        Self::with_start_angle(center, radius, vertex_count, FRAC_PI_2)
    }

    /// `vertex_count = 0` is a valid empty polygon with no chord circles.
    pub fn with_start_angle(
        center: Point,
        radius: f64,
        vertex_count: usize,
        start_angle: f64,
    ) -> Self {
        let step = TAU / vertex_count as f64;
        let vertices = (0..vertex_count)
            .map(|k| {
                let phi = start_angle - k as f64 * step;
                center + Point::new(phi.cos(), phi.sin()) * radius
            })
            .collect();
        Self {
            center,
            radius,
            start_angle,
            vertices,
            chord_circle_count: vertex_count / 2,
        }
    }

    #[inline]
    pub fn center(&self) -> Point {
        self.center
    }
    #[inline]
    pub fn radius(&self) -> f64 {
        self.radius
    }
    /// Angle of vertex 0 in radians.
    #[inline]
    pub fn start_angle(&self) -> f64 {
        self.start_angle
    }
    #[inline]
    pub fn vertices(&self) -> &[Point] {
        &self.vertices
    }
    #[inline]
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }
    #[inline]
    pub fn chord_circle_count(&self) -> usize {
        self.chord_circle_count
    }
    /// Angle between consecutive vertices (infinite for an empty polygon).
    #[inline]
    pub fn angle_step(&self) -> f64 {
        TAU / self.vertices.len() as f64
    }

    /// Chord circle `index`, or `None` outside `[0, chord_circle_count)`.
    pub fn circle(&self, index: usize) -> Option<ChordCircle<'_>> {
        (index < self.chord_circle_count).then(|| ChordCircle::new(self, index))
    }

    /// Chord circles `start..=end`.
    ///
    /// A missing `end`, or a window wider than `chord_circle_count`, is clamped
    /// to `chord_circle_count` circles starting at `start`. Indices past the
    /// last circle are allowed and repeat the pattern.
    pub fn circles(&self, start: usize, end: Option<usize>) -> Circles<'_> {
        let count = self.chord_circle_count;
        let len = match end {
            Some(end) if end < start => 0,
            Some(end) if end - start <= count => end - start + 1,
            _ => count,
        };
        Circles::new(self, start, start.saturating_add(len))
    }

    /// Radius used to size chord circle `index`; the polygon radius itself for
    /// `index >= chord_circle_count`.
    pub fn calculate_circle_radius(&self, index: usize) -> f64 {
        if index >= self.chord_circle_count {
            return self.radius;
        }
        self.radius * (self.angle_step() * index as f64 / 2.0).sin()
    }

    /// Scale about `pivot`: center moves along `pivot → center`, radius scales.
    pub fn scale(&self, pivot: Point, factor: f64) -> StarPolygon {
        StarPolygon::with_start_angle(
            pivot + (self.center - pivot) * factor,
            self.radius * factor,
            self.vertex_count(),
            self.start_angle,
        )
    }

    pub fn change_radius_to(&self, radius: f64) -> StarPolygon {
        StarPolygon::with_start_angle(self.center, radius, self.vertex_count(), self.start_angle)
    }

    pub fn move_to(&self, position: Point) -> StarPolygon {
        StarPolygon::with_start_angle(position, self.radius, self.vertex_count(), self.start_angle)
    }

    #[inline]
    pub fn move_by(&self, delta: Point) -> StarPolygon {
        self.move_to(self.center + delta)
    }

    /// Counter-clockwise rotation about the polygon's own center.
    pub fn rotate(&self, delta: f64) -> StarPolygon {
        StarPolygon::with_start_angle(
            self.center,
            self.radius,
            self.vertex_count(),
            self.start_angle + delta,
        )
    }
}
