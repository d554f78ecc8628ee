//! Immutable 2D vector used for vertices, centers and pointer positions.

use std::f64::consts::TAU;
use std::fmt;

use nalgebra::{Rotation2, Vector2};
use serde::{Deserialize, Serialize};

/// 2D vector `(x, y)`; equality is component-wise.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const ZERO: Point = Point::new(0.0, 0.0);
    pub const X: Point = Point::new(1.0, 0.0);
    pub const Y: Point = Point::new(0.0, 1.0);
    pub const X_MINUS: Point = Point::new(-1.0, 0.0);
    pub const Y_MINUS: Point = Point::new(0.0, -1.0);

    #[inline]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    #[inline]
    pub fn plus(self, other: Point) -> Point {
        Point::new(self.x + other.x, self.y + other.y)
    }

    #[inline]
    pub fn minus(self, other: Point) -> Point {
        Point::new(self.x - other.x, self.y - other.y)
    }

    #[inline]
    pub fn multiply(self, factor: f64) -> Point {
        Point::new(self.x * factor, self.y * factor)
    }

    #[inline]
    pub fn length(self) -> f64 {
        (self.x * self.x + self.y * self.y).sqrt()
    }

    #[inline]
    pub fn length_to(self, other: Point) -> f64 {
        self.minus(other).length()
    }

    /// Squared distance; use for comparisons to skip the square root.
    #[inline]
    pub fn length_squared_to(self, other: Point) -> f64 {
        let d = self.minus(other);
        d.x * d.x + d.y * d.y
    }

    /// Counter-clockwise rotation about the origin.
    #[inline]
    pub fn rotate(self, angle: f64) -> Point {
        (Rotation2::new(angle) * Vector2::from(self)).into()
    }

    /// Normalized copy. NaN components for the zero vector; guard before calling.
    #[inline]
    pub fn unit(self) -> Point {
        self.multiply(1.0 / self.length())
    }

    #[inline]
    pub fn dot_product(self, other: Point) -> f64 {
        self.x * other.x + self.y * other.y
    }

    /// z-component of the 3D cross product; positive when `other` lies
    /// counter-clockwise of `self`.
    #[inline]
    pub fn cross_product(self, other: Point) -> f64 {
        self.x * other.y - self.y * other.x
    }

    /// Angle in `[0, 2π)` that rotates the direction of `other` onto the
    /// direction of `self` counter-clockwise.
    ///
    /// Returns `0` if the operands are identical or either is the zero vector.
    pub fn angle_from(self, other: Point) -> f64 {
        if self == other || self == Point::ZERO || other == Point::ZERO {
            return 0.0;
        }
        let a = self.unit();
        let b = other.unit();
        // Drift can push the dot product of (anti)parallel units past ±1.
        let theta = a.dot_product(b).clamp(-1.0, 1.0).acos();
        if self.cross_product(other) <= 0.0 {
            theta
        } else {
            TAU - theta
        }
    }

    /// Angle of this vector measured from the positive x axis.
    #[inline]
    pub fn angle(self) -> f64 {
        self.angle_from(Point::X)
    }
}

impl From<Vector2<f64>> for Point {
    #[inline]
    fn from(v: Vector2<f64>) -> Self {
        Point::new(v.x, v.y)
    }
}

impl From<Point> for Vector2<f64> {
    #[inline]
    fn from(p: Point) -> Self {
        Vector2::new(p.x, p.y)
    }
}

impl std::ops::Add for Point {
    type Output = Point;
    #[inline]
    fn add(self, rhs: Point) -> Point {
        self.plus(rhs)
    }
}
impl std::ops::Sub for Point {
    type Output = Point;
    #[inline]
    fn sub(self, rhs: Point) -> Point {
        self.minus(rhs)
    }
}
impl std::ops::Mul<f64> for Point {
    type Output = Point;
    #[inline]
    fn mul(self, rhs: f64) -> Point {
        self.multiply(rhs)
    }
}
impl std::ops::Neg for Point {
    type Output = Point;
    #[inline]
    fn neg(self) -> Point {
        Point::new(-self.x, -self.y)
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let r = |v: f64| (v * 100.0).round() / 100.0;
        write!(f, "({}, {})", r(self.x), r(self.y))
    }
}
