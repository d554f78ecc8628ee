//! Chord circles and their lazy line/circle sequences.
//!
//! A `ChordCircle` borrows its polygon; it never outlives or mutates it.
//! Both iterators are plain cursors over indices: lines are produced on
//! demand, and asking the circle (or polygon) again restarts from scratch.

use std::fmt;

use serde::Serialize;

use super::point::Point;
use super::polygon::StarPolygon;

/// Segment between two vertices.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct Line {
    pub start: Point,
    pub end: Point,
}

impl Line {
    #[inline]
    pub fn new(start: Point, end: Point) -> Self {
        Self { start, end }
    }
}

impl fmt::Display for Line {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} - {}", self.start, self.end)
    }
}

/// Chord pattern `index` of a polygon: vertex `i` joined to vertex
/// `(i + skip) mod n` for every `i`, with `skip = chord_circle_count − index`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ChordCircle<'a> {
    polygon: &'a StarPolygon,
    index: usize,
}

impl<'a> ChordCircle<'a> {
    pub(crate) fn new(polygon: &'a StarPolygon, index: usize) -> Self {
        Self { polygon, index }
    }

    #[inline]
    pub fn index(&self) -> usize {
        self.index
    }

    #[inline]
    pub fn polygon(&self) -> &'a StarPolygon {
        self.polygon
    }

    /// Vertex offset between line endpoints, reduced modulo the vertex count.
    ///
    /// Indices past the last circle keep counting down, so the pattern
    /// wraps around instead of failing.
    pub fn skip(&self) -> usize {
        let n = self.polygon.vertex_count() as i64;
        if n == 0 {
            return 0;
        }
        (self.polygon.chord_circle_count() as i64 - self.index as i64).rem_euclid(n) as usize
    }

    /// Fresh iterator over the `n` lines of this circle.
    pub fn lines(&self) -> Lines<'a> {
        Lines {
            vertices: self.polygon.vertices(),
            skip: self.skip(),
            current: 0,
        }
    }
}

impl<'a> IntoIterator for ChordCircle<'a> {
    type Item = Line;
    type IntoIter = Lines<'a>;
    fn into_iter(self) -> Lines<'a> {
        self.lines()
    }
}

impl<'a> IntoIterator for &ChordCircle<'a> {
    type Item = Line;
    type IntoIter = Lines<'a>;
    fn into_iter(self) -> Lines<'a> {
        self.lines()
    }
}

/// Lines of one chord circle.
#[derive(Clone, Debug)]
pub struct Lines<'a> {
    vertices: &'a [Point],
    skip: usize,
    current: usize,
}

impl Iterator for Lines<'_> {
    type Item = Line;

    fn next(&mut self) -> Option<Line> {
        let n = self.vertices.len();
        if self.current >= n {
            return None;
        }
        let i = self.current;
        self.current += 1;
        Some(Line::new(self.vertices[i], self.vertices[(i + self.skip) % n]))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let rest = self.vertices.len().saturating_sub(self.current);
        (rest, Some(rest))
    }
}

impl ExactSizeIterator for Lines<'_> {}

/// Consecutive chord circles `[current, end)` of one polygon.
#[derive(Clone, Debug)]
pub struct Circles<'a> {
    polygon: &'a StarPolygon,
    current: usize,
    end: usize,
}

impl<'a> Circles<'a> {
    pub(crate) fn new(polygon: &'a StarPolygon, start: usize, end: usize) -> Self {
        Self {
            polygon,
            current: start,
            end,
        }
    }
}

impl<'a> Iterator for Circles<'a> {
    type Item = ChordCircle<'a>;

    fn next(&mut self) -> Option<ChordCircle<'a>> {
        if self.current >= self.end {
            return None;
        }
        let circle = ChordCircle::new(self.polygon, self.current);
        self.current += 1;
        Some(circle)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let rest = self.end.saturating_sub(self.current);
        (rest, Some(rest))
    }
}

impl ExactSizeIterator for Circles<'_> {}
