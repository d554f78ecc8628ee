//! Render contract: visible chord circles paired with stroke colors.

use serde::ser::{Serialize, SerializeStruct, Serializer};

use super::PolygonView;
use crate::geom::{ChordCircle, Circles, Lines};

/// One circle to stroke. `color` is `None` only for an empty palette.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CircleView<'a> {
    pub color: Option<&'a str>,
    pub circle: ChordCircle<'a>,
}

impl<'a> CircleView<'a> {
    #[inline]
    pub fn lines(&self) -> Lines<'a> {
        self.circle.lines()
    }
}

/// Serializes as `{color, lines: [{start, end}, ...]}`, streaming the lines.
impl Serialize for CircleView<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        struct LineSeq<'a>(Lines<'a>);
        impl Serialize for LineSeq<'_> {
            fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
                serializer.collect_seq(self.0.clone())
            }
        }
        let mut st = serializer.serialize_struct("CircleView", 2)?;
        st.serialize_field("color", &self.color)?;
        st.serialize_field("lines", &LineSeq(self.lines()))?;
        st.end()
    }
}

/// Circles of the visible window; colors cycle through the palette by position.
#[derive(Clone, Debug)]
pub struct CircleViews<'a> {
    circles: Circles<'a>,
    palette: &'a [String],
    position: usize,
}

impl<'a> Iterator for CircleViews<'a> {
    type Item = CircleView<'a>;

    fn next(&mut self) -> Option<CircleView<'a>> {
        let circle = self.circles.next()?;
        let color = match self.palette.len() {
            0 => None,
            len => Some(self.palette[self.position % len].as_str()),
        };
        self.position += 1;
        Some(CircleView { color, circle })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.circles.size_hint()
    }
}

impl ExactSizeIterator for CircleViews<'_> {}

impl PolygonView {
    /// Circles `start_circle ..= start_circle + visible_circle_count − 1`
    /// (clamped per `StarPolygon::circles`).
    pub fn circle_views(&self) -> CircleViews<'_> {
        let start = self.start_circle;
        let circles = match self.visible_circle_count {
            0 => Circles::new(&self.polygon, start, start),
            n => self.polygon.circles(start, Some(start + n - 1)),
        };
        CircleViews {
            circles,
            palette: &self.palette,
            position: 0,
        }
    }
}
