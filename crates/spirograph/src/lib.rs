//! Star-polygon ("spirograph") geometry and its interactive viewport.
//!
//! Layers
//! - `geom`: immutable value types. `Point` (2D vector algebra), `StarPolygon`
//!   (regular vertex set plus chord-circle patterns), `ChordCircle`, `Line`.
//! - `view`: `PolygonView`, the mutable session state that turns pointer,
//!   wheel and touch deltas into polygon transforms, keeps the textual
//!   `Configuration` in sync, and yields colored chord circles for drawing.
//!
//! Conventions
//! - Angles are radians internally; the `Configuration` wire format uses degrees.
//! - Every polygon transform returns a new `StarPolygon`; nothing mutates
//!   vertex data in place.
//! - Geometry never fails. Degenerate input (zero vectors, empty polygons,
//!   out-of-range circles) yields `0`, `None` or empty iterators. Only the
//!   text bridge returns `Result`.

pub(crate) mod cfg;
mod error;
pub mod geom;
pub mod view;

pub use error::{Error, Result};

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::geom::{ChordCircle, Circles, Line, Lines, Point, StarPolygon};
    pub use crate::view::{
        manipulate_json, CircleView, Configuration, Nudge, PolygonView, DEFAULT_PALETTE,
    };
    pub use crate::{Error, Result};
}
