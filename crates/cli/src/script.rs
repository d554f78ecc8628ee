//! Gesture scripts: a JSON list of UI input events replayed against a view.
//!
//! Example
//! ```json
//! [
//!   {"type": "touch", "a": {"x": 10, "y": 10}, "b": {"x": 90, "y": 10}},
//!   {"type": "touch", "a": {"x": 0, "y": 20}, "b": {"x": 120, "y": 20}},
//!   {"type": "stopTouch"},
//!   {"type": "wheel", "at": {"x": 400, "y": 300}, "delta": -120, "rotate": false}
//! ]
//! ```

use std::f64::consts::PI;
use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use serde::Deserialize;
use spirograph::prelude::{Point, PolygonView};

/// Zoom factor per wheel notch.
const WHEEL_ZOOM: f64 = 1.1;
/// Rotation per wheel notch with the rotate modifier (one degree).
const WHEEL_ROTATE: f64 = PI / 180.0;

#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum Gesture {
    Resize {
        width: f64,
        height: f64,
    },
    Scale {
        pivot: Point,
        factor: f64,
    },
    Move {
        delta: Point,
    },
    /// Radians, counter-clockwise.
    Rotate {
        delta: f64,
    },
    RotateBetween {
        from: Point,
        to: Point,
    },
    Touch {
        a: Point,
        #[serde(default)]
        b: Option<Point>,
    },
    StopTouch,
    /// Wheel notch at `at`; the sign of `delta` picks the direction.
    Wheel {
        at: Point,
        delta: f64,
        #[serde(default)]
        rotate: bool,
    },
}

pub fn load(path: &Path) -> Result<Vec<Gesture>> {
    let text =
        fs::read_to_string(path).with_context(|| format!("reading script {}", path.display()))?;
    serde_json::from_str(&text).with_context(|| format!("parsing script {}", path.display()))
}

pub fn apply(view: &mut PolygonView, gesture: &Gesture) {
    match *gesture {
        Gesture::Resize { width, height } => view.resize(width, height),
        Gesture::Scale { pivot, factor } => view.scale(pivot, factor),
        Gesture::Move { delta } => view.move_by(delta),
        Gesture::Rotate { delta } => view.rotate(delta),
        Gesture::RotateBetween { from, to } => view.rotate_between(from, to),
        Gesture::Touch { a, b } => view.touch(a, b),
        Gesture::StopTouch => view.stop_touch(),
        Gesture::Wheel { at, delta, rotate } => {
            if delta == 0.0 {
                return;
            }
            let up = delta > 0.0;
            match (rotate, up) {
                (true, true) => view.rotate(WHEEL_ROTATE),
                (true, false) => view.rotate(-WHEEL_ROTATE),
                (false, true) => view.scale(at, WHEEL_ZOOM),
                (false, false) => view.scale(at, 1.0 / WHEEL_ZOOM),
            }
        }
    }
}

/// Apply all gestures in order; returns how many were applied.
pub fn replay(view: &mut PolygonView, gestures: &[Gesture]) -> usize {
    for (i, g) in gestures.iter().enumerate() {
        tracing::debug!(step = i, gesture = ?g, "apply");
        apply(view, g);
    }
    gestures.len()
}
