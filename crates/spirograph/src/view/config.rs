//! Configuration snapshot shared with the editable text panel.
//!
//! Units on the wire: `angle` in degrees, `radius` in percent of
//! `max(width, height)`, `x`/`y` in percent of width/height.
//! A configuration that was set is returned verbatim (same `Arc`) until the
//! polygon changes; only then is a rounded snapshot derived again.
//! `vertices` is clamped to `[0, MAX_VERTEX_COUNT]` when applied.

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use super::PolygonView;
use crate::cfg::{round6, FULL_TURN_DEG, MAX_VERTEX_COUNT};
use crate::geom::{Point, StarPolygon};
use crate::Result;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Configuration {
    pub vertices: i64,
    pub start_circle: i64,
    pub circle_count: i64,
    pub colors: Vec<String>,
    pub angle: f64,
    pub radius: f64,
    pub x: f64,
    pub y: f64,
}

/// Negative counts are clamped to zero (an empty but valid state).
#[inline]
fn count(v: i64) -> usize {
    usize::try_from(v).unwrap_or(0)
}

impl PolygonView {
    /// Current configuration; cached until the next polygon change.
    pub fn config(&mut self) -> Arc<Configuration> {
        if let Some(cached) = &self.config {
            return Arc::clone(cached);
        }
        let derived = Arc::new(self.derive_config());
        tracing::trace!(?derived, "config derived");
        self.config = Some(Arc::clone(&derived));
        derived
    }

    /// Rebuild the polygon and visible circle window from `input`; later
    /// `config()` calls return `input` itself until invalidated.
    pub fn set_config(&mut self, input: Configuration) -> Arc<Configuration> {
        let max = self.max_side();
        self.polygon = StarPolygon::with_start_angle(
            Point::new(input.x / 100.0 * self.width, input.y / 100.0 * self.height),
            input.radius / 100.0 * max,
            count(input.vertices).min(MAX_VERTEX_COUNT),
            input.angle.to_radians(),
        );
        self.start_circle = count(input.start_circle);
        self.visible_circle_count = count(input.circle_count);
        self.palette = input.colors.clone();
        tracing::debug!(
            vertices = input.vertices,
            start_circle = input.start_circle,
            circle_count = input.circle_count,
            "config set"
        );
        let input = Arc::new(input);
        self.config = Some(Arc::clone(&input));
        input
    }

    /// Parse JSON text and apply it; on error the view is unchanged.
    pub fn set_config_text(&mut self, text: &str) -> Result<Arc<Configuration>> {
        let input: Configuration = serde_json::from_str(text)?;
        Ok(self.set_config(input))
    }

    /// Pretty-printed JSON of `config()`.
    pub fn config_text(&mut self) -> Result<String> {
        Ok(serde_json::to_string_pretty(&*self.config())?)
    }

    /// Drop the cached configuration so the next read derives a fresh one.
    pub fn refresh_config(&mut self) {
        self.config = None;
    }

    fn derive_config(&self) -> Configuration {
        let mut angle = round6(self.polygon.start_angle().to_degrees().rem_euclid(FULL_TURN_DEG));
        if angle >= FULL_TURN_DEG {
            angle -= FULL_TURN_DEG;
        }
        let center = self.polygon.center();
        Configuration {
            vertices: self.polygon.vertex_count() as i64,
            start_circle: self.start_circle as i64,
            circle_count: self.visible_circle_count as i64,
            colors: self.palette.clone(),
            angle,
            radius: round6(self.polygon.radius() / self.max_side() * 100.0),
            x: round6(center.x / self.width * 100.0),
            y: round6(center.y / self.height * 100.0),
        }
    }
}
