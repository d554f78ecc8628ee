//! Fixed defaults for the viewport (internal).
//!
//! Policy
//! - Constants, not runtime knobs. The only user-facing configuration is the
//!   `Configuration` wire struct; these values seed and normalize it.

/// Vertex count of the polygon a fresh viewport starts with.
pub(crate) const DEFAULT_VERTEX_COUNT: usize = 87;
/// Largest vertex count a configuration may request; larger values are clamped.
pub(crate) const MAX_VERTEX_COUNT: usize = 100_000;
/// Chord circle whose radius is normalized to the viewport height on construction.
pub(crate) const NORMALIZING_CIRCLE: usize = 7;
/// Resolution of derived configuration numbers and nudged JSON values.
pub(crate) const ROUND_SCALE: f64 = 1e6;
/// Degrees in a full turn; derived angles live in `[0, FULL_TURN_DEG)`.
pub(crate) const FULL_TURN_DEG: f64 = 360.0;

/// Round half away from zero at `1 / ROUND_SCALE` resolution.
#[inline]
pub(crate) fn round6(v: f64) -> f64 {
    (v * ROUND_SCALE).round() / ROUND_SCALE
}
