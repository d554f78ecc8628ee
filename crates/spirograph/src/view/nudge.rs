//! Scroll-to-edit for JSON text: bump the number of the field under the cursor.

use std::sync::{Arc, LazyLock};

use regex::Regex;
use serde::Serialize;

use super::{Configuration, PolygonView};
use crate::cfg::round6;
use crate::{Error, Result};

/// `"key": <number>`; group 1 is the numeric literal.
static FIELD: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#""[^"]*"\s*:\s*(-?\d+(?:\.\d+)?(?:[eE][+-]?\d+)?)"#)
        .expect("field pattern is a valid regex")
});

/// Edited text and the byte range of the replaced number.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Nudge {
    pub text: String,
    pub selection_start: usize,
    pub selection_end: usize,
}

/// Add `+1` (`direction > 0`) or `−1` to the numeric field enclosing the byte
/// offset `cursor` and round to 6 decimals.
///
/// The field is the `"key": value` pair between the nearest comma at or after
/// the cursor (or end of text) and the comma before it (or start of text).
pub fn manipulate_json(text: &str, cursor: usize, direction: f64) -> Result<Nudge> {
    let bytes = text.as_bytes();
    let cursor = cursor.min(bytes.len());
    let end = bytes[cursor..]
        .iter()
        .position(|&b| b == b',')
        .map_or(bytes.len(), |i| cursor + i);
    let start = bytes[..end].iter().rposition(|&b| b == b',').unwrap_or(0);

    let literal = FIELD
        .captures(&text[start..end])
        .and_then(|caps| caps.get(1))
        .ok_or(Error::NoNumericField { cursor })?;
    let value: f64 = literal
        .as_str()
        .parse()
        .ok()
        .filter(|v: &f64| v.is_finite())
        .ok_or_else(|| Error::InvalidNumber {
            literal: literal.as_str().to_string(),
        })?;

    let step = if direction > 0.0 { 1.0 } else { -1.0 };
    let mut nudged = round6(value + step);
    if !nudged.is_finite() {
        return Err(Error::InvalidNumber {
            literal: literal.as_str().to_string(),
        });
    }
    if nudged == 0.0 {
        nudged = 0.0; // no "-0"
    }
    let replacement = nudged.to_string();
    let selection_start = start + literal.start();
    let selection_end = selection_start + replacement.len();
    let mut out = String::with_capacity(text.len() + replacement.len());
    out.push_str(&text[..selection_start]);
    out.push_str(&replacement);
    out.push_str(&text[start + literal.end()..]);
    Ok(Nudge {
        text: out,
        selection_start,
        selection_end,
    })
}

impl PolygonView {
    /// `manipulate_json` followed by `set_config_text` on the result.
    /// Either failing leaves the view unchanged.
    pub fn nudge(
        &mut self,
        text: &str,
        cursor: usize,
        direction: f64,
    ) -> Result<(Nudge, Arc<Configuration>)> {
        let nudge = manipulate_json(text, cursor, direction)?;
        let config = self.set_config_text(&nudge.text)?;
        Ok((nudge, config))
    }
}
