//! Render artifacts: the drawing layer's view of a `PolygonView`.
//!
//! - `.svg`: one `<g>` per visible circle, stroked in its palette color.
//! - anything else: JSON `[{color, lines: [{start, end}]}]`.

use std::fmt::Write as _;
use std::fs::{self, File};
use std::io::BufWriter;
use std::path::Path;

use anyhow::{Context, Result};
use spirograph::prelude::PolygonView;

/// Canvas stroke width.
const LINE_WIDTH: f64 = 1.3;
const BACKGROUND: &str = "#000";
/// Stroke for circles when the palette is empty.
const FALLBACK_STROKE: &str = "#FFF";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Format {
    Json,
    Svg,
}

impl Format {
    pub fn for_path(path: &Path) -> Self {
        match path.extension().and_then(|e| e.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("svg") => Format::Svg,
            _ => Format::Json,
        }
    }
}

/// Write the visible circles to `path`; returns the number of lines drawn.
pub fn write_render(view: &PolygonView, path: &Path) -> Result<usize> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)
                .with_context(|| format!("creating output dir {}", parent.display()))?;
        }
    }
    let lines = view.circle_views().map(|c| c.lines().len()).sum();
    match Format::for_path(path) {
        Format::Svg => fs::write(path, to_svg(view))
            .with_context(|| format!("writing {}", path.display()))?,
        Format::Json => {
            let file =
                File::create(path).with_context(|| format!("creating {}", path.display()))?;
            let circles: Vec<_> = view.circle_views().collect();
            serde_json::to_writer(BufWriter::new(file), &circles)
                .with_context(|| format!("writing {}", path.display()))?;
        }
    }
    Ok(lines)
}

pub fn to_svg(view: &PolygonView) -> String {
    let (w, h) = (view.width(), view.height());
    let mut svg = String::new();
    // Writing into a String cannot fail.
    let _ = writeln!(
        svg,
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="{w}" height="{h}" viewBox="0 0 {w} {h}">"#
    );
    let _ = writeln!(svg, r#"<rect width="100%" height="100%" fill="{BACKGROUND}"/>"#);
    for circle in view.circle_views() {
        let stroke = circle.color.unwrap_or(FALLBACK_STROKE);
        let _ = writeln!(
            svg,
            r#"<g stroke="{}" stroke-width="{LINE_WIDTH}" fill="none">"#,
            escape_attr(stroke)
        );
        for line in circle.lines() {
            let _ = writeln!(
                svg,
                r#"<line x1="{:.3}" y1="{:.3}" x2="{:.3}" y2="{:.3}"/>"#,
                line.start.x, line.start.y, line.end.x, line.end.y
            );
        }
        svg.push_str("</g>\n");
    }
    svg.push_str("</svg>\n");
    svg
}

/// Colors are opaque user strings; keep them from breaking the attribute.
fn escape_attr(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('"', "&quot;")
        .replace('<', "&lt;")
}
