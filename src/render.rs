//! Glyph rendering: layout plan → SVG document.
//!
//! Each planned glyph's unit-square paths are scaled into its absolute cell
//! rectangle and emitted as one `<polyline>` per stroke, no fill, with the
//! stroke style from the canvas profile. The output is a total function of the
//! plan and the profile; rendering the same syllable twice is byte-identical.

use std::fmt::Write as _;

use crate::alphabet::{self, Polyline};
use crate::canvas::{CanvasConfig, Rect};
use crate::error::RenderError;
use crate::layout::LayoutPlan;

/// A rendered vector document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SvgDocument(String);

impl SvgDocument {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn as_bytes(&self) -> &[u8] {
        self.0.as_bytes()
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl std::fmt::Display for SvgDocument {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

fn points_attribute(path: &Polyline, rect: Rect) -> String {
    let mut points = String::new();
    for (i, [px, py]) in path.iter().enumerate() {
        if i > 0 {
            points.push(' ');
        }
        let x = rect.x + px * rect.width;
        let y = rect.y + py * rect.height;
        let _ = write!(points, "{x},{y}");
    }
    points
}

/// Render a layout plan into an SVG document.
///
/// Fails with [`RenderError::UnknownLetter`] only if the plan references a
/// symbol outside the catalog, which a planner-produced plan never does.
pub fn render(plan: &LayoutPlan, config: &CanvasConfig) -> Result<SvgDocument, RenderError> {
    let size = config.size;
    let mut svg = format!(
        "<svg xmlns=\"http://www.w3.org/2000/svg\" viewBox=\"0 0 {size} {size}\" \
         width=\"{size}\" height=\"{size}\" style=\"color: black;\">\n\
         <rect width=\"100%\" height=\"100%\" fill=\"white\"/>\n"
    );

    for glyph in &plan.glyphs {
        let letter = alphabet::lookup(glyph.symbol).ok_or(RenderError::UnknownLetter {
            symbol: glyph.symbol,
        })?;
        let paths = match (&letter.alt_paths, glyph.use_alt) {
            (Some(alt), true) => alt,
            _ => &letter.paths,
        };
        let rect = config.cell_rect(glyph.cell);

        for path in paths {
            let _ = writeln!(
                svg,
                "  <polyline points=\"{}\" fill=\"none\" stroke=\"{}\" stroke-width=\"{}\" \
                 stroke-linecap=\"{}\" stroke-linejoin=\"{}\" />",
                points_attribute(path, rect),
                config.stroke.color,
                config.stroke.width,
                config.stroke.linecap,
                config.stroke.linejoin,
            );
        }
    }

    svg.push_str("</svg>");
    Ok(SvgDocument(svg))
}
