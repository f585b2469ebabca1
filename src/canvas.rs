//! Canvas constants and the grid arithmetic that turns unit-grid cells into
//! absolute rectangles.
//!
//! All patterns address the syllable square through one formula: the square is
//! subdivided into `slice` columns/rows of edge `u = (size − 2·padding −
//! gap·(slice − 1)) / slice`, a cell spanning `k` units is `k·u + gap·(k − 1)`
//! wide, and its offset is `padding + x·(u + gap)`. Adjacent cells are thus
//! separated by exactly one gap and the tiling is centred in the padded canvas.

use crate::error::ConfigError;

/// Stroke presentation constants for every polyline the renderer emits.
#[derive(Debug, Clone, PartialEq)]
pub struct StrokeStyle {
    pub color: String,
    pub width: f64,
    pub linecap: String,
    pub linejoin: String,
}

impl Default for StrokeStyle {
    fn default() -> Self {
        Self {
            color: "#373a3c".to_string(),
            width: 1.0,
            linecap: "square".to_string(),
            linejoin: "miter".to_string(),
        }
    }
}

/// Canvas profile threaded through the compositor and renderer.
///
/// The defaults are the fixed constants of the system; a caller may carry
/// several profiles side by side since nothing here is process-global.
#[derive(Debug, Clone, PartialEq)]
pub struct CanvasConfig {
    /// Canvas edge length (the canvas is square).
    pub size: f64,
    /// Blank margin on every side.
    pub padding: f64,
    /// Separation between adjacent cells.
    pub gap: f64,
    /// Number of equal grid subdivisions per axis.
    pub slice: u8,
    pub stroke: StrokeStyle,
}

impl Default for CanvasConfig {
    fn default() -> Self {
        Self {
            size: 14.0,
            padding: 2.0,
            gap: 2.0,
            slice: 6,
            stroke: StrokeStyle::default(),
        }
    }
}

/// A cell address in the unit grid: offset and span in grid units.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Cell {
    pub x: u8,
    pub y: u8,
    pub w: u8,
    pub h: u8,
}

/// An absolute rectangle on the canvas.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub width: f64,
    pub height: f64,
    pub x: f64,
    pub y: f64,
}

impl CanvasConfig {
    /// Edge length of one grid unit.
    pub fn unit(&self) -> f64 {
        let slice = f64::from(self.slice);
        (self.size - self.padding * 2.0 - self.gap * (slice - 1.0)) / slice
    }

    /// Resolve a unit-grid cell to an absolute rectangle.
    ///
    /// Pure arithmetic with no failure modes; the planner only produces cells
    /// inside the grid, and [`CanvasConfig::validate`] has already ruled out
    /// degenerate geometry.
    pub fn cell_rect(&self, cell: Cell) -> Rect {
        let unit = self.unit();
        let span = |k: u8| unit * f64::from(k) + self.gap * (f64::from(k) - 1.0);
        let offset = |v: u8| self.padding + (unit + self.gap) * f64::from(v);
        Rect {
            width: span(cell.w),
            height: span(cell.h),
            x: offset(cell.x),
            y: offset(cell.y),
        }
    }

    /// Check the profile describes a drawable canvas.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.slice == 0 {
            return Err(ConfigError::InvalidCanvas {
                message: "slice count must be > 0".into(),
            });
        }
        if self.unit() < 0.0 {
            return Err(ConfigError::InvalidCanvas {
                message: format!(
                    "size {} leaves no room for padding {} and {} gaps of {}",
                    self.size,
                    self.padding,
                    self.slice - 1,
                    self.gap
                ),
            });
        }
        Ok(())
    }
}
