//! Grid sizes and the magnified presentation geometry.
//!
//! The presentation surface shows every logical pixel as an `f x f` cell with
//! a `b` pixel border. The cell plus border span is the pitch `ff`, and the
//! surface measures `ff * x + b` by `ff * y + b`.

use serde::{Deserialize, Serialize};

/// A 2D size in pixel units.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SizePx {
    pub width: u32,
    pub height: u32,
}

impl SizePx {
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }
}

// ============================================================================
// LayoutConfig
// ============================================================================

/// Host-supplied bounds for sizing the presentation surface.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct LayoutConfig {
    /// Horizontal space the host can give the presentation surface.
    pub available_width: u32,

    /// Upper bound on the width used for sizing, whatever the host offers.
    pub max_width: u32,

    /// Largest pitch a cell may get.
    pub max_cell: u32,

    /// Pitches below this are rejected.
    pub min_pitch: u32,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            available_width: 1024,
            max_width: 1024,
            max_cell: 30,
            min_pitch: 3,
        }
    }
}

impl LayoutConfig {
    /// Returns a copy with a different available width.
    pub fn with_available_width(mut self, available_width: u32) -> Self {
        self.available_width = available_width;
        self
    }
}

// ============================================================================
// Geometry
// ============================================================================

/// Cell size, border and pitch of the presentation surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Geometry {
    /// Cell size `f`.
    pub cell: u32,
    /// Border width `b`.
    pub border: u32,
    /// Pitch `ff = f + b`.
    pub pitch: u32,
}

impl Geometry {
    /// Fits an `x` by `y` grid into the layout.
    ///
    /// The pitch is `floor(min(width / x, max_cell))` with the border taking
    /// a tenth of it. Returns `None` for an empty grid or when the pitch falls
    /// below `min_pitch`.
    pub fn compute(grid: SizePx, layout: &LayoutConfig) -> Option<Self> {
        if grid.width == 0 || grid.height == 0 {
            return None;
        }

        let width = f64::from(layout.available_width.min(layout.max_width));
        let pitch = (width / f64::from(grid.width))
            .min(f64::from(layout.max_cell))
            .floor();
        let border = (pitch / 10.0).round();
        let cell = pitch - border;

        if pitch < f64::from(layout.min_pitch) {
            return None;
        }

        Some(Self {
            cell: cell as u32,
            border: border as u32,
            pitch: (cell + border) as u32,
        })
    }

    /// Size of the presentation surface for a grid.
    pub fn surface_size(&self, grid: SizePx) -> SizePx {
        SizePx::new(
            self.pitch * grid.width + self.border,
            self.pitch * grid.height + self.border,
        )
    }

    /// Top-left corner of the cell for logical pixel `(xi, yi)`.
    pub fn cell_origin(&self, xi: u32, yi: u32) -> (u32, u32) {
        (self.border + xi * self.pitch, self.border + yi * self.pitch)
    }
}
