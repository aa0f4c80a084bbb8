//! Projection of logical pixels onto the magnified, gridded surface.

use image::RgbaImage;
use resvg::tiny_skia::{Color, Paint, Path, PathBuilder, Pixmap, Rect, Stroke, Transform};

use super::svg::new_pixmap;
use crate::error::RenderError;
use crate::geometry::{Geometry, SizePx};

/// Grid line color, `rgba(0,0,0,0.2)`.
const GRID_ALPHA: u8 = 51;

/// Paints every visible logical pixel as an `f x f` block on a white surface
/// and draws the cell grid over it.
pub fn project(logical: &RgbaImage, geometry: &Geometry) -> Result<Pixmap, RenderError> {
    let grid = SizePx::new(logical.width(), logical.height());
    let size = geometry.surface_size(grid);
    let mut surface = new_pixmap(size.width, size.height)?;
    surface.fill(Color::WHITE);

    let cell = geometry.cell as f32;
    let mut paint = Paint {
        anti_alias: false,
        ..Paint::default()
    };

    for (xi, yi, pixel) in logical.enumerate_pixels() {
        let [r, g, b, a] = pixel.0;
        if a == 0 {
            continue;
        }
        let (xs, ys) = geometry.cell_origin(xi, yi);
        if let Some(rect) = Rect::from_xywh(xs as f32, ys as f32, cell, cell) {
            paint.set_color_rgba8(r, g, b, a);
            surface.fill_rect(rect, &paint, Transform::identity(), None);
        }
    }

    if let Some(lines) = grid_path(grid, geometry, size) {
        let mut paint = Paint::default();
        paint.set_color_rgba8(0, 0, 0, GRID_ALPHA);
        let stroke = Stroke {
            width: 1.0,
            ..Stroke::default()
        };
        surface.stroke_path(&lines, &paint, &stroke, Transform::identity(), None);
    }

    Ok(surface)
}

/// Outlines each cell when the border is wide enough to show it; otherwise
/// draws single separator lines, offset half a pixel so they stay crisp.
fn grid_path(grid: SizePx, geometry: &Geometry, surface: SizePx) -> Option<Path> {
    let mut pb = PathBuilder::new();

    if geometry.border > 1 {
        let cell = geometry.cell as f32;
        for yi in 0..grid.height {
            for xi in 0..grid.width {
                let (xs, ys) = geometry.cell_origin(xi, yi);
                if let Some(rect) = Rect::from_xywh(xs as f32, ys as f32, cell, cell) {
                    pb.push_rect(rect);
                }
            }
        }
    } else {
        let pitch = geometry.pitch as f32;
        let offset = geometry.border as f32 - 0.5;
        let (width, height) = (surface.width as f32, surface.height as f32);
        for yi in 0..=grid.height {
            let y = yi as f32 * pitch + offset;
            pb.move_to(0.0, y);
            pb.line_to(width, y);
        }
        for xi in 0..=grid.width {
            let x = xi as f32 * pitch + offset;
            pb.move_to(x, 0.0);
            pb.line_to(x, height);
        }
    }

    pb.finish()
}
