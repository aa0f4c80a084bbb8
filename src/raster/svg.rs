//! SVG rendering utilities using resvg/usvg.
//!
//! The compositor describes each pass as a small SVG document and hands it
//! to resvg. Path data is checked with `svgtypes` first, because usvg quietly
//! drops whatever it cannot parse.

use image::{Rgba, RgbaImage};
use resvg::tiny_skia::{Pixmap, Transform};
use resvg::usvg::{Options, Tree};

use crate::error::RenderError;

/// Fails if `path` is not valid SVG path data. An empty path is valid.
pub fn validate_path(path: &str) -> Result<(), RenderError> {
    for segment in svgtypes::PathParser::from(path) {
        segment.map_err(|e| RenderError::InvalidPath(e.to_string()))?;
    }
    Ok(())
}

/// Allocates a transparent surface.
pub fn new_pixmap(width: u32, height: u32) -> Result<Pixmap, RenderError> {
    Pixmap::new(width, height).ok_or(RenderError::Surface { width, height })
}

/// Parses an SVG document and draws it over `pixmap` at 1:1 scale.
pub fn render_onto(svg_data: &str, pixmap: &mut Pixmap) -> Result<(), RenderError> {
    let opts = Options::default();
    let tree = Tree::from_str(svg_data, &opts)?;
    resvg::render(&tree, Transform::identity(), &mut pixmap.as_mut());
    Ok(())
}

/// Converts a tiny_skia Pixmap to an image::RgbaImage.
///
/// tiny_skia stores premultiplied alpha; the image gets straight alpha.
pub fn pixmap_to_rgba_image(pixmap: &Pixmap) -> RgbaImage {
    let width = pixmap.width();
    let mut img = RgbaImage::new(width, pixmap.height());

    for (index, pixel) in pixmap.pixels().iter().enumerate() {
        let index = index as u32;
        let c = pixel.demultiply();
        img.put_pixel(
            index % width,
            index / width,
            Rgba([c.red(), c.green(), c.blue(), c.alpha()]),
        );
    }

    img
}

#[cfg(test)]
mod tests {
    use super::*;

    const SQUARE: &str = r##"<svg xmlns="http://www.w3.org/2000/svg" width="4" height="4" viewBox="0 0 4 4"><rect width="2" height="2" fill="#ff0000"/></svg>"##;

    #[test]
    fn valid_paths_pass() {
        assert!(validate_path("M0 0L4 4").is_ok());
        assert!(validate_path("m1 1h2v2h-2z").is_ok());
        assert!(validate_path("").is_ok());
    }

    #[test]
    fn invalid_path_is_an_error() {
        assert!(matches!(
            validate_path("M0 0 L banana"),
            Err(RenderError::InvalidPath(_))
        ));
    }

    #[test]
    fn render_square_onto_pixmap() {
        let mut pixmap = new_pixmap(4, 4).unwrap();
        render_onto(SQUARE, &mut pixmap).unwrap();

        let img = pixmap_to_rgba_image(&pixmap);
        assert_eq!(img.get_pixel(0, 0).0, [255, 0, 0, 255]);
        assert_eq!(img.get_pixel(3, 3).0, [0, 0, 0, 0]);
    }

    #[test]
    fn malformed_document_is_an_error() {
        let mut pixmap = new_pixmap(4, 4).unwrap();
        assert!(matches!(
            render_onto("<svg", &mut pixmap),
            Err(RenderError::Tree(_))
        ));
    }

    #[test]
    fn zero_sized_surface_is_an_error() {
        assert!(matches!(
            new_pixmap(0, 4),
            Err(RenderError::Surface { width: 0, height: 4 })
        ));
    }
}
