//! Rasterization of the icon and its magnified presentation.
//!
//! A [`RasterCompositor`] pass has four steps:
//!
//! 1. Render the path at logical resolution (one pixel per grid cell) under
//!    every active transform: background, then fills, then strokes.
//! 2. Read the logical pixels back as straight-alpha RGBA.
//! 3. Project them onto the presentation surface as `f x f` blocks and draw
//!    the cell grid (see [`grid`]).
//! 4. Trace the path outline at presentation scale with a contrasting drop
//!    shadow, so the vector shape stays readable over the pixels.
//!
//! Every pass is described as a small SVG document, built with the
//! [`Template`] engine and rendered by resvg.

pub mod grid;
pub mod svg;

use image::RgbaImage;
use serde_json::{Value, json};

use crate::color::{Color, ColorCanonicalizer, ColorModel, CssCanonicalizer};
use crate::error::RenderError;
use crate::geometry::{Geometry, SizePx};
use crate::state::IconState;
use crate::symmetry::{Transform, TransformSet};
use crate::template::Template;

/// Outline alpha in translucent mode.
pub const TRANSLUCENT_ALPHA: f64 = 0.4;

const DOCUMENT: &str = r#"<svg xmlns="http://www.w3.org/2000/svg" width="{{w}}" height="{{h}}" viewBox="0 0 {{w}} {{h}}">{{content}}</svg>"#;

const BACKGROUND: &str =
    r#"<rect width="{{w}}" height="{{h}}" fill="{{color}}" fill-opacity="{{opacity}}"/>"#;

const FILL: &str = r#"<path d="{{path}}" transform="{{transform}}" fill="{{color}}" fill-opacity="{{opacity}}"/>"#;

const STROKE: &str = r#"<path d="{{path}}" transform="{{transform}}" fill="none" stroke="{{color}}" stroke-opacity="{{opacity}}" stroke-width="{{width}}"/>"#;

const OUTLINE: &str = concat!(
    r#"<filter id="halo" filterUnits="userSpaceOnUse" x="0" y="0" width="{{w}}" height="{{h}}">"#,
    r#"<feDropShadow dx="0" dy="0" stdDeviation="{{blur}}" flood-color="{{shadow}}" flood-opacity="1"/>"#,
    r#"</filter>"#,
    r#"<g filter="url(#halo)"><g transform="translate({{offset}} {{offset}}) scale({{pitch}})">{{content}}</g></g>"#,
);

// ============================================================================
// Compositor seam
// ============================================================================

/// Everything one compositor pass reads.
#[derive(Debug, Clone, Copy)]
pub struct Scene<'a> {
    pub state: &'a IconState,
    pub transforms: &'a TransformSet,
    pub geometry: Geometry,
}

/// The magnified, gridded preview produced by a compositor pass.
#[derive(Debug, Clone, PartialEq)]
pub struct PresentationBuffer {
    /// Straight-alpha pixels of the presentation surface.
    pub image: RgbaImage,
    pub geometry: Geometry,
    /// Logical grid size the buffer was rendered for.
    pub grid: SizePx,
}

/// Something that turns a [`Scene`] into a [`PresentationBuffer`].
///
/// [`RasterCompositor`] is the real implementation; tests substitute
/// recording doubles.
pub trait Compositor {
    fn render(&mut self, scene: &Scene<'_>) -> Result<PresentationBuffer, RenderError>;
}

// ============================================================================
// RasterCompositor
// ============================================================================

/// Renders scenes with resvg and tiny-skia.
#[derive(Debug, Clone)]
pub struct RasterCompositor<K = CssCanonicalizer> {
    colors: ColorModel<K>,
    document: Template,
    background: Template,
    fill: Template,
    stroke: Template,
    outline: Template,
}

impl Default for RasterCompositor {
    fn default() -> Self {
        Self::new()
    }
}

impl RasterCompositor {
    pub fn new() -> Self {
        Self::with_colors(ColorModel::new())
    }
}

impl<K: ColorCanonicalizer> RasterCompositor<K> {
    pub fn with_colors(colors: ColorModel<K>) -> Self {
        Self {
            colors,
            document: Template::new(DOCUMENT),
            background: Template::new(BACKGROUND),
            fill: Template::new(FILL),
            stroke: Template::new(STROKE),
            outline: Template::new(OUTLINE),
        }
    }

    /// Renders the icon at native resolution with straight alpha.
    pub fn render_logical(
        &self,
        state: &IconState,
        transforms: &TransformSet,
    ) -> Result<RgbaImage, RenderError> {
        svg::validate_path(&state.path)?;

        let SizePx { width, height } = state.size;
        let mut content = String::new();

        if let Some(background) = state.background() {
            let color = self.colors.parse(background);
            content.push_str(&self.background.render(&json!({
                "w": width,
                "h": height,
                "color": paint(&color),
                "opacity": color.opacity(),
            })));
        }

        if !state.just_trace && !state.fill_style.is_empty() {
            let color = self.colors.parse(&state.fill_style);
            for transform in each_transform(transforms) {
                content.push_str(&self.fill.render(&json!({
                    "path": state.path,
                    "transform": transform.to_svg_string(),
                    "color": paint(&color),
                    "opacity": color.opacity(),
                })));
            }
        }

        if !state.stroke_style.is_empty() {
            let color = self.colors.parse(&state.stroke_style);
            for transform in each_transform(transforms) {
                content.push_str(&self.stroke.render(&json!({
                    "path": state.path,
                    "transform": transform.to_svg_string(),
                    "color": paint(&color),
                    "opacity": color.opacity(),
                    "width": line_width(state.line_width),
                })));
            }
        }

        let doc = self.document.render(&json!({ "w": width, "h": height, "content": content }));
        let mut pixmap = svg::new_pixmap(width, height)?;
        svg::render_onto(&doc, &mut pixmap)?;
        Ok(svg::pixmap_to_rgba_image(&pixmap))
    }

    /// Builds the outline document drawn over the presentation surface.
    fn outline_document(
        &self,
        state: &IconState,
        transforms: &TransformSet,
        geometry: &Geometry,
        surface: SizePx,
    ) -> Option<String> {
        let style = if state.stroke_style.is_empty() {
            &state.fill_style
        } else {
            &state.stroke_style
        };
        let base = self.colors.parse(style);
        if !base.is_resolved() {
            return None;
        }

        let color = if state.translucent {
            base.with_alpha(TRANSLUCENT_ALPHA)
        } else {
            base
        };
        let pitch = f64::from(geometry.pitch);
        let border = f64::from(geometry.border);
        // In trace mode the outline keeps its nominal pixel width on screen.
        let width = if state.just_trace {
            line_width(state.line_width) / pitch
        } else {
            line_width(state.line_width)
        };
        let blur = 2.0 * border + width;

        let mut strokes = String::new();
        for transform in each_transform(transforms) {
            strokes.push_str(&self.stroke.render(&json!({
                "path": state.path,
                "transform": transform.to_svg_string(),
                "color": paint(&color),
                "opacity": color.opacity(),
                "width": width,
            })));
        }

        let content = self.outline.render(&json!({
            "w": surface.width,
            "h": surface.height,
            "blur": blur / 2.0,
            "shadow": base.contrast().to_string(),
            "offset": border / 2.0,
            "pitch": pitch,
            "content": strokes,
        }));

        Some(self.document.render(&json!({
            "w": surface.width,
            "h": surface.height,
            "content": content,
        })))
    }
}

impl<K: ColorCanonicalizer> Compositor for RasterCompositor<K> {
    fn render(&mut self, scene: &Scene<'_>) -> Result<PresentationBuffer, RenderError> {
        let Scene {
            state,
            transforms,
            geometry,
        } = *scene;

        let logical = self.render_logical(state, transforms)?;
        let mut surface = grid::project(&logical, &geometry)?;

        let size = geometry.surface_size(state.size);
        if let Some(doc) = self.outline_document(state, transforms, &geometry, size) {
            svg::render_onto(&doc, &mut surface)?;
        }

        tracing::trace!(
            width = size.width,
            height = size.height,
            transforms = transforms.len(),
            "composited presentation surface"
        );

        Ok(PresentationBuffer {
            image: svg::pixmap_to_rgba_image(&surface),
            geometry,
            grid: state.size,
        })
    }
}

/// The set's members, or the identity alone when the set is empty.
fn each_transform(transforms: &TransformSet) -> Vec<Transform> {
    if transforms.is_empty() {
        vec![Transform::identity()]
    } else {
        transforms.iter().copied().collect()
    }
}

/// SVG paint for a parsed color; unresolved colors paint nothing.
fn paint(color: &Color) -> Value {
    match (color.r(), color.g(), color.b()) {
        (Some(r), Some(g), Some(b)) => Value::String(format!("rgb({r},{g},{b})")),
        _ => Value::String("none".to_string()),
    }
}

/// Non-positive or non-finite widths fall back to one unit.
fn line_width(width: f64) -> f64 {
    if width.is_finite() && width > 0.0 {
        width
    } else {
        1.0
    }
}

// ============================================================================
// Tests
// ============================================================================
