//! pixicon: a pixel-grid icon editor core
//!
//! This crate draws a small vector path at icon resolution, previews it
//! magnified on a pixel grid with optional rotational and mirror symmetry,
//! and exports the result as SVG markup plus a serializable state record.
//!
//! # Example
//!
//! ```
//! use pixicon::{IconEditor, LayoutConfig};
//!
//! let mut editor = IconEditor::new(LayoutConfig::default()).unwrap();
//!
//! // Draw a quarter of the icon and let the symmetry complete it
//! editor.set_path("M2 2h6v6h-6z");
//! editor.apply_rotation(90, true);
//! editor.apply_rotation(180, true);
//! editor.apply_rotation(270, true);
//!
//! // One compositor pass for all of the above
//! assert!(editor.frame().unwrap());
//! assert!(!editor.frame().unwrap());
//!
//! let svg = editor.export_svg();
//! assert_eq!(svg.matches("<path").count(), 3);
//! ```
//!
//! # Serializable State
//!
//! The editor state travels as [`IconConfig`], with the [`Configurable`]
//! trait:
//!
//! ```
//! use pixicon::{Configurable, IconEditor, LayoutConfig};
//!
//! let mut editor = IconEditor::new(LayoutConfig::default()).unwrap();
//! editor.set_fill_style("teal");
//!
//! let json = editor.export_config().to_json().unwrap();
//!
//! let mut other = IconEditor::new(LayoutConfig::default()).unwrap();
//! other.set_config_json(&json).unwrap();
//! assert_eq!(other.state().fill_style, "teal");
//! ```

mod color;
mod editor;
mod error;
mod export;
mod geometry;
mod raster;
mod state;
mod symmetry;
mod template;

pub use color::{Color, ColorCanonicalizer, ColorModel, CssCanonicalizer};
pub use editor::{Configurable, FrameScheduler, IconEditor, ListenerId, ManualFrames};
pub use error::{ConfigError, EditorError, RenderError};
pub use export::{export_svg, svg_data_url};
pub use geometry::{Geometry, LayoutConfig, SizePx};
pub use raster::{Compositor, PresentationBuffer, RasterCompositor, Scene};
pub use state::{IconConfig, IconState, ItemConfig};
pub use symmetry::{Mirror, Pivot, Transform, TransformSet, TransformStack, derive};
pub use template::Template;
