//! Vector export of a serialized icon.
//!
//! The markup is built from the first item of an [`IconConfig`] and the
//! active transforms, one path block per transform. Lines end with CRLF.
//!
//! ```
//! use pixicon::{IconConfig, ItemConfig, TransformSet, export_svg, svg_data_url};
//!
//! let config = IconConfig {
//!     x: 8,
//!     y: 8,
//!     background: None,
//!     just_trace: false,
//!     translucent: false,
//!     rotations: vec![],
//!     mirrors: [false; 4],
//!     items: vec![ItemConfig {
//!         path: "M0 0h4v4z".into(),
//!         line_width: 1.0,
//!         stroke_style: "red".into(),
//!         fill_style: "#000".into(),
//!     }],
//! };
//!
//! let svg = export_svg(&config, &TransformSet::new());
//! assert!(svg.starts_with("<?xml"));
//! assert!(svg.contains(r#"viewBox="0 0 8 8""#));
//! assert!(svg_data_url(&svg).starts_with("data:image/svg+xml;base64,"));
//! ```

use std::sync::LazyLock;

use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use serde_json::json;

use crate::state::IconConfig;
use crate::symmetry::TransformSet;
use crate::template::Template;

static SVG: LazyLock<Template> = LazyLock::new(|| {
    Template::new(concat!(
        "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\r\n",
        "<svg xmlns=\"http://www.w3.org/2000/svg\" viewBox=\"0 0 {{w}} {{h}}\"\r\n",
        " width=\"{{w}}\" height=\"{{h}}\">\r\n",
        "{{content}}",
        "</svg>\r\n",
    ))
});

static PATH: LazyLock<Template> = LazyLock::new(|| {
    Template::new(concat!(
        "  <path \r\n",
        "   fill=\"{{fill}}\"\r\n",
        "   stroke=\"{{stroke}}\"\r\n",
        "   stroke-width=\"{{width}}\"\r\n",
        "   d=\"{{path}}\"/>\r\n",
    ))
});

static GROUP: LazyLock<Template> = LazyLock::new(|| {
    Template::new(concat!(
        "  <g transform=\"{{transform}}\">\r\n",
        "{{pathSvg}}\r\n",
        "</g>\r\n",
    ))
});

/// Renders the icon as a standalone SVG document.
///
/// Style strings and path data are written verbatim. Identity transforms are
/// emitted without a wrapping group; an empty set yields a single path.
pub fn export_svg(config: &IconConfig, transforms: &TransformSet) -> String {
    let path = match config.items.first() {
        Some(item) => PATH.render(&json!({
            "fill": item.fill_style,
            "stroke": item.stroke_style,
            "width": item.line_width,
            "path": item.path,
        })),
        None => String::new(),
    };

    let content = if transforms.is_empty() {
        path
    } else {
        let mut content = String::new();
        for transform in transforms {
            if transform.is_identity() {
                content.push_str(&path);
            } else {
                content.push_str(&GROUP.render(&json!({
                    "transform": transform.to_svg_string(),
                    "pathSvg": path,
                })));
            }
        }
        content
    };

    SVG.render(&json!({
        "w": config.x,
        "h": config.y,
        "content": content,
    }))
}

/// Wraps SVG markup in a base64 `data:` URL.
pub fn svg_data_url(svg: &str) -> String {
    format!("data:image/svg+xml;base64,{}", STANDARD.encode(svg))
}
