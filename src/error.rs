//! Error types for the editor, the compositor and configuration ingestion.

use thiserror::Error;

/// Failures raised while rasterizing the icon.
#[derive(Debug, Error)]
pub enum RenderError {
    /// The path data was rejected by the path parser.
    #[error("invalid path data: {0}")]
    InvalidPath(String),

    /// The generated document could not be turned into a render tree.
    #[error("failed to build render tree: {0}")]
    Tree(#[from] resvg::usvg::Error),

    /// A surface of the requested size could not be allocated.
    #[error("cannot allocate a {width}x{height} surface")]
    Surface { width: u32, height: u32 },
}

/// Problems found when ingesting a serialized [`IconConfig`](crate::IconConfig).
#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("grid size must be at least 1x1, got {x}x{y}")]
    EmptyGrid { x: u32, y: u32 },

    #[error("configuration has no items")]
    NoItems,

    #[error("line width must be a finite, non-negative number, got {0}")]
    LineWidth(f64),
}

/// Errors surfaced by [`IconEditor`](crate::IconEditor) operations.
#[derive(Debug, Error)]
pub enum EditorError {
    /// Mirror index outside `0..=3`.
    #[error("unknown mirroring {0}")]
    InvalidMirror(usize),

    #[error(transparent)]
    Render(#[from] RenderError),

    #[error("invalid configuration: {0}")]
    Config(#[from] ConfigError),

    #[error("malformed configuration JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// The layout cannot fit even the initial grid.
    #[error("a {x}x{y} grid does not fit the available width of {available_width}px")]
    NoGeometry { x: u32, y: u32, available_width: u32 },
}
