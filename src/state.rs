//! Icon state and its serialized form.
//!
//! [`IconState`] is what the editor owns and the compositor reads.
//! [`IconConfig`] is the wire record handed to listeners and accepted by
//! [`IconEditor::set_config`](crate::IconEditor::set_config). It is the only
//! persistence and sharing format.
//!
//! # JSON Format
//!
//! ```json
//! {
//!   "x": 16,
//!   "y": 16,
//!   "background": "white",
//!   "justTrace": false,
//!   "translucent": false,
//!   "rotations": [90],
//!   "mirrors": [true, false, false, false],
//!   "items": [
//!     { "path": "M2 2h12v12z", "lineWidth": 1, "strokeStyle": "", "fillStyle": "#000" }
//!   ]
//! }
//! ```
//!
//! # Example
//!
//! ```
//! use pixicon::IconConfig;
//!
//! let json = r##"{"x":8,"y":8,"justTrace":false,"translucent":true,
//!     "rotations":[90],"mirrors":[false,false,false,false],
//!     "items":[{"path":"M0 0h4v4z","lineWidth":1,"strokeStyle":"red","fillStyle":"#000"}]}"##;
//!
//! let config = IconConfig::from_json(json).unwrap();
//! assert_eq!(config.items[0].path, "M0 0h4v4z");
//! assert!(config.background.is_none());
//!
//! let again = IconConfig::from_json(&config.to_json().unwrap()).unwrap();
//! assert_eq!(again, config);
//! ```

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::geometry::SizePx;

// ============================================================================
// Wire format
// ============================================================================

/// Drawing settings for one path.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "jsonschema", derive(schemars::JsonSchema))]
#[serde(rename_all = "camelCase")]
pub struct ItemConfig {
    /// Path data in the SVG path mini-language, kept verbatim.
    pub path: String,
    pub line_width: f64,
    pub stroke_style: String,
    pub fill_style: String,
}

/// Serialized icon state.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "jsonschema", derive(schemars::JsonSchema))]
#[serde(rename_all = "camelCase")]
pub struct IconConfig {
    pub x: u32,
    pub y: u32,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub background: Option<String>,

    #[serde(default)]
    pub just_trace: bool,

    #[serde(default)]
    pub translucent: bool,

    #[serde(default)]
    pub rotations: Vec<i32>,

    #[serde(default)]
    pub mirrors: [bool; 4],

    /// Only the first item is drawn.
    pub items: Vec<ItemConfig>,
}

impl IconConfig {
    /// Checks the fields that JSON typing alone cannot enforce.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.x == 0 || self.y == 0 {
            return Err(ConfigError::EmptyGrid {
                x: self.x,
                y: self.y,
            });
        }
        let item = self.items.first().ok_or(ConfigError::NoItems)?;
        if !item.line_width.is_finite() || item.line_width < 0.0 {
            return Err(ConfigError::LineWidth(item.line_width));
        }
        Ok(())
    }

    /// Serializes the config to a JSON string.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }

    /// Serializes the config to a pretty-printed JSON string.
    pub fn to_json_pretty(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// Deserializes a config from a JSON string.
    ///
    /// This only checks the JSON shape; call [`validate`](Self::validate)
    /// before trusting the values.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}

// ============================================================================
// IconState
// ============================================================================

/// Everything the compositor needs besides the transforms and geometry.
#[derive(Debug, Clone, PartialEq)]
pub struct IconState {
    pub path: String,
    pub fill_style: String,
    pub stroke_style: String,
    pub line_width: f64,
    pub background: Option<String>,
    pub just_trace: bool,
    pub translucent: bool,
    pub size: SizePx,
    pub rotations: Vec<i32>,
    pub mirrors: [bool; 4],
}

impl Default for IconState {
    fn default() -> Self {
        Self {
            path: String::new(),
            fill_style: "#000".to_string(),
            stroke_style: String::new(),
            line_width: 1.0,
            background: None,
            just_trace: false,
            translucent: false,
            size: SizePx::new(16, 16),
            rotations: Vec::new(),
            mirrors: [false; 4],
        }
    }
}

impl IconState {
    /// Snapshot in wire format.
    pub fn to_config(&self) -> IconConfig {
        IconConfig {
            x: self.size.width,
            y: self.size.height,
            background: self.background.clone(),
            just_trace: self.just_trace,
            translucent: self.translucent,
            rotations: self.rotations.clone(),
            mirrors: self.mirrors,
            items: vec![ItemConfig {
                path: self.path.clone(),
                line_width: self.line_width,
                stroke_style: self.stroke_style.clone(),
                fill_style: self.fill_style.clone(),
            }],
        }
    }

    /// Builds state from a config that has passed [`IconConfig::validate`].
    ///
    /// Repeated rotation angles are collapsed, keeping the first occurrence.
    pub fn from_config(config: &IconConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        let item = config.items.first().ok_or(ConfigError::NoItems)?;

        let mut rotations = Vec::with_capacity(config.rotations.len());
        for &angle in &config.rotations {
            if !rotations.contains(&angle) {
                rotations.push(angle);
            }
        }

        Ok(Self {
            path: item.path.clone(),
            fill_style: item.fill_style.clone(),
            stroke_style: item.stroke_style.clone(),
            line_width: item.line_width,
            background: config.background.clone(),
            just_trace: config.just_trace,
            translucent: config.translucent,
            size: SizePx::new(config.x, config.y),
            rotations,
            mirrors: config.mirrors,
        })
    }

    /// The background to paint, if any. Empty strings count as none.
    pub fn background(&self) -> Option<&str> {
        self.background.as_deref().filter(|b| !b.is_empty())
    }
}

// ============================================================================
// Tests
// ============================================================================
