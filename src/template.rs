//! A minimal `{{placeholder}}` template engine.
//!
//! Templates are compiled once into a list of segments and can then be
//! rendered any number of times. Missing values fall back to the template's
//! defaults and finally to the placeholder text itself, so rendering never
//! fails.
//!
//! # Example
//!
//! ```
//! use pixicon::Template;
//! use serde_json::json;
//!
//! let t = Template::with_defaults("a{{x}}b{{y}}c", json!({ "y": 2 }));
//! assert_eq!(t.render(&json!({ "x": 1 })), "a1b2c");
//! assert_eq!(Template::new("{{z}}").render(&json!({})), "{{z}}");
//! ```

use std::sync::LazyLock;

use regex::Regex;
use serde_json::Value;

static PLACEHOLDER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\{\{(.*?)\}\}").expect("placeholder pattern is valid"));

#[derive(Debug, Clone, PartialEq)]
enum Segment {
    Literal(String),
    Placeholder(String),
}

/// A compiled template.
#[derive(Debug, Clone)]
pub struct Template {
    segments: Vec<Segment>,
    defaults: Value,
}

impl Template {
    pub fn new(source: &str) -> Self {
        Self::with_defaults(source, Value::Null)
    }

    /// Compiles `source`, consulting `defaults` for values missing at render time.
    ///
    /// `defaults` should be a JSON object; anything else acts as an empty map.
    pub fn with_defaults(source: &str, defaults: Value) -> Self {
        let mut segments = Vec::new();
        let mut end = 0;

        for caps in PLACEHOLDER.captures_iter(source) {
            let (Some(whole), Some(name)) = (caps.get(0), caps.get(1)) else {
                continue;
            };
            if whole.start() > end {
                segments.push(Segment::Literal(source[end..whole.start()].to_string()));
            }
            segments.push(Segment::Placeholder(name.as_str().to_string()));
            end = whole.end();
        }
        if end < source.len() {
            segments.push(Segment::Literal(source[end..].to_string()));
        }

        Self { segments, defaults }
    }

    /// Renders against `values` (a JSON object), then the defaults.
    pub fn render(&self, values: &Value) -> String {
        let mut out = String::new();
        for segment in &self.segments {
            match segment {
                Segment::Literal(text) => out.push_str(text),
                Segment::Placeholder(name) => {
                    let found = lookup(values, name).or_else(|| lookup(&self.defaults, name));
                    match found {
                        Some(value) => push_value(&mut out, value),
                        None => {
                            out.push_str("{{");
                            out.push_str(name);
                            out.push_str("}}");
                        }
                    }
                }
            }
        }
        out
    }
}

fn lookup<'a>(values: &'a Value, name: &str) -> Option<&'a Value> {
    values.get(name).filter(|v| !v.is_null())
}

fn push_value(out: &mut String, value: &Value) {
    match value {
        Value::String(s) => out.push_str(s),
        Value::Number(n) => match n.as_f64() {
            Some(f) if n.is_f64() => out.push_str(&format_number(f)),
            _ => out.push_str(&n.to_string()),
        },
        other => out.push_str(&other.to_string()),
    }
}

/// Formats a number the short way: `1` rather than `1.0`, never `-0`.
pub fn format_number(value: f64) -> String {
    format!("{}", value + 0.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn defaults_fill_missing_values() {
        let t = Template::with_defaults("a{{x}}b{{y}}c", json!({ "y": 2 }));
        assert_eq!(t.render(&json!({ "x": 1 })), "a1b2c");
    }

    #[test]
    fn values_take_precedence_over_defaults() {
        let t = Template::with_defaults("{{y}}", json!({ "y": "default" }));
        assert_eq!(t.render(&json!({ "y": "given" })), "given");
    }

    #[test]
    fn missing_value_renders_placeholder() {
        assert_eq!(Template::new("{{z}}").render(&json!({})), "{{z}}");
        assert_eq!(Template::new("<{{z}}>").render(&json!({ "z": null })), "<{{z}}>");
    }

    #[test]
    fn segments_split_literal_and_placeholder() {
        let t = Template::new("{{a}}{{b}} tail");
        assert_eq!(
            t.segments,
            vec![
                Segment::Placeholder("a".into()),
                Segment::Placeholder("b".into()),
                Segment::Literal(" tail".into()),
            ]
        );
    }

    #[test]
    fn literal_spanning_lines_is_kept() {
        let t = Template::new("line one\r\nline {{n}}\r\n");
        assert_eq!(t.render(&json!({ "n": 2 })), "line one\r\nline 2\r\n");
    }

    #[test]
    fn render_is_repeatable() {
        let t = Template::new("[{{v}}]");
        assert_eq!(t.render(&json!({ "v": "a" })), "[a]");
        assert_eq!(t.render(&json!({ "v": "b" })), "[b]");
        assert_eq!(t.render(&json!({})), "[{{v}}]");
    }

    #[test]
    fn numbers_render_short() {
        let t = Template::new("{{a}} {{b}} {{c}}");
        assert_eq!(t.render(&json!({ "a": 1.0, "b": 0.25, "c": -3 })), "1 0.25 -3");
    }

    #[test]
    fn no_placeholders_is_single_literal() {
        let t = Template::new("plain");
        assert_eq!(t.segments, vec![Segment::Literal("plain".into())]);
        assert_eq!(t.render(&json!({})), "plain");
    }
}
