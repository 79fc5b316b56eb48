//! Debug dump of serializable values
//!
//! Produces a type-annotated, indented, multi-line rendering of any value that
//! implements [`Serialize`], for ad-hoc inspection during development:
//!
//! ```text
//! (ghe_providers::providers::ProvidersProtocol) (map) (len=1) {
//!     (string) (len=11) "ProvidersV1": (map) (len=0) {},
//! }
//! ```
//!
//! The output is deterministic for a given value and [`DumpConfig`].

use serde::Serialize;
use serde_json::Value;
use std::fmt::Write;

/// Options for [`dump_with`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DumpConfig {
    /// Indentation written once per nesting level
    pub indent: String,
    /// Emit map entries in lexicographic key order
    pub sort_keys: bool,
    /// Show map keys; when off only the values are listed
    pub show_keys: bool,
}

impl Default for DumpConfig {
    fn default() -> Self {
        Self {
            indent: "    ".to_string(),
            sort_keys: true,
            show_keys: true,
        }
    }
}

/// Dump `value` with the default configuration
pub fn dump<T: Serialize + ?Sized>(value: &T) -> Result<String, serde_json::Error> {
    dump_with(value, &DumpConfig::default())
}

/// Dump `value` with `config`
///
/// # Errors
///
/// Fails when `value` cannot be represented as JSON, for example a map with
/// non-string keys.
pub fn dump_with<T: Serialize + ?Sized>(
    value: &T,
    config: &DumpConfig,
) -> Result<String, serde_json::Error> {
    let tree = serde_json::to_value(value)?;
    let mut out = format!("({}) ", std::any::type_name::<T>());
    write_value(&mut out, &tree, 0, config);
    Ok(out)
}

fn write_value(out: &mut String, value: &Value, depth: usize, config: &DumpConfig) {
    match value {
        Value::Null => out.push_str("<nil>"),
        Value::Bool(b) => {
            let _ = write!(out, "(bool) {}", b);
        }
        Value::Number(n) => {
            let _ = write!(out, "(number) {}", n);
        }
        Value::String(s) => write_string(out, s),
        Value::Array(items) => {
            let _ = write!(out, "(array) (len={}) {{", items.len());
            if items.is_empty() {
                out.push('}');
                return;
            }
            out.push('\n');
            for item in items {
                push_indent(out, depth + 1, config);
                write_value(out, item, depth + 1, config);
                out.push_str(",\n");
            }
            push_indent(out, depth, config);
            out.push('}');
        }
        Value::Object(map) => {
            let _ = write!(out, "(map) (len={}) {{", map.len());
            if map.is_empty() {
                out.push('}');
                return;
            }
            out.push('\n');

            let mut entries: Vec<(&String, &Value)> = map.iter().collect();
            if config.sort_keys {
                entries.sort_by(|a, b| a.0.cmp(b.0));
            }

            for (key, item) in entries {
                push_indent(out, depth + 1, config);
                if config.show_keys {
                    write_string(out, key);
                    out.push_str(": ");
                }
                write_value(out, item, depth + 1, config);
                out.push_str(",\n");
            }
            push_indent(out, depth, config);
            out.push('}');
        }
    }
}

fn write_string(out: &mut String, s: &str) {
    let _ = write!(out, "(string) (len={}) {:?}", s.len(), s);
}

fn push_indent(out: &mut String, depth: usize, config: &DumpConfig) {
    for _ in 0..depth {
        out.push_str(&config.indent);
    }
}
