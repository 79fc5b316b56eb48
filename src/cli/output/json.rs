//! JSON output formatting

use serde::Serialize;
use serde_json::ser::{PrettyFormatter, Serializer};

/// Layout options for indented JSON
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JsonFormat {
    /// Written at the start of every line after the first
    pub prefix: String,
    /// Written once per nesting level
    pub indent: String,
}

impl JsonFormat {
    pub fn new(prefix: impl Into<String>, indent: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
            indent: indent.into(),
        }
    }

    /// Serialize `value` with this layout
    ///
    /// Object keys keep their declaration order. No trailing newline is added.
    pub fn render<T: Serialize + ?Sized>(&self, value: &T) -> Result<String, serde_json::Error> {
        let mut buf = Vec::new();
        let formatter = PrettyFormatter::with_indent(self.indent.as_bytes());
        let mut ser = Serializer::with_formatter(&mut buf, formatter);
        value.serialize(&mut ser)?;

        // serde_json only emits valid UTF-8
        let text = String::from_utf8_lossy(&buf).into_owned();
        if self.prefix.is_empty() {
            return Ok(text);
        }

        // Newlines inside strings are escaped, so every raw '\n' is a line break
        Ok(text.replace('\n', &format!("\n{}", self.prefix)))
    }
}

impl Default for JsonFormat {
    fn default() -> Self {
        Self::new("", "  ")
    }
}
