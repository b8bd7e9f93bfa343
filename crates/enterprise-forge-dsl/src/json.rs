use std::collections::BTreeMap;
use std::fmt;

/// A parsed structured document.
///
/// Only three forms exist: arrays, objects and strings. Object members are
/// kept in key order so that rendering is deterministic.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Json {
    Array(Vec<Json>),
    Object(BTreeMap<String, Json>),
    String(String),
}

impl Json {
    /// Short name of the variant, for diagnostics.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Array(_) => "array",
            Self::Object(_) => "object",
            Self::String(_) => "string",
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::String(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_array(&self) -> Option<&[Json]> {
        match self {
            Self::Array(items) => Some(items),
            _ => None,
        }
    }

    pub fn as_object(&self) -> Option<&BTreeMap<String, Json>> {
        match self {
            Self::Object(members) => Some(members),
            _ => None,
        }
    }

    /// Looks up an object member. Returns `None` for non-objects.
    pub fn get(&self, key: &str) -> Option<&Json> {
        self.as_object().and_then(|members| members.get(key))
    }

    /// Renders the canonical compact form: no whitespace, members in key
    /// order.
    ///
    /// Strings are written verbatim; a string containing `"` renders to text
    /// the grammar cannot read back.
    pub fn render(&self) -> String {
        let mut output = String::new();
        render_into(self, &mut output);
        output
    }
}

fn render_into(json: &Json, output: &mut String) {
    match json {
        Json::String(s) => {
            output.push('"');
            output.push_str(s);
            output.push('"');
        }
        Json::Array(items) => {
            output.push('[');
            for (i, item) in items.iter().enumerate() {
                if i > 0 {
                    output.push(',');
                }
                render_into(item, output);
            }
            output.push(']');
        }
        Json::Object(members) => {
            output.push('{');
            for (i, (key, value)) in members.iter().enumerate() {
                if i > 0 {
                    output.push(',');
                }
                output.push('"');
                output.push_str(key);
                output.push_str("\":");
                render_into(value, output);
            }
            output.push('}');
        }
    }
}

impl fmt::Display for Json {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}

impl From<&str> for Json {
    fn from(s: &str) -> Self {
        Self::String(s.to_string())
    }
}
