//! Schema leaf values: a literal string or a one-hop `{path}` reference.

use regex::Regex;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::Value;
use std::fmt;
use std::sync::LazyLock;

/// Whole-string `{a.b.c}` match. Braces anywhere else make the value a literal.
static REF_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^\{([^{}]+)\}$").unwrap());

/// A dotted path into the resolution context, e.g. `colors.primary`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RefPath {
    raw: String,
    segments: Vec<String>,
}

impl RefPath {
    /// The reference exactly as written, braces included.
    pub fn raw(&self) -> &str {
        &self.raw
    }

    pub fn segments(&self) -> &[String] {
        &self.segments
    }

    /// The dotted path without braces.
    pub fn dotted(&self) -> String {
        self.segments.join(".")
    }
}

/// A single editable value in the theme schema.
///
/// References are resolved one level deep only: if the target of a
/// reference is itself a `{...}` string, that text is the result.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Token {
    Literal(String),
    Reference(RefPath),
}

impl Token {
    /// Classify a raw schema string.
    pub fn parse(s: &str) -> Self {
        match REF_RE.captures(s) {
            Some(caps) => Token::Reference(RefPath {
                raw: s.to_string(),
                segments: caps[1].split('.').map(str::to_string).collect(),
            }),
            None => Token::Literal(s.to_string()),
        }
    }

    /// Build a token from any JSON value.
    ///
    /// Numbers and booleans become literals holding their textual form.
    /// Objects and arrays become literals holding their JSON text, which the
    /// sanitizer later rejects.
    pub fn from_value(value: &Value) -> Self {
        match value {
            Value::String(s) => Token::parse(s),
            Value::Null => Token::Literal(String::new()),
            other => Token::Literal(other.to_string()),
        }
    }

    pub fn as_literal(&self) -> Option<&str> {
        match self {
            Token::Literal(s) => Some(s),
            Token::Reference(_) => None,
        }
    }

    pub fn as_reference(&self) -> Option<&RefPath> {
        match self {
            Token::Literal(_) => None,
            Token::Reference(path) => Some(path),
        }
    }

    pub fn is_reference(&self) -> bool {
        matches!(self, Token::Reference(_))
    }

    /// The token as it appears in a schema document.
    pub fn as_str(&self) -> &str {
        match self {
            Token::Literal(s) => s,
            Token::Reference(path) => path.raw(),
        }
    }
}

impl From<&str> for Token {
    fn from(s: &str) -> Self {
        Token::parse(s)
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for Token {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for Token {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = Value::deserialize(deserializer)?;
        Ok(Token::from_value(&value))
    }
}

/// Shorthand for schema defaults.
pub(crate) fn tok(s: &str) -> Option<Token> {
    Some(Token::parse(s))
}
