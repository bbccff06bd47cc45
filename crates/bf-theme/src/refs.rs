//! Reference resolution against a per-call context.
//!
//! The context is a JSON tree `{ colors, derived, buttons, pills, inputs,
//! nav, status }` built fresh for each resolution. A `{path}` token looks up
//! one value in it. Lookups are one hop: a target that is itself a `{...}`
//! string is returned as text, never followed.

use serde::Serialize;
use serde_json::{Map, Value};

use crate::derived::DerivedValues;
use crate::schema::{EditableTokens, RefPath, Token};

#[derive(Debug, Clone, PartialEq)]
pub struct ResolutionContext {
    root: Value,
}

impl ResolutionContext {
    /// Assemble the lookup root from the editable groups and derived values.
    pub fn new(editable: &EditableTokens, derived: &DerivedValues) -> Self {
        let mut root = Map::new();
        root.insert("colors".into(), to_tree(&editable.colors));
        root.insert("derived".into(), to_tree(derived));
        root.insert("buttons".into(), to_tree(&editable.buttons));
        root.insert("pills".into(), to_tree(&editable.pills));
        root.insert("inputs".into(), to_tree(&editable.inputs));
        root.insert("nav".into(), to_tree(&editable.nav));
        root.insert("status".into(), to_tree(&editable.status));
        Self {
            root: Value::Object(root),
        }
    }

    /// Wrap an arbitrary JSON tree as a context.
    pub fn from_value(root: Value) -> Self {
        Self { root }
    }

    /// Walk `path` through nested objects. `null` targets count as missing.
    pub fn lookup(&self, path: &RefPath) -> Option<&Value> {
        let mut node = &self.root;
        for segment in path.segments() {
            node = node.as_object()?.get(segment)?;
        }
        (!node.is_null()).then_some(node)
    }

    /// Text of a token: the literal itself, or the referenced value.
    ///
    /// `None` when a reference misses.
    pub fn try_resolve(&self, token: &Token) -> Option<String> {
        match token {
            Token::Literal(s) => Some(s.clone()),
            Token::Reference(path) => self.lookup(path).map(value_text),
        }
    }
}

/// Resolve a token, returning the original `{path}` text on a miss.
pub fn resolve_refs(token: &Token, ctx: &ResolutionContext) -> String {
    ctx.try_resolve(token)
        .unwrap_or_else(|| token.as_str().to_string())
}

/// [`resolve_refs`] for a raw schema string.
pub fn resolve_str(raw: &str, ctx: &ResolutionContext) -> String {
    resolve_refs(&Token::parse(raw), ctx)
}

fn to_tree<T: Serialize>(group: &T) -> Value {
    serde_json::to_value(group).unwrap_or(Value::Null)
}

fn value_text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}
