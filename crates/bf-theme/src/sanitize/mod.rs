//! CSS variable sanitizer.
//!
//! Takes a flat candidate map and returns only the entries whose key is
//! allowlisted and whose value passes its category check. Each key is
//! atomic: it is either present with a valid trimmed value, or absent.
//! Nothing here errors; absence is the only signal.

mod rules;

#[cfg(test)]
mod tests;

pub use rules::{classify, CategoryRule, VarCategory, CATEGORY_RULES};

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use tracing::debug;

use crate::allowlist::Allowlist;

/// Unsanitized variable map, as produced by the resolver.
pub type CssVarMap = BTreeMap<String, String>;

/// Variable map that passed sanitization.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SafeCssVars(BTreeMap<String, String>);

impl SafeCssVars {
    pub fn get(&self, key: &str) -> Option<&str> {
        self.0.get(key).map(String::as_str)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }

    /// `--name: value;` lines in key order, for an inline style block.
    pub fn to_declarations(&self) -> String {
        self.iter()
            .map(|(k, v)| format!("{k}: {v};"))
            .collect::<Vec<_>>()
            .join("\n")
    }

    pub fn into_inner(self) -> BTreeMap<String, String> {
        self.0
    }
}

/// Filter `candidates` down to allowlisted keys with valid values.
pub fn sanitize_css_vars(candidates: &CssVarMap, allowlists: &[&Allowlist]) -> SafeCssVars {
    let mut safe = BTreeMap::new();

    for (key, value) in candidates {
        if !allowlists.iter().any(|list| list.contains(key)) {
            debug!(key = %key, "dropping css variable: not allowlisted");
            continue;
        }
        let Some(category) = classify(key) else {
            debug!(key = %key, "dropping css variable: no category rule");
            continue;
        };
        let value = value.trim();
        if !category.accepts(value) {
            debug!(
                key = %key,
                category = category.name(),
                "dropping css variable: value rejected"
            );
            continue;
        }
        safe.insert(key.clone(), value.to_string());
    }

    SafeCssVars(safe)
}
