//! Reference targets must exist in the resolution context.

use serde_json::Value;

use crate::refs::ResolutionContext;
use crate::schema::{EditableTokens, Token};

/// Walk every string leaf of the editable tree and report references that
/// do not resolve.
pub(crate) fn validate_references(
    errors: &mut Vec<String>,
    editable: &EditableTokens,
    ctx: &ResolutionContext,
) {
    let Ok(tree) = serde_json::to_value(editable) else {
        return;
    };
    walk(errors, ctx, &tree, &mut Vec::new());
}

fn walk<'a>(
    errors: &mut Vec<String>,
    ctx: &ResolutionContext,
    node: &'a Value,
    path: &mut Vec<&'a str>,
) {
    match node {
        Value::Object(map) => {
            for (key, child) in map {
                path.push(key);
                walk(errors, ctx, child, path);
                path.pop();
            }
        }
        Value::String(s) => {
            if let Token::Reference(target) = Token::parse(s) {
                if ctx.lookup(&target).is_none() {
                    errors.push(format!(
                        "{} references unknown token {}",
                        path.join("."),
                        target.raw()
                    ));
                }
            }
        }
        _ => {}
    }
}
