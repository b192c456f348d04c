//! Isolation of the variables subtree and the context built from it.

use super::document::{describe, has_string_keys, Document};
use crate::error::{Error, Result};
use log::debug;
use serde_yaml::{Mapping, Value};
use std::collections::BTreeMap;

/// Variables available to every template, nested under the variable key.
///
/// Templates see `{ <key>: <vars> }`, so a variable `name` is referenced as
/// `{{ vars.name }}` rather than `{{ name }}`.
#[derive(Debug, Clone)]
pub struct VariableContext {
    key: String,
    vars: Mapping,
    value: minijinja::Value,
}

impl VariableContext {
    pub fn new(key: impl Into<String>, vars: Mapping) -> Self {
        let key = key.into();
        let value = minijinja::Value::from_serialize(BTreeMap::from([(key.as_str(), &vars)]));
        Self { key, vars, value }
    }

    /// The key the variables are nested under.
    pub fn key(&self) -> &str {
        &self.key
    }

    /// The variables subtree as it appeared in the document.
    pub fn vars(&self) -> &Mapping {
        &self.vars
    }

    /// The context handed to the template engine.
    pub fn as_value(&self) -> &minijinja::Value {
        &self.value
    }
}

/// Splits `document` into its variable context and the remaining render tree.
///
/// Fails with `MissingVariables` unless `key` holds a string-keyed mapping.
pub fn extract(document: Document, key: &str) -> Result<(VariableContext, Document)> {
    let mut vars = None;
    let render_tree: Document = document
        .into_iter()
        .filter_map(|(k, v)| {
            if k.as_str() == Some(key) {
                vars = Some(v);
                None
            } else {
                Some((k, v))
            }
        })
        .collect();

    match vars {
        Some(Value::Mapping(vars)) if has_string_keys(&vars) => {
            debug!("Found {} variable(s) under '{key}'", vars.len());
            Ok((VariableContext::new(key, vars), render_tree))
        }
        Some(other) => {
            debug!("Variables key '{key}' holds {}", describe(&other));
            Err(Error::MissingVariables { key: key.to_string() })
        }
        None => Err(Error::MissingVariables { key: key.to_string() }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::document::decode;

    #[test]
    fn splits_variables_from_render_tree() {
        let doc = decode(b"a: 1\nvars:\n  name: world\nb: 2\n").unwrap();
        let (ctx, tree) = extract(doc, "vars").unwrap();
        assert_eq!(ctx.key(), "vars");
        assert_eq!(ctx.vars().get("name"), Some(&Value::from("world")));
        let keys: Vec<_> = tree.keys().filter_map(Value::as_str).collect();
        assert_eq!(keys, ["a", "b"]);
    }

    #[test]
    fn empty_variables_mapping_is_accepted() {
        let doc = decode(b"vars: {}\nx: y\n").unwrap();
        let (ctx, tree) = extract(doc, "vars").unwrap();
        assert!(ctx.vars().is_empty());
        assert_eq!(tree.len(), 1);
    }

    #[test]
    fn missing_key_is_rejected() {
        let doc = decode(b"greeting: hi\n").unwrap();
        let err = extract(doc, "vars").unwrap_err();
        assert!(matches!(err, Error::MissingVariables { key } if key == "vars"));
    }

    #[test]
    fn wrong_shapes_are_rejected() {
        for input in ["vars:\n", "vars: 3\n", "vars: [a, b]\n", "vars: text\n", "vars: {1: a}\n"] {
            let doc = decode(input.as_bytes()).unwrap();
            assert!(
                matches!(extract(doc, "vars"), Err(Error::MissingVariables { .. })),
                "{input:?} should be rejected"
            );
        }
    }

    #[test]
    fn custom_key_is_honoured() {
        let doc = decode(b"values:\n  n: 1\nvars: not-special\n").unwrap();
        let (ctx, tree) = extract(doc, "values").unwrap();
        assert_eq!(ctx.key(), "values");
        assert_eq!(tree.get("vars"), Some(&Value::from("not-special")));
    }

    #[test]
    fn context_nests_variables_under_the_key() {
        let vars: Mapping = serde_yaml::from_str("name: world").unwrap();
        let ctx = VariableContext::new("vars", vars);
        let name = ctx
            .as_value()
            .get_attr("vars")
            .and_then(|vars| vars.get_attr("name"))
            .unwrap();
        assert_eq!(name.as_str(), Some("world"));
    }
}
