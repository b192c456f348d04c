//! Recursive rendering of the render tree.

use super::{
    document::{has_string_keys, Document},
    variables::VariableContext,
};
use crate::{
    constants::KEY_PATH_SEPARATOR,
    error::Result,
    renderer::{interface::contains_directive, TemplateRenderer},
};
use log::debug;
use serde_yaml::{Mapping, Value};

/// Walks a document and renders every string value reachable through
/// string-keyed mappings.
///
/// Strings are rendered, string-keyed mappings are descended into, and every
/// other value (sequences included) is returned as is. Keys are never
/// rendered. The first failing value aborts the walk.
pub struct TreeWalker<'a> {
    renderer: &'a dyn TemplateRenderer,
    context: &'a VariableContext,
}

impl<'a> TreeWalker<'a> {
    pub fn new(renderer: &'a dyn TemplateRenderer, context: &'a VariableContext) -> Self {
        Self { renderer, context }
    }

    /// Renders every value of `document`, returning the rebuilt tree.
    pub fn render_document(&self, document: Document) -> Result<Document> {
        self.render_mapping("", document)
    }

    fn render_value(&self, path: &str, value: Value) -> Result<Value> {
        match value {
            Value::Mapping(mapping) if has_string_keys(&mapping) => {
                self.render_mapping(path, mapping).map(Value::Mapping)
            }
            Value::String(template) => self.render_string(path, template).map(Value::String),
            other => {
                debug!("Keeping '{path}' as is");
                Ok(other)
            }
        }
    }

    fn render_mapping(&self, path: &str, mapping: Mapping) -> Result<Mapping> {
        debug!("Rendering mapping '{path}' ({} entries)", mapping.len());
        mapping
            .into_iter()
            .map(|(key, value)| {
                let child = child_path(path, &key);
                let value = self.render_value(&child, value)?;
                Ok((key, value))
            })
            .collect()
    }

    fn render_string(&self, path: &str, template: String) -> Result<String> {
        if !contains_directive(&template) {
            return Ok(template);
        }
        debug!("Rendering string '{path}'");
        self.renderer.render(path, &template, self.context)
    }
}

fn child_path(parent: &str, key: &Value) -> String {
    let key = key.as_str().unwrap_or_default();
    if parent.is_empty() {
        key.to_string()
    } else {
        format!("{parent}{KEY_PATH_SEPARATOR}{key}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{engine::document::decode, error::Error};
    use std::sync::Mutex;

    /// Uppercases every string it is asked to render and records the paths.
    #[derive(Default)]
    struct RecordingRenderer {
        seen: Mutex<Vec<String>>,
        fail_on: Option<&'static str>,
    }

    impl TemplateRenderer for RecordingRenderer {
        fn render(&self, name: &str, template: &str, _: &VariableContext) -> Result<String> {
            self.seen.lock().unwrap().push(name.to_string());
            if self.fail_on == Some(name) {
                return Err(Error::TemplateExecution {
                    path: name.to_string(),
                    source: minijinja::Error::new(minijinja::ErrorKind::UndefinedError, "boom"),
                });
            }
            Ok(template.to_uppercase())
        }
    }

    fn context() -> VariableContext {
        VariableContext::new("vars", Mapping::new())
    }

    #[test]
    fn renders_strings_in_nested_mappings() {
        let renderer = RecordingRenderer::default();
        let ctx = context();
        let doc = decode(b"a: '{{ x }}'\nb:\n  c: '{{ y }}'\n  d: plain\n").unwrap();
        let out = TreeWalker::new(&renderer, &ctx).render_document(doc).unwrap();

        assert_eq!(out.get("a"), Some(&Value::from("{{ X }}")));
        assert_eq!(out["b"]["c"], Value::from("{{ Y }}"));
        assert_eq!(out["b"]["d"], Value::from("plain"));
        assert_eq!(*renderer.seen.lock().unwrap(), ["a", "b.c"]);
    }

    #[test]
    fn passes_through_other_shapes() {
        let renderer = RecordingRenderer::default();
        let ctx = context();
        let input = "n: 3\nf: 1.5\nt: true\nz: null\nlist: ['{{ a }}', 2]\ntagged: !Ref '{{ b }}'\nodd: {1: '{{ c }}'}\n";
        let doc = decode(input.as_bytes()).unwrap();
        let out = TreeWalker::new(&renderer, &ctx).render_document(doc.clone()).unwrap();

        assert_eq!(out, doc);
        assert!(renderer.seen.lock().unwrap().is_empty());
    }

    #[test]
    fn keys_are_not_rendered() {
        let renderer = RecordingRenderer::default();
        let ctx = context();
        let doc = decode(b"'{{ key }}': '{{ value }}'\n").unwrap();
        let out = TreeWalker::new(&renderer, &ctx).render_document(doc).unwrap();
        assert_eq!(out.get("{{ key }}"), Some(&Value::from("{{ VALUE }}")));
    }

    #[test]
    fn first_error_stops_remaining_siblings() {
        let renderer = RecordingRenderer { fail_on: Some("b"), ..Default::default() };
        let ctx = context();
        let doc = decode(b"a: '{{ 1 }}'\nb: '{{ 2 }}'\nc: '{{ 3 }}'\n").unwrap();
        let err = TreeWalker::new(&renderer, &ctx).render_document(doc).unwrap_err();

        assert!(matches!(err, Error::TemplateExecution { ref path, .. } if path == "b"));
        assert_eq!(*renderer.seen.lock().unwrap(), ["a", "b"]);
    }

    #[test]
    fn child_paths_are_dotted() {
        assert_eq!(child_path("", &Value::from("a")), "a");
        assert_eq!(child_path("a.b", &Value::from("c")), "a.b.c");
    }
}
