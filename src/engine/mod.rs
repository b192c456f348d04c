//! The templating engine.
//!
//! A run decodes the input into a [`Document`], splits off the variables
//! stored under the variable key, renders every string value of what is left
//! against those variables and encodes the result:
//!
//! - `document`: decoding and encoding of the YAML tree
//! - `variables`: extraction of the variable context
//! - `walker`: recursive rendering of the remaining tree

pub mod document;
pub mod variables;
pub mod walker;

pub use document::Document;
pub use variables::VariableContext;
pub use walker::TreeWalker;

use crate::{
    constants::DEFAULT_VARS_KEY,
    error::Result,
    renderer::{MiniJinjaRenderer, TemplateRenderer},
};
use log::debug;

/// Renders templated YAML documents against their own variables.
///
/// The output no longer contains the variable key, so feeding it back into
/// [`Engine::run`] fails with `MissingVariables`.
pub struct Engine {
    vars_key: String,
    renderer: Box<dyn TemplateRenderer>,
}

impl Engine {
    /// Creates an engine backed by the default [`MiniJinjaRenderer`].
    pub fn new(vars_key: impl Into<String>) -> Self {
        Self::with_renderer(vars_key, Box::new(MiniJinjaRenderer::new()))
    }

    /// Creates an engine that renders string values with `renderer`.
    pub fn with_renderer(
        vars_key: impl Into<String>,
        renderer: Box<dyn TemplateRenderer>,
    ) -> Self {
        Self { vars_key: vars_key.into(), renderer }
    }

    /// The top-level key the variables are read from.
    pub fn vars_key(&self) -> &str {
        &self.vars_key
    }

    /// Renders `input` and returns the encoded render tree.
    ///
    /// # Errors
    /// * `Decode` / `DecodeShape` - input is not a YAML mapping
    /// * `MissingVariables` - the variable key is absent or not a mapping
    /// * `TemplateSyntax` / `TemplateExecution` - a string value failed to render
    /// * `Encode` - the rendered tree could not be serialized
    pub fn run(&self, input: &[u8]) -> Result<Vec<u8>> {
        debug!("Running engine on {} bytes", input.len());

        let decoded = document::decode(input)?;
        let (context, render_tree) = variables::extract(decoded, &self.vars_key)?;

        let rendered =
            TreeWalker::new(self.renderer.as_ref(), &context).render_document(render_tree)?;

        document::encode(&rendered)
    }
}

impl Default for Engine {
    fn default() -> Self {
        Self::new(DEFAULT_VARS_KEY)
    }
}
