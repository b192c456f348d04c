use super::{filters::*, interface::TemplateRenderer};
use crate::{
    engine::VariableContext,
    error::{Error, Result},
};
use minijinja::{AutoEscape, Environment, UndefinedBehavior};

/// MiniJinja-based template rendering engine.
///
/// Undefined variables are an error by default: `{{ vars.missing }}` fails
/// with `Error::TemplateExecution` instead of silently rendering nothing.
#[derive(Clone)]
pub struct MiniJinjaRenderer {
    env: Environment<'static>,
}

impl MiniJinjaRenderer {
    /// Creates a renderer with strict undefined handling and the extra filters.
    pub fn new() -> Self {
        let mut env = Environment::new();
        env.set_undefined_behavior(UndefinedBehavior::Strict);
        // Block scalars end with a newline that must survive rendering.
        env.set_keep_trailing_newline(true);
        // Template names are key paths; a key ending in `.yaml` or `.json`
        // must not switch on escaping.
        env.set_auto_escape_callback(|_| AutoEscape::None);

        env.add_filter("camel_case", to_camel_case);
        env.add_filter("kebab_case", to_kebab_case);
        env.add_filter("pascal_case", to_pascal_case);
        env.add_filter("screaming_snake_case", to_screaming_snake_case);
        env.add_filter("snake_case", to_snake_case);
        env.add_filter("train_case", to_train_case);

        Self { env }
    }

    /// Replaces the policy applied to undefined variables.
    pub fn with_undefined_behavior(mut self, behavior: UndefinedBehavior) -> Self {
        self.env.set_undefined_behavior(behavior);
        self
    }
}

impl Default for MiniJinjaRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl TemplateRenderer for MiniJinjaRenderer {
    fn render(
        &self,
        name: &str,
        template: &str,
        context: &VariableContext,
    ) -> Result<String> {
        let tmpl = self
            .env
            .template_from_named_str(name, template)
            .map_err(|source| Error::TemplateSyntax { path: name.to_string(), source })?;

        tmpl.render(context.as_value())
            .map_err(|source| Error::TemplateExecution { path: name.to_string(), source })
    }
}
