use crate::{engine::VariableContext, error::Result};

/// Trait for template rendering engines.
///
/// Implementations must be shareable across threads so that one engine can
/// serve concurrent runs over independent documents.
pub trait TemplateRenderer: Send + Sync {
    /// Renders a single template string against the variable context.
    ///
    /// # Arguments
    /// * `name` - Key path of the value being rendered, used in error messages
    /// * `template` - Template source
    /// * `context` - Variables available to the template
    ///
    /// # Returns
    /// * `Result<String>` - Rendered string, or `TemplateSyntax` /
    ///   `TemplateExecution` errors
    fn render(
        &self,
        name: &str,
        template: &str,
        context: &VariableContext,
    ) -> Result<String>;
}

/// Whether `template` contains anything the template grammar would interpret.
pub fn contains_directive(template: &str) -> bool {
    ["{{", "{%", "{#"].iter().any(|open| template.contains(open))
}
