//! Output renderer trait and template rendering

use docbase_domain::Post;
use minijinja::{Environment, UndefinedBehavior};
use serde::Serialize;
use thiserror::Error;

const TEMPLATE_NAME: &str = "format";

/// Errors raised while compiling or rendering an output template
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RenderError {
    #[error("Invalid template: {0}")]
    Syntax(String),

    #[error("Failed to render template: {0}")]
    Render(String),
}

/// Trait for turning posts into display text
pub trait OutputRenderer: Send + Sync {
    /// Render a single post
    fn render_post(&self, post: &Post) -> Result<String, RenderError>;
}

/// Renders values with a user supplied minijinja template
///
/// The template sees the fields of the value by name (`{{ title }}`,
/// `{{ id }}`, `{% for tag in tags %}{{ tag.name }}{% endfor %}`).
/// Referencing a field that does not exist is an error rather than an
/// empty string.
pub struct TemplateRenderer {
    env: Environment<'static>,
}

impl TemplateRenderer {
    /// Compile `template` so syntax errors surface before any remote call
    pub fn compile(template: &str) -> Result<Self, RenderError> {
        let mut env = Environment::new();
        env.set_undefined_behavior(UndefinedBehavior::Strict);
        env.add_template_owned(TEMPLATE_NAME, template.to_string())
            .map_err(|e| RenderError::Syntax(e.to_string()))?;
        Ok(Self { env })
    }

    /// Render any serializable value
    pub fn render<T: Serialize>(&self, value: &T) -> Result<String, RenderError> {
        let template = self
            .env
            .get_template(TEMPLATE_NAME)
            .map_err(|e| RenderError::Syntax(e.to_string()))?;
        template
            .render(value)
            .map_err(|e| RenderError::Render(e.to_string()))
    }
}

impl OutputRenderer for TemplateRenderer {
    fn render_post(&self, post: &Post) -> Result<String, RenderError> {
        self.render(post)
    }
}

/// Compile and render in one step
pub fn render<T: Serialize>(value: &T, template: &str) -> Result<String, RenderError> {
    TemplateRenderer::compile(template)?.render(value)
}
