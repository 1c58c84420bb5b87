//! MiniJinja template engine wrapper

use super::markdown::render_markdown;
use minijinja::{Environment, Error, Value};
use serde::Serialize;

use crate::types::AppError;

/// Templates are compiled into the binary so rendering does not depend on
/// the working directory.
const TEMPLATES: &[(&str, &str)] = &[
    ("index.html", include_str!("../../web/templates/index.html")),
    ("panel.html", include_str!("../../web/templates/panel.html")),
    ("message.html", include_str!("../../web/templates/message.html")),
];

pub struct TemplateEngine {
    env: Environment<'static>,
}

impl TemplateEngine {
    pub fn new() -> Result<Self, AppError> {
        let mut env = Environment::new();

        // Configure MiniJinja
        env.set_debug(cfg!(debug_assertions));

        for &(name, source) in TEMPLATES {
            env.add_template(name, source)?;
        }

        // Add custom filters
        env.add_filter("markdown", markdown);
        env.add_filter("truncate_chars", truncate_chars);

        Ok(Self { env })
    }

    /// Render a template with context
    pub fn render<S: Serialize>(&self, template_name: &str, ctx: S) -> Result<String, AppError> {
        let template = self.env.get_template(template_name)?;
        Ok(template.render(ctx)?)
    }
}

// Filter functions
fn markdown(value: &str) -> Value {
    Value::from_safe_string(render_markdown(value))
}

fn truncate_chars(value: &str, length: Option<usize>) -> Result<Value, Error> {
    let max_length = length.unwrap_or(50);
    if value.chars().count() <= max_length {
        Ok(Value::from(value))
    } else {
        let cut: String = value.chars().take(max_length).collect();
        Ok(Value::from(format!("{}...", cut)))
    }
}
