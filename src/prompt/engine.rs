use tera::Tera;

pub const INFERENCE_TEMPLATE: &str = "inference.md";

const INFERENCE_SOURCE: &str = include_str!("templates/inference.md");

/// Tera engine preloaded with the crate's prompt templates.
pub struct PromptEngine {
    tera: Tera,
}

impl PromptEngine {
    /// Create with the built-in templates (no filesystem).
    pub fn new() -> anyhow::Result<Self> {
        let mut engine = Self::empty();
        engine.add_template(INFERENCE_TEMPLATE, INFERENCE_SOURCE)?;
        Ok(engine)
    }

    pub fn empty() -> Self {
        Self {
            tera: Tera::default(),
        }
    }

    /// Register or replace a template from a string.
    pub fn add_template(&mut self, name: &str, content: &str) -> anyhow::Result<()> {
        self.tera.add_raw_template(name, content)?;
        Ok(())
    }

    pub fn render(&self, template_name: &str, context: &tera::Context) -> anyhow::Result<String> {
        let rendered = self.tera.render(template_name, context)?;
        Ok(rendered)
    }
}
