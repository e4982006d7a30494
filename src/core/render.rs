use crate::config::OutputFormat;
use crate::core::greet::greet;
use crate::utils::error::Result;
use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
pub struct GreetingOutput<'a> {
    pub name: &'a str,
    pub greeting: String,
}

impl<'a> GreetingOutput<'a> {
    pub fn new(name: &'a str) -> Self {
        Self {
            name,
            greeting: greet(name),
        }
    }
}

/// Renders one output line for `name`, without the trailing newline.
pub fn render(name: &str, format: OutputFormat) -> Result<String> {
    let output = GreetingOutput::new(name);
    match format {
        OutputFormat::Text => Ok(output.greeting),
        OutputFormat::Json => Ok(serde_json::to_string(&output)?),
    }
}
