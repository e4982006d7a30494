use crate::config::OutputFormat;
use crate::utils::error::{GreetError, Result};
use crate::utils::validation::{validate_one_of, Validate};
use regex::{Captures, Regex};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::sync::LazyLock;

static ENV_VAR_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\$\{([^}]+)\}").expect("env var pattern is a valid regex")
});

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TomlConfig {
    #[serde(default)]
    pub greeting: GreetingConfig,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GreetingConfig {
    pub name: Option<String>,
    pub format: Option<String>,
}

impl TomlConfig {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path)?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content);

        toml::from_str(&processed_content).map_err(|e| GreetError::ConfigParseError {
            message: e.to_string(),
        })
    }

    /// Replaces `${VAR}` with the variable's value; unset variables stay as written.
    fn substitute_env_vars(content: &str) -> String {
        ENV_VAR_PATTERN
            .replace_all(content, |caps: &Captures| {
                let var_name = &caps[1];
                std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
            })
            .into_owned()
    }

    pub fn name(&self) -> Option<&str> {
        self.greeting.name.as_deref()
    }

    pub fn output_format(&self) -> Result<Option<OutputFormat>> {
        self.greeting
            .format
            .as_deref()
            .map(str::parse)
            .transpose()
    }
}

impl Validate for TomlConfig {
    fn validate(&self) -> Result<()> {
        // name 不做檢查：空字串與空白都是合法輸入
        if let Some(format) = &self.greeting.format {
            validate_one_of("greeting.format", format, OutputFormat::NAMES)?;
        }
        Ok(())
    }
}
