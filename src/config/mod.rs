pub mod toml_config;

use crate::utils::error::{GreetError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use toml_config::TomlConfig;

#[cfg(feature = "cli")]
use crate::utils::validation::{validate_path, Validate};
#[cfg(feature = "cli")]
use clap::Parser;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

impl OutputFormat {
    pub const NAMES: &'static [&'static str] = &["text", "json"];

    pub fn as_str(&self) -> &'static str {
        match self {
            OutputFormat::Text => "text",
            OutputFormat::Json => "json",
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for OutputFormat {
    type Err = GreetError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "text" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            other => Err(GreetError::UnsupportedFormatError {
                value: other.to_string(),
            }),
        }
    }
}

/// Effective settings after merging flags over the config file.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Settings {
    pub name: String,
    pub format: OutputFormat,
}

impl Settings {
    /// Explicit values win over the file; anything unset falls back to the empty name and text output.
    pub fn merge(
        name: Option<&str>,
        format: Option<OutputFormat>,
        file: Option<&TomlConfig>,
    ) -> Result<Self> {
        let file_format = match file {
            Some(config) => config.output_format()?,
            None => None,
        };

        Ok(Self {
            name: name
                .or_else(|| file.and_then(TomlConfig::name))
                .unwrap_or_default()
                .to_string(),
            format: format.or(file_format).unwrap_or_default(),
        })
    }
}

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Serialize, Deserialize, Parser)]
#[command(name = "greeter")]
#[command(about = "Prints a greeting")]
pub struct CliConfig {
    /// Name to greet; an empty or missing name prints the default greeting
    #[arg(short, long)]
    pub name: Option<String>,

    /// Optional TOML configuration file
    #[arg(short, long)]
    pub config: Option<String>,

    /// Output format
    #[arg(long, value_enum)]
    pub format: Option<OutputFormat>,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,
}

#[cfg(feature = "cli")]
impl CliConfig {
    pub fn load_file(&self) -> Result<Option<TomlConfig>> {
        let Some(path) = &self.config else {
            return Ok(None);
        };

        tracing::debug!("Loading configuration from: {}", path);
        let config = TomlConfig::from_file(path)?;
        config.validate()?;
        Ok(Some(config))
    }

    pub fn settings(&self) -> Result<Settings> {
        let file = self.load_file()?;
        Settings::merge(self.name.as_deref(), self.format, file.as_ref())
    }
}

#[cfg(feature = "cli")]
impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        if let Some(path) = &self.config {
            validate_path("config", path)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_output_format_parse() {
        assert_eq!("text".parse::<OutputFormat>().unwrap(), OutputFormat::Text);
        assert_eq!("json".parse::<OutputFormat>().unwrap(), OutputFormat::Json);
        assert!("JSON".parse::<OutputFormat>().is_err());
        for name in OutputFormat::NAMES {
            assert_eq!(name.parse::<OutputFormat>().unwrap().as_str(), *name);
        }
    }

    #[test]
    fn test_merge_defaults() {
        let settings = Settings::merge(None, None, None).unwrap();
        assert_eq!(settings.name, "");
        assert_eq!(settings.format, OutputFormat::Text);
    }

    #[test]
    fn test_merge_flag_beats_file() {
        let file = TomlConfig::from_toml_str("[greeting]\nname = \"File\"\nformat = \"json\"\n")
            .unwrap();

        let settings = Settings::merge(Some("Flag"), Some(OutputFormat::Text), Some(&file)).unwrap();
        assert_eq!(settings.name, "Flag");
        assert_eq!(settings.format, OutputFormat::Text);

        let settings = Settings::merge(None, None, Some(&file)).unwrap();
        assert_eq!(settings.name, "File");
        assert_eq!(settings.format, OutputFormat::Json);
    }

    #[test]
    fn test_merge_explicit_empty_name() {
        let file = TomlConfig::from_toml_str("[greeting]\nname = \"File\"\n").unwrap();
        let settings = Settings::merge(Some(""), None, Some(&file)).unwrap();
        assert_eq!(settings.name, "");
    }

    #[cfg(feature = "cli")]
    #[test]
    fn test_cli_parse() {
        let config = CliConfig::parse_from(["greeter", "-n", "C++", "--format", "json"]);
        assert_eq!(config.name.as_deref(), Some("C++"));
        assert_eq!(config.format, Some(OutputFormat::Json));
        assert!(config.config.is_none());
        assert!(!config.verbose);
        assert!(config.validate().is_ok());
    }

    #[cfg(feature = "cli")]
    #[test]
    fn test_cli_empty_config_path_rejected() {
        let config = CliConfig::parse_from(["greeter", "--config", ""]);
        assert!(config.validate().is_err());
    }
}
