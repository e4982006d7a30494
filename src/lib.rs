pub mod config;
pub mod core;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use config::{toml_config::TomlConfig, OutputFormat};
pub use core::greet::{greet, DEFAULT_GREETING};
pub use utils::error::{GreetError, Result};
