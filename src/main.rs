use clap::Parser;
use greeter::core::render::render;
use greeter::utils::{logger, validation::Validate};
use greeter::{CliConfig, GreetError, OutputFormat};

fn main() -> anyhow::Result<()> {
    let config = CliConfig::parse();

    // 初始化日誌
    if config.format == Some(OutputFormat::Json) {
        logger::init_json_logger(config.verbose);
    } else {
        logger::init_cli_logger(config.verbose);
    }

    tracing::debug!("CLI config: {:?}", config);

    // 驗證配置
    if let Err(e) = config.validate() {
        exit_with(&e);
    }

    let settings = match config.settings() {
        Ok(settings) => settings,
        Err(e) => exit_with(&e),
    };
    tracing::debug!("Effective settings: {:?}", settings);

    let line = render(&settings.name, settings.format)?;
    println!("{}", line);

    Ok(())
}

fn exit_with(e: &GreetError) -> ! {
    tracing::error!("❌ {}", e);
    tracing::error!("💡 Suggestion: {}", e.recovery_suggestion());
    eprintln!("❌ {}", e.user_friendly_message());
    eprintln!("💡 {}", e.recovery_suggestion());
    std::process::exit(1);
}
