use clap::Parser;
use small_cron::core::report;
use small_cron::utils::{logger, validation::Validate};
use small_cron::{CliConfig, ConfigProvider, CronError, CronSchedule, OutputSettings, TomlConfig};

fn main() {
    let config = CliConfig::parse();

    // 載入設定檔 (可選)
    let file_config = match config.config.as_deref().map(TomlConfig::from_file).transpose() {
        Ok(file_config) => file_config,
        Err(e) => {
            eprintln!(
                "❌ Failed to load config file '{}': {}",
                config.config.as_deref().unwrap_or_default(),
                e
            );
            eprintln!("💡 Make sure the file exists and is valid TOML format");
            std::process::exit(e.exit_code());
        }
    };

    let mut providers: Vec<&dyn ConfigProvider> = Vec::new();
    if let Some(file_config) = &file_config {
        providers.push(file_config);
    }
    providers.push(&config);

    // 先驗證設定，無效的日誌等級不會進到 EnvFilter
    if let Some(Err(e)) = file_config.as_ref().map(|file_config| file_config.validate()) {
        fail(&e);
    }
    let settings = match OutputSettings::load(&providers) {
        Ok(settings) => settings,
        Err(e) => fail(&e),
    };

    logger::init_cli_logger(config.verbose, settings.log_level.as_deref());
    tracing::debug!("CLI config: {:?}", config);

    let Some(cron_line) = config.cron_line.as_deref() else {
        eprintln!("No cron string provided.");
        eprintln!("Usage: small-cron \"<cron-arguments>\"");
        std::process::exit(2);
    };

    match CronSchedule::parse(cron_line)
        .and_then(|schedule| report::render(&schedule, settings.format, settings.label_width))
    {
        Ok(output) => println!("{}", output),
        Err(e) => fail(&e),
    }
}

fn fail(e: &CronError) -> ! {
    tracing::error!("❌ {} (Category: {:?})", e, e.category());
    eprintln!("❌ {}", e.user_friendly_message());
    eprintln!("💡 {}", e.recovery_suggestion());
    std::process::exit(e.exit_code());
}
