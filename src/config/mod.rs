pub mod toml_config;

use crate::core::report::DEFAULT_LABEL_WIDTH;
use crate::domain::model::OutputFormat;
use crate::domain::ports::ConfigProvider;
use crate::utils::error::Result;
use crate::utils::validation::{validate_log_level, validate_range, Validate};
#[cfg(feature = "cli")]
use clap::Parser;

pub const MAX_LABEL_WIDTH: usize = 64;

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Parser)]
#[command(name = "small-cron")]
#[command(about = "Expand a cron line into the values of each field")]
pub struct CliConfig {
    /// "<minute> <hour> <day-of-month> <month> <day-of-week> <command>"
    pub cron_line: Option<String>,

    #[arg(long, value_enum, help = "Output format (overrides the config file)")]
    pub format: Option<OutputFormat>,

    #[arg(long, help = "Width of the field label column")]
    pub label_width: Option<usize>,

    #[arg(short, long, help = "Path to a TOML configuration file")]
    pub config: Option<String>,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,
}

#[cfg(feature = "cli")]
impl ConfigProvider for CliConfig {
    fn output_format(&self) -> Option<OutputFormat> {
        self.format
    }

    fn label_width(&self) -> Option<usize> {
        self.label_width
    }

    fn log_level(&self) -> Option<&str> {
        if self.verbose {
            Some("debug")
        } else {
            None
        }
    }
}

/// Effective settings after layering every provider.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputSettings {
    pub format: OutputFormat,
    pub label_width: usize,
    pub log_level: Option<String>,
}

impl Default for OutputSettings {
    fn default() -> Self {
        Self {
            format: OutputFormat::default(),
            label_width: DEFAULT_LABEL_WIDTH,
            log_level: None,
        }
    }
}

impl OutputSettings {
    /// 後面的來源覆蓋前面的 (例如: 設定檔, 命令列)
    pub fn from_providers(providers: &[&dyn ConfigProvider]) -> Self {
        let mut settings = Self::default();
        for provider in providers {
            if let Some(format) = provider.output_format() {
                settings.format = format;
            }
            if let Some(width) = provider.label_width() {
                settings.label_width = width;
            }
            if let Some(level) = provider.log_level() {
                settings.log_level = Some(level.to_lowercase());
            }
        }
        settings
    }

    /// Layers the providers and validates the result, so callers only ever
    /// see a usable log level and label width.
    pub fn load(providers: &[&dyn ConfigProvider]) -> Result<Self> {
        let settings = Self::from_providers(providers);
        settings.validate()?;
        Ok(settings)
    }
}

impl Validate for OutputSettings {
    fn validate(&self) -> Result<()> {
        validate_range("label_width", self.label_width, 1, MAX_LABEL_WIDTH)?;
        if let Some(level) = &self.log_level {
            validate_log_level("log_level", level)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let settings = OutputSettings::from_providers(&[]);
        assert_eq!(settings, OutputSettings::default());
        assert_eq!(settings.label_width, 14);
        assert!(settings.validate().is_ok());
    }

    #[cfg(feature = "cli")]
    #[test]
    fn test_later_providers_win() {
        use crate::config::toml_config::TomlConfig;

        let file = TomlConfig::from_toml_str(
            r#"
[output]
format = "json"
label_width = 20

[logging]
level = "info"
"#,
        )
        .unwrap();

        let cli = CliConfig {
            cron_line: None,
            format: Some(OutputFormat::Text),
            label_width: None,
            config: None,
            verbose: false,
        };

        let providers: [&dyn ConfigProvider; 2] = [&file, &cli];
        let settings = OutputSettings::from_providers(&providers);
        assert_eq!(settings.format, OutputFormat::Text);
        assert_eq!(settings.label_width, 20);
        assert_eq!(settings.log_level.as_deref(), Some("info"));
    }

    #[test]
    fn test_load_rejects_unknown_log_level() {
        use crate::config::toml_config::TomlConfig;
        use crate::utils::error::CronError;

        let file = TomlConfig::from_toml_str("[logging]\nlevel = \"loud\"\n").unwrap();
        let providers: [&dyn ConfigProvider; 1] = [&file];

        match OutputSettings::load(&providers) {
            Err(CronError::InvalidConfigValueError { field, value, .. }) => {
                assert_eq!(field, "log_level");
                assert_eq!(value, "loud");
            }
            other => panic!("expected InvalidConfigValueError, got {:?}", other),
        }
    }

    #[test]
    fn test_load_accepts_valid_settings() {
        use crate::config::toml_config::TomlConfig;

        let file = TomlConfig::from_toml_str("[logging]\nlevel = \"WARN\"\n").unwrap();
        let providers: [&dyn ConfigProvider; 1] = [&file];

        let settings = OutputSettings::load(&providers).unwrap();
        assert_eq!(settings.log_level.as_deref(), Some("warn"));
    }

    #[test]
    fn test_invalid_label_width() {
        let settings = OutputSettings {
            label_width: 0,
            ..OutputSettings::default()
        };
        assert!(settings.validate().is_err());
    }

    #[cfg(feature = "cli")]
    #[test]
    fn test_cli_parses_arguments() {
        let cli = CliConfig::parse_from([
            "small-cron",
            "--format",
            "json",
            "-v",
            "*/15 0 1 * * /bin/true",
        ]);
        assert_eq!(cli.format, Some(OutputFormat::Json));
        assert!(cli.verbose);
        assert_eq!(cli.cron_line.as_deref(), Some("*/15 0 1 * * /bin/true"));
        assert_eq!(cli.log_level(), Some("debug"));
    }
}
