pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use crate::config::CliConfig;

pub use crate::config::{toml_config::TomlConfig, OutputSettings};
pub use crate::core::{
    evaluator::FieldParser,
    resolver::{NamedResolver, NumericResolver},
    schedule::CronSchedule,
};
pub use crate::domain::model::{FieldKind, OutputFormat, ValueRange};
pub use crate::domain::ports::{ConfigProvider, ValueResolver};
pub use crate::utils::error::{CronError, Result};
