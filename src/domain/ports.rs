use crate::domain::model::OutputFormat;
use crate::utils::error::{CronError, Result};

/// Turns one token of a field expression into its integer value.
pub trait ValueResolver: Send + Sync {
    fn resolve(&self, token: &str) -> Result<u32>;

    /// Accepts only non-empty runs of ASCII digits.
    ///
    /// Numerals wider than `u32` saturate to `u32::MAX`; they sit above every
    /// field range and are clamped or filtered away like any other large value.
    fn resolve_number(&self, token: &str) -> Result<u32> {
        if token.is_empty() || !token.bytes().all(|b| b.is_ascii_digit()) {
            return Err(CronError::invalid_argument(token));
        }
        Ok(token.parse::<u32>().unwrap_or(u32::MAX))
    }
}

impl<R: ValueResolver + ?Sized> ValueResolver for Box<R> {
    fn resolve(&self, token: &str) -> Result<u32> {
        (**self).resolve(token)
    }
}

/// A source of output settings. Unset values defer to the next source.
pub trait ConfigProvider {
    fn output_format(&self) -> Option<OutputFormat>;
    fn label_width(&self) -> Option<usize>;
    fn log_level(&self) -> Option<&str>;
}
