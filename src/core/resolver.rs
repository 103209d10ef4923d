use crate::domain::ports::ValueResolver;
use crate::utils::error::Result;
use std::collections::HashMap;

pub const MONTH_NAMES: [&str; 12] = [
    "jan", "feb", "mar", "apr", "may", "jun", "jul", "aug", "sep", "oct", "nov", "dec",
];

pub const WEEKDAY_NAMES: [&str; 7] = ["mon", "tue", "wed", "thu", "fri", "sat", "sun"];

/// Plain decimal numerals only.
#[derive(Debug, Clone, Copy, Default)]
pub struct NumericResolver;

impl ValueResolver for NumericResolver {
    fn resolve(&self, token: &str) -> Result<u32> {
        self.resolve_number(token)
    }
}

/// Case-insensitive name table with a numeric fallback, so names and numbers
/// can be mixed within one field.
#[derive(Debug, Clone)]
pub struct NamedResolver {
    names: HashMap<&'static str, u32>,
}

impl NamedResolver {
    /// Builds a table where `names[i]` maps to `i + 1`.
    pub fn new(names: &[&'static str]) -> Self {
        let names = names
            .iter()
            .zip(1u32..)
            .map(|(name, value)| (*name, value))
            .collect();
        Self { names }
    }

    pub fn months() -> Self {
        Self::new(&MONTH_NAMES)
    }

    pub fn weekdays() -> Self {
        Self::new(&WEEKDAY_NAMES)
    }

    pub fn lookup(&self, name: &str) -> Option<u32> {
        self.names.get(name.to_lowercase().as_str()).copied()
    }
}

impl ValueResolver for NamedResolver {
    fn resolve(&self, token: &str) -> Result<u32> {
        match self.lookup(token) {
            Some(value) => Ok(value),
            None => self.resolve_number(token),
        }
    }
}
