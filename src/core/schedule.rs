use crate::core::evaluator::FieldParser;
use crate::domain::model::FieldKind;
use crate::utils::error::{CronError, Result};
use serde::{Deserialize, Serialize};

/// A cron line with every field expanded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CronSchedule {
    pub minute: Vec<u32>,
    pub hour: Vec<u32>,
    pub day_of_month: Vec<u32>,
    pub month: Vec<u32>,
    pub day_of_week: Vec<u32>,
    pub command: String,
}

impl CronSchedule {
    /// Five fields plus the command.
    pub const ARGUMENT_COUNT: usize = 6;

    /// 解析 "minute hour day-of-month month day-of-week command"
    ///
    /// The command is a single whitespace-free token. The first field that fails
    /// to expand aborts the whole line.
    pub fn parse(line: &str) -> Result<Self> {
        let arguments: Vec<&str> = line.split_whitespace().collect();
        let [minute, hour, day_of_month, month, day_of_week, command] = arguments.as_slice()
        else {
            tracing::warn!(
                "Expected {} cron arguments, found {}",
                Self::ARGUMENT_COUNT,
                arguments.len()
            );
            return Err(CronError::FieldCountError {
                found: arguments.len(),
            });
        };

        Ok(Self {
            minute: expand(FieldKind::Minute, minute)?,
            hour: expand(FieldKind::Hour, hour)?,
            day_of_month: expand(FieldKind::DayOfMonth, day_of_month)?,
            month: expand(FieldKind::Month, month)?,
            day_of_week: expand(FieldKind::DayOfWeek, day_of_week)?,
            command: command.to_string(),
        })
    }

    pub fn field(&self, kind: FieldKind) -> &[u32] {
        match kind {
            FieldKind::Minute => &self.minute,
            FieldKind::Hour => &self.hour,
            FieldKind::DayOfMonth => &self.day_of_month,
            FieldKind::Month => &self.month,
            FieldKind::DayOfWeek => &self.day_of_week,
        }
    }
}

fn expand(kind: FieldKind, expression: &str) -> Result<Vec<u32>> {
    FieldParser::for_kind(kind).parse(expression).map_err(|e| {
        tracing::debug!("Field '{}' rejected: {}", kind.label(), e);
        e
    })
}
