use serde::{Deserialize, Serialize};

/// Inclusive `[min, max]` interval of legal values for a field.
///
/// Copied whenever a sub-range has to be narrowed, so clamping one step
/// expression never affects its siblings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValueRange {
    pub min: u32,
    pub max: u32,
}

impl ValueRange {
    pub const fn new(min: u32, max: u32) -> Self {
        Self { min, max }
    }

    pub fn contains(&self, value: u32) -> bool {
        self.min <= value && value <= self.max
    }

    /// 範圍內所有值 (min > max 時為空)
    pub fn values(&self) -> Vec<u32> {
        (self.min..=self.max).collect()
    }
}

/// The five schedule fields, in line order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
pub enum FieldKind {
    Minute,
    Hour,
    DayOfMonth,
    Month,
    DayOfWeek,
}

impl FieldKind {
    pub const ALL: [FieldKind; 5] = [
        FieldKind::Minute,
        FieldKind::Hour,
        FieldKind::DayOfMonth,
        FieldKind::Month,
        FieldKind::DayOfWeek,
    ];

    pub fn range(&self) -> ValueRange {
        match self {
            FieldKind::Minute => ValueRange::new(0, 59),
            FieldKind::Hour => ValueRange::new(0, 23),
            FieldKind::DayOfMonth => ValueRange::new(1, 31),
            FieldKind::Month => ValueRange::new(1, 12),
            FieldKind::DayOfWeek => ValueRange::new(1, 7),
        }
    }

    /// Label used when rendering a report line.
    pub fn label(&self) -> &'static str {
        match self {
            FieldKind::Minute => "minute",
            FieldKind::Hour => "hour",
            FieldKind::DayOfMonth => "day of month",
            FieldKind::Month => "month",
            FieldKind::DayOfWeek => "day of week",
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}
