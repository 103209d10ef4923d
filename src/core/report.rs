use crate::core::schedule::CronSchedule;
use crate::domain::model::{FieldKind, OutputFormat};
use crate::utils::error::Result;

pub const DEFAULT_LABEL_WIDTH: usize = 14;

/// `label` left-aligned in `width` columns, one space, then `value`.
pub fn format_line(label: &str, value: &str, width: usize) -> String {
    format!("{:<width$} {}", label, value, width = width)
}

pub fn join_values(values: &[u32]) -> String {
    values
        .iter()
        .map(|v| v.to_string())
        .collect::<Vec<_>>()
        .join(" ")
}

/// One line per field followed by the command line.
pub fn render_lines(schedule: &CronSchedule, width: usize) -> Vec<String> {
    let mut lines: Vec<String> = FieldKind::ALL
        .iter()
        .map(|kind| format_line(kind.label(), &join_values(schedule.field(*kind)), width))
        .collect();
    lines.push(format_line("command", &schedule.command, width));
    lines
}

pub fn render(schedule: &CronSchedule, format: OutputFormat, width: usize) -> Result<String> {
    match format {
        OutputFormat::Text => Ok(render_lines(schedule, width).join("\n")),
        OutputFormat::Json => Ok(serde_json::to_string_pretty(schedule)?),
    }
}
