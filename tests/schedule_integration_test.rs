use anyhow::Result;
use small_cron::core::report::{self, DEFAULT_LABEL_WIDTH};
use small_cron::utils::validation::Validate;
use small_cron::{ConfigProvider, CronError, CronSchedule, OutputFormat, OutputSettings, TomlConfig};
use std::io::Write;
use tempfile::NamedTempFile;

const REFERENCE_LINE: &str = "*/15 12-20/2 1,2,3,10-25/5 jan,10-12/1 1,tue-6 my/command";

#[test]
fn test_reference_line_renders_as_text() -> Result<()> {
    let schedule = CronSchedule::parse(REFERENCE_LINE)?;
    let output = report::render(&schedule, OutputFormat::Text, DEFAULT_LABEL_WIDTH)?;

    let expected = [
        "minute         0 15 30 45",
        "hour           12 14 16 18 20",
        "day of month   1 2 3 10 15 20 25",
        "month          1 10 11 12",
        "day of week    1 2 3 4 5 6",
        "command        my/command",
    ];
    assert_eq!(output.lines().collect::<Vec<_>>(), expected);
    Ok(())
}

#[test]
fn test_reference_line_renders_as_json() -> Result<()> {
    let schedule = CronSchedule::parse(REFERENCE_LINE)?;
    let output = report::render(&schedule, OutputFormat::Json, DEFAULT_LABEL_WIDTH)?;

    let parsed: CronSchedule = serde_json::from_str(&output)?;
    assert_eq!(parsed, schedule);
    assert_eq!(parsed.day_of_month, vec![1, 2, 3, 10, 15, 20, 25]);
    Ok(())
}

#[test]
fn test_extra_whitespace_between_fields_is_ignored() -> Result<()> {
    let schedule = CronSchedule::parse("  0   0\t1  *  mon  /bin/backup ")?;
    assert_eq!(schedule.minute, vec![0]);
    assert_eq!(schedule.day_of_week, vec![1]);
    assert_eq!(schedule.command, "/bin/backup");
    Ok(())
}

#[test]
fn test_wrong_argument_count_is_a_single_error() {
    for line in ["1 2 3 4", "1 2 3 4 5 my/command 6"] {
        let err = CronSchedule::parse(line).unwrap_err();
        assert!(matches!(err, CronError::FieldCountError { .. }));
        assert!(err
            .user_friendly_message()
            .starts_with("Invalid number of arguments"));
    }
}

#[test]
fn test_invalid_field_reports_offending_token() {
    let err = CronSchedule::parse("0 0 1 * mon,may cmd").unwrap_err();
    assert_eq!(err.to_string(), "Invalid argument: 'may'");
    assert_eq!(err.exit_code(), 1);
}

#[test]
fn test_config_file_controls_rendering() -> Result<()> {
    let mut temp_file = NamedTempFile::new()?;
    writeln!(temp_file, "[output]\nlabel_width = 8\n\n[logging]\nlevel = \"warn\"")?;

    let file_config = TomlConfig::from_file(temp_file.path())?;
    file_config.validate()?;

    let providers: [&dyn ConfigProvider; 1] = [&file_config];
    let settings = OutputSettings::from_providers(&providers);
    settings.validate()?;
    assert_eq!(settings.format, OutputFormat::Text);
    assert_eq!(settings.log_level.as_deref(), Some("warn"));

    let schedule = CronSchedule::parse("30 6 * jun-aug sat-sun ./water-plants")?;
    let lines = report::render_lines(&schedule, settings.label_width);

    assert_eq!(lines[0], "minute   30");
    assert_eq!(lines[3], "month    6 7 8");
    assert_eq!(lines[4], "day of week 6 7");
    assert_eq!(lines[5], "command  ./water-plants");
    Ok(())
}
