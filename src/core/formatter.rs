//! Record renderers
//!
//! A formatter is a pure function of a [`Record`]: the timestamp lives in the
//! record, so rendering the same record twice yields the same text.

use super::record::Record;
use std::fmt;

pub trait Formatter: Send + Sync {
    fn format(&self, record: &Record) -> String;
}

/// `2014-02-28 18:15:57 [example] INFO     something happened`
#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultFormatter;

impl DefaultFormatter {
    pub const TIME_FORMAT: &'static str = "%Y-%m-%d %H:%M:%S";
}

impl Formatter for DefaultFormatter {
    fn format(&self, record: &Record) -> String {
        format!(
            "{} [{}] {:<8} {}",
            record.time().format(Self::TIME_FORMAT),
            record.logger_name(),
            record.level(),
            record.message()
        )
    }
}

/// One JSON object per line, for machine consumption
///
/// ```
/// use rust_leveled_logger::{Formatter, JsonFormatter, Level, Record};
///
/// let record = Record::new("svc", Level::Info, "started\n", vec![]);
/// let line = JsonFormatter.format(&record);
/// assert!(line.starts_with('{') && line.ends_with("}\n"));
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonFormatter;

impl Formatter for JsonFormatter {
    fn format(&self, record: &Record) -> String {
        let message = record.message();
        let value = serde_json::json!({
            "time": record.time().to_rfc3339(),
            "logger": record.logger_name(),
            "level": record.level(),
            "message": message.strip_suffix('\n').unwrap_or(&message),
            "file": record.filename(),
            "line": record.line(),
            "pid": record.process_id(),
            "process": record.process_name(),
        });
        format!("{}\n", value)
    }
}

/// Adapts a closure into a [`Formatter`]
pub struct FnFormatter<F>(F);

impl<F> Formatter for FnFormatter<F>
where
    F: Fn(&Record) -> String + Send + Sync,
{
    fn format(&self, record: &Record) -> String {
        (self.0)(record)
    }
}

impl<F> fmt::Debug for FnFormatter<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("FnFormatter")
    }
}

pub fn formatter_fn<F>(f: F) -> FnFormatter<F>
where
    F: Fn(&Record) -> String + Send + Sync,
{
    FnFormatter(f)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::level::Level;
    use crate::core::record::Arg;
    use chrono::{Local, TimeZone};

    fn fixed_record(level: Level, template: &str, args: Vec<Arg>) -> Record {
        let time = Local
            .with_ymd_and_hms(2014, 2, 28, 18, 15, 57)
            .single()
            .expect("valid datetime");
        Record::new("example", level, template, args).with_time(time)
    }

    #[test]
    fn test_default_layout() {
        let record = fixed_record(Level::Info, "something happened\n", vec![]);
        assert_eq!(
            DefaultFormatter.format(&record),
            "2014-02-28 18:15:57 [example] INFO     something happened\n"
        );
    }

    #[test]
    fn test_default_pads_every_level_name_to_eight() {
        for level in Level::ALL {
            let line = DefaultFormatter.format(&fixed_record(level, "m", vec![]));
            let name_field = &line["2014-02-28 18:15:57 [example] ".len()..][..9];
            assert_eq!(name_field.trim_end(), level.to_str());
            assert!(name_field.ends_with(' '));
        }
    }

    #[test]
    fn test_default_substitutes_arguments() {
        let record = fixed_record(
            Level::Warning,
            "disk %d%% full on %s\n",
            vec![93.into(), "sda".into()],
        );
        assert!(DefaultFormatter
            .format(&record)
            .ends_with("WARNING  disk 93% full on sda\n"));
    }

    #[test]
    fn test_malformed_template_still_renders() {
        let record = fixed_record(Level::Error, "count=%d\n", vec!["many".into()]);
        assert!(DefaultFormatter
            .format(&record)
            .ends_with("ERROR    count=%!d(string=many)\n"));
    }

    #[test]
    fn test_format_is_idempotent() {
        let record = Record::new("svc", Level::Debug, "tick %d\n", vec![1.into()]);
        assert_eq!(
            DefaultFormatter.format(&record),
            DefaultFormatter.format(&record)
        );
        assert_eq!(JsonFormatter.format(&record), JsonFormatter.format(&record));
    }

    #[test]
    fn test_json_fields() {
        let record = fixed_record(Level::Notice, "user %s logged in\n", vec!["ann".into()]);
        let line = JsonFormatter.format(&record);
        let value: serde_json::Value = serde_json::from_str(line.trim_end()).unwrap();
        assert_eq!(value["logger"], "example");
        assert_eq!(value["level"], "NOTICE");
        assert_eq!(value["message"], "user ann logged in");
        assert_eq!(value["pid"], std::process::id());
    }

    #[test]
    fn test_closure_formatter() {
        let f = formatter_fn(|r: &Record| format!("{}:{}", r.level(), r.message()));
        let record = fixed_record(Level::Critical, "down", vec![]);
        assert_eq!(f.format(&record), "CRITICAL:down");
    }
}
