//! Log level definitions
//!
//! Levels are ordered from most to least severe: `Critical` has the lowest
//! ordinal and `Debug` the highest. A threshold of `L` lets through every
//! level `<= L`.

use super::error::LoggerError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize,
)]
#[serde(rename_all = "UPPERCASE")]
pub enum Level {
    Critical = 0,
    Error = 1,
    Warning = 2,
    Notice = 3,
    #[default]
    Info = 4,
    Debug = 5,
}

impl Level {
    /// All levels, most severe first
    pub const ALL: [Level; 6] = [
        Level::Critical,
        Level::Error,
        Level::Warning,
        Level::Notice,
        Level::Info,
        Level::Debug,
    ];

    pub fn to_str(&self) -> &'static str {
        match self {
            Level::Critical => "CRITICAL",
            Level::Error => "ERROR",
            Level::Warning => "WARNING",
            Level::Notice => "NOTICE",
            Level::Info => "INFO",
            Level::Debug => "DEBUG",
        }
    }

    pub fn color_code(&self) -> colored::Color {
        use colored::Color::*;
        match self {
            Level::Critical => Magenta,
            Level::Error => Red,
            Level::Warning => Yellow,
            Level::Notice => Green,
            Level::Info => White,
            Level::Debug => Cyan,
        }
    }

    /// Whether a threshold of `self` lets `level` through
    #[inline]
    pub fn allows(&self, level: Level) -> bool {
        level <= *self
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // `pad` so width/alignment flags like `{:<8}` apply
        f.pad(self.to_str())
    }
}

impl FromStr for Level {
    type Err = LoggerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_uppercase().as_str() {
            "CRITICAL" => Ok(Level::Critical),
            "ERROR" => Ok(Level::Error),
            "WARNING" | "WARN" => Ok(Level::Warning),
            "NOTICE" => Ok(Level::Notice),
            "INFO" => Ok(Level::Info),
            "DEBUG" => Ok(Level::Debug),
            _ => Err(LoggerError::InvalidLevel(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ordering_most_severe_first() {
        assert!(Level::Critical < Level::Error);
        assert!(Level::Error < Level::Warning);
        assert!(Level::Warning < Level::Notice);
        assert!(Level::Notice < Level::Info);
        assert!(Level::Info < Level::Debug);
        assert_eq!(Level::default(), Level::Info);
    }

    #[test]
    fn test_allows() {
        assert!(Level::Info.allows(Level::Critical));
        assert!(Level::Info.allows(Level::Info));
        assert!(!Level::Info.allows(Level::Debug));
        assert!(Level::Critical.allows(Level::Critical));
        assert!(!Level::Critical.allows(Level::Error));
    }

    #[test]
    fn test_names_and_colors_cover_every_level() {
        let names: Vec<&str> = Level::ALL.iter().map(Level::to_str).collect();
        assert_eq!(
            names,
            ["CRITICAL", "ERROR", "WARNING", "NOTICE", "INFO", "DEBUG"]
        );

        let codes: Vec<String> = Level::ALL
            .iter()
            .map(|l| l.color_code().to_fg_str().to_string())
            .collect();
        assert_eq!(codes, ["35", "31", "33", "32", "37", "36"]);
    }

    #[test]
    fn test_display_honours_padding() {
        assert_eq!(format!("{:<8}|", Level::Info), "INFO    |");
        assert_eq!(format!("{:<8}|", Level::Critical), "CRITICAL|");
        assert_eq!(Level::Warning.to_string(), "WARNING");
    }

    #[test]
    fn test_parse() {
        assert_eq!("warning".parse::<Level>().unwrap(), Level::Warning);
        assert_eq!("WARN".parse::<Level>().unwrap(), Level::Warning);
        assert_eq!(" Debug ".parse::<Level>().unwrap(), Level::Debug);
        assert!(matches!(
            "verbose".parse::<Level>(),
            Err(LoggerError::InvalidLevel(_))
        ));
    }

    #[test]
    fn test_serde_uses_level_names() {
        let json = serde_json::to_string(&Level::Notice).unwrap();
        assert_eq!(json, "\"NOTICE\"");
        let level: Level = serde_json::from_str("\"CRITICAL\"").unwrap();
        assert_eq!(level, Level::Critical);
    }
}
