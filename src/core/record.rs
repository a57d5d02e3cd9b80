//! Log record structure

use super::level::Level;
use super::template;
use chrono::{DateTime, Local};
use once_cell::sync::Lazy;
use std::fmt;
use std::panic::Location;
use std::path::Path;

static PROCESS_NAME: Lazy<String> = Lazy::new(|| {
    std::env::args_os()
        .next()
        .as_deref()
        .and_then(|arg0| Path::new(arg0).file_name())
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| "???".to_string())
});

/// Base name of the running executable
pub fn process_name() -> &'static str {
    PROCESS_NAME.as_str()
}

/// Positional argument substituted into a record's template at format time
#[derive(Debug, Clone, PartialEq)]
pub enum Arg {
    Str(String),
    Int(i64),
    Uint(u64),
    Float(f64),
    Bool(bool),
    Char(char),
}

impl Arg {
    /// Capture any displayable value as a string argument
    pub fn display<T: fmt::Display + ?Sized>(value: &T) -> Self {
        Arg::Str(value.to_string())
    }

    /// Capture any value through its `Debug` representation
    pub fn debug<T: fmt::Debug + ?Sized>(value: &T) -> Self {
        Arg::Str(format!("{:?}", value))
    }

    /// Type name used inside substitution error markers
    pub fn type_name(&self) -> &'static str {
        match self {
            Arg::Str(_) => "string",
            Arg::Int(_) => "int",
            Arg::Uint(_) => "uint",
            Arg::Float(_) => "float64",
            Arg::Bool(_) => "bool",
            Arg::Char(_) => "int32",
        }
    }
}

impl fmt::Display for Arg {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Arg::Str(s) => write!(f, "{}", s),
            Arg::Int(i) => write!(f, "{}", i),
            Arg::Uint(u) => write!(f, "{}", u),
            Arg::Float(fl) => write!(f, "{}", fl),
            Arg::Bool(b) => write!(f, "{}", b),
            Arg::Char(c) => write!(f, "{}", *c as u32),
        }
    }
}

impl From<String> for Arg {
    fn from(s: String) -> Self {
        Arg::Str(s)
    }
}

impl From<&str> for Arg {
    fn from(s: &str) -> Self {
        Arg::Str(s.to_string())
    }
}

impl From<&String> for Arg {
    fn from(s: &String) -> Self {
        Arg::Str(s.clone())
    }
}

impl From<char> for Arg {
    fn from(c: char) -> Self {
        Arg::Char(c)
    }
}

impl From<bool> for Arg {
    fn from(b: bool) -> Self {
        Arg::Bool(b)
    }
}

impl From<f32> for Arg {
    fn from(f: f32) -> Self {
        Arg::Float(f as f64)
    }
}

impl From<f64> for Arg {
    fn from(f: f64) -> Self {
        Arg::Float(f)
    }
}

macro_rules! arg_from_signed {
    ($($t:ty),*) => {
        $(impl From<$t> for Arg {
            fn from(i: $t) -> Self {
                Arg::Int(i as i64)
            }
        })*
    };
}

macro_rules! arg_from_unsigned {
    ($($t:ty),*) => {
        $(impl From<$t> for Arg {
            fn from(u: $t) -> Self {
                Arg::Uint(u as u64)
            }
        })*
    };
}

arg_from_signed!(i8, i16, i32, i64, isize);
arg_from_unsigned!(u8, u16, u32, u64, usize);

/// One log event. Immutable once built; handlers only ever see `&Record`.
#[derive(Debug, Clone)]
pub struct Record {
    template: String,
    args: Vec<Arg>,
    logger_name: String,
    level: Level,
    time: DateTime<Local>,
    filename: String,
    line: u32,
    process_id: u32,
    process_name: String,
}

impl Record {
    /// Build a record stamped with the current time, the caller's location
    /// and the running process identity.
    #[track_caller]
    pub fn new(
        logger_name: impl Into<String>,
        level: Level,
        template: impl Into<String>,
        args: Vec<Arg>,
    ) -> Self {
        let location = Location::caller();
        Self {
            template: template.into(),
            args,
            logger_name: logger_name.into(),
            level,
            time: Local::now(),
            filename: location.file().to_string(),
            line: location.line(),
            process_id: std::process::id(),
            process_name: process_name().to_string(),
        }
    }

    #[must_use]
    pub fn with_time(mut self, time: DateTime<Local>) -> Self {
        self.time = time;
        self
    }

    #[must_use]
    pub fn with_location(mut self, filename: &str, line: u32) -> Self {
        self.filename = filename.to_string();
        self.line = line;
        self
    }

    /// The template with every argument substituted
    pub fn message(&self) -> String {
        template::render(&self.template, &self.args)
    }

    pub fn template(&self) -> &str {
        &self.template
    }

    pub fn args(&self) -> &[Arg] {
        &self.args
    }

    pub fn logger_name(&self) -> &str {
        &self.logger_name
    }

    pub fn level(&self) -> Level {
        self.level
    }

    pub fn time(&self) -> &DateTime<Local> {
        &self.time
    }

    pub fn filename(&self) -> &str {
        &self.filename
    }

    pub fn line(&self) -> u32 {
        self.line
    }

    pub fn process_id(&self) -> u32 {
        self.process_id
    }

    pub fn process_name(&self) -> &str {
        &self.process_name
    }
}
