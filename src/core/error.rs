//! Error types for the logger system

pub type Result<T> = std::result::Result<T, LoggerError>;

#[derive(Debug, thiserror::Error)]
pub enum LoggerError {
    /// A sink could not be constructed (e.g. the system log refused the connection)
    #[error("Failed to set up {target}: {message}")]
    Setup { target: String, message: String },

    /// Generic IO error
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    /// Transport-level failure while delivering or closing
    #[error("Transport error while {operation}: {message}")]
    Transport { operation: String, message: String },

    /// Unknown level name
    #[error("Invalid log level: '{0}'")]
    InvalidLevel(String),

    /// A child handler panicked during fan-out
    #[error("Handler #{index} panicked: {message}")]
    HandlerPanicked { index: usize, message: String },
}

impl LoggerError {
    /// Create a setup error for a sink that failed to open
    pub fn setup(target: impl Into<String>, message: impl Into<String>) -> Self {
        LoggerError::Setup {
            target: target.into(),
            message: message.into(),
        }
    }

    /// Create a transport error
    pub fn transport(operation: impl Into<String>, message: impl Into<String>) -> Self {
        LoggerError::Transport {
            operation: operation.into(),
            message: message.into(),
        }
    }

    /// Create a handler panic error from a caught panic payload
    pub fn handler_panicked(index: usize, payload: &(dyn std::any::Any + Send)) -> Self {
        let message = if let Some(s) = payload.downcast_ref::<&str>() {
            s.to_string()
        } else if let Some(s) = payload.downcast_ref::<String>() {
            s.clone()
        } else {
            "Unknown panic".to_string()
        };
        LoggerError::HandlerPanicked { index, message }
    }
}
