use thiserror::Error;

/// Every way a report run can fail.
///
/// None of these are recovered locally. They travel up to `main`, which prints
/// them and terminates the process with a non-zero exit code.
#[derive(Error, Debug)]
pub enum PipelineError {
    /// Catalog API unreachable, authentication rejected or playlist not found.
    #[error("Fetch failed during {operation}: {message}")]
    Fetch {
        operation: &'static str,
        message: String,
    },

    /// A release date that does not start with an integer year.
    #[error("Cannot parse release year of track #{index} ({track_id}) from {date:?}")]
    Parse {
        index: usize,
        track_id: String,
        date: String,
    },

    /// Duration, popularity or name outside of its allowed domain.
    #[error("Invalid {field} for track #{index} ({track_id}): {message}")]
    Validation {
        index: usize,
        track_id: String,
        field: &'static str,
        message: String,
    },

    /// Store unreachable or a stored document that cannot be read back.
    #[error("Store {operation} failed for {key}: {message}")]
    Store {
        operation: &'static str,
        key: String,
        message: String,
    },

    #[error("Invalid configuration {variable}: {message}")]
    Config {
        variable: &'static str,
        message: String,
    },

    #[error("Cannot render chart: {0}")]
    Render(String),
}

impl PipelineError {
    pub fn fetch(operation: &'static str, message: impl ToString) -> Self {
        Self::Fetch {
            operation,
            message: message.to_string(),
        }
    }

    pub fn store(operation: &'static str, key: impl Into<String>, message: impl ToString) -> Self {
        Self::Store {
            operation,
            key: key.into(),
            message: message.to_string(),
        }
    }

    pub fn config(variable: &'static str, message: impl ToString) -> Self {
        Self::Config {
            variable,
            message: message.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, PipelineError>;
