use std::io;
use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("configuration error: {0}")]
    Configuration(String),
    #[error("failed to open plan file {}: {source}", path.display())]
    FileOpen {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("invalid plan event on line {line}: {source}")]
    Decode {
        line: usize,
        #[source]
        source: serde_json::Error,
    },
    #[error("failed to build comment request: {0}")]
    Request(String),
    #[error("failed to post comment: {0}")]
    Transport(String),
    #[error(transparent)]
    Io(#[from] io::Error),
}

impl AppError {
    /// Process exit code for this failure kind. 2 is left to clap for usage
    /// errors.
    pub fn exit_code(&self) -> i32 {
        match self {
            AppError::Configuration(_) | AppError::Io(_) => 1,
            AppError::FileOpen { .. } => 3,
            AppError::Decode { .. } => 4,
            AppError::Request(_) => 5,
            AppError::Transport(_) => 6,
        }
    }
}

pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn maps_each_kind_to_a_distinct_exit_code() {
        let decode = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let codes = [
            AppError::Configuration("x".to_string()).exit_code(),
            AppError::FileOpen {
                path: PathBuf::from("plan.json"),
                source: io::Error::from(io::ErrorKind::NotFound),
            }
            .exit_code(),
            AppError::Decode {
                line: 1,
                source: decode,
            }
            .exit_code(),
            AppError::Request("x".to_string()).exit_code(),
            AppError::Transport("x".to_string()).exit_code(),
        ];
        assert_eq!(codes, [1, 3, 4, 5, 6]);
    }

    #[test]
    fn decode_error_names_the_line() {
        let source = serde_json::from_str::<serde_json::Value>("nope").unwrap_err();
        let error = AppError::Decode { line: 7, source };
        assert!(error.to_string().starts_with("invalid plan event on line 7:"));
    }
}
