use std::path::PathBuf;

/// Errors raised while constructing a board.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BoardError {
    #[error("invalid board configuration: size {size}, run length {run_length}")]
    InvalidConfiguration { size: usize, run_length: usize },
}

/// Errors that can occur when loading or validating game configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    FileRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse config: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("config validation error: {0}")]
    Validation(String),

    #[error(transparent)]
    Board(#[from] BoardError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn board_error_display() {
        let err = BoardError::InvalidConfiguration { size: 3, run_length: 4 };
        assert_eq!(err.to_string(), "invalid board configuration: size 3, run length 4");
    }

    #[test]
    fn config_error_wraps_board_error() {
        let err: ConfigError = BoardError::InvalidConfiguration { size: 0, run_length: 0 }.into();
        assert_eq!(err.to_string(), "invalid board configuration: size 0, run length 0");
    }
}
