use std::path::PathBuf;

/// Errors returned when a disc cannot be dropped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum MoveError {
    #[error("column {0} is out of range")]
    ColumnOutOfRange(usize),

    #[error("column {0} is full")]
    ColumnFull(usize),

    #[error("the game is over")]
    GameOver,
}

/// Errors that can occur when building a board from text rows.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BoardParseError {
    #[error("row {row} has {len} cells, expected {expected}")]
    RowLength {
        row: usize,
        len: usize,
        expected: usize,
    },

    #[error("invalid cell symbol '{symbol}' at row {row}, column {col}")]
    InvalidSymbol { row: usize, col: usize, symbol: char },

    #[error("disc at row {row}, column {col} is floating above an empty cell")]
    Floating { row: usize, col: usize },
}

/// Errors that can occur when loading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    FileRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse TOML: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("config validation error: {0}")]
    Validation(String),
}
