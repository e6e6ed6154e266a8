//! Error types for puzzle loading, engine commands and the document fetch.

use crate::model::Direction;

/// Problems found while turning a puzzle document into a grid. Any of these aborts loading.
#[derive(Debug, thiserror::Error)]
pub enum PuzzleError {
    #[error("invalid grid shape: {0}")]
    InvalidGridShape(String),

    #[error("invalid target letter {value:?} at ({row}, {col})")]
    InvalidTargetLetter { row: usize, col: usize, value: String },

    #[error("puzzle document is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),
}

/// Rejected engine commands. State is left untouched when one of these is returned.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum EngineError {
    #[error("not a letter A-Z: {0:?}")]
    InvalidInput(char),

    #[error("({row}, {col}) is not a white cell")]
    InvalidCell { row: usize, col: usize },

    #[error("no {direction} slot at index {index}")]
    UnknownSlot { direction: Direction, index: usize },
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FetchError {
    #[error("no window available")]
    NoWindow,

    #[error("request failed: {0}")]
    Network(String),

    #[error("server answered {status} for {url}")]
    Status { status: u16, url: String },
}

/// Anything that keeps the page from showing a puzzle.
#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    #[error(transparent)]
    Fetch(#[from] FetchError),

    #[error(transparent)]
    Puzzle(#[from] PuzzleError),
}
