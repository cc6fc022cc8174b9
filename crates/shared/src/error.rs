use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorCode {
    NotFound,
    Validation,
    Declined,
}

/// Serializable form of a rejected board command.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiError {
    pub code: ErrorCode,
    pub message: String,
}

impl ApiError {
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
        }
    }
}

/// Reasons a board handler refuses an input. A handler that returns one of
/// these has left the board untouched.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BoardError {
    #[error("required field `{0}` is empty")]
    MissingField(&'static str),
    #[error("no order with id {0}")]
    UnknownOrder(String),
    #[error("unknown column `{0}`")]
    UnknownColumn(String),
    #[error("no order is being dragged")]
    NoDragSource,
    #[error("no column tagged on the drag path")]
    NoDropTarget,
    #[error("delete was not confirmed")]
    DeleteDeclined,
}

impl BoardError {
    pub fn code(&self) -> ErrorCode {
        match self {
            BoardError::UnknownOrder(_) => ErrorCode::NotFound,
            BoardError::DeleteDeclined => ErrorCode::Declined,
            BoardError::MissingField(_)
            | BoardError::UnknownColumn(_)
            | BoardError::NoDragSource
            | BoardError::NoDropTarget => ErrorCode::Validation,
        }
    }
}

impl From<BoardError> for ApiError {
    fn from(value: BoardError) -> Self {
        Self {
            code: value.code(),
            message: value.to_string(),
        }
    }
}
