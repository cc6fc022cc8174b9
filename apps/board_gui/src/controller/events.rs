//! UI events and error modeling for the board GUI controller.

use shared::{
    error::{BoardError, ErrorCode},
    protocol::BoardCommand,
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UiEvent {
    Board(BoardCommand),
    /// The edit form's delete button; opens the confirmation dialog.
    DeleteRequested,
    /// The user's answer in the confirmation dialog.
    DeleteAnswered(bool),
}

impl UiEvent {
    pub fn name(&self) -> &'static str {
        match self {
            UiEvent::Board(command) => command.name(),
            UiEvent::DeleteRequested => "delete_requested",
            UiEvent::DeleteAnswered(_) => "delete_answered",
        }
    }
}

impl From<BoardCommand> for UiEvent {
    fn from(command: BoardCommand) -> Self {
        UiEvent::Board(command)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UiErrorCategory {
    Validation,
    NotFound,
    Declined,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UiErrorContext {
    AddOrder,
    EditOrder,
    DeleteOrder,
    Drag,
    General,
}

impl UiErrorContext {
    pub fn for_command(command: &BoardCommand) -> Self {
        match command {
            BoardCommand::AddSubmit => UiErrorContext::AddOrder,
            BoardCommand::OpenEdit { .. } | BoardCommand::EditSubmit => UiErrorContext::EditOrder,
            BoardCommand::Delete => UiErrorContext::DeleteOrder,
            BoardCommand::DragStart { .. }
            | BoardCommand::DragOver { .. }
            | BoardCommand::DragEnd
            | BoardCommand::Drop => UiErrorContext::Drag,
            _ => UiErrorContext::General,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UiError {
    category: UiErrorCategory,
    context: UiErrorContext,
    message: String,
}

impl UiError {
    pub fn from_board_error(context: UiErrorContext, err: &BoardError) -> Self {
        let category = match err.code() {
            ErrorCode::Validation => UiErrorCategory::Validation,
            ErrorCode::NotFound => UiErrorCategory::NotFound,
            ErrorCode::Declined => UiErrorCategory::Declined,
        };
        let message = match err {
            BoardError::MissingField(field) => format!("Please fill in the {field}."),
            BoardError::UnknownOrder(_) => "That order is no longer on the board.".to_string(),
            BoardError::DeleteDeclined => "Delete cancelled.".to_string(),
            other => other.to_string(),
        };

        Self {
            category,
            context,
            message,
        }
    }

    /// Drag rejections happen many times per second while hovering and are
    /// never worth showing.
    pub fn is_silent(&self) -> bool {
        self.context == UiErrorContext::Drag
    }

    pub fn category(&self) -> UiErrorCategory {
        self.category
    }

    pub fn context(&self) -> UiErrorContext {
        self.context
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}
