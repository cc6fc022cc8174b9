//! Applies queued [`UiEvent`]s to the board state once per frame.

use board_core::{
    apply_command, BoardState, Collaborators, CommandOutcome, FixedAnswer, FocusTarget,
    OrderFactory,
};
use shared::{domain::OrderId, protocol::BoardCommand};

use crate::controller::events::{UiError, UiErrorContext, UiEvent};

pub struct BoardSession {
    pub state: BoardState,
    factory: Box<dyn OrderFactory>,
    delete_prompt: String,
    confirm_delete_open: bool,
    status: String,
    last_error: Option<UiError>,
    // Focus target already handed to a widget; a differing state focus is new.
    applied_focus: Option<FocusTarget>,
}

impl BoardSession {
    pub fn new(factory: Box<dyn OrderFactory>, delete_prompt: impl Into<String>) -> Self {
        Self {
            state: BoardState::new(),
            factory,
            delete_prompt: delete_prompt.into(),
            confirm_delete_open: false,
            status: "Ready".to_string(),
            last_error: None,
            applied_focus: None,
        }
    }

    pub fn status(&self) -> &str {
        &self.status
    }

    pub fn status_mut(&mut self) -> &mut String {
        &mut self.status
    }

    pub fn last_error(&self) -> Option<&UiError> {
        self.last_error.as_ref()
    }

    pub fn delete_prompt(&self) -> &str {
        &self.delete_prompt
    }

    pub fn confirm_delete_open(&self) -> bool {
        self.confirm_delete_open
    }

    /// Focus target to hand to a widget this frame, reported once per change.
    pub fn take_focus_request(&mut self) -> Option<FocusTarget> {
        let focus = self.state.focus();
        if self.applied_focus == Some(focus) {
            return None;
        }
        self.applied_focus = Some(focus);
        Some(focus)
    }

    pub fn handle(&mut self, event: UiEvent) {
        match event {
            UiEvent::Board(BoardCommand::Delete) | UiEvent::DeleteRequested => {
                if self.state.edit_form.id.is_some() {
                    self.confirm_delete_open = true;
                }
            }
            UiEvent::DeleteAnswered(answer) => {
                self.confirm_delete_open = false;
                self.apply(BoardCommand::Delete, answer);
            }
            UiEvent::Board(BoardCommand::Escape) if self.confirm_delete_open => {
                self.confirm_delete_open = false;
                self.status = "Delete cancelled.".to_string();
            }
            UiEvent::Board(command) => self.apply(command, false),
        }
    }

    fn apply(&mut self, command: BoardCommand, confirm_answer: bool) {
        let context = UiErrorContext::for_command(&command);
        let mut confirm = FixedAnswer(confirm_answer);
        let mut deps = Collaborators {
            factory: self.factory.as_mut(),
            confirm: &mut confirm,
            delete_prompt: &self.delete_prompt,
        };

        match apply_command(&mut self.state, &mut deps, command) {
            Ok(outcome) => {
                self.last_error = None;
                if let Some(status) = status_for(&outcome, &self.state) {
                    self.status = status;
                }
            }
            Err(err) => {
                let error = UiError::from_board_error(context, &err);
                if !error.is_silent() {
                    self.status = error.message().to_string();
                    self.last_error = Some(error);
                }
            }
        }
    }
}

fn status_for(outcome: &CommandOutcome, state: &BoardState) -> Option<String> {
    let title = |id: &OrderId| {
        state
            .order(id)
            .map(|order| order.title.clone())
            .unwrap_or_default()
    };
    match outcome {
        CommandOutcome::Added { id } => Some(format!("Added \"{}\".", title(id))),
        CommandOutcome::Edited { id } => Some(format!("Saved \"{}\".", title(id))),
        CommandOutcome::Deleted { .. } => Some("Order deleted.".to_string()),
        CommandOutcome::Moved { id, column } => {
            Some(format!("Moved \"{}\" to {}.", title(id), column.title()))
        }
        _ => None,
    }
}

#[cfg(test)]
#[path = "tests/reducer_tests.rs"]
mod tests;
