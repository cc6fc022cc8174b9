//! Dispatch of [`BoardCommand`]s to the drag and form handlers.

use serde::Serialize;
use shared::{
    domain::{Column, OrderId},
    error::BoardError,
    protocol::BoardCommand,
};
use tracing::debug;

use crate::{
    confirm::ConfirmPrompt,
    drag,
    factory::OrderFactory,
    forms,
    overlay::{self, OverlayKind},
    state::BoardState,
};

pub const DEFAULT_DELETE_PROMPT: &str = "Are you sure you want to delete this order?";

/// Collaborators a handler may need besides the board state itself.
pub struct Collaborators<'a> {
    pub factory: &'a mut dyn OrderFactory,
    pub confirm: &'a mut dyn ConfirmPrompt,
    pub delete_prompt: &'a str,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum CommandOutcome {
    Added { id: OrderId },
    Edited { id: OrderId },
    Deleted { id: OrderId },
    Moved { id: OrderId, column: Column },
    DragStarted { id: OrderId },
    Hovering { column: Column },
    OverlayClosed { overlay: OverlayKind },
    Updated,
    Unchanged,
}

pub fn apply_command(
    state: &mut BoardState,
    deps: &mut Collaborators<'_>,
    command: BoardCommand,
) -> Result<CommandOutcome, BoardError> {
    let name = command.name();
    let outcome = match command {
        BoardCommand::DragStart { target } => {
            drag::on_drag_start(state, &target).map(|id| CommandOutcome::DragStarted { id })
        }
        BoardCommand::DragOver { path } => {
            drag::on_drag_over(state, &path).map(|column| CommandOutcome::Hovering { column })
        }
        BoardCommand::DragEnd => {
            drag::on_drag_end(state);
            Ok(CommandOutcome::Updated)
        }
        BoardCommand::Drop => {
            drag::on_drop(state).map(|(id, column)| CommandOutcome::Moved { id, column })
        }
        BoardCommand::AddToggle => {
            forms::on_add_toggle(state);
            Ok(CommandOutcome::Updated)
        }
        BoardCommand::AddFill { title, table } => {
            state.add_form.title = title;
            state.add_form.table = table;
            Ok(CommandOutcome::Updated)
        }
        BoardCommand::AddSubmit => {
            forms::on_add_submit(state, &mut *deps.factory).map(|id| CommandOutcome::Added { id })
        }
        BoardCommand::OpenEdit { id } => {
            forms::open_edit_for(state, &id).map(|()| CommandOutcome::Updated)
        }
        BoardCommand::CloseEdit => {
            forms::close_edit(state);
            Ok(CommandOutcome::Updated)
        }
        BoardCommand::EditFill {
            title,
            table,
            column,
        } => {
            if let Some(title) = title {
                state.edit_form.title = title;
            }
            if let Some(table) = table {
                state.edit_form.table = table;
            }
            if let Some(column) = column {
                state.edit_form.column = Some(column);
            }
            Ok(CommandOutcome::Updated)
        }
        BoardCommand::EditSubmit => {
            forms::on_edit_submit(state).map(|id| CommandOutcome::Edited { id })
        }
        BoardCommand::Delete => forms::on_delete(state, &mut *deps.confirm, deps.delete_prompt)
            .map(|order| CommandOutcome::Deleted { id: order.id }),
        BoardCommand::HelpToggle => {
            overlay::on_help_toggle(state);
            Ok(CommandOutcome::Updated)
        }
        BoardCommand::Escape => Ok(overlay::close_topmost(state)
            .map(|overlay| CommandOutcome::OverlayClosed { overlay })
            .unwrap_or(CommandOutcome::Unchanged)),
    };

    match &outcome {
        Ok(result) => debug!(command = name, ?result, "board command applied"),
        Err(err) => debug!(command = name, error = %err, "board command rejected"),
    }
    outcome
}
