//! Add, edit and delete flows behind the board's modal forms.

use serde::Serialize;
use shared::{
    domain::{Column, Order, OrderDraft, OrderId},
    error::BoardError,
};
use tracing::debug;

use crate::{
    confirm::ConfirmPrompt,
    factory::OrderFactory,
    overlay::{FocusTarget, OverlayKind},
    state::BoardState,
};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct AddForm {
    pub title: String,
    /// Selected table; empty is the selector's default "no table" option.
    pub table: String,
}

impl AddForm {
    pub fn reset(&mut self) {
        self.title.clear();
        self.table.clear();
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct EditForm {
    pub id: Option<OrderId>,
    pub title: String,
    pub table: String,
    pub column: Option<Column>,
}

fn required<'a>(value: &'a str, field: &'static str) -> Result<&'a str, BoardError> {
    let value = value.trim();
    if value.is_empty() {
        Err(BoardError::MissingField(field))
    } else {
        Ok(value)
    }
}

fn close_add(state: &mut BoardState) {
    state.overlays.set(OverlayKind::Add, false);
    state.add_form.reset();
    state.focus = FocusTarget::AddTrigger;
}

pub fn on_add_toggle(state: &mut BoardState) {
    if state.overlays.add {
        close_add(state);
    } else {
        state.overlays.set(OverlayKind::Add, true);
        state.focus = FocusTarget::AddTitle;
    }
    debug!(open = state.overlays.add, "add overlay toggled");
}

pub fn on_add_submit(
    state: &mut BoardState,
    factory: &mut dyn OrderFactory,
) -> Result<OrderId, BoardError> {
    let title = required(&state.add_form.title, "title")?.to_string();
    let table = required(&state.add_form.table, "table")?.to_string();

    let order = factory.create(OrderDraft {
        title,
        table,
        column: Column::Ordered,
    });
    let id = order.id.clone();
    debug!(order_id = %id, table = %order.table, "order added");
    state.insert_last(order);

    close_add(state);
    Ok(id)
}

pub fn open_edit_for(state: &mut BoardState, id: &OrderId) -> Result<(), BoardError> {
    let order = state
        .order(id)
        .ok_or_else(|| BoardError::UnknownOrder(id.to_string()))?;

    let form = EditForm {
        id: Some(order.id.clone()),
        title: order.title.clone(),
        table: order.table.clone(),
        column: Some(order.column),
    };
    state.edit_form = form;
    state.overlays.set(OverlayKind::Edit, true);
    state.focus = FocusTarget::EditTitle;
    debug!(order_id = %id, "edit overlay opened");
    Ok(())
}

pub fn close_edit(state: &mut BoardState) {
    state.overlays.set(OverlayKind::Edit, false);
    state.edit_form = EditForm::default();
    state.focus = FocusTarget::AddTrigger;
    debug!("edit overlay closed");
}

pub fn on_edit_submit(state: &mut BoardState) -> Result<OrderId, BoardError> {
    let form = &state.edit_form;
    let title = required(&form.title, "title")?.to_string();
    let table = required(&form.table, "table")?.to_string();
    let column = form.column.ok_or(BoardError::MissingField("column"))?;
    let id = form
        .id
        .clone()
        .filter(|id| !id.is_empty())
        .ok_or(BoardError::MissingField("id"))?;

    let order = state
        .order_mut(&id)
        .ok_or_else(|| BoardError::UnknownOrder(id.to_string()))?;
    let moved = order.column != column;
    order.title = title;
    order.table = table;
    order.column = column;
    if moved {
        state.place_last(&id);
    }
    debug!(order_id = %id, %column, moved, "order edited");

    close_edit(state);
    Ok(id)
}

pub fn on_delete(
    state: &mut BoardState,
    confirm: &mut dyn ConfirmPrompt,
    prompt: &str,
) -> Result<Order, BoardError> {
    let id = state
        .edit_form
        .id
        .clone()
        .filter(|id| !id.is_empty())
        .ok_or(BoardError::MissingField("id"))?;
    if !state.contains(&id) {
        return Err(BoardError::UnknownOrder(id.to_string()));
    }
    if !confirm.confirm(prompt) {
        debug!(order_id = %id, "delete declined");
        return Err(BoardError::DeleteDeclined);
    }

    let removed = state
        .remove(&id)
        .ok_or_else(|| BoardError::UnknownOrder(id.to_string()))?;
    debug!(order_id = %id, "order deleted");
    close_edit(state);
    Ok(removed)
}
