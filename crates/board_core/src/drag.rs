//! Drag controller: keeps the dragging record in step with pointer events.

use std::str::FromStr;

use serde::Serialize;
use shared::{
    domain::{Column, OrderId},
    error::BoardError,
    protocol::ElementData,
};
use tracing::debug;

use crate::state::BoardState;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct DraggingState {
    pub source: Option<OrderId>,
    pub over: Option<Column>,
}

/// Partial update of [`DraggingState`]; `None` leaves a field as it is.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DraggingPatch {
    pub source: Option<Option<OrderId>>,
    pub over: Option<Option<Column>>,
}

impl DraggingState {
    pub fn apply(&mut self, patch: DraggingPatch) {
        if let Some(source) = patch.source {
            self.source = source;
        }
        if let Some(over) = patch.over {
            self.over = over;
        }
    }

    pub fn is_active(&self) -> bool {
        self.source.is_some()
    }
}

pub fn on_drag_start(state: &mut BoardState, target: &ElementData) -> Result<OrderId, BoardError> {
    let source = target
        .id
        .as_deref()
        .map(str::trim)
        .filter(|id| !id.is_empty())
        .map(OrderId::from)
        .ok_or(BoardError::MissingField("data-id"))?;

    state.dragging.apply(DraggingPatch {
        source: Some(Some(source.clone())),
        over: Some(None),
    });
    debug!(order_id = %source, "drag started");
    Ok(source)
}

/// Walks `path` from the innermost element outwards and hovers the first
/// column found. The nearest `data-area` wins even when it is not a column.
pub fn on_drag_over(state: &mut BoardState, path: &[ElementData]) -> Result<Column, BoardError> {
    let area = path
        .iter()
        .filter_map(|element| element.area.as_deref())
        .map(str::trim)
        .find(|area| !area.is_empty())
        .ok_or(BoardError::NoDropTarget)?;
    let column = Column::from_str(area)?;

    if state.dragging.over != Some(column) {
        debug!(%column, "drag over column");
    }
    state.dragging.apply(DraggingPatch {
        source: None,
        over: Some(Some(column)),
    });
    Ok(column)
}

pub fn on_drag_end(state: &mut BoardState) {
    state.dragging.apply(DraggingPatch {
        source: Some(None),
        over: Some(None),
    });
    debug!("drag ended");
}

/// Moves the dragged order into the hovered column. The dragging record is
/// left for [`on_drag_end`] to clear.
pub fn on_drop(state: &mut BoardState) -> Result<(OrderId, Column), BoardError> {
    let source = state
        .dragging
        .source
        .clone()
        .ok_or(BoardError::NoDragSource)?;
    let column = state.dragging.over.ok_or(BoardError::NoDropTarget)?;

    let order = state
        .order_mut(&source)
        .ok_or_else(|| BoardError::UnknownOrder(source.to_string()))?;
    if order.column == column {
        return Ok((source, column));
    }
    order.column = column;
    state.place_last(&source);
    debug!(order_id = %source, %column, "order dropped into column");
    Ok((source, column))
}
