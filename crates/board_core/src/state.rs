//! Owned board state handed to every handler by `&mut`.

use std::collections::HashMap;

use shared::domain::{Column, Order, OrderId};

use crate::{
    drag::DraggingState,
    forms::{AddForm, EditForm},
    overlay::{FocusTarget, Overlays},
};

#[derive(Debug, Clone, Default)]
pub struct BoardState {
    orders: HashMap<OrderId, Order>,
    // Placement within a column; a higher rank sits further down.
    ranks: HashMap<OrderId, u64>,
    next_rank: u64,
    pub(crate) dragging: DraggingState,
    pub(crate) overlays: Overlays,
    pub(crate) focus: FocusTarget,
    pub add_form: AddForm,
    pub edit_form: EditForm,
}

impl BoardState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.orders.len()
    }

    pub fn is_empty(&self) -> bool {
        self.orders.is_empty()
    }

    pub fn order(&self, id: &OrderId) -> Option<&Order> {
        self.orders.get(id)
    }

    pub fn contains(&self, id: &OrderId) -> bool {
        self.orders.contains_key(id)
    }

    pub fn orders(&self) -> impl Iterator<Item = &Order> {
        self.orders.values()
    }

    /// Orders whose column is `column`, top card first.
    pub fn orders_in(&self, column: Column) -> Vec<&Order> {
        let mut orders: Vec<&Order> = self
            .orders
            .values()
            .filter(|order| order.column == column)
            .collect();
        orders.sort_by_key(|order| self.ranks.get(&order.id).copied().unwrap_or(u64::MAX));
        orders
    }

    pub fn dragging(&self) -> &DraggingState {
        &self.dragging
    }

    pub fn overlays(&self) -> &Overlays {
        &self.overlays
    }

    pub fn focus(&self) -> FocusTarget {
        self.focus
    }

    pub(crate) fn order_mut(&mut self, id: &OrderId) -> Option<&mut Order> {
        self.orders.get_mut(id)
    }

    /// Inserts `order` as the last card of its column.
    pub(crate) fn insert_last(&mut self, order: Order) {
        let id = order.id.clone();
        self.orders.insert(id.clone(), order);
        self.place_last(&id);
    }

    pub(crate) fn place_last(&mut self, id: &OrderId) {
        self.next_rank += 1;
        self.ranks.insert(id.clone(), self.next_rank);
    }

    pub(crate) fn remove(&mut self, id: &OrderId) -> Option<Order> {
        self.ranks.remove(id);
        self.orders.remove(id)
    }
}
