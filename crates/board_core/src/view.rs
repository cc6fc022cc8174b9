//! Read-only projection of [`BoardState`] that the GUI draws and the CLI prints.
//!
//! Nothing here is a second source of truth: a card's column, text and drag
//! affordance are recomputed from the order map on every projection.

use std::fmt::Write as _;

use chrono::Local;
use serde::Serialize;
use shared::domain::{Column, Order, OrderId};

use crate::{
    overlay::{FocusTarget, Overlays},
    state::BoardState,
};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CardView {
    pub id: OrderId,
    pub title: String,
    pub table: String,
    /// Local `HH:MM` the order was created.
    pub created: String,
    pub dragging: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ColumnView {
    pub column: Column,
    pub title: &'static str,
    pub highlighted: bool,
    pub cards: Vec<CardView>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BoardView {
    pub columns: Vec<ColumnView>,
    pub overlays: Overlays,
    pub focus: FocusTarget,
}

fn card_view(order: &Order, source: Option<&OrderId>) -> CardView {
    CardView {
        id: order.id.clone(),
        title: order.title.clone(),
        table: order.table.clone(),
        created: order.created.with_timezone(&Local).format("%H:%M").to_string(),
        dragging: source == Some(&order.id),
    }
}

impl BoardView {
    pub fn project(state: &BoardState) -> Self {
        let dragging = state.dragging();
        let columns = Column::ALL
            .into_iter()
            .map(|column| ColumnView {
                column,
                title: column.title(),
                highlighted: dragging.over == Some(column),
                cards: state
                    .orders_in(column)
                    .into_iter()
                    .map(|order| card_view(order, dragging.source.as_ref()))
                    .collect(),
            })
            .collect();

        Self {
            columns,
            overlays: *state.overlays(),
            focus: state.focus(),
        }
    }

    pub fn column(&self, column: Column) -> Option<&ColumnView> {
        self.columns.iter().find(|view| view.column == column)
    }

    /// Column and card carrying `id`, if it is on the board.
    pub fn find_card(&self, id: &OrderId) -> Option<(Column, &CardView)> {
        self.columns.iter().find_map(|view| {
            view.cards
                .iter()
                .find(|card| &card.id == id)
                .map(|card| (view.column, card))
        })
    }

    pub fn card_count(&self) -> usize {
        self.columns.iter().map(|view| view.cards.len()).sum()
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }

    pub fn render_text(&self) -> String {
        let mut out = String::new();
        for view in &self.columns {
            let marker = if view.highlighted { " *" } else { "" };
            let _ = writeln!(out, "{} ({}){marker}", view.title, view.cards.len());
            if view.cards.is_empty() {
                let _ = writeln!(out, "  -");
            }
            for card in &view.cards {
                let drag = if card.dragging { " [dragging]" } else { "" };
                let _ = writeln!(
                    out,
                    "  {} | table {} | {} | {}{drag}",
                    card.created, card.table, card.title, card.id
                );
            }
        }
        let open: Vec<&str> = [
            ("help", self.overlays.help),
            ("add", self.overlays.add),
            ("edit", self.overlays.edit),
        ]
        .into_iter()
        .filter_map(|(name, open)| open.then_some(name))
        .collect();
        if !open.is_empty() {
            let _ = writeln!(out, "open overlays: {}", open.join(", "));
        }
        out
    }
}
