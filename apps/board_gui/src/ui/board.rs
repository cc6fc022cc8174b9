//! The three order columns with drag-and-drop between them.

use board_core::{BoardView, CardView, ColumnView};
use eframe::egui;
use shared::{
    domain::OrderId,
    protocol::{BoardCommand, ElementData},
};

use crate::{
    controller::orchestration::EventSink,
    ui::theme::{column_color, ThemeSettings},
};

const COLUMN_MIN_HEIGHT: f32 = 240.0;

pub fn show_board(
    ui: &mut egui::Ui,
    view: &BoardView,
    theme: ThemeSettings,
    sink: &mut EventSink<'_>,
) {
    let mut dropped = false;

    ui.columns(view.columns.len(), |uis| {
        for (column_ui, column) in uis.iter_mut().zip(&view.columns) {
            dropped |= show_column(column_ui, column, theme, sink);
        }
    });

    if !dropped {
        sync_drag_source(ui.ctx(), view, sink);
    }
}

/// Mirrors egui's drag payload into the board's dragging state.
fn sync_drag_source(ctx: &egui::Context, view: &BoardView, sink: &mut EventSink<'_>) {
    let payload = egui::DragAndDrop::payload::<OrderId>(ctx);
    let current = view
        .columns
        .iter()
        .flat_map(|column| &column.cards)
        .find(|card| card.dragging)
        .map(|card| &card.id);

    match (payload.as_deref(), current) {
        (Some(id), current) if current != Some(id) => sink.emit(BoardCommand::DragStart {
            target: ElementData::card(id.as_str()),
        }),
        (None, Some(_)) => sink.emit(BoardCommand::DragEnd),
        _ => {}
    }
}

/// Returns true when a card was released over this column.
fn show_column(
    ui: &mut egui::Ui,
    column: &ColumnView,
    theme: ThemeSettings,
    sink: &mut EventSink<'_>,
) -> bool {
    let stripe = column_color(column.column);
    ui.horizontal(|ui| {
        ui.colored_label(stripe, "●");
        ui.strong(column.title);
        ui.weak(format!("({})", column.cards.len()));
    });

    let frame = egui::Frame::default()
        .inner_margin(egui::Margin::same(8))
        .corner_radius(egui::CornerRadius::same(theme.panel_rounding));

    let (response, dropped) = ui.dnd_drop_zone::<OrderId, _>(frame, |ui| {
        ui.set_min_size(egui::vec2(ui.available_width(), COLUMN_MIN_HEIGHT));
        if column.cards.is_empty() {
            ui.weak("No orders");
        }
        for card in &column.cards {
            show_card(ui, card, theme, sink);
        }
    });

    if column.highlighted {
        ui.painter().rect_stroke(
            response.response.rect,
            egui::CornerRadius::same(theme.panel_rounding),
            egui::Stroke::new(2.0, theme.accent_color),
            egui::StrokeKind::Outside,
        );
    }

    if let Some(id) = dropped {
        sink.emit(BoardCommand::DragStart {
            target: ElementData::card(id.as_str()),
        });
        sink.emit(BoardCommand::DragOver {
            path: vec![ElementData::column(column.column)],
        });
        sink.emit(BoardCommand::Drop);
        sink.emit(BoardCommand::DragEnd);
        return true;
    }

    if response.response.dnd_hover_payload::<OrderId>().is_some() && !column.highlighted {
        // The innermost element under the pointer carries no area; the
        // column itself does.
        sink.emit(BoardCommand::DragOver {
            path: vec![ElementData::default(), ElementData::column(column.column)],
        });
    }

    false
}

fn show_card(ui: &mut egui::Ui, card: &CardView, theme: ThemeSettings, sink: &mut EventSink<'_>) {
    let frame = egui::Frame::group(ui.style())
        .corner_radius(egui::CornerRadius::same(theme.panel_rounding))
        .fill(ui.visuals().faint_bg_color);

    frame.show(ui, |ui| {
        ui.set_width(ui.available_width());
        if card.dragging {
            ui.set_opacity(0.5);
        }
        ui.horizontal(|ui| {
            let drag_id = egui::Id::new(("order-card", card.id.as_str()));
            ui.dnd_drag_source(drag_id, card.id.clone(), |ui| {
                ui.vertical(|ui| {
                    ui.strong(&card.title);
                    ui.weak(format!("Table {} · {}", card.table, card.created));
                });
            });

            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                if ui.small_button("Edit").on_hover_text("Edit order").clicked() {
                    sink.emit(BoardCommand::OpenEdit {
                        id: card.id.clone(),
                    });
                }
            });
        });
    });
}
