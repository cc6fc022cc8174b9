//! Add, edit, help and delete-confirmation windows.

use board_core::{AddForm, EditForm, FocusTarget};
use eframe::egui;
use shared::{domain::Column, protocol::BoardCommand};

use crate::controller::{
    events::{UiError, UiErrorContext, UiEvent},
    orchestration::EventSink,
};

const FIELD_WIDTH: f32 = 280.0;

fn dialog(title: &str) -> egui::Window<'_> {
    egui::Window::new(title)
        .collapsible(false)
        .resizable(false)
        .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
}

fn error_line(ui: &mut egui::Ui, error: Option<&UiError>, context: UiErrorContext) {
    if let Some(error) = error.filter(|error| error.context() == context) {
        ui.colored_label(ui.visuals().error_fg_color, error.message());
    }
}

fn table_selector(ui: &mut egui::Ui, id_salt: &str, selected: &mut String, tables: &[String]) {
    let text = if selected.is_empty() {
        "Select a table".to_string()
    } else {
        format!("Table {selected}")
    };

    egui::ComboBox::from_id_salt(id_salt)
        .width(FIELD_WIDTH)
        .selected_text(text)
        .show_ui(ui, |ui| {
            ui.selectable_value(selected, String::new(), "Select a table");
            for table in tables {
                ui.selectable_value(selected, table.clone(), format!("Table {table}"));
            }
        });
}

pub fn show_add_dialog(
    ctx: &egui::Context,
    form: &mut AddForm,
    tables: &[String],
    error: Option<&UiError>,
    focus: Option<FocusTarget>,
    sink: &mut EventSink<'_>,
) {
    dialog("Add order").show(ctx, |ui| {
        ui.label("Title");
        let title = ui.add(
            egui::TextEdit::singleline(&mut form.title)
                .hint_text("e.g. Pasta")
                .desired_width(FIELD_WIDTH),
        );
        if focus == Some(FocusTarget::AddTitle) {
            title.request_focus();
        }
        let submitted = title.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter));

        ui.label("Table");
        table_selector(ui, "add_order_table", &mut form.table, tables);
        error_line(ui, error, UiErrorContext::AddOrder);

        ui.separator();
        ui.horizontal(|ui| {
            if ui.button("Add").clicked() || submitted {
                sink.emit(BoardCommand::AddSubmit);
            }
            if ui.button("Cancel").clicked() {
                sink.emit(BoardCommand::AddToggle);
            }
        });
    });
}

pub fn show_edit_dialog(
    ctx: &egui::Context,
    form: &mut EditForm,
    tables: &[String],
    error: Option<&UiError>,
    focus: Option<FocusTarget>,
    sink: &mut EventSink<'_>,
) {
    dialog("Edit order").show(ctx, |ui| {
        ui.label("Title");
        let title = ui.add(egui::TextEdit::singleline(&mut form.title).desired_width(FIELD_WIDTH));
        if focus == Some(FocusTarget::EditTitle) {
            title.request_focus();
        }
        let submitted = title.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter));

        ui.label("Table");
        table_selector(ui, "edit_order_table", &mut form.table, tables);

        ui.label("Status");
        egui::ComboBox::from_id_salt("edit_order_column")
            .width(FIELD_WIDTH)
            .selected_text(form.column.map(Column::title).unwrap_or("Select a status"))
            .show_ui(ui, |ui| {
                for column in Column::ALL {
                    ui.selectable_value(&mut form.column, Some(column), column.title());
                }
            });

        error_line(ui, error, UiErrorContext::EditOrder);
        error_line(ui, error, UiErrorContext::DeleteOrder);

        ui.separator();
        ui.horizontal(|ui| {
            if ui.button("Save").clicked() || submitted {
                sink.emit(BoardCommand::EditSubmit);
            }
            if ui.button("Cancel").clicked() {
                sink.emit(BoardCommand::CloseEdit);
            }
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                let delete = egui::Button::new(
                    egui::RichText::new("Delete").color(ui.visuals().error_fg_color),
                );
                if ui.add(delete).clicked() {
                    sink.emit(UiEvent::DeleteRequested);
                }
            });
        });
    });
}

const HELP_LINES: [&str; 5] = [
    "Drag a card onto another column to change its status.",
    "Use \"Add order\" to put a new order in the Ordered column.",
    "Use \"Edit\" on a card to rename it, move it or delete it.",
    "Enter submits the open form.",
    "Escape closes the topmost window.",
];

pub fn show_help_dialog(ctx: &egui::Context, focus: Option<FocusTarget>, sink: &mut EventSink<'_>) {
    dialog("Help").show(ctx, |ui| {
        for line in HELP_LINES {
            ui.label(format!("• {line}"));
        }
        ui.separator();
        let close = ui.button("Close");
        if focus == Some(FocusTarget::HelpOverlay) {
            close.request_focus();
        }
        if close.clicked() {
            sink.emit(BoardCommand::HelpToggle);
        }
    });
}

pub fn show_confirm_delete_dialog(ctx: &egui::Context, prompt: &str, sink: &mut EventSink<'_>) {
    dialog("Delete order").order(egui::Order::Foreground).show(ctx, |ui| {
        ui.label(prompt);
        ui.separator();
        ui.horizontal(|ui| {
            if ui.button("Delete").clicked() {
                sink.emit(UiEvent::DeleteAnswered(true));
            }
            if ui.button("Keep").clicked() {
                sink.emit(UiEvent::DeleteAnswered(false));
            }
        });
    });
}
