use serde::{Deserialize, Serialize};

use crate::domain::{Column, OrderId};

/// Dataset attributes of one element on an event path.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ElementData {
    /// `data-id`: the order a card or edit trigger belongs to.
    pub id: Option<String>,
    /// `data-area`: the column a drop area stands for.
    pub area: Option<String>,
}

impl ElementData {
    pub fn card(id: impl Into<String>) -> Self {
        Self {
            id: Some(id.into()),
            area: None,
        }
    }

    pub fn area(area: impl Into<String>) -> Self {
        Self {
            id: None,
            area: Some(area.into()),
        }
    }

    pub fn column(column: Column) -> Self {
        Self::area(column.as_str())
    }
}

/// One user interaction with the board, in the order the UI delivered it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "payload", rename_all = "snake_case")]
pub enum BoardCommand {
    DragStart {
        target: ElementData,
    },
    DragOver {
        path: Vec<ElementData>,
    },
    DragEnd,
    Drop,
    AddToggle,
    AddFill {
        title: String,
        table: String,
    },
    AddSubmit,
    OpenEdit {
        id: OrderId,
    },
    CloseEdit,
    EditFill {
        #[serde(default)]
        title: Option<String>,
        #[serde(default)]
        table: Option<String>,
        #[serde(default)]
        column: Option<Column>,
    },
    EditSubmit,
    Delete,
    HelpToggle,
    Escape,
}

impl BoardCommand {
    pub fn name(&self) -> &'static str {
        match self {
            BoardCommand::DragStart { .. } => "drag_start",
            BoardCommand::DragOver { .. } => "drag_over",
            BoardCommand::DragEnd => "drag_end",
            BoardCommand::Drop => "drop",
            BoardCommand::AddToggle => "add_toggle",
            BoardCommand::AddFill { .. } => "add_fill",
            BoardCommand::AddSubmit => "add_submit",
            BoardCommand::OpenEdit { .. } => "open_edit",
            BoardCommand::CloseEdit => "close_edit",
            BoardCommand::EditFill { .. } => "edit_fill",
            BoardCommand::EditSubmit => "edit_submit",
            BoardCommand::Delete => "delete",
            BoardCommand::HelpToggle => "help_toggle",
            BoardCommand::Escape => "escape",
        }
    }
}
