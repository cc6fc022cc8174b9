//! Overlay visibility and keyboard focus.

use serde::Serialize;
use tracing::debug;

use crate::{forms, state::BoardState};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum OverlayKind {
    Help,
    Add,
    Edit,
}

/// Each overlay is either closed or open; all start closed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct Overlays {
    pub help: bool,
    pub add: bool,
    pub edit: bool,
}

impl Overlays {
    pub fn is_open(&self, kind: OverlayKind) -> bool {
        match kind {
            OverlayKind::Help => self.help,
            OverlayKind::Add => self.add,
            OverlayKind::Edit => self.edit,
        }
    }

    pub(crate) fn set(&mut self, kind: OverlayKind, open: bool) {
        match kind {
            OverlayKind::Help => self.help = open,
            OverlayKind::Add => self.add = open,
            OverlayKind::Edit => self.edit = open,
        }
    }

    pub fn any_open(&self) -> bool {
        self.help || self.add || self.edit
    }
}

/// Widget that should own keyboard focus after the last handler ran.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FocusTarget {
    #[default]
    AddTrigger,
    HelpOverlay,
    AddTitle,
    EditTitle,
}

pub fn on_help_toggle(state: &mut BoardState) {
    let open = !state.overlays.help;
    state.overlays.set(OverlayKind::Help, open);
    state.focus = if open {
        FocusTarget::HelpOverlay
    } else {
        FocusTarget::AddTrigger
    };
    debug!(open, "help overlay toggled");
}

/// Escape handling: closes the edit overlay first, then add, then help.
pub fn close_topmost(state: &mut BoardState) -> Option<OverlayKind> {
    if state.overlays.edit {
        forms::close_edit(state);
        Some(OverlayKind::Edit)
    } else if state.overlays.add {
        forms::on_add_toggle(state);
        Some(OverlayKind::Add)
    } else if state.overlays.help {
        on_help_toggle(state);
        Some(OverlayKind::Help)
    } else {
        None
    }
}
