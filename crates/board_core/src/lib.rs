//! Order board core: owned board state, the drag and form handlers that
//! mutate it, and the view projection drawn from it.

pub mod command;
pub mod config;
pub mod confirm;
pub mod drag;
pub mod factory;
pub mod forms;
pub mod overlay;
pub mod state;
pub mod view;

pub use command::{apply_command, Collaborators, CommandOutcome, DEFAULT_DELETE_PROMPT};
pub use config::{load_settings, Settings, DEFAULT_SETTINGS_FILE};
pub use confirm::{ConfirmPrompt, FixedAnswer};
pub use drag::{DraggingPatch, DraggingState};
pub use factory::{OrderFactory, SequentialOrderFactory, UuidOrderFactory};
pub use forms::{AddForm, EditForm};
pub use overlay::{FocusTarget, OverlayKind, Overlays};
pub use state::BoardState;
pub use view::{BoardView, CardView, ColumnView};

#[cfg(test)]
#[path = "tests/lib_tests.rs"]
mod tests;
