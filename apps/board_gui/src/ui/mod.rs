//! UI layer for the order board: app shell, board columns, dialogs and themes.

pub mod app;
pub mod board;
pub mod dialogs;
pub mod theme;

pub use app::{resolve_settings_path, OrderBoardApp, StartupConfig};
