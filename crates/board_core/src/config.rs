use std::{
    fs,
    io::ErrorKind,
    path::{Path, PathBuf},
};

use anyhow::Context;
use serde::Deserialize;

use crate::command::DEFAULT_DELETE_PROMPT;

pub const DEFAULT_SETTINGS_FILE: &str = "order_board.toml";

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Options of the table selector, in display order.
    pub tables: Vec<String>,
    pub confirm_delete_message: String,
    pub window_title: String,
    pub log_filter: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            tables: (1..=9).map(|n| n.to_string()).collect(),
            confirm_delete_message: DEFAULT_DELETE_PROMPT.into(),
            window_title: "Order Board".into(),
            log_filter: "info".into(),
        }
    }
}

/// Reads `path` (or `order_board.toml` in the working directory) and then
/// applies `ORDER_BOARD__*` environment overrides. A missing file yields the
/// defaults; a file that exists but does not parse is an error.
pub fn load_settings(path: Option<&Path>) -> anyhow::Result<Settings> {
    let path = path
        .map(Path::to_path_buf)
        .unwrap_or_else(|| PathBuf::from(DEFAULT_SETTINGS_FILE));

    let mut settings = match fs::read_to_string(&path) {
        Ok(raw) => parse_settings(&raw)
            .with_context(|| format!("failed to parse settings file '{}'", path.display()))?,
        Err(err) if err.kind() == ErrorKind::NotFound => Settings::default(),
        Err(err) => {
            return Err(err)
                .with_context(|| format!("failed to read settings file '{}'", path.display()))
        }
    };

    apply_env_overrides(&mut settings, |name| std::env::var(name).ok());
    Ok(settings)
}

pub fn parse_settings(raw: &str) -> anyhow::Result<Settings> {
    let mut settings: Settings = toml::from_str(raw)?;
    settings.tables = normalize_tables(settings.tables);
    if settings.tables.is_empty() {
        anyhow::bail!("`tables` must list at least one table");
    }
    Ok(settings)
}

pub fn apply_env_overrides(settings: &mut Settings, lookup: impl Fn(&str) -> Option<String>) {
    if let Some(v) = lookup("ORDER_BOARD__TABLES") {
        let tables = normalize_tables(v.split(',').map(str::to_string).collect());
        if !tables.is_empty() {
            settings.tables = tables;
        }
    }
    if let Some(v) = lookup("ORDER_BOARD__WINDOW_TITLE") {
        settings.window_title = v;
    }
    if let Some(v) = lookup("ORDER_BOARD__LOG_FILTER") {
        settings.log_filter = v;
    }
    if let Some(v) = lookup("ORDER_BOARD__CONFIRM_DELETE_MESSAGE") {
        settings.confirm_delete_message = v;
    }
}

fn normalize_tables(tables: Vec<String>) -> Vec<String> {
    let mut out: Vec<String> = Vec::with_capacity(tables.len());
    for table in tables {
        let table = table.trim();
        if !table.is_empty() && !out.iter().any(|seen| seen == table) {
            out.push(table.to_string());
        }
    }
    out
}

#[cfg(test)]
#[path = "tests/config_tests.rs"]
mod tests;
