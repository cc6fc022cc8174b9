use super::{apply_env_overrides, load_settings, parse_settings, Settings};

use std::{
    collections::HashMap,
    env, fs,
    time::{SystemTime, UNIX_EPOCH},
};

#[test]
fn defaults_offer_nine_tables() {
    let settings = Settings::default();
    assert_eq!(settings.tables.first().map(String::as_str), Some("1"));
    assert_eq!(settings.tables.len(), 9);
    assert_eq!(settings.log_filter, "info");
}

#[test]
fn file_values_override_defaults_and_tables_are_cleaned() {
    let settings = parse_settings(
        r#"
        tables = [" 12", "14", "", "12", "Bar"]
        window_title = "Kitchen"
        "#,
    )
    .expect("parse settings");

    assert_eq!(settings.tables, vec!["12", "14", "Bar"]);
    assert_eq!(settings.window_title, "Kitchen");
    assert_eq!(
        settings.confirm_delete_message,
        Settings::default().confirm_delete_message
    );
}

#[test]
fn empty_table_list_is_rejected() {
    assert!(parse_settings("tables = []").is_err());
}

#[test]
fn env_overrides_take_precedence() {
    let vars: HashMap<&str, &str> = HashMap::from([
        ("ORDER_BOARD__TABLES", "A, B ,,C"),
        ("ORDER_BOARD__LOG_FILTER", "board_core=debug"),
    ]);
    let mut settings = Settings::default();
    apply_env_overrides(&mut settings, |name| vars.get(name).map(|v| v.to_string()));

    assert_eq!(settings.tables, vec!["A", "B", "C"]);
    assert_eq!(settings.log_filter, "board_core=debug");
    assert_eq!(settings.window_title, Settings::default().window_title);
}

#[test]
fn blank_env_table_list_keeps_existing_tables() {
    let mut settings = Settings::default();
    apply_env_overrides(&mut settings, |name| {
        (name == "ORDER_BOARD__TABLES").then(|| " , ".to_string())
    });
    assert_eq!(settings.tables, Settings::default().tables);
}

#[test]
fn missing_file_yields_defaults_and_bad_file_errors() {
    let suffix = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .expect("clock")
        .as_nanos();
    let temp_root = env::temp_dir().join(format!("order_board_config_test_{suffix}"));
    fs::create_dir_all(&temp_root).expect("temp root");

    let missing = temp_root.join("absent.toml");
    let settings = load_settings(Some(&missing)).expect("defaults for missing file");
    assert!(!settings.tables.is_empty());

    let broken = temp_root.join("broken.toml");
    fs::write(&broken, "tables = [1, ").expect("write broken file");
    let err = load_settings(Some(&broken)).expect_err("broken file must fail");
    assert!(err.to_string().contains("failed to parse settings file"));

    fs::remove_dir_all(temp_root).expect("cleanup");
}
