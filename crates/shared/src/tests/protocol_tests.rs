use std::str::FromStr;

use crate::{
    domain::{Column, OrderId},
    error::{ApiError, BoardError, ErrorCode},
    protocol::{BoardCommand, ElementData},
};

#[test]
fn column_parses_data_area_values() {
    assert_eq!(Column::from_str("ordered").expect("ordered"), Column::Ordered);
    assert_eq!(
        Column::from_str(" preparing ").expect("preparing"),
        Column::Preparing
    );
    assert_eq!(Column::from_str("served").expect("served"), Column::Served);
    assert_eq!(
        Column::from_str("kitchen"),
        Err(BoardError::UnknownColumn("kitchen".to_string()))
    );
}

#[test]
fn column_wire_form_matches_data_area() {
    for column in Column::ALL {
        let json = serde_json::to_string(&column).expect("serialize column");
        assert_eq!(json, format!("\"{}\"", column.as_str()));
    }
}

#[test]
fn script_commands_parse_from_tagged_json() {
    let raw = r#"[
        {"type": "add_toggle"},
        {"type": "add_fill", "payload": {"title": "Pasta", "table": "5"}},
        {"type": "add_submit"},
        {"type": "drag_over", "payload": {"path": [{"id": "a1"}, {"area": "served"}]}},
        {"type": "edit_fill", "payload": {"table": "7"}},
        {"type": "open_edit", "payload": {"id": "a1"}}
    ]"#;

    let commands: Vec<BoardCommand> = serde_json::from_str(raw).expect("parse script");
    assert_eq!(commands.len(), 6);
    assert_eq!(commands[0], BoardCommand::AddToggle);
    assert_eq!(
        commands[1],
        BoardCommand::AddFill {
            title: "Pasta".to_string(),
            table: "5".to_string(),
        }
    );
    assert_eq!(
        commands[3],
        BoardCommand::DragOver {
            path: vec![ElementData::card("a1"), ElementData::column(Column::Served)],
        }
    );
    assert_eq!(
        commands[4],
        BoardCommand::EditFill {
            title: None,
            table: Some("7".to_string()),
            column: None,
        }
    );
    assert_eq!(
        commands[5],
        BoardCommand::OpenEdit {
            id: OrderId::from("a1")
        }
    );
    assert_eq!(commands[5].name(), "open_edit");
}

#[test]
fn board_errors_map_to_api_error_codes() {
    let not_found: ApiError = BoardError::UnknownOrder("x".to_string()).into();
    assert_eq!(not_found.code, ErrorCode::NotFound);
    assert_eq!(not_found.message, "no order with id x");

    assert_eq!(BoardError::DeleteDeclined.code(), ErrorCode::Declined);
    assert_eq!(BoardError::MissingField("title").code(), ErrorCode::Validation);
}

#[test]
fn blank_order_id_counts_as_empty() {
    assert!(OrderId::new("  ").is_empty());
    assert!(!OrderId::random().is_empty());
}
