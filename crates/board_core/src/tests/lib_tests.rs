use super::*;
use crate::{drag, forms, overlay};
use shared::{
    domain::{Column, OrderId},
    error::BoardError,
    protocol::ElementData,
};

fn add_order(
    state: &mut BoardState,
    factory: &mut SequentialOrderFactory,
    title: &str,
    table: &str,
) -> OrderId {
    forms::on_add_toggle(state);
    state.add_form.title = title.to_string();
    state.add_form.table = table.to_string();
    forms::on_add_submit(state, factory).expect("add order")
}

fn seeded() -> (BoardState, SequentialOrderFactory, OrderId, OrderId) {
    let mut state = BoardState::new();
    let mut factory = SequentialOrderFactory::default();
    let soup = add_order(&mut state, &mut factory, "Soup", "2");
    let steak = add_order(&mut state, &mut factory, "Steak", "4");
    (state, factory, soup, steak)
}

#[test]
fn add_submit_places_new_order_last_in_ordered_column() {
    let (mut state, mut factory, soup, _) = seeded();
    let before = state.len();

    let id = add_order(&mut state, &mut factory, "  Pasta ", "5");

    assert_eq!(state.len(), before + 1);
    let order = state.order(&id).expect("new order");
    assert_eq!(order.title, "Pasta");
    assert_eq!(order.table, "5");
    assert_eq!(order.column, Column::Ordered);

    let view = BoardView::project(&state);
    let ordered = view.column(Column::Ordered).expect("ordered column");
    assert_eq!(ordered.cards.first().map(|c| &c.id), Some(&soup));
    assert_eq!(ordered.cards.last().map(|c| &c.id), Some(&id));
    assert!(!state.overlays().add);
    assert_eq!(state.add_form, AddForm::default());
}

#[test]
fn add_submit_with_blank_title_or_table_changes_nothing() {
    let (mut state, mut factory, _, _) = seeded();
    let before = BoardView::project(&state);

    forms::on_add_toggle(&mut state);
    state.add_form.title = "   ".to_string();
    state.add_form.table = "3".to_string();
    assert_eq!(
        forms::on_add_submit(&mut state, &mut factory),
        Err(BoardError::MissingField("title"))
    );

    state.add_form.title = "Salad".to_string();
    state.add_form.table.clear();
    assert_eq!(
        forms::on_add_submit(&mut state, &mut factory),
        Err(BoardError::MissingField("table"))
    );

    assert_eq!(state.len(), 2);
    assert_eq!(BoardView::project(&state).columns, before.columns);
    // The overlay stays open with the user's input so it can be corrected.
    assert!(state.overlays().add);
    assert_eq!(state.add_form.title, "Salad");
}

#[test]
fn closing_add_overlay_resets_form_and_returns_focus() {
    let mut state = BoardState::new();
    forms::on_add_toggle(&mut state);
    assert!(state.overlays().add);
    assert_eq!(state.focus(), FocusTarget::AddTitle);

    state.add_form.title = "Draft".to_string();
    state.add_form.table = "6".to_string();
    forms::on_add_toggle(&mut state);

    assert!(!state.overlays().add);
    assert_eq!(state.add_form, AddForm::default());
    assert_eq!(state.focus(), FocusTarget::AddTrigger);
}

#[test]
fn open_edit_populates_form_from_order() {
    let (mut state, _, _, steak) = seeded();

    forms::open_edit_for(&mut state, &steak).expect("open edit");

    assert!(state.overlays().edit);
    assert_eq!(state.focus(), FocusTarget::EditTitle);
    assert_eq!(state.edit_form.id.as_ref(), Some(&steak));
    assert_eq!(state.edit_form.title, "Steak");
    assert_eq!(state.edit_form.table, "4");
    assert_eq!(state.edit_form.column, Some(Column::Ordered));
}

#[test]
fn open_edit_for_unknown_order_is_rejected() {
    let (mut state, _, _, _) = seeded();
    let missing = OrderId::from("nope");
    assert_eq!(
        forms::open_edit_for(&mut state, &missing),
        Err(BoardError::UnknownOrder("nope".to_string()))
    );
    assert!(!state.overlays().edit);
}

#[test]
fn edit_submit_updates_fields_and_moves_card_to_new_column() {
    let (mut state, _, soup, steak) = seeded();

    forms::open_edit_for(&mut state, &soup).expect("open edit");
    state.edit_form.title = "Tomato soup".to_string();
    state.edit_form.table = "7".to_string();
    state.edit_form.column = Some(Column::Served);
    forms::on_edit_submit(&mut state).expect("edit submit");

    let order = state.order(&soup).expect("edited order");
    assert_eq!(order.title, "Tomato soup");
    assert_eq!(order.table, "7");
    assert_eq!(order.column, Column::Served);

    let view = BoardView::project(&state);
    let (column, card) = view.find_card(&soup).expect("card on board");
    assert_eq!(column, Column::Served);
    assert_eq!(card.title, "Tomato soup");
    assert_eq!(card.table, "7");
    assert_eq!(
        view.column(Column::Ordered).map(|c| c.cards.len()),
        Some(1)
    );
    assert!(view.find_card(&steak).is_some());
    assert!(!state.overlays().edit);
    assert_eq!(state.edit_form, EditForm::default());
}

#[test]
fn edit_submit_with_missing_field_is_a_no_op() {
    let (mut state, _, soup, _) = seeded();
    forms::open_edit_for(&mut state, &soup).expect("open edit");
    state.edit_form.table.clear();

    assert_eq!(
        forms::on_edit_submit(&mut state),
        Err(BoardError::MissingField("table"))
    );
    assert_eq!(state.order(&soup).map(|o| o.table.as_str()), Some("2"));
    assert!(state.overlays().edit);

    state.edit_form.table = "3".to_string();
    state.edit_form.column = None;
    assert_eq!(
        forms::on_edit_submit(&mut state),
        Err(BoardError::MissingField("column"))
    );
}

#[test]
fn delete_requires_confirmation() {
    let (mut state, _, soup, _) = seeded();
    forms::open_edit_for(&mut state, &soup).expect("open edit");

    let mut asked = Vec::new();
    let mut decline = |message: &str| {
        asked.push(message.to_string());
        false
    };
    assert_eq!(
        forms::on_delete(&mut state, &mut decline, DEFAULT_DELETE_PROMPT),
        Err(BoardError::DeleteDeclined)
    );
    assert_eq!(asked, vec![DEFAULT_DELETE_PROMPT.to_string()]);
    assert!(state.contains(&soup));
    assert!(state.overlays().edit);

    let removed = forms::on_delete(&mut state, &mut FixedAnswer(true), DEFAULT_DELETE_PROMPT)
        .expect("confirmed delete");
    assert_eq!(removed.id, soup);
    assert!(!state.contains(&soup));
    assert!(BoardView::project(&state).find_card(&soup).is_none());
    assert!(!state.overlays().edit);
}

#[test]
fn delete_without_an_open_order_never_prompts() {
    let (mut state, _, _, _) = seeded();
    let mut prompted = false;
    let mut prompt = |_: &str| {
        prompted = true;
        true
    };
    assert_eq!(
        forms::on_delete(&mut state, &mut prompt, DEFAULT_DELETE_PROMPT),
        Err(BoardError::MissingField("id"))
    );
    assert!(!prompted);
    assert_eq!(state.len(), 2);
}

#[test]
fn drag_over_uses_nearest_area_on_the_path() {
    let (mut state, _, soup, _) = seeded();
    drag::on_drag_start(&mut state, &ElementData::card(soup.as_str())).expect("drag start");

    let path = vec![
        ElementData::card(soup.as_str()),
        ElementData::default(),
        ElementData::column(Column::Preparing),
        ElementData::column(Column::Served),
    ];
    assert_eq!(drag::on_drag_over(&mut state, &path), Ok(Column::Preparing));
    assert_eq!(state.dragging().over, Some(Column::Preparing));

    let view = BoardView::project(&state);
    assert!(view.column(Column::Preparing).map(|c| c.highlighted).unwrap_or(false));
    assert!(view.find_card(&soup).map(|(_, card)| card.dragging).unwrap_or(false));
}

#[test]
fn drag_over_without_tagged_column_leaves_over_unchanged() {
    let (mut state, _, soup, _) = seeded();
    drag::on_drag_start(&mut state, &ElementData::card(soup.as_str())).expect("drag start");
    drag::on_drag_over(&mut state, &[ElementData::column(Column::Served)]).expect("hover served");

    let path = vec![ElementData::card(soup.as_str()), ElementData::default()];
    assert_eq!(
        drag::on_drag_over(&mut state, &path),
        Err(BoardError::NoDropTarget)
    );
    assert_eq!(
        drag::on_drag_over(&mut state, &[ElementData::area("patio")]),
        Err(BoardError::UnknownColumn("patio".to_string()))
    );
    assert_eq!(state.dragging().over, Some(Column::Served));
}

#[test]
fn drag_end_without_drop_moves_nothing() {
    let (mut state, _, soup, _) = seeded();
    drag::on_drag_start(&mut state, &ElementData::card(soup.as_str())).expect("drag start");
    drag::on_drag_over(&mut state, &[ElementData::column(Column::Served)]).expect("hover");
    drag::on_drag_end(&mut state);

    assert_eq!(state.dragging(), &DraggingState::default());
    assert_eq!(state.order(&soup).map(|o| o.column), Some(Column::Ordered));
    let view = BoardView::project(&state);
    assert!(view.columns.iter().all(|c| !c.highlighted));
}

#[test]
fn drop_moves_dragged_order_into_hovered_column() {
    let (mut state, _, soup, steak) = seeded();
    drag::on_drag_start(&mut state, &ElementData::card(soup.as_str())).expect("drag start");
    drag::on_drag_over(&mut state, &[ElementData::column(Column::Preparing)]).expect("hover");

    assert_eq!(drag::on_drop(&mut state), Ok((soup.clone(), Column::Preparing)));
    drag::on_drag_end(&mut state);

    let view = BoardView::project(&state);
    assert_eq!(view.find_card(&soup).map(|(c, _)| c), Some(Column::Preparing));
    assert_eq!(view.find_card(&steak).map(|(c, _)| c), Some(Column::Ordered));
    assert!(!state.dragging().is_active());
}

#[test]
fn drop_without_source_or_target_is_rejected() {
    let (mut state, _, soup, _) = seeded();
    assert_eq!(drag::on_drop(&mut state), Err(BoardError::NoDragSource));

    drag::on_drag_start(&mut state, &ElementData::card(soup.as_str())).expect("drag start");
    assert_eq!(drag::on_drop(&mut state), Err(BoardError::NoDropTarget));

    assert_eq!(
        drag::on_drag_start(&mut state, &ElementData::default()),
        Err(BoardError::MissingField("data-id"))
    );
}

#[test]
fn dragging_patch_only_touches_given_fields() {
    let mut dragging = DraggingState {
        source: Some(OrderId::from("a")),
        over: Some(Column::Served),
    };
    dragging.apply(DraggingPatch {
        source: None,
        over: Some(None),
    });
    assert_eq!(dragging.source, Some(OrderId::from("a")));
    assert_eq!(dragging.over, None);
}

#[test]
fn help_toggle_moves_focus_in_and_out() {
    let mut state = BoardState::new();
    assert_eq!(*state.overlays(), Overlays::default());

    overlay::on_help_toggle(&mut state);
    assert!(state.overlays().help);
    assert_eq!(state.focus(), FocusTarget::HelpOverlay);

    overlay::on_help_toggle(&mut state);
    assert!(!state.overlays().help);
    assert_eq!(state.focus(), FocusTarget::AddTrigger);
}

#[test]
fn escape_closes_edit_then_add_then_help() {
    let (mut state, _, soup, _) = seeded();
    overlay::on_help_toggle(&mut state);
    forms::on_add_toggle(&mut state);
    forms::open_edit_for(&mut state, &soup).expect("open edit");

    assert_eq!(overlay::close_topmost(&mut state), Some(OverlayKind::Edit));
    assert_eq!(overlay::close_topmost(&mut state), Some(OverlayKind::Add));
    assert_eq!(overlay::close_topmost(&mut state), Some(OverlayKind::Help));
    assert_eq!(overlay::close_topmost(&mut state), None);
    assert!(!state.overlays().any_open());
}

#[test]
fn sequential_factory_issues_distinct_ids_a_minute_apart() {
    let (state, _, soup, steak) = seeded();
    assert_eq!(soup.as_str(), "order-1");
    assert_eq!(steak.as_str(), "order-2");
    let first = state.order(&soup).expect("soup").created;
    let second = state.order(&steak).expect("steak").created;
    assert_eq!((second - first).num_minutes(), 1);
}
