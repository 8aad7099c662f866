use dropdown::SelectionMismatch;
use dropdown::widget::{ChoiceItem, resolve, resolve_label};

fn numbers() -> Vec<ChoiceItem<i32>> {
    vec![ChoiceItem::new(1, "One"), ChoiceItem::new(2, "Two")]
}

// ============================================================================
// resolve_label
// ============================================================================

#[test]
fn test_resolve_label_matching_value() {
    assert_eq!(resolve_label(&numbers(), Some(&2)), "Two");
}

#[test]
fn test_resolve_label_no_match_is_blank() {
    assert_eq!(resolve_label(&numbers(), Some(&7)), "");
}

#[test]
fn test_resolve_label_no_value_is_blank() {
    assert_eq!(resolve_label(&numbers(), None), "");
}

#[test]
fn test_resolve_label_empty_items() {
    let items: Vec<ChoiceItem<i32>> = Vec::new();
    assert_eq!(resolve_label(&items, Some(&1)), "");
}

#[test]
fn test_resolve_label_first_match_wins() {
    let items = vec![
        ChoiceItem::new("a", "First"),
        ChoiceItem::new("b", "Other"),
        ChoiceItem::new("a", "Second"),
    ];
    assert_eq!(resolve_label(&items, Some(&"a")), "First");
}

#[test]
fn test_resolve_label_is_pure() {
    let items = numbers();
    let snapshot = items.clone();
    let first = resolve_label(&items, Some(&1)).to_string();
    let second = resolve_label(&items, Some(&1)).to_string();
    assert_eq!(first, second);
    assert_eq!(items, snapshot);
}

#[test]
fn test_resolve_label_falls_back_to_primary_text() {
    let items = vec![ChoiceItem::new(1, "").primary_text("Every Night")];
    assert_eq!(resolve_label(&items, Some(&1)), "Every Night");
}

#[test]
fn test_resolve_label_prefers_label_over_primary_text() {
    let items = vec![ChoiceItem::new(1, "Nightly").primary_text("Every Night")];
    assert_eq!(resolve_label(&items, Some(&1)), "Nightly");
    assert_eq!(items[0].list_text(), "Every Night");
}

#[test]
fn test_resolve_label_disabled_item_still_labels() {
    let items = vec![ChoiceItem::new(1, "Locked").disabled()];
    assert_eq!(resolve_label(&items, Some(&1)), "Locked");
}

// ============================================================================
// resolve
// ============================================================================

#[test]
fn test_resolve_single_match() {
    let items = numbers();
    let resolution = resolve(&items, Some(&1));
    assert_eq!(resolution.index, Some(0));
    assert_eq!(resolution.label, "One");
    assert_eq!(resolution.mismatch, None);
}

#[test]
fn test_resolve_reports_no_match() {
    let items = numbers();
    let resolution = resolve(&items, Some(&9));
    assert_eq!(resolution.index, None);
    assert_eq!(resolution.label, "");
    assert_eq!(resolution.mismatch, Some(SelectionMismatch::NoMatch { items: 2 }));
}

#[test]
fn test_resolve_reports_ambiguous_match() {
    let items = vec![
        ChoiceItem::new(5, "Five"),
        ChoiceItem::new(5, "Cinq"),
        ChoiceItem::new(5, "Fünf"),
    ];
    let resolution = resolve(&items, Some(&5));
    assert_eq!(resolution.index, Some(0));
    assert_eq!(resolution.label, "Five");
    assert_eq!(
        resolution.mismatch,
        Some(SelectionMismatch::Ambiguous { count: 3, first: 0 })
    );
}

#[test]
fn test_resolve_nothing_selected_is_not_a_mismatch() {
    let items = numbers();
    assert_eq!(resolve(&items, None).mismatch, None);
}

#[test]
fn test_resolve_label_agrees_with_resolve() {
    let items = vec![
        ChoiceItem::new(1, "One"),
        ChoiceItem::new(2, "").primary_text("Two"),
        ChoiceItem::new(1, "Uno"),
    ];
    for value in [None, Some(&1), Some(&2), Some(&9)] {
        assert_eq!(resolve_label(&items, value), resolve(&items, value).label, "{value:?}");
    }
    assert_eq!(resolve_label(&items, Some(&2)), "Two");
}

#[test]
fn test_mismatch_display() {
    let no_match = SelectionMismatch::NoMatch { items: 4 };
    assert!(no_match.to_string().contains("none of the 4 items"));

    let ambiguous = SelectionMismatch::Ambiguous { count: 2, first: 1 };
    assert!(ambiguous.to_string().contains("matches 2 items"));
}

#[test]
fn test_choice_item_from_str() {
    let item: ChoiceItem<String> = "Weekly".into();
    assert_eq!(item.value, "Weekly");
    assert_eq!(item.label, "Weekly");
}
