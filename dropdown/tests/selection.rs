use dropdown::config::DEFAULT_VALUE;
use dropdown::{DropdownConfig, FilterMode, SelectionState};
use serde_json::{Value, json};

fn colors() -> Vec<String> {
    vec!["Red".to_string(), "Green".to_string(), "Blue".to_string()]
}

fn state(config: &DropdownConfig) -> SelectionState<String> {
    SelectionState::new(Some(colors()), config, None)
}

#[test]
fn test_starts_with_default_text() {
    let s = state(&DropdownConfig::new());
    assert_eq!(s.selected_index(), None);
    assert_eq!(s.display_text(), DEFAULT_VALUE);
    assert!(s.is_default());
}

#[test]
fn test_starts_with_default_index() {
    let s = state(&DropdownConfig::new().default_index(2));
    assert_eq!(s.selected_index(), Some(2));
    assert_eq!(s.display_text(), "Blue");
}

#[test]
fn test_select_sets_index_and_text() {
    let mut s = state(&DropdownConfig::new());
    s.select(Some(1), None);
    assert_eq!(s.selected_index(), Some(1));
    assert_eq!(s.display_text(), "Green");
}

#[test]
fn test_select_out_of_range_falls_back_to_default() {
    let mut s = state(&DropdownConfig::new());
    s.select(Some(1), None);
    s.select(Some(5), None);
    assert_eq!(s.selected_index(), None);
    assert_eq!(s.display_text(), DEFAULT_VALUE);
}

#[test]
fn test_select_out_of_range_uses_default_index() {
    let mut s = state(&DropdownConfig::new().default_index(0));
    s.select(Some(1), None);
    s.select(Some(3), None);
    assert_eq!(s.selected_index(), Some(0));
    assert_eq!(s.display_text(), "Red");
}

#[test]
fn test_select_none_falls_back_to_default() {
    let mut s = state(&DropdownConfig::new().default_value("Pick one"));
    s.select(Some(2), None);
    s.select(None, None);
    assert_eq!(s.selected_index(), None);
    assert_eq!(s.display_text(), "Pick one");
}

#[test]
fn test_invalid_default_index_clears_selection() {
    let mut s = state(&DropdownConfig::new().default_index(9));
    s.select(Some(7), None);
    assert_eq!(s.selected_index(), None);
    assert_eq!(s.display_text(), DEFAULT_VALUE);
}

#[test]
fn test_select_uses_formatter() {
    let mut s = state(&DropdownConfig::new());
    let upper = |c: &String| c.to_uppercase();
    s.select(Some(0), Some(&upper));
    assert_eq!(s.display_text(), "RED");
}

#[test]
fn test_filter_is_case_insensitive_substring() {
    let mut s = state(&DropdownConfig::new());
    s.filter("RE", None);
    let shown: Vec<&String> = s.displayed_options().collect();
    assert_eq!(shown, vec!["Red", "Green"]);
}

#[test]
fn test_filter_tracks_selected_row() {
    let mut s = state(&DropdownConfig::new());
    s.select(Some(1), None);
    s.filter("n", None);
    assert_eq!(s.displayed_len(), 1);
    assert_eq!(s.selected_index(), Some(0));
    assert_eq!(s.display_text(), "Green");
}

#[test]
fn test_filter_hiding_selection_clears_index_but_keeps_text() {
    let mut s = state(&DropdownConfig::new());
    s.select(Some(1), None);
    s.filter("blu", None);
    assert_eq!(s.selected_index(), None);
    assert_eq!(s.display_text(), "Green");
}

#[test]
fn test_empty_search_restores_all_options() {
    let mut s = state(&DropdownConfig::new());
    s.filter("xyz", None);
    assert_eq!(s.displayed_len(), 0);
    s.filter("", None);
    let shown: Vec<String> = s.displayed_options().cloned().collect();
    assert_eq!(shown, colors());
}

#[test]
fn test_filter_keyed_options_by_field() {
    let options = vec![
        json!({ "label": "Germany", "code": "de" }),
        json!({ "label": "Denmark", "code": "dk" }),
        json!({ "label": "France", "code": "fr" }),
    ];
    let mut s = SelectionState::new(Some(options), &DropdownConfig::new(), None);
    s.filter("  ger ", None);
    let shown: Vec<&Value> = s.displayed_options().collect();
    assert_eq!(shown, vec![&json!({ "label": "Germany", "code": "de" })]);
}

#[test]
fn test_filter_keyed_options_with_custom_key() {
    let options = vec![
        json!({ "label": "Germany", "code": "de" }),
        json!({ "label": "Denmark", "code": "dk" }),
        json!({ "name": "Nowhere" }),
    ];
    let config = DropdownConfig::new().key_search_object("code");
    let mut s = SelectionState::new(Some(options), &config, None);
    s.filter("D", None);
    assert_eq!(s.displayed_len(), 2);
    assert_eq!(s.source_index(1), Some(1));
}

#[test]
fn test_fuzzy_filter_mode() {
    let options = vec!["apple".to_string(), "banana".to_string(), "apricot".to_string()];
    let config = DropdownConfig::new().filter_mode(FilterMode::Fuzzy);
    let mut s = SelectionState::new(Some(options), &config, None);
    s.filter("apt", None);
    let shown: Vec<&String> = s.displayed_options().collect();
    assert_eq!(shown, vec!["apricot"]);
}

#[test]
fn test_replace_with_equal_options_is_noop() {
    let mut s = state(&DropdownConfig::new());
    assert!(!s.replace_options(Some(colors()), None));
}

#[test]
fn test_replace_options_follows_selected_text() {
    let mut s = state(&DropdownConfig::new());
    s.select(Some(1), None);
    let reordered = vec!["Blue".to_string(), "Yellow".to_string(), "Green".to_string()];
    assert!(s.replace_options(Some(reordered), None));
    assert_eq!(s.selected_index(), Some(2));
    assert_eq!(s.display_text(), "Green");
}

#[test]
fn test_replace_options_drops_vanished_selection() {
    let mut s = state(&DropdownConfig::new());
    s.select(Some(1), None);
    s.replace_options(Some(vec!["Cyan".to_string()]), None);
    assert_eq!(s.selected_index(), None);
    assert_eq!(s.display_text(), DEFAULT_VALUE);
}

#[test]
fn test_replace_options_reapplies_search() {
    let mut s = state(&DropdownConfig::new());
    s.filter("e", None);
    s.replace_options(Some(vec!["Teal".to_string(), "Pink".to_string()]), None);
    assert_eq!(s.displayed_len(), 1);
    assert_eq!(s.displayed_option(0).map(String::as_str), Some("Teal"));
}

#[test]
fn test_loading_until_options_arrive() {
    let config = DropdownConfig::new().default_index(1);
    let mut s: SelectionState<String> = SelectionState::new(None, &config, None);
    assert!(s.is_loading());
    assert_eq!(s.selected_index(), None);
    assert_eq!(s.display_text(), DEFAULT_VALUE);

    s.replace_options(Some(colors()), None);
    assert!(!s.is_loading());
    assert_eq!(s.selected_index(), Some(1));
    assert_eq!(s.display_text(), "Green");
}
