use std::cell::{Cell, RefCell};
use std::rc::Rc;

use dropdown::config::DEFAULT_VALUE;
use dropdown::{
    AnchorFrame, Dropdown, DropdownConfig, Hooks, Placement, Verdict, VerticalDirection,
    ViewportSize, Visibility,
};

fn colors() -> Option<Vec<String>> {
    Some(vec!["Red".to_string(), "Green".to_string(), "Blue".to_string()])
}

const BUTTON: AnchorFrame = AnchorFrame::new(10.0, 20.0, 100.0, 40.0);
const VIEWPORT: ViewportSize = ViewportSize::new(400.0, 800.0);

fn open(dropdown: &mut Dropdown<String>) {
    let ticket = dropdown.press_button().expect("press should request a measurement");
    assert!(dropdown.on_anchor_measured(ticket, Some(BUTTON)));
}

#[test]
fn test_show_waits_for_measurement() {
    let mut dropdown = Dropdown::new(colors(), DropdownConfig::new());
    let ticket = dropdown.show().unwrap();
    assert_eq!(
        dropdown.visibility(),
        Visibility::Measuring {
            ticket,
            previous: None
        }
    );
    assert!(!dropdown.is_open());
    assert_eq!(dropdown.placement(VIEWPORT), None);

    assert!(dropdown.on_anchor_measured(ticket, Some(BUTTON)));
    assert!(dropdown.is_open());
    assert_eq!(dropdown.anchor(), Some(BUTTON));
}

#[test]
fn test_only_one_measurement_outstanding() {
    let mut dropdown = Dropdown::new(colors(), DropdownConfig::new());
    assert!(dropdown.show().is_some());
    assert!(dropdown.show().is_none());
}

#[test]
fn test_unmeasurable_anchor_stays_closed() {
    let mut dropdown = Dropdown::new(colors(), DropdownConfig::new());
    let ticket = dropdown.show().unwrap();
    assert!(!dropdown.on_anchor_measured(ticket, None));
    assert_eq!(dropdown.visibility(), Visibility::Closed);
}

#[test]
fn test_reshow_while_open_with_unmeasurable_anchor_stays_open() {
    let mut dropdown = Dropdown::new(colors(), DropdownConfig::new());
    open(&mut dropdown);

    let ticket = dropdown.show().unwrap();
    // The overlay keeps its old position while the button is measured again
    assert!(dropdown.is_open());
    assert_eq!(dropdown.anchor(), Some(BUTTON));
    assert!(dropdown.placement(VIEWPORT).is_some());

    assert!(!dropdown.on_anchor_measured(ticket, None));
    assert_eq!(dropdown.visibility(), Visibility::Open { anchor: BUTTON });
}

#[test]
fn test_reshow_while_open_moves_to_new_anchor() {
    let mut dropdown = Dropdown::new(colors(), DropdownConfig::new());
    open(&mut dropdown);

    let moved = AnchorFrame::new(10.0, 700.0, 100.0, 40.0);
    let ticket = dropdown.show().unwrap();
    assert!(dropdown.on_anchor_measured(ticket, Some(moved)));
    assert_eq!(dropdown.anchor(), Some(moved));
    assert_eq!(
        dropdown.placement(VIEWPORT).map(|p| p.direction),
        Some(VerticalDirection::Up)
    );
}

#[test]
fn test_stale_ticket_is_ignored() {
    let mut dropdown = Dropdown::new(colors(), DropdownConfig::new());
    let first = dropdown.show().unwrap();
    dropdown.hide();
    let second = dropdown.show().unwrap();
    assert_ne!(first, second);

    assert!(!dropdown.on_anchor_measured(first, Some(BUTTON)));
    assert!(!dropdown.is_open());
    assert!(dropdown.on_anchor_measured(second, Some(BUTTON)));
    assert!(dropdown.is_open());
}

#[test]
fn test_hide_cancels_pending_measurement() {
    let mut dropdown = Dropdown::new(colors(), DropdownConfig::new());
    let ticket = dropdown.show().unwrap();
    dropdown.hide();
    assert!(!dropdown.on_anchor_measured(ticket, Some(BUTTON)));
    assert_eq!(dropdown.visibility(), Visibility::Closed);
}

#[test]
fn test_unmount_drops_pending_measurement() {
    let mut dropdown = Dropdown::new(colors(), DropdownConfig::new());
    let ticket = dropdown.show().unwrap();
    dropdown.unmount();
    assert!(!dropdown.on_anchor_measured(ticket, Some(BUTTON)));
    assert!(dropdown.show().is_none());
    assert!(!dropdown.is_mounted());
}

#[test]
fn test_disabled_button_ignores_press() {
    let mut dropdown = Dropdown::new(colors(), DropdownConfig::new().disabled());
    assert!(dropdown.press_button().is_none());
    // The imperative API still works.
    assert!(dropdown.show().is_some());
}

#[test]
fn test_will_show_veto_keeps_closed() {
    let hooks = Hooks::new().on_will_show(|| Verdict::Veto);
    let mut dropdown = Dropdown::with_hooks(colors(), DropdownConfig::new(), hooks);
    assert!(dropdown.press_button().is_none());
    assert_eq!(dropdown.visibility(), Visibility::Closed);
}

#[test]
fn test_will_show_default_verdict_opens() {
    let hooks = Hooks::new().on_will_show(|| Verdict::Default);
    let mut dropdown = Dropdown::with_hooks(colors(), DropdownConfig::new(), hooks);
    open(&mut dropdown);
    assert!(dropdown.is_open());
}

#[test]
fn test_request_close_respects_will_hide() {
    let allow = Rc::new(Cell::new(false));
    let hook_allow = allow.clone();
    let hooks = Hooks::new().on_will_hide(move || Verdict::from(hook_allow.get()));
    let mut dropdown = Dropdown::with_hooks(colors(), DropdownConfig::new(), hooks);
    open(&mut dropdown);

    assert!(!dropdown.request_close());
    assert!(dropdown.is_open());

    allow.set(true);
    assert!(dropdown.request_close());
    assert!(!dropdown.is_open());
}

#[test]
fn test_choose_row_selects_and_closes() {
    let mut dropdown = Dropdown::new(colors(), DropdownConfig::new());
    open(&mut dropdown);
    let choice = dropdown.choose_row(2);
    assert!(choice.applied);
    assert!(choice.closed);
    assert_eq!(dropdown.selected_index(), Some(2));
    assert_eq!(dropdown.display_text(), "Blue");
    assert!(!dropdown.is_open());
}

#[test]
fn test_choose_row_passes_index_and_option_to_on_select() {
    let seen = Rc::new(RefCell::new(Vec::new()));
    let record = seen.clone();
    let hooks = Hooks::new().on_select(move |index, option: &String| {
        record.borrow_mut().push((index, option.clone()));
        Verdict::Proceed
    });
    let mut dropdown = Dropdown::with_hooks(colors(), DropdownConfig::new(), hooks);
    open(&mut dropdown);
    dropdown.choose_row(1);
    assert_eq!(*seen.borrow(), vec![(1, "Green".to_string())]);
}

#[test]
fn test_on_select_veto_keeps_selection() {
    let hooks = Hooks::new().on_select(|_, _: &String| Verdict::Veto);
    let mut dropdown = Dropdown::with_hooks(colors(), DropdownConfig::new(), hooks);
    dropdown.select(Some(0));
    open(&mut dropdown);

    let choice = dropdown.choose_row(2);
    assert!(!choice.applied);
    assert_eq!(dropdown.selected_index(), Some(0));
    assert_eq!(dropdown.display_text(), "Red");
    // Vetoing the selection does not veto the close.
    assert!(choice.closed);
}

#[test]
fn test_multiple_select_stays_open() {
    let mut dropdown = Dropdown::new(colors(), DropdownConfig::new().multiple_select());
    open(&mut dropdown);
    let choice = dropdown.choose_row(0);
    assert!(choice.applied);
    assert!(!choice.closed);
    assert!(dropdown.is_open());
    dropdown.choose_row(1);
    assert_eq!(dropdown.display_text(), "Green");
}

#[test]
fn test_will_hide_veto_after_choice_keeps_open() {
    let hooks = Hooks::new().on_will_hide(|| Verdict::Veto);
    let mut dropdown = Dropdown::with_hooks(colors(), DropdownConfig::new(), hooks);
    open(&mut dropdown);
    let choice = dropdown.choose_row(1);
    assert!(choice.applied);
    assert!(!choice.closed);
    assert!(dropdown.is_open());
}

#[test]
fn test_choose_row_while_closed_does_not_request_close() {
    let hidden = Rc::new(Cell::new(0));
    let count = hidden.clone();
    let hooks = Hooks::new().on_will_hide(move || {
        count.set(count.get() + 1);
        Verdict::Proceed
    });
    let mut dropdown = Dropdown::with_hooks(colors(), DropdownConfig::new(), hooks);

    let choice = dropdown.choose_row(1);
    assert!(choice.applied);
    assert!(!choice.closed);
    assert_eq!(hidden.get(), 0);
    assert_eq!(dropdown.display_text(), "Green");
}

#[test]
fn test_choose_missing_row_is_ignored() {
    let mut dropdown = Dropdown::new(colors(), DropdownConfig::new());
    open(&mut dropdown);
    let choice = dropdown.choose_row(7);
    assert!(!choice.applied);
    assert!(!choice.closed);
    assert!(dropdown.is_open());
}

#[test]
fn test_button_text_formatter() {
    let hooks = Hooks::new().button_text(|c: &String| format!("Colour: {}", c));
    let mut dropdown = Dropdown::with_hooks(colors(), DropdownConfig::new(), hooks);
    dropdown.select(Some(1));
    assert_eq!(dropdown.display_text(), "Colour: Green");
}

#[test]
fn test_row_text_formatter() {
    let hooks = Hooks::new().row_text(|c: &String| c.to_lowercase());
    let dropdown = Dropdown::with_hooks(colors(), DropdownConfig::new(), hooks);
    assert_eq!(dropdown.row_text(&"Blue".to_string()), "blue");
}

#[test]
fn test_select_out_of_range_uses_default_text() {
    let mut dropdown = Dropdown::new(colors(), DropdownConfig::new());
    dropdown.select(Some(1));
    dropdown.select(Some(5));
    assert_eq!(dropdown.selected_index(), None);
    assert_eq!(dropdown.display_text(), DEFAULT_VALUE);
}

#[test]
fn test_placement_uses_configured_height() {
    let config = DropdownConfig::new().dropdown_height(165.0);
    let mut dropdown = Dropdown::new(colors(), config);
    let ticket = dropdown.show().unwrap();
    dropdown.on_anchor_measured(ticket, Some(AnchorFrame::new(10.0, 700.0, 100.0, 40.0)));

    let placement = dropdown.placement(VIEWPORT).unwrap();
    assert_eq!(placement.direction, VerticalDirection::Up);
    assert_eq!(placement.top, 535.0);
    assert_eq!(placement.height, 165.0);
}

#[test]
fn test_placement_right_aligned_uses_button_width() {
    let config = DropdownConfig::new().button_width(120.0);
    let mut dropdown = Dropdown::new(colors(), config);
    let ticket = dropdown.show().unwrap();
    dropdown.on_anchor_measured(ticket, Some(AnchorFrame::new(300.0, 50.0, 80.0, 40.0)));

    let placement = dropdown.placement(VIEWPORT).unwrap();
    assert_eq!(placement.right, Some(20.0));
    assert_eq!(placement.width, Some(120.0));
}

#[test]
fn test_adjust_frame_hook() {
    let hooks = Hooks::new().adjust_frame(|p: Placement| Placement { top: p.top + 5.0, ..p });
    let mut dropdown = Dropdown::with_hooks(colors(), DropdownConfig::new(), hooks);
    open(&mut dropdown);
    let placement = dropdown.placement(VIEWPORT).unwrap();
    assert_eq!(placement.top, BUTTON.bottom() + 5.0);
}

#[test]
fn test_search_then_choose_uses_filtered_row() {
    let mut dropdown = Dropdown::new(colors(), DropdownConfig::new().show_search());
    open(&mut dropdown);
    dropdown.set_search_text("bl");
    dropdown.choose_row(0);
    assert_eq!(dropdown.display_text(), "Blue");
    assert_eq!(dropdown.selected_index(), Some(0));
}

#[test]
fn test_initial_scroll_index_follows_selection() {
    let mut dropdown = Dropdown::new(colors(), DropdownConfig::new());
    dropdown.select(Some(2));
    assert_eq!(dropdown.initial_scroll_index(), Some(2));

    let mut unsaved = Dropdown::new(colors(), DropdownConfig::new().save_scroll_position(false));
    unsaved.select(Some(2));
    assert_eq!(unsaved.initial_scroll_index(), None);
}

#[test]
fn test_set_options_leaves_loading() {
    let mut dropdown: Dropdown<String> = Dropdown::new(None, DropdownConfig::new());
    assert!(dropdown.selection().is_loading());
    assert!(dropdown.set_options(colors()));
    assert!(!dropdown.selection().is_loading());
    assert_eq!(dropdown.selection().displayed_len(), 3);
}
