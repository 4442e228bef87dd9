use dropdown::render::render_overlay;
use dropdown::{
    AnchorFrame, Dropdown, DropdownConfig, LayoutMetrics, PressAction, Renderers, ScrollError,
    ViewportSize, VirtualList,
};
use dropdown_tui::node::hit_test;
use dropdown_tui::{Canvas, Node, Painter, TuiBackend};

fn numbers(n: usize) -> Option<Vec<String>> {
    Some((0..n).map(|i| format!("Item {}", i)).collect())
}

fn open(config: DropdownConfig, n: usize) -> Dropdown<String> {
    let mut dropdown = Dropdown::new(numbers(n), config);
    let ticket = dropdown.show().unwrap();
    dropdown.on_anchor_measured(ticket, Some(AnchorFrame::from_cells(0, 0, 12, 1)));
    dropdown
}

fn draw(dropdown: &Dropdown<String>, backend: &TuiBackend) -> (Canvas, Vec<dropdown_tui::Hit>) {
    let mut canvas = Canvas::new(40, 20);
    let viewport = ViewportSize::from_cells(40, 20);
    let renderers: Renderers<String, Node> = Renderers::new();
    let overlay = render_overlay(dropdown, backend, &renderers, viewport).unwrap();
    let mut painter = Painter::new(&mut canvas);
    painter.paint(&overlay, 0, 0, 40);
    let hits = painter.into_hits();
    (canvas, hits)
}

fn terminal() -> DropdownConfig {
    DropdownConfig::new().metrics(LayoutMetrics::terminal())
}

#[test]
fn test_scroll_before_layout_fails() {
    let mut backend = TuiBackend::new();
    assert_eq!(
        backend.scroll_to_index(3, false),
        Err(ScrollError::NotLaidOut { index: 3 })
    );
}

#[test]
fn test_scroll_after_layout() {
    let dropdown = open(terminal(), 10);
    let mut backend = TuiBackend::new();
    draw(&dropdown, &backend);
    assert!(backend.is_laid_out());

    backend.scroll_to_index(3, false).unwrap();
    assert_eq!(backend.offset(), 3);

    // Clamped so the window stays full.
    backend.scroll_to_index(9, false).unwrap();
    assert_eq!(backend.offset(), 5);

    assert_eq!(
        backend.scroll_to_index(10, false),
        Err(ScrollError::OutOfBounds { index: 10, len: 10 })
    );
}

#[test]
fn test_list_shows_window_from_offset() {
    let dropdown = open(terminal(), 10);
    let mut backend = TuiBackend::new();
    draw(&dropdown, &backend);
    backend.scroll_to_index(4, false).unwrap();

    let (canvas, _) = draw(&dropdown, &backend);
    assert_eq!(canvas.row_text(1), "Item 4");
    assert_eq!(canvas.row_text(5), "Item 8");
    assert_eq!(canvas.row_text(6), "");
}

#[test]
fn test_cursor_row_is_emphasised_and_kept_visible() {
    let dropdown = open(terminal(), 10);
    let backend = TuiBackend::new();
    backend.set_cursor(Some(7));

    let (canvas, _) = draw(&dropdown, &backend);
    assert_eq!(backend.offset(), 3);
    assert_eq!(canvas.row_text(5), "Item 7");
    assert!(canvas.get(0, 5).unwrap().style.reverse);
    assert!(!canvas.get(0, 4).unwrap().style.reverse);
}

#[test]
fn test_rows_and_backdrop_are_pressable() {
    let dropdown = open(terminal(), 3);
    let backend = TuiBackend::new();
    let (_, hits) = draw(&dropdown, &backend);

    assert_eq!(hit_test(&hits, 5, 2), Some(PressAction::Row(1)));
    assert_eq!(hit_test(&hits, 30, 2), Some(PressAction::Backdrop));
    assert_eq!(hit_test(&hits, 5, 10), Some(PressAction::Backdrop));
}

#[test]
fn test_separators_with_hairline_metrics() {
    let metrics = LayoutMetrics {
        row_height: 1.0,
        hairline_width: 1.0,
        visible_rows: 5,
    };
    let dropdown = open(DropdownConfig::new().metrics(metrics), 10);
    let backend = TuiBackend::new();
    let (canvas, _) = draw(&dropdown, &backend);
    assert_eq!(canvas.row_text(1), "Item 0");
    assert!(canvas.row_text(2).starts_with('─'));
    assert_eq!(canvas.row_text(3), "Item 1");
}

#[test]
fn test_hairline_rows_fill_overlay_height() {
    let metrics = LayoutMetrics {
        row_height: 1.0,
        hairline_width: 1.0,
        visible_rows: 5,
    };
    // Ten lines: a search header, then five rows with four separators
    let dropdown = open(DropdownConfig::new().metrics(metrics).show_search(), 10);
    let backend = TuiBackend::new();
    let (canvas, _) = draw(&dropdown, &backend);

    assert!(canvas.row_text(1).starts_with("/ "));
    assert_eq!(canvas.row_text(2), "Item 0");
    assert_eq!(canvas.row_text(10), "Item 4");
    assert!(canvas.row_text(9).starts_with('─'));
    assert_eq!(canvas.row_text(11), "");
}

#[test]
fn test_explicit_height_sets_row_count() {
    let dropdown = open(terminal().dropdown_height(3.0), 10);
    let backend = TuiBackend::new();
    let (canvas, _) = draw(&dropdown, &backend);
    assert_eq!(canvas.row_text(3), "Item 2");
    assert_eq!(canvas.row_text(4), "");
}

#[test]
fn test_reset_forgets_layout() {
    let dropdown = open(terminal(), 10);
    let backend = TuiBackend::new();
    backend.set_cursor(Some(2));
    draw(&dropdown, &backend);
    backend.reset();
    assert!(!backend.is_laid_out());
    assert_eq!(backend.cursor(), None);
    assert_eq!(backend.offset(), 0);
}
