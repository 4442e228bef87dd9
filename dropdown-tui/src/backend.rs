//! [`Backend`] implementation producing [`Node`] trees.

use std::cell::Cell;

use crossterm::style::Color;
use dropdown::geometry::OverlayRect;
use dropdown::render::ListLayout;
use dropdown::{Backend, Feedback, PressAction, PressProps, Pressable, ScrollError, TextRole, VirtualList};

use crate::canvas::CellStyle;
use crate::node::Node;

/// Rows of the list as of the last layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct ListWindow {
    len: usize,
    rows: usize,
}

/// Terminal backend for the dropdown.
///
/// Besides building nodes, it owns the list's scroll offset and the keyboard
/// cursor, since both survive across frames while the overlay is open.
#[derive(Debug, Default)]
pub struct TuiBackend {
    cursor: Cell<Option<usize>>,
    offset: Cell<usize>,
    window: Cell<Option<ListWindow>>,
}

impl TuiBackend {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cursor(&self) -> Option<usize> {
        self.cursor.get()
    }

    pub fn set_cursor(&self, cursor: Option<usize>) {
        self.cursor.set(cursor);
    }

    /// First visible row.
    pub fn offset(&self) -> usize {
        self.offset.get()
    }

    /// Whether the list has been laid out since the overlay opened.
    pub fn is_laid_out(&self) -> bool {
        self.window.get().is_some()
    }

    /// Scroll by `delta` rows, e.g. for the mouse wheel.
    pub fn scroll_by(&self, delta: isize) {
        let Some(window) = self.window.get() else { return };
        let max = window.len.saturating_sub(window.rows);
        let offset = self.offset.get().saturating_add_signed(delta).min(max);
        self.offset.set(offset);
    }

    /// Forget list state when the overlay closes.
    pub fn reset(&self) {
        self.cursor.set(None);
        self.offset.set(0);
        self.window.set(None);
    }
}

/// Press feedback rendered as cell attributes on the cursor row.
struct TuiPressable {
    feedback: Feedback,
    cursor: Option<usize>,
}

impl Pressable<Node> for TuiPressable {
    fn render_pressable(&self, children: Node, on_press: PressAction, props: &PressProps) -> Node {
        let focused = matches!(on_press, PressAction::Row(row) if Some(row) == self.cursor);
        let emphasis = if props.disabled {
            Some(CellStyle::new().dim())
        } else if focused {
            Some(match self.feedback {
                Feedback::Highlight => CellStyle::new().reverse(),
                Feedback::Ripple => CellStyle::new().bold().underline(),
            })
        } else {
            None
        };

        Node::Press {
            action: on_press,
            disabled: props.disabled,
            emphasis,
            child: Box::new(children),
        }
    }
}

impl Backend for TuiBackend {
    type Element = Node;

    fn text(&self, content: &str, role: TextRole, max_lines: usize) -> Node {
        let style = match role {
            TextRole::Button | TextRole::Row => CellStyle::new(),
            TextRole::ButtonDefault => CellStyle::new().dim(),
            TextRole::RowHighlighted => CellStyle::new().bold().fg(Color::Cyan),
        };
        Node::Text {
            content: content.to_string(),
            style,
            max_lines,
        }
    }

    fn row(&self, children: Vec<Node>) -> Node {
        Node::Row(children)
    }

    fn right_component(&self, open: bool) -> Node {
        Node::text(if open { "▲" } else { "▼" }, CellStyle::new())
    }

    fn separator(&self) -> Node {
        Node::Rule
    }

    fn loading_indicator(&self) -> Node {
        Node::text("Loading…", CellStyle::new().dim())
    }

    fn search_input(&self, value: &str, placeholder: &str) -> Node {
        if value.is_empty() {
            Node::text(format!("/ {}", placeholder), CellStyle::new().dim())
        } else {
            Node::text(format!("/ {}▏", value), CellStyle::new().fg(Color::Yellow))
        }
    }

    fn pressable(&self, feedback: Feedback) -> Box<dyn Pressable<Node> + '_> {
        Box::new(TuiPressable {
            feedback,
            cursor: self.cursor.get(),
        })
    }

    fn list(
        &self,
        layout: ListLayout,
        header: Option<Node>,
        item: &mut dyn FnMut(usize) -> Node,
        separator: &mut dyn FnMut(usize) -> Node,
    ) -> Node {
        let metrics = layout.metrics;
        let separated = metrics.hairline_width >= 1.0;
        let header_lines = if header.is_some() { 1.0 } else { 0.0 };
        let lines = (layout.height - header_lines).max(0.0);
        // The last row has no separator below it.
        let rows = ((lines + metrics.hairline_width) / metrics.row_stride()).floor() as usize;
        let rows = rows.max(1);

        let max_offset = layout.len.saturating_sub(rows);
        let mut offset = if layout.scroll_enabled {
            self.offset.get().min(max_offset)
        } else {
            0
        };
        if layout.scroll_enabled
            && let Some(cursor) = self.cursor.get()
        {
            if cursor < offset {
                offset = cursor;
            } else if cursor >= offset + rows {
                offset = (cursor + 1 - rows).min(max_offset);
            }
        }
        self.offset.set(offset);
        self.window.set(Some(ListWindow {
            len: layout.len,
            rows,
        }));

        log::trace!(
            "TuiBackend::list len={} rows={} offset={}",
            layout.len,
            rows,
            offset
        );

        let mut children: Vec<Node> = header.into_iter().collect();
        let end = (offset + rows).min(layout.len);
        for index in offset..end {
            if separated && index > offset {
                children.push(separator(index - 1));
            }
            children.push(item(index));
        }
        Node::Column(children)
    }

    fn overlay(&self, rect: OverlayRect, content: Node) -> Node {
        Node::Overlay {
            rect,
            child: Box::new(content),
        }
    }
}

impl VirtualList for TuiBackend {
    fn scroll_to_index(&mut self, index: usize, _animated: bool) -> Result<(), ScrollError> {
        let Some(window) = self.window.get() else {
            return Err(ScrollError::NotLaidOut { index });
        };
        if index >= window.len {
            return Err(ScrollError::OutOfBounds {
                index,
                len: window.len,
            });
        }
        let offset = index.min(window.len.saturating_sub(window.rows));
        self.offset.set(offset);
        Ok(())
    }
}
