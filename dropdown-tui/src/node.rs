//! Element tree produced by [`TuiBackend`](crate::backend::TuiBackend) and
//! painted into a [`Canvas`].
//!
//! Layout is deliberately small: text, horizontal and vertical stacks, a
//! full-width rule and one absolutely positioned overlay.

use dropdown::PressAction;
use dropdown::geometry::OverlayRect;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use crate::canvas::{Canvas, CellRect, CellStyle};

#[derive(Debug, Clone, PartialEq)]
pub enum Node {
    Empty,
    Text {
        content: String,
        style: CellStyle,
        max_lines: usize,
    },
    /// First child at the left edge, the rest packed against the right edge.
    Row(Vec<Node>),
    Column(Vec<Node>),
    /// Horizontal line across the available width.
    Rule,
    /// A pressable region spanning the available width.
    Press {
        action: PressAction,
        disabled: bool,
        /// Layered over the child, e.g. for the cursor row.
        emphasis: Option<CellStyle>,
        child: Box<Node>,
    },
    /// Floating content at an absolute rectangle, above a screen-wide backdrop.
    Overlay { rect: OverlayRect, child: Box<Node> },
}

impl Node {
    pub fn text(content: impl Into<String>, style: CellStyle) -> Self {
        Node::Text {
            content: content.into(),
            style,
            max_lines: 1,
        }
    }
}

/// A pressable region recorded while painting.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Hit {
    pub rect: CellRect,
    pub action: PressAction,
}

/// Topmost hit containing `(x, y)`.
pub fn hit_test(hits: &[Hit], x: u16, y: u16) -> Option<PressAction> {
    hits.iter()
        .rev()
        .find(|hit| hit.rect.contains(x, y))
        .map(|hit| hit.action)
}

/// Paints nodes into a canvas and records their hit regions in paint order.
pub struct Painter<'a> {
    canvas: &'a mut Canvas,
    clip: CellRect,
    hits: Vec<Hit>,
}

impl<'a> Painter<'a> {
    pub fn new(canvas: &'a mut Canvas) -> Self {
        let clip = canvas.area();
        Self {
            canvas,
            clip,
            hits: Vec::new(),
        }
    }

    pub fn into_hits(self) -> Vec<Hit> {
        self.hits
    }

    /// Paint `node` with its top-left corner at `(x, y)` in at most `width`
    /// columns. Returns the `(width, height)` it used.
    pub fn paint(&mut self, node: &Node, x: u16, y: u16, width: u16) -> (u16, u16) {
        match node {
            Node::Empty => (0, 0),
            Node::Text {
                content,
                style,
                max_lines,
            } => {
                let lines = wrap(content, width as usize, (*max_lines).max(1));
                let mut used = 0;
                for (i, line) in lines.iter().enumerate() {
                    let cols = self.canvas.put_str(x, y + i as u16, line, *style, self.clip);
                    used = used.max(cols);
                }
                (used, lines.len() as u16)
            }
            Node::Row(children) => self.paint_row(children, x, y, width),
            Node::Column(children) => {
                let mut height = 0;
                let mut used = 0;
                for child in children {
                    let (w, h) = self.paint(child, x, y + height, width);
                    used = used.max(w);
                    height += h;
                }
                (used, height)
            }
            Node::Rule => {
                let line = "─".repeat(width as usize);
                self.canvas.put_str(x, y, &line, CellStyle::new().dim(), self.clip);
                (width, 1)
            }
            Node::Press {
                action,
                disabled,
                emphasis,
                child,
            } => {
                let (_, height) = self.paint(child, x, y, width);
                let rect = CellRect::new(x, y, width, height.max(1)).intersect(self.clip);
                if let Some(style) = emphasis {
                    self.canvas.apply_style(rect, *style);
                }
                if !disabled {
                    self.hits.push(Hit {
                        rect,
                        action: *action,
                    });
                }
                (width, height)
            }
            Node::Overlay { rect, child } => {
                self.hits.push(Hit {
                    rect: self.canvas.area(),
                    action: PressAction::Backdrop,
                });

                let (x, y, w, h) = rect.to_cells();
                let area = CellRect::new(x, y, w, h).intersect(self.canvas.area());
                self.canvas.fill(area, CellStyle::new());

                let outer = std::mem::replace(&mut self.clip, area);
                self.paint(child, x, y, w);
                self.clip = outer;
                (area.width, area.height)
            }
        }
    }

    fn paint_row(&mut self, children: &[Node], x: u16, y: u16, width: u16) -> (u16, u16) {
        let Some((first, rest)) = children.split_first() else {
            return (0, 0);
        };

        let trailing: u16 = rest.iter().map(|child| measure(child).0 + 1).sum();
        let (first_width, mut height) = self.paint(first, x, y, width.saturating_sub(trailing));

        let mut col = x.saturating_add(width).saturating_sub(trailing).max(x + first_width);
        for child in rest {
            col += 1;
            let (w, h) = self.paint(child, col, y, measure(child).0);
            col += w;
            height = height.max(h);
        }
        (width.max(col - x), height)
    }
}

/// Natural single-line size of a node.
fn measure(node: &Node) -> (u16, u16) {
    match node {
        Node::Text { content, .. } => (content.width() as u16, 1),
        Node::Row(children) => {
            let width: u16 = children.iter().map(|c| measure(c).0).sum();
            (width + children.len().saturating_sub(1) as u16, 1)
        }
        Node::Column(children) => children.iter().fold((0, 0), |(w, h), c| {
            let (cw, ch) = measure(c);
            (w.max(cw), h + ch)
        }),
        Node::Press { child, .. } => measure(child),
        Node::Rule | Node::Empty | Node::Overlay { .. } => (0, 0),
    }
}

/// Break `text` into at most `max_lines` lines of `width` columns. The last
/// line is cut with an ellipsis when text remains.
pub fn wrap(text: &str, width: usize, max_lines: usize) -> Vec<String> {
    if width == 0 {
        return vec![String::new()];
    }

    let mut lines = Vec::new();
    let mut current = String::new();
    let mut current_width = 0;
    for ch in text.chars() {
        let w = ch.width().unwrap_or(0);
        if current_width + w > width {
            if lines.len() + 1 == max_lines {
                return finish_truncated(lines, current, width);
            }
            lines.push(std::mem::take(&mut current));
            current_width = 0;
        }
        current.push(ch);
        current_width += w;
    }

    lines.push(current);
    lines
}

fn finish_truncated(mut lines: Vec<String>, mut last: String, width: usize) -> Vec<String> {
    while last.width() + 1 > width {
        if last.pop().is_none() {
            break;
        }
    }
    last.push('…');
    lines.push(last);
    lines
}
