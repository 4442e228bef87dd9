//! Rendering through a host UI framework.
//!
//! The dropdown does not draw anything itself. A host implements
//! [`Backend`] for its element type, and optionally overrides individual
//! pieces (rows, button children, separator, search input, pressables)
//! through [`Renderers`].
//!
//! Presses are not closures: pressables carry a [`PressAction`] that the
//! host routes back to [`Dropdown::press_button`], [`Dropdown::choose_row`]
//! or [`Dropdown::request_close`] when the element is activated.

use crate::config::LayoutMetrics;
use crate::dropdown::Dropdown;
use crate::geometry::{OverlayRect, ViewportSize};
use crate::option::OptionItem;

/// What activating a pressable element does.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PressAction {
    /// Press on the dropdown button.
    Button,
    /// Press on a displayed row.
    Row(usize),
    /// Press on the backdrop outside the overlay.
    Backdrop,
}

/// Visual press feedback.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Feedback {
    /// Background highlight while pressed.
    Highlight,
    /// Ripple from the press point.
    Ripple,
}

impl Feedback {
    /// Platform convention for option rows.
    pub fn platform_default() -> Self {
        if cfg!(target_os = "android") {
            Feedback::Ripple
        } else {
            Feedback::Highlight
        }
    }
}

/// Properties passed to a pressable.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PressProps {
    pub key: String,
    pub disabled: bool,
    pub accessible: bool,
    /// The row is the selected one.
    pub highlighted: bool,
}

/// Wraps content in something that reacts to presses.
pub trait Pressable<E> {
    fn render_pressable(&self, children: E, on_press: PressAction, props: &PressProps) -> E;
}

impl<E, F> Pressable<E> for F
where
    F: Fn(E, PressAction, &PressProps) -> E,
{
    fn render_pressable(&self, children: E, on_press: PressAction, props: &PressProps) -> E {
        self(children, on_press, props)
    }
}

/// Role of a piece of text, for host styling.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextRole {
    /// Button text showing a selection.
    Button,
    /// Button text showing the default value.
    ButtonDefault,
    Row,
    /// Text of the selected row.
    RowHighlighted,
}

/// Layout of the scrollable option list.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ListLayout {
    pub len: usize,
    /// Height of the overlay the list fills, header included.
    pub height: f32,
    pub metrics: LayoutMetrics,
    pub scroll_enabled: bool,
    pub initial_scroll_index: Option<usize>,
}

/// Element constructors a host framework provides.
pub trait Backend {
    type Element;

    fn text(&self, content: &str, role: TextRole, max_lines: usize) -> Self::Element;

    /// Lay children out horizontally.
    fn row(&self, children: Vec<Self::Element>) -> Self::Element;

    /// Indicator next to the button text.
    fn right_component(&self, open: bool) -> Self::Element;

    fn separator(&self) -> Self::Element;

    fn loading_indicator(&self) -> Self::Element;

    fn search_input(&self, value: &str, placeholder: &str) -> Self::Element;

    /// Default pressable for a feedback style.
    fn pressable(&self, feedback: Feedback) -> Box<dyn Pressable<Self::Element> + '_>;

    /// A virtualized list. Implementations call `item` and `separator` only
    /// for the rows they actually show.
    fn list(
        &self,
        layout: ListLayout,
        header: Option<Self::Element>,
        item: &mut dyn FnMut(usize) -> Self::Element,
        separator: &mut dyn FnMut(usize) -> Self::Element,
    ) -> Self::Element;

    /// The floating overlay at an absolute rectangle.
    fn overlay(&self, rect: OverlayRect, content: Self::Element) -> Self::Element;
}

type RowRenderer<T, E> = Box<dyn Fn(&T, usize, bool) -> E>;

/// Custom renderers overriding the backend defaults.
pub struct Renderers<T, E> {
    row: Option<RowRenderer<T, E>>,
    button_children: Option<Box<dyn Fn(&str) -> E>>,
    right_component: Option<Box<dyn Fn(bool) -> E>>,
    separator: Option<Box<dyn Fn(usize) -> E>>,
    search: Option<Box<dyn Fn(&str) -> E>>,
    button_pressable: Option<Box<dyn Pressable<E>>>,
    row_pressable: Option<Box<dyn Pressable<E>>>,
}

impl<T, E> Default for Renderers<T, E> {
    fn default() -> Self {
        Self {
            row: None,
            button_children: None,
            right_component: None,
            separator: None,
            search: None,
            button_pressable: None,
            row_pressable: None,
        }
    }
}

impl<T, E> Renderers<T, E> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Render a row from `(option, index, highlighted)`.
    pub fn row(mut self, render: impl Fn(&T, usize, bool) -> E + 'static) -> Self {
        self.row = Some(Box::new(render));
        self
    }

    /// Replace the button content; receives the button text.
    pub fn button_children(mut self, render: impl Fn(&str) -> E + 'static) -> Self {
        self.button_children = Some(Box::new(render));
        self
    }

    /// Replace the indicator next to the button text; receives whether the overlay is open.
    pub fn right_component(mut self, render: impl Fn(bool) -> E + 'static) -> Self {
        self.right_component = Some(Box::new(render));
        self
    }

    /// Render the separator following a row.
    pub fn separator(mut self, render: impl Fn(usize) -> E + 'static) -> Self {
        self.separator = Some(Box::new(render));
        self
    }

    /// Replace the search input; receives the current search text.
    pub fn search(mut self, render: impl Fn(&str) -> E + 'static) -> Self {
        self.search = Some(Box::new(render));
        self
    }

    pub fn button_pressable(mut self, pressable: impl Pressable<E> + 'static) -> Self {
        self.button_pressable = Some(Box::new(pressable));
        self
    }

    pub fn row_pressable(mut self, pressable: impl Pressable<E> + 'static) -> Self {
        self.row_pressable = Some(Box::new(pressable));
        self
    }
}

/// Render the dropdown button.
pub fn render_button<T, B>(
    dropdown: &Dropdown<T>,
    backend: &B,
    renderers: &Renderers<T, B::Element>,
) -> B::Element
where
    T: OptionItem,
    B: Backend,
{
    let config = dropdown.config();
    let text = dropdown.display_text();

    let children = match &renderers.button_children {
        Some(render) => render(text),
        None => {
            let role = if dropdown.selection().is_default() {
                TextRole::ButtonDefault
            } else {
                TextRole::Button
            };
            let right = match &renderers.right_component {
                Some(render) => render(dropdown.is_open()),
                None => backend.right_component(dropdown.is_open()),
            };
            backend.row(vec![
                backend.text(text, role, config.number_of_lines),
                right,
            ])
        }
    };

    let props = PressProps {
        key: "button".to_string(),
        disabled: config.disabled,
        accessible: config.accessible,
        highlighted: false,
    };

    match &renderers.button_pressable {
        Some(pressable) => pressable.render_pressable(children, PressAction::Button, &props),
        None => backend
            .pressable(Feedback::Highlight)
            .render_pressable(children, PressAction::Button, &props),
    }
}

/// Render the overlay, or `None` while it is closed.
///
/// Shows a loading indicator until options are known, otherwise the
/// (optionally searchable) list.
pub fn render_overlay<T, B>(
    dropdown: &Dropdown<T>,
    backend: &B,
    renderers: &Renderers<T, B::Element>,
    viewport: ViewportSize,
) -> Option<B::Element>
where
    T: OptionItem,
    B: Backend,
{
    let placement = dropdown.placement(viewport)?;
    let anchor = dropdown.anchor()?;
    let rect = placement.resolve(viewport, anchor.width);
    let selection = dropdown.selection();
    let config = dropdown.config();

    log::trace!("render_overlay rect={:?} loading={}", rect, selection.is_loading());

    let content = if selection.is_loading() {
        backend.loading_indicator()
    } else {
        let header = config.show_search.then(|| match &renderers.search {
            Some(render) => render(selection.search_text()),
            None => backend.search_input(selection.search_text(), &config.search_placeholder),
        });

        let layout = ListLayout {
            len: selection.displayed_len(),
            height: rect.height,
            metrics: config.metrics,
            scroll_enabled: config.scroll_enabled,
            initial_scroll_index: dropdown.initial_scroll_index(),
        };

        let default_pressable;
        let row_pressable: &dyn Pressable<B::Element> = match &renderers.row_pressable {
            Some(pressable) => pressable.as_ref(),
            None => {
                default_pressable = backend.pressable(Feedback::platform_default());
                default_pressable.as_ref()
            }
        };

        let mut item = |index: usize| {
            let highlighted = selection.selected_index() == Some(index);
            let content = match selection.displayed_option(index) {
                Some(option) => match &renderers.row {
                    Some(render) => render(option, index, highlighted),
                    None => {
                        let role = if highlighted {
                            TextRole::RowHighlighted
                        } else {
                            TextRole::Row
                        };
                        backend.text(&dropdown.row_text(option), role, 1)
                    }
                },
                None => backend.text("", TextRole::Row, 1),
            };
            let props = PressProps {
                key: format!("row_{}", index),
                disabled: false,
                accessible: config.accessible,
                highlighted,
            };
            row_pressable.render_pressable(content, PressAction::Row(index), &props)
        };

        let mut separator = |index: usize| match &renderers.separator {
            Some(render) => render(index),
            None => backend.separator(),
        };

        backend.list(layout, header, &mut item, &mut separator)
    };

    Some(backend.overlay(rect, content))
}
