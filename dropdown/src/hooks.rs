//! Callback hooks a host can attach to a dropdown.

use std::fmt;

use crate::placement::{AdjustFrame, Placement};

/// Answer of a hook that can cancel a pending transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Verdict {
    /// Go ahead.
    Proceed,
    /// Cancel the transition.
    Veto,
    /// No opinion; the widget does what it would do without the hook.
    #[default]
    Default,
}

impl Verdict {
    /// Whether the transition goes ahead. Only an explicit veto stops it.
    pub fn allows(self) -> bool {
        !matches!(self, Verdict::Veto)
    }
}

impl From<bool> for Verdict {
    fn from(proceed: bool) -> Self {
        if proceed {
            Verdict::Proceed
        } else {
            Verdict::Veto
        }
    }
}

impl From<Option<bool>> for Verdict {
    fn from(answer: Option<bool>) -> Self {
        answer.map_or(Verdict::Default, Verdict::from)
    }
}

type WillChangeHook = Box<dyn FnMut() -> Verdict>;
type SelectHook<T> = Box<dyn FnMut(usize, &T) -> Verdict>;
type TextFormatter<T> = Box<dyn Fn(&T) -> String>;

/// Optional callbacks, all absent by default.
pub struct Hooks<T> {
    pub(crate) on_will_show: Option<WillChangeHook>,
    pub(crate) on_will_hide: Option<WillChangeHook>,
    pub(crate) on_select: Option<SelectHook<T>>,
    pub(crate) adjust_frame: Option<Box<AdjustFrame>>,
    pub(crate) button_text: Option<TextFormatter<T>>,
    pub(crate) row_text: Option<TextFormatter<T>>,
}

impl<T> Default for Hooks<T> {
    fn default() -> Self {
        Self {
            on_will_show: None,
            on_will_hide: None,
            on_select: None,
            adjust_frame: None,
            button_text: None,
            row_text: None,
        }
    }
}

impl<T> Hooks<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Called before the overlay opens; a veto keeps it closed.
    pub fn on_will_show(mut self, hook: impl FnMut() -> Verdict + 'static) -> Self {
        self.on_will_show = Some(Box::new(hook));
        self
    }

    /// Called before a user-initiated close; a veto keeps the overlay open.
    pub fn on_will_hide(mut self, hook: impl FnMut() -> Verdict + 'static) -> Self {
        self.on_will_hide = Some(Box::new(hook));
        self
    }

    /// Called with the row index and option when a row is chosen; a veto
    /// keeps the previous selection.
    pub fn on_select(mut self, hook: impl FnMut(usize, &T) -> Verdict + 'static) -> Self {
        self.on_select = Some(Box::new(hook));
        self
    }

    /// Final override of the computed overlay placement.
    pub fn adjust_frame(mut self, hook: impl Fn(Placement) -> Placement + 'static) -> Self {
        self.adjust_frame = Some(Box::new(hook));
        self
    }

    /// Formats the selected option for the button.
    pub fn button_text(mut self, formatter: impl Fn(&T) -> String + 'static) -> Self {
        self.button_text = Some(Box::new(formatter));
        self
    }

    /// Formats an option for its row in the list.
    pub fn row_text(mut self, formatter: impl Fn(&T) -> String + 'static) -> Self {
        self.row_text = Some(Box::new(formatter));
        self
    }

    pub(crate) fn will_show(&mut self) -> Verdict {
        self.on_will_show.as_mut().map_or(Verdict::Default, |hook| hook())
    }

    pub(crate) fn will_hide(&mut self) -> Verdict {
        self.on_will_hide.as_mut().map_or(Verdict::Default, |hook| hook())
    }

    pub(crate) fn select(&mut self, index: usize, option: &T) -> Verdict {
        self.on_select
            .as_mut()
            .map_or(Verdict::Default, |hook| hook(index, option))
    }
}

impl<T> fmt::Debug for Hooks<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Hooks")
            .field("on_will_show", &self.on_will_show.is_some())
            .field("on_will_hide", &self.on_will_hide.is_some())
            .field("on_select", &self.on_select.is_some())
            .field("adjust_frame", &self.adjust_frame.is_some())
            .field("button_text", &self.button_text.is_some())
            .field("row_text", &self.row_text.is_some())
            .finish()
    }
}
