//! Selection bookkeeping: selected row, button text and search filtering.

use crate::config::DropdownConfig;
use crate::filter::{FilterMode, filter_indices};
use crate::option::OptionItem;

/// Formats an option for the button.
pub type Formatter<'a, T> = Option<&'a dyn Fn(&T) -> String>;

/// Selection state of a dropdown.
///
/// `selected_index` points into the displayed (possibly filtered) options.
/// It is `None` when nothing is selected, in which case the button shows the
/// configured default text.
#[derive(Debug, Clone)]
pub struct SelectionState<T> {
    selected_index: Option<usize>,
    display_text: String,
    /// Source options; `None` while they are still loading.
    options: Option<Vec<T>>,
    /// Indices into `options` that pass the current search.
    displayed: Vec<usize>,
    search_text: String,
    default_index: Option<usize>,
    default_value: String,
    key_field: String,
    filter_mode: FilterMode,
}

impl<T: OptionItem> SelectionState<T> {
    /// Create the state and apply the configured default selection.
    pub fn new(options: Option<Vec<T>>, config: &DropdownConfig, formatter: Formatter<'_, T>) -> Self {
        let displayed = options
            .as_ref()
            .map(|o| (0..o.len()).collect())
            .unwrap_or_default();

        let mut state = Self {
            selected_index: None,
            display_text: config.default_value.clone(),
            options,
            displayed,
            search_text: String::new(),
            default_index: config.default_index,
            default_value: config.default_value.clone(),
            key_field: config.key_search_object.clone(),
            filter_mode: config.filter_mode,
        };
        state.select(None, formatter);
        state
    }

    pub fn selected_index(&self) -> Option<usize> {
        self.selected_index
    }

    pub fn display_text(&self) -> &str {
        &self.display_text
    }

    /// True when the button shows the default text.
    pub fn is_default(&self) -> bool {
        self.selected_index.is_none()
    }

    pub fn search_text(&self) -> &str {
        &self.search_text
    }

    pub fn is_loading(&self) -> bool {
        self.options.is_none()
    }

    /// The unfiltered options.
    pub fn options(&self) -> Option<&[T]> {
        self.options.as_deref()
    }

    /// Number of options currently displayed.
    pub fn displayed_len(&self) -> usize {
        self.displayed.len()
    }

    /// Option at a displayed row.
    pub fn displayed_option(&self, row: usize) -> Option<&T> {
        let source = *self.displayed.get(row)?;
        self.options.as_ref()?.get(source)
    }

    /// Displayed options in row order.
    pub fn displayed_options(&self) -> impl Iterator<Item = &T> + '_ {
        self.displayed
            .iter()
            .filter_map(|&i| self.options.as_ref().and_then(|o| o.get(i)))
    }

    /// Index in the source list of a displayed row.
    pub fn source_index(&self, row: usize) -> Option<usize> {
        self.displayed.get(row).copied()
    }

    /// Select a displayed row.
    ///
    /// `None` or an index past the end falls back to the default index. If
    /// that does not name a row either, the selection is cleared and the
    /// button shows the default text.
    pub fn select(&mut self, index: Option<usize>, formatter: Formatter<'_, T>) {
        let count = self.displayed.len();
        let index = match index {
            Some(i) if i < count => Some(i),
            _ => self.default_index,
        };

        let text = index
            .and_then(|i| self.displayed_option(i))
            .map(|option| format_option(option, formatter));

        match text {
            Some(text) => {
                self.selected_index = index;
                self.display_text = text;
            }
            None => {
                self.selected_index = None;
                self.display_text = self.default_value.clone();
            }
        }

        log::debug!(
            "SelectionState::select index={:?} text={:?}",
            self.selected_index,
            self.display_text
        );
    }

    /// Commit a chosen row. Rows outside the displayed list are ignored.
    pub(crate) fn commit(&mut self, row: usize, formatter: Formatter<'_, T>) -> bool {
        let Some(option) = self.displayed_option(row) else {
            return false;
        };
        self.display_text = format_option(option, formatter);
        self.selected_index = Some(row);
        true
    }

    /// Filter the displayed options by `search_text`.
    ///
    /// The selected index becomes the row showing the current button text,
    /// or `None` when the filter hides it. The button text is kept.
    pub fn filter(&mut self, search_text: &str, formatter: Formatter<'_, T>) {
        self.search_text = search_text.to_string();
        self.refilter();
        self.selected_index = self.row_of_display_text(formatter);

        log::debug!(
            "SelectionState::filter query={:?} shown={} selected={:?}",
            self.search_text,
            self.displayed.len(),
            self.selected_index
        );
    }

    /// Replace the source options.
    ///
    /// Returns `false` if `options` equals the current list. Otherwise the
    /// active search is re-applied and the selection re-derived: a selection
    /// whose text still names a source option follows it to its new row;
    /// one that no longer exists falls back to the default selection.
    pub fn replace_options(&mut self, options: Option<Vec<T>>, formatter: Formatter<'_, T>) -> bool {
        if options == self.options {
            return false;
        }

        let had_selection = self.selected_index.is_some() || self.text_in_source(formatter);
        self.options = options;
        self.refilter();

        if had_selection && self.text_in_source(formatter) {
            self.selected_index = self.row_of_display_text(formatter);
        } else {
            self.select(None, formatter);
        }

        log::debug!(
            "SelectionState::replace_options len={:?} selected={:?}",
            self.options.as_ref().map(Vec::len),
            self.selected_index
        );
        true
    }

    fn refilter(&mut self) {
        self.displayed = match &self.options {
            Some(options) => {
                filter_indices(options, &self.search_text, &self.key_field, self.filter_mode)
            }
            None => Vec::new(),
        };
    }

    /// Whether the button text names an option, ignoring the filter.
    ///
    /// The default text only counts when something is actually selected.
    fn text_in_source(&self, formatter: Formatter<'_, T>) -> bool {
        if self.selected_index.is_none() && self.display_text == self.default_value {
            return false;
        }
        self.options.as_ref().is_some_and(|options| {
            options
                .iter()
                .any(|option| format_option(option, formatter) == self.display_text)
        })
    }

    fn row_of_display_text(&self, formatter: Formatter<'_, T>) -> Option<usize> {
        self.displayed_options()
            .position(|option| format_option(option, formatter) == self.display_text)
    }
}

/// Format with the caller's formatter, falling back to the option label.
pub fn format_option<T: OptionItem>(option: &T, formatter: Formatter<'_, T>) -> String {
    match formatter {
        Some(format) => format(option),
        None => option.label().into_owned(),
    }
}
