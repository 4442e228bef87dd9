//! Dropdown configuration types.

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::filter::FilterMode;
use crate::geometry::OverlaySize;

/// Text shown on the button while nothing is selected.
pub const DEFAULT_VALUE: &str = "Please select...";

/// Placeholder of the default search input.
pub const DEFAULT_SEARCH_PLACEHOLDER: &str = "Search";

/// Field matched by the search filter on keyed options.
pub const DEFAULT_SEARCH_KEY: &str = "label";

/// Row and border metrics used to size the overlay and the list.
///
/// Passed explicitly into placement and list layout rather than read from
/// globals, so hosts with different units (points, terminal cells) can
/// supply their own.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LayoutMetrics {
    /// Height of a single option row.
    pub row_height: f32,
    /// Thickness of the separator drawn between rows and of the overlay border.
    pub hairline_width: f32,
    /// Rows visible at once before the list scrolls.
    pub visible_rows: usize,
}

impl Default for LayoutMetrics {
    fn default() -> Self {
        Self {
            row_height: 33.0,
            hairline_width: 1.0,
            visible_rows: 5,
        }
    }
}

impl LayoutMetrics {
    /// Metrics for a terminal host: one cell per row, no separator rows.
    pub const fn terminal() -> Self {
        Self {
            row_height: 1.0,
            hairline_width: 0.0,
            visible_rows: 5,
        }
    }

    /// Distance between the tops of two consecutive rows.
    pub fn row_stride(&self) -> f32 {
        self.row_height + self.hairline_width
    }

    /// Offset of the row at `index` from the top of the list.
    pub fn offset_of(&self, index: usize) -> f32 {
        self.row_stride() * index as f32
    }

    /// Default overlay height: a fixed number of rows with separators.
    pub fn overlay_height(&self) -> f32 {
        self.row_stride() * self.visible_rows as f32
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.visible_rows == 0 {
            return Err(ConfigError::ZeroVisibleRows);
        }
        if !self.row_height.is_finite() || self.row_height <= 0.0 {
            return Err(ConfigError::InvalidRowHeight(self.row_height));
        }
        if !self.hairline_width.is_finite() || self.hairline_width < 0.0 {
            return Err(ConfigError::InvalidHairlineWidth(self.hairline_width));
        }
        Ok(())
    }
}

/// Per-instance dropdown configuration.
///
/// # Example
///
/// ```ignore
/// let config = DropdownConfig::new()
///     .default_value("Pick a colour")
///     .show_search()
///     .multiple_select();
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DropdownConfig {
    /// Ignore presses on the button.
    pub disabled: bool,
    /// Keep the overlay open after a row is chosen.
    pub multiple_select: bool,
    /// Allow the option list to scroll.
    pub scroll_enabled: bool,
    /// Open the list scrolled to the selected row.
    pub save_scroll_position: bool,
    /// Index selected initially and used as the fallback for invalid selections.
    pub default_index: Option<usize>,
    /// Button text while nothing is selected.
    pub default_value: String,
    /// Hint for hosts that animate the overlay in and out.
    pub animated: bool,
    /// Stretch a left-aligned overlay to the button's right edge.
    pub full_width: bool,
    /// Render a search input above the rows.
    pub show_search: bool,
    pub search_placeholder: String,
    /// Field of keyed options the search filter matches against.
    pub key_search_object: String,
    pub filter_mode: FilterMode,
    /// Maximum lines of button text.
    pub number_of_lines: usize,
    /// Explicit overlay width; used when the overlay is right-aligned.
    pub dropdown_width: Option<f32>,
    /// Explicit overlay height; defaults to `metrics.overlay_height()`.
    pub dropdown_height: Option<f32>,
    /// Explicit button width; the overlay width fallback after `dropdown_width`.
    pub button_width: Option<f32>,
    pub accessible: bool,
    pub metrics: LayoutMetrics,
}

impl Default for DropdownConfig {
    fn default() -> Self {
        Self {
            disabled: false,
            multiple_select: false,
            scroll_enabled: true,
            save_scroll_position: true,
            default_index: None,
            default_value: DEFAULT_VALUE.to_string(),
            animated: true,
            full_width: false,
            show_search: false,
            search_placeholder: DEFAULT_SEARCH_PLACEHOLDER.to_string(),
            key_search_object: DEFAULT_SEARCH_KEY.to_string(),
            filter_mode: FilterMode::default(),
            number_of_lines: 1,
            dropdown_width: None,
            dropdown_height: None,
            button_width: None,
            accessible: false,
            metrics: LayoutMetrics::default(),
        }
    }
}

impl DropdownConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn disabled(mut self) -> Self {
        self.disabled = true;
        self
    }

    pub fn multiple_select(mut self) -> Self {
        self.multiple_select = true;
        self
    }

    pub fn default_index(mut self, index: usize) -> Self {
        self.default_index = Some(index);
        self
    }

    pub fn default_value(mut self, value: impl Into<String>) -> Self {
        self.default_value = value.into();
        self
    }

    pub fn full_width(mut self) -> Self {
        self.full_width = true;
        self
    }

    pub fn show_search(mut self) -> Self {
        self.show_search = true;
        self
    }

    pub fn search_placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.search_placeholder = placeholder.into();
        self
    }

    pub fn key_search_object(mut self, key: impl Into<String>) -> Self {
        self.key_search_object = key.into();
        self
    }

    pub fn filter_mode(mut self, mode: FilterMode) -> Self {
        self.filter_mode = mode;
        self
    }

    pub fn save_scroll_position(mut self, save: bool) -> Self {
        self.save_scroll_position = save;
        self
    }

    pub fn dropdown_width(mut self, width: f32) -> Self {
        self.dropdown_width = Some(width);
        self
    }

    pub fn dropdown_height(mut self, height: f32) -> Self {
        self.dropdown_height = Some(height);
        self
    }

    pub fn button_width(mut self, width: f32) -> Self {
        self.button_width = Some(width);
        self
    }

    pub fn metrics(mut self, metrics: LayoutMetrics) -> Self {
        self.metrics = metrics;
        self
    }

    /// Overlay height after applying the explicit override.
    pub fn overlay_height(&self) -> f32 {
        self.dropdown_height
            .unwrap_or_else(|| self.metrics.overlay_height())
    }

    /// Width used when the overlay is right-aligned: overlay style first, then button.
    pub fn overlay_width_hint(&self) -> Option<f32> {
        self.dropdown_width.or(self.button_width)
    }

    pub fn overlay_size(&self) -> OverlaySize {
        OverlaySize::new(self.overlay_width_hint(), self.overlay_height())
    }

    /// Check metrics, and the default index against `option_count` when options are known.
    pub fn validate(&self, option_count: Option<usize>) -> Result<(), ConfigError> {
        self.metrics.validate()?;
        if let (Some(index), Some(len)) = (self.default_index, option_count)
            && index >= len
        {
            return Err(ConfigError::DefaultIndexOutOfRange { index, len });
        }
        Ok(())
    }
}
