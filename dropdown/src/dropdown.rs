//! The dropdown component: button state, overlay visibility and selection.

use crate::config::DropdownConfig;
use crate::geometry::{AnchorFrame, ViewportSize};
use crate::hooks::{Hooks, Verdict};
use crate::option::OptionItem;
use crate::placement::{Placement, compute_placement};
use crate::selection::{SelectionState, format_option};

/// Handle for one outstanding anchor measurement.
///
/// Only the most recently issued ticket is honoured.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MeasureTicket(u64);

/// Overlay visibility.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum Visibility {
    #[default]
    Closed,
    /// Show was requested; waiting for the host to measure the button.
    ///
    /// `previous` is the anchor of an overlay that was already open. It
    /// stays on screen until the measurement completes.
    Measuring {
        ticket: MeasureTicket,
        previous: Option<AnchorFrame>,
    },
    /// Overlay is showing, positioned against `anchor`.
    Open { anchor: AnchorFrame },
}

/// What happened when a row was chosen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RowChoice {
    /// The selection changed to the chosen row.
    pub applied: bool,
    /// The overlay closed.
    pub closed: bool,
}

/// A dropdown widget.
///
/// The host drives it with input events and supplies anchor measurements;
/// the dropdown keeps the selection and decides where the overlay goes.
///
/// # Example
///
/// ```ignore
/// let mut dropdown = Dropdown::new(
///     Some(vec!["Red".to_string(), "Green".to_string(), "Blue".to_string()]),
///     DropdownConfig::new(),
/// );
///
/// if let Some(ticket) = dropdown.press_button() {
///     // On a later event loop turn, once the button is measured:
///     dropdown.on_anchor_measured(ticket, Some(button_frame));
/// }
/// let placement = dropdown.placement(viewport);
/// ```
#[derive(Debug)]
pub struct Dropdown<T> {
    config: DropdownConfig,
    hooks: Hooks<T>,
    selection: SelectionState<T>,
    visibility: Visibility,
    next_ticket: u64,
    mounted: bool,
}

impl<T: OptionItem> Dropdown<T> {
    /// Create a dropdown. `None` options show a loading indicator until
    /// [`Dropdown::set_options`] supplies them.
    pub fn new(options: Option<Vec<T>>, config: DropdownConfig) -> Self {
        Self::with_hooks(options, config, Hooks::default())
    }

    pub fn with_hooks(options: Option<Vec<T>>, config: DropdownConfig, hooks: Hooks<T>) -> Self {
        let selection = SelectionState::new(options, &config, hooks.button_text.as_deref());
        Self {
            config,
            hooks,
            selection,
            visibility: Visibility::Closed,
            next_ticket: 0,
            mounted: true,
        }
    }

    pub fn config(&self) -> &DropdownConfig {
        &self.config
    }

    pub fn selection(&self) -> &SelectionState<T> {
        &self.selection
    }

    pub fn selected_index(&self) -> Option<usize> {
        self.selection.selected_index()
    }

    pub fn display_text(&self) -> &str {
        self.selection.display_text()
    }

    pub fn visibility(&self) -> Visibility {
        self.visibility
    }

    pub fn is_open(&self) -> bool {
        self.anchor().is_some()
    }

    pub fn is_mounted(&self) -> bool {
        self.mounted
    }

    /// Text for a row, using the row formatter when set.
    pub fn row_text(&self, option: &T) -> String {
        format_option(option, self.hooks.row_text.as_deref())
    }

    // -------------------------------------------------------------------------
    // Overlay visibility
    // -------------------------------------------------------------------------

    /// Handle a press on the button.
    ///
    /// Ignored while disabled or when `on_will_show` vetoes; otherwise
    /// behaves like [`Dropdown::show`].
    pub fn press_button(&mut self) -> Option<MeasureTicket> {
        if self.config.disabled {
            log::debug!("Dropdown::press_button ignored: disabled");
            return None;
        }
        if !self.hooks.will_show().allows() {
            log::debug!("Dropdown::press_button vetoed by on_will_show");
            return None;
        }
        self.show()
    }

    /// Request the overlay.
    ///
    /// Returns a ticket the host passes back to
    /// [`Dropdown::on_anchor_measured`] once it has measured the button. No
    /// ticket is issued after unmount or while another measurement is
    /// outstanding.
    pub fn show(&mut self) -> Option<MeasureTicket> {
        if !self.mounted {
            return None;
        }
        if let Visibility::Measuring { .. } = self.visibility {
            log::debug!("Dropdown::show ignored: measurement already pending");
            return None;
        }

        self.next_ticket += 1;
        let ticket = MeasureTicket(self.next_ticket);
        self.visibility = Visibility::Measuring {
            ticket,
            previous: self.anchor(),
        };
        log::debug!("Dropdown::show requested measurement {:?}", ticket);
        Some(ticket)
    }

    /// Complete a measurement.
    ///
    /// Opens the overlay when `ticket` is the pending one and the button
    /// could be measured. Stale tickets and completions after unmount are
    /// ignored. An unmeasurable button is a silent no-op: the overlay goes
    /// back to whatever it was before the show request.
    pub fn on_anchor_measured(&mut self, ticket: MeasureTicket, frame: Option<AnchorFrame>) -> bool {
        let previous = match self.visibility {
            Visibility::Measuring {
                ticket: pending,
                previous,
            } if self.mounted && pending == ticket => previous,
            _ => {
                log::trace!("Dropdown::on_anchor_measured ignoring stale {:?}", ticket);
                return false;
            }
        };

        match frame {
            Some(anchor) => {
                self.visibility = Visibility::Open { anchor };
                log::debug!("Dropdown opened at {:?}", anchor);
                true
            }
            None => {
                self.visibility = match previous {
                    Some(anchor) => Visibility::Open { anchor },
                    None => Visibility::Closed,
                };
                log::debug!("Dropdown::on_anchor_measured: anchor not measurable");
                false
            }
        }
    }

    /// Close the overlay unconditionally. Also cancels a pending measurement.
    pub fn hide(&mut self) {
        if self.visibility != Visibility::Closed {
            log::debug!("Dropdown::hide");
        }
        self.visibility = Visibility::Closed;
    }

    /// Close on a backdrop press or back request, unless `on_will_hide` vetoes.
    pub fn request_close(&mut self) -> bool {
        if !self.hooks.will_hide().allows() {
            log::debug!("Dropdown::request_close vetoed by on_will_hide");
            return false;
        }
        self.hide();
        true
    }

    /// Tear down: pending measurements are dropped and nothing reopens.
    pub fn unmount(&mut self) {
        self.mounted = false;
        self.visibility = Visibility::Closed;
    }

    /// Where the overlay goes, when open.
    pub fn placement(&self, viewport: ViewportSize) -> Option<Placement> {
        let anchor = self.anchor()?;
        Some(compute_placement(
            anchor,
            viewport,
            self.config.overlay_size(),
            self.config.full_width,
            self.hooks.adjust_frame.as_deref(),
        ))
    }

    /// Anchor the overlay is positioned against, when open. During a
    /// re-measure this is the anchor it was already open at.
    pub fn anchor(&self) -> Option<AnchorFrame> {
        match self.visibility {
            Visibility::Open { anchor } => Some(anchor),
            Visibility::Measuring { previous, .. } => previous,
            Visibility::Closed => None,
        }
    }

    // -------------------------------------------------------------------------
    // Selection
    // -------------------------------------------------------------------------

    /// Select a displayed row; see [`SelectionState::select`].
    pub fn select(&mut self, index: Option<usize>) {
        self.selection.select(index, self.hooks.button_text.as_deref());
    }

    /// Handle a chosen row.
    ///
    /// `on_select` may veto applying the selection. Independently, unless
    /// multi-select is on, the overlay is closed subject to `on_will_hide`.
    pub fn choose_row(&mut self, row: usize) -> RowChoice {
        let Some(option) = self.selection.displayed_option(row).cloned() else {
            log::debug!("Dropdown::choose_row ignoring missing row {}", row);
            return RowChoice {
                applied: false,
                closed: false,
            };
        };

        let verdict = self.hooks.select(row, &option);
        let applied = verdict.allows()
            && self
                .selection
                .commit(row, self.hooks.button_text.as_deref());

        if verdict == Verdict::Veto {
            log::debug!("Dropdown::choose_row selection of {} vetoed", row);
        }

        // Nothing to close when chosen programmatically while closed
        let closed = !self.config.multiple_select && self.is_open() && self.request_close();

        RowChoice { applied, closed }
    }

    /// Update the search text and filter the displayed rows.
    pub fn set_search_text(&mut self, text: &str) {
        self.selection.filter(text, self.hooks.button_text.as_deref());
    }

    /// Replace the options. `None` puts the overlay back into loading.
    pub fn set_options(&mut self, options: Option<Vec<T>>) -> bool {
        self.selection
            .replace_options(options, self.hooks.button_text.as_deref())
    }

    /// Row the list should open scrolled to.
    pub fn initial_scroll_index(&self) -> Option<usize> {
        if self.config.save_scroll_position {
            self.selection.selected_index()
        } else {
            None
        }
    }
}
