//! A selectable dropdown widget.
//!
//! A button that opens an overlay list of options next to it. The overlay
//! opens below or above the button, and left- or right-aligned, depending on
//! where there is more room in the viewport. Options can be filtered with a
//! search input; selection can be single or multiple.
//!
//! The crate is framework-agnostic: hosts measure the button, route input
//! to [`Dropdown`] and draw through the [`render::Backend`] trait.

pub mod config;
pub mod dropdown;
pub mod error;
pub mod filter;
pub mod geometry;
pub mod hooks;
pub mod option;
pub mod placement;
pub mod render;
pub mod scroll;
pub mod selection;

pub use config::{DropdownConfig, LayoutMetrics};
pub use dropdown::{Dropdown, MeasureTicket, RowChoice, Visibility};
pub use error::{ConfigError, ScrollError};
pub use filter::FilterMode;
pub use geometry::{AnchorFrame, OverlayRect, OverlaySize, ViewportSize};
pub use hooks::{Hooks, Verdict};
pub use option::OptionItem;
pub use placement::{HorizontalAlignment, Placement, VerticalDirection, compute_placement};
pub use render::{Backend, Feedback, PressAction, PressProps, Pressable, Renderers, TextRole};
pub use scroll::{PendingScroll, VirtualList};
pub use selection::SelectionState;
