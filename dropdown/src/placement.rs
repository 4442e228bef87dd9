//! Overlay placement relative to the trigger button.
//!
//! The overlay opens on whichever side of the anchor has more room, so an
//! anchor sitting near the middle of the screen does not flip between sides
//! as it moves a few points. Nothing guarantees the overlay fits: when both
//! sides are short the list is clipped and has to scroll internally.
//!
//! ```ignore
//! let placement = compute_placement(
//!     AnchorFrame::new(10.0, 700.0, 100.0, 40.0),
//!     ViewportSize::new(400.0, 800.0),
//!     OverlaySize::new(None, 165.0),
//!     false,
//!     None,
//! );
//! assert_eq!(placement.top, 535.0);
//! ```

use crate::geometry::{AnchorFrame, OverlayRect, OverlaySize, ViewportSize};

/// Which way the overlay opens relative to the anchor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum VerticalDirection {
    /// Below the anchor, starting at its bottom edge.
    #[default]
    Down,
    /// Above the anchor, ending at its top edge (clamped to the viewport top).
    Up,
}

/// Which anchor edge the overlay lines up with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum HorizontalAlignment {
    /// Overlay's left edge at the anchor's left edge.
    #[default]
    Left,
    /// Overlay's right edge at the anchor's right edge.
    Right,
}

/// Resolved overlay rectangle, expressed as edge offsets from the viewport.
///
/// `right` is a distance from the viewport's right edge, like a CSS `right`.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Placement {
    pub top: f32,
    pub left: Option<f32>,
    pub right: Option<f32>,
    pub width: Option<f32>,
    pub height: f32,
    pub direction: VerticalDirection,
    pub alignment: HorizontalAlignment,
}

/// Caller-supplied final override for a computed placement.
pub type AdjustFrame = dyn Fn(Placement) -> Placement;

/// Calculate where the overlay goes for the given anchor and viewport.
///
/// # Arguments
///
/// * `anchor` - Trigger button frame, in absolute screen coordinates
/// * `viewport` - Current window size
/// * `overlay` - Overlay height (usually row stride × visible rows), and the
///   explicit width used when right-aligned
/// * `full_width` - Stretch a left-aligned overlay to the anchor's right edge
/// * `adjust` - Final override; its result is returned unchecked
pub fn compute_placement(
    anchor: AnchorFrame,
    viewport: ViewportSize,
    overlay: OverlaySize,
    full_width: bool,
    adjust: Option<&AdjustFrame>,
) -> Placement {
    let overlay_height = overlay.height;
    let bottom_space = viewport.height - anchor.y - anchor.height;
    let right_space = viewport.width - anchor.x;

    let show_in_bottom = bottom_space >= overlay_height || bottom_space >= anchor.y;
    let show_in_left = right_space >= anchor.x;

    let mut placement = Placement {
        height: overlay_height,
        ..Default::default()
    };

    if show_in_bottom {
        placement.direction = VerticalDirection::Down;
        placement.top = anchor.y + anchor.height;
    } else {
        placement.direction = VerticalDirection::Up;
        placement.top = (anchor.y - overlay_height).max(0.0);
    }

    if show_in_left {
        placement.alignment = HorizontalAlignment::Left;
        placement.left = Some(anchor.x);
        if full_width {
            placement.right = Some(viewport.width - anchor.right());
        }
    } else {
        placement.alignment = HorizontalAlignment::Right;
        placement.width = overlay.width;
        placement.right = Some(viewport.width - anchor.right());
    }

    log::trace!(
        "compute_placement anchor={:?} viewport={:?} -> {:?}",
        anchor,
        viewport,
        placement
    );

    match adjust {
        Some(adjust) => adjust(placement),
        None => placement,
    }
}

impl Placement {
    /// Convert edge offsets into an absolute rectangle.
    ///
    /// `fallback_width` is used when neither an explicit width nor both
    /// horizontal edges are set, which is the button width for dropdowns.
    pub fn resolve(&self, viewport: ViewportSize, fallback_width: f32) -> OverlayRect {
        let (x, width) = match (self.left, self.right) {
            (Some(left), Some(right)) => match self.width {
                Some(width) => (left, width),
                None => (left, (viewport.width - left - right).max(0.0)),
            },
            (Some(left), None) => (left, self.width.unwrap_or(fallback_width)),
            (None, Some(right)) => {
                let width = self.width.unwrap_or(fallback_width);
                (viewport.width - right - width, width)
            }
            (None, None) => (0.0, self.width.unwrap_or(fallback_width)),
        };

        OverlayRect::new(x, self.top, width, self.height)
    }
}
