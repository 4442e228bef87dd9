//! Screen-space geometry shared by the placement calculator and hosts.
//!
//! All values are density-independent points. Terminal hosts use one point
//! per cell and convert through [`AnchorFrame::from_cells`].

use serde::{Deserialize, Serialize};

/// Absolute frame of the trigger button, measured just before the overlay opens.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct AnchorFrame {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl AnchorFrame {
    pub const fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Build a frame from terminal cell coordinates.
    pub fn from_cells(x: u16, y: u16, width: u16, height: u16) -> Self {
        Self::new(x as f32, y as f32, width as f32, height as f32)
    }

    pub fn right(&self) -> f32 {
        self.x + self.width
    }

    pub fn bottom(&self) -> f32 {
        self.y + self.height
    }
}

/// Visible window dimensions, read fresh for every placement.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct ViewportSize {
    pub width: f32,
    pub height: f32,
}

impl ViewportSize {
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    pub fn from_cells(width: u16, height: u16) -> Self {
        Self::new(width as f32, height as f32)
    }
}

/// Intrinsic or configured overlay dimensions.
///
/// `width` is `None` when the overlay inherits the button width.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct OverlaySize {
    pub width: Option<f32>,
    pub height: f32,
}

impl OverlaySize {
    pub const fn new(width: Option<f32>, height: f32) -> Self {
        Self { width, height }
    }
}

/// An absolute `{x, y, width, height}` rectangle, as drawn by a host.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct OverlayRect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl OverlayRect {
    pub const fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Snap to terminal cells, dropping whatever falls left of or above the origin.
    ///
    /// Returns `(x, y, width, height)`.
    pub fn to_cells(&self) -> (u16, u16, u16, u16) {
        let x = self.x.max(0.0);
        let y = self.y.max(0.0);
        let width = (self.x + self.width - x).max(0.0);
        let height = (self.y + self.height - y).max(0.0);
        (
            x.round() as u16,
            y.round() as u16,
            width.round() as u16,
            height.round() as u16,
        )
    }
}
