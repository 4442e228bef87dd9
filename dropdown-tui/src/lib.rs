//! Terminal host for the `dropdown` widget.
//!
//! Draws the dropdown into a cell grid with crossterm and routes keyboard
//! and mouse input back into it.

pub mod app;
pub mod backend;
pub mod canvas;
pub mod error;
pub mod node;
pub mod paths;
pub mod settings;
pub mod terminal;

pub use app::App;
pub use backend::TuiBackend;
pub use canvas::{Canvas, CellStyle};
pub use error::Error;
pub use node::{Hit, Node, Painter};
pub use settings::{ButtonPosition, DemoSettings, SettingsError};
