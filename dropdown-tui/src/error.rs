use thiserror::Error;

use crate::settings::SettingsError;

/// Fatal errors of the demo binary.
#[derive(Debug, Error)]
pub enum Error {
    #[error("terminal error: {0}")]
    Io(#[from] std::io::Error),
    #[error(transparent)]
    Settings(#[from] SettingsError),
}
