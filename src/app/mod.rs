//! Application module
//!
//! This module contains the screen controller, its configuration, and the
//! platform contract it drives.

pub mod config;
mod controller;
mod error;
mod platform;

#[allow(unused_imports)]
pub use config::{Action, MemeConfig, ShortcutConfig};
pub use controller::{
    ScreenController, OPEN_ERROR_TITLE, RENDER_ERROR_TITLE, SAVED_MESSAGE, SAVED_TITLE,
    SAVE_ERROR_TITLE,
};
pub use error::{MemeError, MemeResult};
pub use platform::{Platform, ShareOutcome};
