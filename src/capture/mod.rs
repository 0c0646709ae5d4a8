//! Capture module: the "camera" image source on a desktop.

pub mod screen;

pub use screen::{capture_available, capture_primary_monitor};
