//! Screen capture using the xcap library
//!
//! On a desktop the primary monitor stands in for the camera.

use image::RgbaImage;
use log::debug;
use xcap::Monitor;

use crate::app::{MemeError, MemeResult};

/// Information about a monitor
#[derive(Debug, Clone)]
pub struct MonitorInfo {
    pub name: String,
    pub width: u32,
    pub height: u32,
}

impl MonitorInfo {
    fn from_xcap(monitor: &Monitor) -> Self {
        Self {
            name: monitor.name().unwrap_or_default(),
            width: monitor.width().unwrap_or(0),
            height: monitor.height().unwrap_or(0),
        }
    }

    pub fn display_label(&self) -> String {
        if self.name.is_empty() {
            format!("{}x{}", self.width, self.height)
        } else {
            format!("{} ({}x{})", self.name, self.width, self.height)
        }
    }
}

fn all_monitors() -> MemeResult<Vec<Monitor>> {
    Monitor::all().map_err(|e| MemeError::Capture(format!("Failed to get monitors: {}", e)))
}

/// The primary monitor, or the first one if none claims to be primary
fn primary_monitor(monitors: &[Monitor]) -> Option<&Monitor> {
    monitors
        .iter()
        .find(|m| m.is_primary().unwrap_or(false))
        .or(monitors.first())
}

/// Whether there is anything to capture
pub fn capture_available() -> bool {
    match all_monitors() {
        Ok(monitors) => !monitors.is_empty(),
        Err(e) => {
            debug!("Screen capture unavailable: {}", e);
            false
        }
    }
}

/// Capture the primary monitor
pub fn capture_primary_monitor() -> MemeResult<RgbaImage> {
    let monitors = all_monitors()?;
    let monitor = primary_monitor(&monitors)
        .ok_or_else(|| MemeError::Capture("No monitors available".to_string()))?;

    debug!("Capturing {}", MonitorInfo::from_xcap(monitor).display_label());

    monitor
        .capture_image()
        .map_err(|e| MemeError::Capture(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_label() {
        let info = MonitorInfo {
            name: "eDP-1".to_string(),
            width: 1920,
            height: 1080,
        };
        assert_eq!(info.display_label(), "eDP-1 (1920x1080)");
    }

    #[test]
    fn test_display_label_no_name() {
        let info = MonitorInfo {
            name: String::new(),
            width: 800,
            height: 600,
        };
        assert_eq!(info.display_label(), "800x600");
    }
}
