//! Screen geometry: keyboard avoidance and caption placement.

/// Orientation of the screen, derived from its size
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ScreenOrientation {
    Portrait,
    Landscape,
}

impl ScreenOrientation {
    pub fn from_size(width: i32, height: i32) -> Self {
        if width > height {
            ScreenOrientation::Landscape
        } else {
            ScreenOrientation::Portrait
        }
    }
}

/// Vertical distance of each caption from its edge of the canvas
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CaptionOffsets {
    pub top: f64,
    pub bottom: f64,
}

impl CaptionOffsets {
    /// Offsets for `orientation`: the bottom caption matches the top one in
    /// landscape and sits `portrait_extra` further in when in portrait.
    pub fn for_orientation(top: f64, portrait_extra: f64, orientation: ScreenOrientation) -> Self {
        let bottom = match orientation {
            ScreenOrientation::Landscape => top,
            ScreenOrientation::Portrait => top + portrait_extra,
        };
        Self { top, bottom }
    }
}

/// Tracks how far the screen content is shifted up to keep the bottom
/// caption above the on-screen keyboard.
#[derive(Clone, Debug, Default)]
pub struct KeyboardAvoidance {
    origin_y: f64,
    shown_height: Option<f64>,
}

impl KeyboardAvoidance {
    pub fn new(origin_y: f64) -> Self {
        Self {
            origin_y,
            shown_height: None,
        }
    }

    /// Shift content up by the keyboard height. Negative heights are treated
    /// as zero.
    pub fn will_show(&mut self, height: f64) -> f64 {
        self.shown_height = Some(height.max(0.0));
        self.current_y()
    }

    pub fn will_hide(&mut self) -> f64 {
        self.shown_height = None;
        self.current_y()
    }

    pub fn is_shifted(&self) -> bool {
        self.shown_height.is_some()
    }

    #[cfg(test)]
    pub fn origin_y(&self) -> f64 {
        self.origin_y
    }

    /// Vertical position of the content. Always computed from the origin so
    /// repeated show/hide cycles cannot drift.
    pub fn current_y(&self) -> f64 {
        match self.shown_height {
            Some(height) => self.origin_y - height,
            None => self.origin_y,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_orientation_from_size() {
        assert_eq!(
            ScreenOrientation::from_size(1280, 720),
            ScreenOrientation::Landscape
        );
        assert_eq!(
            ScreenOrientation::from_size(720, 1280),
            ScreenOrientation::Portrait
        );
        assert_eq!(
            ScreenOrientation::from_size(600, 600),
            ScreenOrientation::Portrait
        );
    }

    #[test]
    fn test_caption_offsets() {
        let landscape = CaptionOffsets::for_orientation(16.0, 20.0, ScreenOrientation::Landscape);
        assert_eq!(landscape.bottom, 16.0);

        let portrait = CaptionOffsets::for_orientation(16.0, 20.0, ScreenOrientation::Portrait);
        assert_eq!(portrait.top, 16.0);
        assert_eq!(portrait.bottom, 36.0);
    }

    #[test]
    fn test_keyboard_show_hide_restores_origin() {
        for height in [0.0, 1.5, 216.0, 352.25] {
            let mut keyboard = KeyboardAvoidance::new(0.0);
            assert_eq!(keyboard.will_show(height), -height);
            assert!(keyboard.is_shifted());
            assert_eq!(keyboard.will_hide(), 0.0);
            assert!(!keyboard.is_shifted());
        }
    }

    #[test]
    fn test_keyboard_cycles_do_not_drift() {
        let mut keyboard = KeyboardAvoidance::new(12.0);
        for i in 0..1000 {
            keyboard.will_show(100.0 + i as f64 * 0.1);
            keyboard.will_hide();
        }
        assert_eq!(keyboard.current_y(), 12.0);
    }

    #[test]
    fn test_keyboard_repeated_show_uses_latest_height() {
        let mut keyboard = KeyboardAvoidance::new(0.0);
        keyboard.will_show(200.0);
        assert_eq!(keyboard.will_show(250.0), -250.0);
        assert_eq!(keyboard.will_hide(), 0.0);
    }

    #[test]
    fn test_keyboard_negative_height_clamped() {
        let mut keyboard = KeyboardAvoidance::new(5.0);
        assert_eq!(keyboard.will_show(-40.0), 5.0);
    }
}
