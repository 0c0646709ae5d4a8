//! The host services the screen controller drives.
//!
//! Every call is fire-and-forget. Results come back later through the
//! controller's `on_*` handlers, never from inside these calls.

use image::RgbaImage;
use std::rc::Rc;

use crate::meme::{CaptionField, CaptionOffsets, ImageSource};

/// How the share flow finished
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ShareOutcome {
    /// The user picked a sharing action; `success` is whether it worked
    Completed { success: bool },
    Cancelled,
}

pub trait Platform {
    fn is_source_available(&self, source: ImageSource) -> bool;

    /// Show the picker for `source`. Answered with `on_image_selected`,
    /// `on_picker_cancelled` or `on_picker_failed`.
    fn present_picker(&self, source: ImageSource);

    /// Offer `image` to the share flow. Answered with `on_share_completed`.
    fn present_share(&self, image: Rc<RgbaImage>);

    /// Persist `image` to the photo library. Answered with
    /// `on_save_completed`.
    fn write_to_library(&self, image: Rc<RgbaImage>);

    /// Modal message with a single OK button
    fn show_alert(&self, title: &str, message: &str);

    fn show_source_image(&self, image: Option<&Rc<RgbaImage>>);

    fn set_caption(&self, field: CaptionField, text: &str);

    fn set_share_enabled(&self, enabled: bool);

    fn set_source_enabled(&self, source: ImageSource, enabled: bool);

    /// Show or hide the header bar and toolbar
    fn set_chrome_visible(&self, visible: bool);

    /// Vertical position of the screen content, 0 being its resting place
    fn set_content_offset(&self, y: f64);

    fn set_caption_offsets(&self, offsets: CaptionOffsets);
}
