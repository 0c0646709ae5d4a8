//! The screen controller: owns every piece of screen state and reacts to
//! user gestures and platform callbacks.

use image::RgbaImage;
use log::{debug, info, warn};
use std::path::PathBuf;
use std::rc::Rc;

use super::config::MemeConfig;
use super::error::{MemeError, MemeResult};
use super::platform::{Platform, ShareOutcome};
use crate::meme::captions;
use crate::meme::render::render_composite;
use crate::meme::{
    CaptionField, CaptionOffsets, CaptionPair, ImageSource, KeyboardAvoidance, Meme,
    RenderOptions, ScreenOrientation,
};

pub const SAVED_TITLE: &str = "Saved!";
pub const SAVED_MESSAGE: &str = "Your altered image has been saved to your photos.";
pub const SAVE_ERROR_TITLE: &str = "Save error";
pub const OPEN_ERROR_TITLE: &str = "Could not open image";
pub const RENDER_ERROR_TITLE: &str = "Could not create meme";

/// Hides the screen chrome for as long as it lives
struct ChromeGuard<'a> {
    platform: &'a dyn Platform,
}

impl<'a> ChromeGuard<'a> {
    fn hide(platform: &'a dyn Platform) -> Self {
        platform.set_chrome_visible(false);
        Self { platform }
    }
}

impl Drop for ChromeGuard<'_> {
    fn drop(&mut self) {
        self.platform.set_chrome_visible(true);
    }
}

pub struct ScreenController {
    config: MemeConfig,
    captions: CaptionPair,
    source_image: Option<Rc<RgbaImage>>,
    rendered_image: Option<Rc<RgbaImage>>,
    share_enabled: bool,
    /// Field currently being edited, if any
    editing: Option<CaptionField>,
    share_in_flight: bool,
    canvas_size: Option<(i32, i32)>,
    orientation: ScreenOrientation,
    keyboard: KeyboardAvoidance,
}

impl ScreenController {
    pub fn new(config: MemeConfig) -> Self {
        Self {
            config,
            captions: CaptionPair::new(),
            source_image: None,
            rendered_image: None,
            share_enabled: false,
            editing: None,
            share_in_flight: false,
            canvas_size: None,
            orientation: ScreenOrientation::Portrait,
            keyboard: KeyboardAvoidance::new(0.0),
        }
    }

    pub fn config(&self) -> &MemeConfig {
        &self.config
    }

    #[cfg(test)]
    pub fn captions(&self) -> &CaptionPair {
        &self.captions
    }

    #[cfg(test)]
    pub fn source_image(&self) -> Option<&Rc<RgbaImage>> {
        self.source_image.as_ref()
    }

    #[cfg(test)]
    pub fn rendered_image(&self) -> Option<&Rc<RgbaImage>> {
        self.rendered_image.as_ref()
    }

    #[cfg(test)]
    pub fn is_share_enabled(&self) -> bool {
        self.share_enabled
    }

    #[cfg(test)]
    pub fn editing(&self) -> Option<CaptionField> {
        self.editing
    }

    #[cfg(test)]
    pub fn content_offset(&self) -> f64 {
        self.keyboard.current_y()
    }

    pub fn caption_offsets(&self) -> CaptionOffsets {
        self.config.caption_offsets(self.orientation)
    }

    /// Push the whole screen state to the platform. Called whenever the
    /// screen becomes visible.
    pub fn activate(&mut self, platform: &dyn Platform) {
        debug!("Activating meme screen");
        for &source in &[ImageSource::Camera, ImageSource::Library] {
            let available = platform.is_source_available(source);
            if !available {
                info!("{} unavailable, disabling it", source);
            }
            platform.set_source_enabled(source, available);
        }
        for &field in CaptionField::all() {
            platform.set_caption(field, self.captions.get(field));
        }
        platform.show_source_image(self.source_image.as_ref());
        platform.set_share_enabled(self.share_enabled);
        platform.set_content_offset(self.keyboard.current_y());
        platform.set_caption_offsets(self.caption_offsets());
    }

    pub fn select_image_source(
        &mut self,
        source: ImageSource,
        platform: &dyn Platform,
    ) -> MemeResult<()> {
        if !platform.is_source_available(source) {
            return Err(MemeError::SourceUnavailable(source));
        }
        debug!("Presenting {} picker", source);
        platform.present_picker(source);
        Ok(())
    }

    pub fn on_image_selected(&mut self, image: RgbaImage, platform: &dyn Platform) {
        info!("Selected {}x{} image", image.width(), image.height());
        let image = Rc::new(image);
        platform.show_source_image(Some(&image));
        self.source_image = Some(image);
        self.set_share_enabled(true, platform);
    }

    pub fn on_picker_cancelled(&mut self, source: ImageSource) {
        debug!("{} picker cancelled", source);
    }

    pub fn on_picker_failed(&mut self, error: MemeError, platform: &dyn Platform) {
        warn!("Picking an image failed: {}", error);
        platform.show_alert(OPEN_ERROR_TITLE, &error.to_string());
    }

    /// Back to placeholders and no image. Safe to call in any state.
    pub fn reset_to_defaults(&mut self, platform: &dyn Platform) {
        debug!("Resetting meme screen");
        self.captions.reset();
        for &field in CaptionField::all() {
            platform.set_caption(field, self.captions.get(field));
        }
        self.source_image = None;
        self.rendered_image = None;
        platform.show_source_image(None);
        self.set_share_enabled(false, platform);
    }

    pub fn on_field_begin_edit(&mut self, field: CaptionField, text: &str, platform: &dyn Platform) {
        self.editing = Some(field);
        let cleared = captions::begin_editing(text);
        if cleared != text {
            platform.set_caption(field, &cleared);
        }
        self.captions.set(field, cleared);
    }

    pub fn on_field_end_edit(&mut self, field: CaptionField, text: &str, platform: &dyn Platform) {
        if self.editing == Some(field) {
            self.editing = None;
        }
        let text = captions::end_editing(text);
        platform.set_caption(field, &text);
        self.captions.set(field, text);
    }

    /// Only the bottom caption can end up under the keyboard
    pub fn on_keyboard_will_show(&mut self, height: f64, platform: &dyn Platform) {
        if self.editing != Some(CaptionField::Bottom) {
            return;
        }
        let y = self.keyboard.will_show(height);
        debug!("Keyboard shown ({}), content moved to {}", height, y);
        platform.set_content_offset(y);
    }

    pub fn on_keyboard_will_hide(&mut self, platform: &dyn Platform) {
        if !self.keyboard.is_shifted() {
            return;
        }
        let y = self.keyboard.will_hide();
        debug!("Keyboard hidden, content back at {}", y);
        platform.set_content_offset(y);
    }

    /// Window size changed; re-place the captions if the orientation flipped
    pub fn on_size_changed(&mut self, width: i32, height: i32, platform: &dyn Platform) {
        let orientation = ScreenOrientation::from_size(width, height);
        if orientation == self.orientation {
            return;
        }
        info!("Orientation changed to {:?}", orientation);
        self.orientation = orientation;
        platform.set_caption_offsets(self.caption_offsets());
    }

    /// Size the meme is rendered at
    pub fn on_canvas_resized(&mut self, width: i32, height: i32) {
        self.canvas_size = if width > 0 && height > 0 {
            Some((width, height))
        } else {
            None
        };
    }

    /// Render the meme and hand it to the share flow
    pub fn share_composite(&mut self, platform: &dyn Platform) -> MemeResult<()> {
        let source = self.source_image.clone().ok_or(MemeError::NoSourceImage)?;
        if self.share_in_flight {
            warn!("Share already in progress");
            return Ok(());
        }

        let (width, height) = self
            .canvas_size
            .unwrap_or((source.width() as i32, source.height() as i32));
        let options = RenderOptions {
            width,
            height,
            background: self.config.background,
            offsets: self.caption_offsets(),
            style: &self.config.caption_style,
        };

        let rendered = {
            let _chrome = ChromeGuard::hide(platform);
            render_composite(&source, &self.captions, &options)?
        };
        let rendered = Rc::new(rendered);
        self.rendered_image = Some(Rc::clone(&rendered));

        let meme = Meme::new(&self.captions, source, rendered);
        if self.captions.is_default() {
            debug!("Sharing with placeholder captions");
        }
        info!(
            "Sharing meme \"{}\" / \"{}\" from {}x{} source",
            meme.top_text,
            meme.bottom_text,
            meme.source_image.width(),
            meme.source_image.height()
        );
        self.share_in_flight = true;
        platform.present_share(meme.shareable());
        Ok(())
    }

    pub fn on_share_completed(&mut self, outcome: ShareOutcome, platform: &dyn Platform) {
        if !self.share_in_flight {
            warn!("Ignoring share completion with no share in progress");
            return;
        }
        self.share_in_flight = false;

        match outcome {
            ShareOutcome::Completed { success: true } => match &self.rendered_image {
                Some(image) => platform.write_to_library(Rc::clone(image)),
                None => warn!("Share finished after reset, nothing to save"),
            },
            ShareOutcome::Completed { success: false } => info!("Sharing failed, not saving"),
            ShareOutcome::Cancelled => debug!("Sharing cancelled"),
        }
    }

    pub fn on_save_completed(&mut self, result: MemeResult<PathBuf>, platform: &dyn Platform) {
        match result {
            Ok(_) => platform.show_alert(SAVED_TITLE, SAVED_MESSAGE),
            Err(e) => {
                warn!("Saving meme failed: {}", e);
                platform.show_alert(SAVE_ERROR_TITLE, &e.to_string());
            }
        }
    }

    fn set_share_enabled(&mut self, enabled: bool, platform: &dyn Platform) {
        self.share_enabled = enabled;
        platform.set_share_enabled(enabled);
    }
}
