//! `Platform` backed by GTK widgets, file dialogs, the clipboard and the
//! picture folder.

use gtk::glib;
use gtk4 as gtk;
use libadwaita as adw;
use log::{debug, error, info, warn};

use adw::prelude::*;
use image::RgbaImage;
use std::cell::RefCell;
use std::path::PathBuf;
use std::rc::{Rc, Weak};
use std::time::Duration;

use crate::app::{MemeConfig, MemeError, MemeResult, Platform, ScreenController, ShareOutcome};
use crate::capture::{capture_available, capture_primary_monitor};
use crate::meme::library::save_png;
use crate::meme::{CaptionField, CaptionOffsets, ImageSource, PhotoLibrary};
use crate::ui::clipboard::ClipboardManager;
use crate::ui::dialogs::{self, ShareChoice};
use crate::ui::drawing::{CanvasComponents, CANVAS_CSS_CLASS};
use crate::ui::header::HeaderComponents;
use crate::ui::keyboard::KeyboardSubscription;
use crate::ui::toolbar::ToolbarComponents;

pub struct UiComponents {
    pub window: adw::ApplicationWindow,
    pub header: HeaderComponents,
    pub toolbar: ToolbarComponents,
    pub canvas: CanvasComponents,
}

/// The meme screen: the controller plus the widgets it drives
pub struct Screen {
    pub controller: RefCell<ScreenController>,
    pub components: UiComponents,
    library: PhotoLibrary,
    offset_css: gtk::CssProvider,
    keyboard: RefCell<Option<KeyboardSubscription>>,
    this: Weak<Screen>,
}

impl Screen {
    pub fn new(config: MemeConfig, components: UiComponents) -> Rc<Self> {
        let library = PhotoLibrary::in_pictures(&config.library_folder);
        debug!("Photo library at {:?}", library.dir());

        let offset_css = gtk::CssProvider::new();
        gtk::style_context_add_provider_for_display(
            &WidgetExt::display(&components.window),
            &offset_css,
            gtk::STYLE_PROVIDER_PRIORITY_APPLICATION,
        );

        Rc::new_cyclic(|this| Self {
            controller: RefCell::new(ScreenController::new(config)),
            components,
            library,
            offset_css,
            keyboard: RefCell::new(None),
            this: this.clone(),
        })
    }

    /// Run `f` with the controller and this screen as its platform
    pub fn with_controller<R>(&self, f: impl FnOnce(&mut ScreenController, &dyn Platform) -> R) -> R {
        let mut controller = self.controller.borrow_mut();
        f(&mut controller, self)
    }

    /// Run `f` from the main loop once the current signal emission is done
    pub fn later(&self, f: impl FnOnce(&Screen) + 'static) {
        let screen = self.this.clone();
        glib::idle_add_local_once(move || {
            if let Some(screen) = screen.upgrade() {
                f(&screen);
            }
        });
    }

    pub fn keyboard_inset(&self) -> f64 {
        self.controller.borrow().config().keyboard_inset
    }

    /// Start listening for keyboard show/hide while the screen is visible
    pub fn subscribe_keyboard(&self) {
        if let Some(this) = self.this.upgrade() {
            self.keyboard
                .replace(Some(KeyboardSubscription::subscribe(&this)));
        }
    }

    pub fn unsubscribe_keyboard(&self) {
        self.keyboard.replace(None);
    }

    fn spawn<F, Fut>(&self, f: F)
    where
        F: FnOnce(Rc<Screen>) -> Fut,
        Fut: std::future::Future<Output = ()> + 'static,
    {
        if let Some(this) = self.this.upgrade() {
            glib::spawn_future_local(f(this));
        }
    }

    async fn pick_from_library(&self) -> Option<MemeResult<RgbaImage>> {
        let dialog = dialogs::create_open_dialog();
        let file = match dialog.open_future(Some(&self.components.window)).await {
            Ok(file) => file,
            Err(e) => {
                if !e.matches(gtk::DialogError::Dismissed) {
                    warn!("Image picker failed: {}", e);
                }
                return None;
            }
        };
        let path = match local_path(&file) {
            Ok(path) => path,
            Err(e) => return Some(Err(e)),
        };
        debug!("Loading {:?}", path);

        let loaded = gtk::gio::spawn_blocking(move || -> MemeResult<RgbaImage> {
            Ok(image::open(&path)?.to_rgba8())
        })
        .await;
        Some(loaded.unwrap_or_else(|_| Err(worker_panicked())))
    }

    async fn capture_screen(&self) -> MemeResult<RgbaImage> {
        let window = &self.components.window;
        window.set_visible(false);
        // Give the compositor time to take the window off screen
        glib::timeout_future(Duration::from_millis(200)).await;

        let captured = gtk::gio::spawn_blocking(capture_primary_monitor).await;
        window.set_visible(true);
        captured.unwrap_or_else(|_| Err(worker_panicked()))
    }

    async fn run_picker(&self, source: ImageSource) {
        let picked = match source {
            ImageSource::Library => self.pick_from_library().await,
            ImageSource::Camera => Some(self.capture_screen().await),
        };

        self.with_controller(|controller, platform| match picked {
            Some(Ok(image)) => controller.on_image_selected(image, platform),
            Some(Err(e)) => controller.on_picker_failed(e, platform),
            None => controller.on_picker_cancelled(source),
        });
    }

    async fn export_to_file(&self, image: &RgbaImage) -> ShareOutcome {
        let dialog = dialogs::create_export_dialog();
        let file = match dialog.save_future(Some(&self.components.window)).await {
            Ok(file) => file,
            Err(e) if e.matches(gtk::DialogError::Dismissed) => return ShareOutcome::Cancelled,
            Err(e) => {
                error!("Save dialog failed: {}", e);
                return ShareOutcome::Completed { success: false };
            }
        };

        let Some(path) = file.path() else {
            error!("Chosen file has no local path");
            return ShareOutcome::Completed { success: false };
        };

        match save_png(image, &path) {
            Ok(()) => {
                info!("Meme exported to {:?}", path);
                ShareOutcome::Completed { success: true }
            }
            Err(e) => {
                error!("Failed to export meme: {}", e);
                ShareOutcome::Completed { success: false }
            }
        }
    }

    async fn run_share(&self, image: Rc<RgbaImage>) {
        let dialog = dialogs::create_share_dialog();
        let response = dialog.choose_future(Some(&self.components.window)).await;

        let outcome = match ShareChoice::from_response(&response) {
            ShareChoice::Copy => {
                ClipboardManager::from_widget(&self.components.window).copy_image(&image);
                info!("Meme copied to clipboard");
                ShareOutcome::Completed { success: true }
            }
            ShareChoice::Export => self.export_to_file(&image).await,
            ShareChoice::Cancel => ShareOutcome::Cancelled,
        };

        self.with_controller(|controller, platform| {
            controller.on_share_completed(outcome, platform)
        });
    }

    async fn run_save(&self, image: Rc<RgbaImage>) {
        let library = self.library.clone();
        let image = (*image).clone();
        let result = gtk::gio::spawn_blocking(move || library.write(&image))
            .await
            .unwrap_or_else(|_| Err(worker_panicked()));

        self.with_controller(|controller, platform| controller.on_save_completed(result, platform));
    }
}

/// Where `file` lives on disk; images behind remote URIs cannot be opened
fn local_path(file: &gtk::gio::File) -> MemeResult<PathBuf> {
    file.path().ok_or_else(|| {
        MemeError::Io(std::io::Error::other(format!(
            "{} is not a local file",
            file.uri()
        )))
    })
}

fn worker_panicked() -> MemeError {
    MemeError::Io(std::io::Error::other("background worker panicked"))
}

impl Platform for Screen {
    fn is_source_available(&self, source: ImageSource) -> bool {
        match source {
            ImageSource::Library => true,
            ImageSource::Camera => capture_available(),
        }
    }

    fn present_picker(&self, source: ImageSource) {
        self.spawn(move |screen| async move { screen.run_picker(source).await });
    }

    fn present_share(&self, image: Rc<RgbaImage>) {
        self.spawn(move |screen| async move { screen.run_share(image).await });
    }

    fn write_to_library(&self, image: Rc<RgbaImage>) {
        self.spawn(move |screen| async move { screen.run_save(image).await });
    }

    fn show_alert(&self, title: &str, message: &str) {
        let title = title.to_string();
        let message = message.to_string();
        self.spawn(move |screen| async move {
            dialogs::show_message(&screen.components.window, &title, &message);
        });
    }

    fn show_source_image(&self, image: Option<&Rc<RgbaImage>>) {
        self.components.canvas.set_image(image.map(|image| image.as_ref()));
    }

    fn set_caption(&self, field: CaptionField, text: &str) {
        let entry = self.components.canvas.entry(field);
        if entry.text().as_str() != text {
            entry.set_text(text);
        }
    }

    fn set_share_enabled(&self, enabled: bool) {
        self.components.header.share_btn.set_sensitive(enabled);
    }

    fn set_source_enabled(&self, source: ImageSource, enabled: bool) {
        self.components
            .toolbar
            .source_button(source)
            .set_sensitive(enabled);
    }

    fn set_chrome_visible(&self, visible: bool) {
        self.components.header.header_bar.set_visible(visible);
        self.components.toolbar.tools_box.set_visible(visible);
    }

    fn set_content_offset(&self, y: f64) {
        self.offset_css.load_from_string(&format!(
            ".{} {{ transform: translateY({}px); }}",
            CANVAS_CSS_CLASS, y
        ));
    }

    fn set_caption_offsets(&self, offsets: CaptionOffsets) {
        self.components.canvas.set_caption_offsets(offsets);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_local_file_has_path() {
        let file = gtk::gio::File::for_path("/tmp/cat.png");
        assert_eq!(local_path(&file).unwrap(), PathBuf::from("/tmp/cat.png"));
    }

    #[test]
    fn test_remote_file_is_reported() {
        let file = gtk::gio::File::for_uri("meme-remote://example/cat.png");
        let err = local_path(&file).unwrap_err();
        assert!(err.to_string().contains("is not a local file"));
    }
}
