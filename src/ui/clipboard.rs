use gtk4::gdk;
use gtk4::glib;
use gtk4::prelude::*;
use image::RgbaImage;

pub fn copy_image_to_clipboard(image: &RgbaImage, display: &gdk::Display) {
    let clipboard = display.clipboard();

    let bytes = glib::Bytes::from(image.as_raw());
    let texture = gdk::MemoryTexture::new(
        image.width() as i32,
        image.height() as i32,
        gdk::MemoryFormat::R8g8b8a8,
        &bytes,
        image.width() as usize * 4,
    );

    clipboard.set_texture(&texture);
}

pub struct ClipboardManager {
    display: gdk::Display,
}

impl ClipboardManager {
    pub fn from_widget(widget: &impl IsA<gtk4::Widget>) -> Self {
        Self {
            display: widget.display(),
        }
    }

    pub fn copy_image(&self, image: &RgbaImage) {
        copy_image_to_clipboard(image, &self.display);
    }
}
