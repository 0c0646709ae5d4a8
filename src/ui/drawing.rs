use gtk4 as gtk;

use gtk::cairo;
use gtk::gdk::RGBA;
use gtk::{Align, DrawingArea};
use gtk4::prelude::*;
use image::RgbaImage;
use log::error;
use std::cell::RefCell;
use std::rc::Rc;

use crate::app::{MemeConfig, MemeError};
use crate::meme::render::{image_to_surface, paint_image};
use crate::meme::CaptionStyle;
use crate::meme::{CaptionField, CaptionOffsets};

/// CSS class of the widget moved out of the keyboard's way
pub const CANVAS_CSS_CLASS: &str = "meme-canvas";

const CAPTION_CSS_CLASS: &str = "caption";

fn css_color(color: &RGBA) -> String {
    let channel = |c: f32| (c.clamp(0.0, 1.0) * 255.0).round() as u8;
    format!(
        "rgba({}, {}, {}, {})",
        channel(color.red()),
        channel(color.green()),
        channel(color.blue()),
        color.alpha()
    )
}

/// Stylesheet for the caption entries, drawn the way `render_composite`
/// draws the captions into the shared meme. Padding is removed so the text
/// box starts exactly at the caption offset.
pub fn caption_css(style: &CaptionStyle) -> String {
    let w = style.stroke_width / 2.0;
    let stroke = css_color(&style.stroke);
    let outline = [(-w, -w), (0.0, -w), (w, -w), (-w, 0.0), (w, 0.0), (-w, w), (0.0, w), (w, w)]
        .iter()
        .map(|(x, y)| format!("{}px {}px 0 {}", x, y, stroke))
        .collect::<Vec<_>>()
        .join(", ");

    format!(
        "entry.{class} {{
    background: none;
    box-shadow: none;
    padding: 0;
    min-height: 0;
    color: {fill};
    font-family: \"{family}\";
    font-weight: bold;
    font-size: {size}px;
    text-shadow: {outline};
}}
",
        class = CAPTION_CSS_CLASS,
        fill = css_color(&style.fill),
        family = style.font_family,
        size = style.font_size,
        outline = outline,
    )
}

pub struct CanvasComponents {
    /// Everything that moves together: image plus both captions
    pub canvas: gtk::Overlay,
    pub drawing_area: DrawingArea,
    pub placeholder_icon: gtk::Image,
    pub top_entry: gtk::Entry,
    pub bottom_entry: gtk::Entry,
    image: Rc<RefCell<Option<cairo::ImageSurface>>>,
}

impl CanvasComponents {
    pub fn entry(&self, field: CaptionField) -> &gtk::Entry {
        match field {
            CaptionField::Top => &self.top_entry,
            CaptionField::Bottom => &self.bottom_entry,
        }
    }

    pub fn set_image(&self, image: Option<&RgbaImage>) {
        let surface = match image.map(image_to_surface).transpose() {
            Ok(surface) => surface,
            Err(e) => {
                error!("Failed to prepare image for display: {}", e);
                None
            }
        };
        self.placeholder_icon.set_visible(surface.is_none());
        self.image.replace(surface);
        self.drawing_area.queue_draw();
    }

    pub fn set_caption_offsets(&self, offsets: CaptionOffsets) {
        self.top_entry.set_margin_top(offsets.top.round() as i32);
        self.bottom_entry.set_margin_bottom(offsets.bottom.round() as i32);
    }
}

fn create_caption_entry(field: CaptionField, valign: Align, side_margin: f64) -> gtk::Entry {
    let side_margin = side_margin.round() as i32;
    let entry = gtk::Entry::builder()
        .has_frame(false)
        .halign(Align::Fill)
        .valign(valign)
        .margin_start(side_margin)
        .margin_end(side_margin)
        .build();
    entry.set_text(field.placeholder());
    entry.set_alignment(0.5);
    entry.add_css_class(CAPTION_CSS_CLASS);
    entry
}

pub fn create_canvas(config: &MemeConfig) -> CanvasComponents {
    let drawing_area = DrawingArea::builder().hexpand(true).vexpand(true).build();
    let image = Rc::new(RefCell::new(None));

    setup_draw_function(&drawing_area, &image, config.background);

    let placeholder_icon = gtk::Image::builder()
        .icon_name("image-x-generic-symbolic")
        .pixel_size(128)
        .opacity(0.2)
        .halign(Align::Center)
        .valign(Align::Center)
        .build();

    let side_margin = config.caption_style.side_margin;
    let top_entry = create_caption_entry(CaptionField::Top, Align::Start, side_margin);
    let bottom_entry = create_caption_entry(CaptionField::Bottom, Align::End, side_margin);

    let canvas = gtk::Overlay::builder().child(&drawing_area).build();
    canvas.add_css_class(CANVAS_CSS_CLASS);
    canvas.add_overlay(&placeholder_icon);
    canvas.add_overlay(&top_entry);
    canvas.add_overlay(&bottom_entry);

    CanvasComponents {
        canvas,
        drawing_area,
        placeholder_icon,
        top_entry,
        bottom_entry,
        image,
    }
}

fn setup_draw_function(
    drawing_area: &DrawingArea,
    image: &Rc<RefCell<Option<cairo::ImageSurface>>>,
    background: RGBA,
) {
    drawing_area.set_draw_func({
        let image = image.clone();
        move |_, cr, width, height| {
            draw_content(&image.borrow(), &background, cr, width, height);
        }
    });
}

fn draw_content(
    image: &Option<cairo::ImageSurface>,
    background: &RGBA,
    cr: &cairo::Context,
    width: i32,
    height: i32,
) {
    let result = match image {
        Some(surface) => paint_image(cr, surface, background, width as f64, height as f64),
        None => {
            cr.set_source_rgba(
                background.red() as f64,
                background.green() as f64,
                background.blue() as f64,
                background.alpha() as f64,
            );
            cr.paint().map_err(MemeError::from)
        }
    };

    if let Err(e) = result {
        error!("Failed to draw canvas: {}", e);
    }
}
