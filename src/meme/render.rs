//! Flattening the source image and captions into a single bitmap.
//!
//! Everything here draws into an offscreen cairo surface, so it runs without
//! a display connection.

use gtk::cairo;
use gtk::gdk::RGBA;
use gtk4 as gtk;
use image::RgbaImage;
use log::debug;

use super::captions::{CaptionField, CaptionPair};
use super::layout::CaptionOffsets;
use crate::app::MemeResult;

/// How caption text is drawn into the rendered meme
#[derive(Debug, Clone)]
pub struct CaptionStyle {
    pub font_family: String,
    pub font_size: f64,
    pub fill: RGBA,
    pub stroke: RGBA,
    pub stroke_width: f64,
    /// Horizontal space kept free on each side of a caption
    pub side_margin: f64,
}

impl Default for CaptionStyle {
    fn default() -> Self {
        Self {
            font_family: "Sans".to_string(),
            font_size: 40.0,
            fill: RGBA::new(1.0, 1.0, 1.0, 1.0),
            stroke: RGBA::new(0.0, 0.0, 0.0, 1.0),
            stroke_width: 2.0,
            side_margin: 12.0,
        }
    }
}

/// Everything besides the image and captions that affects the output
#[derive(Debug, Clone)]
pub struct RenderOptions<'a> {
    pub width: i32,
    pub height: i32,
    pub background: RGBA,
    pub offsets: CaptionOffsets,
    pub style: &'a CaptionStyle,
}

/// Scale and offset that fit an image of the given size inside the target
/// while preserving its aspect ratio.
pub fn fit_transform(img_width: f64, img_height: f64, width: f64, height: f64) -> (f64, f64, f64) {
    if img_width <= 0.0 || img_height <= 0.0 {
        return (1.0, 0.0, 0.0);
    }
    let scale = (width / img_width).min(height / img_height);
    let offset_x = (width - img_width * scale) / 2.0;
    let offset_y = (height - img_height * scale) / 2.0;
    (scale, offset_x, offset_y)
}

/// Copy an RGBA image into a cairo surface (premultiplied native-endian ARGB)
pub fn image_to_surface(image: &RgbaImage) -> MemeResult<cairo::ImageSurface> {
    let width = image.width();
    let height = image.height();
    let stride = cairo::Format::ARgb32.stride_for_width(width)? as usize;
    let mut data = vec![0u8; stride * height as usize];

    for (y, row) in image.rows().enumerate() {
        let line = &mut data[y * stride..];
        for (x, pixel) in row.enumerate() {
            let [r, g, b, a] = pixel.0;
            let argb = (u32::from(a) << 24)
                | (u32::from(premultiply(r, a)) << 16)
                | (u32::from(premultiply(g, a)) << 8)
                | u32::from(premultiply(b, a));
            line[x * 4..x * 4 + 4].copy_from_slice(&argb.to_ne_bytes());
        }
    }

    let surface = cairo::ImageSurface::create_for_data(
        data,
        cairo::Format::ARgb32,
        width as i32,
        height as i32,
        stride as i32,
    )?;
    Ok(surface)
}

/// Read a cairo ARGB32 surface back into an RGBA image
pub fn surface_to_image(surface: &cairo::ImageSurface) -> MemeResult<RgbaImage> {
    surface.flush();
    let width = surface.width().max(0) as u32;
    let height = surface.height().max(0) as u32;
    let stride = surface.stride() as usize;
    let mut image = RgbaImage::new(width, height);

    surface.with_data(|data| {
        for (x, y, pixel) in image.enumerate_pixels_mut() {
            let offset = y as usize * stride + x as usize * 4;
            let mut bytes = [0u8; 4];
            bytes.copy_from_slice(&data[offset..offset + 4]);
            let argb = u32::from_ne_bytes(bytes);
            let a = (argb >> 24) as u8;
            let r = unpremultiply((argb >> 16) as u8, a);
            let g = unpremultiply((argb >> 8) as u8, a);
            let b = unpremultiply(argb as u8, a);
            *pixel = image::Rgba([r, g, b, a]);
        }
    })?;

    Ok(image)
}

fn premultiply(channel: u8, alpha: u8) -> u8 {
    ((u16::from(channel) * u16::from(alpha) + 127) / 255) as u8
}

fn unpremultiply(channel: u8, alpha: u8) -> u8 {
    if alpha == 0 {
        return 0;
    }
    ((u32::from(channel) * 255 + u32::from(alpha) / 2) / u32::from(alpha)).min(255) as u8
}

fn set_source(cr: &cairo::Context, color: &RGBA) {
    cr.set_source_rgba(
        color.red() as f64,
        color.green() as f64,
        color.blue() as f64,
        color.alpha() as f64,
    );
}

/// Paint the background and the aspect-fitted image. Shared by the on-screen
/// canvas and the offscreen render.
pub fn paint_image(
    cr: &cairo::Context,
    surface: &cairo::ImageSurface,
    background: &RGBA,
    width: f64,
    height: f64,
) -> MemeResult<()> {
    set_source(cr, background);
    cr.paint()?;

    let (scale, offset_x, offset_y) = fit_transform(
        surface.width() as f64,
        surface.height() as f64,
        width,
        height,
    );

    cr.save()?;
    cr.translate(offset_x, offset_y);
    cr.scale(scale, scale);
    cr.set_source_surface(surface, 0.0, 0.0)?;
    cr.paint()?;
    cr.restore()?;
    Ok(())
}

fn paint_caption(
    cr: &cairo::Context,
    text: &str,
    field: CaptionField,
    options: &RenderOptions<'_>,
) -> MemeResult<()> {
    if text.is_empty() {
        return Ok(());
    }

    let style = options.style;
    let width = options.width as f64;
    let height = options.height as f64;

    cr.select_font_face(
        &style.font_family,
        cairo::FontSlant::Normal,
        cairo::FontWeight::Bold,
    );
    cr.set_font_size(style.font_size);

    let mut extents = cr.text_extents(text)?;
    let available = width - style.side_margin * 2.0;
    if available > 0.0 && extents.width() > available {
        cr.set_font_size(style.font_size * available / extents.width());
        extents = cr.text_extents(text)?;
    }
    let font = cr.font_extents()?;

    let x = (width - extents.width()) / 2.0 - extents.x_bearing();
    let y = match field {
        CaptionField::Top => options.offsets.top + font.ascent(),
        CaptionField::Bottom => height - options.offsets.bottom - font.descent(),
    };

    cr.new_path();
    cr.move_to(x, y);
    cr.text_path(text);
    set_source(cr, &style.fill);
    cr.fill_preserve()?;
    set_source(cr, &style.stroke);
    cr.set_line_width(style.stroke_width);
    cr.set_line_join(cairo::LineJoin::Round);
    cr.stroke()?;
    Ok(())
}

/// Render the image with both captions at the given canvas size
pub fn render_composite(
    source: &RgbaImage,
    captions: &CaptionPair,
    options: &RenderOptions<'_>,
) -> MemeResult<RgbaImage> {
    debug!(
        "Rendering {}x{} source into {}x{} canvas",
        source.width(),
        source.height(),
        options.width,
        options.height
    );

    let image_surface = image_to_surface(source)?;
    let target = cairo::ImageSurface::create(cairo::Format::ARgb32, options.width, options.height)?;

    let cr = cairo::Context::new(&target)?;
    paint_image(
        &cr,
        &image_surface,
        &options.background,
        options.width as f64,
        options.height as f64,
    )?;
    for &field in CaptionField::all() {
        paint_caption(&cr, captions.get(field), field, options)?;
    }
    drop(cr);

    surface_to_image(&target)
}
