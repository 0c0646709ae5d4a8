use image::RgbaImage;
use std::rc::Rc;

use super::captions::CaptionPair;

/// A finished meme: the captions and source image it was made from, plus
/// the flattened result. Built once per share and handed straight to the
/// share flow.
#[derive(Clone, Debug)]
pub struct Meme {
    pub top_text: String,
    pub bottom_text: String,
    pub source_image: Rc<RgbaImage>,
    pub rendered_image: Rc<RgbaImage>,
}

impl Meme {
    pub fn new(captions: &CaptionPair, source_image: Rc<RgbaImage>, rendered_image: Rc<RgbaImage>) -> Self {
        Self {
            top_text: captions.top().to_string(),
            bottom_text: captions.bottom().to_string(),
            source_image,
            rendered_image,
        }
    }

    /// The payload offered to the share flow
    pub fn shareable(&self) -> Rc<RgbaImage> {
        Rc::clone(&self.rendered_image)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::meme::CaptionField;

    #[test]
    fn test_meme_copies_current_captions() {
        let mut captions = CaptionPair::new();
        captions.set(CaptionField::Top, "WOW");

        let source = Rc::new(RgbaImage::new(4, 4));
        let rendered = Rc::new(RgbaImage::new(8, 8));
        let meme = Meme::new(&captions, source.clone(), rendered.clone());

        captions.reset();

        assert_eq!(meme.top_text, "WOW");
        assert_eq!(meme.bottom_text, "BOTTOM");
        assert!(Rc::ptr_eq(&meme.source_image, &source));
        assert!(Rc::ptr_eq(&meme.shareable(), &rendered));
    }
}
