pub mod captions;
pub mod composite;
pub mod layout;
pub mod library;
pub mod render;

#[allow(unused_imports)]
pub use captions::{CaptionField, CaptionPair};
pub use composite::Meme;
pub use layout::{CaptionOffsets, KeyboardAvoidance, ScreenOrientation};
pub use library::PhotoLibrary;
pub use render::{CaptionStyle, RenderOptions};

use std::fmt;

/// Where a new source image comes from
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ImageSource {
    /// The capture device. On a desktop this is the primary monitor.
    Camera,
    /// An image file picked by the user
    Library,
}

impl ImageSource {
    pub fn icon_name(&self) -> &'static str {
        match self {
            ImageSource::Camera => "camera-photo-symbolic",
            ImageSource::Library => "image-x-generic-symbolic",
        }
    }

    pub fn tooltip(&self) -> &'static str {
        match self {
            ImageSource::Camera => "Capture the Screen",
            ImageSource::Library => "Pick an Image",
        }
    }
}

impl fmt::Display for ImageSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ImageSource::Camera => write!(f, "Camera"),
            ImageSource::Library => write!(f, "Photo library"),
        }
    }
}
