use thiserror::Error;

use crate::meme::ImageSource;

pub type MemeResult<T> = Result<T, MemeError>;

#[derive(Debug, Error)]
pub enum MemeError {
    #[error("No image has been selected")]
    NoSourceImage,

    #[error("{0} is not available on this device")]
    SourceUnavailable(ImageSource),

    #[error("Could not open image: {0}")]
    Image(#[from] image::ImageError),

    #[error("Failed to capture screen: {0}")]
    Capture(String),

    #[error("Failed to render meme: {0}")]
    Render(String),

    #[error("{0}")]
    Save(String),

    #[error("{0}")]
    Io(#[from] std::io::Error),
}

impl MemeError {
    /// Failure to write an image. The message is shown to the user as is.
    pub fn from_save(err: image::ImageError) -> Self {
        match err {
            image::ImageError::IoError(e) => MemeError::Io(e),
            other => MemeError::Save(other.to_string()),
        }
    }
}

impl From<gtk4::cairo::Error> for MemeError {
    fn from(err: gtk4::cairo::Error) -> Self {
        MemeError::Render(err.to_string())
    }
}

impl From<gtk4::cairo::BorrowError> for MemeError {
    fn from(err: gtk4::cairo::BorrowError) -> Self {
        MemeError::Render(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_io_error_message_is_verbatim() {
        let err: MemeError =
            std::io::Error::new(std::io::ErrorKind::PermissionDenied, "Permission denied").into();
        assert_eq!(err.to_string(), "Permission denied");
    }

    #[test]
    fn test_save_io_failure_keeps_os_message() {
        let err = MemeError::from_save(image::ImageError::IoError(std::io::Error::new(
            std::io::ErrorKind::NotFound,
            "No such file or directory",
        )));
        assert!(matches!(err, MemeError::Io(_)));
        assert_eq!(err.to_string(), "No such file or directory");
    }

    #[test]
    fn test_save_encoding_failure_has_no_open_prefix() {
        let err = MemeError::from_save(image::ImageError::Parameter(
            image::error::ParameterError::from_kind(
                image::error::ParameterErrorKind::DimensionMismatch,
            ),
        ));
        assert!(matches!(err, MemeError::Save(_)));
        assert!(!err.to_string().starts_with("Could not open image"));
    }

    #[test]
    fn test_source_unavailable_message() {
        let err = MemeError::SourceUnavailable(ImageSource::Camera);
        assert_eq!(err.to_string(), "Camera is not available on this device");
    }
}
