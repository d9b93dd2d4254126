use image::ImageFormat;
use std::io;

/// Result alias for bundle operations.
pub type AabResult<T> = Result<T, AabError>;

/// Errors surfaced while opening a bundle or decoding its icon.
///
/// Semantic absence (no matching package, type, entry or configuration) is
/// never an error during resolution; it comes back as an empty value. The
/// icon accessor is the one exception, because its caller asked for an
/// image that is expected to exist.
#[derive(Debug)]
pub enum AabError {
    /// The container could not be read.
    Io(io::Error),
    /// The container is not a readable zip archive.
    Zip(zip::result::ZipError),
    /// A required archive member is absent.
    EntryNotFound(String),
    /// Malformed protobuf payload for the manifest or resource table.
    Decode(prost::DecodeError),
    /// The manifest carries no icon reference.
    IconMissing,
    /// The icon reference does not split into `"type/name"`.
    IconInvalid(String),
    /// The icon reference did not resolve to a file path.
    IconUnresolved(String),
    /// The icon bytes are in a format outside the supported set.
    UnsupportedImageFormat(ImageFormat),
    /// The icon bytes could not be decoded.
    Image(image::ImageError),
}

impl std::fmt::Display for AabError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AabError::Io(err) => write!(f, "I/O error: {err}"),
            AabError::Zip(err) => write!(f, "ZIP error: {err}"),
            AabError::EntryNotFound(name) => write!(f, "file {name:?} not found"),
            AabError::Decode(err) => write!(f, "protobuf decode error: {err}"),
            AabError::IconMissing => write!(f, "not found icon resource"),
            AabError::IconInvalid(raw) => write!(f, "invalid icon resource {raw:?}"),
            AabError::IconUnresolved(raw) => {
                write!(f, "icon resource {raw:?} did not resolve to a file")
            }
            AabError::UnsupportedImageFormat(format) => {
                write!(f, "unsupported icon image format {format:?}")
            }
            AabError::Image(err) => write!(f, "image decode error: {err}"),
        }
    }
}

impl std::error::Error for AabError {}

impl From<io::Error> for AabError {
    fn from(value: io::Error) -> Self {
        AabError::Io(value)
    }
}

impl From<zip::result::ZipError> for AabError {
    fn from(value: zip::result::ZipError) -> Self {
        AabError::Zip(value)
    }
}

impl From<prost::DecodeError> for AabError {
    fn from(value: prost::DecodeError) -> Self {
        AabError::Decode(value)
    }
}

impl From<image::ImageError> for AabError {
    fn from(value: image::ImageError) -> Self {
        AabError::Image(value)
    }
}
