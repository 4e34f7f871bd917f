use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("Read out of range: offset {offset:#07x}, length {length}, image size {size:#07x}")]
    OutOfRange {
        offset: usize,
        length: usize,
        size: usize,
    },

    #[error("Unmapped glyph byte {byte:#04x} at position {position}")]
    UnmappedByte { byte: u8, position: usize },

    #[error("Invalid encoding: {0}")]
    InvalidEncoding(String),

    #[error("Stream exhausted at {offset:#07x} before reaching {what} {index}")]
    IndexExhausted {
        what: &'static str,
        index: usize,
        offset: usize,
    },

    #[error("Image integrity check failed: {0}")]
    Integrity(String),

    #[error("Invalid {kind} id: {id}")]
    InvalidId { kind: &'static str, id: usize },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    pub(crate) fn invalid_id(kind: &'static str, id: impl Into<usize>) -> Self {
        Error::InvalidId {
            kind,
            id: id.into(),
        }
    }

    /// Check if this error originates from the image data rather than I/O
    pub fn is_decode_error(&self) -> bool {
        matches!(
            self,
            Error::OutOfRange { .. }
                | Error::UnmappedByte { .. }
                | Error::InvalidEncoding(_)
                | Error::IndexExhausted { .. }
                | Error::InvalidId { .. }
        )
    }
}
