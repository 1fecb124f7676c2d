/// Core error types for audiomorph
use thiserror::Error;

/// Result type alias using `MorphError`
pub type Result<T> = std::result::Result<T, MorphError>;

/// Core error type for audiomorph
///
/// This is a closed set: every failure a conversion can produce maps to
/// exactly one of these kinds, so callers can distinguish a bad input file
/// from a bad conversion request from a bad target file.
#[derive(Error, Debug)]
pub enum MorphError {
    /// Unknown file extension on either the decode or encode side
    #[error("Unsupported file format: {0}")]
    UnsupportedFormat(String),

    /// Recognized output format with no encoder available
    #[error("No {0} encoder available (decoding this format is supported)")]
    NoEncoder(String),

    /// Structural invariant violated when constructing or mutating a buffer
    #[error("Invalid audio buffer: {0}")]
    InvalidBuffer(String),

    /// Channel selection referenced a channel the buffer does not have
    #[error("Channel index {index} out of range for {channel_count} channel(s)")]
    ChannelIndexOutOfRange {
        /// The offending source channel index
        index: usize,
        /// Number of channels in the buffer
        channel_count: usize,
    },

    /// Interpolation method name not in the supported set
    #[error("Unknown interpolation method: {0}")]
    UnknownInterpolationMethod(String),

    /// Numeric failure inside an interpolation kernel
    #[error("Interpolation failed: {0}")]
    InterpolationFailed(String),

    /// Encode target cannot represent the requested channel count
    #[error("{format} encoding supports {supported}, got {requested} channel(s)")]
    UnsupportedChannelLayout {
        /// Target format name
        format: &'static str,
        /// Human-readable description of the supported layouts
        supported: &'static str,
        /// Channel count that was requested
        requested: usize,
    },

    /// Underlying container/codec library failed while decoding
    #[error("Failed to decode {format}: {reason}")]
    DecodeFailure {
        /// Source format name
        format: &'static str,
        /// Original cause, preserved for diagnostics
        reason: String,
    },

    /// Underlying container/codec library failed while encoding
    #[error("Failed to encode {format}: {reason}")]
    EncodeFailure {
        /// Target format name
        format: &'static str,
        /// Original cause, preserved for diagnostics
        reason: String,
    },

    /// Input file does not exist
    #[error("File not found: {0}")]
    FileNotFound(String),

    /// I/O errors
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl MorphError {
    /// Create an invalid buffer error
    pub fn invalid_buffer(msg: impl Into<String>) -> Self {
        Self::InvalidBuffer(msg.into())
    }

    /// Create an interpolation failure
    pub fn interpolation_failed(msg: impl Into<String>) -> Self {
        Self::InterpolationFailed(msg.into())
    }

    /// Create a decode failure wrapping an underlying codec error
    pub fn decode_failure(format: &'static str, reason: impl ToString) -> Self {
        Self::DecodeFailure {
            format,
            reason: reason.to_string(),
        }
    }

    /// Create an encode failure wrapping an underlying codec error
    pub fn encode_failure(format: &'static str, reason: impl ToString) -> Self {
        Self::EncodeFailure {
            format,
            reason: reason.to_string(),
        }
    }
}
