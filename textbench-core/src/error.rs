//! Error types for textbench operations.
//!
//! Every failure is terminal for the call that raised it: the codecs are
//! deterministic, so a malformed blob fails the same way every time and no
//! partial output is ever returned.

use std::io;
use thiserror::Error;

/// The main error type for textbench operations.
#[derive(Debug, Error)]
pub enum TextBenchError {
    /// I/O error from underlying reader/writer.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Compressed blob is shorter than its fixed-size header.
    #[error("Truncated header: need {expected} bytes, found {len}")]
    TruncatedHeader {
        /// Number of header bytes required.
        expected: usize,
        /// Number of bytes actually present.
        len: usize,
    },

    /// Run-pair region does not hold a whole number of pairs.
    #[error("Truncated payload: run region of {len} bytes ends mid-pair")]
    TruncatedPayload {
        /// Length of the run region in bytes.
        len: usize,
    },

    /// A transform received input that no valid encoder could have produced.
    #[error("Corrupt transform: {message}")]
    CorruptTransform {
        /// Description of the inconsistency.
        message: String,
    },

    /// A run length does not fit the single-byte count field.
    #[error("Encoding overflow: run length {count} exceeds the 1-byte count field")]
    EncodingOverflow {
        /// The offending run length.
        count: usize,
    },

    /// Input is longer than the configured limit.
    #[error("Input too large: {len} bytes exceeds limit of {limit} bytes")]
    InputTooLarge {
        /// Input length in bytes.
        len: usize,
        /// Maximum accepted length in bytes.
        limit: usize,
    },

    /// A codec backed by an external library rejected its input.
    #[error("{codec} failure: {message}")]
    CodecFailure {
        /// Name of the failing codec.
        codec: String,
        /// Error reported by the backend.
        message: String,
    },

    /// Input expected to be UTF-8 text was not.
    #[error("Invalid text: {message}")]
    InvalidText {
        /// Description of the decoding error.
        message: String,
    },
}

/// Result type alias for textbench operations.
pub type Result<T> = std::result::Result<T, TextBenchError>;

impl TextBenchError {
    /// Create a truncated header error.
    pub fn truncated_header(expected: usize, len: usize) -> Self {
        Self::TruncatedHeader { expected, len }
    }

    /// Create a truncated payload error.
    pub fn truncated_payload(len: usize) -> Self {
        Self::TruncatedPayload { len }
    }

    /// Create a corrupt transform error.
    pub fn corrupt(message: impl Into<String>) -> Self {
        Self::CorruptTransform {
            message: message.into(),
        }
    }

    /// Create an encoding overflow error.
    pub fn encoding_overflow(count: usize) -> Self {
        Self::EncodingOverflow { count }
    }

    /// Create an input too large error.
    pub fn input_too_large(len: usize, limit: usize) -> Self {
        Self::InputTooLarge { len, limit }
    }

    /// Create a codec failure error.
    pub fn codec_failure(codec: impl Into<String>, message: impl ToString) -> Self {
        Self::CodecFailure {
            codec: codec.into(),
            message: message.to_string(),
        }
    }

    /// Create an invalid text error.
    pub fn invalid_text(message: impl Into<String>) -> Self {
        Self::InvalidText {
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = TextBenchError::truncated_header(4, 3);
        assert_eq!(err.to_string(), "Truncated header: need 4 bytes, found 3");

        let err = TextBenchError::truncated_payload(5);
        assert!(err.to_string().contains("mid-pair"));

        let err = TextBenchError::corrupt("primary index 9 out of range");
        assert!(err.to_string().contains("primary index 9"));

        let err = TextBenchError::encoding_overflow(256);
        assert!(err.to_string().contains("256"));

        let err = TextBenchError::input_too_large(5000, 4096);
        assert!(err.to_string().contains("4096"));

        let err = TextBenchError::codec_failure("zstd", "Unknown frame descriptor");
        assert_eq!(err.to_string(), "zstd failure: Unknown frame descriptor");
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = io::Error::new(io::ErrorKind::NotFound, "file not found");
        let err: TextBenchError = io_err.into();
        assert!(matches!(err, TextBenchError::Io(_)));
    }
}
