use thiserror::Error;

/// Convenience alias used throughout the wirebits crates.
pub type Result<T> = std::result::Result<T, ErrorKind>;

/// Errors returned by the wire primitives.
///
/// Every variant is a caller contract violation or malformed input; none
/// of them is transient, so nothing here is worth retrying.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ErrorKind {
    /// The lower bound of a range is greater than its upper bound.
    #[error("invalid range: min {min} is greater than max {max}")]
    InvalidRange {
        /// Lower bound that was passed.
        min: i64,
        /// Upper bound that was passed.
        max: i64,
    },
    /// A caller-supplied destination buffer cannot hold the output.
    #[error("buffer too small: need {needed} bytes, have {capacity}")]
    BufferTooSmall {
        /// Bytes required to complete the operation.
        needed: usize,
        /// Bytes available in the destination.
        capacity: usize,
    },
    /// The prefix byte was never produced by the sequence compressor.
    #[error("unknown packet sequence prefix: {0:#04x}")]
    UnknownSequencePrefix(u8),
    /// The payload encodes a sequence the compressor would emit with a
    /// shorter prefix.
    #[error("non-canonical packet sequence encoding under prefix {0:#04x}")]
    NonCanonicalSequence(u8),
    /// Fewer payload bytes than the sequence prefix announces.
    #[error("truncated packet sequence: expected {expected} bytes, got {actual}")]
    TruncatedSequence {
        /// Payload bytes announced by the prefix.
        expected: usize,
        /// Payload bytes actually available.
        actual: usize,
    },
    /// The received data is too short to carry a checksum.
    #[error("received data too short")]
    ReceivedDataTooShort,
    /// The checksum carried by a packet does not match its contents.
    #[error("checksum mismatch: expected {expected:#010x}, got {actual:#010x}")]
    ChecksumMismatch {
        /// Checksum computed over the received payload.
        expected: u32,
        /// Checksum carried in the packet trailer.
        actual: u32,
    },
    /// Input could not be decoded.
    #[error("decoding error: {0}")]
    DecodingError(DecodingErrorKind),
}

/// Reasons an encoded input could not be decoded.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum DecodingErrorKind {
    /// The input is not valid Base64.
    #[error("invalid base64 input")]
    Base64,
    /// The decoded bytes are not valid UTF-8.
    #[error("decoded data is not valid utf-8")]
    Utf8,
}

impl From<DecodingErrorKind> for ErrorKind {
    fn from(kind: DecodingErrorKind) -> Self {
        ErrorKind::DecodingError(kind)
    }
}
