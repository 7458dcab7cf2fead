//! Base64 transcoding into caller-supplied buffers.
//!
//! Uses the standard alphabet with padding. Nothing here allocates; every
//! function reports [`ErrorKind::BufferTooSmall`] instead of overflowing
//! the destination.

use base64::{engine::general_purpose::STANDARD, DecodeSliceError, Engine as _};
use wirebits_core::error::{DecodingErrorKind, ErrorKind, Result};

/// Number of characters needed to Base64-encode `len` bytes.
pub fn base64_encoded_len(len: usize) -> usize {
    base64::encoded_len(len, true).unwrap_or(usize::MAX)
}

/// Encodes `input` into `output` and returns the number of characters written.
///
/// # Examples
/// ```
/// use wirebits_utilities::base64::base64_encode_data;
///
/// let mut output = [0u8; 8];
/// let written = base64_encode_data(b"token", &mut output).unwrap();
/// assert_eq!(&output[..written], b"dG9rZW4=");
/// ```
pub fn base64_encode_data(input: &[u8], output: &mut [u8]) -> Result<usize> {
    let capacity = output.len();
    STANDARD
        .encode_slice(input, output)
        .map_err(|_| ErrorKind::BufferTooSmall {
            needed: base64_encoded_len(input.len()),
            capacity,
        })
}

/// Decodes Base64 text from `input` into `output` and returns the bytes written.
pub fn base64_decode_data(input: &str, output: &mut [u8]) -> Result<usize> {
    let capacity = output.len();
    STANDARD.decode_slice(input, output).map_err(|err| match err {
        DecodeSliceError::OutputSliceTooSmall => ErrorKind::BufferTooSmall {
            needed: base64::decoded_len_estimate(input.len()),
            capacity,
        },
        DecodeSliceError::DecodeError(err) => {
            tracing::debug!("rejecting base64 input: {}", err);
            DecodingErrorKind::Base64.into()
        }
    })
}

/// Encodes the bytes of a string into `output`.
pub fn base64_encode_string(input: &str, output: &mut [u8]) -> Result<usize> {
    base64_encode_data(input.as_bytes(), output)
}

/// Decodes Base64 text into `output` and returns the decoded string.
///
/// # Errors
/// Besides the errors of [`base64_decode_data`], fails with
/// [`DecodingErrorKind::Utf8`] when the decoded bytes are not UTF-8.
pub fn base64_decode_string<'a>(input: &str, output: &'a mut [u8]) -> Result<&'a str> {
    let len = base64_decode_data(input, output)?;
    std::str::from_utf8(&output[..len]).map_err(|_| DecodingErrorKind::Utf8.into())
}
