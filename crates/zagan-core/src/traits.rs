//! Core traits for encoding and decoding.
//!
//! ## Trait Hierarchy
//!
//! ```text
//! Encoder / Decoder  (one-shot operations)
//!       ↓
//! Codec  (combined encode + decode)
//! ```
//!
//! There is no streaming tier: a frequency-ranked transform has to observe
//! the whole input before it can assign codes, so a chunk-at-a-time encode
//! contract cannot exist for this family.

use crate::error::Result;
use crate::stats::TransformStats;
use crate::types::{SizeOverhead, Transform};

/// One-shot forward transform operations.
pub trait Encoder {
    /// Get the transform this encoder implements.
    fn transform(&self) -> Transform;

    /// Encode data in one shot.
    ///
    /// # Arguments
    /// * `input` - Data to encode
    ///
    /// # Returns
    /// The self-describing artifact (header followed by the remapped body).
    fn encode(&self, input: &[u8]) -> Result<Vec<u8>>;

    /// Encode data into existing buffer.
    ///
    /// # Arguments
    /// * `input` - Data to encode
    /// * `output` - Buffer to write the artifact into
    ///
    /// # Returns
    /// Number of bytes written to output.
    fn encode_to(&self, input: &[u8], output: &mut [u8]) -> Result<usize>;

    /// Calculate the exact artifact size for an input length.
    ///
    /// Remapping preserves body length, so this is input length plus the
    /// fixed header - exact, not an upper bound.
    fn encoded_size(&self, input_len: usize) -> usize;

    /// Get statistics after the last operation.
    fn stats(&self) -> Option<TransformStats> {
        None
    }
}

/// One-shot inverse transform operations.
pub trait Decoder {
    /// Get the transform this decoder implements.
    fn transform(&self) -> Transform;

    /// Decode an artifact in one shot.
    ///
    /// # Arguments
    /// * `artifact` - Header plus remapped body
    ///
    /// # Returns
    /// The original bytes.
    ///
    /// # Errors
    /// Fails with [`Error::TruncatedArtifact`](crate::Error) when the input
    /// cannot contain a full header, and
    /// [`Error::CorruptedHeader`](crate::Error) when the header is not a
    /// permutation of all byte values.
    fn decode(&self, artifact: &[u8]) -> Result<Vec<u8>>;

    /// Decode an artifact into existing buffer.
    ///
    /// # Returns
    /// Number of bytes written to output.
    fn decode_to(&self, artifact: &[u8], output: &mut [u8]) -> Result<usize>;

    /// Calculate the exact decoded size for an artifact length.
    ///
    /// # Errors
    /// Fails when the artifact length cannot contain a full header.
    fn decoded_size(&self, artifact_len: usize) -> Result<usize>;

    /// Get statistics after the last operation.
    fn stats(&self) -> Option<TransformStats> {
        None
    }
}

/// Combined codec for both directions of the transform.
pub trait Codec: Encoder + Decoder {
    /// Create a new codec with default settings.
    fn new() -> Self
    where
        Self: Sized;

    /// Round-trip test: encode then decode.
    /// Returns true if data matches.
    fn verify_roundtrip(&self, data: &[u8]) -> Result<bool> {
        let artifact = self.encode(data)?;
        let restored = self.decode(&artifact)?;
        Ok(data == restored.as_slice())
    }

    /// Measure artifact overhead for given data.
    fn measure_overhead(&self, data: &[u8]) -> Result<SizeOverhead> {
        let artifact = self.encode(data)?;
        Ok(SizeOverhead::new(data.len(), artifact.len()))
    }
}
