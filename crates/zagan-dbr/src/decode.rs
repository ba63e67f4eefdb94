//! DBR decoder implementation.

use tracing::debug;
use zagan_core::{Decoder, Error, Result, Transform};

use crate::permutation::{Header, ReverseMapping};
use crate::HEADER_LEN;

/// DBR decoder.
///
/// Validates the artifact before touching the body: the input must hold a
/// full 256-byte header and that header must be a permutation of all byte
/// values. The reference behavior of trusting the header is deliberately
/// not reproduced.
#[derive(Debug, Clone, Copy)]
pub struct DbrDecoder;

impl DbrDecoder {
    /// Create a new DBR decoder.
    pub fn new() -> Self {
        Self
    }

    fn reverse_mapping(artifact: &[u8]) -> Result<ReverseMapping> {
        if artifact.len() < HEADER_LEN {
            return Err(Error::truncated(artifact.len()));
        }
        let header = Header::from_bytes(&artifact[..HEADER_LEN])?;
        Ok(ReverseMapping::from_header(&header))
    }
}

impl Default for DbrDecoder {
    fn default() -> Self {
        Self::new()
    }
}

impl Decoder for DbrDecoder {
    fn transform(&self) -> Transform {
        Transform::Dbr
    }

    fn decode(&self, artifact: &[u8]) -> Result<Vec<u8>> {
        let reverse = Self::reverse_mapping(artifact)?;
        let body = &artifact[HEADER_LEN..];
        let output = reverse.apply(body);

        debug!(
            artifact_len = artifact.len(),
            output_len = output.len(),
            "dbr decode"
        );
        Ok(output)
    }

    fn decode_to(&self, artifact: &[u8], output: &mut [u8]) -> Result<usize> {
        let reverse = Self::reverse_mapping(artifact)?;
        let body = &artifact[HEADER_LEN..];
        if output.len() < body.len() {
            return Err(Error::buffer_too_small(body.len(), output.len()));
        }
        reverse.apply_to(body, output)
    }

    fn decoded_size(&self, artifact_len: usize) -> Result<usize> {
        if artifact_len < HEADER_LEN {
            return Err(Error::truncated(artifact_len));
        }
        Ok(artifact_len - HEADER_LEN)
    }
}
