//! DBR encoder implementation.

use tracing::debug;
use zagan_core::{Encoder, Error, Result, Transform};

use crate::freq::FrequencyTable;
use crate::permutation::build;
use crate::HEADER_LEN;

/// DBR encoder.
///
/// Stateless: every call profiles its own input and builds a fresh mapping,
/// so a single encoder may be shared across threads.
#[derive(Debug, Clone, Copy)]
pub struct DbrEncoder;

impl DbrEncoder {
    /// Create a new DBR encoder.
    pub fn new() -> Self {
        Self
    }
}

impl Default for DbrEncoder {
    fn default() -> Self {
        Self::new()
    }
}

impl Encoder for DbrEncoder {
    fn transform(&self) -> Transform {
        Transform::Dbr
    }

    fn encode(&self, input: &[u8]) -> Result<Vec<u8>> {
        let table = FrequencyTable::profile(input);
        let (header, forward) = build(&table);

        let mut output = Vec::with_capacity(HEADER_LEN + input.len());
        output.extend_from_slice(header.as_bytes());
        output.extend(input.iter().map(|&byte| forward.code_for(byte)));

        debug!(
            input_len = input.len(),
            artifact_len = output.len(),
            distinct_symbols = table.distinct_symbols(),
            "dbr encode"
        );
        Ok(output)
    }

    fn encode_to(&self, input: &[u8], output: &mut [u8]) -> Result<usize> {
        let required = self.encoded_size(input.len());
        if output.len() < required {
            return Err(Error::buffer_too_small(required, output.len()));
        }

        let table = FrequencyTable::profile(input);
        let (header, forward) = build(&table);

        output[..HEADER_LEN].copy_from_slice(header.as_bytes());
        forward.apply_to(input, &mut output[HEADER_LEN..required])?;
        Ok(required)
    }

    fn encoded_size(&self, input_len: usize) -> usize {
        HEADER_LEN + input_len
    }
}
