//! DBR codec (combined encoder + decoder).

use zagan_core::{Codec, Decoder, Encoder, Result, Transform};

use crate::decode::DbrDecoder;
use crate::encode::DbrEncoder;

/// DBR codec combining encoding and decoding.
#[derive(Debug, Clone, Copy, Default)]
pub struct DbrCodec {
    encoder: DbrEncoder,
    decoder: DbrDecoder,
}

impl DbrCodec {
    /// Create a new DBR codec.
    pub fn new() -> Self {
        Self {
            encoder: DbrEncoder::new(),
            decoder: DbrDecoder::new(),
        }
    }
}

impl Encoder for DbrCodec {
    fn transform(&self) -> Transform {
        self.encoder.transform()
    }

    fn encode(&self, input: &[u8]) -> Result<Vec<u8>> {
        self.encoder.encode(input)
    }

    fn encode_to(&self, input: &[u8], output: &mut [u8]) -> Result<usize> {
        self.encoder.encode_to(input, output)
    }

    fn encoded_size(&self, input_len: usize) -> usize {
        self.encoder.encoded_size(input_len)
    }
}

impl Decoder for DbrCodec {
    fn transform(&self) -> Transform {
        self.decoder.transform()
    }

    fn decode(&self, artifact: &[u8]) -> Result<Vec<u8>> {
        self.decoder.decode(artifact)
    }

    fn decode_to(&self, artifact: &[u8], output: &mut [u8]) -> Result<usize> {
        self.decoder.decode_to(artifact, output)
    }

    fn decoded_size(&self, artifact_len: usize) -> Result<usize> {
        self.decoder.decoded_size(artifact_len)
    }
}

impl Codec for DbrCodec {
    fn new() -> Self {
        DbrCodec::new()
    }
}
