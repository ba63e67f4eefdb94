//! Property-based tests for the DBR transform.
//!
//! These tests verify that the transform laws hold across arbitrary inputs:
//! - Encode followed by decode reconstructs the original exactly
//! - Artifact length is always input length plus the fixed header
//! - The header prefix is always a permutation of all 256 byte values
//! - Encoding is deterministic
//!
//! Run with: cargo test -p zagan-dbr --test proptest_roundtrip

use proptest::prelude::*;

use zagan_core::{Decoder, Encoder};
use zagan_dbr::{DbrCodec, HEADER_LEN};

/// Strategy for arbitrary byte inputs, biased toward small alphabets too.
fn input_strategy() -> impl Strategy<Value = Vec<u8>> {
    prop_oneof![
        prop::collection::vec(any::<u8>(), 0..4096),
        prop::collection::vec(prop_oneof![Just(b'a'), Just(b'b'), Just(b'c')], 0..4096),
    ]
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 256,
        ..ProptestConfig::default()
    })]

    /// Property: decode(encode(x)) == x for every byte sequence x.
    #[test]
    fn prop_roundtrip(input in input_strategy()) {
        let codec = DbrCodec::new();
        let artifact = codec.encode(&input).unwrap();
        let restored = codec.decode(&artifact).unwrap();
        prop_assert_eq!(restored, input);
    }

    /// Property: artifact length is exactly input length + 256.
    #[test]
    fn prop_length_law(input in input_strategy()) {
        let codec = DbrCodec::new();
        let artifact = codec.encode(&input).unwrap();
        prop_assert_eq!(artifact.len(), HEADER_LEN + input.len());
    }

    /// Property: the artifact header is a permutation of all byte values.
    #[test]
    fn prop_header_completeness(input in input_strategy()) {
        let codec = DbrCodec::new();
        let artifact = codec.encode(&input).unwrap();

        let mut seen = [false; 256];
        for &symbol in &artifact[..HEADER_LEN] {
            prop_assert!(!seen[symbol as usize], "duplicate symbol 0x{:02x}", symbol);
            seen[symbol as usize] = true;
        }
    }

    /// Property: encoding the same input twice is byte-identical.
    #[test]
    fn prop_determinism(input in input_strategy()) {
        let codec = DbrCodec::new();
        prop_assert_eq!(codec.encode(&input).unwrap(), codec.encode(&input).unwrap());
    }

    /// Property: buffered and owned variants agree in both directions.
    #[test]
    fn prop_buffer_variants_agree(input in input_strategy()) {
        let codec = DbrCodec::new();

        let owned = codec.encode(&input).unwrap();
        let mut buffer = vec![0u8; codec.encoded_size(input.len())];
        codec.encode_to(&input, &mut buffer).unwrap();
        prop_assert_eq!(&buffer, &owned);

        let restored = codec.decode(&owned).unwrap();
        let mut out = vec![0u8; codec.decoded_size(owned.len()).unwrap()];
        codec.decode_to(&owned, &mut out).unwrap();
        prop_assert_eq!(out, restored);
    }
}
