//! # Zagan DBR
//!
//! Dynamic Byte Remapping (DBR) implementation.
//!
//! DBR ranks the 256 possible byte values by how often they occur in the
//! input, substitutes every byte with its rank code, and prepends the
//! 256-byte rank table so the artifact decodes with no side information.
//! The body keeps its length; the artifact is always input + 256 bytes.
//!
//! ## Pipeline
//!
//! - **Profile**: count occurrences of each byte value ([`FrequencyTable`])
//! - **Rank**: sort byte values by descending count ([`Header`],
//!   [`ForwardMapping`], [`ReverseMapping`])
//! - **Substitute**: map every input byte to its rank code and back
//!   ([`DbrEncoder`], [`DbrDecoder`], [`DbrCodec`])
//!
//! ## Example
//!
//! ```
//! use zagan_core::{Decoder, Encoder};
//! use zagan_dbr::{DbrCodec, HEADER_LEN};
//!
//! let codec = DbrCodec::new();
//! let artifact = codec.encode(b"mississippi").unwrap();
//! assert_eq!(artifact.len(), HEADER_LEN + 11);
//! assert_eq!(codec.decode(&artifact).unwrap(), b"mississippi");
//! ```

pub mod codec;
pub mod decode;
pub mod encode;
pub mod freq;
pub mod permutation;

// Re-export main types
pub use codec::DbrCodec;
pub use decode::DbrDecoder;
pub use encode::DbrEncoder;
pub use freq::FrequencyTable;
pub use permutation::{build, ForwardMapping, Header, ReverseMapping};

/// Length of the rank-table header that prefixes every artifact.
///
/// One byte per possible byte value; fixed regardless of input length.
pub const HEADER_LEN: usize = 256;
