//! # Zagan Core
//!
//! Core traits, types, and statistics for the Zagan byte remapping library.
//!
//! Zagan is named after the 61st demon of the Ars Goetia, who transmutes
//! substances into other forms - just as Dynamic Byte Remapping transmutes
//! byte values into frequency-ranked codes.
//!
//! ## Core Traits
//!
//! - [`Encoder`] - One-shot forward transforms (original bytes to artifact)
//! - [`Decoder`] - One-shot inverse transforms (artifact back to original)
//! - [`Codec`] - Combined encode/decode capability
//!
//! Transforms in this family are reversible and self-describing: every
//! artifact carries the table needed to invert it. They are not compression
//! (output size is input size plus a fixed header) and not encryption (the
//! table is derived from public statistics, not a key).
//!
//! ## Example
//!
//! ```ignore
//! use zagan_core::{Codec, Decoder, Encoder};
//! use zagan_dbr::DbrCodec;
//!
//! let codec = DbrCodec::new();
//! let artifact = codec.encode(data)?;
//! let original = codec.decode(&artifact)?;
//! ```

pub mod error;
pub mod stats;
pub mod traits;
pub mod types;

pub use error::{Error, Result};
pub use stats::{Metrics, TransformStats};
pub use traits::{Codec, Decoder, Encoder};
pub use types::{SizeOverhead, Transform};
