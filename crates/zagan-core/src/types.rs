//! Core type definitions for byte remapping.

/// Supported remapping transforms.
#[non_exhaustive]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Transform {
    /// Dynamic Byte Remapping - frequency-ranked byte substitution.
    #[default]
    Dbr,
}

impl Transform {
    /// Get transform name as string.
    pub fn name(self) -> &'static str {
        match self {
            Transform::Dbr => "dbr",
        }
    }

    /// Fixed per-artifact overhead in bytes (the self-describing header).
    pub fn header_overhead(self) -> usize {
        match self {
            Transform::Dbr => 256,
        }
    }
}

/// Size overhead metrics.
///
/// Remapping transforms preserve body length, so the only growth is the
/// prepended header. This is the inverse concern of a compression ratio:
/// the interesting question is how much fixed cost the artifact carries.
#[derive(Debug, Clone, Copy)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SizeOverhead {
    /// Original input size in bytes.
    pub original_size: usize,
    /// Transformed artifact size in bytes.
    pub transformed_size: usize,
}

impl SizeOverhead {
    /// Create new overhead metrics from sizes.
    pub fn new(original: usize, transformed: usize) -> Self {
        SizeOverhead {
            original_size: original,
            transformed_size: transformed,
        }
    }

    /// Bytes added by the transform.
    pub fn overhead_bytes(&self) -> usize {
        self.transformed_size.saturating_sub(self.original_size)
    }

    /// Overhead as a percentage of the original size.
    ///
    /// Returns 0.0 for empty input (the header is then the entire artifact).
    pub fn overhead_percent(&self) -> f64 {
        if self.original_size == 0 {
            return 0.0;
        }
        self.overhead_bytes() as f64 / self.original_size as f64 * 100.0
    }

    /// Check whether the artifact carries exactly the given fixed header.
    pub fn is_fixed_overhead(&self, header_len: usize) -> bool {
        self.transformed_size == self.original_size + header_len
    }
}
