//! Statistics and metrics for remapping operations.

use crate::types::{SizeOverhead, Transform};

/// Statistics from an encode/decode operation.
#[derive(Debug, Clone, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TransformStats {
    /// Transform used.
    pub transform: Option<Transform>,

    /// Input size in bytes.
    pub input_size: usize,

    /// Output size in bytes.
    pub output_size: usize,

    /// Time taken in microseconds.
    pub time_us: u64,

    /// Number of operations folded into this record.
    pub operations: usize,
}

impl TransformStats {
    /// Create new empty stats.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create stats from a completed operation.
    pub fn from_operation(
        transform: Transform,
        input_size: usize,
        output_size: usize,
        time_us: u64,
    ) -> Self {
        TransformStats {
            transform: Some(transform),
            input_size,
            output_size,
            time_us,
            operations: 1,
        }
    }

    /// Get size overhead metrics.
    pub fn overhead(&self) -> SizeOverhead {
        SizeOverhead::new(self.input_size, self.output_size)
    }

    /// Get throughput in bytes per second.
    pub fn throughput_bps(&self) -> f64 {
        if self.time_us == 0 {
            return 0.0;
        }
        self.input_size as f64 * 1_000_000.0 / self.time_us as f64
    }

    /// Get throughput in MB/s.
    pub fn throughput_mbs(&self) -> f64 {
        self.throughput_bps() / 1_000_000.0
    }

    /// Merge stats from multiple operations.
    pub fn merge(&mut self, other: &TransformStats) {
        self.input_size += other.input_size;
        self.output_size += other.output_size;
        self.time_us += other.time_us;
        self.operations += other.operations;
    }
}

/// Metrics collector for aggregate statistics.
#[derive(Debug, Clone, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Metrics {
    /// Total operations performed.
    pub total_operations: u64,

    /// Total bytes consumed.
    pub total_bytes_in: u64,

    /// Total bytes produced.
    pub total_bytes_out: u64,

    /// Total time spent in microseconds.
    pub total_time_us: u64,

    /// Number of errors encountered.
    pub error_count: u64,
}

impl Metrics {
    /// Create new metrics collector.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a completed operation.
    pub fn record(&mut self, stats: &TransformStats) {
        self.total_operations += stats.operations as u64;
        self.total_bytes_in += stats.input_size as u64;
        self.total_bytes_out += stats.output_size as u64;
        self.total_time_us += stats.time_us;
    }

    /// Record an error.
    pub fn record_error(&mut self) {
        self.error_count += 1;
    }

    /// Get average throughput in MB/s.
    pub fn average_throughput_mbs(&self) -> f64 {
        if self.total_time_us == 0 {
            return 0.0;
        }
        self.total_bytes_in as f64 / self.total_time_us as f64
    }

    /// Get error rate (0.0 to 1.0).
    pub fn error_rate(&self) -> f64 {
        if self.total_operations == 0 {
            return 0.0;
        }
        self.error_count as f64 / self.total_operations as f64
    }

    /// Reset all metrics.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Get metrics summary as string.
    pub fn summary(&self) -> String {
        format!(
            "Operations: {}, Bytes: {} -> {}, Throughput: {:.1} MB/s, Errors: {}",
            self.total_operations,
            self.total_bytes_in,
            self.total_bytes_out,
            self.average_throughput_mbs(),
            self.error_count,
        )
    }
}
