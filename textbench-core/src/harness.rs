//! Benchmark harness: size ratio, timing, and round-trip verification.
//!
//! The harness is codec-agnostic. It runs one compression and one
//! decompression of an in-memory input and reports what happened; file
//! handling stays with the caller.

use crate::error::Result;
use crate::traits::Codec;
use log::{debug, info, warn};
use serde::{Serialize, Serializer};
use std::fmt;
use std::time::{Duration, Instant};

/// Outcome of benchmarking one codec against one input.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BenchmarkReport {
    /// Codec name as reported by [`Codec::name`].
    pub codec: String,
    /// Input size in bytes.
    pub original_size: u64,
    /// Compressed size in bytes.
    pub compressed_size: u64,
    /// `compressed_size / original_size`; 0.0 for empty input.
    pub ratio: f64,
    /// Wall-clock time spent compressing.
    #[serde(serialize_with = "serialize_secs")]
    pub compress_time: Duration,
    /// Wall-clock time spent decompressing.
    #[serde(serialize_with = "serialize_secs")]
    pub decompress_time: Duration,
    /// Whether decompression reproduced the input byte for byte.
    pub verified: bool,
}

impl BenchmarkReport {
    /// Percentage of the input saved by compression (negative on expansion).
    pub fn space_savings(&self) -> f64 {
        if self.original_size == 0 {
            0.0
        } else {
            (1.0 - self.ratio) * 100.0
        }
    }
}

impl fmt::Display for BenchmarkReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Codec: {}", self.codec)?;
        writeln!(
            f,
            "Compression time: {:.4} seconds",
            self.compress_time.as_secs_f64()
        )?;
        writeln!(
            f,
            "Decompression time: {:.4} seconds",
            self.decompress_time.as_secs_f64()
        )?;
        writeln!(
            f,
            "Compression ratio: {:.4} ({} -> {} bytes)",
            self.ratio, self.original_size, self.compressed_size
        )?;
        if self.verified {
            write!(
                f,
                "Success: The decompressed data matches the original input."
            )
        } else {
            write!(
                f,
                "Error: The decompressed data does not match the original input."
            )
        }
    }
}

fn serialize_secs<S: Serializer>(
    duration: &Duration,
    serializer: S,
) -> std::result::Result<S::Ok, S::Error> {
    serializer.serialize_f64(duration.as_secs_f64())
}

/// Compression ratio as the original scripts report it: compressed over original.
pub fn compression_ratio(original_size: u64, compressed_size: u64) -> f64 {
    if original_size == 0 {
        0.0
    } else {
        compressed_size as f64 / original_size as f64
    }
}

/// Report plus the buffers a benchmark produced.
#[derive(Debug, Clone)]
pub struct BenchmarkRun {
    /// Sizes, timings and verification verdict.
    pub report: BenchmarkReport,
    /// Output of [`Codec::compress`].
    pub compressed: Vec<u8>,
    /// Output of [`Codec::decompress`] on `compressed`.
    pub restored: Vec<u8>,
}

/// Benchmark `codec` on `input`.
///
/// Codec errors propagate unchanged. A round trip that completes but does
/// not reproduce the input is reported through [`BenchmarkReport::verified`].
pub fn run_benchmark<C: Codec + ?Sized>(codec: &C, input: &[u8]) -> Result<BenchmarkReport> {
    Ok(run_benchmark_with_output(codec, input)?.report)
}

/// Like [`run_benchmark`], but keeps the compressed and restored buffers.
pub fn run_benchmark_with_output<C: Codec + ?Sized>(
    codec: &C,
    input: &[u8],
) -> Result<BenchmarkRun> {
    debug!("benchmarking {} on {} bytes", codec.name(), input.len());

    let start = Instant::now();
    let compressed = codec.compress(input)?;
    let compress_time = start.elapsed();

    let start = Instant::now();
    let restored = codec.decompress(&compressed)?;
    let decompress_time = start.elapsed();

    let verified = restored == input;
    if !verified {
        warn!(
            "{}: round trip mismatch ({} bytes in, {} bytes out)",
            codec.name(),
            input.len(),
            restored.len()
        );
    }

    let original_size = input.len() as u64;
    let compressed_size = compressed.len() as u64;
    let report = BenchmarkReport {
        codec: codec.name().to_string(),
        original_size,
        compressed_size,
        ratio: compression_ratio(original_size, compressed_size),
        compress_time,
        decompress_time,
        verified,
    };

    info!(
        "{}: {} -> {} bytes, ratio {:.4}",
        report.codec, report.original_size, report.compressed_size, report.ratio
    );

    Ok(BenchmarkRun {
        report,
        compressed,
        restored,
    })
}

/// Pick the verified report with the smallest ratio.
///
/// Unverified reports never win; ties go to the earliest report.
pub fn best_of(reports: &[BenchmarkReport]) -> Option<&BenchmarkReport> {
    reports
        .iter()
        .filter(|r| r.verified)
        .fold(None, |best: Option<&BenchmarkReport>, r| match best {
            Some(b) if b.ratio <= r.ratio => Some(b),
            _ => Some(r),
        })
}
