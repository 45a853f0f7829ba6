//! Compressed blob layout.
//!
//! ```text
//! offset 0..4   : u32 big-endian primary index
//! offset 4..end : repeated { u8 count, u8 value }
//! ```
//!
//! There is no magic number, version, or length field; the run list ends
//! where the blob ends.

use crate::rle::{self, Run};
use textbench_core::{Result, TextBenchError};

/// Size of the primary-index header in bytes.
pub const HEADER_LEN: usize = 4;

/// Serialize a primary index and its run list.
pub fn write(primary_index: u32, runs: &[Run]) -> Vec<u8> {
    let mut blob = Vec::with_capacity(HEADER_LEN + runs.len() * 2);
    blob.extend_from_slice(&primary_index.to_be_bytes());
    for run in runs {
        blob.push(run.count);
        blob.push(run.value);
    }
    blob
}

/// Parse a blob into its primary index and run list.
pub fn read(blob: &[u8]) -> Result<(u32, Vec<Run>)> {
    let (header, payload) = blob
        .split_first_chunk::<HEADER_LEN>()
        .ok_or_else(|| TextBenchError::truncated_header(HEADER_LEN, blob.len()))?;

    if payload.len() % 2 != 0 {
        return Err(TextBenchError::truncated_payload(payload.len()));
    }

    let primary_index = u32::from_be_bytes(*header);
    let runs = rle::runs_from_bytes(payload)?;
    Ok((primary_index, runs))
}
