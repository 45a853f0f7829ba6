//! Run-Length Encoding.
//!
//! Each maximal run of equal bytes becomes a `(count, value)` pair with a
//! single-byte count. Runs longer than [`MAX_RUN`] are split into
//! `(255, value)` pairs plus a remainder, so no run is ever truncated.

use textbench_core::{Result, TextBenchError};

/// Longest run a single pair can hold.
pub const MAX_RUN: usize = u8::MAX as usize;

/// A `(count, value)` pair. A valid run has `count` in `1..=255`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Run {
    /// Number of repetitions.
    pub count: u8,
    /// Repeated byte.
    pub value: u8,
}

impl Run {
    /// Create a run, checking that `count` fits the one-byte field.
    pub fn new(count: usize, value: u8) -> Result<Self> {
        if count == 0 {
            return Err(TextBenchError::corrupt("run with zero count"));
        }
        let count = u8::try_from(count).map_err(|_| TextBenchError::encoding_overflow(count))?;
        Ok(Self { count, value })
    }
}

/// Encode `data` into runs.
///
/// Every run is built through [`Run::new`]; the split at [`MAX_RUN`] keeps
/// counts in range, so this only fails if that invariant is broken.
pub fn encode(data: &[u8]) -> Result<Vec<Run>> {
    let mut runs = Vec::new();
    let mut i = 0;

    while i < data.len() {
        let value = data[i];
        let mut run_len = 1;
        while i + run_len < data.len() && data[i + run_len] == value && run_len < MAX_RUN {
            run_len += 1;
        }

        runs.push(Run::new(run_len, value)?);
        i += run_len;
    }

    Ok(runs)
}

/// Expand runs back into bytes.
pub fn decode(runs: &[Run]) -> Result<Vec<u8>> {
    let mut result = Vec::with_capacity(total_len(runs));

    for (i, run) in runs.iter().enumerate() {
        if run.count == 0 {
            return Err(TextBenchError::corrupt(format!(
                "run {} has zero count",
                i
            )));
        }
        result.resize(result.len() + run.count as usize, run.value);
    }

    Ok(result)
}

/// Decode serialized `count, value` pairs.
pub fn decode_bytes(pairs: &[u8]) -> Result<Vec<u8>> {
    decode(&runs_from_bytes(pairs)?)
}

/// Split serialized pairs into runs; fails if the last pair is cut short.
pub fn runs_from_bytes(pairs: &[u8]) -> Result<Vec<Run>> {
    let chunks = pairs.chunks_exact(2);
    if !chunks.remainder().is_empty() {
        return Err(TextBenchError::corrupt(format!(
            "run list of {} bytes ends mid-pair",
            pairs.len()
        )));
    }
    Ok(chunks
        .map(|pair| Run {
            count: pair[0],
            value: pair[1],
        })
        .collect())
}

/// Serialize runs as `count, value` pairs.
pub fn runs_to_bytes(runs: &[Run]) -> Vec<u8> {
    runs.iter().flat_map(|run| [run.count, run.value]).collect()
}

/// Sum of all counts, i.e. the decoded length.
pub fn total_len(runs: &[Run]) -> usize {
    runs.iter().map(|run| run.count as usize).sum()
}
