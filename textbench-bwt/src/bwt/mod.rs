//! Burrows-Wheeler Transform.
//!
//! The forward transform sorts the `n` cyclic rotations of the input into a
//! canonical total order and emits the last byte of each. The order is
//! lexicographic over the full rotation; rotations that are textually equal
//! (periodic inputs) are ordered by ascending start offset. Both directions
//! and both [`SortStrategy`] variants apply exactly this rule, which is what
//! makes the primary index portable between them.

pub mod reference;

use crate::config::{BwtConfig, SortStrategy};
use log::trace;
use textbench_core::{Result, TextBenchError};

/// Forward transform with the default strategy.
///
/// Returns the last column and the primary index (the row of the
/// un-rotated input in canonical order).
pub fn forward(data: &[u8]) -> Result<(Vec<u8>, u32)> {
    forward_with(data, SortStrategy::default())
}

/// Forward transform with an explicit strategy.
pub fn forward_with(data: &[u8], strategy: SortStrategy) -> Result<(Vec<u8>, u32)> {
    if data.len() > BwtConfig::MAX_INDEXABLE_LEN {
        return Err(TextBenchError::input_too_large(
            data.len(),
            BwtConfig::MAX_INDEXABLE_LEN,
        ));
    }
    if data.is_empty() {
        return Ok((Vec::new(), 0));
    }

    let (transformed, primary_index) = match strategy {
        SortStrategy::PrefixDoubling => {
            let n = data.len();
            let order = rotation_order(data);
            let primary_index = order.iter().position(|&i| i == 0).unwrap_or_default();
            let transformed = order
                .iter()
                .map(|&i| data[(i as usize + n - 1) % n])
                .collect();
            (transformed, primary_index)
        }
        SortStrategy::Reference => reference::forward(data),
    };

    trace!(
        "bwt forward ({}): {} bytes, primary index {}",
        strategy.name(),
        data.len(),
        primary_index
    );

    Ok((transformed, primary_index as u32))
}

/// Inverse transform with the default strategy.
pub fn inverse(data: &[u8], primary_index: u32) -> Result<Vec<u8>> {
    inverse_with(data, primary_index, SortStrategy::default())
}

/// Inverse transform with an explicit strategy.
///
/// Fails with [`TextBenchError::CorruptTransform`] when `primary_index` is
/// not a row of `data`. An empty transform only accepts index 0.
pub fn inverse_with(data: &[u8], primary_index: u32, strategy: SortStrategy) -> Result<Vec<u8>> {
    let primary_index = primary_index as usize;
    if data.is_empty() {
        if primary_index != 0 {
            return Err(TextBenchError::corrupt(format!(
                "primary index {} given for an empty transform",
                primary_index
            )));
        }
        return Ok(Vec::new());
    }
    if primary_index >= data.len() {
        return Err(TextBenchError::corrupt(format!(
            "primary index {} out of range for {} rows",
            primary_index,
            data.len()
        )));
    }

    let result = match strategy {
        SortStrategy::PrefixDoubling => invert_lf(data, primary_index),
        SortStrategy::Reference => reference::inverse(data, primary_index),
    };

    trace!(
        "bwt inverse ({}): {} bytes from primary index {}",
        strategy.name(),
        result.len(),
        primary_index
    );

    Ok(result)
}

/// Start offsets of all rotations of `data`, in canonical order.
///
/// Ranks cyclic prefixes of length 1, 2, 4, ... until every rank is
/// distinct or the prefix covers the whole rotation, then breaks the
/// remaining ties by offset. Works on `u32` offsets into `data`; no rotation
/// is ever materialized.
pub(crate) fn rotation_order(data: &[u8]) -> Vec<u32> {
    let n = data.len();
    debug_assert!(n <= BwtConfig::MAX_INDEXABLE_LEN);
    let mut order: Vec<u32> = (0..n as u32).collect();
    let mut rank: Vec<u32> = data.iter().map(|&b| u32::from(b)).collect();
    let mut next_rank = vec![0u32; n];

    let mut k = 1usize;
    while k < n {
        let key = |i: u32| {
            let i = i as usize;
            (rank[i], rank[(i + k) % n])
        };

        order.sort_unstable_by_key(|&i| key(i));

        let mut classes = 0u32;
        next_rank[order[0] as usize] = 0;
        for w in 1..n {
            if key(order[w]) != key(order[w - 1]) {
                classes += 1;
            }
            next_rank[order[w] as usize] = classes;
        }
        std::mem::swap(&mut rank, &mut next_rank);

        // Every rotation already has its own rank.
        if classes as usize == n - 1 {
            break;
        }
        k <<= 1;
    }

    order.sort_unstable_by_key(|&i| (rank[i as usize], i));
    order
}

/// Invert via the last-to-first mapping.
///
/// A stable counting pass pairs the j-th occurrence of each byte in the last
/// column with the j-th row starting with that byte.
fn invert_lf(data: &[u8], primary_index: usize) -> Vec<u8> {
    let n = data.len();

    let mut counts = [0usize; 256];
    for &byte in data {
        counts[byte as usize] += 1;
    }

    // Row at which each byte's block starts in the first column
    let mut starts = [0usize; 256];
    let mut total = 0;
    for (start, &count) in starts.iter_mut().zip(counts.iter()) {
        *start = total;
        total += count;
    }

    let mut next = vec![0u32; n];
    for (i, &byte) in data.iter().enumerate() {
        next[starts[byte as usize]] = i as u32;
        starts[byte as usize] += 1;
    }

    let mut result = Vec::with_capacity(n);
    let mut row = next[primary_index] as usize;
    for _ in 0..n {
        result.push(data[row]);
        row = next[row] as usize;
    }

    result
}
