//! Decompression: the container, then RLE, MTF and BWT inverses.

use crate::config::BwtConfig;
use crate::{bwt, container, mtf, rle};
use log::debug;
use textbench_core::Result;

/// Decompress a blob produced by [`compress`](crate::compress).
pub fn decompress(blob: &[u8]) -> Result<Vec<u8>> {
    decompress_with(blob, &BwtConfig::default())
}

/// Decompress with an explicit configuration.
///
/// The decoded length is checked against the configured limit before any
/// run is expanded.
pub fn decompress_with(blob: &[u8], config: &BwtConfig) -> Result<Vec<u8>> {
    let (primary_index, runs) = container::read(blob)?;
    config.check_len(rle::total_len(&runs))?;

    debug!(
        "decompress: {} runs, primary index {}",
        runs.len(),
        primary_index
    );

    let ranks = rle::decode(&runs)?;
    let bwt_data = mtf::decode(&ranks)?;
    bwt::inverse_with(&bwt_data, primary_index, config.strategy)
}
