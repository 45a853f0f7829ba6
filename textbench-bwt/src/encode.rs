//! Compression: BWT, then MTF, then RLE, then the container.

use crate::config::BwtConfig;
use crate::{bwt, container, mtf, rle};
use log::debug;
use textbench_core::Result;

/// Compress `data` with the default configuration.
pub fn compress(data: &[u8]) -> Result<Vec<u8>> {
    compress_with(data, &BwtConfig::default())
}

/// Compress `data` with an explicit configuration.
pub fn compress_with(data: &[u8], config: &BwtConfig) -> Result<Vec<u8>> {
    config.check_len(data.len())?;

    let (bwt_data, primary_index) = bwt::forward_with(data, config.strategy)?;
    let ranks = mtf::encode(&bwt_data);
    let runs = rle::encode(&ranks)?;

    debug!(
        "compress: {} bytes, primary index {}, {} runs",
        data.len(),
        primary_index,
        runs.len()
    );

    Ok(container::write(primary_index, &runs))
}
