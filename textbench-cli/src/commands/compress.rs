//! Compress command implementation.

use super::Strategy;
use log::info;
use std::fs;
use std::path::Path;
use textbench_core::compression_ratio;

pub fn cmd_compress(
    input: &Path,
    output: &Path,
    strategy: Strategy,
) -> Result<(), Box<dyn std::error::Error>> {
    let data = fs::read(input)?;
    info!("compressing {} ({} bytes)", input.display(), data.len());

    let blob = textbench_bwt::compress_with(&data, &strategy.config())?;
    fs::write(output, &blob)?;

    println!(
        "{} -> {}: {} -> {} bytes (ratio {:.4})",
        input.display(),
        output.display(),
        data.len(),
        blob.len(),
        compression_ratio(data.len() as u64, blob.len() as u64)
    );
    Ok(())
}
