//! Decompress command implementation.

use super::Strategy;
use log::info;
use std::fs;
use std::path::Path;

pub fn cmd_decompress(
    input: &Path,
    output: &Path,
    strategy: Strategy,
) -> Result<(), Box<dyn std::error::Error>> {
    let blob = fs::read(input)?;
    info!("decompressing {} ({} bytes)", input.display(), blob.len());

    let data = textbench_bwt::decompress_with(&blob, &strategy.config())?;
    fs::write(output, &data)?;

    println!(
        "{} -> {}: {} -> {} bytes",
        input.display(),
        output.display(),
        blob.len(),
        data.len()
    );
    Ok(())
}
