//! Sample command implementation.
//!
//! Cuts a benchmark sample from a larger text: the first `n` characters,
//! counted as Unicode scalar values so no character is split.

use log::info;
use std::fs;
use std::path::Path;
use textbench_core::TextBenchError;

/// Characters kept when no count is given.
pub const DEFAULT_SAMPLE_CHARS: usize = 2_664_245;

/// The first `num_chars` characters of `text` (all of it if shorter).
pub fn extract_sample(text: &str, num_chars: usize) -> &str {
    match text.char_indices().nth(num_chars) {
        Some((end, _)) => &text[..end],
        None => text,
    }
}

pub fn cmd_sample(
    input: &Path,
    output: &Path,
    num_chars: usize,
) -> Result<(), Box<dyn std::error::Error>> {
    let bytes = fs::read(input)?;
    let text = String::from_utf8(bytes).map_err(|e| {
        TextBenchError::invalid_text(format!("{}: {}", input.display(), e.utf8_error()))
    })?;

    let sample = extract_sample(&text, num_chars);
    fs::write(output, sample)?;

    info!(
        "sampled {} of {} bytes from {}",
        sample.len(),
        text.len(),
        input.display()
    );
    println!(
        "{} -> {}: {} characters ({} bytes)",
        input.display(),
        output.display(),
        sample.chars().count(),
        sample.len()
    );
    Ok(())
}
