//! Bench command implementation.

use super::Strategy;
use crate::utils::{create_spinner, print_file_report};
use log::info;
use serde::Serialize;
use std::fs;
use std::path::{Path, PathBuf};
use textbench_bwt::BwtCodec;
use textbench_core::{BenchmarkReport, BenchmarkRun, Codec, best_of, run_benchmark_with_output};
use textbench_deflate::DeflateCodec;
use textbench_lzw::LzwCodec;
use textbench_zstd::ZstdCodec;

/// Reports for every codec run against one file.
#[derive(Debug, Serialize)]
pub struct FileReport {
    /// Benchmarked file.
    pub file: String,
    /// One report per codec, in run order.
    pub reports: Vec<BenchmarkReport>,
    /// Codec with the smallest verified ratio.
    pub best: Option<String>,
}

impl FileReport {
    /// Whether every codec reproduced the file exactly.
    pub fn verified(&self) -> bool {
        self.reports.iter().all(|r| r.verified)
    }
}

/// Codecs benchmarked by the suite, in report order.
///
/// `strategy` only affects the BWT pipeline.
pub fn codecs(strategy: Strategy) -> Vec<Box<dyn Codec>> {
    vec![
        Box::new(BwtCodec::new(strategy.config())),
        Box::new(LzwCodec::default()),
        Box::new(DeflateCodec::zlib()),
        Box::new(DeflateCodec::gzip()),
        Box::new(ZstdCodec::default()),
    ]
}

/// Benchmark every codec on one file.
pub fn benchmark_file(
    path: &Path,
    codecs: &[Box<dyn Codec>],
    keep: Option<&Path>,
    progress: bool,
) -> Result<FileReport, Box<dyn std::error::Error>> {
    let data = fs::read(path)?;
    let mut reports = Vec::with_capacity(codecs.len());

    for codec in codecs {
        let spinner = create_spinner(
            format!("{} on {} ({} bytes)", codec.name(), path.display(), data.len()),
            progress,
        );
        let run = run_benchmark_with_output(codec.as_ref(), &data);
        spinner.finish_and_clear();
        let run = run?;

        if let Some(dir) = keep {
            write_artifacts(dir, path, codec.name(), &run)?;
        }
        reports.push(run.report);
    }

    let best = best_of(&reports).map(|r| r.codec.clone());
    Ok(FileReport {
        file: path.display().to_string(),
        reports,
        best,
    })
}

/// Write `<stem>.<codec>.bin` (compressed) and `<stem>.<codec>.out` (restored).
fn write_artifacts(
    dir: &Path,
    input: &Path,
    codec: &str,
    run: &BenchmarkRun,
) -> std::io::Result<()> {
    fs::create_dir_all(dir)?;
    let stem = input
        .file_stem()
        .unwrap_or_default()
        .to_string_lossy()
        .into_owned();

    let compressed = artifact_path(dir, &stem, codec, "bin");
    let restored = artifact_path(dir, &stem, codec, "out");
    fs::write(&compressed, &run.compressed)?;
    fs::write(&restored, &run.restored)?;

    info!(
        "kept {} and {}",
        compressed.display(),
        restored.display()
    );
    Ok(())
}

fn artifact_path(dir: &Path, stem: &str, codec: &str, extension: &str) -> PathBuf {
    dir.join(format!("{}.{}.{}", stem, codec, extension))
}

pub fn cmd_bench(
    inputs: &[PathBuf],
    strategy: Strategy,
    json: bool,
    keep: Option<&Path>,
) -> Result<(), Box<dyn std::error::Error>> {
    let codecs = codecs(strategy);
    let mut results = Vec::with_capacity(inputs.len());

    for input in inputs {
        let result = benchmark_file(input, &codecs, keep, !json)?;
        if !json {
            print_file_report(&result);
        }
        results.push(result);
    }

    if json {
        println!("{}", serde_json::to_string_pretty(&results)?);
    }

    let failed = results.iter().filter(|r| !r.verified()).count();
    if failed > 0 {
        eprintln!("{} of {} files failed round-trip verification", failed, results.len());
        std::process::exit(2);
    }

    Ok(())
}
