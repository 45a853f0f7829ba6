//! textbench CLI
//!
//! Compress, decompress and benchmark text files with the BWT + MTF + RLE pipeline.

mod commands;
mod utils;

use clap::{Parser, Subcommand};
use commands::{
    DEFAULT_SAMPLE_CHARS, Strategy, cmd_bench, cmd_compress, cmd_decompress, cmd_sample,
};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "textbench")]
#[command(author, version, about = "Lossless text-compression benchmark suite")]
#[command(long_about = "
textbench measures compression ratio and round-trip correctness of the
Burrows-Wheeler + move-to-front + run-length pipeline on text files, side by
side with LZW, zlib, gzip and Zstandard.

Examples:
  textbench sample austen.txt test.txt
  textbench bench test.txt
  textbench bench test.txt --json
  textbench compress test.txt compressed.bwt
  textbench decompress compressed.bwt out.txt
")]
struct Cli {
    /// Log debug output (RUST_LOG overrides)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Compress a file
    #[command(alias = "c")]
    Compress {
        /// File to compress
        input: PathBuf,

        /// Compressed output file
        output: PathBuf,

        /// Rotation sort strategy
        #[arg(short, long, value_enum, default_value = "doubling")]
        strategy: Strategy,
    },

    /// Decompress a file
    #[command(alias = "d")]
    Decompress {
        /// Compressed file
        input: PathBuf,

        /// Restored output file
        output: PathBuf,

        /// Rotation sort strategy
        #[arg(short, long, value_enum, default_value = "doubling")]
        strategy: Strategy,
    },

    /// Compare every codec's ratio, timing and round-trip correctness
    #[command(alias = "b")]
    Bench {
        /// Files to benchmark
        #[arg(required = true)]
        inputs: Vec<PathBuf>,

        /// Rotation sort strategy for the BWT pipeline
        #[arg(short, long, value_enum, default_value = "doubling")]
        strategy: Strategy,

        /// Output as JSON (machine-readable)
        #[arg(short, long)]
        json: bool,

        /// Directory to keep compressed and restored files in
        #[arg(short, long)]
        keep: Option<PathBuf>,
    },

    /// Copy the first characters of a text file
    Sample {
        /// Source text file
        input: PathBuf,

        /// Sample output file
        output: PathBuf,

        /// Number of characters to keep
        #[arg(short = 'n', long, default_value_t = DEFAULT_SAMPLE_CHARS)]
        chars: usize,
    },
}

fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .format_timestamp(None)
        .init();
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let result = match cli.command {
        Commands::Compress {
            input,
            output,
            strategy,
        } => cmd_compress(&input, &output, strategy),
        Commands::Decompress {
            input,
            output,
            strategy,
        } => cmd_decompress(&input, &output, strategy),
        Commands::Bench {
            inputs,
            strategy,
            json,
            keep,
        } => cmd_bench(&inputs, strategy, json, keep.as_deref()),
        Commands::Sample {
            input,
            output,
            chars,
        } => cmd_sample(&input, &output, chars),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
