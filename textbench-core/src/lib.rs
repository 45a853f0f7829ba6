//! # textbench Core
//!
//! Core components shared by every codec in the textbench suite:
//!
//! - [`error`]: Error types
//! - [`traits`]: The whole-buffer [`Codec`] contract
//! - [`harness`]: Ratio, timing, and round-trip verification
//!
//! ## Example
//!
//! ```rust
//! use textbench_core::{Codec, Result, run_benchmark};
//!
//! struct Store;
//!
//! impl Codec for Store {
//!     fn name(&self) -> &str {
//!         "store"
//!     }
//!     fn compress(&self, input: &[u8]) -> Result<Vec<u8>> {
//!         Ok(input.to_vec())
//!     }
//!     fn decompress(&self, input: &[u8]) -> Result<Vec<u8>> {
//!         Ok(input.to_vec())
//!     }
//! }
//!
//! let report = run_benchmark(&Store, b"It is a truth universally acknowledged").unwrap();
//! assert!(report.verified);
//! assert_eq!(report.ratio, 1.0);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![allow(clippy::module_name_repetitions)]

pub mod error;
pub mod harness;
pub mod traits;

// Re-exports for convenience
pub use error::{Result, TextBenchError};
pub use harness::{
    BenchmarkReport, BenchmarkRun, best_of, compression_ratio, run_benchmark,
    run_benchmark_with_output,
};
pub use traits::Codec;
