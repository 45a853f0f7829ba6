//! Command implementations for the textbench CLI.

pub mod bench;
pub mod compress;
pub mod decompress;
pub mod sample;

pub use bench::cmd_bench;
pub use compress::cmd_compress;
pub use decompress::cmd_decompress;
pub use sample::{DEFAULT_SAMPLE_CHARS, cmd_sample};

use clap::ValueEnum;
use textbench_bwt::{BwtConfig, SortStrategy};

/// Rotation sort strategy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum, Default)]
pub enum Strategy {
    /// Prefix doubling over offsets (default)
    #[default]
    Doubling,
    /// Naive rotation sort (small inputs only)
    Reference,
}

impl Strategy {
    /// Pipeline configuration for this strategy.
    pub fn config(self) -> BwtConfig {
        match self {
            Strategy::Doubling => BwtConfig::new(SortStrategy::PrefixDoubling),
            Strategy::Reference => BwtConfig::new(SortStrategy::Reference),
        }
    }
}
