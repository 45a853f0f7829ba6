//! Pipeline configuration.

use textbench_core::{Result, TextBenchError};

/// How the Burrows-Wheeler stage orders rotations.
///
/// Both strategies impose the same canonical order (lexicographic over the
/// full rotation, equal rotations by ascending start offset), so their
/// output is byte-identical.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortStrategy {
    /// Rank cyclic prefixes by doubling over integer offsets; LF-mapping inverse.
    #[default]
    PrefixDoubling,
    /// Materialize and sort every rotation; column-by-column inverse.
    ///
    /// Quadratic in memory. Only suitable for small inputs.
    Reference,
}

impl SortStrategy {
    /// Human-readable name.
    pub fn name(&self) -> &'static str {
        match self {
            SortStrategy::PrefixDoubling => "prefix-doubling",
            SortStrategy::Reference => "reference",
        }
    }
}

/// Configuration for [`compress_with`](crate::compress_with) and
/// [`decompress_with`](crate::decompress_with).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BwtConfig {
    /// Rotation ordering strategy.
    pub strategy: SortStrategy,
    /// Longest input (and longest decoded payload) accepted, in bytes.
    pub max_input_len: usize,
}

impl BwtConfig {
    /// Largest input whose primary index fits the 32-bit container header.
    pub const MAX_INDEXABLE_LEN: usize = u32::MAX as usize;

    /// Default input limit for the reference strategy.
    ///
    /// The column-by-column inverse re-sorts `n` rows of up to `n` bytes
    /// `n` times, so uniform input costs cubic time.
    pub const REFERENCE_MAX_INPUT_LEN: usize = 512;

    /// Prefix-doubling sort, limited only by the container's index width.
    pub const DEFAULT: Self = Self {
        strategy: SortStrategy::PrefixDoubling,
        max_input_len: Self::MAX_INDEXABLE_LEN,
    };

    /// Naive rotation sort, capped at [`Self::REFERENCE_MAX_INPUT_LEN`].
    pub const REFERENCE: Self = Self {
        strategy: SortStrategy::Reference,
        max_input_len: Self::REFERENCE_MAX_INPUT_LEN,
    };

    /// Create a configuration with the default limit for `strategy`.
    pub fn new(strategy: SortStrategy) -> Self {
        match strategy {
            SortStrategy::PrefixDoubling => Self::DEFAULT,
            SortStrategy::Reference => Self::REFERENCE,
        }
    }

    /// Override the input limit (clamped to [`Self::MAX_INDEXABLE_LEN`]).
    pub fn with_max_input_len(mut self, max_input_len: usize) -> Self {
        self.max_input_len = max_input_len.min(Self::MAX_INDEXABLE_LEN);
        self
    }

    /// Reject lengths above the configured limit.
    pub fn check_len(&self, len: usize) -> Result<()> {
        if len > self.max_input_len {
            return Err(TextBenchError::input_too_large(len, self.max_input_len));
        }
        Ok(())
    }
}

impl Default for BwtConfig {
    fn default() -> Self {
        Self::DEFAULT
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = BwtConfig::default();
        assert_eq!(config.strategy, SortStrategy::PrefixDoubling);
        assert_eq!(config.max_input_len, u32::MAX as usize);
        assert_eq!(config, BwtConfig::new(SortStrategy::PrefixDoubling));
    }

    #[test]
    fn test_reference_config() {
        let config = BwtConfig::new(SortStrategy::Reference);
        assert_eq!(config, BwtConfig::REFERENCE);
        assert_eq!(config.max_input_len, 512);
        assert_eq!(config.strategy.name(), "reference");
    }

    #[test]
    fn test_check_len() {
        let config = BwtConfig::DEFAULT.with_max_input_len(10);
        assert!(config.check_len(10).is_ok());
        assert!(matches!(
            config.check_len(11),
            Err(TextBenchError::InputTooLarge { len: 11, limit: 10 })
        ));
    }

    #[test]
    fn test_limit_clamped_to_index_width() {
        let config = BwtConfig::DEFAULT.with_max_input_len(usize::MAX);
        assert_eq!(config.max_input_len, BwtConfig::MAX_INDEXABLE_LEN);
    }
}
