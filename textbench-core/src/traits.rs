//! The codec contract shared by every scheme in the suite.
//!
//! Each compression scheme is an independent collaborator: it owns no state
//! shared with the others and is judged only through this whole-buffer
//! interface, which is what the benchmark harness drives.

use crate::error::Result;

/// A whole-buffer lossless codec.
///
/// Implementations must be deterministic and must not carry state between
/// calls, so that `decompress(compress(x)) == x` holds regardless of what
/// was processed before.
pub trait Codec {
    /// Short identifier used in reports (e.g. `"bwt-mtf-rle"`).
    fn name(&self) -> &str;

    /// Compress an entire input buffer.
    fn compress(&self, input: &[u8]) -> Result<Vec<u8>>;

    /// Decompress a buffer produced by [`Codec::compress`].
    fn decompress(&self, input: &[u8]) -> Result<Vec<u8>>;
}

impl<C: Codec + ?Sized> Codec for &C {
    fn name(&self) -> &str {
        (**self).name()
    }

    fn compress(&self, input: &[u8]) -> Result<Vec<u8>> {
        (**self).compress(input)
    }

    fn decompress(&self, input: &[u8]) -> Result<Vec<u8>> {
        (**self).decompress(input)
    }
}

impl<C: Codec + ?Sized> Codec for Box<C> {
    fn name(&self) -> &str {
        (**self).name()
    }

    fn compress(&self, input: &[u8]) -> Result<Vec<u8>> {
        (**self).compress(input)
    }

    fn decompress(&self, input: &[u8]) -> Result<Vec<u8>> {
        (**self).decompress(input)
    }
}
