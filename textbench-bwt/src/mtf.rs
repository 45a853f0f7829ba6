//! Move-to-Front transform.
//!
//! MTF replaces each byte with its rank in a recency-ordered table of all
//! 256 byte values, then moves that byte to the front. After BWT, bytes
//! cluster by context, so most ranks come out small (mostly zero).
//!
//! Encoder and decoder mutate the table with the same rule, driven by the
//! byte just processed, so both sides hold identical tables after every
//! symbol. A fresh table is built for every call.

use textbench_core::{Result, TextBenchError};

/// Number of entries in the recency table.
pub const ALPHABET_SIZE: usize = 256;

/// Recency-ordered permutation of the byte values 0-255.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SymbolTable {
    symbols: [u8; ALPHABET_SIZE],
}

impl SymbolTable {
    /// Identity table: `0, 1, ..., 255`.
    pub fn new() -> Self {
        Self {
            symbols: std::array::from_fn(|i| i as u8),
        }
    }

    /// Current rank of `byte`.
    pub fn rank_of(&self, byte: u8) -> usize {
        // The table is a permutation, so the scan always terminates.
        let mut rank = 0;
        while self.symbols[rank] != byte {
            rank += 1;
        }
        rank
    }

    /// Byte currently at `rank`.
    pub fn symbol_at(&self, rank: usize) -> Result<u8> {
        self.symbols.get(rank).copied().ok_or_else(|| {
            TextBenchError::corrupt(format!(
                "MTF rank {} outside table of {} symbols",
                rank, ALPHABET_SIZE
            ))
        })
    }

    /// Move the byte at `rank` to the front, shifting the ones before it back.
    pub fn move_to_front(&mut self, rank: usize) {
        if rank > 0 {
            let byte = self.symbols[rank];
            self.symbols.copy_within(..rank, 1);
            self.symbols[0] = byte;
        }
    }

    /// The table in rank order.
    pub fn symbols(&self) -> &[u8; ALPHABET_SIZE] {
        &self.symbols
    }
}

impl Default for SymbolTable {
    fn default() -> Self {
        Self::new()
    }
}

/// Encode bytes as ranks. The output has the same length as the input.
pub fn encode(data: &[u8]) -> Vec<u8> {
    let mut table = SymbolTable::new();
    let mut result = Vec::with_capacity(data.len());

    for &byte in data {
        let rank = table.rank_of(byte);
        result.push(rank as u8);
        table.move_to_front(rank);
    }

    result
}

/// Decode ranks back to bytes.
pub fn decode(ranks: &[u8]) -> Result<Vec<u8>> {
    decode_ranks(ranks.iter().map(|&r| usize::from(r)))
}

/// Decode ranks of any width; fails on a rank outside the table.
pub fn decode_ranks<I>(ranks: I) -> Result<Vec<u8>>
where
    I: IntoIterator<Item = usize>,
{
    let ranks = ranks.into_iter();
    let mut table = SymbolTable::new();
    let mut result = Vec::with_capacity(ranks.size_hint().0);

    for rank in ranks {
        let byte = table.symbol_at(rank)?;
        result.push(byte);
        table.move_to_front(rank);
    }

    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mtf_empty() {
        assert!(encode(b"").is_empty());
        assert!(decode(&[]).unwrap().is_empty());
    }

    #[test]
    fn test_mtf_single() {
        assert_eq!(encode(b"a"), vec![b'a']); // 'a' is at position 97
    }

    #[test]
    fn test_mtf_repeated() {
        // First 'a' at pos 97, then 0s
        assert_eq!(encode(&[97, 97, 97, 97]), vec![97, 0, 0, 0]);
    }

    #[test]
    fn test_mtf_alternating() {
        // 'b' moves ahead of 'a' once seen
        assert_eq!(encode(b"abab"), vec![97, 98, 1, 1]);
    }

    #[test]
    fn test_mtf_roundtrip() {
        let test_cases = [
            b"hello".as_slice(),
            b"banana",
            b"abracadabra",
            b"the quick brown fox",
        ];

        for data in test_cases {
            let transformed = encode(data);
            assert_eq!(transformed.len(), data.len());
            let recovered = decode(&transformed).unwrap();
            assert_eq!(recovered, data, "Failed for: {:?}", data);
        }
    }

    #[test]
    fn test_mtf_all_byte_values() {
        let data: Vec<u8> = (0..=255u8).collect();
        // Each byte is still at its identity position when first seen after
        // all smaller bytes have moved in front of it.
        let ranks = encode(&data);
        assert!(ranks.iter().enumerate().all(|(i, &r)| r as usize == i));
        assert_eq!(decode(&ranks).unwrap(), data);
    }

    #[test]
    fn test_mtf_produces_low_values() {
        let data = b"bbbbbaaaacccc";
        let transformed = encode(data);
        let zeros = transformed.iter().filter(|&&b| b == 0).count();
        assert!(
            zeros > data.len() / 2,
            "MTF should produce many zeros for runs"
        );
    }

    #[test]
    fn test_table_reset_between_calls() {
        let first = encode(b"zzz");
        let _ = encode(b"qwerty");
        assert_eq!(encode(b"zzz"), first);
        assert_eq!(first, vec![b'z', 0, 0]);
    }

    #[test]
    fn test_table_stays_permutation() {
        let mut table = SymbolTable::new();
        for rank in [255, 3, 0, 128, 1, 255] {
            table.move_to_front(rank);
        }
        let mut seen = [false; ALPHABET_SIZE];
        for &b in table.symbols() {
            assert!(!seen[b as usize]);
            seen[b as usize] = true;
        }
        assert_eq!(table.symbols()[0], 254);
    }

    #[test]
    fn test_rank_out_of_range() {
        let table = SymbolTable::new();
        assert!(matches!(
            table.symbol_at(256),
            Err(TextBenchError::CorruptTransform { .. })
        ));

        let err = decode_ranks([0, 1, 300]).unwrap_err();
        assert!(matches!(err, TextBenchError::CorruptTransform { .. }));
    }
}
