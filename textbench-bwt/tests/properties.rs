//! Property tests for the pipeline and each of its stages.

use proptest::prelude::*;
use textbench_bwt::{BwtConfig, SortStrategy, bwt, compress, compress_with, decompress, mtf, rle};

/// Short inputs over a tiny alphabet, so rotations repeat often.
fn repetitive_bytes() -> impl Strategy<Value = Vec<u8>> {
    (prop::collection::vec(b'a'..=b'c', 1..6), 1usize..8)
        .prop_map(|(unit, times)| unit.repeat(times))
}

proptest! {
    #[test]
    fn roundtrip(data in prop::collection::vec(any::<u8>(), 1..2048)) {
        let blob = compress(&data).unwrap();
        prop_assert_eq!(decompress(&blob).unwrap(), data);
    }

    #[test]
    fn roundtrip_long_runs(value in any::<u8>(), len in 1usize..3000) {
        let data = vec![value; len];
        let blob = compress(&data).unwrap();
        prop_assert_eq!(decompress(&blob).unwrap(), data);
    }

    #[test]
    fn bwt_bijection(data in prop::collection::vec(any::<u8>(), 1..512)) {
        let (transformed, index) = bwt::forward(&data).unwrap();
        prop_assert!((index as usize) < data.len());
        prop_assert_eq!(bwt::inverse(&transformed, index).unwrap(), data);
    }

    #[test]
    fn bwt_bijection_duplicate_rotations(data in repetitive_bytes()) {
        for strategy in [SortStrategy::PrefixDoubling, SortStrategy::Reference] {
            let (transformed, index) = bwt::forward_with(&data, strategy).unwrap();
            prop_assert_eq!(bwt::inverse_with(&transformed, index, strategy).unwrap(), data.clone());
        }
    }

    #[test]
    fn strategies_agree(data in prop::collection::vec(0u8..4, 1..64)) {
        let fast = bwt::forward_with(&data, SortStrategy::PrefixDoubling).unwrap();
        let slow = bwt::forward_with(&data, SortStrategy::Reference).unwrap();
        prop_assert_eq!(&fast, &slow);
        prop_assert_eq!(
            compress(&data).unwrap(),
            compress_with(&data, &BwtConfig::REFERENCE).unwrap()
        );
    }

    #[test]
    fn mtf_preserves_length(data in prop::collection::vec(any::<u8>(), 0..1024)) {
        let ranks = mtf::encode(&data);
        prop_assert_eq!(ranks.len(), data.len());
        prop_assert_eq!(mtf::decode(&ranks).unwrap(), data);
    }

    #[test]
    fn mtf_no_cross_call_leakage(
        a in prop::collection::vec(any::<u8>(), 0..256),
        b in prop::collection::vec(any::<u8>(), 0..256),
    ) {
        let alone = mtf::encode(&b);
        let _ = mtf::encode(&a);
        prop_assert_eq!(mtf::encode(&b), alone);
    }

    #[test]
    fn rle_sum_law(data in prop::collection::vec(0u8..3, 0..4096)) {
        let runs = rle::encode(&data).unwrap();
        prop_assert_eq!(rle::total_len(&runs), data.len());
        prop_assert!(runs.iter().all(|r| r.count >= 1));
        prop_assert_eq!(rle::decode(&runs).unwrap(), data);
    }

    #[test]
    fn decompress_never_panics(blob in prop::collection::vec(any::<u8>(), 0..64)) {
        // Arbitrary blobs either decode or fail cleanly
        let _ = decompress(&blob);
    }
}
