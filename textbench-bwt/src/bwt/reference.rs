//! Naive rotation-sort BWT.
//!
//! Materializes the full rotation table in the forward direction and
//! rebuilds it column by column in the inverse. Quadratic memory and
//! super-quadratic time: kept as an oracle for the offset-based
//! implementation and for the `reference` strategy on small inputs.
//!
//! Callers validate the primary index; both functions expect non-empty input.

use std::collections::VecDeque;

/// Sort every rotation and return the last column and primary index.
pub fn forward(data: &[u8]) -> (Vec<u8>, usize) {
    let n = data.len();

    let rotations: Vec<Vec<u8>> = (0..n)
        .map(|i| {
            let mut rotation = Vec::with_capacity(n);
            rotation.extend_from_slice(&data[i..]);
            rotation.extend_from_slice(&data[..i]);
            rotation
        })
        .collect();

    let mut order: Vec<usize> = (0..n).collect();
    order.sort_unstable_by(|&a, &b| rotations[a].cmp(&rotations[b]).then(a.cmp(&b)));

    let primary_index = order.iter().position(|&i| i == 0).unwrap_or_default();
    let transformed = order.iter().map(|&i| rotations[i][n - 1]).collect();

    (transformed, primary_index)
}

/// Rebuild the sorted rotation table and return row `primary_index`.
///
/// Each pass prepends `data[k]` to row `k` and re-sorts the rows. Rows that
/// compare equal keep their relative order by current row index, the same
/// ascending-offset rule the forward sort uses.
pub fn inverse(data: &[u8], primary_index: usize) -> Vec<u8> {
    let n = data.len();
    let mut rows: Vec<VecDeque<u8>> = vec![VecDeque::with_capacity(n); n];

    for _ in 0..n {
        for (row, &byte) in rows.iter_mut().zip(data) {
            row.push_front(byte);
        }

        let mut order: Vec<usize> = (0..n).collect();
        order.sort_unstable_by(|&a, &b| rows[a].cmp(&rows[b]).then(a.cmp(&b)));
        rows = order
            .into_iter()
            .map(|i| std::mem::take(&mut rows[i]))
            .collect();
    }

    rows.swap_remove(primary_index).into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_forward_mississippi() {
        let (transformed, ptr) = forward(b"mississippi");
        assert_eq!(transformed, b"pssmipissii");
        assert_eq!(ptr, 4);
    }

    #[test]
    fn test_inverse_mississippi() {
        assert_eq!(inverse(b"pssmipissii", 4), b"mississippi");
    }

    #[test]
    fn test_inverse_every_row_is_a_rotation() {
        let data = b"cabbage";
        let (transformed, _) = forward(data);
        for row in 0..data.len() {
            let rotation = inverse(&transformed, row);
            let doubled = [data.as_slice(), data.as_slice()].concat();
            assert!(
                doubled.windows(data.len()).any(|w| w == rotation.as_slice()),
                "row {} is not a rotation",
                row
            );
        }
    }
}
