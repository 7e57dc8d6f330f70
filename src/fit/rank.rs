//! Rank generation for rank-frequency fits.

/// Counts sorted ascending and paired with their generated ranks.
#[derive(Debug, Clone, PartialEq)]
pub struct RankedCounts {
    /// `n, n-1, …, 1`: the largest count has rank 1.
    pub ranks: Vec<f64>,
    /// Counts in ascending order.
    pub counts: Vec<f64>,
    /// `order[i]` is the caller's index of `counts[i]`.
    pub order: Vec<usize>,
}

/// Sort a private copy of `counts` ascending and pair it with ranks `n, n-1, …, 1`.
///
/// The smallest count gets rank `n` and the largest count gets rank 1, so rank 1
/// is the most frequent item. The caller's slice is never reordered.
pub fn assign_ranks(counts: &[f64]) -> RankedCounts {
    let n = counts.len();

    let mut order: Vec<usize> = (0..n).collect();
    // `total_cmp` keeps the sort well-defined; NaNs land at the end and are
    // rejected by validation afterwards.
    order.sort_by(|&a, &b| counts[a].total_cmp(&counts[b]));

    RankedCounts {
        ranks: (0..n).map(|i| (n - i) as f64).collect(),
        counts: order.iter().map(|&i| counts[i]).collect(),
        order,
    }
}
