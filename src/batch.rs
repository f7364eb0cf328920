//! Splitting collections into bounded batches.
//!
//! Bulk endpoints cap the number of items per request. A collection of `n`
//! items is split into `ceil(n / max_items)` chunks whose sizes differ by at
//! most one: 101 items with a cap of 100 become chunks of 51 and 50, not
//! 100 and 1.

/// Split `items` into evenly sized, order-preserving chunks of at most
/// `max_items` each. The source collection is consumed.
///
/// Concatenating the chunks yields the original sequence. An empty input
/// yields no chunks.
///
/// # Panics
///
/// Panics if `max_items` is zero.
pub fn slice_into_chunks<T>(items: Vec<T>, max_items: usize) -> Vec<Vec<T>> {
    assert!(max_items > 0, "max_items must be greater than zero");

    let total = items.len();
    if total == 0 {
        return Vec::new();
    }

    let chunk_count = total.div_ceil(max_items);
    let base_size = total / chunk_count;
    let remainder = total % chunk_count;

    let mut items = items.into_iter();
    (0..chunk_count)
        .map(|index| {
            let size = base_size + usize::from(index < remainder);
            items.by_ref().take(size).collect()
        })
        .collect()
}
