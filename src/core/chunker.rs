//! Content chunking: splits an ordered collection into page-sized groups.

use std::num::NonZeroUsize;

/// Number of cards that fit on one generated page.
pub const PAGE_CAPACITY: NonZeroUsize = match NonZeroUsize::new(4) {
    Some(n) => n,
    None => unreachable!(),
};

/// Split `items` into consecutive groups of `size`, preserving order.
///
/// Every group except possibly the last holds exactly `size` items. An empty
/// input yields no groups at all (never a single empty group).
pub fn chunk<T: Clone>(items: &[T], size: NonZeroUsize) -> Vec<Vec<T>> {
    items.chunks(size.get()).map(<[T]>::to_vec).collect()
}

/// Number of groups `chunk` would produce for `len` items.
pub fn chunk_count(len: usize, size: NonZeroUsize) -> usize {
    len.div_ceil(size.get())
}
