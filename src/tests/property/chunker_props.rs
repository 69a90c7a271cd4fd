//! Property-based tests for Content Chunking
//!
//! Tests invariants:
//! - Chunk count equals `ceil(n / size)` and matches `chunk_count`
//! - No chunk is empty or larger than `size`
//! - Only the last chunk may be short
//! - Concatenation restores the input order

use std::num::NonZeroUsize;

use proptest::prelude::*;

use crate::core::chunker::{chunk, chunk_count};

fn size_strategy() -> impl Strategy<Value = NonZeroUsize> {
    (1usize..=12).prop_map(|n| NonZeroUsize::new(n).expect("range starts at 1"))
}

proptest! {
    #[test]
    fn chunk_count_is_ceiling(items in prop::collection::vec(any::<u16>(), 0..200), size in size_strategy()) {
        let chunks = chunk(&items, size);
        prop_assert_eq!(chunks.len(), items.len().div_ceil(size.get()));
        prop_assert_eq!(chunks.len(), chunk_count(items.len(), size));
    }

    #[test]
    fn chunks_are_full_except_last(items in prop::collection::vec(any::<u16>(), 0..200), size in size_strategy()) {
        let chunks = chunk(&items, size);
        for (i, group) in chunks.iter().enumerate() {
            prop_assert!(!group.is_empty());
            prop_assert!(group.len() <= size.get());
            if i + 1 < chunks.len() {
                prop_assert_eq!(group.len(), size.get());
            }
        }
    }

    #[test]
    fn concatenation_restores_input(items in prop::collection::vec(any::<u16>(), 0..200), size in size_strategy()) {
        let flattened: Vec<u16> = chunk(&items, size).into_iter().flatten().collect();
        prop_assert_eq!(flattened, items);
    }
}
