//! Property-based tests for Spread Building
//!
//! Tests invariants:
//! - Sequence length is `p + e + 4`
//! - Cover, summary, graph and contact spreads sit at fixed positions
//! - Generated spreads carry consecutive chunk indices in collection order
//! - Every generated page resolves to a non-empty chunk of a loaded book
//! - Table-of-contents anchors stay inside the sequence

use proptest::prelude::*;

use crate::core::book::PageContent;
use crate::core::spreads::{build_spreads, spread_count, Collection, PageId, Section, Spread};
use crate::tests::common::book;

proptest! {
    #[test]
    fn length_is_chunks_plus_four(p in 0usize..30, e in 0usize..30) {
        let spreads = build_spreads(&vec![(); p], &vec![(); e]);
        prop_assert_eq!(spreads.len(), p + e + 4);
        prop_assert_eq!(spreads.len(), spread_count(p, e));
    }

    #[test]
    fn structural_positions(p in 0usize..30, e in 0usize..30) {
        let spreads = build_spreads(&vec![(); p], &vec![(); e]);
        let n = spreads.len();
        prop_assert_eq!(spreads[0], Spread::COVER);
        prop_assert_eq!(spreads[1], Spread::SUMMARY);
        prop_assert_eq!(spreads[n - 2], Spread::GRAPH);
        prop_assert_eq!(spreads[n - 1], Spread::CONTACT);
    }

    #[test]
    fn generated_spreads_in_chunk_order(p in 0usize..30, e in 0usize..30) {
        let spreads = build_spreads(&vec![(); p], &vec![(); e]);
        for i in 0..p {
            prop_assert_eq!(spreads[2 + i], Spread::generated(Collection::Projects, i));
        }
        for j in 0..e {
            prop_assert_eq!(spreads[2 + p + j], Spread::generated(Collection::Experiences, j));
        }
    }

    #[test]
    fn generated_pages_resolve_to_cards(projects in 0usize..40, experiences in 0usize..40) {
        let book = book(projects, experiences);
        for spread in book.spreads() {
            // Both pages of a generated spread share one chunk
            if let PageId::Generated { .. } = spread.left {
                let left = book.resolve(spread.left);
                let right = book.resolve(spread.right);
                let (
                    PageContent::Cards { chunk: left_chunk, page_number: left_number, .. },
                    PageContent::Cards { chunk: right_chunk, page_number: right_number, .. },
                ) = (left, right) else {
                    return Err(TestCaseError::fail("generated page did not resolve to cards"));
                };
                prop_assert!(!left_chunk.is_empty());
                prop_assert_eq!(left_chunk, right_chunk);
                prop_assert_eq!(left_number, right_number);
                prop_assert_eq!(
                    left.visible_cards().len() + right.visible_cards().len(),
                    left_chunk.len()
                );
            } else {
                prop_assert!(spread.right.is_structural());
            }
        }
    }

    #[test]
    fn anchors_in_range(p in 0usize..30, e in 0usize..30) {
        let len = spread_count(p, e);
        for section in Section::TABLE_OF_CONTENTS {
            prop_assert!(section.anchor(p, e) < len);
        }
        prop_assert_eq!(Section::Contact.anchor(p, e), len - 1);
    }
}
