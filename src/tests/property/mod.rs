//! Property-based tests for the pagination engine
//!
//! Property tests verify invariants that should hold for all inputs, rather
//! than testing specific cases.
//!
//! ## Running Property Tests
//!
//! ```sh
//! cargo test property --release
//! ```
//!
//! ## Test Modules
//!
//! - `chunker_props`: content chunking
//!   - Chunk count is `ceil(n / size)`
//!   - Every chunk but the last is full; none is empty
//!   - Concatenating the chunks gives back the input
//!
//! - `spread_props`: spread building
//!   - Length is `p + e + 4`
//!   - Structural spreads sit at fixed positions
//!   - Every generated page id points at an existing chunk
//!   - Table-of-contents anchors are in range
//!
//! - `navigation_props`: the navigation state machine
//!   - The index never leaves `0..len`
//!   - At most one turn is in flight
//!   - The cue plays exactly once per accepted turn
//!
//! By default proptest runs 256 cases per property; set `PROPTEST_CASES` to
//! change it.

mod chunker_props;
mod navigation_props;
mod spread_props;
