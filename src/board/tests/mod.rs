//! Board module tests.
//!
//! Tests are organized into separate files by category:
//! - `perft.rs` - Node counts for move generation correctness
//! - `apply_move.rs` - Move application and FEN bookkeeping
//! - `edge_cases.rs` - Check, mate, stalemate and special moves
//! - `proptest.rs` - Property-based tests

mod proptest;
