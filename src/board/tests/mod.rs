//! Tests for the board module.

mod fixtures;

mod drag_tests;
mod filter_tests;
mod persistence_tests;
