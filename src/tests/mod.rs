//! Internal test modules - whitebox tests with crate access
//!
//! Tests here can reach private items and the test-only TuiApp
//! constructors, so they can drive full user flows without a terminal.

// Harness-based acceptance tests
mod acceptance_flows;
