//! Stompboard End-to-End Test Infrastructure
//!
//! This crate provides integration tests for the generation pipeline:
//!
//! - Generation: pedal records -> model files, with per-record failures
//!   skipped rather than aborting the batch
//! - **Determinism**: the same records produce byte-identical models
//! - Properties: parser, layout, and slug invariants under proptest
//!
//! ## Running Tests
//!
//! ```bash
//! cargo test -p stompboard-tests
//! ```

pub mod determinism;
pub mod fixtures;

// Re-export commonly used items
pub use determinism::{compute_hash, verify_determinism, DeterminismResult, DiffInfo};
pub use fixtures::PedalsFixture;
