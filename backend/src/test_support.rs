//! Test utilities for the backend crate.
//!
//! Shared by unit tests (in `src/`) and integration tests (in `tests/`). Only
//! compiled for tests or with the `test-support` feature.

pub mod clock;
pub mod world;

pub use clock::SteppingClock;
pub use world::{TestWorld, test_app};
