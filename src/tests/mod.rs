//! Native unit tests for the gallery core.
//!
//! The controller, notes store, and random selection are exercised against
//! in-memory doubles; DOM behavior is covered by the thin `wasm` module
//! implementing the same seams.

mod support;
