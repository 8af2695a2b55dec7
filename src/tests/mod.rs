//! Internal test modules - whitebox tests with crate access
//!
//! Tests here drive the pager through the acceptance harness and observe
//! only what lands on the `TestBackend`.
