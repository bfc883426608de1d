//! Collection integration tests
//!
//! This module tests the Collection traits through forward-only, bidirectional
//! and random-access implementations, the default algorithms built on them,
//! and the borrowed and shared views.

mod helpers;
mod range_replaceable_tests;
mod shared_tests;
mod slice_tests;
