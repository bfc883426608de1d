//! Codable integration tests
//!
//! This module tests user-defined `Encode`/`Decode` implementations and the
//! standard adapters against the tree format. Tests are organized by concern:
//! round trips, keyed container semantics, error reporting, dictionaries and
//! ranges.

mod dictionary_tests;
mod error_tests;
mod range_tests;
mod roundtrip_tests;
