//! Tree format integration tests
//!
//! This module tests the `Value` document model, its JSON bridge, and the
//! encoder and decoder options.
