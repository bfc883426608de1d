/*! Integration tests for Carton.
 *
 * This test suite is organized as a single integration test binary
 * following the pattern described by matklad in
 * https://matklad.github.io/2021/02/27/delete-cargo-integration-tests.html
 *
 * The module structure mirrors the main library structure:
 * - codable: Tests for user-defined Encode/Decode types, the standard adapters
 *   (Option, sequences, sets, maps, ranges) and the error taxonomy
 * - collection: Tests for the Collection traits, their default algorithms and views
 * - tree: Tests for the in-memory tree format, its options and the JSON bridge
 */

use tracing_subscriber::EnvFilter;

#[ctor::ctor]
fn init_test_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("carton=info".parse().unwrap()))
        .with_test_writer()
        .try_init();
}

mod codable;
mod collection;
mod tree;
