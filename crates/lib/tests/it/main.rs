/*! Integration tests for the params library.
 *
 * This test suite is organized as a single integration test binary
 * following the pattern described by matklad in
 * https://matklad.github.io/2021/02/27/delete-cargo-integration-tests.html
 *
 * The module structure mirrors the main library structure:
 * - field: Tests for the Field value object (construction, hydration, mutate)
 * - param: Tests for the Param value object and its owned FieldMap
 * - list: Tests for the List containers (FieldList, ParamList)
 * - map: Tests for the Map containers (FieldMap, ParamMap)
 */

use tracing_subscriber::EnvFilter;

#[ctor::ctor]
fn init_test_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::from_default_env().add_directive("params=trace".parse().unwrap()),
        )
        .with_test_writer()
        .try_init();
}

mod field;
mod helpers;
mod param;
