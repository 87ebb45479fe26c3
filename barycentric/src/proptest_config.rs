use proptest::test_runner::Config;

/// Configuration for proptest tests.
///
/// Disable FS I/O in Miri, where floating point cases are also kept to a handful.
pub(crate) fn proptest_cfg() -> Config {
    if cfg!(miri) {
        Config {
            failure_persistence: None,
            cases: 8,
            ..Config::default()
        }
    } else {
        Config::default()
    }
}
