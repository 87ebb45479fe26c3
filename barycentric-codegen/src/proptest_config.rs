use proptest::test_runner::Config;

/// Configuration for proptest tests.
///
/// The input space (alphabets of at most 26 symbols) is small, so fewer cases than
/// the default still cover it well. Disable FS I/O in Miri.
pub(crate) fn proptest_cfg() -> Config {
    #[cfg(miri)]
    {
        Config {
            failure_persistence: None,
            cases: 5,
            ..Config::default()
        }
    }
    #[cfg(not(miri))]
    {
        Config {
            cases: 64,
            ..Config::default()
        }
    }
}
