use env_logger::Env;

/// Install the process logger.
///
/// `RUST_LOG` wins over `default_filter`. Safe to call more than once; only the
/// first call installs anything.
pub fn init(default_filter: &str) {
    let _ = env_logger::Builder::from_env(Env::default().default_filter_or(default_filter))
        .format_timestamp_millis()
        .try_init();
}

/// Logger for unit/integration tests: captured by the test harness.
pub fn init_for_tests() {
    let _ = env_logger::builder()
        .is_test(true)
        .filter_level(log::LevelFilter::Debug)
        .try_init();
}
