use log::LevelFilter;

/// Initialize `env_logger` from the `-v` count. `RUST_LOG` still overrides.
///
/// Initialization happens at most once per process; later calls are ignored.
pub fn init(verbosity: u8) {
    let level = match verbosity {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };

    _ = env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .try_init();
}
