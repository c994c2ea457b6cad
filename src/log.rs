use log::LevelFilter;

/// Initialize logging for the cryptarith binaries.
///
/// # Behavior
/// - `Debug` level if `debug_enabled` is true, otherwise `Warn` so stderr stays
///   quiet and stdout carries only the answer.
/// - `RUST_LOG`, when set, overrides both.
pub fn init_logger(debug_enabled: bool) {
    use std::env;
    let level = if debug_enabled {
        LevelFilter::Debug
    } else {
        LevelFilter::Warn
    };

    let mut builder = env_logger::Builder::new();
    builder
        .filter(None, level)
        .format_timestamp(None)
        .format_module_path(false)
        .format_target(false);

    // Let RUST_LOG override our defaults if explicitly set
    if let Ok(spec) = env::var("RUST_LOG") {
        builder.parse_filters(&spec);
    }

    // A second init (e.g. from a test harness) keeps the first logger
    if builder.try_init().is_ok() {
        log::debug!("Native logger initialized at {level:?} level");
    }
}
