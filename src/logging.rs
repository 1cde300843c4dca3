use log::LevelFilter;

/// Initialize logging for the command-line tool.
///
/// # Behavior
/// - Defaults to `Warn` so log lines do not tear through the TUI.
/// - `debug_enabled` raises the level to `Debug`.
/// - `RUST_LOG`, when set, overrides both.
///
/// Calling this more than once is harmless; later calls are ignored.
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

    if let Ok(spec) = env::var("RUST_LOG") {
        builder.parse_filters(&spec);
    }

    if builder.try_init().is_ok() {
        log::debug!("Logger initialized at {level:?} level");
    }
}
