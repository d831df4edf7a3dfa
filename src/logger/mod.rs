use log::LevelFilter;

/// Routes `log` output to stderr. The level comes from the `-v` count only, so
/// the tool reads no environment variables.
pub fn init(verbosity: u8) {
    let level = match verbosity {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        _ => LevelFilter::Debug,
    };

    // a logger installed earlier keeps its configuration
    env_logger::Builder::new()
        .filter_level(level)
        .format_timestamp(None)
        .format_target(false)
        .try_init()
        .ok();
}
