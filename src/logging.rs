use log::LevelFilter;

/// Wires the `log` facade to stderr. The level comes from `LOG_LEVEL`;
/// the default stays at warnings so diagnostics and program output are
/// never interleaved with chatter.
pub fn setup_logger() -> Result<(), fern::InitError> {
    let level = match std::env::var("LOG_LEVEL")
        .unwrap_or_default()
        .to_lowercase()
        .as_str()
    {
        "trace" => LevelFilter::Trace,
        "debug" => LevelFilter::Debug,
        "info" => LevelFilter::Info,
        "warn" => LevelFilter::Warn,
        "error" => LevelFilter::Error,
        _ => LevelFilter::Warn,
    };

    fern::Dispatch::new()
        .level(level)
        .format(|out, message, record| {
            out.finish(format_args!(
                "[{}][{}]: {}",
                record.level(),
                record.target(),
                message,
            ))
        })
        .chain(std::io::stderr())
        .apply()?;
    Ok(())
}
