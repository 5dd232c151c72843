use persona_domain::config::LoggingConfig;
use persona_logger::{LevelFilter, Logger, LoggerError, LoggerErrorExt};

/// Installs the global subscriber described by `config`.
///
/// `json` formats the rolling file output, so it requires `path`.
///
/// # Errors
/// Returns [`LoggerError::Level`] for an unknown `level`,
/// [`LoggerError::InvalidConfiguration`] for `json` without `path`, or whatever
/// [`persona_logger::LoggerBuilder::init`] reports.
pub fn init_logging(config: &LoggingConfig) -> Result<Logger, LoggerError> {
    if config.json && config.path.is_none() {
        return Err(LoggerError::InvalidConfiguration {
            message: "logging.json requires logging.path".into(),
            context: None,
        });
    }

    let level = config
        .level
        .parse::<LevelFilter>()
        .context(format!("logging.level = {:?}", config.level))?;

    let builder = Logger::builder().name(config.name.as_str()).level(level).console(config.console);
    let builder = match &config.env_filter {
        Some(filter) => builder.env_filter(filter.as_str()),
        None => builder,
    };

    match &config.path {
        Some(path) if config.json => builder.path(path).json().init(),
        Some(path) => builder.path(path).init(),
        None => builder.init(),
    }
}
