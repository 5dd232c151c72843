use persona::domain::config::LoggingConfig;
use persona::init_logging;
use persona::logger::LoggerError;

#[test]
fn json_without_path_is_rejected() {
    let config = LoggingConfig { json: true, path: None, ..LoggingConfig::default() };
    let err = init_logging(&config).expect_err("json needs a file");

    assert!(matches!(err, LoggerError::InvalidConfiguration { .. }));
    assert!(err.to_string().contains("logging.path"));
}

#[test]
fn second_install_from_config_reports_subscriber_error() {
    let first = LoggingConfig { name: "persona-logging-first".to_owned(), ..LoggingConfig::default() };
    let logger = init_logging(&first).expect("first install");
    assert!(!logger.has_file_output());

    let second = LoggingConfig {
        name: "persona-logging-second".to_owned(),
        level: "debug".to_owned(),
        ..LoggingConfig::default()
    };
    let err = init_logging(&second).expect_err("subscriber already installed");

    assert!(matches!(err, LoggerError::Subscriber { .. }));
    assert!(err.to_string().starts_with("Tracing subscriber error"));
}
