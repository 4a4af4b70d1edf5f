use hello_core::config::{LOG_DIR_ENV, LOG_LEVEL_ENV};
use hello_core::logging::init_from_config;
use hello_core::{init_logging, logging_status, LoggingConfig, LoggingError};

#[test]
fn init_logging_is_idempotent_and_rejects_conflicts() {
    let root = tempfile::tempdir().expect("temp dir");
    let log_dir = root.path().join("logs");
    let other_dir = root.path().join("other");

    let disabled = LoggingConfig::from_lookup(|_| None);
    assert_eq!(init_from_config(&disabled), Ok(false));
    assert!(logging_status().is_none());

    let log_dir_str = log_dir.to_string_lossy().into_owned();
    let config = LoggingConfig::from_lookup(|key| match key {
        LOG_LEVEL_ENV => Some("info".to_string()),
        LOG_DIR_ENV => Some(log_dir_str.clone()),
        _ => None,
    });
    assert_eq!(init_from_config(&config), Ok(true));
    assert!(log_dir.is_dir());

    init_logging("INFO", &log_dir).expect("same config should be idempotent");

    let level_err = init_logging("debug", &log_dir).expect_err("level conflict");
    assert!(matches!(level_err, LoggingError::LevelConflict { .. }));
    assert!(level_err.to_string().contains("refusing to switch"));

    let dir_err = init_logging("info", &other_dir).expect_err("directory conflict");
    assert!(matches!(dir_err, LoggingError::DirConflict { .. }));

    let (level, dir) = logging_status().expect("logging should be active");
    assert_eq!(level, "info");
    assert_eq!(dir, log_dir);
}
