//! Loading the facade configuration from disk.

use std::io::Write;
use std::sync::Arc;

use tempfile::NamedTempFile;
use tfm_observability::config::{load_config, ConfigError, LogFormat};
use tfm_observability::{log_debug, MemorySink, RecordingMetrics, TfmFacade};

fn write_config(content: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().expect("temp file");
    file.write_all(content.as_bytes()).expect("write config");
    file
}

#[test]
fn test_load_verbose_config() {
    let file = write_config(
        r#"
        verbose = true

        [observability]
        log_format = "json"
        metrics_enabled = false
        "#,
    );

    let config = load_config(file.path()).expect("valid config");

    assert!(config.verbose);
    assert_eq!(config.observability.log_format, LogFormat::Json);
    assert!(!config.observability.metrics_enabled);
    assert_eq!(config.observability.metrics_address, None);
}

#[test]
fn test_missing_file_is_io_error() {
    let dir = tempfile::tempdir().expect("temp dir");
    let err = load_config(&dir.path().join("absent.toml")).unwrap_err();
    assert!(matches!(err, ConfigError::Io(_)));
}

#[test]
fn test_unknown_log_format_is_parse_error() {
    let file = write_config("[observability]\nlog_format = \"xml\"\n");
    let err = load_config(file.path()).unwrap_err();
    assert!(matches!(err, ConfigError::Parse(_)));
}

#[test]
fn test_loaded_verbosity_drives_debug_output() {
    let file = write_config("verbose = true\n");
    let config = load_config(file.path()).expect("valid config");

    let sink = MemorySink::new();
    let facade = TfmFacade::new(
        config.verbose,
        Arc::new(sink.clone()),
        Arc::new(RecordingMetrics::new()),
    );
    log_debug!(facade, "cache", "warm");

    assert_eq!(
        sink.lines(),
        vec![r#"TFMLOG:{"level":"DEBUG_INFO ","details":"cache warm"}"#]
    );
}
