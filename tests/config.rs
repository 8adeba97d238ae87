use redraft::config::{LoggingSettings, Settings};
use redraft::infrastructure::observability::TracingConfig;

#[test]
fn given_default_settings_when_loaded_then_logging_defaults_apply() {
    let settings = Settings::default();

    assert_eq!(settings.logging.level, "info,redraft=debug");
    assert!(!settings.logging.enable_json);
}

#[test]
fn given_logging_settings_when_converted_then_tracing_config_carries_them() {
    let logging = LoggingSettings {
        level: "warn,redraft=trace".to_string(),
        enable_json: true,
    };

    let config = TracingConfig::from(&logging);

    assert_eq!(config.default_filter, "warn,redraft=trace");
    assert!(config.json_format);
}

#[test]
fn given_json_disabled_when_converted_then_tracing_config_uses_plain_format() {
    let logging = LoggingSettings::default();

    let config = TracingConfig::from(&logging);

    assert_eq!(config.default_filter, "info,redraft=debug");
    assert!(!config.json_format);
}
