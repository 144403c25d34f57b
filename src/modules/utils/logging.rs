use env_logger::{Builder, WriteStyle};
use log::{info, warn};
use std::fs::OpenOptions;

use super::config::FormConfig;
use super::error::FormError;

/// Initialize the logging system from the form configuration. Logs go to the
/// configured file, or to stderr when none is set.
pub fn initialize_logging(config: &FormConfig) -> Result<(), FormError> {
    let mut builder = Builder::new();
    builder
        .filter_level(config.level_filter()?)
        .format_timestamp_secs()
        .write_style(WriteStyle::Auto);

    if let Some(path) = &config.log_file {
        // Create or append to log file
        let file = OpenOptions::new().create(true).append(true).open(path)?;
        builder.target(env_logger::Target::Pipe(Box::new(file)));
    }

    builder
        .try_init()
        .map_err(|e| FormError::Logging(e.to_string()))?;

    info!("Logging system initialized");
    Ok(())
}

/// Structured logging for form events
pub fn log_form_event(event_type: &str, success: bool, details: Option<&str>) {
    let timestamp = chrono::Local::now().format("%Y-%m-%d %H:%M:%S").to_string();
    if success {
        info!(
            "Form event: type={}, success=true, timestamp={}, details={:?}",
            event_type, timestamp, details
        );
    } else {
        warn!(
            "Form event: type={}, success=false, timestamp={}, details={:?}",
            event_type, timestamp, details
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_logging_initialization() {
        let dir = tempfile::tempdir().unwrap();
        let log_path = dir.path().join("pwgate.log");
        let config = FormConfig {
            log_file: Some(log_path.clone()),
            log_level: "info".to_string(),
            mask_char: '*',
        };

        let result = initialize_logging(&config);

        // The file is opened before the logger is installed
        assert!(log_path.exists());
        match result {
            Ok(()) => {
                log_form_event("submit", false, Some("Form submission blocked due to validation errors."));
                crate::terminal::handle_check_command("Xyzwvut9!", None);
                let contents = std::fs::read_to_string(&log_path).unwrap();
                assert!(contents.contains("Logging system initialized"));
                assert!(contents.contains("Form event: type=submit, success=false"));
                // The checked value never reaches the log, not even in part
                assert!(contents.contains("Checking password from the command line"));
                assert!(!contents.contains("Xy"));
                assert!(!contents.contains("t9!"));
                // Target and module path are the same here; only one is printed
                assert_eq!(contents.lines().next().unwrap().matches("pwgate::").count(), 1);
            }
            // Verify initialization succeeded or logger was already initialized
            Err(e) => assert!(matches!(e, FormError::Logging(_))),
        }
    }

    #[test]
    fn test_initialize_rejects_bad_level() {
        let config = FormConfig {
            log_file: None,
            log_level: "chatty".to_string(),
            mask_char: '*',
        };
        assert!(matches!(
            initialize_logging(&config),
            Err(FormError::InvalidLogLevel(_))
        ));
    }
}
