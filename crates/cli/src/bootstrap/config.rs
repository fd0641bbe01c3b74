use ferrous_tunnel_domain::{CliOverrides, Config};
use tracing::info;

pub fn load_config(
    config_path: Option<&str>,
    cli_overrides: CliOverrides,
) -> anyhow::Result<Config> {
    let config = Config::load(config_path, cli_overrides)?;
    config.validate()?;
    Ok(config)
}

/// Call once logging is initialized.
pub fn log_config(config: &Config, config_path: Option<&str>) {
    info!(
        config_file = config_path.unwrap_or("default"),
        log_level = %config.logging.level,
        telemetry = config.telemetry.enabled,
        http_metrics = config.telemetry.http_metrics,
        history_capacity = config.history.capacity,
        "Configuration loaded"
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::{self, Write};
    use std::sync::{Arc, Mutex};

    #[derive(Clone, Default)]
    struct CapturedLogs(Arc<Mutex<Vec<u8>>>);

    impl CapturedLogs {
        fn contents(&self) -> String {
            String::from_utf8_lossy(&self.0.lock().unwrap()).into_owned()
        }
    }

    impl Write for CapturedLogs {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn test_load_config_defaults() {
        let config = load_config(None, CliOverrides::default()).unwrap();
        assert_eq!(config.history.capacity, 100);
        assert_eq!(config.logging.level, "info");
    }

    #[test]
    fn test_load_config_rejects_invalid_override() {
        let result = load_config(
            None,
            CliOverrides {
                log_level: Some("loud".to_string()),
            },
        );
        assert!(result.is_err());
    }

    #[test]
    fn test_config_summary_reaches_installed_subscriber() {
        let logs = CapturedLogs::default();
        let writer = logs.clone();
        let subscriber = tracing_subscriber::fmt()
            .with_writer(move || writer.clone())
            .with_ansi(false)
            .finish();

        let config = load_config(None, CliOverrides::default()).unwrap();
        tracing::subscriber::with_default(subscriber, || log_config(&config, None));

        let output = logs.contents();
        assert!(output.contains("Configuration loaded"));
        assert!(output.contains("config_file=\"default\"") || output.contains("config_file=default"));
        assert!(output.contains("history_capacity=100"));
    }
}
