use tracing_subscriber::filter::ParseError;
use tracing_subscriber::EnvFilter;

use crate::config::TelemetryConfig;

/// Failure while installing the tracing subscriber at startup.
#[derive(Debug, thiserror::Error)]
pub enum TelemetryError {
    #[error("invalid log filter '{value}'")]
    Filter {
        value: String,
        #[source]
        source: ParseError,
    },
    #[error("tracing subscriber already installed: {0}")]
    AlreadyInstalled(Box<dyn std::error::Error + Send + Sync>),
}

/// Install the global subscriber. An explicit `RUST_LOG` wins; otherwise the
/// configured level is scoped to the landscope crates while dependencies stay
/// at `warn`, so request noise from the HTTP stack does not drown scoring logs.
pub fn init(config: &TelemetryConfig) -> Result<(), TelemetryError> {
    let env_filter = match EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) => {
            let directives = scoped_directives(&config.log_level);
            EnvFilter::try_new(&directives).map_err(|source| TelemetryError::Filter {
                value: directives,
                source,
            })?
        }
    };

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(false)
        .compact()
        .with_ansi(false)
        .try_init()
        .map_err(TelemetryError::AlreadyInstalled)
}

/// Expand a bare level (`info`, `debug`, ...) into per-crate directives. A
/// value that already contains directives is passed through untouched.
fn scoped_directives(log_level: &str) -> String {
    if log_level.contains('=') || log_level.contains(',') {
        return log_level.to_string();
    }
    format!("warn,landscope={log_level},landscope_api={log_level}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bare_level_is_scoped_to_the_landscope_crates() {
        let directives = scoped_directives("debug");
        assert_eq!(directives, "warn,landscope=debug,landscope_api=debug");
        assert!(EnvFilter::try_new(&directives).is_ok());
    }

    #[test]
    fn explicit_directives_pass_through_unchanged() {
        let directives = scoped_directives("info,hyper=warn");
        assert_eq!(directives, "info,hyper=warn");
    }

    #[test]
    fn malformed_filter_reports_the_offending_value() {
        let directives = scoped_directives("landscope=notalevel");
        let err = EnvFilter::try_new(&directives)
            .map_err(|source| TelemetryError::Filter {
                value: directives.clone(),
                source,
            })
            .expect_err("unknown level name must be rejected");
        assert!(err.to_string().contains("landscope=notalevel"));
    }
}
