//! Tracing setup for the eligibility service. A bare level in the
//! configuration is scoped to this workspace's crates so dependency noise
//! stays out of the default output; full directive sets pass through.

use crate::config::TelemetryConfig;
use std::fmt;
use tracing_subscriber::filter::ParseError;
use tracing_subscriber::EnvFilter;

#[derive(Debug)]
pub enum TelemetryError {
    EnvFilter { value: String, source: ParseError },
    Subscriber(Box<dyn std::error::Error + Send + Sync>),
}

impl fmt::Display for TelemetryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TelemetryError::EnvFilter { value, .. } => {
                write!(
                    f,
                    "invalid log level/filter '{}': unable to build EnvFilter",
                    value
                )
            }
            TelemetryError::Subscriber(err) => write!(f, "telemetry error: {err}"),
        }
    }
}

impl std::error::Error for TelemetryError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            TelemetryError::EnvFilter { source, .. } => Some(source),
            TelemetryError::Subscriber(err) => Some(&**err),
        }
    }
}

fn directives(log_level: &str) -> String {
    let trimmed = log_level.trim();
    if trimmed.contains('=') || trimmed.contains(',') {
        trimmed.to_string()
    } else {
        format!("seva_setu={trimmed},seva_setu_api={trimmed}")
    }
}

fn config_filter(config: &TelemetryConfig) -> Result<EnvFilter, TelemetryError> {
    let value = directives(&config.log_level);
    EnvFilter::try_new(&value).map_err(|source| TelemetryError::EnvFilter { value, source })
}

/// Install the global subscriber. An explicit `RUST_LOG` wins over the
/// configured level.
pub fn init(config: &TelemetryConfig) -> Result<(), TelemetryError> {
    let env_filter = match EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) => config_filter(config)?,
    };

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(false)
        .compact()
        .with_ansi(false)
        .try_init()
        .map_err(TelemetryError::Subscriber)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bare_level_is_scoped_to_the_workspace_crates() {
        assert_eq!(directives("debug"), "seva_setu=debug,seva_setu_api=debug");
        assert_eq!(directives(" info "), "seva_setu=info,seva_setu_api=info");
    }

    #[test]
    fn explicit_directive_sets_pass_through() {
        assert_eq!(
            directives("seva_setu::eligibility=trace,info"),
            "seva_setu::eligibility=trace,info"
        );
        assert_eq!(directives("warn,hyper=off"), "warn,hyper=off");
    }

    #[test]
    fn configured_level_builds_a_filter() {
        let config = TelemetryConfig {
            log_level: "debug".to_string(),
        };
        let filter = config_filter(&config).expect("valid level");
        let rendered = filter.to_string();
        assert!(rendered.contains("seva_setu=debug"));
        assert!(rendered.contains("seva_setu_api=debug"));
    }

    #[test]
    fn invalid_level_reports_the_offending_value() {
        let config = TelemetryConfig {
            log_level: "shouting".to_string(),
        };
        let err = config_filter(&config).expect_err("nonsense level must fail");
        assert!(err.to_string().contains("seva_setu=shouting"));
    }
}
