use std::time::Duration;

use readiness_core::error::CoreError;
use readiness_core::readiness::ReadinessPolicy;

/// Server configuration loaded from environment variables.
///
/// All fields have defaults suitable for local development.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Bind address (default: `0.0.0.0`).
    pub host: String,
    /// Bind port (default: `3000`).
    pub port: u16,
    /// Allowed CORS origins, parsed from comma-separated `CORS_ORIGINS` env var.
    pub cors_origins: Vec<String>,
    /// HTTP request timeout in seconds (default: `30`).
    pub request_timeout_secs: u64,
}

impl ServerConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var                | Default                    |
    /// |------------------------|----------------------------|
    /// | `HOST`                 | `0.0.0.0`                  |
    /// | `PORT`                 | `3000`                     |
    /// | `CORS_ORIGINS`         | `http://localhost:5173`    |
    /// | `REQUEST_TIMEOUT_SECS` | `30`                       |
    pub fn from_env() -> Self {
        let host = std::env::var("HOST").unwrap_or_else(|_| "0.0.0.0".into());

        let port: u16 = std::env::var("PORT")
            .unwrap_or_else(|_| "3000".into())
            .parse()
            .expect("PORT must be a valid u16");

        let cors_origins = parse_origins(
            &std::env::var("CORS_ORIGINS").unwrap_or_else(|_| "http://localhost:5173".into()),
        );

        let request_timeout_secs: u64 = std::env::var("REQUEST_TIMEOUT_SECS")
            .unwrap_or_else(|_| "30".into())
            .parse()
            .expect("REQUEST_TIMEOUT_SECS must be a valid u64");

        Self {
            host,
            port,
            cors_origins,
            request_timeout_secs,
        }
    }
}

/// Load the readiness policy from environment variables.
///
/// | Env Var                        | Default |
/// |--------------------------------|---------|
/// | `READINESS_CHECK_TIMEOUT_MS`   | `5000`  |
/// | `READINESS_ALLOW_PENDING_A2P`  | `false` |
/// | `READINESS_LOW_LEAD_THRESHOLD` | `0`     |
/// | `READINESS_MIN_WAIT_MINUTES`   | `1`     |
pub fn policy_from_env() -> Result<ReadinessPolicy, CoreError> {
    policy_from_lookup(|key| std::env::var(key).ok())
}

/// Build the policy from an arbitrary key lookup. Unset keys keep their
/// defaults; malformed or out-of-range values are a validation error.
pub fn policy_from_lookup(
    lookup: impl Fn(&str) -> Option<String>,
) -> Result<ReadinessPolicy, CoreError> {
    let defaults = ReadinessPolicy::default();

    ReadinessPolicy {
        check_timeout_ms: parse_or(
            &lookup,
            "READINESS_CHECK_TIMEOUT_MS",
            defaults.check_timeout_ms,
        )?,
        allow_pending_a2p: parse_or(
            &lookup,
            "READINESS_ALLOW_PENDING_A2P",
            defaults.allow_pending_a2p,
        )?,
        low_lead_threshold: parse_or(
            &lookup,
            "READINESS_LOW_LEAD_THRESHOLD",
            defaults.low_lead_threshold,
        )?,
        min_wait_minutes: parse_or(
            &lookup,
            "READINESS_MIN_WAIT_MINUTES",
            defaults.min_wait_minutes,
        )?,
    }
    .validated()
}

/// Reject a policy whose slowest possible run does not finish inside the HTTP
/// request timeout.
///
/// A run is the campaign lookup followed by one concurrent round of checks,
/// each bounded by the check timeout, so it takes at most twice that timeout.
/// Anything longer is cut off by the timeout layer with a bare 408 instead of
/// folding the slow check into the result.
pub fn ensure_run_fits_request(
    config: &ServerConfig,
    policy: &ReadinessPolicy,
) -> Result<(), CoreError> {
    let worst_case = policy.check_timeout() * 2;
    let request_timeout = Duration::from_secs(config.request_timeout_secs);
    if worst_case >= request_timeout {
        return Err(CoreError::Validation(format!(
            "READINESS_CHECK_TIMEOUT_MS={} allows runs of up to {}ms, which does not fit \
             inside REQUEST_TIMEOUT_SECS={}",
            policy.check_timeout_ms,
            worst_case.as_millis(),
            config.request_timeout_secs
        )));
    }
    Ok(())
}

fn parse_or<T>(
    lookup: &impl Fn(&str) -> Option<String>,
    key: &str,
    default: T,
) -> Result<T, CoreError>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    match lookup(key) {
        None => Ok(default),
        Some(raw) => raw
            .trim()
            .parse()
            .map_err(|e| CoreError::Validation(format!("{key}: {e}"))),
    }
}

fn parse_origins(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .collect()
}
