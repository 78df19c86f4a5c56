//! Host configuration for diagnostic emission and termination.
//!
//! Reads environment variables:
//! - `CARLSIM_FATAL_CHANNEL`: `stderr` (default) or `tracing`
//! - `CARLSIM_FATAL_EXIT`: `abort` or a non-zero exit code (default `1`)

use std::str::FromStr;

use crate::error::ReportError;

/// Environment variable selecting the diagnostic [`Channel`].
pub const CHANNEL_ENV: &str = "CARLSIM_FATAL_CHANNEL";

/// Environment variable selecting the [`Termination`].
pub const EXIT_ENV: &str = "CARLSIM_FATAL_EXIT";

/// Exit code used when none is configured.
pub const DEFAULT_EXIT_CODE: i32 = 1;

/// Where the fatal diagnostic goes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Channel {
    /// One line on standard error.
    #[default]
    Stderr,
    /// One `ERROR` event for the host's tracing subscriber.
    Tracing,
}

/// How the process ends after the diagnostic.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Termination {
    /// `std::process::exit` with a non-zero code.
    Exit(i32),
    /// `std::process::abort`, no destructors or exit handlers.
    Abort,
}

impl Default for Termination {
    fn default() -> Self {
        Termination::Exit(DEFAULT_EXIT_CODE)
    }
}

impl FromStr for Channel {
    type Err = ReportError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "stderr" => Ok(Channel::Stderr),
            "tracing" => Ok(Channel::Tracing),
            _ => Err(ReportError::InvalidChannel {
                value: s.to_string(),
            }),
        }
    }
}

impl FromStr for Termination {
    type Err = ReportError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let value = s.trim();
        if value.eq_ignore_ascii_case("abort") {
            return Ok(Termination::Abort);
        }
        let code: i32 = value.parse().map_err(|_| ReportError::InvalidExitCode {
            value: s.to_string(),
        })?;
        if code == 0 {
            return Err(ReportError::SuccessExitCode);
        }
        Ok(Termination::Exit(code))
    }
}

/// Emission channel plus termination mode.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ReporterConfig {
    pub channel: Channel,
    pub termination: Termination,
}

impl ReporterConfig {
    /// Loads the configuration from the process environment.
    pub fn from_env() -> Result<Self, ReportError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Loads the configuration through `lookup`, which maps a variable name to
    /// its value. Unset variables keep their defaults.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ReportError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = ReporterConfig::default();
        if let Some(value) = lookup(CHANNEL_ENV) {
            config.channel = value.parse()?;
        }
        if let Some(value) = lookup(EXIT_ENV) {
            config.termination = value.parse()?;
        }
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn defaults_when_unset() {
        let config = ReporterConfig::from_lookup(lookup(&[])).unwrap();
        assert_eq!(config.channel, Channel::Stderr);
        assert_eq!(config.termination, Termination::Exit(1));
    }

    #[test]
    fn reads_both_settings() {
        let config = ReporterConfig::from_lookup(lookup(&[
            (CHANNEL_ENV, "Tracing"),
            (EXIT_ENV, "abort"),
        ]))
        .unwrap();
        assert_eq!(config.channel, Channel::Tracing);
        assert_eq!(config.termination, Termination::Abort);
    }

    #[test]
    fn custom_exit_code() {
        assert_eq!(" 3 ".parse::<Termination>(), Ok(Termination::Exit(3)));
        assert_eq!("-1".parse::<Termination>(), Ok(Termination::Exit(-1)));
    }

    #[test]
    fn zero_exit_code_is_rejected() {
        assert_eq!("0".parse::<Termination>(), Err(ReportError::SuccessExitCode));
    }

    #[test]
    fn garbage_exit_setting_is_rejected() {
        let result = ReporterConfig::from_lookup(lookup(&[(EXIT_ENV, "later")]));
        match result {
            Err(ReportError::InvalidExitCode { value }) => assert_eq!(value, "later"),
            other => panic!("expected InvalidExitCode, got {other:?}"),
        }
    }

    #[test]
    fn unknown_channel_is_rejected() {
        let result = ReporterConfig::from_lookup(lookup(&[(CHANNEL_ENV, "syslog")]));
        assert!(matches!(result, Err(ReportError::InvalidChannel { .. })));
    }

    #[test]
    fn error_messages() {
        assert_eq!(
            ReportError::SuccessExitCode.to_string(),
            "exit code 0 is reserved for success"
        );
        assert_eq!(
            ReportError::InvalidChannel {
                value: "syslog".into()
            }
            .to_string(),
            "invalid diagnostic channel 'syslog', expected 'stderr' or 'tracing'"
        );
    }
}
