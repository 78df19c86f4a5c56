//! Assertion entry points and the fatal path.
//!
//! [`assert_true`] is the call used throughout the simulator. When the
//! condition holds it returns without touching anything. When it fails,
//! [`throw_error`] builds a [`Violation`], emits exactly one diagnostic and
//! terminates the whole process. Neither function hands an error back to the
//! caller.

use std::io::{self, Write};
use std::process;

use crate::config::{Channel, ReporterConfig, Termination};
use crate::kind::ErrorKind;
use crate::violation::{escape_control, Violation};

/// Tracing target of the diagnostic event on [`Channel::Tracing`].
pub const TRACING_TARGET: &str = "carlsim::user_error";

/// Terminates the process unless `condition` holds.
///
/// `location` names the calling operation; `prefix` and `suffix` fill the
/// kind's message template (pass `""` to leave a slot empty).
#[inline]
pub fn assert_true(condition: bool, kind: ErrorKind, location: &str, prefix: &str, suffix: &str) {
    if condition {
        return;
    }
    throw_error(location, kind, prefix, suffix)
}

/// Emits the diagnostic for `kind` and terminates the process.
///
/// Host configuration is read from the environment here, on the failure path
/// only. Invalid settings fall back to the defaults.
#[cold]
#[inline(never)]
pub fn throw_error(location: &str, kind: ErrorKind, prefix: &str, suffix: &str) -> ! {
    Reporter::from_env().throw(Violation::new(kind, location, prefix, suffix))
}

/// A configured reporter. Holds no state besides its [`ReporterConfig`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Reporter {
    config: ReporterConfig,
}

impl Reporter {
    pub fn new(config: ReporterConfig) -> Self {
        Self { config }
    }

    /// Builds a reporter from the environment, falling back to defaults (and
    /// logging a warning) when the settings cannot be parsed.
    pub fn from_env() -> Self {
        match ReporterConfig::from_env() {
            Ok(config) => Self::new(config),
            Err(err) => {
                tracing::warn!(error = %err, "invalid fatal-error configuration, using defaults");
                Self::default()
            }
        }
    }

    /// Same contract as the free [`assert_true`], with this reporter's
    /// configuration.
    #[inline]
    pub fn assert_true(
        &self,
        condition: bool,
        kind: ErrorKind,
        location: &str,
        prefix: &str,
        suffix: &str,
    ) {
        if condition {
            return;
        }
        self.throw(Violation::new(kind, location, prefix, suffix))
    }

    /// Emits `violation` and terminates.
    #[cold]
    pub fn throw(&self, violation: Violation<'_>) -> ! {
        self.emit(&violation);
        self.terminate()
    }

    /// Sends the diagnostic to the configured channel. The tracing channel
    /// falls back to stderr when no subscriber has been installed.
    pub fn emit(&self, violation: &Violation<'_>) {
        match self.effective_channel() {
            Channel::Stderr => {
                let stderr = io::stderr();
                let mut out = stderr.lock();
                // Nothing sensible to do if stderr is gone; termination follows.
                let _ = write_diagnostic(violation, &mut out);
            }
            Channel::Tracing => {
                tracing::error!(
                    target: TRACING_TARGET,
                    location = %escape_control(violation.location_label()),
                    kind = %violation.kind,
                    "{}",
                    escape_control(&violation.message())
                );
            }
        }
    }

    /// The channel the next diagnostic will actually go to.
    pub fn effective_channel(&self) -> Channel {
        match self.config.channel {
            Channel::Tracing if !tracing::dispatcher::has_been_set() => Channel::Stderr,
            channel => channel,
        }
    }

    fn terminate(&self) -> ! {
        match self.config.termination {
            Termination::Exit(code) => process::exit(code),
            Termination::Abort => process::abort(),
        }
    }
}

/// Writes the one-line diagnostic for `violation` and flushes `out`.
pub fn write_diagnostic<W: Write>(violation: &Violation<'_>, out: &mut W) -> io::Result<()> {
    writeln!(out, "{violation}")?;
    out.flush()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn holding_condition_returns() {
        assert_true(true, ErrorKind::CannotBeNegative, "setConductance", "tau", "");
        assert_true(true, ErrorKind::Unknown, "", "", "");
    }

    #[test]
    fn holding_condition_returns_for_every_kind() {
        let reporter = Reporter::new(ReporterConfig {
            channel: Channel::Tracing,
            termination: Termination::Abort,
        });
        for kind in ErrorKind::ALL {
            reporter.assert_true(true, kind, "connect", "A", "B");
        }
    }

    #[test]
    fn diagnostic_is_one_line() {
        let violation = Violation::new(ErrorKind::CannotBeIdentical, "connect", "A", "B");
        let mut buf = Vec::new();
        write_diagnostic(&violation, &mut buf).unwrap();

        let text = String::from_utf8(buf).unwrap();
        assert_eq!(text, "[USER ERROR connect] A cannot be identical to B.\n");
        assert_eq!(text.lines().count(), 1);
    }

    #[test]
    fn default_reporter_config() {
        assert_eq!(Reporter::default(), Reporter::new(ReporterConfig::default()));
        assert_eq!(Reporter::default().effective_channel(), Channel::Stderr);
    }

    #[test]
    fn tracing_without_subscriber_falls_back_to_stderr() {
        // No global subscriber is installed in this test binary.
        let reporter = Reporter::new(ReporterConfig {
            channel: Channel::Tracing,
            termination: Termination::Exit(1),
        });
        assert_eq!(reporter.effective_channel(), Channel::Stderr);
    }
}
