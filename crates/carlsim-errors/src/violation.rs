//! A single failed assertion and its rendered message.
//!
//! A [`Violation`] only lives between the failed check and process
//! termination. It borrows the caller's strings; nothing is stored.

use std::borrow::Cow;
use std::fmt;

use crate::kind::{ErrorKind, PREFIX_SLOT, SUFFIX_SLOT};

/// Location label used when the caller passes an empty location.
pub const UNKNOWN_LOCATION: &str = "<unknown location>";

/// A violated precondition: what went wrong, where, and with which values.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Violation<'a> {
    pub kind: ErrorKind,
    /// The operation or call site that detected the violation.
    pub location: &'a str,
    /// The offending parameter or entity.
    pub prefix: &'a str,
    /// The value or context it conflicted with.
    pub suffix: &'a str,
}

impl<'a> Violation<'a> {
    pub fn new(kind: ErrorKind, location: &'a str, prefix: &'a str, suffix: &'a str) -> Self {
        Self {
            kind,
            location,
            prefix,
            suffix,
        }
    }

    /// The location as printed. Blank locations are accepted and replaced by
    /// [`UNKNOWN_LOCATION`].
    pub fn location_label(&self) -> &'a str {
        if self.location.trim().is_empty() {
            UNKNOWN_LOCATION
        } else {
            self.location
        }
    }

    /// Renders the kind's template with this violation's prefix and suffix.
    ///
    /// Pure function of `(kind, prefix, suffix)`. An empty slot is dropped
    /// together with one neighbouring space. Kinds without a `{suffix}` slot
    /// append a non-empty suffix after the sentence.
    pub fn message(&self) -> String {
        let mut out = fill_template(self.kind.template(), self.prefix, self.suffix);
        if !self.kind.uses_suffix() && !self.suffix.is_empty() {
            if !out.is_empty() {
                out.push(' ');
            }
            out.push_str(self.suffix);
        }
        out
    }
}

/// The diagnostic line: `[USER ERROR <location>] <message>`. Control
/// characters in caller strings are escaped so the line stays one line.
impl fmt::Display for Violation<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[USER ERROR {}] {}",
            escape_control(self.location_label()),
            escape_control(&self.message())
        )
    }
}

/// Replaces control characters (`\n`, `\r`, `\t`, ...) with their Rust escape
/// sequences. Borrows when there is nothing to escape.
pub fn escape_control(s: &str) -> Cow<'_, str> {
    if !s.chars().any(char::is_control) {
        return Cow::Borrowed(s);
    }
    let mut out = String::with_capacity(s.len() + 8);
    for c in s.chars() {
        if c.is_control() {
            out.extend(c.escape_default());
        } else {
            out.push(c);
        }
    }
    Cow::Owned(out)
}

fn fill_template(template: &str, prefix: &str, suffix: &str) -> String {
    let mut out = String::with_capacity(template.len() + prefix.len() + suffix.len());
    let mut rest = template;

    // Only the template is scanned for slots; substituted text is copied as-is.
    while let Some(start) = rest.find('{') {
        let (literal, tail) = rest.split_at(start);
        out.push_str(literal);

        let (value, after) = if let Some(after) = tail.strip_prefix(PREFIX_SLOT) {
            (prefix, after)
        } else if let Some(after) = tail.strip_prefix(SUFFIX_SLOT) {
            (suffix, after)
        } else {
            out.push('{');
            rest = &tail[1..];
            continue;
        };

        if value.is_empty() {
            if out.ends_with(' ') {
                out.pop();
                rest = after;
            } else if out.is_empty() {
                rest = after.strip_prefix(' ').unwrap_or(after);
            } else {
                rest = after;
            }
        } else {
            out.push_str(value);
            rest = after;
        }
    }
    out.push_str(rest);
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render(kind: ErrorKind, prefix: &str, suffix: &str) -> String {
        Violation::new(kind, "test", prefix, suffix).message()
    }

    #[test]
    fn negative_parameter() {
        assert_eq!(
            render(ErrorKind::CannotBeNegative, "tau", ""),
            "tau cannot be negative."
        );
    }

    #[test]
    fn identical_parameters() {
        assert_eq!(
            render(ErrorKind::CannotBeIdentical, "A", "B"),
            "A cannot be identical to B."
        );
    }

    #[test]
    fn unknown_group_id_without_prefix() {
        assert_eq!(
            render(ErrorKind::UnknownGroupId, "", "42"),
            "42 is not a known group ID."
        );
    }

    #[test]
    fn unknown_group_id_with_prefix() {
        assert_eq!(
            render(ErrorKind::UnknownGroupId, "grpId", "42"),
            "grpId 42 is not a known group ID."
        );
    }

    #[test]
    fn range_suffix() {
        assert_eq!(
            render(ErrorKind::MustBeInRange, "p", "[0,1]"),
            "p must be in range [0,1]."
        );
    }

    #[test]
    fn mode_suffix() {
        assert_eq!(
            render(ErrorKind::CanOnlyBeCalledInMode, "setSTDP", "CPU_MODE"),
            "setSTDP can only be called in mode CPU_MODE."
        );
    }

    #[test]
    fn file_path_in_prefix() {
        assert_eq!(
            render(ErrorKind::FileCannotOpen, "results/spk.dat", ""),
            "File results/spk.dat could not be opened."
        );
        assert_eq!(
            render(ErrorKind::FileCannotCreate, "", ""),
            "File could not be created."
        );
    }

    #[test]
    fn extra_suffix_is_appended() {
        assert_eq!(
            render(ErrorKind::IsDeprecated, "setSTDP", "Use setESTDP instead."),
            "setSTDP is deprecated. Use setESTDP instead."
        );
    }

    #[test]
    fn missing_slots_degrade_without_double_spaces() {
        assert_eq!(
            render(ErrorKind::CannotBeIdentical, "A", ""),
            "A cannot be identical to."
        );
        assert_eq!(
            render(ErrorKind::CannotBeNegative, "", ""),
            "cannot be negative."
        );
        assert_eq!(
            render(ErrorKind::UnknownGroupId, "", ""),
            "is not a known group ID."
        );
    }

    #[test]
    fn unknown_kind_fallback() {
        assert_eq!(
            render(ErrorKind::Unknown, "", ""),
            "An unknown error has occurred."
        );
        assert_eq!(
            render(ErrorKind::Unknown, "runNetwork", ""),
            "An unknown error has occurred. runNetwork"
        );
    }

    #[test]
    fn slot_markers_in_user_strings_are_not_expanded() {
        assert_eq!(
            render(ErrorKind::CannotBeIdentical, "{suffix}", "{prefix}"),
            "{suffix} cannot be identical to {prefix}."
        );
    }

    #[test]
    fn diagnostic_line() {
        let v = Violation::new(ErrorKind::CannotBeNegative, "setConductance", "tau", "");
        assert_eq!(
            v.to_string(),
            "[USER ERROR setConductance] tau cannot be negative."
        );
    }

    #[test]
    fn blank_location_gets_label() {
        let v = Violation::new(ErrorKind::CannotBeZero, "  ", "dt", "");
        assert_eq!(v.location_label(), UNKNOWN_LOCATION);
        assert_eq!(
            v.to_string(),
            "[USER ERROR <unknown location>] dt cannot be zero."
        );
    }

    #[test]
    fn newlines_are_escaped_in_the_diagnostic_line() {
        let v = Violation::new(
            ErrorKind::FileCannotOpen,
            "load\nState",
            "spk\n[USER ERROR x] fake.dat",
            "",
        );
        let line = v.to_string();
        assert_eq!(line.lines().count(), 1);
        assert_eq!(
            line,
            r"[USER ERROR load\nState] File spk\n[USER ERROR x] fake.dat could not be opened."
        );
        // The message itself keeps the caller's text.
        assert_eq!(v.message(), "File spk\n[USER ERROR x] fake.dat could not be opened.");
    }

    #[test]
    fn escape_control_borrows_plain_text() {
        assert!(matches!(escape_control("tau"), Cow::Borrowed("tau")));
        assert_eq!(escape_control("a\tb\r"), r"a\tb\r");
    }
}
