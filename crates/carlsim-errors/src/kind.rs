//! The closed taxonomy of user errors.
//!
//! Each [`ErrorKind`] names the *nature* of a violated precondition, not the
//! specific message. The message comes from a per-kind template with up to two
//! slots:
//!
//! - `{prefix}` names the offending parameter or entity (`"tau"`, `"grpId"`,
//!   a file path).
//! - `{suffix}` names what it conflicted with (a mode, a range, another
//!   parameter).
//!
//! The kind-to-template mapping is an exhaustive `match`, so a new kind cannot
//! be added without its template.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ReportError;

/// Slot marker substituted with the caller's prefix string.
pub const PREFIX_SLOT: &str = "{prefix}";

/// Slot marker substituted with the caller's suffix string.
pub const SUFFIX_SLOT: &str = "{suffix}";

/// All categories of precondition violation, in alphabetical order.
///
/// Serializes as its SCREAMING_SNAKE_CASE name, which is also what
/// [`ErrorKind::name`] returns and what [`FromStr`] accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorKind {
    /// Keyword ALL is not allowed for this variable.
    AllNotAllowed,
    /// Function can only be called in a certain mode.
    CanOnlyBeCalledInMode,
    /// Function can only be called in a certain state.
    CanOnlyBeCalledInState,
    /// Function cannot be called in a certain mode.
    CannotBeCalledInMode,
    /// Function cannot be called in a certain state.
    CannotBeCalledInState,
    /// Two parameters cannot be identical.
    CannotBeIdentical,
    /// Parameter cannot be negative (zero is allowed).
    CannotBeNegative,
    /// Parameter cannot be NULL.
    CannotBeNull,
    /// Parameter cannot be larger than some value.
    CannotBeLarger,
    /// Parameter cannot be smaller than some value.
    CannotBeSmaller,
    /// Switch cannot be off.
    CannotBeOff,
    /// Switch cannot be on.
    CannotBeOn,
    /// Parameter cannot be positive (zero is allowed).
    CannotBePositive,
    /// Parameter cannot be set to some value.
    CannotBeSetTo,
    /// Parameter cannot be of type UNKNOWN.
    CannotBeUnknown,
    /// Parameter cannot be zero.
    CannotBeZero,
    /// Compartmental connection exceeds the group's limit.
    ExceedCompConnectionLimit,
    /// A file could not be created.
    FileCannotCreate,
    /// A file could not be opened.
    FileCannotOpen,
    /// Deprecated function.
    IsDeprecated,
    /// Something must be called first.
    MustBeCalled,
    /// Two parameters must be identical.
    MustBeIdentical,
    /// Parameter must be in some range.
    MustBeInRange,
    /// Logger must be in custom mode.
    MustBeLoggerCustom,
    /// Parameter must be negative.
    MustBeNegative,
    /// Switch must be off.
    MustBeOff,
    /// Switch must be on.
    MustBeOn,
    /// Parameter must be positive.
    MustBePositive,
    /// Parameter must be set to some value.
    MustBeSetTo,
    /// Parameter must be larger than some value.
    MustBeLarger,
    /// Parameter must be smaller than some value.
    MustBeSmaller,
    /// Parameter must be zero.
    MustBeZero,
    /// Several parameters must share a sign.
    MustHaveSameSign,
    /// Function cannot be called once the network has run.
    NetworkAlreadyRun,
    /// Compartmental connection duplicates or reverses an existing one.
    RepeatedCompConnection,
    /// Two groups cannot share a synaptic and a compartmental connection.
    SynapseCompConnection,
    /// Group id is not known to the network.
    UnknownGroupId,
    /// Catch-all for violations no other kind describes.
    Unknown,
    /// Function cannot be applied to this neuron type.
    WrongNeuronType,
}

impl ErrorKind {
    /// Every kind, in declaration order.
    pub const ALL: [ErrorKind; 39] = [
        ErrorKind::AllNotAllowed,
        ErrorKind::CanOnlyBeCalledInMode,
        ErrorKind::CanOnlyBeCalledInState,
        ErrorKind::CannotBeCalledInMode,
        ErrorKind::CannotBeCalledInState,
        ErrorKind::CannotBeIdentical,
        ErrorKind::CannotBeNegative,
        ErrorKind::CannotBeNull,
        ErrorKind::CannotBeLarger,
        ErrorKind::CannotBeSmaller,
        ErrorKind::CannotBeOff,
        ErrorKind::CannotBeOn,
        ErrorKind::CannotBePositive,
        ErrorKind::CannotBeSetTo,
        ErrorKind::CannotBeUnknown,
        ErrorKind::CannotBeZero,
        ErrorKind::ExceedCompConnectionLimit,
        ErrorKind::FileCannotCreate,
        ErrorKind::FileCannotOpen,
        ErrorKind::IsDeprecated,
        ErrorKind::MustBeCalled,
        ErrorKind::MustBeIdentical,
        ErrorKind::MustBeInRange,
        ErrorKind::MustBeLoggerCustom,
        ErrorKind::MustBeNegative,
        ErrorKind::MustBeOff,
        ErrorKind::MustBeOn,
        ErrorKind::MustBePositive,
        ErrorKind::MustBeSetTo,
        ErrorKind::MustBeLarger,
        ErrorKind::MustBeSmaller,
        ErrorKind::MustBeZero,
        ErrorKind::MustHaveSameSign,
        ErrorKind::NetworkAlreadyRun,
        ErrorKind::RepeatedCompConnection,
        ErrorKind::SynapseCompConnection,
        ErrorKind::UnknownGroupId,
        ErrorKind::Unknown,
        ErrorKind::WrongNeuronType,
    ];

    /// Stable SCREAMING_SNAKE_CASE name.
    pub fn name(self) -> &'static str {
        match self {
            ErrorKind::AllNotAllowed => "ALL_NOT_ALLOWED",
            ErrorKind::CanOnlyBeCalledInMode => "CAN_ONLY_BE_CALLED_IN_MODE",
            ErrorKind::CanOnlyBeCalledInState => "CAN_ONLY_BE_CALLED_IN_STATE",
            ErrorKind::CannotBeCalledInMode => "CANNOT_BE_CALLED_IN_MODE",
            ErrorKind::CannotBeCalledInState => "CANNOT_BE_CALLED_IN_STATE",
            ErrorKind::CannotBeIdentical => "CANNOT_BE_IDENTICAL",
            ErrorKind::CannotBeNegative => "CANNOT_BE_NEGATIVE",
            ErrorKind::CannotBeNull => "CANNOT_BE_NULL",
            ErrorKind::CannotBeLarger => "CANNOT_BE_LARGER",
            ErrorKind::CannotBeSmaller => "CANNOT_BE_SMALLER",
            ErrorKind::CannotBeOff => "CANNOT_BE_OFF",
            ErrorKind::CannotBeOn => "CANNOT_BE_ON",
            ErrorKind::CannotBePositive => "CANNOT_BE_POSITIVE",
            ErrorKind::CannotBeSetTo => "CANNOT_BE_SET_TO",
            ErrorKind::CannotBeUnknown => "CANNOT_BE_UNKNOWN",
            ErrorKind::CannotBeZero => "CANNOT_BE_ZERO",
            ErrorKind::ExceedCompConnectionLimit => "EXCEED_COMP_CONNECTION_LIMIT",
            ErrorKind::FileCannotCreate => "FILE_CANNOT_CREATE",
            ErrorKind::FileCannotOpen => "FILE_CANNOT_OPEN",
            ErrorKind::IsDeprecated => "IS_DEPRECATED",
            ErrorKind::MustBeCalled => "MUST_BE_CALLED",
            ErrorKind::MustBeIdentical => "MUST_BE_IDENTICAL",
            ErrorKind::MustBeInRange => "MUST_BE_IN_RANGE",
            ErrorKind::MustBeLoggerCustom => "MUST_BE_LOGGER_CUSTOM",
            ErrorKind::MustBeNegative => "MUST_BE_NEGATIVE",
            ErrorKind::MustBeOff => "MUST_BE_OFF",
            ErrorKind::MustBeOn => "MUST_BE_ON",
            ErrorKind::MustBePositive => "MUST_BE_POSITIVE",
            ErrorKind::MustBeSetTo => "MUST_BE_SET_TO",
            ErrorKind::MustBeLarger => "MUST_BE_LARGER",
            ErrorKind::MustBeSmaller => "MUST_BE_SMALLER",
            ErrorKind::MustBeZero => "MUST_BE_ZERO",
            ErrorKind::MustHaveSameSign => "MUST_HAVE_SAME_SIGN",
            ErrorKind::NetworkAlreadyRun => "NETWORK_ALREADY_RUN",
            ErrorKind::RepeatedCompConnection => "REPEATED_COMP_CONNECTION",
            ErrorKind::SynapseCompConnection => "SYNAPSE_COMP_CONNECTION",
            ErrorKind::UnknownGroupId => "UNKNOWN_GROUP_ID",
            ErrorKind::Unknown => "UNKNOWN",
            ErrorKind::WrongNeuronType => "WRONG_NEURON_TYPE",
        }
    }

    /// Message template with `{prefix}` / `{suffix}` slots.
    pub fn template(self) -> &'static str {
        match self {
            ErrorKind::AllNotAllowed => "{prefix} cannot be ALL.",
            ErrorKind::CanOnlyBeCalledInMode => "{prefix} can only be called in mode {suffix}.",
            ErrorKind::CanOnlyBeCalledInState => "{prefix} can only be called in state {suffix}.",
            ErrorKind::CannotBeCalledInMode => "{prefix} cannot be called in mode {suffix}.",
            ErrorKind::CannotBeCalledInState => "{prefix} cannot be called in state {suffix}.",
            ErrorKind::CannotBeIdentical => "{prefix} cannot be identical to {suffix}.",
            ErrorKind::CannotBeNegative => "{prefix} cannot be negative.",
            ErrorKind::CannotBeNull => "{prefix} cannot be NULL.",
            ErrorKind::CannotBeLarger => "{prefix} cannot be larger than {suffix}.",
            ErrorKind::CannotBeSmaller => "{prefix} cannot be smaller than {suffix}.",
            ErrorKind::CannotBeOff => "{prefix} cannot be off at this point.",
            ErrorKind::CannotBeOn => "{prefix} cannot be on at this point.",
            ErrorKind::CannotBePositive => "{prefix} cannot be positive.",
            ErrorKind::CannotBeSetTo => "{prefix} cannot be set to {suffix}.",
            ErrorKind::CannotBeUnknown => "{prefix} cannot be of type UNKNOWN.",
            ErrorKind::CannotBeZero => "{prefix} cannot be zero.",
            ErrorKind::ExceedCompConnectionLimit => {
                "{prefix} exceeds the compartmental connection limit of {suffix}."
            }
            ErrorKind::FileCannotCreate => "File {prefix} could not be created.",
            ErrorKind::FileCannotOpen => "File {prefix} could not be opened.",
            ErrorKind::IsDeprecated => "{prefix} is deprecated.",
            ErrorKind::MustBeCalled => "{prefix} must be called.",
            ErrorKind::MustBeIdentical => "{prefix} must be identical to {suffix}.",
            ErrorKind::MustBeInRange => "{prefix} must be in range {suffix}.",
            ErrorKind::MustBeLoggerCustom => {
                "{prefix} must be set to CUSTOM when using this function."
            }
            ErrorKind::MustBeNegative => "{prefix} must be negative.",
            ErrorKind::MustBeOff => "{prefix} must be off.",
            ErrorKind::MustBeOn => "{prefix} must be on.",
            ErrorKind::MustBePositive => "{prefix} must be positive.",
            ErrorKind::MustBeSetTo => "{prefix} must be set to {suffix}.",
            ErrorKind::MustBeLarger => "{prefix} must be larger than {suffix}.",
            ErrorKind::MustBeSmaller => "{prefix} must be smaller than {suffix}.",
            ErrorKind::MustBeZero => "{prefix} must be zero.",
            ErrorKind::MustHaveSameSign => "{prefix} must have the same sign.",
            ErrorKind::NetworkAlreadyRun => {
                "{prefix} cannot be called after the network has been run."
            }
            ErrorKind::RepeatedCompConnection => {
                "{prefix} repeats or reverses an existing compartmental connection."
            }
            ErrorKind::SynapseCompConnection => {
                "{prefix} cannot be connected both synaptically and compartmentally."
            }
            ErrorKind::UnknownGroupId => "{prefix} {suffix} is not a known group ID.",
            ErrorKind::Unknown => "An unknown error has occurred. {prefix}",
            ErrorKind::WrongNeuronType => "{prefix} cannot be called on this neuron type.",
        }
    }

    /// One-line description of the category.
    pub fn description(self) -> &'static str {
        match self {
            ErrorKind::AllNotAllowed => "keyword ALL is not allowed for this variable",
            ErrorKind::CanOnlyBeCalledInMode => "function can only be called in certain mode",
            ErrorKind::CanOnlyBeCalledInState => "function can only be called in certain state",
            ErrorKind::CannotBeCalledInMode => "function cannot be called in certain mode",
            ErrorKind::CannotBeCalledInState => "function cannot be called in certain state",
            ErrorKind::CannotBeIdentical => "parameters cannot be identical",
            ErrorKind::CannotBeNegative => "parameter cannot have negative value",
            ErrorKind::CannotBeNull => "parameter cannot have NULL value",
            ErrorKind::CannotBeLarger => "parameter cannot be larger than some value",
            ErrorKind::CannotBeSmaller => "parameter cannot be smaller than some value",
            ErrorKind::CannotBeOff => "parameter cannot be off",
            ErrorKind::CannotBeOn => "parameter cannot be on",
            ErrorKind::CannotBePositive => "parameter cannot have positive value",
            ErrorKind::CannotBeSetTo => "parameter cannot be set to some value",
            ErrorKind::CannotBeUnknown => "parameter cannot be of type UNKNOWN",
            ErrorKind::CannotBeZero => "parameter cannot be zero",
            ErrorKind::ExceedCompConnectionLimit => {
                "compartmental connection exceeds the group's limit"
            }
            ErrorKind::FileCannotCreate => "could not create a file",
            ErrorKind::FileCannotOpen => "could not open a file",
            ErrorKind::IsDeprecated => "deprecated function",
            ErrorKind::MustBeCalled => "function must be called",
            ErrorKind::MustBeIdentical => "parameters must be identical",
            ErrorKind::MustBeInRange => "parameter must be in some range",
            ErrorKind::MustBeLoggerCustom => "logger must be in custom mode",
            ErrorKind::MustBeNegative => "parameter must have negative value",
            ErrorKind::MustBeOff => "parameter must be off",
            ErrorKind::MustBeOn => "parameter must be on",
            ErrorKind::MustBePositive => "parameter must have positive value",
            ErrorKind::MustBeSetTo => "parameter must be set to some value",
            ErrorKind::MustBeLarger => "parameter must be larger than some value",
            ErrorKind::MustBeSmaller => "parameter must be smaller than some value",
            ErrorKind::MustBeZero => "parameter must be zero",
            ErrorKind::MustHaveSameSign => "parameters must have the same sign",
            ErrorKind::NetworkAlreadyRun => "network has already been run",
            ErrorKind::RepeatedCompConnection => {
                "compartmental connection repeats or reverses an existing one"
            }
            ErrorKind::SynapseCompConnection => {
                "groups cannot share a synaptic and a compartmental connection"
            }
            ErrorKind::UnknownGroupId => "group id is unknown",
            ErrorKind::Unknown => "an unknown error",
            ErrorKind::WrongNeuronType => "function cannot be applied to neuron type",
        }
    }

    /// Whether the template has a `{suffix}` slot. Kinds without one append a
    /// non-empty suffix after the sentence.
    pub fn uses_suffix(self) -> bool {
        self.template().contains(SUFFIX_SLOT)
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ErrorKind {
    type Err = ReportError;

    /// Parses a kind name, ignoring ASCII case and surrounding whitespace.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        ErrorKind::ALL
            .iter()
            .copied()
            .find(|kind| kind.name().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| ReportError::UnknownKind {
                name: s.to_string(),
            })
    }
}
