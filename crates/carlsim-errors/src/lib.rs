//! Fatal user-error reporting for the CARLsim simulation framework.
//!
//! Every public entry point of the simulator validates its arguments and the
//! current network state with [`assert_true`]. A failed assertion is a
//! programming error in the caller: the facility prints one categorized
//! diagnostic and ends the process. There is no recovery path.
//!
//! ```no_run
//! use carlsim_errors::{assert_true, ErrorKind};
//!
//! let tau = -1.0_f64;
//! assert_true(tau >= 0.0, ErrorKind::CannotBeNegative, "setConductance", "tau", "");
//! // never reached: "[USER ERROR setConductance] tau cannot be negative."
//! ```

pub mod checks;
pub mod config;
pub mod error;
pub mod kind;
pub mod reporter;
pub mod violation;

mod macros;

// Re-export commonly used types
pub use checks::{
    assert_in_range, assert_non_negative, assert_non_zero, assert_not_identical, assert_positive,
};
pub use config::{Channel, ReporterConfig, Termination};
pub use error::ReportError;
pub use kind::ErrorKind;
pub use reporter::{assert_true, throw_error, Reporter};
pub use violation::Violation;
