//! CARLsim user-error CLI.
//!
//! Provides the `carlsim-errors` binary for inspecting the user-error
//! taxonomy and running assertions from scripts:
//! - `kinds` lists every kind with its template as JSON
//! - `render` prints the message a kind produces
//! - `assert` runs `assert_true`, terminating the process on failure
//!
//! Fatal diagnostics follow `CARLSIM_FATAL_CHANNEL` and `CARLSIM_FATAL_EXIT`,
//! the same variables the library reads.

use std::process;

use clap::{Parser, Subcommand};
use serde::Serialize;

use carlsim_errors::{assert_true, ErrorKind, Violation};

/// CARLsim user-error tools.
#[derive(Parser)]
#[command(name = "carlsim-errors", about = "CARLsim user-error tools")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

/// Available subcommands.
#[derive(Subcommand)]
enum Commands {
    /// List every error kind as JSON.
    Kinds,

    /// Print the message for a kind without terminating.
    Render {
        /// Error kind name, e.g. CANNOT_BE_NEGATIVE.
        #[arg(short, long)]
        kind: String,

        /// Offending parameter or entity.
        #[arg(short, long, default_value = "")]
        prefix: String,

        /// Value or context it conflicted with.
        #[arg(short, long, default_value = "")]
        suffix: String,
    },

    /// Assert a condition; exits 0 when it holds, terminates fatally otherwise.
    Assert {
        /// Error kind name, e.g. CANNOT_BE_NEGATIVE.
        #[arg(short, long)]
        kind: String,

        /// Calling operation reported in the diagnostic.
        #[arg(short, long, default_value = "")]
        location: String,

        /// Offending parameter or entity.
        #[arg(short, long, default_value = "")]
        prefix: String,

        /// Value or context it conflicted with.
        #[arg(short, long, default_value = "")]
        suffix: String,

        /// The condition holds.
        #[arg(long)]
        holds: bool,
    },
}

/// One row of the `kinds` listing.
#[derive(Serialize)]
struct KindInfo {
    name: ErrorKind,
    template: &'static str,
    description: &'static str,
}

impl From<ErrorKind> for KindInfo {
    fn from(kind: ErrorKind) -> Self {
        KindInfo {
            name: kind,
            template: kind.template(),
            description: kind.description(),
        }
    }
}

fn main() {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let exit_code = match cli.command {
        Commands::Kinds => run_kinds(),
        Commands::Render {
            kind,
            prefix,
            suffix,
        } => run_render(&kind, &prefix, &suffix),
        Commands::Assert {
            kind,
            location,
            prefix,
            suffix,
            holds,
        } => run_assert(&kind, &location, &prefix, &suffix, holds),
    };
    process::exit(exit_code);
}

/// Execute the kinds subcommand.
fn run_kinds() -> i32 {
    let rows: Vec<KindInfo> = ErrorKind::ALL.iter().copied().map(KindInfo::from).collect();
    match serde_json::to_string_pretty(&rows) {
        Ok(json) => {
            println!("{}", json);
            0
        }
        Err(e) => {
            eprintln!("Error: failed to serialize kinds: {}", e);
            1
        }
    }
}

/// Execute the render subcommand.
fn run_render(kind: &str, prefix: &str, suffix: &str) -> i32 {
    let kind = match parse_kind(kind) {
        Ok(kind) => kind,
        Err(code) => return code,
    };
    println!("{}", Violation::new(kind, "", prefix, suffix).message());
    0
}

/// Execute the assert subcommand.
///
/// Returns 0 when the condition holds; a failed condition never returns.
fn run_assert(kind: &str, location: &str, prefix: &str, suffix: &str, holds: bool) -> i32 {
    let kind = match parse_kind(kind) {
        Ok(kind) => kind,
        Err(code) => return code,
    };
    tracing::debug!(%kind, location, holds, "running assertion");
    assert_true(holds, kind, location, prefix, suffix);
    0
}

/// Parse a kind name, reporting usage errors with exit code 2.
fn parse_kind(name: &str) -> Result<ErrorKind, i32> {
    name.parse().map_err(|e| {
        eprintln!("Error: {}", e);
        2
    })
}
