//! CLI surface: load packages from an input source, process them in
//! order, print one report or diagnostic line per entry to stdout.

pub mod error;
pub mod input;

pub use error::{CliError, CliResult};
pub use input::{InputSource, load_packages};

use workout_tracker_core::process_packages;

/// Run the calculator against the given input source, writing one line
/// per entry to `out` in input order.
pub fn run<W: std::io::Write>(source: &InputSource, out: &mut W) -> CliResult<()> {
    let packages = load_packages(source)?;
    tracing::debug!("processing {} packages", packages.len());
    for line in process_packages(&packages) {
        writeln!(out, "{line}")?;
    }
    Ok(())
}
