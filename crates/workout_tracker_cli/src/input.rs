//! Package input: built-in sample, stdin, or a JSON file.

use std::io::Read;
use std::path::PathBuf;

use crate::error::{CliError, CliResult};

/// Where the packages come from, resolved from the first CLI argument:
/// no argument means the built-in sample, `-` means stdin, anything else
/// is a file path.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum InputSource {
    Sample,
    Stdin,
    File(PathBuf),
}

impl InputSource {
    pub fn from_arg(arg: Option<&str>) -> Self {
        match arg {
            None => InputSource::Sample,
            Some("-") => InputSource::Stdin,
            Some(path) => InputSource::File(path.into()),
        }
    }
}

/// The reference packages processed when no input source is given.
pub fn sample_packages() -> Vec<(String, Vec<f64>)> {
    vec![
        ("SWM".to_string(), vec![720.0, 1.0, 80.0, 25.0, 40.0]),
        ("RUN".to_string(), vec![15000.0, 1.0, 75.0]),
        ("WLK".to_string(), vec![9000.0, 1.0, 75.0, 180.0]),
    ]
}

/// Parse packages from their JSON wire form: an array of
/// `[tag, [numbers...]]` pairs.
pub fn parse_packages(json: &str) -> CliResult<Vec<(String, Vec<f64>)>> {
    Ok(serde_json::from_str(json)?)
}

pub fn load_packages(source: &InputSource) -> CliResult<Vec<(String, Vec<f64>)>> {
    match source {
        InputSource::Sample => Ok(sample_packages()),
        InputSource::Stdin => {
            let mut buf = String::new();
            std::io::stdin()
                .read_to_string(&mut buf)
                .map_err(|e| read_error("stdin", e))?;
            parse_packages(&buf)
        }
        InputSource::File(path) => {
            let buf = std::fs::read_to_string(path)
                .map_err(|e| read_error(&path.display().to_string(), e))?;
            parse_packages(&buf)
        }
    }
}

fn read_error(source_name: &str, source: std::io::Error) -> CliError {
    CliError::Read {
        source_name: source_name.to_string(),
        source,
    }
}
