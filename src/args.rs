use ppd::Result;

use std::{env, fs, path::PathBuf};

use anyhow::Context;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum InputArgsError {
    #[error("Couldn't parse input arguments: {0}")]
    Parse(String),

    #[error("File not found: {0}")]
    FileNotFound(String),

    #[error("Unknown output mode: {0:?} (expected \"summary\" or \"receipts\")")]
    UnknownOutputMode(String),
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum OutputMode {
    Summary,
    Receipts,
}

/// Parses the input arguments: the first must be a valid filepath, the
/// optional second selects the output mode (summary by default)
pub fn parse_args() -> Result<(PathBuf, OutputMode)> {
    let filename = env::args().nth(1).ok_or_else(|| {
        InputArgsError::Parse("First argument must be the input file.".to_string())
    })?;

    let path = fs::canonicalize(filename.clone())
        .with_context(|| InputArgsError::FileNotFound(filename))?;

    let mode = match env::args().nth(2).as_deref() {
        None | Some("summary") => OutputMode::Summary,
        Some("receipts") => OutputMode::Receipts,
        Some(other) => Err(InputArgsError::UnknownOutputMode(other.to_string()))?,
    };

    return Ok((path, mode));
}
