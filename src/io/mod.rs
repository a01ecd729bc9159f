//! # Reading of transportation problems
//!
//! This module provides read functionality for transportation problems stored as plain text.
use std::ffi::OsStr;
use std::fs;
use std::path::Path;
use std::str::FromStr;

use crate::data::number::Quantity;
use crate::data::problem::Problem;
use crate::io::error::ImportError;

pub mod error;
pub mod parse;

pub use parse::parse;

/// Extensions of plain text problem files.
const EXTENSIONS: [&str; 2] = ["txt", "tp"];

/// Import a problem from a file.
///
/// Supports files with the `.txt` and `.tp` extensions, in the format described in `parse`. The
/// extension is checked before the file is opened.
///
/// # Errors
///
/// When a file extension is unknown, a file cannot be found or read, the contents can't be parsed
/// or the values don't form a transportation problem, an error type is returned.
pub fn import<T: Quantity + FromStr>(file_path: &Path) -> Result<Problem<T>, ImportError> {
    let extension = file_path.extension().and_then(OsStr::to_str);
    if !extension.is_some_and(|extension| EXTENSIONS.contains(&extension)) {
        return Err(ImportError::FileExtension(format!(
            "Unsupported problem file {}, expected one of the extensions {:?}",
            file_path.display(), EXTENSIONS,
        )));
    }

    log::info!("reading problem file {}", file_path.display());
    let program = fs::read_to_string(file_path).map_err(ImportError::IO)?;
    parse(&program)
}
