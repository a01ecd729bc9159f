//! # Error reporting for reading of transportation problem files
//!
//! A collection of enums and structures describing any problems encountered during reading and
//! parsing.
use std::error::Error;
use std::fmt;
use std::io;

use crate::data::error::ShapeError;

/// An `ImportError` is created when an error was encountered during IO or parsing.
///
/// It is the highest error in the io error hierarchy.
#[derive(Debug)]
pub enum ImportError {
    /// The file extension of the provided file path is not known or supported.
    ///
    /// The contained `String` is a message for the end user.
    FileExtension(String),
    /// The file to read isn't found, or the reading of file couldn't start or was interrupted.
    IO(io::Error),
    /// Contents of the file could not be parsed into supply, demand and cost values.
    Parse(ParseError),
    /// The values were read, but they don't form a transportation problem.
    ///
    /// For example, there might be more supply values than cost rows, or a negative cost.
    Shape(ShapeError),
}

impl fmt::Display for ImportError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            ImportError::FileExtension(message) => f.write_str(message),
            ImportError::IO(error) => error.fmt(f),
            ImportError::Parse(error) => error.fmt(f),
            ImportError::Shape(error) => write!(f, "inconsistent problem: {error}"),
        }
    }
}

impl Error for ImportError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            ImportError::FileExtension(_) => None,
            ImportError::IO(error) => Some(error),
            ImportError::Parse(error) => Some(error),
            ImportError::Shape(error) => Some(error),
        }
    }
}

/// A `ParseError` represents all errors encountered during parsing.
///
/// When the error can be attributed to a line, that line and its number are kept.
#[derive(Debug, Eq, PartialEq)]
pub struct ParseError {
    description: String,
    location: Option<(usize, String)>,
}

/// A `FileLocation` references a line in the file by the line number of the file as originally
/// read from the disk, counting from 1. It contains a reference to the line itself.
pub(super) type FileLocation<'a> = (usize, &'a str);

impl ParseError {
    /// Create a new `ParseError` with only a description.
    ///
    /// # Arguments
    ///
    /// * `description`: What's wrong at the moment of creation.
    pub fn new(description: impl Into<String>) -> Self {
        Self { description: description.into(), location: None }
    }

    /// Create a new `ParseError` that points at a line.
    ///
    /// # Arguments
    ///
    /// * `description`: What's wrong at the moment of creation.
    /// * `file_location`: A line number and line that caused the error.
    pub fn with_location(description: impl Into<String>, file_location: FileLocation) -> Self {
        let (line_number, line) = file_location;
        Self {
            description: description.into(),
            location: Some((line_number, line.to_string())),
        }
    }

    /// Number of the line that caused this error, if known.
    pub fn line_number(&self) -> Option<usize> {
        self.location.as_ref().map(|&(number, _)| number)
    }
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "ParseError: {}", self.description)?;
        if let Some((line_number, line)) = &self.location {
            write!(f, "\n\tCaused at line\t{line_number}:\t{line}")?;
        }

        Ok(())
    }
}

impl Error for ParseError {}
