//! # Parsing of plain text transportation problems
//!
//! The format is line based. Empty lines and lines starting with `#` are skipped. Of the remaining
//! lines, the first holds the supply of each source and the second the demand of each destination.
//! Every following line holds the unit costs from one source to all destinations. Values are
//! separated by whitespace.
//!
//! ```text
//! # supply
//! 75 125 100
//! # demand
//! 80 65 70 85
//! # costs
//! 464 513 654 867
//! 352 416 690 791
//! 995 682 388 685
//! ```
use std::str::FromStr;

use crate::data::number::Quantity;
use crate::data::problem::Problem;
use crate::io::error::{FileLocation, ImportError, ParseError};

const COMMENT_INDICATOR: &str = "#";

/// Parse a transportation problem, in string form.
///
/// # Errors
///
/// If a value can't be parsed, if supply, demand or costs are missing, if their dimensions
/// don't agree, or if a value is negative.
pub fn parse<T: Quantity + FromStr>(program: &str) -> Result<Problem<T>, ImportError> {
    let mut lines = into_lines(program);

    let supply = match lines.next() {
        Some(line) => parse_values(line).map_err(ImportError::Parse)?,
        None => return Err(ImportError::Parse(ParseError::new("No line to read, is the file empty?"))),
    };
    let demand = match lines.next() {
        Some(line) => parse_values(line).map_err(ImportError::Parse)?,
        None => return Err(ImportError::Parse(ParseError::new("Expected a line of demand values after the supply."))),
    };
    let costs = lines
        .map(parse_values)
        .collect::<Result<Vec<_>, _>>()
        .map_err(ImportError::Parse)?;
    if costs.is_empty() {
        return Err(ImportError::Parse(ParseError::new("Expected cost rows after the demand.")));
    }

    log::debug!("parsed {} sources and {} destinations", supply.len(), demand.len());
    Problem::new(costs, supply, demand).map_err(ImportError::Shape)
}

/// Split the text into numbered lines that contain content.
///
/// # Arguments
///
/// * `text`: The program string.
///
/// # Return value
///
/// An iterator over numbered lines.
fn into_lines(text: &str) -> impl Iterator<Item = FileLocation<'_>> {
    text.lines()
        .enumerate()
        .map(|(number, line)| (number + 1, line)) // Count from 1
        .filter(|(_, line)| !line.trim_start().starts_with(COMMENT_INDICATOR))
        .filter(|(_, line)| !line.trim().is_empty())
}

/// Read all values on a line.
fn parse_values<T: FromStr>(file_location: FileLocation) -> Result<Vec<T>, ParseError> {
    let (_, line) = file_location;
    line.split_whitespace()
        .map(|token| token.parse().map_err(|_| ParseError::with_location(
            format!("Could not parse \"{token}\" as a number."),
            file_location,
        )))
        .collect()
}
