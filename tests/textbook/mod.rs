//! # Textbook problems
//!
//! Small transportation problems stored as plain text, with known initial solutions.
use std::path::{Path, PathBuf};

use transport::data::problem::Problem;
use transport::io::import;

mod test;

/// Relative path of the folder where the problem files are stored.
///
/// The path is relative to the project root folder.
fn problem_file_directory() -> PathBuf {
    Path::new(file!()).parent().unwrap().to_path_buf()
}

/// Compute the path of the problem file, based on the problem name.
///
/// # Arguments
///
/// * `name`: Problem name without extension.
///
/// # Return value
///
/// File path relative to the project root folder.
fn get_test_file_path(name: &str) -> PathBuf {
    problem_file_directory().join(name).with_extension("tp")
}

fn read(name: &str) -> Problem<u64> {
    import(&get_test_file_path(name)).unwrap()
}
