//! Validation of the positional arguments.

use std::env;
use std::path::{Path, PathBuf};

use crate::error::InputError;

/// Validated command-line parameters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InputParameter {
    /// Absolute path of a regular file.
    pub file_path: PathBuf,
    pub number_of_view_points: usize,
}

/// Turns raw argument strings into an [`InputParameter`].
#[derive(Debug, Default, Clone, Copy)]
pub struct InputValidator;

impl InputValidator {
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Validate the mesh path and the requested number of view points.
    ///
    /// Checks run in order: blank arguments, path resolution, integer
    /// parsing, regular-file check, sign check.
    ///
    /// # Errors
    ///
    /// Returns the first [`InputError`] encountered.
    pub fn validate(&self, file_path: &str, count: &str) -> Result<InputParameter, InputError> {
        if is_blank(file_path) || is_blank(count) {
            return Err(InputError::Blank {
                file_path: file_path.to_string(),
                count: count.to_string(),
            });
        }

        let resolved = absolute(Path::new(file_path)).ok_or_else(|| InputError::InvalidPath {
            file_path: file_path.to_string(),
        })?;

        let parsed: i64 = count.parse().map_err(|_| InputError::NotAnInteger {
            count: count.to_string(),
        })?;

        if !resolved.is_file() {
            return Err(InputError::NotARegularFile { path: resolved });
        }

        let number_of_view_points =
            usize::try_from(parsed).map_err(|_| InputError::Negative { count: parsed })?;

        Ok(InputParameter {
            file_path: resolved,
            number_of_view_points,
        })
    }
}

/// Short suggestion for fixing a rejected argument.
#[must_use]
pub const fn hint(err: &InputError) -> &'static str {
    match err {
        InputError::NotAnInteger { .. } | InputError::Negative { .. } => {
            "pass a whole number such as 0, 5 or 10"
        }
        InputError::NotARegularFile { .. } => "pass the path of a mesh JSON file",
        InputError::Blank { .. } | InputError::InvalidPath { .. } => {
            "usage: viewfinder <MESH_FILE> <NUMBER_OF_VIEW_POINTS>"
        }
    }
}

fn is_blank(value: &str) -> bool {
    value.trim().is_empty()
}

fn absolute(path: &Path) -> Option<PathBuf> {
    if path.is_absolute() {
        return Some(path.to_path_buf());
    }
    env::current_dir().ok().map(|cwd| cwd.join(path))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn mesh_file() -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(b"{}").unwrap();
        file
    }

    #[test]
    fn accepts_valid_parameters() {
        let file = mesh_file();
        let path = file.path().to_str().unwrap();

        let parameter = InputValidator::new().validate(path, "2").unwrap();
        assert_eq!(parameter.number_of_view_points, 2);
        assert_eq!(parameter.file_path, file.path());
        assert!(parameter.file_path.is_absolute());
    }

    #[test]
    fn accepts_zero() {
        let file = mesh_file();
        let parameter = InputValidator::new()
            .validate(file.path().to_str().unwrap(), "0")
            .unwrap();
        assert_eq!(parameter.number_of_view_points, 0);
    }

    #[test]
    fn relative_paths_are_resolved() {
        let file = mesh_file();
        let cwd = env::current_dir().unwrap();
        // Only meaningful when the temp dir is reachable relative to cwd
        if let Ok(relative) = file.path().strip_prefix(&cwd) {
            let parameter = InputValidator::new()
                .validate(relative.to_str().unwrap(), "1")
                .unwrap();
            assert_eq!(parameter.file_path, file.path());
        }
    }

    #[test]
    fn rejects_non_integer() {
        let file = mesh_file();
        let err = InputValidator::new()
            .validate(file.path().to_str().unwrap(), "asdf")
            .unwrap_err();
        assert!(matches!(err, InputError::NotAnInteger { .. }));
        assert_eq!(
            err.to_string(),
            "Provided numberOfViewPoints could not be parsed into an integer."
        );
    }

    #[test]
    fn rejects_negative() {
        let file = mesh_file();
        let err = InputValidator::new()
            .validate(file.path().to_str().unwrap(), "-12")
            .unwrap_err();
        assert_eq!(err, InputError::Negative { count: -12 });
    }

    #[test]
    fn rejects_missing_file() {
        let err = InputValidator::new()
            .validate("src/test/resrces/some.file.json", "2")
            .unwrap_err();
        assert!(matches!(err, InputError::NotARegularFile { .. }));
        assert!(err
            .to_string()
            .contains("The provided path does not lead to a file or does not point to a regular file."));
    }

    #[test]
    fn rejects_directory() {
        let dir = tempfile::tempdir().unwrap();
        let err = InputValidator::new()
            .validate(dir.path().to_str().unwrap(), "2")
            .unwrap_err();
        assert_eq!(
            err,
            InputError::NotARegularFile {
                path: dir.path().to_path_buf()
            }
        );
    }

    #[test]
    fn rejects_blank_arguments() {
        for (path, count) in [("", ""), ("  ", "3"), ("mesh.json", "\t")] {
            let err = InputValidator::new().validate(path, count).unwrap_err();
            assert!(matches!(err, InputError::Blank { .. }), "{path:?} {count:?}");
            assert!(err
                .to_string()
                .contains("One or both parameters were null or blank. "));
        }
    }

    #[test]
    fn parse_error_wins_over_missing_file() {
        let err = InputValidator::new()
            .validate("does/not/exist.json", "many")
            .unwrap_err();
        assert!(matches!(err, InputError::NotAnInteger { .. }));
    }
}
