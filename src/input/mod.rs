use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum LoadError {
    #[error("File not found: {0}")]
    FileNotFound(PathBuf),

    #[error("Read error: {0}")]
    Read(#[from] io::Error),
}

/// Reads the whole input file into memory.
///
/// An empty file is valid input (it produces an empty result), not an
/// error; only unreadable files fail.
pub fn load_text(path: &Path) -> Result<String, LoadError> {
    match std::fs::read_to_string(path) {
        Ok(text) => Ok(text),
        Err(err) if err.kind() == io::ErrorKind::NotFound => {
            Err(LoadError::FileNotFound(path.to_path_buf()))
        }
        Err(err) => Err(LoadError::Read(err)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs::{self, File};
    use std::io::Write;

    #[test]
    fn test_nonexistent_file_error() {
        let result = load_text(Path::new("nonexistent_file_12345.txt"));
        match result {
            Err(LoadError::FileNotFound(_)) => (),
            _ => panic!("Expected FileNotFound error"),
        }
    }

    #[test]
    fn test_empty_file_is_valid() {
        let test_file = "test_load_empty.txt";
        File::create(test_file).unwrap();

        let result = load_text(Path::new(test_file));
        assert_eq!(result.unwrap(), "");

        fs::remove_file(test_file).unwrap();
    }

    #[test]
    fn test_valid_file_loads() {
        let test_file = "test_load_valid.txt";
        let mut file = File::create(test_file).unwrap();
        file.write_all(b"5\n7\n").unwrap();

        let result = load_text(Path::new(test_file));
        assert_eq!(result.unwrap(), "5\n7\n");

        fs::remove_file(test_file).unwrap();
    }
}
