use std::ffi::OsString;
use std::io;
use std::path::{Path, PathBuf};

/// Writes the formatted result to `path`, truncating any previous
/// contents.
pub fn write_results(path: &Path, formatted: &str) -> io::Result<()> {
    std::fs::write(path, formatted)
}

/// Default destination beside the input: `<input-file-name>_results.txt`.
pub fn default_results_path(input: &Path) -> PathBuf {
    let mut name = input
        .file_name()
        .map(OsString::from)
        .unwrap_or_default();
    name.push("_results.txt");
    input.with_file_name(name)
}
