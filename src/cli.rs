use clap::Parser;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "uniqint")]
#[command(
    about = "Extract the unique integers in [-1023, 1023] from a text file, sorted ascending",
    long_about = None
)]
pub struct Cli {
    /// Input text file, one integer expected per line
    pub input: PathBuf,

    /// Destination file; defaults to <input-file-name>_results.txt
    /// beside the input
    pub output: Option<PathBuf>,
}
