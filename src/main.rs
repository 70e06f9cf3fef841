use clap::Parser;

use uniqint::cli::Cli;
use uniqint::engine::{format_output, parse_unique_sorted};
use uniqint::input::load_text;
use uniqint::output::{default_results_path, write_results};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let text = load_text(&cli.input)?;
    let values = parse_unique_sorted(&text);
    let formatted = format_output(&values);

    let destination = cli
        .output
        .unwrap_or_else(|| default_results_path(&cli.input));
    write_results(&destination, &formatted)?;

    Ok(())
}
