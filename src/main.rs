use std::path::PathBuf;
use std::process;

use clap::Parser;

use hxd::{AppResult, Config, run};

/// Hex dump utility.
/// Renders binary input as fixed-width rows pairing a line index, an
/// uppercase octet listing, and a printable rendering of the same bytes, or
/// patches such a dump back into binary.
#[derive(Debug, Parser)]
#[command(version, about, long_about = None)]
struct CommandLineArguments {
    /// Reverse operation: convert (or patch) a hex dump back into binary
    #[arg(short, long)]
    reverse: bool,

    /// Input file ("-" to read from standard input)
    infile: Option<PathBuf>,

    /// Output file (standard output when omitted)
    outfile: Option<PathBuf>,
}

fn main() {
    let arguments = CommandLineArguments::parse();

    if let Err(err) = try_run(arguments) {
        eprintln!("\x1b[1;91mERROR: {err:#}\x1b[0m");
        process::exit(1);
    }
}

fn try_run(arguments: CommandLineArguments) -> AppResult<()> {
    let config = Config::build(
        arguments.infile.as_deref(),
        arguments.outfile.as_deref(),
        arguments.reverse,
    )?;

    run(config)
}
