use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use typedef_generator::{Syntax, execute};

/// Generate a type definition file from a .proto schema.
#[derive(Parser)]
#[command(name = "proto-typer", version)]
struct Args {
    /// Input protocol (.proto) file
    protocol_file: PathBuf,
    /// Output type definition file
    type_definition_file: PathBuf,
    /// Target language syntax
    #[arg(short, long, value_enum)]
    syntax: Syntax,
}

fn main() -> ExitCode {
    let args = Args::parse();
    if let Err(e) = execute(&args.protocol_file, &args.type_definition_file, args.syntax) {
        eprintln!("error: {e}");
        return ExitCode::FAILURE;
    }
    ExitCode::SUCCESS
}
