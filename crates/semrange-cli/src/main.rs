mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::process::ExitCode;

#[derive(Parser, Debug)]
#[command(name = "semrange")]
#[command(about = "Parse, compare and filter semantic versions")]
#[command(version)]
struct Args {
    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Show the components of a version
    Parse(commands::ParseArgs),

    /// Compare two versions by precedence
    Compare(commands::CompareArgs),

    /// Print the versions that satisfy a range query
    Satisfies(commands::SatisfiesArgs),

    /// Sort versions by precedence
    Sort(commands::SortArgs),

    /// Convert a four-part platform version (1.2.3.4) into a semantic version
    Convert(commands::ConvertArgs),
}

fn init_logger(verbose: u8) {
    let default_filter = match verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .format_timestamp(None)
        .init();
}

fn run() -> Result<i32> {
    let args = Args::parse();
    init_logger(args.verbose);

    match args.command {
        Commands::Parse(parse_args) => commands::parse(parse_args),
        Commands::Compare(compare_args) => commands::compare(compare_args),
        Commands::Satisfies(satisfies_args) => commands::satisfies(satisfies_args),
        Commands::Sort(sort_args) => commands::sort(sort_args),
        Commands::Convert(convert_args) => commands::convert(convert_args),
    }
}

fn main() -> ExitCode {
    match run() {
        Ok(code) => ExitCode::from(code as u8),
        Err(e) => {
            eprintln!("Error: {}", e);
            for cause in e.chain().skip(1) {
                eprintln!("  Caused by: {}", cause);
            }
            ExitCode::FAILURE
        }
    }
}
