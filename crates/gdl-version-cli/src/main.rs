use std::error::Error;

use clap::{Parser, Subcommand};
use commands::{
    check::{self, CheckArgs},
    rc::{self, RcArgs},
    show::{self, ShowArgs},
};

mod commands;

#[derive(Parser, Debug)]
#[command(name = "gdl-version", about = "Inspect the GDL build and version record")]
struct Cli {
    /// Log debug diagnostics to stderr.
    #[arg(long, short, global = true)]
    verbose: bool,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print the compiled-in version record.
    Show(ShowArgs),
    /// Print a resource-compiler VERSIONINFO block for this build.
    Rc(RcArgs),
    /// Compare a version record file against the compiled-in record.
    Check(CheckArgs),
}

fn init_logging(verbose: bool) {
    env_logger::builder()
        .filter_level(if verbose {
            log::LevelFilter::Debug
        } else {
            log::LevelFilter::Warn
        })
        .parse_default_env()
        .init();
}

fn main() -> Result<(), Box<dyn Error>> {
    let cli = Cli::parse();
    init_logging(cli.verbose);
    match cli.command {
        Command::Show(args) => show::run(&args),
        Command::Rc(args) => rc::run(&args),
        Command::Check(args) => check::run(&args),
    }
}
