//! Lexigrid command-line entry point.

use std::{io, process};

use clap::Parser as _;
use lexigrid_cli::cli::Cli;

fn main() {
    better_panic::install();
    env_logger::init();

    let cli = Cli::parse();
    let mut stdout = io::stdout().lock();
    if let Err(e) = lexigrid_cli::run(&cli, &mut stdout) {
        log::debug!("command failed: {e:?}");
        eprintln!("error: {e}");
        process::exit(1);
    }
}
