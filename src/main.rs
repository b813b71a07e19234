use std::io::Write;

use anyhow::Result;
use clap::Parser;
use env_logger::Builder;
use log::LevelFilter;

use token_bayes::cli::args::BayesArgs;
use token_bayes::cli::commands::execute_command;

fn main() -> Result<()> {
    let args = BayesArgs::parse();

    let log_level = match args.verbosity() {
        0 => LevelFilter::Error,
        1 => LevelFilter::Warn,
        2 => LevelFilter::Info,
        _ => LevelFilter::Debug,
    };
    Builder::new()
        .filter_level(log_level)
        .format(|buf, record| writeln!(buf, "[{}] {}", record.level(), record.args()))
        .init();

    let output = execute_command(args)?;
    println!("{output}");

    Ok(())
}
