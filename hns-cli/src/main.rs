//! `hns`: inspect Handshake canonical bytes from the command line

mod cli;
mod commands;

use clap::Parser;
use cli::Opt;
use std::process;
use tracing::error;
use tracing_subscriber::EnvFilter;

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .compact()
        .init();
}

fn main() {
    init_tracing();
    let opt = Opt::parse();

    let result =
        commands::load_config(&opt).and_then(|config| commands::run(opt.command, &config));
    match result {
        Ok(output) => println!("{output}"),
        Err(e) => {
            error!("{e:#}");
            process::exit(1);
        }
    }
}
