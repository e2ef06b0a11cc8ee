//! jobboard CLI - browse listings served by the job board gateway

use clap::Parser;

mod cache;
mod cli;
mod client;
mod config;
mod error;
mod filter;
mod models;
mod output;

use cli::{Cli, CommandContext, Commands, GlobalOptions};
use error::Result;

#[tokio::main]
async fn main() {
    if let Err(err) = run().await {
        eprintln!("Error: {}", err);
        std::process::exit(1);
    }
}

async fn run() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.debug);

    let opts = GlobalOptions::from_cli(&cli);

    match cli.command {
        Commands::Status => cli::status::run(&opts),
        Commands::List {
            ref filters,
            ref pagination,
        } => {
            let ctx = CommandContext::new(&opts)?;
            cli::jobs::list(&ctx, filters, pagination).await
        }
        Commands::Featured { count } => {
            let ctx = CommandContext::new(&opts)?;
            cli::jobs::featured(&ctx, count).await
        }
        Commands::Show { ref job_id } => {
            let ctx = CommandContext::new(&opts)?;
            cli::jobs::show(&ctx, job_id).await
        }
        Commands::Watch { interval, times } => {
            let ctx = CommandContext::new(&opts)?;
            cli::jobs::watch(&ctx, interval, times).await
        }
        Commands::Research {
            ref filters,
            ref pagination,
        } => {
            let ctx = CommandContext::new(&opts)?;
            cli::research::list(&ctx, filters, pagination).await
        }
    }
}

/// `--debug` forces debug output; otherwise `RUST_LOG` applies, defaulting to warn.
fn init_logging(debug: bool) {
    let mut builder =
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"));
    if debug {
        builder.filter_level(log::LevelFilter::Debug);
    }
    builder.init();
    log::debug!("Debug mode enabled");
}
