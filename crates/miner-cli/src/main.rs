//! Goblin miner CLI
//!
//! Searches for the smallest nonce whose double-SHA256 of
//! `message || nonce_le` starts with the requested number of zero hex
//! digits, then prints the result.

use std::process::ExitCode;

use anyhow::Context;
use clap::Parser;
use tracing::{error, info};

use miner_core::{mine, mine_parallel};

mod config;
mod log;
mod report;

use config::Config;

fn main() -> ExitCode {
    log::init_log();

    let config = Config::parse();

    match run(&config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!("{:#}", err);
            ExitCode::FAILURE
        }
    }
}

fn run(config: &Config) -> anyhow::Result<()> {
    let threads = config.threads();
    let message = config.message.as_bytes();

    info!(
        "Mining... Difficulty: {}, Max nonce: {}, Threads: {}",
        config.difficulty, config.max_nonce, threads
    );

    let result = if threads == 1 {
        mine(message, config.difficulty, config.max_nonce)
    } else {
        mine_parallel(message, config.difficulty, config.max_nonce, threads)
    }
    .context("mining failed")?;

    match &result {
        Some(found) => info!("nonce {} found in {:.6}s", found.nonce(), found.elapsed_seconds()),
        None => info!("searched {} nonces without a match", u64::from(config.max_nonce) + 1),
    }

    if config.json {
        println!("{}", report::to_json(result.as_ref()).context("serializing result")?);
    } else {
        print!("{}", report::render(result.as_ref()));
    }

    Ok(())
}
