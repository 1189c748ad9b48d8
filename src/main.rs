//! projectx: pull one day of bars, the account list, or a day of trades from
//! the ProjectX Gateway and write it as CSV.
//!
//! Usage:
//!   projectx bars --date 2025-05-08 [--keyword NQ] [--symbol ENQ] [-o bars.csv]
//!   projectx accounts [-o accounts.csv]
//!   projectx trades --date 2025-05-08 [--collect-failures] [-o trades.csv]
//!
//! Credentials and defaults come from `PROJECTX_*` environment variables
//! (a `.env` file is read if present).

use std::fs::File;
use std::io::{self, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use chrono::Utc;
use clap::{Parser, Subcommand};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use projectx_sdk::config::GatewayConfig;
use projectx_sdk::prelude::*;

#[derive(Parser, Debug)]
#[command(name = "projectx")]
#[command(about = "ProjectX Gateway bar and trade history exporter")]
#[command(version)]
struct Args {
    /// Write CSV here instead of stdout
    #[arg(short, long, global = true)]
    output: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Bars of the active contract for one calendar day
    Bars {
        /// Day to fetch (YYYY-MM-DD)
        #[arg(long)]
        date: String,

        /// Contract search text (overrides PROJECTX_SEARCH_KEYWORD)
        #[arg(long)]
        keyword: Option<String>,

        /// Symbol the contract id must contain (overrides PROJECTX_TARGET_SYMBOL)
        #[arg(long)]
        symbol: Option<String>,
    },

    /// Active accounts
    Accounts,

    /// Trades of every active account for one UTC day
    Trades {
        /// Day to fetch (YYYY-MM-DD)
        #[arg(long)]
        date: String,

        /// Keep going when an account's trade search fails
        #[arg(long)]
        collect_failures: bool,
    },
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(io::stderr)
        .init();

    if let Err(e) = run(Args::parse()).await {
        error!("{:#}", e);
        std::process::exit(1);
    }
}

async fn run(args: Args) -> Result<()> {
    let config = GatewayConfig::from_env().context("Failed to load configuration")?;
    info!(base_url = %config.base_url, live = config.live, "Starting projectx");

    let out: Box<dyn Write> = match &args.output {
        Some(path) => Box::new(
            File::create(path).with_context(|| format!("Cannot create {}", path.display()))?,
        ),
        None => Box::new(io::stdout()),
    };

    match args.command {
        Command::Bars {
            date,
            keyword,
            symbol,
        } => {
            let client = config.client_builder().build()?;
            let keyword = keyword.unwrap_or_else(|| config.search_keyword.clone());
            let symbol = symbol.unwrap_or_else(|| config.target_symbol.clone());

            let daily = client
                .history()
                .fetch_symbol_day(&keyword, &symbol, &date)
                .await?;
            let mut sink = CsvSink::new(out, config.day_zone);
            sink.write_bars(&daily)?;
            sink.into_inner()?.flush()?;
        }
        Command::Accounts => {
            let client = config.client_builder().build()?;
            let accounts = client.accounts().active().await?;
            info!(count = accounts.len(), "Active accounts");

            let mut sink = CsvSink::new(out, config.day_zone);
            sink.write_accounts(&accounts)?;
            sink.into_inner()?.flush()?;
        }
        Command::Trades {
            date,
            collect_failures,
        } => {
            let policy = if collect_failures {
                AggregationPolicy::CollectFailures
            } else {
                AggregationPolicy::FailFast
            };
            let client = config.client_builder().aggregation(policy).build()?;
            let report = client.trades().history(&date).await?;
            for failure in &report.failures {
                error!(
                    account_id = %failure.account_id,
                    account = %failure.account_name,
                    "Trade search failed: {}",
                    failure.message
                );
            }

            let mut sink = CsvSink::new(out, config.day_zone);
            sink.write_trade_history(&report, Utc::now())?;
            sink.into_inner()?.flush()?;
        }
    }

    Ok(())
}
