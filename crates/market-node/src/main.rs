//! # Market Node
//!
//! Serves marketplace requests as JSON lines on stdin/stdout.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader};
use tracing::{info, warn};

use market_node::{MarketNode, NodeConfig, NodeStore, StoreKind};
use market_telemetry::{gather_metrics, init_telemetry, TelemetryConfig};

#[derive(Parser, Debug)]
#[command(name = "market-node")]
#[command(author, version, about = "Asset marketplace over a key-value ledger", long_about = None)]
struct Args {
    /// Ledger backend: memory, file or rocksdb (overrides MARKET_STORE)
    #[arg(long)]
    store: Option<StoreKind>,

    /// Directory for persistent state (overrides MARKET_DATA_DIR)
    #[arg(long)]
    data_dir: Option<PathBuf>,

    /// Balance credited at enrollment (overrides MARKET_INITIAL_BALANCE)
    #[arg(long)]
    initial_balance: Option<u64>,

    /// Print Prometheus metrics to stderr on shutdown
    #[arg(long)]
    dump_metrics: bool,
}

/// Environment config with CLI overrides applied.
fn load_config(args: &Args) -> Result<NodeConfig> {
    let mut config = NodeConfig::from_env().context("invalid MARKET_* environment")?;

    if let Some(store) = args.store {
        config.store = store;
    }
    if let Some(dir) = &args.data_dir {
        config.data_dir = dir.clone();
    }
    if let Some(balance) = args.initial_balance {
        config.initial_balance = balance;
    }

    Ok(config)
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();
    let _telemetry = init_telemetry(TelemetryConfig::from_env())?;

    let config = load_config(&args)?;
    info!(?config, "Starting market node");

    let store = NodeStore::open(&config)?;
    let mut node = MarketNode::new(store, config.market());

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    let mut stdout = tokio::io::stdout();
    let shutdown = tokio::signal::ctrl_c();
    tokio::pin!(shutdown);

    info!("Node is running. Send requests on stdin; EOF or Ctrl+C stops.");
    loop {
        tokio::select! {
            line = lines.next_line() => {
                let Some(line) = line.context("failed to read stdin")? else {
                    info!("End of input");
                    break;
                };
                if line.trim().is_empty() {
                    continue;
                }

                // Ledger commits are synchronous (file fsync, RocksDB write).
                let response = tokio::task::block_in_place(|| node.process_line(&line));
                let mut out = serde_json::to_vec(&response)?;
                out.push(b'\n');
                stdout.write_all(&out).await?;
                stdout.flush().await?;
            }
            result = &mut shutdown => {
                if let Err(e) = result {
                    warn!("Failed to listen for Ctrl+C: {}", e);
                }
                info!("Shutdown signal received");
                break;
            }
        }
    }

    if args.dump_metrics {
        eprintln!("{}", gather_metrics()?);
    }

    info!("Shutdown complete");
    Ok(())
}
