//! # Market Telemetry
//!
//! Logging and metrics for the asset marketplace.
//!
//! ## Components
//!
//! - **Logs**: `tracing-subscriber` with an `EnvFilter`, pretty or JSON, on stderr
//! - **Metrics**: Prometheus counters and histograms in a process-wide registry
//!
//! ## Usage
//!
//! ```rust,ignore
//! use market_telemetry::{init_telemetry, TelemetryConfig};
//!
//! let _guard = init_telemetry(TelemetryConfig::from_env())?;
//! // ...
//! println!("{}", market_telemetry::gather_metrics()?);
//! ```
//!
//! ## Environment Variables
//!
//! | Variable | Default | Description |
//! |----------|---------|-------------|
//! | `MARKET_SERVICE_NAME` | `asset-market` | Service name in the startup log |
//! | `MARKET_LOG_LEVEL` / `RUST_LOG` | `info` | Filter directive |
//! | `MARKET_CONSOLE_OUTPUT` | `true` | Write logs at all |
//! | `MARKET_JSON_LOGS` | `false` | JSON log lines |

mod config;
mod logging;
pub mod metrics;

pub use config::TelemetryConfig;
pub use logging::{env_filter, init_logging};
pub use metrics::{
    gather_metrics, record_operation, record_trade, register_metrics, HistogramTimer,
    OPERATIONS_TOTAL, OPERATION_DURATION, TRADES_SETTLED, TRADE_VOLUME,
};

use thiserror::Error;

/// Telemetry initialization errors
#[derive(Error, Debug)]
pub enum TelemetryError {
    #[error("Failed to initialize logging: {0}")]
    LoggingInit(String),

    #[error("Failed to initialize Prometheus metrics: {0}")]
    MetricsInit(String),

    #[error("Invalid configuration: {0}")]
    Config(String),
}

/// Register metrics and install the global subscriber.
///
/// Hold the returned guard for the lifetime of the process.
pub fn init_telemetry(config: TelemetryConfig) -> Result<TelemetryGuard, TelemetryError> {
    // Metrics first so nothing recorded during startup is lost
    register_metrics()?;
    init_logging(&config)?;

    Ok(TelemetryGuard {
        service_name: config.service_name,
    })
}

/// Guard that keeps telemetry active.
pub struct TelemetryGuard {
    service_name: String,
}

impl Drop for TelemetryGuard {
    fn drop(&mut self) {
        tracing::info!(service = %self.service_name, "Shutting down telemetry...");
    }
}
