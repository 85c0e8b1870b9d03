//! Prometheus metrics for marketplace operations.
//!
//! All metrics follow the naming convention: `am_market_<metric>_<unit>`

use lazy_static::lazy_static;
use prometheus::{
    exponential_buckets, Encoder, Histogram, HistogramOpts, HistogramVec, IntCounter,
    IntCounterVec, Opts, Registry, TextEncoder,
};

use crate::TelemetryError;

lazy_static! {
    /// Global metrics registry
    pub static ref REGISTRY: Registry = Registry::new();

    /// Dispatched operations by name and outcome
    pub static ref OPERATIONS_TOTAL: IntCounterVec = IntCounterVec::new(
        Opts::new("am_market_operations_total", "Marketplace operations dispatched"),
        &["operation", "outcome"]  // outcome: ok or an error kind
    ).expect("metric creation failed");

    /// Operation latency
    pub static ref OPERATION_DURATION: HistogramVec = HistogramVec::new(
        HistogramOpts::new(
            "am_market_operation_duration_seconds",
            "Time spent executing a marketplace operation"
        ).buckets(exponential_buckets(0.00001, 2.0, 16).expect("valid buckets")),
        &["operation"]
    ).expect("metric creation failed");

    /// Settled purchases
    pub static ref TRADES_SETTLED: IntCounter = IntCounter::new(
        "am_market_trades_settled_total",
        "Total purchases settled"
    ).expect("metric creation failed");

    /// Sum of settled purchase prices
    pub static ref TRADE_VOLUME: IntCounter = IntCounter::new(
        "am_market_trade_volume_total",
        "Total balance moved by settled purchases"
    ).expect("metric creation failed");
}

/// Register all metrics with the global registry.
///
/// Safe to call more than once; metrics that are already registered are
/// skipped.
pub fn register_metrics() -> Result<(), TelemetryError> {
    let metrics: Vec<Box<dyn prometheus::core::Collector>> = vec![
        Box::new(OPERATIONS_TOTAL.clone()),
        Box::new(OPERATION_DURATION.clone()),
        Box::new(TRADES_SETTLED.clone()),
        Box::new(TRADE_VOLUME.clone()),
    ];

    for metric in metrics {
        match REGISTRY.register(metric) {
            Ok(()) | Err(prometheus::Error::AlreadyReg) => {}
            Err(e) => return Err(TelemetryError::MetricsInit(e.to_string())),
        }
    }
    Ok(())
}

/// Count one dispatched operation.
pub fn record_operation(operation: &str, outcome: &str) {
    OPERATIONS_TOTAL
        .with_label_values(&[operation, outcome])
        .inc();
}

/// Count one settled purchase of `price`.
pub fn record_trade(price: u64) {
    TRADES_SETTLED.inc();
    TRADE_VOLUME.inc_by(price);
}

/// Render every registered metric in Prometheus text format.
pub fn gather_metrics() -> Result<String, TelemetryError> {
    let encoder = TextEncoder::new();
    let metric_families = REGISTRY.gather();
    let mut buffer = Vec::new();
    encoder
        .encode(&metric_families, &mut buffer)
        .map_err(|e| TelemetryError::MetricsInit(e.to_string()))?;
    String::from_utf8(buffer).map_err(|e| TelemetryError::MetricsInit(e.to_string()))
}

/// Observes elapsed time into a histogram when dropped.
pub struct HistogramTimer {
    histogram: Histogram,
    start: std::time::Instant,
}

impl HistogramTimer {
    pub fn new(histogram: Histogram) -> Self {
        Self {
            histogram,
            start: std::time::Instant::now(),
        }
    }

    /// Timer for `operation` on `OPERATION_DURATION`.
    pub fn for_operation(operation: &str) -> Self {
        Self::new(OPERATION_DURATION.with_label_values(&[operation]))
    }
}

impl Drop for HistogramTimer {
    fn drop(&mut self) {
        self.histogram.observe(self.start.elapsed().as_secs_f64());
    }
}
