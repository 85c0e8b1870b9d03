//! # Request Runtime
//!
//! One JSON line in, one JSON line out.
//!
//! ```text
//! → {"creator":"alice-cert","function":"enroll","args":["Alice"]}
//! ← {"tx_id":"6f1c…","status":200,"message":"","payload":null}
//! ```
//!
//! The `creator` string stands in for the verified credential a ledger
//! platform would attach to the proposal. `payload` is the operation's JSON
//! result (`list` only) or `null`.

use am_01_ledger_store::KeyValueStore;
use am_02_marketplace::dispatch::operation_label;
use am_02_marketplace::prelude::*;
use market_telemetry::{record_operation, record_trade, HistogramTimer};
use serde::{Deserialize, Serialize};
use tracing::{info_span, warn};
use uuid::Uuid;

/// An inbound request line.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Request {
    pub creator: String,
    pub function: String,
    #[serde(default)]
    pub args: Vec<String>,
}

/// An outbound response line.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ResponseLine {
    pub tx_id: String,
    pub status: u16,
    pub message: String,
    pub payload: serde_json::Value,
}

impl ResponseLine {
    fn new(tx_id: &Uuid, response: Response) -> Self {
        // Payloads are JSON documents; anything else is passed through as text.
        let payload = if response.payload.is_empty() {
            serde_json::Value::Null
        } else {
            serde_json::from_slice(&response.payload).unwrap_or_else(|_| {
                serde_json::Value::String(String::from_utf8_lossy(&response.payload).into_owned())
            })
        };

        Self {
            tx_id: tx_id.to_string(),
            status: response.status.code(),
            message: response.message,
            payload,
        }
    }
}

/// Marketplace host over a ledger store.
pub struct MarketNode<KV: KeyValueStore> {
    handler: MarketplaceHandler<MarketplaceService<KV>>,
}

impl<KV: KeyValueStore> MarketNode<KV> {
    /// Wrap `store` and run the marketplace's init hook.
    pub fn new(store: KV, config: MarketConfig) -> Self {
        let mut handler = MarketplaceHandler::new(MarketplaceService::new(store, config));
        handler.init("init", &[]);
        Self { handler }
    }

    pub fn service(&self) -> &MarketplaceService<KV> {
        self.handler.api()
    }

    pub fn into_store(self) -> KV {
        self.handler.into_inner().into_store()
    }

    /// Process one raw request line.
    pub fn process_line(&mut self, line: &str) -> ResponseLine {
        let tx_id = Uuid::new_v4();
        let span = info_span!("tx", tx_id = %tx_id);
        let _enter = span.enter();

        match serde_json::from_str::<Request>(line) {
            Ok(request) => ResponseLine::new(&tx_id, self.dispatch(&request)),
            Err(e) => {
                warn!(error = %e, "Malformed request line");
                record_operation("unknown", "malformed");
                let err = MarketError::InvalidArgument(format!("malformed request: {e}"));
                ResponseLine::new(&tx_id, Response::error(&err))
            }
        }
    }

    /// Dispatch a decoded request and record its metrics.
    pub fn dispatch(&mut self, request: &Request) -> Response {
        let label = operation_label(&request.function);
        let _timer = HistogramTimer::for_operation(label);
        let caller = FixedCredential::new(request.creator.as_bytes());

        let result = self
            .handler
            .handle(&caller, &request.function, &request.args);

        match &result {
            Ok(Outcome::Purchased(receipt)) => {
                record_operation(label, "ok");
                record_trade(receipt.price);
            }
            Ok(_) => record_operation(label, "ok"),
            Err(err) => record_operation(label, err.kind()),
        }

        result.and_then(Outcome::into_payload).into()
    }
}
