//! # Operation Dispatch
//!
//! Routes an operation name plus string arguments to `MarketplaceApi` and
//! wraps the result in a `Response`. Only `list` returns a payload: the JSON
//! `MarketSnapshot`. Every other success has an empty payload.

mod operation;
mod response;

pub use operation::{operation_label, Operation, OPERATION_NAMES};
pub use response::{Response, Status};

use tracing::{info, instrument, warn};

use crate::domain::entities::{Asset, MarketSnapshot, PurchaseReceipt, Trader};
use crate::domain::errors::MarketError;
use crate::ports::inbound::MarketplaceApi;
use crate::ports::outbound::CredentialSource;

/// Typed result of a dispatched operation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Enrolled(Trader),
    Snapshot(MarketSnapshot),
    Created(Asset),
    Listed(Asset),
    Purchased(PurchaseReceipt),
}

impl Outcome {
    /// Wire payload for this outcome.
    pub fn into_payload(self) -> Result<Vec<u8>, MarketError> {
        match self {
            Self::Snapshot(snapshot) => Ok(serde_json::to_vec(&snapshot)?),
            Self::Enrolled(_) | Self::Created(_) | Self::Listed(_) | Self::Purchased(_) => {
                Ok(Vec::new())
            }
        }
    }
}

/// Entry point used by hosts.
pub struct MarketplaceHandler<A: MarketplaceApi> {
    api: A,
}

impl<A: MarketplaceApi> MarketplaceHandler<A> {
    pub fn new(api: A) -> Self {
        Self { api }
    }

    pub fn api(&self) -> &A {
        &self.api
    }

    pub fn into_inner(self) -> A {
        self.api
    }

    /// Instantiation hook. Touches no state.
    #[instrument(name = "init", skip(self))]
    pub fn init(&mut self, function: &str, args: &[String]) -> Response {
        info!("[am-02] Init()");
        Response::ok(Vec::new())
    }

    /// Dispatch and wrap the result in a response envelope.
    pub fn invoke(
        &mut self,
        caller: &dyn CredentialSource,
        function: &str,
        args: &[String],
    ) -> Response {
        self.handle(caller, function, args)
            .and_then(Outcome::into_payload)
            .into()
    }

    /// Dispatch, returning the typed outcome.
    #[instrument(name = "invoke", skip(self, caller))]
    pub fn handle(
        &mut self,
        caller: &dyn CredentialSource,
        function: &str,
        args: &[String],
    ) -> Result<Outcome, MarketError> {
        info!("[am-02] Invoke()");

        let operation = Operation::parse(function, args).map_err(|err| {
            warn!(kind = err.kind(), error = %err, "[am-02] Rejected request");
            err
        })?;

        self.execute(caller, &operation).map_err(|err| {
            warn!(
                operation = operation.name(),
                kind = err.kind(),
                error = %err,
                "[am-02] {}",
                operation.failure_description()
            );
            err
        })
    }

    /// Run an already-parsed operation.
    pub fn execute(
        &mut self,
        caller: &dyn CredentialSource,
        operation: &Operation,
    ) -> Result<Outcome, MarketError> {
        match operation {
            Operation::Enroll { name } => self.api.enroll(caller, name).map(Outcome::Enrolled),
            Operation::List => self.api.list_snapshot(caller).map(Outcome::Snapshot),
            Operation::Create { name } => self.api.create_asset(caller, name).map(Outcome::Created),
            Operation::Sell { asset_id, price } => self
                .api
                .list_for_sale(caller, asset_id, *price)
                .map(Outcome::Listed),
            Operation::Buy { asset_id } => self.api.buy(caller, asset_id).map(Outcome::Purchased),
        }
    }
}
