//! # Operations
//!
//! Parses an operation name and its positional string arguments.
//!
//! | Name | Arguments |
//! |------|-----------|
//! | `enroll` | `[name]` |
//! | `list` | `[]` |
//! | `create` | `[name]` |
//! | `sell` | `[assetId, price]` |
//! | `buy` | `[assetId]` |

use crate::domain::entities::AssetId;
use crate::domain::errors::MarketError;

/// Every operation name the dispatcher recognizes.
pub const OPERATION_NAMES: [&str; 5] = ["enroll", "list", "create", "sell", "buy"];

/// A parsed marketplace request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Operation {
    Enroll { name: String },
    List,
    Create { name: String },
    Sell { asset_id: AssetId, price: u64 },
    Buy { asset_id: AssetId },
}

impl Operation {
    /// Parse `function` with `args`.
    ///
    /// Unknown names fail with `UnexpectedMethod`; a wrong argument count or
    /// a price that is not a non-negative integer fails with `InvalidArgument`.
    pub fn parse(function: &str, args: &[String]) -> Result<Self, MarketError> {
        match function {
            "enroll" => {
                let [name] = expect_args::<1>(args)?;
                Ok(Self::Enroll { name: name.clone() })
            }
            "list" => {
                expect_args::<0>(args)?;
                Ok(Self::List)
            }
            "create" => {
                let [name] = expect_args::<1>(args)?;
                Ok(Self::Create { name: name.clone() })
            }
            "sell" => {
                let [asset_id, price] = expect_args::<2>(args)?;
                Ok(Self::Sell {
                    asset_id: AssetId::new(asset_id.as_str()),
                    price: parse_price(price)?,
                })
            }
            "buy" => {
                let [asset_id] = expect_args::<1>(args)?;
                Ok(Self::Buy {
                    asset_id: AssetId::new(asset_id.as_str()),
                })
            }
            other => Err(MarketError::UnexpectedMethod(other.to_string())),
        }
    }

    /// Operation name as it appears on the wire.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Enroll { .. } => "enroll",
            Self::List => "list",
            Self::Create { .. } => "create",
            Self::Sell { .. } => "sell",
            Self::Buy { .. } => "buy",
        }
    }

    /// Log line for a failed attempt.
    pub fn failure_description(&self) -> &'static str {
        match self {
            Self::Enroll { .. } => "failed to enroll trader",
            Self::List => "failed to list trader and assets",
            Self::Create { .. } => "failed to create asset",
            Self::Sell { .. } => "failed to put asset on sale",
            Self::Buy { .. } => "failed to purchase asset",
        }
    }
}

/// Bounded label for `function`: its own name if known, else `"unknown"`.
pub fn operation_label(function: &str) -> &'static str {
    OPERATION_NAMES
        .iter()
        .find(|name| **name == function)
        .copied()
        .unwrap_or("unknown")
}

fn expect_args<const N: usize>(args: &[String]) -> Result<&[String; N], MarketError> {
    args.try_into().map_err(|_| {
        let noun = if N == 1 { "parameter" } else { "parameters" };
        MarketError::InvalidArgument(format!("expect {} {}, got {}", N, noun, args.len()))
    })
}

fn parse_price(raw: &str) -> Result<u64, MarketError> {
    raw.parse::<u64>().map_err(|_| {
        MarketError::InvalidArgument(format!(
            "price must be a non-negative integer, got {raw:?}"
        ))
    })
}
