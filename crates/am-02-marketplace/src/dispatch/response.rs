use crate::domain::errors::MarketError;

/// Outcome class of a dispatched call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    Ok,
    Error,
}

impl Status {
    /// Numeric status code: 200 or 500.
    pub fn code(self) -> u16 {
        match self {
            Self::Ok => 200,
            Self::Error => 500,
        }
    }
}

/// Response envelope returned by every dispatch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Response {
    pub status: Status,
    /// Error display string; empty on success.
    pub message: String,
    /// Operation result; empty unless the operation returns data.
    pub payload: Vec<u8>,
}

impl Response {
    pub fn ok(payload: Vec<u8>) -> Self {
        Self {
            status: Status::Ok,
            message: String::new(),
            payload,
        }
    }

    pub fn error(err: &MarketError) -> Self {
        Self {
            status: Status::Error,
            message: err.to_string(),
            payload: Vec::new(),
        }
    }

    pub fn is_ok(&self) -> bool {
        self.status == Status::Ok
    }
}

impl From<Result<Vec<u8>, MarketError>> for Response {
    fn from(result: Result<Vec<u8>, MarketError>) -> Self {
        match result {
            Ok(payload) => Self::ok(payload),
            Err(err) => Self::error(&err),
        }
    }
}
