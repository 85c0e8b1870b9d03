use crate::domain::errors::MarketError;
use crate::ports::outbound::CredentialSource;

/// Credential bytes supplied up front, e.g. taken from a request envelope.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FixedCredential(Vec<u8>);

impl FixedCredential {
    pub fn new(bytes: impl Into<Vec<u8>>) -> Self {
        Self(bytes.into())
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }
}

impl CredentialSource for FixedCredential {
    fn caller_credential(&self) -> Result<Vec<u8>, MarketError> {
        Ok(self.0.clone())
    }
}

/// A platform that cannot produce a credential.
#[derive(Debug, Clone)]
pub struct UnavailableCredential {
    reason: String,
}

impl UnavailableCredential {
    pub fn new(reason: impl Into<String>) -> Self {
        Self {
            reason: reason.into(),
        }
    }
}

impl CredentialSource for UnavailableCredential {
    fn caller_credential(&self) -> Result<Vec<u8>, MarketError> {
        Err(MarketError::Credential(self.reason.clone()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixed_credential_returns_bytes() {
        let cred = FixedCredential::new("alice");
        assert_eq!(cred.caller_credential().unwrap(), b"alice".to_vec());
        assert_eq!(cred.as_bytes(), b"alice");
    }

    #[test]
    fn test_unavailable_credential_fails() {
        let cred = UnavailableCredential::new("no creator in proposal");
        assert_eq!(
            cred.caller_credential(),
            Err(MarketError::Credential("no creator in proposal".into()))
        );
    }
}
