//! # Composite Keys
//!
//! Ledger keys are built from a namespace tag and one or more string parts:
//!
//! ```text
//! U+0000 namespace U+0000 part_1 U+0000 part_2 U+0000 ...
//! ```
//!
//! Every component is terminated by `U+0000` and no component may contain it,
//! so an encoded key maps back to exactly one `(namespace, parts)` pair and no
//! key of one namespace is a prefix-collision with another. `U+10FFFF` is
//! reserved as the upper bound of range scans and is rejected as well.
//!
//! A key built from a namespace and a *leading subset* of parts is the scan
//! prefix for every key that extends it.

use crate::domain::errors::StoreError;

/// Separator between composite key components.
pub const COMPONENT_SEPARATOR: char = '\u{0}';

/// Reserved code point, never valid inside a component.
pub const MAX_UNICODE_RUNE: char = '\u{10FFFF}';

/// A decoded composite key.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CompositeKey {
    namespace: String,
    parts: Vec<String>,
}

impl CompositeKey {
    /// Build a key, validating every component.
    pub fn new<S: AsRef<str>>(namespace: &str, parts: &[S]) -> Result<Self, StoreError> {
        if namespace.is_empty() {
            return Err(StoreError::invalid_key("namespace must not be empty"));
        }
        validate_component(namespace)?;
        for part in parts {
            validate_component(part.as_ref())?;
        }

        Ok(Self {
            namespace: namespace.to_string(),
            parts: parts.iter().map(|p| p.as_ref().to_string()).collect(),
        })
    }

    /// Parse an encoded key.
    pub fn parse(key: &str) -> Result<Self, StoreError> {
        let inner = key
            .strip_prefix(COMPONENT_SEPARATOR)
            .and_then(|rest| rest.strip_suffix(COMPONENT_SEPARATOR))
            .ok_or_else(|| StoreError::invalid_key("key is not a composite key"))?;

        let mut components = inner.split(COMPONENT_SEPARATOR);
        let namespace = components.next().unwrap_or_default();
        let parts: Vec<&str> = components.collect();

        Self::new(namespace, &parts)
    }

    /// Namespace tag.
    pub fn namespace(&self) -> &str {
        &self.namespace
    }

    /// Identifying parts, in order.
    pub fn parts(&self) -> &[String] {
        &self.parts
    }

    /// Encode to the on-ledger string form.
    pub fn encode(&self) -> String {
        let len = 2
            + self.namespace.len()
            + self.parts.iter().map(|p| p.len() + 1).sum::<usize>();
        let mut key = String::with_capacity(len);

        key.push(COMPONENT_SEPARATOR);
        key.push_str(&self.namespace);
        key.push(COMPONENT_SEPARATOR);
        for part in &self.parts {
            key.push_str(part);
            key.push(COMPONENT_SEPARATOR);
        }
        key
    }
}

fn validate_component(component: &str) -> Result<(), StoreError> {
    if let Some(bad) = component
        .chars()
        .find(|c| *c == COMPONENT_SEPARATOR || *c == MAX_UNICODE_RUNE)
    {
        return Err(StoreError::invalid_key(format!(
            "component {:?} contains reserved character U+{:04X}",
            component, bad as u32
        )));
    }
    Ok(())
}

/// Encode `namespace` + `parts` into a ledger key.
pub fn create_composite_key<S: AsRef<str>>(
    namespace: &str,
    parts: &[S],
) -> Result<String, StoreError> {
    CompositeKey::new(namespace, parts).map(|key| key.encode())
}

/// Split a ledger key back into `(namespace, parts)`.
pub fn split_composite_key(key: &str) -> Result<(String, Vec<String>), StoreError> {
    let key = CompositeKey::parse(key)?;
    Ok((key.namespace, key.parts))
}
