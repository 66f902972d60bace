use std::fmt;

use thiserror::Error;

/// Outcome of the structural check: `ok` plus every reason that invalidated it.
#[cfg_attr(feature = "with-serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SyntaxReport {
    pub ok: bool,
    pub reasons: Vec<String>,
}

impl SyntaxReport {
    pub(crate) fn from_reasons(reasons: Vec<String>) -> Self {
        Self {
            ok: reasons.is_empty(),
            reasons,
        }
    }
}

/// An address that passed the syntax filter, split at its single `@`.
#[cfg_attr(feature = "with-serde", derive(serde::Serialize))]
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Address {
    full: String,
    local: String,
    domain: String,
}

impl Address {
    pub(crate) fn new(local: &str, domain: &str) -> Self {
        Self {
            full: format!("{local}@{domain}"),
            local: local.to_string(),
            domain: domain.to_string(),
        }
    }

    pub fn local(&self) -> &str {
        &self.local
    }

    pub fn domain(&self) -> &str {
        &self.domain
    }

    pub fn as_str(&self) -> &str {
        &self.full
    }
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.full)
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EmailError {
    #[error("invalid format: {}", reasons.join("; "))]
    InvalidFormat { reasons: Vec<String> },
}
