//! Syntax filter: the only stage that runs before any network I/O.

mod domain;
mod types;

use std::sync::LazyLock;

use regex::Regex;

pub use types::{Address, EmailError, SyntaxReport};

const MAX_ADDRESS_LEN: usize = 254;
const MAX_LOCAL_LEN: usize = 64;

static ADDRESS_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[a-zA-Z0-9_.+-]+@[a-zA-Z0-9-]+\.[a-zA-Z0-9-.]+$")
        .expect("address pattern is a valid regex")
});

/// Runs the structural check and collects every failure reason.
pub fn check_syntax(email: &str) -> SyntaxReport {
    let input = email.trim();
    let mut reasons = Vec::new();

    if input.len() > MAX_ADDRESS_LEN {
        reasons.push(format!("total length {} > {MAX_ADDRESS_LEN}", input.len()));
    }

    if !ADDRESS_PATTERN.is_match(input) {
        reasons.push("address does not match local@domain.tld".to_string());
        return SyntaxReport::from_reasons(reasons);
    }

    // the pattern guarantees exactly one '@'
    if let Some((local, domain)) = input.split_once('@') {
        if local.len() > MAX_LOCAL_LEN {
            reasons.push(format!(
                "local part length {} > {MAX_LOCAL_LEN}",
                local.len()
            ));
        }
        domain::check_labels(domain, &mut reasons);
    }

    SyntaxReport::from_reasons(reasons)
}

/// Parses `email` into an [`Address`], or returns the reasons it was refused.
pub fn parse_address(email: &str) -> Result<Address, EmailError> {
    let report = check_syntax(email);
    if !report.ok {
        return Err(EmailError::InvalidFormat {
            reasons: report.reasons,
        });
    }
    let input = email.trim();
    match input.split_once('@') {
        Some((local, domain)) => Ok(Address::new(local, domain)),
        None => Err(EmailError::InvalidFormat {
            reasons: vec!["missing '@'".to_string()],
        }),
    }
}
