//! DNS MX resolution.
//!
//! [`check_mx`] performs an asynchronous lookup through the system resolver
//! and returns a [`MxStatus`]; [`resolve_with`] takes any [`LookupMx`]
//! implementation so callers can substitute their own resolver.

mod error;
mod resolver;
mod types;

pub use error::MxError as Error;
pub use resolver::{LookupMx, SystemResolver, check_mx, normalize_domain, resolve_with};
pub use types::{MxRecord, MxStatus};

#[cfg(test)]
pub(crate) mod tests;
