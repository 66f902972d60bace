//! Verification pipeline: syntax → disposable/profile → MX → SMTP probe.
//!
//! Each stage short-circuits the next one: an address that fails the syntax
//! filter never reaches DNS, and a domain without mail exchangers never gets
//! a TCP connection. Failures of the lower layers are folded into the
//! [`VerificationReport`]; [`Verifier::verify`] itself cannot fail.

mod report;

use std::future::Future;

pub use report::{ProbeSummary, VerificationReport};

use crate::disposable;
use crate::mx::{self, LookupMx, MxStatus, SystemResolver};
use crate::profile;
use crate::smtp_probe::{ProbeHandle, ProbeOptions, ProbeReport};
use crate::validator::{self, Address};

/// Runs the SMTP stage against one exchanger.
pub trait MailboxProbe: Send + Sync {
    fn probe(
        &self,
        exchange: &str,
        address: &Address,
    ) -> impl Future<Output = ProbeReport> + Send;
}

/// Probes over SMTP, one task and one fresh connection per call.
#[derive(Debug, Clone, Default)]
pub struct SmtpProber {
    options: ProbeOptions,
}

impl SmtpProber {
    pub fn new(options: ProbeOptions) -> Self {
        Self { options }
    }
}

impl MailboxProbe for SmtpProber {
    async fn probe(&self, exchange: &str, address: &Address) -> ProbeReport {
        // dropping this future drops the handle, which aborts the probe task
        ProbeHandle::spawn(
            exchange,
            address.domain(),
            address.as_str(),
            self.options.clone(),
        )
        .outcome()
        .await
    }
}

pub struct Verifier<R, P> {
    resolver: R,
    prober: P,
}

impl Verifier<SystemResolver, SmtpProber> {
    /// System DNS resolver plus the SMTP prober configured by `options`.
    pub fn from_system_conf(options: ProbeOptions) -> Result<Self, mx::Error> {
        Ok(Self::new(
            SystemResolver::from_system_conf()?,
            SmtpProber::new(options),
        ))
    }
}

impl<R, P> Verifier<R, P>
where
    R: LookupMx,
    P: MailboxProbe,
{
    pub fn new(resolver: R, prober: P) -> Self {
        Self { resolver, prober }
    }

    pub async fn verify(&self, email: &str) -> VerificationReport {
        let address = match validator::parse_address(email) {
            Ok(address) => address,
            Err(err) => {
                tracing::debug!(email, error = %err, "syntax check failed");
                return VerificationReport::invalid_syntax(email);
            }
        };

        let profile = profile::profile(&address);
        let disposable = disposable::is_disposable(&address);

        let exchange = match self.primary_exchange(&address).await {
            Some(exchange) => exchange,
            None => return VerificationReport::no_domain(email, disposable, profile),
        };

        let probe = self.prober.probe(&exchange, &address).await;
        tracing::info!(
            email,
            exchange = %exchange,
            verdict = ?probe.outcome.verdict(),
            "verification finished"
        );
        VerificationReport::probed(email, disposable, profile, &probe)
    }

    /// The lowest-preference exchanger, or `None` when the domain has none or
    /// DNS failed.
    async fn primary_exchange(&self, address: &Address) -> Option<String> {
        let ascii = match mx::normalize_domain(address.domain()) {
            Ok(ascii) => ascii,
            Err(err) => {
                tracing::warn!(domain = address.domain(), error = %err, "domain normalisation failed");
                return None;
            }
        };
        match mx::resolve_with(&self.resolver, &ascii).await {
            Ok(status @ MxStatus::Records(_)) => status.primary().map(|mx| mx.exchange.clone()),
            Ok(MxStatus::NoRecords) => {
                tracing::debug!(domain = %ascii, "no MX records");
                None
            }
            Err(err) => {
                tracing::warn!(domain = %ascii, error = %err, "MX lookup failed");
                None
            }
        }
    }
}

/// Verifies `email` with the system resolver and default probe options.
pub async fn verify_email(email: &str) -> Result<VerificationReport, mx::Error> {
    let verifier = Verifier::from_system_conf(ProbeOptions::default())?;
    Ok(verifier.verify(email).await)
}

#[cfg(test)]
mod tests;
