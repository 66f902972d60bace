use std::future::Future;

use trust_dns_resolver::TokioAsyncResolver;
use trust_dns_resolver::error::{ResolveError, ResolveErrorKind};

use super::{Error, MxRecord, MxStatus};

/// Source of MX answers. Implemented by [`SystemResolver`] and by test stubs.
pub trait LookupMx: Send + Sync {
    fn lookup_mx(
        &self,
        domain: &str,
    ) -> impl Future<Output = Result<Vec<MxRecord>, ResolveError>> + Send;
}

/// The resolver configured on this host (`/etc/resolv.conf` or platform
/// equivalent). Cheap to clone; clones share the same cache.
#[derive(Clone)]
pub struct SystemResolver {
    inner: TokioAsyncResolver,
}

impl SystemResolver {
    pub fn from_system_conf() -> Result<Self, Error> {
        let inner = TokioAsyncResolver::tokio_from_system_conf().map_err(Error::resolver_init)?;
        Ok(Self { inner })
    }
}

impl LookupMx for SystemResolver {
    async fn lookup_mx(&self, domain: &str) -> Result<Vec<MxRecord>, ResolveError> {
        let lookup = self.inner.mx_lookup(domain).await?;
        Ok(lookup
            .iter()
            .map(|mx| MxRecord::new(mx.preference(), normalize_exchange(&mx.exchange().to_utf8())))
            .collect())
    }
}

/// Lookup MX records for `domain` using the system resolver.
///
/// The domain is normalized via IDNA before querying DNS.
pub async fn check_mx(domain: &str) -> Result<MxStatus, Error> {
    let ascii = normalize_domain(domain)?;
    let resolver = SystemResolver::from_system_conf()?;
    resolve_with(&resolver, &ascii).await
}

/// Runs the lookup through `resolver`, sorting by preference and dropping
/// duplicates. An NXDOMAIN/NODATA answer is reported as [`MxStatus::NoRecords`].
pub async fn resolve_with<R>(resolver: &R, ascii_domain: &str) -> Result<MxStatus, Error>
where
    R: LookupMx,
{
    let mut records = match resolver.lookup_mx(ascii_domain).await {
        Ok(records) => records,
        Err(err) if matches!(err.kind(), ResolveErrorKind::NoRecordsFound { .. }) => Vec::new(),
        Err(err) => return Err(Error::lookup(ascii_domain, err)),
    };

    records.retain(|record| !record.exchange.is_empty());
    records.sort();
    records.dedup();

    tracing::debug!(domain = ascii_domain, count = records.len(), "MX lookup finished");

    if records.is_empty() {
        Ok(MxStatus::NoRecords)
    } else {
        Ok(MxStatus::Records(records))
    }
}

pub fn normalize_domain(domain: &str) -> Result<String, Error> {
    let trimmed = domain.trim();
    if trimmed.is_empty() {
        return Err(Error::EmptyDomain);
    }
    idna::domain_to_ascii(trimmed).map_err(Error::idna)
}

pub(crate) fn normalize_exchange(exchange: &str) -> String {
    exchange.trim_end_matches('.').to_ascii_lowercase()
}
