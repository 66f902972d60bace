use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use super::{Error, LookupMx, MxRecord, MxStatus, resolver};
use trust_dns_resolver::error::ResolveError;

type LookupResult = Result<Vec<MxRecord>, ResolveError>;
type LookupFn = dyn Fn(&str) -> LookupResult + Send + Sync;

/// Scripted resolver; counts how many lookups were issued.
pub(crate) struct StubResolver {
    pub on_lookup: Box<LookupFn>,
    pub calls: Arc<AtomicUsize>,
}

impl StubResolver {
    pub(crate) fn new<F>(f: F) -> Self
    where
        F: Fn(&str) -> LookupResult + Send + Sync + 'static,
    {
        Self {
            on_lookup: Box::new(f),
            calls: Arc::new(AtomicUsize::new(0)),
        }
    }

    pub(crate) fn with_records(records: Vec<MxRecord>) -> Self {
        Self::new(move |_| Ok(records.clone()))
    }

    pub(crate) fn failing(message: &'static str) -> Self {
        Self::new(move |_| Err(ResolveError::from(message)))
    }

    pub(crate) fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl LookupMx for StubResolver {
    async fn lookup_mx(&self, domain: &str) -> LookupResult {
        self.calls.fetch_add(1, Ordering::SeqCst);
        (self.on_lookup)(domain)
    }
}

#[test]
fn normalize_domain_rejects_empty() {
    let err = resolver::normalize_domain("  ").expect_err("empty domain should fail");
    assert!(matches!(err, Error::EmptyDomain));
}

#[test]
fn normalize_domain_converts_idn() {
    let ascii = resolver::normalize_domain("exämple.com").expect("idna");
    assert_eq!(ascii, "xn--exmple-cua.com");
}

#[tokio::test]
async fn resolve_with_sorts_and_dedups_records() {
    let stub = StubResolver::new(|domain| {
        assert_eq!(domain, "example.com");
        Ok(vec![
            MxRecord::new(20, "mx2.example.com"),
            MxRecord::new(10, "mx1.example.com"),
            MxRecord::new(10, "mx1.example.com"),
            MxRecord::new(30, "mx3.example.com"),
        ])
    });

    let status = resolver::resolve_with(&stub, "example.com")
        .await
        .expect("lookup succeeds");
    let records = status.records();
    assert_eq!(records.len(), 3);
    assert_eq!(records[0].preference, 10);
    assert_eq!(records[0].exchange, "mx1.example.com");
    assert_eq!(records[2].preference, 30);
    assert_eq!(status.primary().map(|r| r.exchange.as_str()), Some("mx1.example.com"));
    assert_eq!(stub.call_count(), 1);
}

#[tokio::test]
async fn resolve_with_handles_no_records() {
    let stub = StubResolver::with_records(Vec::new());
    let status = resolver::resolve_with(&stub, "example.com")
        .await
        .expect("lookup succeeds");
    assert!(matches!(status, MxStatus::NoRecords));
    assert!(status.primary().is_none());
}

#[tokio::test]
async fn null_mx_is_treated_as_no_records() {
    let stub = StubResolver::with_records(vec![MxRecord::new(0, "")]);
    let status = resolver::resolve_with(&stub, "example.com")
        .await
        .expect("lookup succeeds");
    assert!(matches!(status, MxStatus::NoRecords));
}

#[tokio::test]
async fn resolver_failure_is_a_lookup_error() {
    let stub = StubResolver::failing("server failure");
    let err = resolver::resolve_with(&stub, "example.com")
        .await
        .expect_err("lookup fails");
    match err {
        Error::Lookup { domain, .. } => assert_eq!(domain, "example.com"),
        other => panic!("unexpected error: {other:?}"),
    }
}

#[test]
fn normalize_exchange_trims_dot_and_lowercases() {
    let out = resolver::normalize_exchange("Mail.EXAMPLE.com.");
    assert_eq!(out, "mail.example.com");
}
