use std::sync::Mutex;
use std::time::Duration;

use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader};
use tokio::net::TcpListener;

use super::*;
use crate::mx::MxRecord;
use crate::mx::tests::StubResolver;
use crate::profile::{Gender, Role};
use crate::smtp_probe::{IndeterminateReason, ProbeOutcome, Step, Verdict};

/// Records every probe request and answers with a fixed outcome.
struct ScriptedProber {
    outcome: ProbeOutcome,
    calls: Mutex<Vec<(String, String)>>,
}

impl ScriptedProber {
    fn new(outcome: ProbeOutcome) -> Self {
        Self {
            outcome,
            calls: Mutex::new(Vec::new()),
        }
    }

    fn calls(&self) -> Vec<(String, String)> {
        self.calls.lock().expect("calls lock").clone()
    }
}

impl MailboxProbe for ScriptedProber {
    async fn probe(&self, exchange: &str, address: &Address) -> ProbeReport {
        self.calls
            .lock()
            .expect("calls lock")
            .push((exchange.to_string(), address.to_string()));
        ProbeReport {
            exchange: exchange.to_string(),
            outcome: self.outcome.clone(),
            transcript: Vec::new(),
        }
    }
}

fn records() -> Vec<MxRecord> {
    vec![
        MxRecord::new(20, "mx2.example.com"),
        MxRecord::new(5, "mx1.example.com"),
    ]
}

#[tokio::test]
async fn bad_syntax_short_circuits_all_io() {
    let verifier = Verifier::new(
        StubResolver::with_records(records()),
        ScriptedProber::new(ProbeOutcome::MailboxConfirmed),
    );
    let report = verifier.verify("not-an-address").await;
    assert!(!report.format);
    assert_eq!(report.reason, "Invalid syntax");
    assert_eq!(report.exists, None);
    assert_eq!(report.disposable, None);
    assert_eq!(verifier.resolver.call_count(), 0);
    assert!(verifier.prober.calls().is_empty());
}

#[tokio::test]
async fn missing_mx_never_probes() {
    let verifier = Verifier::new(
        StubResolver::with_records(Vec::new()),
        ScriptedProber::new(ProbeOutcome::MailboxConfirmed),
    );
    let report = verifier.verify("john.doe@nowhere.example").await;
    assert!(report.format);
    assert_eq!(report.domain, Some(false));
    assert_eq!(report.exists, Some(false));
    assert_eq!(report.reason, "Domain does not exist");
    assert_eq!(report.name.as_deref(), Some("john"));
    assert_eq!(report.gender, Some(Gender::Male));
    assert_eq!(report.phone_number, None);
    assert_eq!(report.phone_status, None);
    assert_eq!(report.need_number_verify, Some(false));
    assert_eq!(verifier.resolver.call_count(), 1);
    assert!(verifier.prober.calls().is_empty());
}

#[tokio::test]
async fn dns_failure_counts_as_missing_domain() {
    let verifier = Verifier::new(
        StubResolver::failing("SERVFAIL"),
        ScriptedProber::new(ProbeOutcome::MailboxConfirmed),
    );
    let report = verifier.verify("alice@example.com").await;
    assert_eq!(report.domain, Some(false));
    assert!(verifier.prober.calls().is_empty());
}

#[tokio::test]
async fn probes_only_the_preferred_exchanger() {
    let verifier = Verifier::new(
        StubResolver::with_records(records()),
        ScriptedProber::new(ProbeOutcome::MailboxConfirmed),
    );
    let report = verifier.verify("info@example.com").await;
    assert_eq!(
        verifier.prober.calls(),
        vec![("mx1.example.com".to_string(), "info@example.com".to_string())]
    );
    assert_eq!(report.exists, Some(true));
    assert_eq!(report.reason, "Email is valid");
    assert_eq!(report.mx_server.as_deref(), Some("mx1.example.com"));
    assert_eq!(report.role, Some(Role::Admin));
    assert!(report.is_deliverable());
    assert_eq!(
        report.smtp.as_ref().map(|smtp| smtp.verdict),
        Some(Verdict::Accepted)
    );
}

#[tokio::test]
async fn rejection_and_indeterminate_are_kept_apart() {
    let rejected = Verifier::new(
        StubResolver::with_records(records()),
        ScriptedProber::new(ProbeOutcome::MailboxRejected {
            reply: "550 no".to_string(),
        }),
    );
    let report = rejected.verify("alice@example.com").await;
    assert_eq!(report.exists, Some(false));
    assert_eq!(report.reason, "Email does not exist (SMTP check)");

    let unknown = Verifier::new(
        StubResolver::with_records(records()),
        ScriptedProber::new(ProbeOutcome::Indeterminate(IndeterminateReason::Timeout {
            step: Step::AwaitingHeloAck,
        })),
    );
    let report = unknown.verify("alice@example.com").await;
    assert_eq!(report.exists, None);
    assert_eq!(report.domain, Some(true));
    assert!(report.reason.contains("timed out waiting for HELO reply"));
    assert!(!report.is_deliverable());
}

#[tokio::test]
async fn phone_status_follows_the_probe() {
    let verifier = Verifier::new(
        StubResolver::with_records(records()),
        ScriptedProber::new(ProbeOutcome::MailboxConfirmed),
    );
    let report = verifier.verify("0612345678901@gmail.com").await;
    assert_eq!(report.phone_number, Some(true));
    assert_eq!(report.phone_status.as_deref(), Some("Phone number detected"));
    assert_eq!(report.need_number_verify, Some(true));

    let report = verifier.verify("alice@example.com").await;
    assert_eq!(report.phone_number, Some(false));
    assert_eq!(report.phone_status.as_deref(), Some("No phone number detected"));
}

#[tokio::test]
async fn disposable_domain_is_flagged() {
    let verifier = Verifier::new(
        StubResolver::with_records(records()),
        ScriptedProber::new(ProbeOutcome::MailboxConfirmed),
    );
    let report = verifier.verify("someone@mailinator.com").await;
    assert_eq!(report.disposable, Some(true));
}

#[tokio::test]
async fn smtp_prober_talks_to_the_exchanger() {
    let listener = TcpListener::bind("127.0.0.1:0").await.expect("bind");
    let port = listener.local_addr().expect("addr").port();
    let server = tokio::spawn(async move {
        let (stream, _) = listener.accept().await.expect("accept");
        let (read, mut write) = stream.into_split();
        let mut lines = BufReader::new(read).lines();
        write.write_all(b"220 ready\r\n").await.ok();
        let mut replies = ["250 hi\r\n", "250 ok\r\n", "550 unknown\r\n"].into_iter();
        let mut seen = Vec::new();
        while let Ok(Some(line)) = lines.next_line().await {
            seen.push(line);
            if let Some(reply) = replies.next() {
                write.write_all(reply.as_bytes()).await.ok();
            }
        }
        seen
    });

    let prober = SmtpProber::new(ProbeOptions {
        port,
        step_timeout: Duration::from_secs(2),
        ..ProbeOptions::default()
    });
    let verifier = Verifier::new(
        StubResolver::with_records(vec![MxRecord::new(10, "127.0.0.1")]),
        prober,
    );
    let report = verifier.verify("ghost@example.com").await;
    assert_eq!(report.exists, Some(false));
    assert_eq!(report.mx_server.as_deref(), Some("127.0.0.1"));

    let seen = server.await.expect("server task");
    assert_eq!(seen.first().map(String::as_str), Some("HELO example.com"));
    assert_eq!(seen.get(2).map(String::as_str), Some("RCPT TO:<ghost@example.com>"));
}
