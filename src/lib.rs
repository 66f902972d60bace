#![forbid(unsafe_code)]
//! E-mail address verification: syntax, disposable domains,
//! MX lookup and a live SMTP mailbox probe.

pub mod disposable;
pub mod mx;
pub mod profile;
pub mod smtp_probe;
pub mod validator;
pub mod verify;

#[cfg(feature = "with-server")]
pub mod server;

pub use disposable::{is_disposable, is_disposable_domain};
pub use mx::{Error as MxError, LookupMx, MxRecord, MxStatus, SystemResolver, check_mx};
pub use profile::{Gender, LocalPartProfile, Role};
pub use smtp_probe::{
    IndeterminateReason, ProbeHandle, ProbeOptions, ProbeOutcome, ProbeReport, ReplyMatching,
    Verdict, probe,
};
pub use validator::{Address, EmailError, SyntaxReport, check_syntax, parse_address};
pub use verify::{
    MailboxProbe, ProbeSummary, SmtpProber, VerificationReport, Verifier, verify_email,
};
