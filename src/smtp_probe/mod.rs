//! Live SMTP mailbox probe.
//!
//! [`probe`] connects to one mail exchanger on port 25, walks
//! `HELO` → `MAIL FROM` → `RCPT TO` and reports whether the recipient was
//! accepted, without ever sending `DATA`. The conversation is modelled by
//! [`ProbeSession`], an I/O-free state machine that resolves exactly once;
//! [`ProbeHandle`] runs a probe on its own task and can be abandoned.

mod error;
mod options;
mod probe;
mod reply;
mod session;
mod transport;
mod types;

pub use error::ProbeError;
pub use options::{ProbeOptions, ReplyMatching};
pub use probe::{ProbeHandle, probe};
pub use session::{Action, MAX_REPLY_LINES, ProbeSession};
pub use types::{IndeterminateReason, ProbeOutcome, ProbeReport, SmtpEvent, Step, Verdict};
