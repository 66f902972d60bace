use std::fmt;

#[cfg(feature = "with-serde")]
use serde::{Deserialize, Serialize};

/// Position of a probe in the HELO / MAIL FROM / RCPT TO dialogue.
#[cfg_attr(feature = "with-serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    AwaitingGreeting,
    AwaitingHeloAck,
    AwaitingMailFromAck,
    AwaitingRcptToAck,
    Terminal,
}

impl fmt::Display for Step {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::AwaitingGreeting => "greeting",
            Self::AwaitingHeloAck => "HELO",
            Self::AwaitingMailFromAck => "MAIL FROM",
            Self::AwaitingRcptToAck => "RCPT TO",
            Self::Terminal => "terminal",
        })
    }
}

/// Why a probe could neither confirm nor reject the mailbox.
#[cfg_attr(feature = "with-serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IndeterminateReason {
    Connect { message: String },
    Timeout { step: Step },
    UnexpectedReply { step: Step, reply: String },
    ConnectionClosed { step: Step },
    Io { step: Step, message: String },
    ReplyTooLong { step: Step },
    Abandoned,
}

impl fmt::Display for IndeterminateReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Connect { message } => write!(f, "connection failed: {message}"),
            Self::Timeout { step } => write!(f, "timed out waiting for {step} reply"),
            Self::UnexpectedReply { step, reply } => {
                write!(f, "unexpected {step} reply: {reply}")
            }
            Self::ConnectionClosed { step } => {
                write!(f, "connection closed while waiting for {step} reply")
            }
            Self::Io { step, message } => write!(f, "I/O error during {step}: {message}"),
            Self::ReplyTooLong { step } => write!(f, "{step} reply line too long"),
            Self::Abandoned => f.write_str("probe abandoned"),
        }
    }
}

/// The single result of one probe.
#[cfg_attr(feature = "with-serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProbeOutcome {
    /// `RCPT TO` was answered with 250.
    MailboxConfirmed,
    /// `RCPT TO` was answered with anything else; `reply` is the raw line.
    MailboxRejected { reply: String },
    Indeterminate(IndeterminateReason),
}

impl ProbeOutcome {
    pub fn verdict(&self) -> Verdict {
        match self {
            Self::MailboxConfirmed => Verdict::Accepted,
            Self::MailboxRejected { .. } => Verdict::Rejected,
            Self::Indeterminate(_) => Verdict::Indeterminate,
        }
    }

    /// The exchanger answered `RCPT TO` one way or the other.
    pub fn is_conclusive(&self) -> bool {
        !matches!(self, Self::Indeterminate(_))
    }
}

impl fmt::Display for ProbeOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MailboxConfirmed => f.write_str("mailbox confirmed"),
            Self::MailboxRejected { reply } => write!(f, "mailbox rejected ({reply})"),
            Self::Indeterminate(reason) => write!(f, "indeterminate ({reason})"),
        }
    }
}

/// Tri-state view of a session: resolved accepted, resolved rejected, or
/// anything else (still running, or resolved without proof either way).
#[cfg_attr(feature = "with-serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "with-serde", serde(rename_all = "lowercase"))]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    Accepted,
    Rejected,
    Indeterminate,
}

/// A recorded transcript event used for diagnostics.
#[cfg_attr(feature = "with-serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SmtpEvent {
    Sent { step: Step, command: String },
    Received { step: Step, line: String },
    Error { step: Step, message: String },
}

impl fmt::Display for SmtpEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Sent { command, .. } => write!(f, "C: {command}"),
            Self::Received { line, .. } => write!(f, "S: {line}"),
            Self::Error { step, message } => write!(f, "! {step}: {message}"),
        }
    }
}

/// What [`probe`](crate::smtp_probe::probe) hands back: the outcome plus the
/// transcript that led to it.
#[cfg_attr(feature = "with-serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProbeReport {
    pub exchange: String,
    pub outcome: ProbeOutcome,
    pub transcript: Vec<SmtpEvent>,
}

impl ProbeReport {
    pub(crate) fn abandoned(exchange: impl Into<String>) -> Self {
        Self {
            exchange: exchange.into(),
            outcome: ProbeOutcome::Indeterminate(IndeterminateReason::Abandoned),
            transcript: Vec::new(),
        }
    }
}
