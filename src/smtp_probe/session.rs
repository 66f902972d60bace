//! I/O-free state machine for one probe conversation.
//!
//! The driver feeds it connection events ([`ProbeSession::on_line`],
//! [`ProbeSession::on_end`], ...) and executes the returned [`Action`].
//! Every terminal path goes through [`ProbeSession::resolve`], which flips
//! `resolved` exactly once; any event after that returns `None`.

use super::options::ReplyMatching;
use super::reply::ReplyMatcher;
use super::types::{IndeterminateReason, ProbeOutcome, ProbeReport, SmtpEvent, Step, Verdict};

/// Upper bound for the lines of one reply, continuation lines included.
pub const MAX_REPLY_LINES: usize = 64;

/// What the driver must do after an event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Write this command (without CRLF) and wait for the next reply.
    Send(String),
    /// The outcome is final; write `QUIT` and close.
    QuitAndClose(ProbeOutcome),
    /// The outcome is final; the connection is unusable, just close it.
    Close(ProbeOutcome),
}

impl Action {
    pub fn outcome(&self) -> Option<&ProbeOutcome> {
        match self {
            Self::Send(_) => None,
            Self::QuitAndClose(outcome) | Self::Close(outcome) => Some(outcome),
        }
    }
}

#[derive(Debug)]
pub struct ProbeSession {
    step: Step,
    resolved: bool,
    outcome: Option<ProbeOutcome>,
    helo_domain: String,
    mail_from: String,
    recipient: String,
    matcher: ReplyMatcher,
    /// Lines received since the current step was entered.
    reply_lines: usize,
    transcript: Vec<SmtpEvent>,
}

impl ProbeSession {
    pub fn new(
        helo_domain: impl Into<String>,
        mail_from: impl Into<String>,
        recipient: impl Into<String>,
        matching: ReplyMatching,
    ) -> Self {
        Self {
            step: Step::AwaitingGreeting,
            resolved: false,
            outcome: None,
            helo_domain: helo_domain.into(),
            mail_from: mail_from.into(),
            recipient: recipient.into(),
            matcher: ReplyMatcher::new(matching),
            reply_lines: 0,
            transcript: Vec::new(),
        }
    }

    pub fn step(&self) -> Step {
        self.step
    }

    pub fn is_resolved(&self) -> bool {
        self.resolved
    }

    pub fn outcome(&self) -> Option<&ProbeOutcome> {
        self.outcome.as_ref()
    }

    pub fn verdict(&self) -> Verdict {
        self.outcome
            .as_ref()
            .map_or(Verdict::Indeterminate, ProbeOutcome::verdict)
    }

    pub fn transcript(&self) -> &[SmtpEvent] {
        &self.transcript
    }

    /// One line from the server, without its line terminator.
    pub fn on_line(&mut self, line: &str) -> Option<Action> {
        if self.resolved {
            return None;
        }
        self.transcript.push(SmtpEvent::Received {
            step: self.step,
            line: line.to_string(),
        });
        self.reply_lines += 1;
        if self.reply_lines > MAX_REPLY_LINES {
            return self.on_reply_too_long();
        }
        let reply = self.matcher.push(line)?;

        match self.step {
            Step::AwaitingGreeting if self.matcher.is_greeting(reply) => {
                Some(self.advance(Step::AwaitingHeloAck, format!("HELO {}", self.helo_domain)))
            }
            Step::AwaitingHeloAck if self.matcher.is_ok(reply) => Some(self.advance(
                Step::AwaitingMailFromAck,
                format!("MAIL FROM:<{}>", self.mail_from),
            )),
            Step::AwaitingMailFromAck if self.matcher.is_ok(reply) => Some(self.advance(
                Step::AwaitingRcptToAck,
                format!("RCPT TO:<{}>", self.recipient),
            )),
            Step::AwaitingRcptToAck => {
                let outcome = if self.matcher.is_ok(reply) {
                    ProbeOutcome::MailboxConfirmed
                } else {
                    ProbeOutcome::MailboxRejected {
                        reply: reply.to_string(),
                    }
                };
                self.resolve(outcome).map(Action::QuitAndClose)
            }
            Step::Terminal => None,
            step => {
                let reason = IndeterminateReason::UnexpectedReply {
                    step,
                    reply: reply.to_string(),
                };
                self.resolve(ProbeOutcome::Indeterminate(reason))
                    .map(Action::Close)
            }
        }
    }

    /// Socket error (reset, write failure, ...).
    pub fn on_error(&mut self, message: impl Into<String>) -> Option<Action> {
        if self.resolved {
            return None;
        }
        let message = message.into();
        self.transcript.push(SmtpEvent::Error {
            step: self.step,
            message: message.clone(),
        });
        let reason = IndeterminateReason::Io {
            step: self.step,
            message,
        };
        self.fail(reason)
    }

    /// The peer finished sending (EOF).
    pub fn on_end(&mut self) -> Option<Action> {
        let reason = IndeterminateReason::ConnectionClosed { step: self.step };
        self.fail(reason)
    }

    /// The socket is gone, whichever side closed it.
    pub fn on_close(&mut self) -> Option<Action> {
        let reason = IndeterminateReason::ConnectionClosed { step: self.step };
        self.fail(reason)
    }

    /// The bounded wait for the current reply expired.
    pub fn on_timeout(&mut self) -> Option<Action> {
        let reason = IndeterminateReason::Timeout { step: self.step };
        self.fail(reason)
    }

    /// A reply line over the transport limit, or a reply with more than
    /// [`MAX_REPLY_LINES`] lines.
    pub fn on_reply_too_long(&mut self) -> Option<Action> {
        let reason = IndeterminateReason::ReplyTooLong { step: self.step };
        self.fail(reason)
    }

    /// The TCP connection could not be established.
    pub fn on_connect_failed(&mut self, message: impl Into<String>) -> Option<Action> {
        let reason = IndeterminateReason::Connect {
            message: message.into(),
        };
        self.fail(reason)
    }

    /// The caller lost interest.
    pub fn abandon(&mut self) -> Option<Action> {
        self.fail(IndeterminateReason::Abandoned)
    }

    pub fn into_report(self, exchange: impl Into<String>) -> ProbeReport {
        let outcome = self
            .outcome
            .unwrap_or(ProbeOutcome::Indeterminate(IndeterminateReason::Abandoned));
        ProbeReport {
            exchange: exchange.into(),
            outcome,
            transcript: self.transcript,
        }
    }

    fn advance(&mut self, next: Step, command: String) -> Action {
        self.step = next;
        self.reply_lines = 0;
        self.transcript.push(SmtpEvent::Sent {
            step: next,
            command: command.clone(),
        });
        Action::Send(command)
    }

    fn fail(&mut self, reason: IndeterminateReason) -> Option<Action> {
        self.resolve(ProbeOutcome::Indeterminate(reason))
            .map(Action::Close)
    }

    /// The single resolve point: check-and-set on `resolved`.
    fn resolve(&mut self, outcome: ProbeOutcome) -> Option<ProbeOutcome> {
        if self.resolved {
            return None;
        }
        self.resolved = true;
        self.step = Step::Terminal;
        self.outcome = Some(outcome.clone());
        Some(outcome)
    }
}
