use tokio::sync::oneshot;
use tokio::task::JoinHandle;
use tokio::time::Instant;

use super::error::ProbeError;
use super::options::ProbeOptions;
use super::session::{Action, ProbeSession};
use super::transport::SmtpTransport;
use super::types::ProbeReport;

/// Runs one SMTP conversation against `exchange` and reduces it to a
/// [`ProbeReport`].
///
/// Exactly one TCP connection is opened, no command is retried, and every
/// failure (refused connection, reset, timeout, early close) becomes an
/// indeterminate outcome rather than an error.
pub async fn probe(
    exchange: &str,
    recipient_domain: &str,
    recipient: &str,
    options: &ProbeOptions,
) -> ProbeReport {
    let mut session = ProbeSession::new(
        options.helo_domain(recipient_domain),
        options.mail_from.as_str(),
        recipient,
        options.reply_matching,
    );

    let mut transport =
        match SmtpTransport::connect(exchange, options.port, options.connect_timeout).await {
            Ok(transport) => transport,
            Err(err) => {
                tracing::warn!(exchange, error = %err, "SMTP connection failed");
                session.on_connect_failed(err.to_string());
                return finish(session, exchange);
            }
        };
    tracing::debug!(exchange, port = options.port, "SMTP connection established");

    // one deadline per step, however many lines its reply spans
    let mut deadline = Instant::now() + options.step_timeout;
    loop {
        let action = match transport.read_line(deadline).await {
            Ok(Some(line)) => {
                tracing::debug!(exchange, step = %session.step(), line = %line, "S:");
                session.on_line(&line)
            }
            Ok(None) => session.on_end().or_else(|| session.on_close()),
            Err(ProbeError::Timeout) => session.on_timeout(),
            Err(ProbeError::ReplyTooLong { .. }) => session.on_reply_too_long(),
            Err(err) => session.on_error(err.to_string()),
        };

        match action {
            None if session.is_resolved() => break,
            None => continue,
            Some(Action::Send(command)) => {
                tracing::debug!(exchange, command = %command, "C:");
                if let Err(err) = transport.send_command(&command).await {
                    session.on_error(err.to_string());
                    break;
                }
                deadline = Instant::now() + options.step_timeout;
            }
            Some(Action::QuitAndClose(_)) => {
                transport.quit(options.step_timeout).await;
                break;
            }
            Some(Action::Close(_)) => break,
        }
    }

    finish(session, exchange)
}

fn finish(session: ProbeSession, exchange: &str) -> ProbeReport {
    let report = session.into_report(exchange);
    if report.outcome.is_conclusive() {
        tracing::info!(exchange, outcome = %report.outcome, "SMTP probe finished");
    } else {
        tracing::warn!(exchange, outcome = %report.outcome, "SMTP probe inconclusive");
    }
    report
}

/// A probe running on its own task.
///
/// The report is delivered through a one-shot channel, so it can be observed
/// at most once. Dropping the handle aborts the task, which closes the
/// connection; nothing is delivered after that.
pub struct ProbeHandle {
    exchange: String,
    result: oneshot::Receiver<ProbeReport>,
    task: JoinHandle<()>,
}

impl ProbeHandle {
    pub fn spawn(
        exchange: impl Into<String>,
        recipient_domain: impl Into<String>,
        recipient: impl Into<String>,
        options: ProbeOptions,
    ) -> Self {
        let exchange = exchange.into();
        let recipient_domain = recipient_domain.into();
        let recipient = recipient.into();
        let (tx, rx) = oneshot::channel();

        let task_exchange = exchange.clone();
        let task = tokio::spawn(async move {
            let report = probe(&task_exchange, &recipient_domain, &recipient, &options).await;
            // the receiver is gone when the caller abandoned the probe
            tx.send(report).ok();
        });

        Self {
            exchange,
            result: rx,
            task,
        }
    }

    pub fn exchange(&self) -> &str {
        &self.exchange
    }

    /// Waits for the report. A task that died without reporting yields an
    /// `Abandoned` indeterminate outcome.
    pub async fn outcome(mut self) -> ProbeReport {
        match (&mut self.result).await {
            Ok(report) => report,
            Err(_) => ProbeReport::abandoned(self.exchange.clone()),
        }
    }

    /// Stops the probe and closes its connection.
    pub fn abandon(self) {
        tracing::debug!(exchange = %self.exchange, "SMTP probe abandoned");
    }
}

impl Drop for ProbeHandle {
    fn drop(&mut self) {
        self.task.abort();
    }
}
