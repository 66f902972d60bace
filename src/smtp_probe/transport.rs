use std::time::Duration;

use tokio::io::{AsyncBufReadExt, AsyncReadExt, AsyncWriteExt, BufReader};
use tokio::net::TcpStream;
use tokio::time::{Instant, timeout, timeout_at};

use super::error::ProbeError;

/// Upper bound for one server line, terminator included.
pub(crate) const MAX_LINE_LEN: usize = 4096;

/// Line-oriented plaintext connection to one mail exchanger.
pub(crate) struct SmtpTransport {
    reader: BufReader<TcpStream>,
}

impl SmtpTransport {
    pub(crate) async fn connect(
        host: &str,
        port: u16,
        connect_timeout: Duration,
    ) -> Result<Self, ProbeError> {
        let target = format!("{host}:{port}");
        let stream = match timeout(connect_timeout, TcpStream::connect(target.as_str())).await {
            Ok(Ok(stream)) => stream,
            Ok(Err(source)) => return Err(ProbeError::Connect { target, source }),
            Err(_) => return Err(ProbeError::ConnectTimeout { target }),
        };
        stream.set_nodelay(true).map_err(ProbeError::io)?;
        Ok(Self {
            reader: BufReader::new(stream),
        })
    }

    /// Next line without its terminator, `None` once the peer has closed.
    /// Fails with [`ProbeError::Timeout`] once `deadline` has passed.
    ///
    /// Bytes received without a trailing newline before EOF are returned as a
    /// line of their own; the following call then reports EOF.
    pub(crate) async fn read_line(
        &mut self,
        deadline: Instant,
    ) -> Result<Option<String>, ProbeError> {
        let mut buf = Vec::new();
        let limit = MAX_LINE_LEN as u64;
        let reader = &mut self.reader;
        let read = timeout_at(deadline, async {
            let mut limited = reader.take(limit);
            limited.read_until(b'\n', &mut buf).await
        })
        .await
        .map_err(|_| ProbeError::Timeout)?
        .map_err(ProbeError::io)?;

        if read == 0 {
            return Ok(None);
        }
        if !buf.ends_with(b"\n") && buf.len() >= MAX_LINE_LEN {
            return Err(ProbeError::ReplyTooLong {
                limit: MAX_LINE_LEN,
            });
        }
        let line = String::from_utf8_lossy(&buf);
        Ok(Some(line.trim_end_matches(['\r', '\n']).to_string()))
    }

    /// Writes `command` followed by CRLF.
    pub(crate) async fn send_command(&mut self, command: &str) -> Result<(), ProbeError> {
        let mut data = command.as_bytes().to_vec();
        data.extend_from_slice(b"\r\n");
        let stream = self.reader.get_mut();
        stream.write_all(&data).await.map_err(ProbeError::io)?;
        stream.flush().await.map_err(ProbeError::io)
    }

    /// Best-effort `QUIT` followed by a write shutdown. The verdict is already
    /// known, so failures here are only logged.
    pub(crate) async fn quit(&mut self, wait: Duration) {
        let result = timeout(wait, async {
            self.send_command("QUIT").await?;
            self.reader.get_mut().shutdown().await.map_err(ProbeError::io)
        })
        .await;
        match result {
            Ok(Ok(())) => {}
            Ok(Err(err)) => tracing::debug!(error = %err, "QUIT failed"),
            Err(_) => tracing::debug!("QUIT timed out"),
        }
    }
}
