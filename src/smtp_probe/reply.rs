use super::options::ReplyMatching;

/// The three-digit code at the start of `line`, if any.
pub(crate) fn reply_code(line: &str) -> Option<u16> {
    let digits = line.get(..3)?;
    if !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    match line.as_bytes().get(3) {
        None | Some(b' ') | Some(b'-') => digits.parse().ok(),
        Some(_) => None,
    }
}

/// `NNN-text`: more lines of the same reply follow.
pub(crate) fn is_continuation(line: &str) -> bool {
    reply_code(line).is_some() && line.as_bytes().get(3) == Some(&b'-')
}

/// Decides which server lines complete a reply and whether a reply carries
/// the expected code.
#[derive(Debug, Clone, Copy)]
pub(crate) struct ReplyMatcher {
    matching: ReplyMatching,
}

impl ReplyMatcher {
    pub(crate) fn new(matching: ReplyMatching) -> Self {
        Self { matching }
    }

    /// Feeds one line. Returns the line that completes a reply, or `None`
    /// while a multi-line reply is still open.
    pub(crate) fn push<'a>(&self, line: &'a str) -> Option<&'a str> {
        match self.matching {
            ReplyMatching::Strict if is_continuation(line) => None,
            _ => Some(line),
        }
    }

    /// Greeting check: prefix `220`.
    pub(crate) fn is_greeting(&self, reply: &str) -> bool {
        match self.matching {
            ReplyMatching::Lenient => reply.starts_with("220"),
            ReplyMatching::Strict => reply_code(reply) == Some(220),
        }
    }

    /// Acknowledgement check for HELO, MAIL FROM and RCPT TO.
    pub(crate) fn is_ok(&self, reply: &str) -> bool {
        match self.matching {
            ReplyMatching::Lenient => reply.contains("250"),
            ReplyMatching::Strict => reply_code(reply) == Some(250),
        }
    }
}
