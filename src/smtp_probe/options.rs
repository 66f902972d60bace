use std::borrow::Cow;
use std::time::Duration;

#[cfg(feature = "with-serde")]
use serde::{Deserialize, Serialize};

/// How server lines are matched against the expected reply codes.
#[cfg_attr(feature = "with-serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "with-serde", serde(rename_all = "lowercase"))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ReplyMatching {
    /// Every line is a reply on its own: `220` is a prefix test, `250` a
    /// substring test. Continuation lines (`250-...`) advance the dialogue.
    Lenient,
    /// Continuation lines are buffered until the final line of the reply,
    /// whose three-digit code is then compared.
    #[default]
    Strict,
}

/// Configuration knobs for [`probe`](crate::smtp_probe::probe).
#[cfg_attr(feature = "with-serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProbeOptions {
    pub port: u16,
    /// Name sent with `HELO`; the recipient domain when unset.
    pub helo_domain: Option<String>,
    pub mail_from: String,
    pub connect_timeout: Duration,
    /// Bounded wait for each server reply.
    pub step_timeout: Duration,
    pub reply_matching: ReplyMatching,
}

impl Default for ProbeOptions {
    fn default() -> Self {
        Self {
            port: 25,
            helo_domain: None,
            mail_from: "test@example.com".to_string(),
            connect_timeout: Duration::from_secs(5),
            step_timeout: Duration::from_secs(5),
            reply_matching: ReplyMatching::Strict,
        }
    }
}

impl ProbeOptions {
    pub fn helo_domain<'a>(&'a self, recipient_domain: &'a str) -> Cow<'a, str> {
        self.helo_domain
            .as_deref()
            .map(str::trim)
            .filter(|value| !value.is_empty())
            .map(Cow::Borrowed)
            .unwrap_or(Cow::Borrowed(recipient_domain))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn helo_defaults_to_recipient_domain() {
        let options = ProbeOptions::default();
        assert_eq!(options.helo_domain("example.com"), "example.com");

        let options = ProbeOptions {
            helo_domain: Some("  ".to_string()),
            ..ProbeOptions::default()
        };
        assert_eq!(options.helo_domain("example.com"), "example.com");

        let options = ProbeOptions {
            helo_domain: Some("probe.local".to_string()),
            ..ProbeOptions::default()
        };
        assert_eq!(options.helo_domain("example.com"), "probe.local");
    }
}
