use crate::profile::{Gender, LocalPartProfile, Role};
use crate::smtp_probe::{ProbeOutcome, ProbeReport, Verdict};

pub(crate) const REASON_INVALID_SYNTAX: &str = "Invalid syntax";
pub(crate) const REASON_NO_DOMAIN: &str = "Domain does not exist";
pub(crate) const REASON_VALID: &str = "Email is valid";
pub(crate) const REASON_REJECTED: &str = "Email does not exist (SMTP check)";
pub(crate) const PHONE_DETECTED: &str = "Phone number detected";
pub(crate) const PHONE_NOT_DETECTED: &str = "No phone number detected";

/// Condensed view of the SMTP probe attached to a report.
#[cfg_attr(feature = "with-serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "with-serde", serde(rename_all = "camelCase"))]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProbeSummary {
    pub exchange: String,
    pub verdict: Verdict,
    pub detail: String,
    pub transcript: Vec<String>,
}

impl From<&ProbeReport> for ProbeSummary {
    fn from(report: &ProbeReport) -> Self {
        Self {
            exchange: report.exchange.clone(),
            verdict: report.outcome.verdict(),
            detail: report.outcome.to_string(),
            transcript: report.transcript.iter().map(ToString::to_string).collect(),
        }
    }
}

/// Everything learned about one address. Fields that a short-circuited stage
/// never computed stay `None`.
#[cfg_attr(feature = "with-serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "with-serde", serde(rename_all = "camelCase"))]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VerificationReport {
    pub email: String,
    /// Passed the syntax filter.
    pub format: bool,
    pub disposable: Option<bool>,
    /// The domain publishes at least one mail exchanger.
    pub domain: Option<bool>,
    /// `Some(true)` confirmed, `Some(false)` rejected or no domain, `None`
    /// when the probe could not decide.
    pub exists: Option<bool>,
    pub reason: String,
    #[cfg_attr(feature = "with-serde", serde(skip_serializing_if = "Option::is_none"))]
    pub mx_server: Option<String>,
    pub name: Option<String>,
    pub role: Option<Role>,
    pub gender: Option<Gender>,
    /// Only reported once the domain is known to accept mail.
    pub phone_number: Option<bool>,
    pub need_number_verify: Option<bool>,
    #[cfg_attr(feature = "with-serde", serde(skip_serializing_if = "Option::is_none"))]
    pub phone_status: Option<String>,
    #[cfg_attr(feature = "with-serde", serde(skip_serializing_if = "Option::is_none"))]
    pub smtp: Option<ProbeSummary>,
}

impl VerificationReport {
    pub(crate) fn invalid_syntax(email: &str) -> Self {
        Self {
            email: email.to_string(),
            format: false,
            disposable: None,
            domain: None,
            exists: None,
            reason: REASON_INVALID_SYNTAX.to_string(),
            mx_server: None,
            name: None,
            role: None,
            gender: None,
            phone_number: None,
            need_number_verify: None,
            phone_status: None,
            smtp: None,
        }
    }

    pub(crate) fn no_domain(email: &str, disposable: bool, profile: LocalPartProfile) -> Self {
        Self {
            format: true,
            disposable: Some(disposable),
            domain: Some(false),
            exists: Some(false),
            reason: REASON_NO_DOMAIN.to_string(),
            phone_number: None,
            ..Self::with_profile(email, profile)
        }
    }

    pub(crate) fn probed(
        email: &str,
        disposable: bool,
        profile: LocalPartProfile,
        probe: &ProbeReport,
    ) -> Self {
        let (exists, reason) = match &probe.outcome {
            ProbeOutcome::MailboxConfirmed => (Some(true), REASON_VALID.to_string()),
            ProbeOutcome::MailboxRejected { .. } => (Some(false), REASON_REJECTED.to_string()),
            ProbeOutcome::Indeterminate(why) => (
                None,
                format!("Mailbox could not be confirmed (SMTP check): {why}"),
            ),
        };
        let phone_status = if profile.phone_number {
            PHONE_DETECTED
        } else {
            PHONE_NOT_DETECTED
        };
        Self {
            format: true,
            disposable: Some(disposable),
            domain: Some(true),
            phone_status: Some(phone_status.to_string()),
            exists,
            reason,
            mx_server: Some(probe.exchange.clone()),
            smtp: Some(ProbeSummary::from(probe)),
            ..Self::with_profile(email, profile)
        }
    }

    fn with_profile(email: &str, profile: LocalPartProfile) -> Self {
        Self {
            name: Some(profile.name),
            role: Some(profile.role),
            gender: Some(profile.gender),
            phone_number: Some(profile.phone_number),
            need_number_verify: Some(profile.needs_number_verify),
            format: true,
            ..Self::invalid_syntax(email)
        }
    }

    /// The mailbox was positively confirmed by its exchanger.
    pub fn is_deliverable(&self) -> bool {
        self.exists == Some(true)
    }
}
