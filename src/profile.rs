//! Heuristics derived from the local part of an address.
//!
//! None of these touch the network; they are reported next to the SMTP
//! verdict for convenience.

use std::fmt;
use std::sync::LazyLock;

use regex::Regex;

use crate::validator::Address;

const ADMIN_PREFIXES: [&str; 3] = ["admin", "info", "support"];
const MALE_NAMES: [&str; 5] = ["john", "michael", "robert", "james", "david"];
const FEMALE_NAMES: [&str; 5] = ["mary", "jennifer", "linda", "elizabeth", "susan"];
const PHONE_VERIFIED_PROVIDERS: [&str; 4] = ["gmail.com", "yahoo.com", "hotmail.com", "outlook.com"];

static PHONE_NUMBER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\d{10,15}").expect("phone pattern is a valid regex"));

#[cfg_attr(feature = "with-serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "with-serde", serde(rename_all = "lowercase"))]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    Admin,
    User,
}

#[cfg_attr(feature = "with-serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "with-serde", serde(rename_all = "lowercase"))]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Gender {
    Male,
    Female,
    Unknown,
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Male => "male",
            Self::Female => "female",
            Self::Unknown => "unknown",
        })
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Admin => "admin",
            Self::User => "user",
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocalPartProfile {
    /// First dot-separated segment of the local part, case preserved.
    pub name: String,
    pub role: Role,
    pub gender: Gender,
    /// Local part embeds a run of 10 to 15 digits.
    pub phone_number: bool,
    /// Provider is known to gate new accounts behind phone verification.
    pub needs_number_verify: bool,
}

pub fn profile(address: &Address) -> LocalPartProfile {
    let local = address.local();
    let name = local.split('.').next().unwrap_or(local).to_string();
    LocalPartProfile {
        role: infer_role(local),
        gender: infer_gender(&name),
        phone_number: PHONE_NUMBER.is_match(local),
        needs_number_verify: PHONE_VERIFIED_PROVIDERS
            .contains(&address.domain().to_ascii_lowercase().as_str()),
        name,
    }
}

fn infer_role(local: &str) -> Role {
    if ADMIN_PREFIXES.iter().any(|prefix| local.starts_with(prefix)) {
        Role::Admin
    } else {
        Role::User
    }
}

fn infer_gender(name: &str) -> Gender {
    let lower = name.to_lowercase();
    if MALE_NAMES.contains(&lower.as_str()) {
        Gender::Male
    } else if FEMALE_NAMES.contains(&lower.as_str()) {
        Gender::Female
    } else {
        Gender::Unknown
    }
}
