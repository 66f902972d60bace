//! Disposable-domain classification against a compile-time set.

mod domains;

use domains::DISPOSABLE_DOMAINS;

use crate::validator::Address;

/// Returns `true` when `domain` belongs to a known throwaway-mailbox provider.
///
/// Matching is case-insensitive and ignores a trailing root dot.
pub fn is_disposable_domain(domain: &str) -> bool {
    let trimmed = domain.trim().trim_end_matches('.');
    DISPOSABLE_DOMAINS.contains(trimmed.to_ascii_lowercase().as_str())
}

pub fn is_disposable(address: &Address) -> bool {
    is_disposable_domain(address.domain())
}

/// Number of domains in the built-in list.
pub fn known_domain_count() -> usize {
    DISPOSABLE_DOMAINS.len()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validator::parse_address;
    use proptest::prelude::*;

    #[test]
    fn known_providers_are_flagged() {
        assert!(is_disposable_domain("mailinator.com"));
        assert!(is_disposable_domain("10minutemail.com"));
        assert!(is_disposable_domain("zzz.com"));
    }

    #[test]
    fn matching_ignores_case_and_root_dot() {
        assert!(is_disposable_domain("MailInator.COM"));
        assert!(is_disposable_domain("mailinator.com."));
    }

    #[test]
    fn regular_providers_are_not_flagged() {
        assert!(!is_disposable_domain("gmail.com"));
        assert!(!is_disposable_domain("example.org"));
        assert!(!is_disposable_domain(""));
    }

    #[test]
    fn address_helper_uses_domain() {
        let addr = parse_address("someone@0815.ru").unwrap();
        assert!(is_disposable(&addr));
    }

    #[test]
    fn list_is_not_empty() {
        assert!(known_domain_count() > 800);
    }

    proptest! {
        #[test]
        fn classification_is_pure(domain in "[a-z0-9.-]{1,30}") {
            prop_assert_eq!(is_disposable_domain(&domain), is_disposable_domain(&domain));
            prop_assert_eq!(
                is_disposable_domain(&domain),
                is_disposable_domain(&domain.to_ascii_uppercase())
            );
        }
    }
}
