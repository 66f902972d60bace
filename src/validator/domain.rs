const MAX_LABEL_LEN: usize = 63;

/// Label checks the address pattern is too loose to express on its own
/// (`a..b`, `-a.com`, trailing dot, oversized labels).
pub(crate) fn check_labels(domain: &str, reasons: &mut Vec<String>) {
    for label in domain.split('.') {
        if label.is_empty() {
            reasons.push(format!("domain '{domain}' has an empty label"));
            continue;
        }
        if label.len() > MAX_LABEL_LEN {
            reasons.push(format!(
                "domain label '{label}' length {} > {MAX_LABEL_LEN}",
                label.len()
            ));
        }
        if label.starts_with('-') || label.ends_with('-') {
            reasons.push(format!("domain label '{label}' cannot start/end with '-'"));
        }
    }
}
