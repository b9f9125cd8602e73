use sha2::{Digest, Sha256};

/// Compute a stable SHA-256 fingerprint for a policy finding.
///
/// Identity fields:
/// - check_id
/// - code
/// - head branch
/// - base branch (`~` when the event has none)
pub fn fingerprint_for_finding(
    check_id: &str,
    code: &str,
    head_branch: &str,
    base_branch: Option<&str>,
) -> String {
    let canonical = [check_id, code, head_branch, base_branch.unwrap_or("~")].join("|");

    let mut hasher = Sha256::new();
    hasher.update(canonical.as_bytes());
    let digest = hasher.finalize();
    hex::encode(digest)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fingerprint_is_stable_and_hex() {
        let a = fingerprint_for_finding("branch.naming", "unknown_prefix", "randomstuff", None);
        let b = fingerprint_for_finding("branch.naming", "unknown_prefix", "randomstuff", None);
        assert_eq!(a, b);
        assert_eq!(a.len(), 64);
        assert!(a.chars().all(|c| c.is_ascii_hexdigit()));
    }

    #[test]
    fn base_branch_changes_the_fingerprint() {
        let push = fingerprint_for_finding("pr.into_main", "denied_into_main", "feature/x", None);
        let pr =
            fingerprint_for_finding("pr.into_main", "denied_into_main", "feature/x", Some("main"));
        assert_ne!(push, pr);
    }
}
