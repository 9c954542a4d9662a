use lazy_static::lazy_static;
use regex::Regex;

pub(crate) fn is_valid_email(email: &str) -> bool {
    lazy_static! {
        static ref EMAIL_RE: Regex = Regex::new(r"^[^@\s]+@[^@\s]+\.[^@\s]+$").unwrap();
    }
    EMAIL_RE.is_match(email)
}

/// Trim surrounding whitespace and lowercase the domain part. The local
/// part keeps its case; mail servers are allowed to treat it as
/// significant. Email uniqueness is over this normalized form.
pub fn normalize_email(raw: &str) -> String {
    let trimmed = raw.trim();
    match trimmed.rsplit_once('@') {
        Some((local, domain)) => format!("{local}@{}", domain.to_lowercase()),
        None => trimmed.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalize_lowercases_domain_only() {
        assert_eq!(normalize_email("Jane.Doe@CLINIC.Example"), "Jane.Doe@clinic.example");
    }

    #[test]
    fn normalize_trims_whitespace() {
        assert_eq!(normalize_email("  a@x.com \n"), "a@x.com");
    }

    #[test]
    fn normalize_leaves_at_less_input_alone() {
        assert_eq!(normalize_email("  not-an-email "), "not-an-email");
    }

    #[test]
    fn validates_plausible_addresses() {
        assert!(is_valid_email("a@x.com"));
        assert!(is_valid_email("first.last+tag@sub.clinic.example"));
        assert!(!is_valid_email(""));
        assert!(!is_valid_email("not-an-email"));
        assert!(!is_valid_email("no space@x.com"));
        assert!(!is_valid_email("a@nodot"));
    }
}
