//! Well-formed-identifier predicate.

use std::sync::OnceLock;

use regex_lite::Regex;

/// Pattern a well-formed element name must match.
const IDENT_PATTERN: &str = "^[A-Za-z_][A-Za-z0-9_]*$";

static IDENT_RE: OnceLock<Regex> = OnceLock::new();

/// Returns true if `name` is a well-formed identifier: a letter or
/// underscore followed by letters, digits or underscores.
pub fn is_well_formed_ident(name: &str) -> bool {
    let re = IDENT_RE.get_or_init(|| {
        // The pattern is a constant; compilation cannot fail.
        Regex::new(IDENT_PATTERN).expect("identifier pattern compiles")
    });
    re.is_match(name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accepts_plain_identifiers() {
        assert!(is_well_formed_ident("Process1"));
        assert!(is_well_formed_ident("_private"));
        assert!(is_well_formed_ident("a"));
        assert!(is_well_formed_ident("snake_case_name"));
    }

    #[test]
    fn test_rejects_malformed_identifiers() {
        assert!(!is_well_formed_ident(""));
        assert!(!is_well_formed_ident("1leading"));
        assert!(!is_well_formed_ident("has space"));
        assert!(!is_well_formed_ident("dash-ed"));
        assert!(!is_well_formed_ident("accentué"));
    }
}
