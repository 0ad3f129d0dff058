//! Newsletter submission without a backend.
//!
//! The browser validates `<input type="email" required>` before the submit
//! handler runs. [`check_email`] mirrors that constraint check so the whole
//! submission path can be exercised outside a browser.

use std::fmt;
use std::sync::OnceLock;

use regex::Regex;

/// Why native validation refuses a value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Invalid {
    ValueMissing,
    TypeMismatch,
}

impl fmt::Display for Invalid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Invalid::ValueMissing => write!(f, "value missing"),
            Invalid::TypeMismatch => write!(f, "not an e-mail address"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Submission {
    /// Native validation stopped the submit; the handler never runs.
    Blocked(Invalid),
    /// The handler ran and cancelled the default navigation.
    Suppressed,
}

// HTML "valid e-mail address" production
fn email_pattern() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(
            r"^[a-zA-Z0-9.!#$%&'*+/=?^_`{|}~-]+@[a-zA-Z0-9](?:[a-zA-Z0-9-]{0,61}[a-zA-Z0-9])?(?:\.[a-zA-Z0-9](?:[a-zA-Z0-9-]{0,61}[a-zA-Z0-9])?)*$",
        )
        .unwrap()
    })
}

/// Value sanitization for `type=email`: newlines removed, ASCII whitespace
/// trimmed.
fn sanitize(value: &str) -> String {
    value
        .chars()
        .filter(|c| *c != '\n' && *c != '\r')
        .collect::<String>()
        .trim_matches(|c: char| c.is_ascii_whitespace())
        .to_string()
}

pub fn check_email(value: &str) -> Result<(), Invalid> {
    let value = sanitize(value);
    if value.is_empty() {
        return Err(Invalid::ValueMissing);
    }
    if !email_pattern().is_match(&value) {
        return Err(Invalid::TypeMismatch);
    }
    Ok(())
}

/// What happens to a submit of `value`: blocked by validation, or handled
/// and suppressed. Nothing is ever sent.
pub fn intercept_submission(value: &str) -> Submission {
    match check_email(value) {
        Ok(()) => Submission::Suppressed,
        Err(reason) => Submission::Blocked(reason),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn valid_address_is_suppressed() {
        assert_eq!(intercept_submission("you@example.com"), Submission::Suppressed);
        assert_eq!(
            intercept_submission("first.last+drops@mail.be-you.co"),
            Submission::Suppressed
        );
    }

    #[test]
    fn empty_value_is_blocked_as_missing() {
        assert_eq!(
            intercept_submission(""),
            Submission::Blocked(Invalid::ValueMissing)
        );
        assert_eq!(
            intercept_submission("  \n "),
            Submission::Blocked(Invalid::ValueMissing)
        );
    }

    #[test]
    fn malformed_values_are_type_mismatches() {
        for value in ["you", "you@", "@example.com", "you@-example.com", "a b@example.com"] {
            assert_eq!(
                check_email(value),
                Err(Invalid::TypeMismatch),
                "{value:?} should be rejected"
            );
        }
    }

    #[test]
    fn surrounding_whitespace_is_sanitized() {
        assert_eq!(check_email("  you@example.com\n"), Ok(()));
    }

    #[test]
    fn single_label_domain_is_accepted() {
        // Browsers accept intranet-style hosts
        assert_eq!(check_email("admin@localhost"), Ok(()));
    }
}
