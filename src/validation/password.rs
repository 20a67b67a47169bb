use once_cell::sync::Lazy;
use regex::Regex;

static LETTER_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"[A-Za-z]").unwrap());
static DIGIT_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"[0-9]").unwrap());
static SPECIAL_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"[@$!%*?&]").unwrap());

/// True if pw is ≥8 chars with at least one letter, one digit and one of @$!%*?&
pub fn is_valid_password(pw: &str) -> bool {
    pw.len() >= 8
        && LETTER_RE.is_match(pw)
        && DIGIT_RE.is_match(pw)
        && SPECIAL_RE.is_match(pw)
}
