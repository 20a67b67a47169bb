use once_cell::sync::Lazy;
use regex::Regex;

static NAME_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[A-Za-z\s']+$").unwrap());

/// True if the name is 2 to 255 characters of letters, spaces and apostrophes
pub fn is_valid_person_name(name: &str) -> bool {
    (2..=255).contains(&name.chars().count()) && NAME_RE.is_match(name)
}
