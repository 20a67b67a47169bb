use rand::Rng;

/// A 6-digit one-time code, delivered to the user by email during login.
#[derive(Clone, Debug, PartialEq)]
pub struct TwoFACode(String);

impl TwoFACode {
    pub fn parse(code: String) -> Result<Self, String> {
        // Ensure `code` is exactly six ASCII digits
        if code.len() == 6 && code.chars().all(|c| c.is_ascii_digit()) {
            Ok(TwoFACode(code))
        } else {
            Err("The code must be a 6-digit number.".to_string())
        }
    }
}

impl Default for TwoFACode {
    fn default() -> Self {
        TwoFACode(rand::rng().random_range(100_000..=999_999).to_string())
    }
}

impl AsRef<str> for TwoFACode {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
