use crate::validation::is_valid_person_name;

/// A first or last name. Letters, spaces and apostrophes, 2 to 255 characters.
#[derive(PartialEq, Debug, Clone)]
pub struct PersonName(String);

impl PersonName {
    pub fn parse(name: String) -> Result<PersonName, String> {
        match is_valid_person_name(&name) {
            true => Ok(PersonName(name)),
            false => Err(
                "Name must be 2 to 255 characters and may only contain letters, spaces, and apostrophes.".to_string(),
            ),
        }
    }
}

impl AsRef<str> for PersonName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
