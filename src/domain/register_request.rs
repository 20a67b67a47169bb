use serde::{Deserialize, Serialize};

#[derive(Deserialize, Serialize, Debug)]
pub struct RegisterRequestBody {
    #[serde(rename = "firstName")]
    pub first_name: String,
    #[serde(rename = "lastName")]
    pub last_name: String,
    pub email: String,
    pub password: String,
    #[serde(
        rename(serialize = "passwordConfirmation", deserialize = "passwordConfirmation"),
        alias = "password_confirmation"
    )]
    pub password_confirmation: String,
}
