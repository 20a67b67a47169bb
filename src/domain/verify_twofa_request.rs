use serde::{Deserialize, Serialize};

#[derive(Deserialize, Serialize, Debug)]
pub struct VerifyTwoFaRequestBody {
    pub code: String,
}
