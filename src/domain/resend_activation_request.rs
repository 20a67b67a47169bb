use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Deserialize, Serialize, Debug)]
pub struct ResendActivationRequestBody {
    #[serde(rename = "userId", alias = "user_id")]
    pub user_id: Uuid,
}
