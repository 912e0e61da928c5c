use serde::{Deserialize, Serialize};
use validator::Validate;

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateSubscriptionPayload {
    #[validate(email)]
    pub email: String,
    #[validate(length(min = 1))]
    pub plan: String,
}
