use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A message from the public contact form. Write-only: stored, never listed.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Contact {
    pub id: i32,
    pub name: String,
    pub email: String,
    pub company: String,
    pub message: String,
}
