use sqlx::PgPool;

use crate::dto::contact_dto::CreateContactPayload;
use crate::error::Result;
use crate::models::contact::Contact;

#[derive(Clone)]
pub struct ContactService {
    pool: PgPool,
}

impl ContactService {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn create(&self, payload: CreateContactPayload) -> Result<Contact> {
        let contact = sqlx::query_as::<_, Contact>(
            "INSERT INTO contacts (name, email, company, message) VALUES ($1, $2, $3, $4) \
             RETURNING id, name, email, company, message",
        )
        .bind(payload.name)
        .bind(payload.email)
        .bind(payload.company)
        .bind(payload.message)
        .fetch_one(&self.pool)
        .await?;
        Ok(contact)
    }
}
