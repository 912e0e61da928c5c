use sqlx::PgPool;

use crate::dto::subscription_dto::CreateSubscriptionPayload;
use crate::error::{Error, Result};
use crate::models::subscription::Subscription;

#[derive(Clone)]
pub struct SubscriptionService {
    pool: PgPool,
}

impl SubscriptionService {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn get_by_email(&self, email: &str) -> Result<Option<Subscription>> {
        let subscription = sqlx::query_as::<_, Subscription>(
            "SELECT id, email, plan, active FROM subscriptions WHERE email = $1",
        )
        .bind(email)
        .fetch_optional(&self.pool)
        .await?;
        Ok(subscription)
    }

    /// One subscription per email. The unique index backs up the pre-check,
    /// so a racing duplicate still comes back as a conflict.
    pub async fn create(&self, payload: CreateSubscriptionPayload) -> Result<Subscription> {
        if self.get_by_email(&payload.email).await?.is_some() {
            return Err(Error::Conflict("Email already subscribed".to_string()));
        }

        let subscription = sqlx::query_as::<_, Subscription>(
            "INSERT INTO subscriptions (email, plan, active) VALUES ($1, $2, TRUE) \
             RETURNING id, email, plan, active",
        )
        .bind(payload.email)
        .bind(payload.plan)
        .fetch_one(&self.pool)
        .await?;
        Ok(subscription)
    }
}
