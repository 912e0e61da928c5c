use sqlx::{PgPool, Postgres, QueryBuilder};

use crate::dto::interaction_dto::{CreateInteractionPayload, UpdateInteractionPayload};
use crate::error::{Error, Result};
use crate::models::interaction::CandidateInteraction;

const COLUMNS: &str = "id, company_id, candidate_id, status, notes, created_at, updated_at";

#[derive(Clone)]
pub struct InteractionService {
    pool: PgPool,
}

impl InteractionService {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn list_for_company(&self, company_id: i32) -> Result<Vec<CandidateInteraction>> {
        let interactions = sqlx::query_as::<_, CandidateInteraction>(&format!(
            "SELECT {COLUMNS} FROM candidate_interactions WHERE company_id = $1 \
             ORDER BY created_at DESC"
        ))
        .bind(company_id)
        .fetch_all(&self.pool)
        .await?;
        Ok(interactions)
    }

    pub async fn create(
        &self,
        company_id: i32,
        payload: CreateInteractionPayload,
    ) -> Result<CandidateInteraction> {
        let interaction = sqlx::query_as::<_, CandidateInteraction>(&format!(
            "INSERT INTO candidate_interactions (company_id, candidate_id, status, notes) \
             VALUES ($1, $2, $3, $4) RETURNING {COLUMNS}"
        ))
        .bind(company_id)
        .bind(payload.candidate_id)
        .bind(payload.status)
        .bind(payload.notes)
        .fetch_one(&self.pool)
        .await?;
        Ok(interaction)
    }

    pub async fn update(
        &self,
        id: i32,
        payload: UpdateInteractionPayload,
    ) -> Result<CandidateInteraction> {
        let mut query = update_sql(id, &payload);
        let updated = query
            .build_query_as::<CandidateInteraction>()
            .fetch_optional(&self.pool)
            .await?;
        updated.ok_or_else(|| Error::NotFound("Interaction not found".to_string()))
    }
}

fn update_sql(id: i32, payload: &UpdateInteractionPayload) -> QueryBuilder<'static, Postgres> {
    let mut query = QueryBuilder::new("UPDATE candidate_interactions SET updated_at = NOW()");

    if let Some(status) = &payload.status {
        query.push(", status = ");
        query.push_bind(status.clone());
    }
    if let Some(notes) = &payload.notes {
        query.push(", notes = ");
        query.push_bind(notes.clone());
    }

    query.push(" WHERE id = ");
    query.push_bind(id);
    query.push(format!(" RETURNING {COLUMNS}"));
    query
}
