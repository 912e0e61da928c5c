use sqlx::{PgPool, Postgres, QueryBuilder};

use crate::dto::candidate_dto::{CandidateFilter, CreateCandidatePayload, UpdateCandidatePayload};
use crate::error::{Error, Result};
use crate::models::candidate::Candidate;
use crate::models::{STATUS_ACTIVE, STATUS_ARCHIVED};

const COLUMNS: &str =
    "id, name, title, experience, skills, location, summary, contact, status, created_at, updated_at";

#[derive(Clone)]
pub struct CandidateService {
    pool: PgPool,
}

impl CandidateService {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Filtered listing. Every predicate is ANDed; when no status is asked
    /// for, only active candidates are returned.
    pub async fn list(&self, filter: &CandidateFilter) -> Result<Vec<Candidate>> {
        let mut query = list_sql(filter);
        let candidates = query
            .build_query_as::<Candidate>()
            .fetch_all(&self.pool)
            .await?;
        Ok(candidates)
    }

    pub async fn get(&self, id: i32) -> Result<Option<Candidate>> {
        let candidate = sqlx::query_as::<_, Candidate>(&format!(
            "SELECT {COLUMNS} FROM candidates WHERE id = $1"
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;
        Ok(candidate)
    }

    pub async fn create(&self, payload: CreateCandidatePayload) -> Result<Candidate> {
        let candidate = sqlx::query_as::<_, Candidate>(&format!(
            "INSERT INTO candidates (name, title, experience, skills, location, summary, contact, status) \
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8) RETURNING {COLUMNS}"
        ))
        .bind(payload.name)
        .bind(payload.title)
        .bind(payload.experience)
        .bind(payload.skills)
        .bind(payload.location)
        .bind(payload.summary)
        .bind(payload.contact)
        .bind(STATUS_ACTIVE)
        .fetch_one(&self.pool)
        .await?;
        Ok(candidate)
    }

    /// Partial update: only fields present in the payload are written,
    /// `updated_at` is always touched.
    pub async fn update(&self, id: i32, payload: UpdateCandidatePayload) -> Result<Candidate> {
        let mut query = update_sql(id, &payload);
        let updated = query
            .build_query_as::<Candidate>()
            .fetch_optional(&self.pool)
            .await?;
        updated.ok_or_else(|| Error::NotFound("Candidate not found".to_string()))
    }

    /// Soft-delete: the row stays, its status flips to archived.
    pub async fn archive(&self, id: i32) -> Result<Candidate> {
        self.update(
            id,
            UpdateCandidatePayload {
                status: Some(STATUS_ARCHIVED.to_string()),
                ..Default::default()
            },
        )
        .await
    }
}

fn list_sql(filter: &CandidateFilter) -> QueryBuilder<'static, Postgres> {
    let mut query =
        QueryBuilder::new(format!("SELECT {COLUMNS} FROM candidates WHERE status = "));
    query.push_bind(
        filter
            .status
            .clone()
            .unwrap_or_else(|| STATUS_ACTIVE.to_string()),
    );

    if let Some(search) = &filter.search {
        let pattern = format!("%{}%", search);
        query.push(" AND (name ILIKE ");
        query.push_bind(pattern.clone());
        query.push(" OR title ILIKE ");
        query.push_bind(pattern.clone());
        query.push(" OR summary ILIKE ");
        query.push_bind(pattern);
        query.push(")");
    }

    // One membership test per requested skill: the candidate must hold all
    // of them, not any of them.
    for skill in &filter.skills {
        query.push(" AND ");
        query.push_bind(skill.clone());
        query.push(" = ANY(skills)");
    }

    if let Some(min) = filter.experience_min {
        query.push(" AND experience >= ");
        query.push_bind(min);
    }
    if let Some(max) = filter.experience_max {
        query.push(" AND experience <= ");
        query.push_bind(max);
    }

    if let Some(location) = &filter.location {
        query.push(" AND location ILIKE ");
        query.push_bind(format!("%{}%", location));
    }

    query.push(" ORDER BY created_at DESC");
    query
}

fn update_sql(id: i32, payload: &UpdateCandidatePayload) -> QueryBuilder<'static, Postgres> {
    let mut query = QueryBuilder::new("UPDATE candidates SET updated_at = NOW()");

    if let Some(name) = &payload.name {
        query.push(", name = ");
        query.push_bind(name.clone());
    }
    if let Some(title) = &payload.title {
        query.push(", title = ");
        query.push_bind(title.clone());
    }
    if let Some(experience) = payload.experience {
        query.push(", experience = ");
        query.push_bind(experience);
    }
    if let Some(skills) = &payload.skills {
        query.push(", skills = ");
        query.push_bind(skills.clone());
    }
    if let Some(location) = &payload.location {
        query.push(", location = ");
        query.push_bind(location.clone());
    }
    if let Some(summary) = &payload.summary {
        query.push(", summary = ");
        query.push_bind(summary.clone());
    }
    if let Some(contact) = &payload.contact {
        query.push(", contact = ");
        query.push_bind(contact.clone());
    }
    if let Some(status) = &payload.status {
        query.push(", status = ");
        query.push_bind(status.clone());
    }

    query.push(" WHERE id = ");
    query.push_bind(id);
    query.push(format!(" RETURNING {COLUMNS}"));
    query
}
