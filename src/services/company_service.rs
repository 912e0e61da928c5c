use sqlx::{PgPool, Postgres, QueryBuilder};

use crate::dto::company_dto::{CompanyFilter, CreateCompanyPayload, UpdateCompanyPayload};
use crate::error::{Error, Result};
use crate::models::company::Company;
use crate::models::{STATUS_ACTIVE, STATUS_ARCHIVED};

const COLUMNS: &str =
    "id, name, industry, location, size, description, status, created_at, updated_at";

#[derive(Clone)]
pub struct CompanyService {
    pool: PgPool,
}

impl CompanyService {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn list(&self, filter: &CompanyFilter) -> Result<Vec<Company>> {
        let mut query = list_sql(filter);
        let companies = query
            .build_query_as::<Company>()
            .fetch_all(&self.pool)
            .await?;
        Ok(companies)
    }

    pub async fn get(&self, id: i32) -> Result<Option<Company>> {
        let company = sqlx::query_as::<_, Company>(&format!(
            "SELECT {COLUMNS} FROM companies WHERE id = $1"
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;
        Ok(company)
    }

    pub async fn create(&self, payload: CreateCompanyPayload) -> Result<Company> {
        let company = sqlx::query_as::<_, Company>(&format!(
            "INSERT INTO companies (name, industry, location, size, description, status) \
             VALUES ($1, $2, $3, $4, $5, $6) RETURNING {COLUMNS}"
        ))
        .bind(payload.name)
        .bind(payload.industry)
        .bind(payload.location)
        .bind(payload.size)
        .bind(payload.description)
        .bind(STATUS_ACTIVE)
        .fetch_one(&self.pool)
        .await?;
        Ok(company)
    }

    pub async fn update(&self, id: i32, payload: UpdateCompanyPayload) -> Result<Company> {
        let mut query = update_sql(id, &payload);
        let updated = query
            .build_query_as::<Company>()
            .fetch_optional(&self.pool)
            .await?;
        updated.ok_or_else(|| Error::NotFound("Company not found".to_string()))
    }

    pub async fn archive(&self, id: i32) -> Result<Company> {
        self.update(
            id,
            UpdateCompanyPayload {
                status: Some(STATUS_ARCHIVED.to_string()),
                ..Default::default()
            },
        )
        .await
    }
}

fn list_sql(filter: &CompanyFilter) -> QueryBuilder<'static, Postgres> {
    let mut query = QueryBuilder::new(format!("SELECT {COLUMNS} FROM companies WHERE status = "));
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
        query.push(" OR description ILIKE ");
        query.push_bind(pattern);
        query.push(")");
    }

    if let Some(industry) = &filter.industry {
        query.push(" AND industry = ");
        query.push_bind(industry.clone());
    }

    query.push(" ORDER BY created_at DESC");
    query
}

fn update_sql(id: i32, payload: &UpdateCompanyPayload) -> QueryBuilder<'static, Postgres> {
    let mut query = QueryBuilder::new("UPDATE companies SET updated_at = NOW()");

    if let Some(name) = &payload.name {
        query.push(", name = ");
        query.push_bind(name.clone());
    }
    if let Some(industry) = &payload.industry {
        query.push(", industry = ");
        query.push_bind(industry.clone());
    }
    if let Some(location) = &payload.location {
        query.push(", location = ");
        query.push_bind(location.clone());
    }
    if let Some(size) = &payload.size {
        query.push(", size = ");
        query.push_bind(size.clone());
    }
    if let Some(description) = &payload.description {
        query.push(", description = ");
        query.push_bind(description.clone());
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

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_filter_defaults_to_active_rows() {
        let query = list_sql(&CompanyFilter::default());
        assert_eq!(
            query.sql(),
            format!("SELECT {COLUMNS} FROM companies WHERE status = $1 ORDER BY created_at DESC")
        );
    }

    #[test]
    fn search_matches_name_and_description() {
        let filter = CompanyFilter {
            search: Some("logistics".to_string()),
            ..Default::default()
        };
        let sql = list_sql(&filter).sql().to_string();
        assert!(sql.contains("name ILIKE"));
        assert!(sql.contains("OR description ILIKE"));
    }

    #[test]
    fn industry_is_an_exact_match() {
        let filter = CompanyFilter {
            industry: Some("Fintech".to_string()),
            ..Default::default()
        };
        let sql = list_sql(&filter).sql().to_string();
        assert!(sql.contains("industry = $2"));
        assert!(!sql.contains("industry ILIKE"));
    }

    #[test]
    fn update_with_no_fields_still_touches_updated_at() {
        let sql = update_sql(3, &UpdateCompanyPayload::default())
            .sql()
            .to_string();
        assert!(sql.starts_with("UPDATE companies SET updated_at = NOW() WHERE id = $1"));
    }
}
