use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Json},
};
use validator::Validate;

use crate::{
    dto::company_dto::{
        CompanyFilter, CompanyListQuery, CreateCompanyPayload, UpdateCompanyPayload,
    },
    error::{Error, Result},
    AppState,
};

#[utoipa::path(
    get,
    path = "/api/companies",
    params(
        ("search" = Option<String>, Query, description = "Substring match on name or description"),
        ("industry" = Option<String>, Query, description = "Exact industry match"),
        ("status" = Option<String>, Query, description = "Lifecycle status, defaults to active")
    ),
    responses(
        (status = 200, description = "Companies matching every supplied filter")
    )
)]
#[axum::debug_handler]
pub async fn list_companies(
    State(state): State<AppState>,
    Query(query): Query<CompanyListQuery>,
) -> Result<impl IntoResponse> {
    let filter = CompanyFilter::from(query);
    let companies = state.company_service.list(&filter).await?;
    Ok(Json(companies))
}

#[utoipa::path(
    get,
    path = "/api/companies/{id}",
    params(("id" = i32, Path, description = "Company ID")),
    responses(
        (status = 200, description = "Company found"),
        (status = 404, description = "Company not found")
    )
)]
#[axum::debug_handler]
pub async fn get_company(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse> {
    let company = state
        .company_service
        .get(id)
        .await?
        .ok_or_else(|| Error::NotFound("Company not found".to_string()))?;
    Ok(Json(company))
}

#[utoipa::path(
    post,
    path = "/api/companies",
    request_body = CreateCompanyPayload,
    responses(
        (status = 201, description = "Company created"),
        (status = 400, description = "Invalid company data")
    )
)]
#[axum::debug_handler]
pub async fn create_company(
    State(state): State<AppState>,
    Json(payload): Json<CreateCompanyPayload>,
) -> Result<impl IntoResponse> {
    payload.validate()?;
    let company = state.company_service.create(payload).await?;
    Ok((StatusCode::CREATED, Json(company)))
}

#[utoipa::path(
    patch,
    path = "/api/companies/{id}",
    params(("id" = i32, Path, description = "Company ID")),
    request_body = UpdateCompanyPayload,
    responses(
        (status = 200, description = "Company updated"),
        (status = 400, description = "Invalid update data"),
        (status = 404, description = "Company not found")
    )
)]
#[axum::debug_handler]
pub async fn update_company(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(payload): Json<UpdateCompanyPayload>,
) -> Result<impl IntoResponse> {
    payload.validate()?;
    let company = state.company_service.update(id, payload).await?;
    Ok(Json(company))
}

#[utoipa::path(
    delete,
    path = "/api/companies/{id}",
    params(("id" = i32, Path, description = "Company ID")),
    responses(
        (status = 204, description = "Company archived"),
        (status = 404, description = "Company not found")
    )
)]
#[axum::debug_handler]
pub async fn delete_company(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse> {
    state.company_service.archive(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
