use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Json},
};
use validator::Validate;

use crate::{
    dto::candidate_dto::{
        CandidateFilter, CandidateListQuery, CreateCandidatePayload, UpdateCandidatePayload,
    },
    error::{Error, Result},
    AppState,
};

#[utoipa::path(
    get,
    path = "/api/candidates",
    params(
        ("search" = Option<String>, Query, description = "Substring match on name, title or summary"),
        ("skills" = Option<String>, Query, description = "JSON array or comma-separated list; candidate must hold all of them"),
        ("experienceMin" = Option<i32>, Query, description = "Inclusive lower bound on years of experience"),
        ("experienceMax" = Option<i32>, Query, description = "Inclusive upper bound on years of experience"),
        ("location" = Option<String>, Query, description = "Substring match on location"),
        ("status" = Option<String>, Query, description = "Lifecycle status, defaults to active")
    ),
    responses(
        (status = 200, description = "Candidates matching every supplied filter"),
        (status = 400, description = "Invalid search parameters")
    )
)]
#[axum::debug_handler]
pub async fn list_candidates(
    State(state): State<AppState>,
    Query(query): Query<CandidateListQuery>,
) -> Result<impl IntoResponse> {
    let filter = CandidateFilter::from_query(query)?;
    let candidates = state.candidate_service.list(&filter).await?;
    Ok(Json(candidates))
}

#[utoipa::path(
    get,
    path = "/api/candidates/{id}",
    params(("id" = i32, Path, description = "Candidate ID")),
    responses(
        (status = 200, description = "Candidate found"),
        (status = 404, description = "Candidate not found")
    )
)]
#[axum::debug_handler]
pub async fn get_candidate(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse> {
    let candidate = state
        .candidate_service
        .get(id)
        .await?
        .ok_or_else(|| Error::NotFound("Candidate not found".to_string()))?;
    Ok(Json(candidate))
}

#[utoipa::path(
    post,
    path = "/api/candidates",
    request_body = CreateCandidatePayload,
    responses(
        (status = 201, description = "Candidate created"),
        (status = 400, description = "Invalid candidate data")
    )
)]
#[axum::debug_handler]
pub async fn create_candidate(
    State(state): State<AppState>,
    Json(payload): Json<CreateCandidatePayload>,
) -> Result<impl IntoResponse> {
    payload.validate()?;
    let candidate = state.candidate_service.create(payload).await?;
    Ok((StatusCode::CREATED, Json(candidate)))
}

#[utoipa::path(
    patch,
    path = "/api/candidates/{id}",
    params(("id" = i32, Path, description = "Candidate ID")),
    request_body = UpdateCandidatePayload,
    responses(
        (status = 200, description = "Candidate updated"),
        (status = 400, description = "Invalid update data"),
        (status = 404, description = "Candidate not found")
    )
)]
#[axum::debug_handler]
pub async fn update_candidate(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(payload): Json<UpdateCandidatePayload>,
) -> Result<impl IntoResponse> {
    payload.validate()?;
    let candidate = state.candidate_service.update(id, payload).await?;
    Ok(Json(candidate))
}

#[utoipa::path(
    delete,
    path = "/api/candidates/{id}",
    params(("id" = i32, Path, description = "Candidate ID")),
    responses(
        (status = 204, description = "Candidate archived"),
        (status = 404, description = "Candidate not found")
    )
)]
#[axum::debug_handler]
pub async fn delete_candidate(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse> {
    state.candidate_service.archive(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
