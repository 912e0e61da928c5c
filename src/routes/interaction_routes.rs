use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Json},
};
use validator::Validate;

use crate::{
    dto::interaction_dto::{CreateInteractionPayload, UpdateInteractionPayload},
    error::Result,
    AppState,
};

#[utoipa::path(
    get,
    path = "/api/companies/{id}/interactions",
    params(("id" = i32, Path, description = "Company ID")),
    responses(
        (status = 200, description = "Interactions opened by the company")
    )
)]
#[axum::debug_handler]
pub async fn list_company_interactions(
    State(state): State<AppState>,
    Path(company_id): Path<i32>,
) -> Result<impl IntoResponse> {
    let interactions = state
        .interaction_service
        .list_for_company(company_id)
        .await?;
    Ok(Json(interactions))
}

#[utoipa::path(
    post,
    path = "/api/companies/{id}/interactions",
    params(("id" = i32, Path, description = "Company ID")),
    request_body = CreateInteractionPayload,
    responses(
        (status = 201, description = "Interaction created"),
        (status = 400, description = "Invalid interaction data")
    )
)]
#[axum::debug_handler]
pub async fn create_interaction(
    State(state): State<AppState>,
    Path(company_id): Path<i32>,
    Json(payload): Json<CreateInteractionPayload>,
) -> Result<impl IntoResponse> {
    payload.validate()?;
    let interaction = state.interaction_service.create(company_id, payload).await?;
    Ok((StatusCode::CREATED, Json(interaction)))
}

#[utoipa::path(
    patch,
    path = "/api/interactions/{id}",
    params(("id" = i32, Path, description = "Interaction ID")),
    request_body = UpdateInteractionPayload,
    responses(
        (status = 200, description = "Interaction updated"),
        (status = 400, description = "Invalid update data"),
        (status = 404, description = "Interaction not found")
    )
)]
#[axum::debug_handler]
pub async fn update_interaction(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(payload): Json<UpdateInteractionPayload>,
) -> Result<impl IntoResponse> {
    payload.validate()?;
    let interaction = state.interaction_service.update(id, payload).await?;
    Ok(Json(interaction))
}
