use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Json},
};
use validator::Validate;

use crate::{dto::contact_dto::CreateContactPayload, error::Result, AppState};

#[utoipa::path(
    post,
    path = "/api/contact",
    request_body = CreateContactPayload,
    responses(
        (status = 201, description = "Message stored"),
        (status = 400, description = "Invalid contact data")
    )
)]
#[axum::debug_handler]
pub async fn create_contact(
    State(state): State<AppState>,
    Json(payload): Json<CreateContactPayload>,
) -> Result<impl IntoResponse> {
    payload.validate()?;
    let contact = state.contact_service.create(payload).await?;
    Ok((StatusCode::CREATED, Json(contact)))
}
