use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Json},
};
use validator::Validate;

use crate::{dto::subscription_dto::CreateSubscriptionPayload, error::Result, AppState};

#[utoipa::path(
    post,
    path = "/api/subscribe",
    request_body = CreateSubscriptionPayload,
    responses(
        (status = 201, description = "Subscription created"),
        (status = 400, description = "Invalid subscription data"),
        (status = 409, description = "Email already subscribed")
    )
)]
#[axum::debug_handler]
pub async fn subscribe(
    State(state): State<AppState>,
    Json(payload): Json<CreateSubscriptionPayload>,
) -> Result<impl IntoResponse> {
    payload.validate()?;
    let subscription = state.subscription_service.create(payload).await?;
    Ok((StatusCode::CREATED, Json(subscription)))
}
