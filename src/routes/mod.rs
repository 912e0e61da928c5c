pub mod candidate_routes;
pub mod company_routes;
pub mod contact_routes;
pub mod health;
pub mod interaction_routes;
pub mod subscription_routes;

use axum::{
    routing::{get, patch, post},
    Router,
};

use crate::AppState;

/// Full route table. Kept out of `main` so tests can mount the exact same
/// router over a test pool.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health))
        .route(
            "/api/candidates",
            get(candidate_routes::list_candidates).post(candidate_routes::create_candidate),
        )
        .route(
            "/api/candidates/:id",
            get(candidate_routes::get_candidate)
                .patch(candidate_routes::update_candidate)
                .delete(candidate_routes::delete_candidate),
        )
        .route(
            "/api/companies",
            get(company_routes::list_companies).post(company_routes::create_company),
        )
        .route(
            "/api/companies/:id",
            get(company_routes::get_company)
                .patch(company_routes::update_company)
                .delete(company_routes::delete_company),
        )
        .route(
            "/api/companies/:id/interactions",
            get(interaction_routes::list_company_interactions)
                .post(interaction_routes::create_interaction),
        )
        .route(
            "/api/interactions/:id",
            patch(interaction_routes::update_interaction),
        )
        .route("/api/subscribe", post(subscription_routes::subscribe))
        .route("/api/contact", post(contact_routes::create_contact))
        .with_state(state)
}
