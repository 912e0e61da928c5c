pub mod config;
pub mod database;
pub mod dto;
pub mod error;
pub mod models;
pub mod routes;
pub mod services;

use crate::services::{
    candidate_service::CandidateService, company_service::CompanyService,
    contact_service::ContactService, interaction_service::InteractionService,
    subscription_service::SubscriptionService,
};
use sqlx::PgPool;

#[derive(Clone)]
pub struct AppState {
    pub pool: PgPool,
    pub candidate_service: CandidateService,
    pub company_service: CompanyService,
    pub interaction_service: InteractionService,
    pub subscription_service: SubscriptionService,
    pub contact_service: ContactService,
}

impl AppState {
    pub fn new(pool: PgPool) -> Self {
        let candidate_service = CandidateService::new(pool.clone());
        let company_service = CompanyService::new(pool.clone());
        let interaction_service = InteractionService::new(pool.clone());
        let subscription_service = SubscriptionService::new(pool.clone());
        let contact_service = ContactService::new(pool.clone());

        Self {
            pool,
            candidate_service,
            company_service,
            interaction_service,
            subscription_service,
            contact_service,
        }
    }
}
