pub mod candidate_service;
pub mod company_service;
pub mod contact_service;
pub mod interaction_service;
pub mod subscription_service;
