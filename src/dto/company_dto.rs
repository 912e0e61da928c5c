use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::dto::non_empty;

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateCompanyPayload {
    #[validate(length(min = 1))]
    pub name: String,
    #[validate(length(min = 1))]
    pub industry: String,
    #[validate(length(min = 1))]
    pub location: String,
    #[validate(length(min = 1))]
    pub size: String,
    pub description: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateCompanyPayload {
    #[validate(length(min = 1))]
    pub name: Option<String>,
    #[validate(length(min = 1))]
    pub industry: Option<String>,
    #[validate(length(min = 1))]
    pub location: Option<String>,
    #[validate(length(min = 1))]
    pub size: Option<String>,
    pub description: Option<String>,
    pub status: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompanyListQuery {
    pub search: Option<String>,
    pub industry: Option<String>,
    pub status: Option<String>,
}

/// Company listings filter on plain strings only, so normalization is just
/// dropping blank parameters.
#[derive(Debug, Clone, Default)]
pub struct CompanyFilter {
    pub search: Option<String>,
    pub industry: Option<String>,
    pub status: Option<String>,
}

impl From<CompanyListQuery> for CompanyFilter {
    fn from(query: CompanyListQuery) -> Self {
        Self {
            search: non_empty(query.search),
            industry: non_empty(query.industry),
            status: non_empty(query.status),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_company_parameters_are_dropped() {
        let filter = CompanyFilter::from(CompanyListQuery {
            search: Some(" ".to_string()),
            industry: Some("Fintech".to_string()),
            status: None,
        });
        assert!(filter.search.is_none());
        assert_eq!(filter.industry.as_deref(), Some("Fintech"));
        assert!(filter.status.is_none());
    }
}
