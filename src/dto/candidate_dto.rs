use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::dto::non_empty;
use crate::error::{Error, Result};

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateCandidatePayload {
    #[validate(length(min = 1))]
    pub name: String,
    #[validate(length(min = 1))]
    pub title: String,
    #[validate(range(min = 0))]
    pub experience: i32,
    pub skills: Vec<String>,
    #[validate(length(min = 1))]
    pub location: String,
    pub summary: String,
    pub contact: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateCandidatePayload {
    #[validate(length(min = 1))]
    pub name: Option<String>,
    #[validate(length(min = 1))]
    pub title: Option<String>,
    #[validate(range(min = 0))]
    pub experience: Option<i32>,
    pub skills: Option<Vec<String>>,
    #[validate(length(min = 1))]
    pub location: Option<String>,
    pub summary: Option<String>,
    pub contact: Option<String>,
    pub status: Option<String>,
}

/// Raw listing parameters as they appear on the query string.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CandidateListQuery {
    pub search: Option<String>,
    pub skills: Option<String>,
    pub experience_min: Option<String>,
    pub experience_max: Option<String>,
    pub location: Option<String>,
    pub status: Option<String>,
}

/// Normalized listing filter. All predicates are combined conjunctively;
/// an absent `status` means the listing only returns active rows.
#[derive(Debug, Clone, Default)]
pub struct CandidateFilter {
    pub search: Option<String>,
    pub skills: Vec<String>,
    pub experience_min: Option<i32>,
    pub experience_max: Option<i32>,
    pub location: Option<String>,
    pub status: Option<String>,
}

impl CandidateFilter {
    pub fn from_query(query: CandidateListQuery) -> Result<Self> {
        let skills = match non_empty(query.skills) {
            Some(raw) => parse_skills(&raw)?,
            None => Vec::new(),
        };

        Ok(Self {
            search: non_empty(query.search),
            skills,
            experience_min: parse_bound(query.experience_min)?,
            experience_max: parse_bound(query.experience_max)?,
            location: non_empty(query.location),
            status: non_empty(query.status),
        })
    }
}

fn parse_bound(raw: Option<String>) -> Result<Option<i32>> {
    match non_empty(raw) {
        Some(v) => v
            .parse::<i32>()
            .map(Some)
            .map_err(|_| Error::BadRequest("Invalid search parameters".to_string())),
        None => Ok(None),
    }
}

/// Accepts either a JSON string array (`["React","SQL"]`, what the web
/// client sends) or a plain comma-separated list.
fn parse_skills(raw: &str) -> Result<Vec<String>> {
    if raw.starts_with('[') {
        let parsed: Vec<String> = serde_json::from_str(raw)
            .map_err(|_| Error::BadRequest("Invalid search parameters".to_string()))?;
        Ok(parsed
            .into_iter()
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect())
    } else {
        Ok(raw
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_parameters_produce_an_empty_filter() {
        let query = CandidateListQuery {
            search: Some("   ".to_string()),
            skills: Some(String::new()),
            status: Some(String::new()),
            ..Default::default()
        };
        let filter = CandidateFilter::from_query(query).unwrap();
        assert!(filter.search.is_none());
        assert!(filter.skills.is_empty());
        assert!(filter.status.is_none());
    }

    #[test]
    fn experience_bounds_are_coerced() {
        let query = CandidateListQuery {
            experience_min: Some("5".to_string()),
            experience_max: Some("10".to_string()),
            ..Default::default()
        };
        let filter = CandidateFilter::from_query(query).unwrap();
        assert_eq!(filter.experience_min, Some(5));
        assert_eq!(filter.experience_max, Some(10));
    }

    #[test]
    fn non_numeric_experience_is_rejected() {
        let query = CandidateListQuery {
            experience_min: Some("five".to_string()),
            ..Default::default()
        };
        assert!(matches!(
            CandidateFilter::from_query(query),
            Err(Error::BadRequest(_))
        ));
    }

    #[test]
    fn skills_accept_json_arrays_and_comma_lists() {
        let json = CandidateListQuery {
            skills: Some(r#"["React","SQL"]"#.to_string()),
            ..Default::default()
        };
        let csv = CandidateListQuery {
            skills: Some("React, SQL,".to_string()),
            ..Default::default()
        };
        let expected = vec!["React".to_string(), "SQL".to_string()];
        assert_eq!(CandidateFilter::from_query(json).unwrap().skills, expected);
        assert_eq!(CandidateFilter::from_query(csv).unwrap().skills, expected);
    }

    #[test]
    fn malformed_json_skills_are_rejected() {
        let query = CandidateListQuery {
            skills: Some(r#"["React""#.to_string()),
            ..Default::default()
        };
        assert!(matches!(
            CandidateFilter::from_query(query),
            Err(Error::BadRequest(_))
        ));
    }

    #[test]
    fn query_keys_are_camel_case() {
        let query: CandidateListQuery = serde_json::from_value(serde_json::json!({
            "experienceMin": "2",
            "experienceMax": "8"
        }))
        .unwrap();
        assert_eq!(query.experience_min.as_deref(), Some("2"));
        assert_eq!(query.experience_max.as_deref(), Some("8"));
    }

    #[test]
    fn create_payload_rejects_negative_experience() {
        let payload = CreateCandidatePayload {
            name: "Ada".to_string(),
            title: "Engineer".to_string(),
            experience: -1,
            skills: vec!["Rust".to_string()],
            location: "Berlin".to_string(),
            summary: String::new(),
            contact: "ada@example.com".to_string(),
        };
        assert!(payload.validate().is_err());
    }
}
