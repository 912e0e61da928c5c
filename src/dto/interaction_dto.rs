use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};

use crate::models::interaction::PIPELINE_STATUSES;

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateInteractionPayload {
    pub candidate_id: i32,
    #[validate(custom(function = validate_pipeline_status))]
    pub status: String,
    pub notes: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateInteractionPayload {
    #[validate(custom(function = validate_pipeline_status))]
    pub status: Option<String>,
    pub notes: Option<String>,
}

/// Only membership is checked. The interested → hired ordering is a
/// convention between recruiters, not a state machine.
fn validate_pipeline_status(status: &str) -> Result<(), ValidationError> {
    if PIPELINE_STATUSES.contains(&status) {
        Ok(())
    } else {
        Err(ValidationError::new("unknown_pipeline_status"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_pipeline_statuses_pass() {
        for status in PIPELINE_STATUSES {
            let payload = CreateInteractionPayload {
                candidate_id: 1,
                status: status.to_string(),
                notes: None,
            };
            assert!(payload.validate().is_ok(), "{status} should validate");
        }
    }

    #[test]
    fn unknown_pipeline_status_fails() {
        let payload = CreateInteractionPayload {
            candidate_id: 1,
            status: "ghosted".to_string(),
            notes: None,
        };
        assert!(payload.validate().is_err());
    }

    #[test]
    fn update_may_omit_status() {
        let payload = UpdateInteractionPayload {
            status: None,
            notes: Some("left a voicemail".to_string()),
        };
        assert!(payload.validate().is_ok());
    }
}
