pub mod candidate_dto;
pub mod company_dto;
pub mod contact_dto;
pub mod interaction_dto;
pub mod subscription_dto;

/// Query-string fields arrive as raw strings; blank values mean "not set".
pub(crate) fn non_empty(value: Option<String>) -> Option<String> {
    value.and_then(|v| {
        let trimmed = v.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(trimmed.to_string())
        }
    })
}
