use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Response body returned by every mutating endpoint and by API errors
#[derive(Clone, Debug, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
pub struct ApiResponseDto {
    /// Whether the request was applied
    pub success: bool,
    /// Human readable outcome
    pub message: String,
    /// Validation messages keyed by field name, present only for validation failures
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub errors: Option<BTreeMap<String, Vec<String>>>,
}

impl ApiResponseDto {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            success: true,
            message: message.into(),
            errors: None,
        }
    }

    pub fn failure(message: impl Into<String>) -> Self {
        Self {
            success: false,
            message: message.into(),
            errors: None,
        }
    }
}
