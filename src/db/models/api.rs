use serde::Serialize;

// Unified API response envelope
#[derive(Serialize)]
pub struct ApiResponse<T> {
    pub success: bool,
    pub code: u16,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub meta: Option<ResponseMeta>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub errors: Option<Vec<ErrorDetail>>,
    pub timestamp: String,
}

#[derive(Serialize)]
pub struct ResponseMeta {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub request_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_count: Option<i64>,
}

#[derive(Serialize)]
pub struct ErrorDetail {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub field: Option<String>,
    pub code: String,
    pub message: String,
}

impl<T> ApiResponse<T> {
    pub fn success(data: T, message: &str) -> Self {
        Self {
            success: true,
            code: 200,
            message: message.to_string(),
            data: Some(data),
            meta: None,
            errors: None,
            timestamp: chrono::Utc::now().to_rfc3339(),
        }
    }

    pub fn success_with_meta(data: T, message: &str, meta: ResponseMeta) -> Self {
        Self {
            success: true,
            code: 200,
            message: message.to_string(),
            data: Some(data),
            meta: Some(meta),
            errors: None,
            timestamp: chrono::Utc::now().to_rfc3339(),
        }
    }

    pub fn created(data: T, message: &str) -> Self {
        Self {
            success: true,
            code: 201,
            message: message.to_string(),
            data: Some(data),
            meta: None,
            errors: None,
            timestamp: chrono::Utc::now().to_rfc3339(),
        }
    }

    pub fn ok(message: &str) -> Self {
        Self {
            success: true,
            code: 200,
            message: message.to_string(),
            data: None,
            meta: None,
            errors: None,
            timestamp: chrono::Utc::now().to_rfc3339(),
        }
    }

    pub fn error(code: u16, message: &str, errors: Vec<ErrorDetail>) -> Self {
        Self {
            success: false,
            code,
            message: message.to_string(),
            data: None,
            meta: None,
            errors: Some(errors),
            timestamp: chrono::Utc::now().to_rfc3339(),
        }
    }

    pub fn validation_error(errors: Vec<ErrorDetail>) -> Self {
        Self {
            success: false,
            code: 400,
            message: "Validation failed".to_string(),
            data: None,
            meta: None,
            errors: Some(errors),
            timestamp: chrono::Utc::now().to_rfc3339(),
        }
    }

    pub fn bad_request(message: &str) -> Self {
        Self {
            success: false,
            code: 400,
            message: message.to_string(),
            data: None,
            meta: None,
            errors: Some(vec![ErrorDetail {
                field: None,
                code: "BAD_REQUEST".to_string(),
                message: message.to_string(),
            }]),
            timestamp: chrono::Utc::now().to_rfc3339(),
        }
    }

    pub fn not_found(message: &str) -> Self {
        Self {
            success: false,
            code: 404,
            message: message.to_string(),
            data: None,
            meta: None,
            errors: Some(vec![ErrorDetail {
                field: None,
                code: "NOT_FOUND".to_string(),
                message: message.to_string(),
            }]),
            timestamp: chrono::Utc::now().to_rfc3339(),
        }
    }

    pub fn conflict(message: &str, field: Option<String>, error_code: &str) -> Self {
        Self {
            success: false,
            code: 409,
            message: message.to_string(),
            data: None,
            meta: None,
            errors: Some(vec![ErrorDetail {
                field,
                code: error_code.to_string(),
                message: message.to_string(),
            }]),
            timestamp: chrono::Utc::now().to_rfc3339(),
        }
    }

    pub fn internal_error(message: &str) -> Self {
        Self {
            success: false,
            code: 500,
            message: message.to_string(),
            data: None,
            meta: None,
            errors: Some(vec![ErrorDetail {
                field: None,
                code: "INTERNAL_ERROR".to_string(),
                message: message.to_string(),
            }]),
            timestamp: chrono::Utc::now().to_rfc3339(),
        }
    }
}

// Business error code constants
pub mod error_codes {
    // Shift catalog
    pub const SHIFT_NOT_FOUND: &str = "SHIFT_001";
    pub const SHIFT_INACTIVE: &str = "SHIFT_002";
    pub const SHIFT_REFERENCED: &str = "SHIFT_003";

    // Leave ledger
    pub const LEAVE_INVALID_TRANSITION: &str = "LEAVE_001";
    pub const LEAVE_OVERLAP: &str = "LEAVE_002";

    // Scheduling engine
    pub const SCHEDULE_PAST_DATE: &str = "SCHEDULE_001";
    pub const SCHEDULE_ON_LEAVE: &str = "SCHEDULE_002";
    pub const SCHEDULE_DOUBLE_BOOKING: &str = "SCHEDULE_003";

    // Personnel roster
    pub const PERSON_NOT_FOUND: &str = "PERSON_001";
}
