use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Plain `{message}` body used by most write endpoints.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// `{data}` body used by collection endpoints.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct DataResponse<T> {
    pub data: T,
}

/// `{message, data}` body returned after a successful mutation.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct UpdatedResponse<T> {
    pub message: String,
    pub data: T,
}
