use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Body of every error response and of plain confirmations such as a successful delete.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct MessageDto {
    pub message: String,
}

impl MessageDto {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}
