use serde::{Deserialize, Serialize};

/// The response when an error occurs with an API request
#[derive(Serialize, Deserialize, utoipa::ToSchema)]
pub struct ErrorDto {
    /// The error message
    pub error: String,
}

/// The response for a mutation that has nothing else to return
#[derive(Serialize, Deserialize, utoipa::ToSchema)]
pub struct MessageDto {
    pub message: String,
}
