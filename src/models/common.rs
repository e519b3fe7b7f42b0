use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Corps d'erreur de l'enveloppe `{success: false, error: {...}}`
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ApiError {
    pub code: String,
    pub message: String,
}
