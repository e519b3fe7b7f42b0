use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::entities::tour_entity;

#[derive(Debug, Clone, Deserialize, Serialize, ToSchema)]
pub struct TourCreateRequest {
    pub name: String,
}

#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct TourResponse {
    pub id: Uuid,
    pub name: String,
    pub created_at: Option<DateTime<Utc>>,
}

impl From<tour_entity::Model> for TourResponse {
    fn from(m: tour_entity::Model) -> Self {
        TourResponse {
            id: m.id,
            name: m.name,
            created_at: m.created_at,
        }
    }
}
