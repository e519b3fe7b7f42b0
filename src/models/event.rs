use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::entities::event_entity;

/// Création d'un event; la tournée est résolue côté service (tournée la
/// plus récente), le front ne l'envoie pas.
#[derive(Debug, Clone, Deserialize, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct EventCreateRequest {
    pub city: String,
    pub venue: String,
    pub event_date: DateTime<Utc>,
    pub end_date: Option<DateTime<Utc>>,
    pub status: String,
}

#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct EventResponse {
    pub id: Uuid,
    pub tour_id: Uuid,
    pub city: String,
    pub venue: String,
    pub event_date: DateTime<Utc>,
    pub end_date: Option<DateTime<Utc>>,
    pub status: String,
    pub created_at: Option<DateTime<Utc>>,
}

impl From<event_entity::Model> for EventResponse {
    fn from(m: event_entity::Model) -> Self {
        EventResponse {
            id: m.id,
            tour_id: m.tour_id,
            city: m.city,
            venue: m.venue,
            event_date: m.event_date,
            end_date: m.end_date,
            status: m.status,
            created_at: m.created_at,
        }
    }
}
