use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::entities::participant_entity;

/// Inscription d'un participant au jeu-concours (route publique).
/// La date de naissance arrive en chaîne ISO et est validée côté service.
#[derive(Debug, Clone, Deserialize, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ParticipantCreateRequest {
    pub nom: String,
    pub prenom: String,
    pub email: String,
    pub date_naissance: String,
    pub event_id: Uuid,
}

#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ParticipantResponse {
    pub id: Uuid,
    pub nom: String,
    pub prenom: String,
    pub email: String,
    pub date_naissance: NaiveDate,
    pub event_id: Uuid,
    pub created_at: Option<DateTime<Utc>>,
}

impl From<participant_entity::Model> for ParticipantResponse {
    fn from(m: participant_entity::Model) -> Self {
        ParticipantResponse {
            id: m.id,
            nom: m.nom,
            prenom: m.prenom,
            email: m.email,
            date_naissance: m.date_naissance,
            event_id: m.event_id,
            created_at: m.created_at,
        }
    }
}
