use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::entities::{tirage_entity, vainqueur_entity};

use super::EventResponse;

/// Corps de la demande de tirage (POST /tirage)
#[derive(Debug, Clone, Deserialize, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct TirageRequest {
    pub event_id: Uuid,
    /// Nombre de vainqueurs demandé (doit être strictement positif)
    pub nombre_vainqueur: i32,
}

/// Métadonnées d'un tirage telles qu'exposées sur le fil
#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct TirageResponse {
    pub id: Uuid,
    pub event_id: Uuid,
    pub nombre_vainqueur: i32,
    pub date_tirage: DateTime<Utc>,
    pub created_at: Option<DateTime<Utc>>,
}

impl From<tirage_entity::Model> for TirageResponse {
    fn from(m: tirage_entity::Model) -> Self {
        TirageResponse {
            id: m.id,
            event_id: m.event_id,
            nombre_vainqueur: m.nombre_vainqueur,
            date_tirage: m.date_tirage,
            created_at: m.created_at,
        }
    }
}

/// Vainqueur tel qu'exposé sur le fil (noms de champs historiques)
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct VainqueurResponse {
    pub id: Uuid,
    pub prenom_participant: String,
    pub nom_participant: String,
    pub email: String,
    pub rang: i32,
}

impl From<vainqueur_entity::Model> for VainqueurResponse {
    fn from(m: vainqueur_entity::Model) -> Self {
        VainqueurResponse {
            id: m.id,
            prenom_participant: m.prenom_participant,
            nom_participant: m.nom_participant,
            email: m.email,
            rang: m.rang,
        }
    }
}

/// Réponse de création de tirage: le front n'affiche que le message,
/// le détail se récupère via les routes de lecture.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct TirageCreateResponse {
    pub message: String,
    pub code: u16,
}

/// Résultat complet d'un tirage exécuté (identité du tirage + sélection
/// relue), consommé par le handler et par les tests du service.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct TirageOutcome {
    pub message: String,
    pub tirage: TirageResponse,
    pub vainqueurs: Vec<VainqueurResponse>,
}

/// Tirage + vainqueurs d'un event (GET /vainqueurs/event/{id})
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct TirageVainqueursResponse {
    pub message: String,
    pub tirage: TirageResponse,
    pub vainqueurs: Vec<VainqueurResponse>,
}

/// Vainqueurs d'un tirage donné (GET /vainqueurs/tirage/{id})
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct VainqueursResponse {
    pub message: String,
    pub vainqueurs: Vec<VainqueurResponse>,
}

/// Historique des tirages d'un event (GET /tirage/event/{id}).
/// Au plus une entrée avec l'invariant un-tirage-par-event, mais la forme
/// reste une liste pour compatibilité.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct TiragesResponse {
    pub message: String,
    pub tirages: Vec<TirageResponse>,
}

/// Entrée du listing d'audit: tirage joint à son event et ses vainqueurs
#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct TirageWithDetails {
    pub id: Uuid,
    pub event_id: Uuid,
    pub nombre_vainqueur: i32,
    pub date_tirage: DateTime<Utc>,
    pub created_at: Option<DateTime<Utc>>,
    pub event: Option<EventResponse>,
    pub vainqueurs: Vec<VainqueurResponse>,
}

/// Listing administratif complet (GET /tirage)
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct AllTiragesResponse {
    pub message: String,
    pub tirages: Vec<TirageWithDetails>,
}
