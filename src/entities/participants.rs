use chrono::{DateTime, NaiveDate, Utc};
use sea_orm::entity::prelude::*;

/// Inscription au jeu-concours.
/// Le sous-système de tirage ne fait que lire cette table: une inscription
/// n'est jamais modifiée par un tirage.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq)]
#[sea_orm(table_name = "participants")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub nom: String,
    pub prenom: String,
    pub email: String,
    pub date_naissance: NaiveDate,
    /// Un participant appartient à exactement un event
    pub event_id: Uuid,
    pub created_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
