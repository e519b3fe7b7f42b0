use chrono::{DateTime, Utc};
use sea_orm::entity::prelude::*;

/// Tirage au sort d'un event.
/// Invariant: au plus un tirage par event (index unique sur event_id).
/// Un re-tirage met à jour cette ligne en place, il n'en crée jamais une
/// seconde.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq)]
#[sea_orm(table_name = "tirages")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    #[sea_orm(unique)]
    pub event_id: Uuid,
    /// Nombre de vainqueurs réalisé (après écrêtage à l'effectif)
    pub nombre_vainqueur: i32,
    pub date_tirage: DateTime<Utc>,
    pub created_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "crate::entities::vainqueurs::Entity")]
    Vainqueur,
}

impl Related<crate::entities::vainqueurs::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Vainqueur.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
