use chrono::{DateTime, Utc};
use sea_orm::entity::prelude::*;

/// Vainqueur d'un tirage.
/// Remarques:
/// - prenom/nom/email sont un instantané pris au moment du tirage: une
///   modification ultérieure du participant ne change pas l'historique
/// - rang 1..N dense et unique au sein d'un tirage (index unique)
/// - lignes en lecture seule une fois écrites; un re-tirage les remplace
///   en bloc
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq)]
#[sea_orm(table_name = "vainqueurs")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub tirage_id: Uuid,
    pub participant_id: Uuid,
    pub prenom_participant: String,
    pub nom_participant: String,
    pub email: String,
    pub rang: i32,
    pub created_at: Option<DateTime<Utc>>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "crate::entities::tirages::Entity",
        from = "Column::TirageId",
        to = "crate::entities::tirages::Column::Id",
        on_update = "NoAction",
        on_delete = "Cascade"
    )]
    Tirage,
}

impl Related<crate::entities::tirages::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Tirage.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
