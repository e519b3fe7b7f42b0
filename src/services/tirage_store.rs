use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, IntoActiveModel, Order,
    QueryFilter, QueryOrder, Set, TransactionTrait,
};
use uuid::Uuid;

use crate::entities::{
    event_entity as events, participant_entity as participants, tirage_entity as tirages,
    vainqueur_entity as vainqueurs,
};
use crate::error::AppResult;

/// Écriture demandée par l'orchestrateur: remplace intégralement le tirage
/// d'un event et ses vainqueurs. `vainqueurs` est la sélection ordonnée,
/// l'index donne le rang (1-based).
pub struct TirageReplacement {
    /// Tirage déjà présent pour l'event, s'il existe (mise à jour en place)
    pub existing: Option<tirages::Model>,
    pub event_id: Uuid,
    pub date_tirage: DateTime<Utc>,
    pub vainqueurs: Vec<participants::Model>,
}

/// Accès aux données du sous-système de tirage.
///
/// Abstraction de capacité injectée dans `TirageService` à la construction,
/// ce qui permet de substituer un magasin en mémoire dans les tests. La
/// seule écriture est `replace_tirage_and_vainqueurs`, qui doit être
/// atomique: soit tout l'état précédent est remplacé, soit rien ne change.
#[async_trait]
pub trait TirageStore: Send + Sync {
    async fn find_event(&self, event_id: Uuid) -> AppResult<Option<events::Model>>;

    async fn find_tirage_by_event(&self, event_id: Uuid) -> AppResult<Option<tirages::Model>>;

    async fn find_participants(&self, event_id: Uuid) -> AppResult<Vec<participants::Model>>;

    /// Exécute le remplacement dans une transaction unique et renvoie le
    /// tirage et les vainqueurs relus (ordonnés par rang).
    async fn replace_tirage_and_vainqueurs(
        &self,
        replacement: TirageReplacement,
    ) -> AppResult<(tirages::Model, Vec<vainqueurs::Model>)>;

    async fn find_vainqueurs_by_tirage(
        &self,
        tirage_id: Uuid,
    ) -> AppResult<Vec<vainqueurs::Model>>;

    async fn find_tirages_by_event(&self, event_id: Uuid) -> AppResult<Vec<tirages::Model>>;

    async fn find_all_tirages(&self) -> AppResult<Vec<tirages::Model>>;
}

/// Implémentation de production sur sea-orm / Postgres
pub struct SeaOrmTirageStore {
    pool: DatabaseConnection,
}

impl SeaOrmTirageStore {
    pub fn new(pool: DatabaseConnection) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl TirageStore for SeaOrmTirageStore {
    async fn find_event(&self, event_id: Uuid) -> AppResult<Option<events::Model>> {
        Ok(events::Entity::find_by_id(event_id).one(&self.pool).await?)
    }

    async fn find_tirage_by_event(&self, event_id: Uuid) -> AppResult<Option<tirages::Model>> {
        Ok(tirages::Entity::find()
            .filter(tirages::Column::EventId.eq(event_id))
            .one(&self.pool)
            .await?)
    }

    async fn find_participants(&self, event_id: Uuid) -> AppResult<Vec<participants::Model>> {
        Ok(participants::Entity::find()
            .filter(participants::Column::EventId.eq(event_id))
            .all(&self.pool)
            .await?)
    }

    async fn replace_tirage_and_vainqueurs(
        &self,
        replacement: TirageReplacement,
    ) -> AppResult<(tirages::Model, Vec<vainqueurs::Model>)> {
        let txn = self.pool.begin().await?;

        let nombre_vainqueur = replacement.vainqueurs.len() as i32;

        let tirage = match replacement.existing {
            Some(existing) => {
                // Re-tirage: purge des anciens vainqueurs puis mise à jour
                // en place, jamais de second tirage pour le même event.
                vainqueurs::Entity::delete_many()
                    .filter(vainqueurs::Column::TirageId.eq(existing.id))
                    .exec(&txn)
                    .await?;

                let mut am = existing.into_active_model();
                am.nombre_vainqueur = Set(nombre_vainqueur);
                am.date_tirage = Set(replacement.date_tirage);
                am.updated_at = Set(Some(Utc::now()));
                am.update(&txn).await?
            }
            None => {
                // L'index unique sur event_id fait échouer la transaction
                // si un tirage concurrent a gagné la course.
                tirages::ActiveModel {
                    id: Set(Uuid::new_v4()),
                    event_id: Set(replacement.event_id),
                    nombre_vainqueur: Set(nombre_vainqueur),
                    date_tirage: Set(replacement.date_tirage),
                    ..Default::default()
                }
                .insert(&txn)
                .await?
            }
        };

        // Instantané nom/prenom/email pris au moment du tirage: l'édition
        // ultérieure d'un participant ne doit pas réécrire l'historique.
        let rows: Vec<vainqueurs::ActiveModel> = replacement
            .vainqueurs
            .iter()
            .enumerate()
            .map(|(index, p)| vainqueurs::ActiveModel {
                id: Set(Uuid::new_v4()),
                tirage_id: Set(tirage.id),
                participant_id: Set(p.id),
                prenom_participant: Set(p.prenom.clone()),
                nom_participant: Set(p.nom.clone()),
                email: Set(p.email.clone()),
                rang: Set(index as i32 + 1),
                ..Default::default()
            })
            .collect();

        vainqueurs::Entity::insert_many(rows).exec(&txn).await?;

        let inserted = vainqueurs::Entity::find()
            .filter(vainqueurs::Column::TirageId.eq(tirage.id))
            .order_by_asc(vainqueurs::Column::Rang)
            .all(&txn)
            .await?;

        txn.commit().await?;

        Ok((tirage, inserted))
    }

    async fn find_vainqueurs_by_tirage(
        &self,
        tirage_id: Uuid,
    ) -> AppResult<Vec<vainqueurs::Model>> {
        Ok(vainqueurs::Entity::find()
            .filter(vainqueurs::Column::TirageId.eq(tirage_id))
            .order_by_asc(vainqueurs::Column::Rang)
            .all(&self.pool)
            .await?)
    }

    async fn find_tirages_by_event(&self, event_id: Uuid) -> AppResult<Vec<tirages::Model>> {
        Ok(tirages::Entity::find()
            .filter(tirages::Column::EventId.eq(event_id))
            .order_by(tirages::Column::DateTirage, Order::Desc)
            .all(&self.pool)
            .await?)
    }

    async fn find_all_tirages(&self) -> AppResult<Vec<tirages::Model>> {
        Ok(tirages::Entity::find()
            .order_by(tirages::Column::DateTirage, Order::Desc)
            .all(&self.pool)
            .await?)
    }
}
