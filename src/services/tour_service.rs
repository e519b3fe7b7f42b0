use crate::entities::tour_entity as tours;
use crate::error::{AppError, AppResult};
use crate::models::{TourCreateRequest, TourResponse};
use sea_orm::{ActiveModelTrait, DatabaseConnection, EntityTrait, Order, QueryOrder, Set};
use uuid::Uuid;

#[derive(Clone)]
pub struct TourService {
    pool: DatabaseConnection,
}

impl TourService {
    pub fn new(pool: DatabaseConnection) -> Self {
        Self { pool }
    }

    pub async fn create_tour(&self, request: TourCreateRequest) -> AppResult<TourResponse> {
        if request.name.trim().is_empty() {
            return Err(AppError::ValidationError(
                "Champs manquants : name".to_string(),
            ));
        }

        let model = tours::ActiveModel {
            id: Set(Uuid::new_v4()),
            name: Set(request.name.trim().to_string()),
            ..Default::default()
        }
        .insert(&self.pool)
        .await?;

        Ok(model.into())
    }

    /// Tournées du plus récent au plus ancien; la première est la tournée
    /// active utilisée pour les nouveaux events.
    pub async fn get_tours(&self) -> AppResult<Vec<TourResponse>> {
        let list = tours::Entity::find()
            .order_by(tours::Column::CreatedAt, Order::Desc)
            .all(&self.pool)
            .await?;

        Ok(list.into_iter().map(Into::into).collect())
    }
}
