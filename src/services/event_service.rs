use crate::entities::{event_entity as events, tour_entity as tours};
use crate::error::{AppError, AppResult};
use crate::models::{EventCreateRequest, EventResponse, PaginatedResponse, PaginationParams};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, Condition, DatabaseConnection, EntityTrait, ModelTrait, Order,
    PaginatorTrait, QueryFilter, QueryOrder, QuerySelect, Set,
};
use uuid::Uuid;

#[derive(Clone)]
pub struct EventService {
    pool: DatabaseConnection,
}

impl EventService {
    pub fn new(pool: DatabaseConnection) -> Self {
        Self { pool }
    }

    /// Crée un event rattaché à la tournée la plus récente (la promotion
    /// n'a qu'une tournée active, le front n'envoie pas de tourId).
    pub async fn create_event(&self, request: EventCreateRequest) -> AppResult<EventResponse> {
        let tour = tours::Entity::find()
            .order_by(tours::Column::CreatedAt, Order::Desc)
            .one(&self.pool)
            .await?
            .ok_or_else(|| {
                AppError::NotFound("Aucune tournée n'a été trouvée dans la base".to_string())
            })?;

        let model = events::ActiveModel {
            id: Set(Uuid::new_v4()),
            tour_id: Set(tour.id),
            city: Set(request.city.trim().to_string()),
            venue: Set(request.venue.trim().to_string()),
            event_date: Set(request.event_date),
            end_date: Set(request.end_date),
            status: Set(request.status),
            ..Default::default()
        }
        .insert(&self.pool)
        .await?;

        Ok(model.into())
    }

    /// Listing paginé, recherche optionnelle sur ville/salle
    pub async fn get_events(
        &self,
        params: &PaginationParams,
    ) -> AppResult<PaginatedResponse<EventResponse>> {
        let mut query = events::Entity::find();

        if let Some(search) = params.search.as_deref().filter(|s| !s.trim().is_empty()) {
            query = query.filter(
                Condition::any()
                    .add(events::Column::City.contains(search))
                    .add(events::Column::Venue.contains(search)),
            );
        }

        let total = query.clone().count(&self.pool).await? as i64;

        let items: Vec<EventResponse> = query
            .order_by(events::Column::EventDate, Order::Desc)
            .limit(params.get_limit() as u64)
            .offset(params.get_offset())
            .all(&self.pool)
            .await?
            .into_iter()
            .map(Into::into)
            .collect();

        Ok(PaginatedResponse::new(items, params, total))
    }

    pub async fn get_event(&self, id: Uuid) -> AppResult<EventResponse> {
        let event = events::Entity::find_by_id(id)
            .one(&self.pool)
            .await?
            .ok_or_else(|| AppError::NotFound("Événement non trouvé".to_string()))?;

        Ok(event.into())
    }

    pub async fn delete_event(&self, id: Uuid) -> AppResult<()> {
        let event = events::Entity::find_by_id(id)
            .one(&self.pool)
            .await?
            .ok_or_else(|| AppError::NotFound("Événement non trouvé".to_string()))?;

        event.delete(&self.pool).await?;
        Ok(())
    }
}
