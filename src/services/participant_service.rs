use crate::entities::{event_entity as events, participant_entity as participants};
use crate::error::{AppError, AppResult};
use crate::models::{
    PaginatedResponse, PaginationParams, ParticipantCreateRequest, ParticipantResponse,
};
use crate::utils::validation::{missing_fields, validate_email};
use chrono::NaiveDate;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, Condition, DatabaseConnection, EntityTrait, ModelTrait,
    Order, PaginatorTrait, QueryFilter, QueryOrder, QuerySelect, Set,
};
use uuid::Uuid;

#[derive(Clone)]
pub struct ParticipantService {
    pool: DatabaseConnection,
}

impl ParticipantService {
    pub fn new(pool: DatabaseConnection) -> Self {
        Self { pool }
    }

    /// Inscription publique d'un participant au jeu-concours d'un event
    pub async fn create_participant(
        &self,
        request: ParticipantCreateRequest,
    ) -> AppResult<ParticipantResponse> {
        let manquants = missing_fields(&[
            ("nom", Some(request.nom.as_str())),
            ("prenom", Some(request.prenom.as_str())),
            ("email", Some(request.email.as_str())),
            ("dateNaissance", Some(request.date_naissance.as_str())),
        ]);
        if !manquants.is_empty() {
            return Err(AppError::ValidationError(format!(
                "Champs manquants : {}",
                manquants.join(", ")
            )));
        }

        if !validate_email(&request.email) {
            return Err(AppError::ValidationError("Email invalide".to_string()));
        }

        let date_naissance = parse_date_naissance(&request.date_naissance)?;

        // L'event doit exister avant d'y rattacher une inscription
        events::Entity::find_by_id(request.event_id)
            .one(&self.pool)
            .await?
            .ok_or_else(|| AppError::NotFound("Événement non trouvé".to_string()))?;

        let model = participants::ActiveModel {
            id: Set(Uuid::new_v4()),
            nom: Set(request.nom.trim().to_string()),
            prenom: Set(request.prenom.trim().to_string()),
            email: Set(request.email.trim().to_lowercase()),
            date_naissance: Set(date_naissance),
            event_id: Set(request.event_id),
            ..Default::default()
        }
        .insert(&self.pool)
        .await?;

        Ok(model.into())
    }

    /// Listing back-office paginé, recherche optionnelle sur nom/prenom/email
    pub async fn get_participants(
        &self,
        params: &PaginationParams,
    ) -> AppResult<PaginatedResponse<ParticipantResponse>> {
        let mut query = participants::Entity::find();

        if let Some(search) = params.search.as_deref().filter(|s| !s.trim().is_empty()) {
            query = query.filter(
                Condition::any()
                    .add(participants::Column::Nom.contains(search))
                    .add(participants::Column::Prenom.contains(search))
                    .add(participants::Column::Email.contains(search)),
            );
        }

        let total = query.clone().count(&self.pool).await? as i64;

        let items: Vec<ParticipantResponse> = query
            .order_by(participants::Column::CreatedAt, Order::Desc)
            .limit(params.get_limit() as u64)
            .offset(params.get_offset())
            .all(&self.pool)
            .await?
            .into_iter()
            .map(Into::into)
            .collect();

        Ok(PaginatedResponse::new(items, params, total))
    }

    pub async fn get_participants_by_event(
        &self,
        event_id: Uuid,
    ) -> AppResult<Vec<ParticipantResponse>> {
        let list = participants::Entity::find()
            .filter(participants::Column::EventId.eq(event_id))
            .order_by(participants::Column::CreatedAt, Order::Desc)
            .all(&self.pool)
            .await?;

        Ok(list.into_iter().map(Into::into).collect())
    }

    pub async fn delete_participant(&self, id: Uuid) -> AppResult<()> {
        let participant = participants::Entity::find_by_id(id)
            .one(&self.pool)
            .await?
            .ok_or_else(|| AppError::NotFound("Participant non trouvé".to_string()))?;

        participant.delete(&self.pool).await?;
        Ok(())
    }
}

/// Accepte une date ISO (YYYY-MM-DD), éventuellement suivie d'une heure
fn parse_date_naissance(value: &str) -> AppResult<NaiveDate> {
    let date_part = value.split('T').next().unwrap_or(value);
    NaiveDate::parse_from_str(date_part, "%Y-%m-%d")
        .map_err(|_| AppError::ValidationError("Date de naissance invalide".to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_date_naissance() {
        assert_eq!(
            parse_date_naissance("1995-06-15").unwrap(),
            NaiveDate::from_ymd_opt(1995, 6, 15).unwrap()
        );
        assert_eq!(
            parse_date_naissance("1995-06-15T00:00:00.000Z").unwrap(),
            NaiveDate::from_ymd_opt(1995, 6, 15).unwrap()
        );
        assert!(parse_date_naissance("15/06/1995").is_err());
        assert!(parse_date_naissance("pas-une-date").is_err());
    }
}
