use crate::entities::user_entity as users;
use crate::error::{AppError, AppResult};
use crate::models::{CreateUserRequest, UserResponse};
use crate::utils::{hash_password, validate_email, validate_password};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, Order, QueryFilter,
    QueryOrder, Set,
};
use uuid::Uuid;

#[derive(Clone)]
pub struct UserService {
    pool: DatabaseConnection,
}

impl UserService {
    pub fn new(pool: DatabaseConnection) -> Self {
        Self { pool }
    }

    /// Création d'un compte back-office (réservé aux administrateurs)
    pub async fn create_user(&self, request: CreateUserRequest) -> AppResult<UserResponse> {
        if !validate_email(&request.email) {
            return Err(AppError::ValidationError("Email invalide".to_string()));
        }
        validate_password(&request.password)?;

        let email = request.email.trim().to_lowercase();
        let existing = users::Entity::find()
            .filter(users::Column::Email.eq(email.clone()))
            .one(&self.pool)
            .await?;
        if existing.is_some() {
            return Err(AppError::ValidationError(
                "Un compte existe déjà avec cet email".to_string(),
            ));
        }

        let model = users::ActiveModel {
            id: Set(Uuid::new_v4()),
            email: Set(email),
            password_hash: Set(hash_password(&request.password)?),
            is_admin: Set(request.is_admin),
            ..Default::default()
        }
        .insert(&self.pool)
        .await?;

        Ok(model.into())
    }

    pub async fn get_users(&self) -> AppResult<Vec<UserResponse>> {
        let list = users::Entity::find()
            .order_by(users::Column::CreatedAt, Order::Desc)
            .all(&self.pool)
            .await?;

        Ok(list.into_iter().map(Into::into).collect())
    }
}
