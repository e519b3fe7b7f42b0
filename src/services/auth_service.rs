use crate::config::AdminConfig;
use crate::entities::user_entity as users;
use crate::error::{AppError, AppResult};
use crate::models::{AuthResponse, LoginRequest, UserResponse};
use crate::utils::{JwtService, hash_password, verify_password};
use sea_orm::{ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, Set};
use uuid::Uuid;

#[derive(Clone)]
pub struct AuthService {
    pool: DatabaseConnection,
    jwt_service: JwtService,
}

impl AuthService {
    pub fn new(pool: DatabaseConnection, jwt_service: JwtService) -> Self {
        Self { pool, jwt_service }
    }

    /// Connexion back-office. Même réponse 401 que l'email soit inconnu ou
    /// le mot de passe faux.
    pub async fn login(&self, request: LoginRequest) -> AppResult<AuthResponse> {
        if request.email.trim().is_empty() || request.password.is_empty() {
            return Err(AppError::ValidationError(
                "Email et mot de passe requis".to_string(),
            ));
        }

        let user = users::Entity::find()
            .filter(users::Column::Email.eq(request.email.trim().to_lowercase()))
            .one(&self.pool)
            .await?
            .ok_or_else(|| AppError::AuthError("Identifiants invalides".to_string()))?;

        if !verify_password(&request.password, &user.password_hash)? {
            return Err(AppError::AuthError("Identifiants invalides".to_string()));
        }

        self.build_auth_response(user)
    }

    /// Échange un refresh token valide contre une nouvelle paire de jetons
    pub async fn refresh(&self, refresh_token: &str) -> AppResult<AuthResponse> {
        let claims = self.jwt_service.verify_refresh_token(refresh_token)?;

        let user_id = Uuid::parse_str(&claims.sub)
            .map_err(|_| AppError::AuthError("Invalid token subject".to_string()))?;

        let user = users::Entity::find_by_id(user_id)
            .one(&self.pool)
            .await?
            .ok_or_else(|| AppError::AuthError("Identifiants invalides".to_string()))?;

        self.build_auth_response(user)
    }

    /// Crée le compte administrateur de la configuration s'il n'existe pas.
    /// Sans email/mot de passe configurés, ne fait rien.
    pub async fn ensure_default_admin(&self, admin: &AdminConfig) -> AppResult<()> {
        if admin.email.trim().is_empty() || admin.password.is_empty() {
            return Ok(());
        }

        let email = admin.email.trim().to_lowercase();
        let existing = users::Entity::find()
            .filter(users::Column::Email.eq(email.clone()))
            .one(&self.pool)
            .await?;

        if existing.is_some() {
            return Ok(());
        }

        users::ActiveModel {
            id: Set(Uuid::new_v4()),
            email: Set(email.clone()),
            password_hash: Set(hash_password(&admin.password)?),
            is_admin: Set(true),
            ..Default::default()
        }
        .insert(&self.pool)
        .await?;

        log::info!("Compte administrateur initialisé: {email}");
        Ok(())
    }

    fn build_auth_response(&self, user: users::Model) -> AppResult<AuthResponse> {
        let access_token = self
            .jwt_service
            .generate_access_token(user.id, user.is_admin)?;
        let refresh_token = self
            .jwt_service
            .generate_refresh_token(user.id, user.is_admin)?;

        Ok(AuthResponse {
            access_token,
            refresh_token,
            expires_in: self.jwt_service.get_access_token_expires_in(),
            user: UserResponse::from(user),
        })
    }
}
