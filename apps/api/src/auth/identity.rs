use async_trait::async_trait;
use sqlx::PgPool;

use crate::errors::AppError;

/// Exchanges an opaque session token for a stable external user id.
/// Unknown or expired tokens are `AppError::Unauthorized`.
#[async_trait]
pub trait IdentityProvider: Send + Sync {
    async fn authenticate(&self, token: &str) -> Result<String, AppError>;
}

/// Looks sessions up in the `sessions` table written by the sign-in service.
pub struct PgSessionIdentity {
    pool: PgPool,
}

impl PgSessionIdentity {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl IdentityProvider for PgSessionIdentity {
    async fn authenticate(&self, token: &str) -> Result<String, AppError> {
        let external_id: Option<String> = sqlx::query_scalar(
            "SELECT external_id FROM sessions WHERE token = $1 AND expires_at > NOW()",
        )
        .bind(token)
        .fetch_optional(&self.pool)
        .await?;

        external_id.ok_or(AppError::Unauthorized)
    }
}

/// Fixed token → user id table for tests.
#[cfg(test)]
#[derive(Default)]
pub struct StaticIdentity {
    sessions: std::collections::HashMap<String, String>,
}

#[cfg(test)]
impl StaticIdentity {
    pub fn with_session(mut self, token: &str, external_id: &str) -> Self {
        self.sessions
            .insert(token.to_string(), external_id.to_string());
        self
    }
}

#[cfg(test)]
#[async_trait]
impl IdentityProvider for StaticIdentity {
    async fn authenticate(&self, token: &str) -> Result<String, AppError> {
        self.sessions
            .get(token)
            .cloned()
            .ok_or(AppError::Unauthorized)
    }
}
