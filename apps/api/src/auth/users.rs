use async_trait::async_trait;
use sqlx::PgPool;

use crate::errors::AppError;
use crate::models::user::User;

#[async_trait]
pub trait UserDirectory: Send + Sync {
    async fn find_by_external_id(&self, external_id: &str) -> Result<Option<User>, AppError>;
}

pub struct PgUserDirectory {
    pool: PgPool,
}

impl PgUserDirectory {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl UserDirectory for PgUserDirectory {
    async fn find_by_external_id(&self, external_id: &str) -> Result<Option<User>, AppError> {
        Ok(
            sqlx::query_as::<_, User>("SELECT * FROM users WHERE external_id = $1")
                .bind(external_id)
                .fetch_optional(&self.pool)
                .await?,
        )
    }
}

#[cfg(test)]
#[derive(Default)]
pub struct MemoryUserDirectory {
    users: Vec<User>,
}

#[cfg(test)]
impl MemoryUserDirectory {
    pub fn with_user(mut self, user: User) -> Self {
        self.users.push(user);
        self
    }
}

#[cfg(test)]
#[async_trait]
impl UserDirectory for MemoryUserDirectory {
    async fn find_by_external_id(&self, external_id: &str) -> Result<Option<User>, AppError> {
        Ok(self
            .users
            .iter()
            .find(|u| u.external_id == external_id)
            .cloned())
    }
}
