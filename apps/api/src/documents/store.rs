use async_trait::async_trait;
use sqlx::PgPool;
use tracing::info;
use uuid::Uuid;

use crate::errors::AppError;
use crate::models::document::{DocumentKind, DocumentRow, StoredDocument};

/// Persistence collaborator. Exactly one record exists per (user, kind): `upsert`
/// creates it on first save and overwrites the content afterwards.
#[async_trait]
pub trait DocumentStore: Send + Sync {
    async fn upsert(
        &self,
        user_id: Uuid,
        kind: DocumentKind,
        content: &str,
    ) -> Result<StoredDocument, AppError>;

    async fn get(&self, user_id: Uuid, kind: DocumentKind)
        -> Result<Option<StoredDocument>, AppError>;
}

pub struct PgDocumentStore {
    pool: PgPool,
}

impl PgDocumentStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl DocumentStore for PgDocumentStore {
    async fn upsert(
        &self,
        user_id: Uuid,
        kind: DocumentKind,
        content: &str,
    ) -> Result<StoredDocument, AppError> {
        let row = sqlx::query_as::<_, DocumentRow>(
            r#"
            INSERT INTO documents (id, user_id, kind, content)
            VALUES ($1, $2, $3, $4)
            ON CONFLICT (user_id, kind)
            DO UPDATE SET content = EXCLUDED.content, updated_at = NOW()
            RETURNING *
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(user_id)
        .bind(kind.as_str())
        .bind(content)
        .fetch_one(&self.pool)
        .await?;

        info!(
            "Stored {} for user {} ({} bytes)",
            kind.as_str(),
            user_id,
            content.len()
        );

        row.try_into()
    }

    async fn get(
        &self,
        user_id: Uuid,
        kind: DocumentKind,
    ) -> Result<Option<StoredDocument>, AppError> {
        sqlx::query_as::<_, DocumentRow>(
            "SELECT * FROM documents WHERE user_id = $1 AND kind = $2",
        )
        .bind(user_id)
        .bind(kind.as_str())
        .fetch_optional(&self.pool)
        .await?
        .map(StoredDocument::try_from)
        .transpose()
    }
}

/// In-memory store for tests.
#[cfg(test)]
#[derive(Default)]
pub struct MemoryDocumentStore {
    documents: std::sync::Mutex<std::collections::HashMap<(Uuid, DocumentKind), StoredDocument>>,
}

#[cfg(test)]
#[async_trait]
impl DocumentStore for MemoryDocumentStore {
    async fn upsert(
        &self,
        user_id: Uuid,
        kind: DocumentKind,
        content: &str,
    ) -> Result<StoredDocument, AppError> {
        let now = chrono::Utc::now();
        let mut documents = self.documents.lock().unwrap();
        let doc = documents
            .entry((user_id, kind))
            .and_modify(|d| {
                d.content = content.to_string();
                d.updated_at = now;
            })
            .or_insert_with(|| StoredDocument {
                id: Uuid::new_v4(),
                user_id,
                kind,
                content: content.to_string(),
                created_at: now,
                updated_at: now,
            });
        Ok(doc.clone())
    }

    async fn get(
        &self,
        user_id: Uuid,
        kind: DocumentKind,
    ) -> Result<Option<StoredDocument>, AppError> {
        Ok(self.documents.lock().unwrap().get(&(user_id, kind)).cloned())
    }
}
