use async_trait::async_trait;
use chrono::DateTime;
use chrono::Utc;
use sqlx::PgPool;

use crate::domain::auth::errors::TokenStoreError;
use crate::domain::auth::ports::TokenRepository;
use crate::domain::user::models::UserId;

pub struct PostgresTokenRepository {
    pool: PgPool,
}

impl PostgresTokenRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl TokenRepository for PostgresTokenRepository {
    async fn save(
        &self,
        user_id: &UserId,
        token: &str,
        expires_at: DateTime<Utc>,
    ) -> Result<(), TokenStoreError> {
        sqlx::query(
            r#"
            INSERT INTO refresh_tokens (token, user_id, expires_at)
            VALUES ($1, $2, $3)
            ON CONFLICT (token) DO NOTHING
            "#,
        )
        .bind(token)
        .bind(user_id.0)
        .bind(expires_at)
        .execute(&self.pool)
        .await
        .map_err(|e| TokenStoreError::DatabaseError(e.to_string()))?;

        Ok(())
    }

    async fn find_user_id(&self, token: &str) -> Result<UserId, TokenStoreError> {
        let user_id: Option<i64> = sqlx::query_scalar(
            r#"
            SELECT user_id
            FROM refresh_tokens
            WHERE token = $1 AND expires_at > NOW()
            "#,
        )
        .bind(token)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| TokenStoreError::DatabaseError(e.to_string()))?;

        user_id.map(UserId).ok_or(TokenStoreError::NotFound)
    }

    async fn delete(&self, token: &str) -> Result<(), TokenStoreError> {
        let result = sqlx::query(
            r#"
            DELETE FROM refresh_tokens
            WHERE token = $1
            "#,
        )
        .bind(token)
        .execute(&self.pool)
        .await
        .map_err(|e| TokenStoreError::DatabaseError(e.to_string()))?;

        if result.rows_affected() == 0 {
            return Err(TokenStoreError::NotFound);
        }

        Ok(())
    }
}
