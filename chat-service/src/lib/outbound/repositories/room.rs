use async_trait::async_trait;
use chrono::DateTime;
use chrono::Utc;
use sqlx::PgPool;
use uuid::Uuid;

use crate::domain::room::errors::RoomError;
use crate::domain::room::models::Room;
use crate::domain::room::models::RoomId;
use crate::domain::room::ports::RoomRepository;
use crate::domain::user::models::UserId;

#[derive(sqlx::FromRow)]
struct RoomRow {
    id: Uuid,
    initiator_id: i64,
    participant_id: i64,
    created_at: DateTime<Utc>,
}

impl From<RoomRow> for Room {
    fn from(row: RoomRow) -> Self {
        Room {
            id: RoomId(row.id),
            initiator_id: UserId(row.initiator_id),
            participant_id: UserId(row.participant_id),
            created_at: row.created_at,
        }
    }
}

pub struct PostgresRoomRepository {
    pool: PgPool,
}

impl PostgresRoomRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl RoomRepository for PostgresRoomRepository {
    async fn create(&self, room: Room) -> Result<Room, RoomError> {
        let row = sqlx::query_as::<_, RoomRow>(
            r#"
            INSERT INTO rooms (id, initiator_id, participant_id)
            VALUES ($1, $2, $3)
            RETURNING id, initiator_id, participant_id, created_at
            "#,
        )
        .bind(room.id.0)
        .bind(room.initiator_id.as_i64())
        .bind(room.participant_id.as_i64())
        .fetch_one(&self.pool)
        .await
        .map_err(|e| RoomError::DatabaseError(e.to_string()))?;

        Ok(row.into())
    }
}
