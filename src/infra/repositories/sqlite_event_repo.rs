use crate::domain::{models::event::Event, ports::EventRepository};
use crate::error::AppError;
use async_trait::async_trait;
use sqlx::SqlitePool;

pub struct SqliteEventRepo {
    pool: SqlitePool,
}

impl SqliteEventRepo {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl EventRepository for SqliteEventRepo {
    async fn create(&self, event: &Event) -> Result<Event, AppError> {
        sqlx::query_as::<_, Event>(
            r#"INSERT INTO events (
                id, slug, name, description, status, submitted_by,
                date, time, price, image_url, video_url, event_type,
                club_id, promoter_id, dj_ids_json, social_links_json, ticket_link,
                created_at, updated_at
            ) VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
            RETURNING *"#,
        )
            .bind(&event.id)
            .bind(&event.slug)
            .bind(&event.name)
            .bind(&event.description)
            .bind(&event.status)
            .bind(&event.submitted_by)
            .bind(event.date)
            .bind(&event.time)
            .bind(&event.price)
            .bind(&event.image_url)
            .bind(&event.video_url)
            .bind(&event.event_type)
            .bind(&event.club_id)
            .bind(&event.promoter_id)
            .bind(&event.dj_ids_json)
            .bind(&event.social_links_json)
            .bind(&event.ticket_link)
            .bind(event.created_at)
            .bind(event.updated_at)
            .fetch_one(&self.pool)
            .await
            .map_err(AppError::Database)
    }

    async fn find_by_id(&self, id: &str) -> Result<Option<Event>, AppError> {
        sqlx::query_as::<_, Event>("SELECT * FROM events WHERE id = ?")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(AppError::Database)
    }

    async fn find_by_slug(&self, slug: &str) -> Result<Option<Event>, AppError> {
        sqlx::query_as::<_, Event>("SELECT * FROM events WHERE slug = ?")
            .bind(slug)
            .fetch_optional(&self.pool)
            .await
            .map_err(AppError::Database)
    }

    async fn list(&self) -> Result<Vec<Event>, AppError> {
        sqlx::query_as::<_, Event>("SELECT * FROM events ORDER BY created_at ASC")
            .fetch_all(&self.pool)
            .await
            .map_err(AppError::Database)
    }

    async fn update(&self, event: &Event) -> Result<Event, AppError> {
        sqlx::query_as::<_, Event>(
            r#"UPDATE events SET
                slug=?, name=?, description=?, status=?,
                date=?, time=?, price=?, image_url=?, video_url=?, event_type=?,
                club_id=?, promoter_id=?, dj_ids_json=?, social_links_json=?, ticket_link=?,
                updated_at=?
               WHERE id=? RETURNING *"#,
        )
            .bind(&event.slug)
            .bind(&event.name)
            .bind(&event.description)
            .bind(&event.status)
            .bind(event.date)
            .bind(&event.time)
            .bind(&event.price)
            .bind(&event.image_url)
            .bind(&event.video_url)
            .bind(&event.event_type)
            .bind(&event.club_id)
            .bind(&event.promoter_id)
            .bind(&event.dj_ids_json)
            .bind(&event.social_links_json)
            .bind(&event.ticket_link)
            .bind(event.updated_at)
            .bind(&event.id)
            .fetch_one(&self.pool)
            .await
            .map_err(AppError::Database)
    }

    async fn delete(&self, id: &str) -> Result<(), AppError> {
        let result = sqlx::query("DELETE FROM events WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(AppError::Database)?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound("Event not found".into()));
        }
        Ok(())
    }
}
