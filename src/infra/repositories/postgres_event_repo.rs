use crate::domain::{models::event::Event, ports::EventRepository};
use crate::error::AppError;
use async_trait::async_trait;
use sqlx::PgPool;

pub struct PostgresEventRepo {
    pool: PgPool,
}

impl PostgresEventRepo {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl EventRepository for PostgresEventRepo {
    async fn create(&self, event: &Event) -> Result<Event, AppError> {
        sqlx::query_as::<_, Event>(
            r#"INSERT INTO events (
                id, slug, name, description, status, submitted_by,
                date, time, price, image_url, video_url, event_type,
                club_id, promoter_id, dj_ids_json, social_links_json, ticket_link,
                created_at, updated_at
            ) VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13, $14, $15, $16, $17, $18, $19)
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
        sqlx::query_as::<_, Event>("SELECT * FROM events WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(AppError::Database)
    }

    async fn find_by_slug(&self, slug: &str) -> Result<Option<Event>, AppError> {
        sqlx::query_as::<_, Event>("SELECT * FROM events WHERE slug = $1")
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
                slug=$1, name=$2, description=$3, status=$4,
                date=$5, time=$6, price=$7, image_url=$8, video_url=$9, event_type=$10,
                club_id=$11, promoter_id=$12, dj_ids_json=$13, social_links_json=$14, ticket_link=$15,
                updated_at=$16
               WHERE id=$17 RETURNING *"#,
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
        let result = sqlx::query("DELETE FROM events WHERE id = $1")
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
