use crate::domain::{models::club::Club, ports::ClubRepository};
use crate::error::AppError;
use async_trait::async_trait;
use sqlx::SqlitePool;

pub struct SqliteClubRepo {
    pool: SqlitePool,
}

impl SqliteClubRepo {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ClubRepository for SqliteClubRepo {
    async fn create(&self, club: &Club) -> Result<Club, AppError> {
        sqlx::query_as::<_, Club>(
            r#"INSERT INTO clubs (
                id, slug, name, description, status, submitted_by,
                address, map_link, music_type, photos_json, services_json, social_links_json,
                created_at, updated_at
            ) VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
            RETURNING *"#,
        )
            .bind(&club.id)
            .bind(&club.slug)
            .bind(&club.name)
            .bind(&club.description)
            .bind(&club.status)
            .bind(&club.submitted_by)
            .bind(&club.address)
            .bind(&club.map_link)
            .bind(&club.music_type)
            .bind(&club.photos_json)
            .bind(&club.services_json)
            .bind(&club.social_links_json)
            .bind(club.created_at)
            .bind(club.updated_at)
            .fetch_one(&self.pool)
            .await
            .map_err(AppError::Database)
    }

    async fn find_by_id(&self, id: &str) -> Result<Option<Club>, AppError> {
        sqlx::query_as::<_, Club>("SELECT * FROM clubs WHERE id = ?")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(AppError::Database)
    }

    async fn find_by_slug(&self, slug: &str) -> Result<Option<Club>, AppError> {
        sqlx::query_as::<_, Club>("SELECT * FROM clubs WHERE slug = ?")
            .bind(slug)
            .fetch_optional(&self.pool)
            .await
            .map_err(AppError::Database)
    }

    async fn list(&self) -> Result<Vec<Club>, AppError> {
        sqlx::query_as::<_, Club>("SELECT * FROM clubs ORDER BY created_at ASC")
            .fetch_all(&self.pool)
            .await
            .map_err(AppError::Database)
    }

    async fn update(&self, club: &Club) -> Result<Club, AppError> {
        sqlx::query_as::<_, Club>(
            r#"UPDATE clubs SET
                slug=?, name=?, description=?, status=?,
                address=?, map_link=?, music_type=?, photos_json=?, services_json=?,
                social_links_json=?, updated_at=?
               WHERE id=? RETURNING *"#,
        )
            .bind(&club.slug)
            .bind(&club.name)
            .bind(&club.description)
            .bind(&club.status)
            .bind(&club.address)
            .bind(&club.map_link)
            .bind(&club.music_type)
            .bind(&club.photos_json)
            .bind(&club.services_json)
            .bind(&club.social_links_json)
            .bind(club.updated_at)
            .bind(&club.id)
            .fetch_one(&self.pool)
            .await
            .map_err(AppError::Database)
    }

    async fn delete(&self, id: &str) -> Result<(), AppError> {
        let result = sqlx::query("DELETE FROM clubs WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(AppError::Database)?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound("Club not found".into()));
        }
        Ok(())
    }
}
