use crate::domain::{models::club::Club, ports::ClubRepository};
use crate::error::AppError;
use async_trait::async_trait;
use sqlx::PgPool;

pub struct PostgresClubRepo {
    pool: PgPool,
}

impl PostgresClubRepo {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ClubRepository for PostgresClubRepo {
    async fn create(&self, club: &Club) -> Result<Club, AppError> {
        sqlx::query_as::<_, Club>(
            r#"INSERT INTO clubs (
                id, slug, name, description, status, submitted_by,
                address, map_link, music_type, photos_json, services_json, social_links_json,
                created_at, updated_at
            ) VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13, $14)
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
        sqlx::query_as::<_, Club>("SELECT * FROM clubs WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(AppError::Database)
    }

    async fn find_by_slug(&self, slug: &str) -> Result<Option<Club>, AppError> {
        sqlx::query_as::<_, Club>("SELECT * FROM clubs WHERE slug = $1")
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
                slug=$1, name=$2, description=$3, status=$4,
                address=$5, map_link=$6, music_type=$7, photos_json=$8, services_json=$9,
                social_links_json=$10, updated_at=$11
               WHERE id=$12 RETURNING *"#,
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
        let result = sqlx::query("DELETE FROM clubs WHERE id = $1")
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
