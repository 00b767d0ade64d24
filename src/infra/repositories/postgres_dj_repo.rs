use crate::domain::{models::dj::Dj, ports::DjRepository};
use crate::error::AppError;
use async_trait::async_trait;
use sqlx::PgPool;

pub struct PostgresDjRepo {
    pool: PgPool,
}

impl PostgresDjRepo {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl DjRepository for PostgresDjRepo {
    async fn create(&self, dj: &Dj) -> Result<Dj, AppError> {
        sqlx::query_as::<_, Dj>(
            r#"INSERT INTO djs (
                id, slug, name, description, status, submitted_by,
                photo_url, bio, genres_json, social_links_json,
                created_at, updated_at
            ) VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12)
            RETURNING *"#,
        )
            .bind(&dj.id)
            .bind(&dj.slug)
            .bind(&dj.name)
            .bind(&dj.description)
            .bind(&dj.status)
            .bind(&dj.submitted_by)
            .bind(&dj.photo_url)
            .bind(&dj.bio)
            .bind(&dj.genres_json)
            .bind(&dj.social_links_json)
            .bind(dj.created_at)
            .bind(dj.updated_at)
            .fetch_one(&self.pool)
            .await
            .map_err(AppError::Database)
    }

    async fn find_by_id(&self, id: &str) -> Result<Option<Dj>, AppError> {
        sqlx::query_as::<_, Dj>("SELECT * FROM djs WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(AppError::Database)
    }

    async fn find_by_slug(&self, slug: &str) -> Result<Option<Dj>, AppError> {
        sqlx::query_as::<_, Dj>("SELECT * FROM djs WHERE slug = $1")
            .bind(slug)
            .fetch_optional(&self.pool)
            .await
            .map_err(AppError::Database)
    }

    async fn list(&self) -> Result<Vec<Dj>, AppError> {
        sqlx::query_as::<_, Dj>("SELECT * FROM djs ORDER BY created_at ASC")
            .fetch_all(&self.pool)
            .await
            .map_err(AppError::Database)
    }

    async fn update(&self, dj: &Dj) -> Result<Dj, AppError> {
        sqlx::query_as::<_, Dj>(
            r#"UPDATE djs SET
                slug=$1, name=$2, description=$3, status=$4,
                photo_url=$5, bio=$6, genres_json=$7, social_links_json=$8, updated_at=$9
               WHERE id=$10 RETURNING *"#,
        )
            .bind(&dj.slug)
            .bind(&dj.name)
            .bind(&dj.description)
            .bind(&dj.status)
            .bind(&dj.photo_url)
            .bind(&dj.bio)
            .bind(&dj.genres_json)
            .bind(&dj.social_links_json)
            .bind(dj.updated_at)
            .bind(&dj.id)
            .fetch_one(&self.pool)
            .await
            .map_err(AppError::Database)
    }

    async fn delete(&self, id: &str) -> Result<(), AppError> {
        let result = sqlx::query("DELETE FROM djs WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(AppError::Database)?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound("DJ not found".into()));
        }
        Ok(())
    }
}
