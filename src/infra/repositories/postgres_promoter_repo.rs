use crate::domain::{models::promoter::Promoter, ports::PromoterRepository};
use crate::error::AppError;
use async_trait::async_trait;
use sqlx::PgPool;

pub struct PostgresPromoterRepo {
    pool: PgPool,
}

impl PostgresPromoterRepo {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl PromoterRepository for PostgresPromoterRepo {
    async fn create(&self, promoter: &Promoter) -> Result<Promoter, AppError> {
        sqlx::query_as::<_, Promoter>(
            r#"INSERT INTO promoters (
                id, slug, name, description, status, submitted_by,
                logo_url, history, event_type_focus, social_links_json,
                created_at, updated_at
            ) VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12)
            RETURNING *"#,
        )
            .bind(&promoter.id)
            .bind(&promoter.slug)
            .bind(&promoter.name)
            .bind(&promoter.description)
            .bind(&promoter.status)
            .bind(&promoter.submitted_by)
            .bind(&promoter.logo_url)
            .bind(&promoter.history)
            .bind(&promoter.event_type_focus)
            .bind(&promoter.social_links_json)
            .bind(promoter.created_at)
            .bind(promoter.updated_at)
            .fetch_one(&self.pool)
            .await
            .map_err(AppError::Database)
    }

    async fn find_by_id(&self, id: &str) -> Result<Option<Promoter>, AppError> {
        sqlx::query_as::<_, Promoter>("SELECT * FROM promoters WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(AppError::Database)
    }

    async fn find_by_slug(&self, slug: &str) -> Result<Option<Promoter>, AppError> {
        sqlx::query_as::<_, Promoter>("SELECT * FROM promoters WHERE slug = $1")
            .bind(slug)
            .fetch_optional(&self.pool)
            .await
            .map_err(AppError::Database)
    }

    async fn list(&self) -> Result<Vec<Promoter>, AppError> {
        sqlx::query_as::<_, Promoter>("SELECT * FROM promoters ORDER BY created_at ASC")
            .fetch_all(&self.pool)
            .await
            .map_err(AppError::Database)
    }

    async fn update(&self, promoter: &Promoter) -> Result<Promoter, AppError> {
        sqlx::query_as::<_, Promoter>(
            r#"UPDATE promoters SET
                slug=$1, name=$2, description=$3, status=$4,
                logo_url=$5, history=$6, event_type_focus=$7, social_links_json=$8, updated_at=$9
               WHERE id=$10 RETURNING *"#,
        )
            .bind(&promoter.slug)
            .bind(&promoter.name)
            .bind(&promoter.description)
            .bind(&promoter.status)
            .bind(&promoter.logo_url)
            .bind(&promoter.history)
            .bind(&promoter.event_type_focus)
            .bind(&promoter.social_links_json)
            .bind(promoter.updated_at)
            .bind(&promoter.id)
            .fetch_one(&self.pool)
            .await
            .map_err(AppError::Database)
    }

    async fn delete(&self, id: &str) -> Result<(), AppError> {
        let result = sqlx::query("DELETE FROM promoters WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(AppError::Database)?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound("Promoter not found".into()));
        }
        Ok(())
    }
}
