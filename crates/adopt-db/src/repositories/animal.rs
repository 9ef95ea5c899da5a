//! PostgreSQL implementation of AnimalRepository

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::{debug, instrument};
use uuid::Uuid;

use adopt_core::entities::Animal;
use adopt_core::traits::{AnimalQuery, AnimalRepository, RepoResult};

use crate::mappers::attach_images;
use crate::models::{AnimalImageModel, AnimalModel};

use super::error::{escape_like, map_db_error};

/// PostgreSQL implementation of AnimalRepository
#[derive(Clone)]
pub struct PgAnimalRepository {
    pool: PgPool,
}

impl PgAnimalRepository {
    /// Create a new PgAnimalRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    async fn find_images(&self, animal_ids: &[Uuid]) -> RepoResult<Vec<AnimalImageModel>> {
        sqlx::query_as::<_, AnimalImageModel>(
            r"
            SELECT id, animal_id, image_data
            FROM animal_images
            WHERE animal_id = ANY($1)
            ORDER BY seq
            ",
        )
        .bind(animal_ids)
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)
    }
}

#[async_trait]
impl AnimalRepository for PgAnimalRepository {
    #[instrument(skip(self))]
    async fn find_all_available_not_from_user(
        &self,
        query: &AnimalQuery,
    ) -> RepoResult<Vec<Animal>> {
        let rows = sqlx::query_as::<_, AnimalModel>(
            r"
            SELECT id, owner_id, name, type, gender, breed, age, size, description,
                   available, created_at
            FROM animals
            WHERE available = TRUE
              AND owner_id <> $1
              AND ($2::TEXT IS NULL OR LOWER(gender) = LOWER($2))
              AND ($3::TEXT IS NULL OR LOWER(type) = LOWER($3))
              AND ($4::TEXT IS NULL OR name ILIKE '%' || $4 || '%')
            ORDER BY created_at DESC, id
            ",
        )
        .bind(query.user_id)
        .bind(query.gender.as_deref())
        .bind(query.animal_type.as_deref())
        .bind(query.name.as_deref().map(escape_like))
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        if rows.is_empty() {
            return Ok(Vec::new());
        }

        let ids: Vec<Uuid> = rows.iter().map(|row| row.id).collect();
        let images = self.find_images(&ids).await?;
        debug!(animals = rows.len(), images = images.len(), "Loaded available animals");

        Ok(attach_images(rows, images))
    }
}
