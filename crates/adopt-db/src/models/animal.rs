//! Animal database models

use chrono::{DateTime, Utc};
use sqlx::FromRow;
use uuid::Uuid;

/// Database model for animals table
#[derive(Debug, Clone, FromRow)]
pub struct AnimalModel {
    pub id: Uuid,
    pub owner_id: Uuid,
    pub name: String,
    #[sqlx(rename = "type")]
    pub animal_type: String,
    pub gender: String,
    pub breed: Option<String>,
    pub age: Option<String>,
    pub size: Option<String>,
    pub description: Option<String>,
    pub available: bool,
    pub created_at: DateTime<Utc>,
}

/// Database model for animal_images table
#[derive(Clone, FromRow)]
pub struct AnimalImageModel {
    pub id: Uuid,
    pub animal_id: Uuid,
    pub image_data: Vec<u8>,
}

impl std::fmt::Debug for AnimalImageModel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AnimalImageModel")
            .field("id", &self.id)
            .field("animal_id", &self.animal_id)
            .field("image_data_len", &self.image_data.len())
            .finish()
    }
}
