//! Animal entity - a pet posted for adoption, with its images

use chrono::{DateTime, Utc};
use uuid::Uuid;

/// Animal entity
///
/// Images are part of the animal and have no lifecycle of their own.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Animal {
    pub id: Uuid,
    pub owner_id: Uuid,
    pub name: String,
    pub animal_type: String,
    pub gender: String,
    pub breed: Option<String>,
    pub age: Option<String>,
    pub size: Option<String>,
    pub description: Option<String>,
    pub available: bool,
    pub created_at: DateTime<Utc>,
    pub images: Vec<AnimalImage>,
}

impl Animal {
    /// Create a new available Animal without images
    pub fn new(owner_id: Uuid, name: String, animal_type: String, gender: String) -> Self {
        Self {
            id: Uuid::new_v4(),
            owner_id,
            name,
            animal_type,
            gender,
            breed: None,
            age: None,
            size: None,
            description: None,
            available: true,
            created_at: Utc::now(),
            images: Vec::new(),
        }
    }

    /// Check if the animal belongs to the given user
    #[inline]
    pub fn is_owned_by(&self, user_id: Uuid) -> bool {
        self.owner_id == user_id
    }

    /// Attach an image, keeping insertion order
    pub fn add_image(&mut self, image_data: Vec<u8>) {
        self.images.push(AnimalImage::new(self.id, image_data));
    }
}

/// Raw image attached to an animal
#[derive(Clone, PartialEq, Eq)]
pub struct AnimalImage {
    pub id: Uuid,
    pub animal_id: Uuid,
    pub image_data: Vec<u8>,
}

impl AnimalImage {
    pub fn new(animal_id: Uuid, image_data: Vec<u8>) -> Self {
        Self {
            id: Uuid::new_v4(),
            animal_id,
            image_data,
        }
    }
}

// Image payloads can be megabytes; only their size is useful in logs
impl std::fmt::Debug for AnimalImage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AnimalImage")
            .field("id", &self.id)
            .field("animal_id", &self.animal_id)
            .field("image_data_len", &self.image_data.len())
            .finish()
    }
}
