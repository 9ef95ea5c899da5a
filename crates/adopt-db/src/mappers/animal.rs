//! Animal and AnimalImage entity <-> model mapper

use std::collections::HashMap;

use adopt_core::entities::{Animal, AnimalImage};
use uuid::Uuid;

use crate::models::{AnimalImageModel, AnimalModel};

/// Convert AnimalModel to an Animal entity without images
impl From<AnimalModel> for Animal {
    fn from(model: AnimalModel) -> Self {
        Animal {
            id: model.id,
            owner_id: model.owner_id,
            name: model.name,
            animal_type: model.animal_type,
            gender: model.gender,
            breed: model.breed,
            age: model.age,
            size: model.size,
            description: model.description,
            available: model.available,
            created_at: model.created_at,
            images: Vec::new(),
        }
    }
}

/// Convert AnimalImageModel to AnimalImage entity
impl From<AnimalImageModel> for AnimalImage {
    fn from(model: AnimalImageModel) -> Self {
        AnimalImage {
            id: model.id,
            animal_id: model.animal_id,
            image_data: model.image_data,
        }
    }
}

/// Build animals from their rows, distributing `images` to their owners
///
/// Animal order follows `animals`; each animal's images keep the order they
/// appear in `images`. Images of unknown animals are dropped.
pub fn attach_images(animals: Vec<AnimalModel>, images: Vec<AnimalImageModel>) -> Vec<Animal> {
    let mut by_animal: HashMap<Uuid, Vec<AnimalImage>> = HashMap::new();
    for image in images {
        by_animal
            .entry(image.animal_id)
            .or_default()
            .push(AnimalImage::from(image));
    }

    animals
        .into_iter()
        .map(|model| {
            let mut animal = Animal::from(model);
            animal.images = by_animal.remove(&animal.id).unwrap_or_default();
            animal
        })
        .collect()
}
