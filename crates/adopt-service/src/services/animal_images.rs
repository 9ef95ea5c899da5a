//! Animal image formatter
//!
//! Converts animals with raw image bytes into responses carrying each image as a
//! standard Base64 string (RFC 4648 alphabet, with padding).

use adopt_core::entities::Animal;
use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;

use crate::dto::AnimalResponse;

/// Format every animal's images as Base64, preserving order and all other fields
pub fn format_animal_images(animals: &[Animal]) -> Vec<AnimalResponse> {
    animals.iter().map(format_animal).collect()
}

fn format_animal(animal: &Animal) -> AnimalResponse {
    AnimalResponse {
        id: animal.id,
        owner_id: animal.owner_id,
        name: animal.name.clone(),
        animal_type: animal.animal_type.clone(),
        gender: animal.gender.clone(),
        breed: animal.breed.clone(),
        age: animal.age.clone(),
        size: animal.size.clone(),
        description: animal.description.clone(),
        available: animal.available,
        created_at: animal.created_at,
        images: animal
            .images
            .iter()
            .map(|image| STANDARD.encode(&image.image_data))
            .collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use uuid::Uuid;

    fn animal(name: &str, images: &[&[u8]]) -> Animal {
        let mut animal = Animal::new(
            Uuid::new_v4(),
            name.to_string(),
            "dog".to_string(),
            "male".to_string(),
        );
        animal.breed = Some("Vira-lata".to_string());
        animal.description = Some("Muito dócil".to_string());
        for image in images {
            animal.add_image(image.to_vec());
        }
        animal
    }

    #[test]
    fn test_empty_input() {
        assert!(format_animal_images(&[]).is_empty());
    }

    #[test]
    fn test_encodes_images_in_order() {
        let animals = vec![animal("Rex", &[b"hello", b"\x00\xff", b""])];

        let formatted = format_animal_images(&animals);

        assert_eq!(formatted.len(), 1);
        assert_eq!(formatted[0].images, vec!["aGVsbG8=", "AP8=", ""]);
    }

    #[test]
    fn test_preserves_order_and_fields() {
        let animals = vec![
            animal("Rex", &[b"a"]),
            animal("Mia", &[]),
            animal("Bob", &[b"b", b"c"]),
        ];
        let before = animals.clone();

        let formatted = format_animal_images(&animals);

        assert_eq!(animals, before);
        assert_eq!(formatted.len(), animals.len());
        for (response, source) in formatted.iter().zip(&animals) {
            assert_eq!(response.id, source.id);
            assert_eq!(response.owner_id, source.owner_id);
            assert_eq!(response.name, source.name);
            assert_eq!(response.animal_type, source.animal_type);
            assert_eq!(response.breed, source.breed);
            assert_eq!(response.description, source.description);
            assert_eq!(response.available, source.available);
            assert_eq!(response.created_at, source.created_at);
            assert_eq!(response.images.len(), source.images.len());
        }
    }

    #[test]
    fn test_serialized_shape() {
        let formatted = format_animal_images(&[animal("Rex", &[b"hi"])]);
        let json = serde_json::to_value(&formatted[0]).unwrap();

        assert_eq!(json["type"], "dog");
        assert_eq!(json["images"][0], "aGk=");
        assert!(json.get("ownerId").is_some());
        assert!(json.get("imageData").is_none());
    }
}
