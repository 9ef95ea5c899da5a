//! Animal service
//!
//! Lists animals a user can adopt.

use adopt_core::traits::AnimalQuery;
use adopt_core::{Either, Outcome};
use tracing::{debug, instrument};
use uuid::Uuid;

use crate::dto::AvailableAnimals;

use super::animal_images::format_animal_images;
use super::context::ServiceContext;
use super::error::ServiceResult;

/// Input of [`GetAvailableAnimalsService::execute`]
#[derive(Debug, Clone, Default)]
pub struct GetAvailableAnimalsParams {
    pub user_id: Uuid,
    pub gender: Option<String>,
    pub animal_type: Option<String>,
    pub name: Option<String>,
}

/// Available-animals listing service
pub struct GetAvailableAnimalsService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> GetAvailableAnimalsService<'a> {
    /// Create a new GetAvailableAnimalsService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Animals available for adoption that the user does not own, images as Base64
    ///
    /// Never returns a failure today; repository faults propagate as `Err`.
    #[instrument(skip(self), fields(user_id = %params.user_id))]
    pub async fn execute(
        &self,
        params: GetAvailableAnimalsParams,
    ) -> ServiceResult<Outcome<AvailableAnimals>> {
        let query = AnimalQuery::filtered(
            params.user_id,
            params.gender,
            params.animal_type,
            params.name,
        );

        let animals = self
            .ctx
            .animal_repo()
            .find_all_available_not_from_user(&query)
            .await?;

        debug!(count = animals.len(), "Available animals loaded");

        Ok(Either::success(AvailableAnimals {
            animals: format_animal_images(&animals),
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    use adopt_core::entities::Animal;
    use adopt_core::DomainError;
    use mockall::predicate::eq;

    use crate::services::error::ServiceError;
    use crate::services::test_support::{InMemoryAnimalRepository, MockAnimalRepo, TestContext};

    fn animal(owner: Uuid, name: &str, animal_type: &str, gender: &str) -> Animal {
        Animal::new(owner, name.to_string(), animal_type.to_string(), gender.to_string())
    }

    fn context_with(animals: Vec<Animal>) -> ServiceContext {
        let mut test = TestContext::new();
        test.animals = Some(Arc::new(InMemoryAnimalRepository { animals }));
        test.build()
    }

    #[tokio::test]
    async fn test_excludes_own_and_unavailable_animals() {
        let me = Uuid::new_v4();
        let other = Uuid::new_v4();

        let mut adopted = animal(other, "Bob", "dog", "male");
        adopted.available = false;
        let mut rex = animal(other, "Rex", "dog", "male");
        rex.add_image(b"hello".to_vec());

        let ctx = context_with(vec![animal(me, "Mine", "cat", "female"), adopted, rex.clone()]);

        let result = GetAvailableAnimalsService::new(&ctx)
            .execute(GetAvailableAnimalsParams {
                user_id: me,
                ..Default::default()
            })
            .await
            .unwrap();

        let animals = result.success_value().unwrap().animals.clone();
        assert_eq!(animals.len(), 1);
        assert_eq!(animals[0].id, rex.id);
        assert_eq!(animals[0].images, vec!["aGVsbG8="]);
        assert!(animals.iter().all(|a| a.owner_id != me && a.available));
    }

    #[tokio::test]
    async fn test_applies_filters() {
        let me = Uuid::new_v4();
        let other = Uuid::new_v4();
        let ctx = context_with(vec![
            animal(other, "Rex", "dog", "male"),
            animal(other, "Rexona", "dog", "female"),
            animal(other, "Mia", "cat", "female"),
        ]);
        let service = GetAvailableAnimalsService::new(&ctx);

        let result = service
            .execute(GetAvailableAnimalsParams {
                user_id: me,
                gender: Some("Female".to_string()),
                animal_type: Some("dog".to_string()),
                name: Some("rex".to_string()),
            })
            .await
            .unwrap();
        let names: Vec<String> = result
            .success_value()
            .unwrap()
            .animals
            .iter()
            .map(|a| a.name.clone())
            .collect();
        assert_eq!(names, vec!["Rexona"]);

        // Blank filters constrain nothing
        let result = service
            .execute(GetAvailableAnimalsParams {
                user_id: me,
                gender: Some(String::new()),
                animal_type: None,
                name: Some("  ".to_string()),
            })
            .await
            .unwrap();
        assert_eq!(result.success_value().unwrap().animals.len(), 3);
    }

    #[tokio::test]
    async fn test_forwards_query_to_repository() {
        let me = Uuid::new_v4();
        let expected = AnimalQuery {
            user_id: me,
            gender: Some("male".to_string()),
            animal_type: Some("dog".to_string()),
            name: Some("Rex".to_string()),
        };

        let mut repo = MockAnimalRepo::new();
        repo.expect_find_all_available_not_from_user()
            .with(eq(expected))
            .times(1)
            .returning(|_| Ok(Vec::new()));

        let mut test = TestContext::new();
        test.animals = Some(Arc::new(repo));
        let ctx = test.build();

        let result = GetAvailableAnimalsService::new(&ctx)
            .execute(GetAvailableAnimalsParams {
                user_id: me,
                gender: Some("male".to_string()),
                animal_type: Some("dog".to_string()),
                name: Some("Rex".to_string()),
            })
            .await
            .unwrap();

        assert_eq!(result.success_value().map(|s| s.animals.len()), Some(0));
    }

    #[tokio::test]
    async fn test_repository_failure_is_an_error() {
        let mut repo = MockAnimalRepo::new();
        repo.expect_find_all_available_not_from_user()
            .returning(|_| Err(DomainError::DatabaseError("connection refused".to_string())));

        let mut test = TestContext::new();
        test.animals = Some(Arc::new(repo));
        let ctx = test.build();

        let result = GetAvailableAnimalsService::new(&ctx)
            .execute(GetAvailableAnimalsParams::default())
            .await;

        assert!(matches!(result, Err(ServiceError::Domain(DomainError::DatabaseError(_)))));
    }
}
