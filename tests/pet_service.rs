//! Integration tests for the pet service rules
//!
//! These tests use `#[sqlx::test]`, which:
//! - creates an isolated database for every test
//! - applies the migrations from `migrations/`
//! - loads the requested fixtures from `fixtures/`

mod common;

#[cfg(test)]
mod pet_service_tests {
    use super::common::*;
    use pet_registry::ServiceError;
    use pet_registry::dtos::PetDTO;
    use pet_registry::entities::Pet;
    use sqlx::SqlitePool;

    fn names(pets: &[Pet]) -> Vec<&str> {
        pets.iter().map(|p| p.name.as_str()).collect()
    }

    // ============================================================
    // create
    // ============================================================

    #[sqlx::test]
    async fn test_create_assigns_id_and_round_trips(pool: SqlitePool) -> sqlx::Result<()> {
        let state = create_test_state(pool);

        let input = PetDTO {
            breed: Some("Beagle".to_string()),
            owner_name: Some("Anna".to_string()),
            owner_email: Some("anna@example.com".to_string()),
            ..pet("Rex", "Dog", date(2020, 1, 1))
        };
        let created = state.pets.create_pet(input).await.unwrap();
        assert!(created.id > 0);

        let fetched = state.pets.get_pet_by_id(created.id).await.unwrap().unwrap();
        assert_eq!(fetched, created);
        assert_eq!(fetched.name, "Rex");
        assert_eq!(fetched.pet_type, "Dog");
        assert_eq!(fetched.breed.as_deref(), Some("Beagle"));
        assert_eq!(fetched.birth_date, date(2020, 1, 1));
        assert_eq!(fetched.owner_name.as_deref(), Some("Anna"));
        assert_eq!(fetched.owner_email.as_deref(), Some("anna@example.com"));
        Ok(())
    }

    #[sqlx::test]
    async fn test_create_rejects_invalid_pets_without_storing(
        pool: SqlitePool,
    ) -> sqlx::Result<()> {
        let state = create_test_state(pool);

        let invalid = [
            PetDTO { name: None, ..pet("Rex", "Dog", date(2020, 1, 1)) },
            PetDTO { name: Some("  ".to_string()), ..pet("Rex", "Dog", date(2020, 1, 1)) },
            PetDTO { pet_type: None, ..pet("Rex", "Dog", date(2020, 1, 1)) },
            PetDTO { pet_type: Some("".to_string()), ..pet("Rex", "Dog", date(2020, 1, 1)) },
            PetDTO { birth_date: None, ..pet("Rex", "Dog", date(2020, 1, 1)) },
        ];
        for candidate in invalid {
            let result = state.pets.create_pet(candidate).await;
            assert!(matches!(result, Err(ServiceError::InvalidArgument(_))));
        }

        assert!(state.pets.get_all_pets().await.unwrap().is_empty());
        Ok(())
    }

    #[sqlx::test]
    async fn test_create_rejects_malformed_owner_email(pool: SqlitePool) -> sqlx::Result<()> {
        let state = create_test_state(pool);

        let input = PetDTO {
            owner_email: Some("not-an-email".to_string()),
            ..pet("Rex", "Dog", date(2020, 1, 1))
        };
        let result = state.pets.create_pet(input).await;
        assert!(matches!(result, Err(ServiceError::InvalidArgument(_))));
        assert!(state.pets.get_all_pets().await.unwrap().is_empty());
        Ok(())
    }

    #[sqlx::test]
    async fn test_create_accepts_empty_owner_email(pool: SqlitePool) -> sqlx::Result<()> {
        let state = create_test_state(pool);

        let input = PetDTO {
            owner_email: Some(String::new()),
            ..pet("Rex", "Dog", date(2020, 1, 1))
        };
        assert!(state.pets.create_pet(input).await.is_ok());
        Ok(())
    }

    // ============================================================
    // get / update / delete
    // ============================================================

    #[sqlx::test(fixtures(path = "../fixtures", scripts("pets")))]
    async fn test_non_positive_ids_are_invalid(pool: SqlitePool) -> sqlx::Result<()> {
        let state = create_test_state(pool);

        assert!(matches!(
            state.pets.get_pet_by_id(0).await,
            Err(ServiceError::InvalidArgument(_))
        ));
        assert!(matches!(
            state.pets.delete_pet(-4).await,
            Err(ServiceError::InvalidArgument(_))
        ));
        assert!(matches!(
            state.pets.update_pet(0, pet("Rex", "Dog", date(2020, 1, 1))).await,
            Err(ServiceError::InvalidArgument(_))
        ));
        Ok(())
    }

    #[sqlx::test(fixtures(path = "../fixtures", scripts("pets")))]
    async fn test_get_by_id(pool: SqlitePool) -> sqlx::Result<()> {
        let state = create_test_state(pool);

        let max = state.pets.get_pet_by_id(1).await.unwrap().unwrap();
        assert_eq!(max.name, "Max");
        assert_eq!(max.birth_date, date(2019, 3, 1));

        assert!(state.pets.get_pet_by_id(42).await.unwrap().is_none());
        Ok(())
    }

    #[sqlx::test(fixtures(path = "../fixtures", scripts("pets")))]
    async fn test_update_replaces_every_field(pool: SqlitePool) -> sqlx::Result<()> {
        let state = create_test_state(pool);

        // breed and owner omitted: they must be cleared, not kept
        let replacement = pet("Maximus", "Cat", date(2021, 5, 6));
        let updated = state.pets.update_pet(1, replacement).await.unwrap();

        assert_eq!(updated.id, 1);
        assert_eq!(updated.name, "Maximus");
        assert_eq!(updated.pet_type, "Cat");
        assert_eq!(updated.birth_date, date(2021, 5, 6));
        assert!(updated.breed.is_none());
        assert!(updated.owner_name.is_none());
        assert!(updated.owner_email.is_none());

        let stored = state.pets.get_pet_by_id(1).await.unwrap().unwrap();
        assert_eq!(stored, updated);
        Ok(())
    }

    #[sqlx::test(fixtures(path = "../fixtures", scripts("pets")))]
    async fn test_update_missing_pet_is_not_found(pool: SqlitePool) -> sqlx::Result<()> {
        let state = create_test_state(pool);

        let result = state.pets.update_pet(99, pet("Rex", "Dog", date(2020, 1, 1))).await;
        assert!(matches!(result, Err(ServiceError::NotFound(99))));
        Ok(())
    }

    #[sqlx::test]
    async fn test_update_validates_before_checking_existence(
        pool: SqlitePool,
    ) -> sqlx::Result<()> {
        let state = create_test_state(pool);

        let invalid = PetDTO { name: None, ..pet("Rex", "Dog", date(2020, 1, 1)) };
        let result = state.pets.update_pet(99, invalid).await;
        assert!(matches!(result, Err(ServiceError::InvalidArgument(_))));
        Ok(())
    }

    #[sqlx::test(fixtures(path = "../fixtures", scripts("pets")))]
    async fn test_delete_twice(pool: SqlitePool) -> sqlx::Result<()> {
        let state = create_test_state(pool);

        state.pets.delete_pet(3).await.unwrap();
        let second = state.pets.delete_pet(3).await;
        assert!(matches!(second, Err(ServiceError::NotFound(3))));
        assert!(state.pets.get_pet_by_id(3).await.unwrap().is_none());
        assert_eq!(state.pets.get_all_pets().await.unwrap().len(), 5);
        Ok(())
    }

    // ============================================================
    // finders
    // ============================================================

    #[sqlx::test(fixtures(path = "../fixtures", scripts("pets")))]
    async fn test_find_by_type_is_exact_and_case_sensitive(pool: SqlitePool) -> sqlx::Result<()> {
        let state = create_test_state(pool);

        let dogs = state.pets.find_pets_by_type("Dog").await.unwrap();
        assert_eq!(names(&dogs), vec!["Max", "AXEL"]);

        assert!(state.pets.find_pets_by_type("Parrot").await.unwrap().is_empty());
        assert!(matches!(
            state.pets.find_pets_by_type("  ").await,
            Err(ServiceError::InvalidArgument(_))
        ));
        Ok(())
    }

    #[sqlx::test(fixtures(path = "../fixtures", scripts("pets")))]
    async fn test_find_by_owner_and_breed(pool: SqlitePool) -> sqlx::Result<()> {
        let state = create_test_state(pool);

        let anna = state.pets.find_pets_by_owner_name("Anna").await.unwrap();
        assert_eq!(names(&anna), vec!["Max", "Luna"]);

        let beagles = state.pets.find_pets_by_breed("Beagle").await.unwrap();
        assert_eq!(names(&beagles), vec!["Max", "Kiwi"]);

        assert!(matches!(
            state.pets.find_pets_by_owner_name("").await,
            Err(ServiceError::InvalidArgument(_))
        ));
        assert!(matches!(
            state.pets.find_pets_by_breed(" ").await,
            Err(ServiceError::InvalidArgument(_))
        ));
        Ok(())
    }

    #[sqlx::test(fixtures(path = "../fixtures", scripts("pets")))]
    async fn test_find_born_after_is_strict(pool: SqlitePool) -> sqlx::Result<()> {
        let state = create_test_state(pool);

        let young = state.pets.find_pets_born_after(Some(date(2021, 7, 12))).await.unwrap();
        assert_eq!(names(&young), vec!["Luna"]);

        assert!(matches!(
            state.pets.find_pets_born_after(None).await,
            Err(ServiceError::InvalidArgument(_))
        ));
        Ok(())
    }

    #[sqlx::test(fixtures(path = "../fixtures", scripts("pets")))]
    async fn test_find_by_type_and_breed(pool: SqlitePool) -> sqlx::Result<()> {
        let state = create_test_state(pool);

        let found = state
            .pets
            .find_pets_by_type_and_breed(Some("Dog"), Some("Beagle"))
            .await
            .unwrap();
        assert_eq!(names(&found), vec!["Max"]);

        assert!(matches!(
            state.pets.find_pets_by_type_and_breed(Some("Dog"), None).await,
            Err(ServiceError::InvalidArgument(_))
        ));
        assert!(matches!(
            state.pets.find_pets_by_type_and_breed(Some(" "), Some("Beagle")).await,
            Err(ServiceError::InvalidArgument(_))
        ));
        Ok(())
    }

    #[sqlx::test(fixtures(path = "../fixtures", scripts("pets")))]
    async fn test_search_by_name_ignores_case(pool: SqlitePool) -> sqlx::Result<()> {
        let state = create_test_state(pool);

        let found = state.pets.search_pets_by_name("ax").await.unwrap();
        assert_eq!(names(&found), vec!["Max", "AXEL"]);

        assert!(state.pets.search_pets_by_name("%").await.unwrap().is_empty());
        assert!(matches!(
            state.pets.search_pets_by_name("").await,
            Err(ServiceError::InvalidArgument(_))
        ));
        Ok(())
    }

    #[sqlx::test(fixtures(path = "../fixtures", scripts("pets")))]
    async fn test_search_by_name_folds_accented_letters(pool: SqlitePool) -> sqlx::Result<()> {
        let state = create_test_state(pool);

        let emile = state.pets.search_pets_by_name("émile").await.unwrap();
        assert_eq!(names(&emile), vec!["ÉMILE"]);

        let lower = state.pets.search_pets_by_name("öd").await.unwrap();
        assert_eq!(names(&lower), vec!["Ödön"]);

        let upper = state.pets.search_pets_by_name("ÖD").await.unwrap();
        assert_eq!(names(&upper), vec!["Ödön"]);
        Ok(())
    }
}
