//! Pet service - Business rules for pet records
//!
//! Every check on incoming data happens here; the repository below is a plain
//! data gateway and the handlers above only translate outcomes to HTTP.

use crate::core::ServiceError;
use crate::dtos::PetDTO;
use crate::entities::Pet;
use crate::repositories::{Create, Delete, PetRepository, Read, ReadAll, Update};
use chrono::NaiveDate;
use tracing::{debug, info, instrument, warn};
use validator::Validate;

const INVALID_PET: &str = "Pet data is invalid. Name, type, and birth date are required.";

pub struct PetService {
    repository: PetRepository,
}

impl PetService {
    pub fn new(repository: PetRepository) -> Self {
        Self { repository }
    }

    #[instrument(skip(self, pet), fields(name = ?pet.name))]
    pub async fn create_pet(&self, pet: PetDTO) -> Result<Pet, ServiceError> {
        if !pet.is_valid() {
            warn!("Rejected invalid pet");
            return Err(ServiceError::InvalidArgument(INVALID_PET));
        }
        if pet.validate().is_err() {
            warn!("Rejected pet with malformed owner email");
            return Err(ServiceError::InvalidArgument("Invalid owner email format"));
        }
        let data = pet
            .into_create_dto()
            .ok_or(ServiceError::InvalidArgument(INVALID_PET))?;

        let created = self.repository.create(&data).await?;
        info!(id = created.id, "Pet created");
        Ok(created)
    }

    #[instrument(skip(self))]
    pub async fn get_pet_by_id(&self, id: i64) -> Result<Option<Pet>, ServiceError> {
        check_id(id)?;
        Ok(self.repository.read(&id).await?)
    }

    /// Replaces every mutable field of the stored pet with `pet`.
    ///
    /// Shape is validated before existence, so an invalid payload for a missing
    /// id is an `InvalidArgument`.
    #[instrument(skip(self, pet))]
    pub async fn update_pet(&self, id: i64, pet: PetDTO) -> Result<Pet, ServiceError> {
        check_id(id)?;
        let data = pet.into_create_dto().ok_or_else(|| {
            warn!("Rejected invalid pet");
            ServiceError::InvalidArgument(INVALID_PET)
        })?;

        if !self.repository.exists(&id).await? {
            warn!("Pet not found");
            return Err(ServiceError::NotFound(id));
        }

        let updated = self.repository.update(&id, &data).await.map_err(|e| match e {
            sqlx::Error::RowNotFound => ServiceError::NotFound(id),
            e => ServiceError::Database(e),
        })?;
        info!("Pet updated");
        Ok(updated)
    }

    #[instrument(skip(self))]
    pub async fn delete_pet(&self, id: i64) -> Result<(), ServiceError> {
        check_id(id)?;
        if !self.repository.exists(&id).await? {
            warn!("Pet not found");
            return Err(ServiceError::NotFound(id));
        }

        self.repository.delete(&id).await?;
        info!("Pet deleted");
        Ok(())
    }

    #[instrument(skip(self))]
    pub async fn get_all_pets(&self) -> Result<Vec<Pet>, ServiceError> {
        let pets = self.repository.read_all().await?;
        debug!("Loaded {} pets", pets.len());
        Ok(pets)
    }

    #[instrument(skip(self))]
    pub async fn find_pets_by_type(&self, pet_type: &str) -> Result<Vec<Pet>, ServiceError> {
        require(pet_type, "Pet type cannot be empty")?;
        Ok(self.repository.find_by_type(pet_type).await?)
    }

    #[instrument(skip(self))]
    pub async fn find_pets_by_owner_name(
        &self,
        owner_name: &str,
    ) -> Result<Vec<Pet>, ServiceError> {
        require(owner_name, "Owner name cannot be empty")?;
        Ok(self.repository.find_by_owner_name(owner_name).await?)
    }

    #[instrument(skip(self))]
    pub async fn find_pets_by_breed(&self, breed: &str) -> Result<Vec<Pet>, ServiceError> {
        require(breed, "Breed cannot be empty")?;
        Ok(self.repository.find_by_breed(breed).await?)
    }

    #[instrument(skip(self))]
    pub async fn find_pets_born_after(
        &self,
        date: Option<NaiveDate>,
    ) -> Result<Vec<Pet>, ServiceError> {
        let date = date.ok_or(ServiceError::InvalidArgument("Date cannot be null"))?;
        Ok(self.repository.find_born_after(&date).await?)
    }

    #[instrument(skip(self))]
    pub async fn find_pets_by_type_and_breed(
        &self,
        pet_type: Option<&str>,
        breed: Option<&str>,
    ) -> Result<Vec<Pet>, ServiceError> {
        let pet_type = pet_type.unwrap_or_default();
        let breed = breed.unwrap_or_default();
        require(pet_type, "Pet type cannot be empty")?;
        require(breed, "Breed cannot be empty")?;
        Ok(self.repository.find_by_type_and_breed(pet_type, breed).await?)
    }

    #[instrument(skip(self))]
    pub async fn search_pets_by_name(&self, fragment: &str) -> Result<Vec<Pet>, ServiceError> {
        require(fragment, "Name search term cannot be empty")?;
        Ok(self.repository.search_by_name(fragment).await?)
    }
}

fn check_id(id: i64) -> Result<(), ServiceError> {
    if id <= 0 {
        warn!(id, "Rejected non-positive pet id");
        return Err(ServiceError::InvalidArgument("Invalid pet ID"));
    }
    Ok(())
}

fn require(value: &str, message: &'static str) -> Result<(), ServiceError> {
    if value.trim().is_empty() {
        warn!("{}", message);
        return Err(ServiceError::InvalidArgument(message));
    }
    Ok(())
}
