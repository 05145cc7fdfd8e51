//! PetRepository - Repository for pet records

use super::{Create, Delete, Read, ReadAll, Update};
use crate::dtos::{CreatePetDTO, UpdatePetDTO};
use crate::entities::Pet;
use chrono::NaiveDate;
use sqlx::{Error, Sqlite, SqlitePool};

const PET_COLUMNS: &str = "id, name, pet_type, breed, birth_date, owner_name, owner_email";

pub struct PetRepository {
    connection_pool: SqlitePool,
}

impl PetRepository {
    pub fn new(connection_pool: SqlitePool) -> PetRepository {
        Self { connection_pool }
    }

    pub async fn exists(&self, id: &i64) -> Result<bool, Error> {
        let found = sqlx::query_scalar::<Sqlite, i64>("SELECT 1 FROM pets WHERE id = ?")
            .bind(id)
            .fetch_optional(&self.connection_pool)
            .await?;

        Ok(found.is_some())
    }

    /// Exact, case-sensitive match on the type
    pub async fn find_by_type(&self, pet_type: &str) -> Result<Vec<Pet>, Error> {
        self.fetch_where("pet_type = ?", &[pet_type]).await
    }

    pub async fn find_by_owner_name(&self, owner_name: &str) -> Result<Vec<Pet>, Error> {
        self.fetch_where("owner_name = ?", &[owner_name]).await
    }

    pub async fn find_by_breed(&self, breed: &str) -> Result<Vec<Pet>, Error> {
        self.fetch_where("breed = ?", &[breed]).await
    }

    pub async fn find_by_type_and_breed(
        &self,
        pet_type: &str,
        breed: &str,
    ) -> Result<Vec<Pet>, Error> {
        self.fetch_where("pet_type = ? AND breed = ?", &[pet_type, breed])
            .await
    }

    /// Pets born strictly after `date`
    pub async fn find_born_after(&self, date: &NaiveDate) -> Result<Vec<Pet>, Error> {
        let query = format!("SELECT {PET_COLUMNS} FROM pets WHERE birth_date > ? ORDER BY id");
        let pets = sqlx::query_as::<Sqlite, Pet>(&query)
            .bind(date)
            .fetch_all(&self.connection_pool)
            .await?;

        Ok(pets)
    }

    /// Case-insensitive substring search on the name.
    ///
    /// SQLite `lower()` only folds ASCII, so the match runs on Unicode
    /// lowercase in Rust over the ordered scan.
    pub async fn search_by_name(&self, fragment: &str) -> Result<Vec<Pet>, Error> {
        let needle = fragment.to_lowercase();
        let pets = self.read_all().await?;

        Ok(pets
            .into_iter()
            .filter(|pet| pet.name.to_lowercase().contains(&needle))
            .collect())
    }

    async fn fetch_where(&self, condition: &str, args: &[&str]) -> Result<Vec<Pet>, Error> {
        let query = format!("SELECT {PET_COLUMNS} FROM pets WHERE {condition} ORDER BY id");
        let mut select = sqlx::query_as::<Sqlite, Pet>(&query);
        for arg in args {
            select = select.bind(*arg);
        }
        let pets = select.fetch_all(&self.connection_pool).await?;

        Ok(pets)
    }
}

impl Create<Pet, CreatePetDTO> for PetRepository {
    async fn create(&self, data: &CreatePetDTO) -> Result<Pet, Error> {
        let result = sqlx::query(
            "INSERT INTO pets (name, pet_type, breed, birth_date, owner_name, owner_email)
             VALUES (?, ?, ?, ?, ?, ?)",
        )
        .bind(&data.name)
        .bind(&data.pet_type)
        .bind(&data.breed)
        .bind(data.birth_date)
        .bind(&data.owner_name)
        .bind(&data.owner_email)
        .execute(&self.connection_pool)
        .await?;

        Ok(Pet {
            id: result.last_insert_rowid(),
            name: data.name.clone(),
            pet_type: data.pet_type.clone(),
            breed: data.breed.clone(),
            birth_date: data.birth_date,
            owner_name: data.owner_name.clone(),
            owner_email: data.owner_email.clone(),
        })
    }
}

impl Read<Pet, i64> for PetRepository {
    async fn read(&self, id: &i64) -> Result<Option<Pet>, Error> {
        let query = format!("SELECT {PET_COLUMNS} FROM pets WHERE id = ?");
        let pet = sqlx::query_as::<Sqlite, Pet>(&query)
            .bind(id)
            .fetch_optional(&self.connection_pool)
            .await?;

        Ok(pet)
    }
}

impl ReadAll<Pet> for PetRepository {
    async fn read_all(&self) -> Result<Vec<Pet>, Error> {
        let query = format!("SELECT {PET_COLUMNS} FROM pets ORDER BY id");
        let pets = sqlx::query_as::<Sqlite, Pet>(&query)
            .fetch_all(&self.connection_pool)
            .await?;

        Ok(pets)
    }
}

impl Update<Pet, UpdatePetDTO, i64> for PetRepository {
    async fn update(&self, id: &i64, data: &UpdatePetDTO) -> Result<Pet, Error> {
        let result = sqlx::query(
            "UPDATE pets
             SET name = ?, pet_type = ?, breed = ?, birth_date = ?, owner_name = ?, owner_email = ?
             WHERE id = ?",
        )
        .bind(&data.name)
        .bind(&data.pet_type)
        .bind(&data.breed)
        .bind(data.birth_date)
        .bind(&data.owner_name)
        .bind(&data.owner_email)
        .bind(id)
        .execute(&self.connection_pool)
        .await?;

        if result.rows_affected() == 0 {
            return Err(Error::RowNotFound);
        }

        self.read(id).await?.ok_or(Error::RowNotFound)
    }
}

impl Delete<i64> for PetRepository {
    async fn delete(&self, id: &i64) -> Result<(), Error> {
        sqlx::query("DELETE FROM pets WHERE id = ?")
            .bind(id)
            .execute(&self.connection_pool)
            .await?;

        Ok(())
    }
}
