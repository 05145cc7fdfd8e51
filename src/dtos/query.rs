//! Query DTOs - Query string parameters of the search endpoints

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// `/api/pets/born-after?date=YYYY-MM-DD`
#[derive(Serialize, Deserialize, Debug)]
pub struct BornAfterQuery {
    pub date: Option<NaiveDate>,
}

/// `/api/pets/search?type=...&breed=...`
#[derive(Serialize, Deserialize, Debug)]
pub struct TypeBreedQuery {
    #[serde(rename = "type")]
    pub pet_type: Option<String>,
    pub breed: Option<String>,
}

/// `/api/pets/search/name?name=...`
#[derive(Serialize, Deserialize, Debug)]
pub struct NameSearchQuery {
    pub name: Option<String>,
}
