//! Pet entity - Persisted pet record with derived age

use chrono::{Datelike, Local, NaiveDate};

#[derive(Debug, Clone, PartialEq, sqlx::FromRow)]
pub struct Pet {
    pub id: i64,
    pub name: String,
    pub pet_type: String,
    pub breed: Option<String>,
    pub birth_date: NaiveDate,
    pub owner_name: Option<String>,
    pub owner_email: Option<String>,
}

impl Pet {
    /// Age in years as of today
    pub fn age(&self) -> i32 {
        age_on(Some(self.birth_date), Local::now().date_naive())
    }
}

/// Calendar-year difference between `today` and the birth date.
///
/// Month and day are ignored, so a pet whose birthday has not yet come this
/// year is reported one year older. Returns 0 without a birth date.
pub fn age_on(birth_date: Option<NaiveDate>, today: NaiveDate) -> i32 {
    match birth_date {
        Some(birth_date) => today.year() - birth_date.year(),
        None => 0,
    }
}
