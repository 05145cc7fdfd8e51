//! Repositories module - Database access for every entity
//!
//! Each repository owns the queries of one table and shares the connection
//! pool handed over by `AppState`.

// ************************* NOTE ON SQLX ************************* //

/*
   Queries use the runtime-checked `sqlx::query` / `sqlx::query_as` builders, so the
   crate compiles without a live database. Rows are mapped through `sqlx::FromRow`.
   Pick the terminal method by the number of rows you expect:

   Number of Rows   Method to Call              Returns
   None             .execute(...).await         sqlx::Result<SqliteQueryResult>   INSERT/UPDATE/DELETE
   Zero or One      .fetch_optional(...).await  sqlx::Result<Option<T>>
   Exactly One      .fetch_one(...).await       sqlx::Result<T>                   RowNotFound otherwise
   Multiple         .fetch_all(...).await       sqlx::Result<Vec<T>>

   Always bind values with `?` placeholders, never format them into the SQL string.
*/

pub mod pet;
pub mod traits;

pub use traits::{Create, Delete, Read, ReadAll, Update};

pub use pet::PetRepository;
