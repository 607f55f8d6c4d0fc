//! Service layer for pokemon records.
//! - Separates business rules (normalization, validation, error
//!   classification) from data access.
//! - Reuses validation and entity definitions in the `models` crate.
//! - Storage is injected as a `PokemonRepository`; Postgres and in-memory
//!   implementations live under `pokemon::repo`.

pub mod errors;
pub mod pokemon;
#[cfg(test)]
pub mod test_support;
