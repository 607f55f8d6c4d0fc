//! Pokemon records: domain types, the store abstraction with its Postgres and
//! in-memory implementations, and the service that ties them together.

pub mod domain;
pub mod repository;
pub mod repo;
pub mod service;

pub use domain::{CreatePokemonInput, DeletedPokemon, Pokemon, UpdatePokemonInput};
pub use repository::{PokemonRepository, StoreError};
pub use service::PokemonService;
