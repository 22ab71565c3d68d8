use thiserror::Error;

use crate::core::types::PokemonId;
use crate::fetch::FetchError;

#[derive(Error, Debug)]
pub enum PokedexError {
    #[error("No pokemon matches the given query (#{0})")]
    NotFound(PokemonId),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Fetch error: {0}")]
    Fetch(#[from] FetchError),

    #[error("Storage error: {0}")]
    Storage(#[from] rusqlite::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerdeError(#[from] serde_json::Error),

    #[error("TOML error: {0}")]
    TomlError(#[from] toml::de::Error),
}

pub type Result<T> = std::result::Result<T, PokedexError>;
