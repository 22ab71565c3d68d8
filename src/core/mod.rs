pub mod config;
pub mod constants;
pub mod error;
pub mod types;

pub use config::PokedexConfig;
pub use error::{PokedexError, Result};
pub use types::{PokemonId, SessionId};
