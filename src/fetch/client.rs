//! Async HTTP client for the public creature API
//!
//! Two documents make up one record: `pokemon/{id}/` (required) and
//! `pokemon-species/{id}/` (optional, only feeds the description).

use std::time::Duration;

use reqwest::{Client, StatusCode};
use serde::de::DeserializeOwned;
use tokio::runtime::Runtime;

use crate::catalog::record::Pokemon;
use crate::core::config::PokedexConfig;
use crate::core::error::Result;
use crate::core::types::PokemonId;
use crate::fetch::normalize::{normalize, ApiPokemon, ApiSpecies};
use crate::fetch::{CatalogFetcher, FetchError};

/// Async client for the remote API
pub struct PokeApiClient {
    client: Client,
    base_url: String,
}

impl PokeApiClient {
    /// Create a client with explicit configuration
    pub fn new(base_url: String, user_agent: &str, timeout: Duration) -> Result<Self> {
        let client = Client::builder()
            .user_agent(user_agent)
            .timeout(timeout)
            .build()
            .map_err(|e| FetchError::Http(e.to_string()))?;
        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn from_config(config: &PokedexConfig) -> Result<Self> {
        Self::new(
            config.api_base_url.clone(),
            &config.user_agent,
            Duration::from_secs(config.request_timeout_secs),
        )
    }

    pub fn pokemon_url(&self, id: PokemonId) -> String {
        format!("{}/pokemon/{}/", self.base_url, id)
    }

    pub fn species_url(&self, id: PokemonId) -> String {
        format!("{}/pokemon-species/{}/", self.base_url, id)
    }

    async fn get_json<T: DeserializeOwned>(&self, url: &str) -> std::result::Result<T, FetchError> {
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| FetchError::Http(e.to_string()))?;

        if response.status() != StatusCode::OK {
            return Err(FetchError::Status(response.status().as_u16()));
        }

        response
            .json::<T>()
            .await
            .map_err(|e| FetchError::Parse(e.to_string()))
    }

    /// Fetch and normalize one record
    pub async fn fetch_pokemon(&self, id: PokemonId) -> std::result::Result<Pokemon, FetchError> {
        let pokemon: ApiPokemon = self.get_json(&self.pokemon_url(id)).await?;

        let species = match self.get_json::<ApiSpecies>(&self.species_url(id)).await {
            Ok(species) => Some(species),
            Err(e) => {
                tracing::debug!("Species lookup for #{} failed: {}", id, e);
                None
            }
        };

        Ok(normalize(id, &pokemon, species.as_ref()))
    }
}

/// Blocking adapter so synchronous request handling can use the async client
pub struct PokeApiFetcher {
    client: PokeApiClient,
    runtime: Runtime,
}

impl PokeApiFetcher {
    pub fn new(client: PokeApiClient) -> Result<Self> {
        let runtime = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()?;
        Ok(Self { client, runtime })
    }

    pub fn from_config(config: &PokedexConfig) -> Result<Self> {
        Self::new(PokeApiClient::from_config(config)?)
    }
}

impl CatalogFetcher for PokeApiFetcher {
    fn fetch(&self, id: PokemonId) -> std::result::Result<Pokemon, FetchError> {
        tracing::debug!("Fetching #{} from {}", id, self.client.pokemon_url(id));
        let result = self.runtime.block_on(self.client.fetch_pokemon(id));
        if let Err(ref e) = result {
            tracing::warn!("Fetch of #{} failed: {}", id, e);
        }
        result
    }
}
