//! Client library for the PokeAPI creature catalog.
//!
//! Layered as: request descriptor → generic fetch+decode ([`Fetcher`]) →
//! feature service → wire-to-domain mapper → observable view store. The
//! stores publish a tri-state [`ViewState`] through watch channels and
//! cancel superseded in-flight fetches, so the presentation layer only
//! ever observes the latest load's outcome.

pub mod config;
pub mod domain;
pub mod error;
pub mod fetcher;
pub mod mapper;
pub mod models;
pub mod request;
pub mod service;
pub mod state;

use std::sync::Arc;

pub use crate::config::Config;
pub use crate::domain::{PokemonDetail, PokemonPage, PokemonSummary, StatEntry, TypeSlot};
pub use crate::error::FetchError;
pub use crate::fetcher::Fetcher;
pub use crate::service::{
    ApiDetailService, ApiListService, PokemonDetailService, PokemonListService,
};
pub use crate::state::{DetailStore, ListStore, ViewState};

/// Explicit dependency wiring: owns the configuration and the shared
/// fetcher, vends services and stores. Constructed once near the entry
/// point and passed down; there is no global registry.
pub struct Dependencies {
    config: Config,
    fetcher: Arc<Fetcher>,
}

impl Dependencies {
    pub fn new(config: Config) -> Result<Self, FetchError> {
        let fetcher = Arc::new(Fetcher::new(&config)?);
        Ok(Self { config, fetcher })
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn list_service(&self) -> Arc<dyn PokemonListService> {
        Arc::new(ApiListService::new(
            Arc::clone(&self.fetcher),
            self.config.sprite_base_url.clone(),
        ))
    }

    pub fn detail_service(&self) -> Arc<dyn PokemonDetailService> {
        Arc::new(ApiDetailService::new(Arc::clone(&self.fetcher)))
    }

    pub fn list_store(&self) -> Arc<ListStore> {
        ListStore::new(self.list_service(), self.config.page_size)
    }

    pub fn detail_store(&self, pokemon_id: u32) -> Arc<DetailStore> {
        DetailStore::new(self.detail_service(), pokemon_id)
    }
}
