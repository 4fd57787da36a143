//! Feature services: one fixed descriptor shape and one expected wire
//! schema each, composed with one mapper call. No caching, no retries,
//! no deduplication; every call is an independent round trip.

use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::{PokemonDetail, PokemonPage};
use crate::error::FetchError;
use crate::fetcher::Fetcher;
use crate::models::{PokemonListResponse, PokemonResponse};
use crate::request::{PokemonDetailRequest, PokemonListRequest};

/// Fetches pages of the creature list.
#[async_trait]
pub trait PokemonListService: Send + Sync {
    async fn fetch_page(&self, offset: u32, limit: u32) -> Result<PokemonPage, FetchError>;
}

/// Fetches the detail record for a single entry.
#[async_trait]
pub trait PokemonDetailService: Send + Sync {
    async fn fetch_detail(&self, id: u32) -> Result<PokemonDetail, FetchError>;
}

/// List service backed by the live API.
pub struct ApiListService {
    fetcher: Arc<Fetcher>,
    sprite_base_url: String,
}

impl ApiListService {
    pub fn new(fetcher: Arc<Fetcher>, sprite_base_url: impl Into<String>) -> Self {
        Self {
            fetcher,
            sprite_base_url: sprite_base_url.into(),
        }
    }
}

#[async_trait]
impl PokemonListService for ApiListService {
    async fn fetch_page(&self, offset: u32, limit: u32) -> Result<PokemonPage, FetchError> {
        let request = PokemonListRequest::new(offset, limit);
        let response: PokemonListResponse = self.fetcher.perform(&request).await?;
        Ok(response.into_domain(&self.sprite_base_url))
    }
}

/// Detail service backed by the live API.
pub struct ApiDetailService {
    fetcher: Arc<Fetcher>,
}

impl ApiDetailService {
    pub fn new(fetcher: Arc<Fetcher>) -> Self {
        Self { fetcher }
    }
}

#[async_trait]
impl PokemonDetailService for ApiDetailService {
    async fn fetch_detail(&self, id: u32) -> Result<PokemonDetail, FetchError> {
        let request = PokemonDetailRequest::new(id);
        let response: PokemonResponse = self.fetcher.perform(&request).await?;
        Ok(response.into_domain())
    }
}
