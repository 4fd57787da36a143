//! Wire schemas, exactly as returned by the remote API.
//!
//! These are decoded once per call and discarded after mapping into the
//! domain models in [`crate::domain`].

use serde::Deserialize;

/// A `{name, url}` reference to another API resource.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct NamedResource {
    pub name: String,
    pub url: String,
}

/// One page of the paginated list endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct PokemonListResponse {
    pub count: u32,
    pub next: Option<String>,
    pub previous: Option<String>,
    pub results: Vec<NamedResource>,
}

/// Detail endpoint body. `sprites`, `types` and `stats` are optional on
/// the wire and stay optional through mapping.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct PokemonResponse {
    pub id: u32,
    pub name: String,
    pub sprites: Option<SpritesResponse>,
    pub types: Option<Vec<TypeSlotResponse>>,
    pub stats: Option<Vec<StatEntryResponse>>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct SpritesResponse {
    pub front_default: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct TypeSlotResponse {
    pub slot: u32,
    #[serde(rename = "type")]
    pub type_info: NamedResource,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct StatEntryResponse {
    pub base_stat: i32,
    pub stat: NamedResource,
}
