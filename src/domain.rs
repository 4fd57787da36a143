//! Display-ready domain models produced by the mappers.
//!
//! Names are word-capitalized, ids are parsed out of resource URLs and
//! thumbnail URLs are synthesized. Nothing here touches the network.

use url::Url;

/// One page of list results for a given offset/limit pair.
#[derive(Debug, Clone, PartialEq)]
pub struct PokemonPage {
    /// Total number of entries known to the server.
    pub count: u32,
    /// Opaque URL of the following page, if any.
    pub next: Option<String>,
    /// Opaque URL of the preceding page, if any.
    pub previous: Option<String>,
    pub items: Vec<PokemonSummary>,
}

/// A single list entry with its derived id and thumbnail URL.
#[derive(Debug, Clone, PartialEq)]
pub struct PokemonSummary {
    /// Parsed from the trailing path segment of `url`; 0 when unparsable.
    pub id: u32,
    pub name: String,
    /// Resource URL the id was derived from.
    pub url: String,
    /// Synthesized thumbnail URL, `<sprite-base>/<id>.png`.
    pub image_url: Option<Url>,
}

/// Full detail for one entry.
#[derive(Debug, Clone, PartialEq)]
pub struct PokemonDetail {
    pub id: u32,
    pub name: String,
    /// Server-provided sprite URL, taken verbatim.
    pub image_url: Option<Url>,
    pub types: Option<Vec<TypeSlot>>,
    pub stats: Option<Vec<StatEntry>>,
}

/// A type assignment with its 1-based slot position.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypeSlot {
    pub slot: u32,
    pub type_name: String,
    pub type_url: String,
}

/// A base stat value with the stat it belongs to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatEntry {
    pub base_value: i32,
    pub stat_name: String,
    pub stat_url: String,
}
