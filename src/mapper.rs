//! Pure wire-to-domain transforms.
//!
//! Every function here is total: a malformed resource URL degrades the
//! derived id to 0 (and with it the thumbnail URL), it never errors.

use url::Url;

use crate::domain::{PokemonDetail, PokemonPage, PokemonSummary, StatEntry, TypeSlot};
use crate::models::{PokemonListResponse, PokemonResponse, StatEntryResponse, TypeSlotResponse};

/// Parses the trailing numeric path segment of a resource URL.
///
/// `https://pokeapi.co/api/v2/pokemon/25/` yields 25. Missing, empty or
/// non-numeric trailing segments yield 0.
pub fn extract_id(url: &str) -> u32 {
    url.split('/')
        .rev()
        .find(|segment| !segment.is_empty())
        .and_then(|segment| segment.parse().ok())
        .unwrap_or(0)
}

/// Synthesizes the list thumbnail URL, `<sprite-base>/<id>.png`.
pub fn sprite_url(sprite_base: &str, id: u32) -> Option<Url> {
    Url::parse(&format!("{}/{}.png", sprite_base.trim_end_matches('/'), id)).ok()
}

/// Capitalizes the first letter of each word, lowercasing the rest.
///
/// Words are separated by anything non-alphanumeric, so hyphenated wire
/// names come out like "Mr-Mime".
pub fn capitalize_words(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    let mut at_word_start = true;
    for ch in raw.chars() {
        if ch.is_alphanumeric() {
            if at_word_start {
                out.extend(ch.to_uppercase());
            } else {
                out.extend(ch.to_lowercase());
            }
            at_word_start = false;
        } else {
            out.push(ch);
            at_word_start = true;
        }
    }
    out
}

impl PokemonListResponse {
    /// Maps one wire page into its domain page, deriving ids and
    /// thumbnail URLs for every entry.
    pub fn into_domain(self, sprite_base: &str) -> PokemonPage {
        PokemonPage {
            count: self.count,
            next: self.next,
            previous: self.previous,
            items: self
                .results
                .into_iter()
                .map(|entry| {
                    let id = extract_id(&entry.url);
                    PokemonSummary {
                        id,
                        name: capitalize_words(&entry.name),
                        url: entry.url,
                        image_url: sprite_url(sprite_base, id),
                    }
                })
                .collect(),
        }
    }
}

impl PokemonResponse {
    /// Maps the detail body into its domain record. The sprite URL is
    /// taken verbatim from the wire; absent sections stay absent.
    pub fn into_domain(self) -> PokemonDetail {
        PokemonDetail {
            id: self.id,
            name: capitalize_words(&self.name),
            image_url: self
                .sprites
                .and_then(|sprites| sprites.front_default)
                .and_then(|raw| Url::parse(&raw).ok()),
            types: self
                .types
                .map(|types| types.into_iter().map(TypeSlotResponse::into_domain).collect()),
            stats: self
                .stats
                .map(|stats| stats.into_iter().map(StatEntryResponse::into_domain).collect()),
        }
    }
}

impl TypeSlotResponse {
    fn into_domain(self) -> TypeSlot {
        TypeSlot {
            slot: self.slot,
            type_name: capitalize_words(&self.type_info.name),
            type_url: self.type_info.url,
        }
    }
}

impl StatEntryResponse {
    fn into_domain(self) -> StatEntry {
        StatEntry {
            base_value: self.base_stat,
            stat_name: capitalize_words(&self.stat.name),
            stat_url: self.stat.url,
        }
    }
}
