//! Request descriptors.
//!
//! An [`ApiRequest`] is a pure value describing one HTTP call: relative
//! path, method, optional query parameters and headers. The descriptor
//! never validates parameter ranges; nonsensical offsets or ids are
//! passed through and left for the server to reject.

use reqwest::header::HeaderMap;
use reqwest::Method;

/// One HTTP call against the configured base endpoint.
pub trait ApiRequest {
    /// Path relative to the base endpoint, with a leading slash.
    fn path(&self) -> String;

    fn method(&self) -> Method {
        Method::GET
    }

    /// Query parameters, if any.
    fn query(&self) -> Option<Vec<(String, String)>> {
        None
    }

    /// Extra headers, if any.
    fn headers(&self) -> Option<HeaderMap> {
        None
    }
}

/// Descriptor for one page of the creature list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PokemonListRequest {
    pub offset: u32,
    pub limit: u32,
}

impl PokemonListRequest {
    pub fn new(offset: u32, limit: u32) -> Self {
        Self { offset, limit }
    }
}

impl ApiRequest for PokemonListRequest {
    fn path(&self) -> String {
        "/pokemon".into()
    }

    fn query(&self) -> Option<Vec<(String, String)>> {
        Some(vec![
            ("offset".into(), self.offset.to_string()),
            ("limit".into(), self.limit.to_string()),
        ])
    }
}

/// Descriptor for the detail of a single entry, addressed by numeric id.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PokemonDetailRequest {
    pub id: u32,
}

impl PokemonDetailRequest {
    pub fn new(id: u32) -> Self {
        Self { id }
    }
}

impl ApiRequest for PokemonDetailRequest {
    fn path(&self) -> String {
        format!("/pokemon/{}", self.id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn list_request_shape() {
        let request = PokemonListRequest::new(40, 20);
        assert_eq!(request.path(), "/pokemon");
        assert_eq!(request.method(), Method::GET);
        assert_eq!(
            request.query(),
            Some(vec![
                ("offset".to_string(), "40".to_string()),
                ("limit".to_string(), "20".to_string()),
            ])
        );
        assert!(request.headers().is_none());
    }

    #[test]
    fn detail_request_shape() {
        let request = PokemonDetailRequest::new(25);
        assert_eq!(request.path(), "/pokemon/25");
        assert_eq!(request.method(), Method::GET);
        assert!(request.query().is_none());
    }
}
