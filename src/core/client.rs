//! Nationality lookup client
//!
//! This module provides the HTTP client for the Forebears name-to-nationality
//! lookup endpoint. A full name is split into a first-name part and a
//! surname, sent as query parameters on a single GET request, and the top
//! inferred jurisdiction is extracted from the JSON response.

use crate::core::config::ClientBuilder;
use crate::models::lookup::LookupResult;
use tracing::{debug, warn};

/// Error types that can occur during a nationality lookup
#[derive(Debug, thiserror::Error)]
pub enum LookupError {
    /// The supplied name has no separable surname; detected before any I/O
    #[error("name must contain at least a first name and a surname")]
    NeedTwoNameParts,

    /// The service answered with a status other than 200; the body is
    /// discarded, only the code is kept
    #[error("lookup service returned unexpected status code {0}")]
    UnexpectedStatus(u16),

    /// Well-formed response with no country entries; a legitimate
    /// "don't know" outcome rather than a fault
    #[error("no matches for supplied name")]
    NoMatch,

    /// Network-level failure (connect, DNS, TLS, timeout, body read)
    #[error(transparent)]
    Transport(#[from] reqwest::Error),

    /// Response body was not valid JSON of the expected shape
    #[error(transparent)]
    Decode(#[from] serde_json::Error),
}

impl LookupError {
    /// True if this is a transport error caused by the request deadline
    pub fn is_timeout(&self) -> bool {
        matches!(self, LookupError::Transport(e) if e.is_timeout())
    }
}

/// Client for the nationality lookup service
///
/// Holds the API key and a reusable HTTP transport. Lookups take `&self`,
/// so one client can serve concurrent calls; key rotation takes `&mut self`
/// and therefore cannot race an in-flight lookup. Callers that need to
/// rotate the key while sharing the client across threads must add their
/// own synchronization (e.g. an `RwLock` around the client).
pub struct Client {
    api_key: String,
    base_url: String,
    http: reqwest::Client,
}

impl Client {
    /// Create a client with the default endpoint and timeout
    ///
    /// # Arguments
    ///
    /// * `api_key` - Lookup service API key
    pub fn new(api_key: impl Into<String>) -> Self {
        ClientBuilder::new(api_key).build()
    }

    /// Create a builder to customize the endpoint or request timeout
    pub fn builder(api_key: impl Into<String>) -> ClientBuilder {
        ClientBuilder::new(api_key)
    }

    pub(crate) fn from_parts(api_key: String, base_url: String, http: reqwest::Client) -> Self {
        Self {
            api_key,
            base_url,
            http,
        }
    }

    /// Replace the stored API key; the next request uses the new key
    pub fn set_api_key(&mut self, api_key: impl Into<String>) {
        self.api_key = api_key.into();
    }

    /// Resolve a full name to the most likely country of origin
    ///
    /// The name is split on single spaces: every token but the last forms the
    /// first-name part, the last token is the surname. Exactly one request is
    /// issued per call; there are no retries and no caching.
    ///
    /// # Arguments
    ///
    /// * `full_name` - Name with at least a first name and a surname,
    ///   separated by spaces
    ///
    /// # Errors
    ///
    /// Returns [`LookupError::NeedTwoNameParts`] without touching the network
    /// if the name has fewer than two tokens, [`LookupError::UnexpectedStatus`]
    /// on any non-200 response, [`LookupError::NoMatch`] when the service has
    /// no country data for the name, and passthrough transport/decode errors
    /// otherwise.
    pub async fn resolve_country(&self, full_name: &str) -> Result<String, LookupError> {
        let (first_names, surname) =
            split_name(full_name).ok_or(LookupError::NeedTwoNameParts)?;
        debug!(%first_names, %surname, "resolving country for name");

        let url = format!("{}/v1/nat", self.base_url);
        let (status, body) = self
            .get_bytes(
                &url,
                &[
                    ("key", self.api_key.as_str()),
                    ("fn", &first_names),
                    ("sn", surname),
                ],
                None,
            )
            .await?;

        if status.as_u16() != 200 {
            warn!(status = status.as_u16(), "lookup service returned unexpected status");
            return Err(LookupError::UnexpectedStatus(status.as_u16()));
        }

        let result: LookupResult = serde_json::from_slice(&body)?;
        let Some(top) = result.countries.first() else {
            debug!(%full_name, "no country match for name");
            return Err(LookupError::NoMatch);
        };
        debug!(
            jurisdiction = %top.jurisdiction,
            percent = %top.percent,
            "top country match"
        );
        Ok(top.jurisdiction.clone())
    }

    /// Issue a GET request and read the full response body
    ///
    /// Basic-auth credentials are accepted for endpoints that need them; the
    /// nationality lookup passes none.
    async fn get_bytes(
        &self,
        url: &str,
        query: &[(&str, &str)],
        basic_auth: Option<(&str, &str)>,
    ) -> Result<(reqwest::StatusCode, Vec<u8>), reqwest::Error> {
        let mut req = self.http.get(url).query(query);
        if let Some((user, password)) = basic_auth {
            req = req.basic_auth(user, Some(password));
        }

        let response = req.send().await?;
        let status = response.status();
        let body = response.bytes().await?;
        Ok((status, body.to_vec()))
    }
}

/// Split a full name into the first-name part and the surname
///
/// Splitting is on single spaces exactly; every token but the last is
/// rejoined into the first-name part. Returns None when fewer than two
/// tokens exist.
fn split_name(full_name: &str) -> Option<(String, &str)> {
    let parts: Vec<&str> = full_name.split(' ').collect();
    let (surname, first_names) = parts.split_last()?;
    if first_names.is_empty() {
        return None;
    }
    Some((first_names.join(" "), surname))
}
