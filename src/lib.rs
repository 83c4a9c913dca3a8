//! Client for the Forebears name-to-nationality lookup API
//!
//! Given a full personal name, this crate queries the lookup service at
//! `ono.4b.rs` and returns the most likely country of origin as a
//! jurisdiction code.
//!
//! ```no_run
//! use forebears::Client;
//!
//! # async fn run() -> Result<(), forebears::LookupError> {
//! let client = Client::new("my-api-key");
//! let jurisdiction = client.resolve_country("Maria Del Carmen Lopez").await?;
//! println!("top match: {jurisdiction}");
//! # Ok(())
//! # }
//! ```
//!
//! Callers that need to distinguish failure modes match on [`LookupError`]:
//! a name without a separable surname, a non-200 response, a well-formed
//! "no match" result, and passthrough transport/decode errors are all
//! separate variants.

pub mod core;
pub mod models;

pub use crate::core::client::{Client, LookupError};
pub use crate::core::config::ClientBuilder;
pub use crate::models::lookup::{CountryMatch, LookupResult, SphereMatch};
