//! API data models
//!
//! This module contains data structures for the lookup service responses.

pub mod lookup;
