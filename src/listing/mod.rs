// src/listing/mod.rs
// =============================================================================
// This module reads remote directory listings.
//
// Submodules:
// - fetch: GET a listing URL with a timeout
// - parse: pull directory names out of the listing HTML
// - error: the typed failure returned by fetch
// =============================================================================

mod error;
mod fetch;
mod parse;

pub use fetch::{build_client, list_directories};
