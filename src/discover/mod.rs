// src/discover/mod.rs
// =============================================================================
// This module walks the two levels of the remote listing.
//
// Submodules:
// - years: the top level, numeric folder names only
// - months: one level down, fetched concurrently with a bound
// =============================================================================

mod months;
mod years;

pub use months::discover_months;
pub use years::discover_years;
