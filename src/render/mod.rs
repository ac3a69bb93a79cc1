// src/render/mod.rs
// =============================================================================
// This module produces the static index page.
// =============================================================================

mod page;

pub use page::{render_page, sorted_unique, write_page};
