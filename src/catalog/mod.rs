//! Candidate source: brand profiles and the in-memory catalog they live in.

mod brand;
mod filter;
mod loader;
pub mod mock;

pub use brand::Brand;
pub use filter::CatalogFilter;
pub use loader::{load_catalog, CatalogError};
