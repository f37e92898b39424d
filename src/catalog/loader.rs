use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::catalog::{mock, Brand};

/// Errors that can occur when loading a brand catalog.
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("failed to read catalog file '{path}': {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse catalog file '{path}': {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("catalog validation failed: {message}")]
    Validation { message: String },
}

/// Loads a catalog from a JSON file, or the built-in demo catalog when no
/// path is given.
///
/// The loaded list is validated against the candidate-source contract:
/// every id must be non-empty and unique within the catalog.
pub fn load_catalog(path: Option<&Path>) -> Result<Vec<Brand>, CatalogError> {
    let Some(path) = path else {
        return Ok(mock::demo_brands());
    };

    let content = fs::read_to_string(path).map_err(|e| CatalogError::Read {
        path: path.to_path_buf(),
        source: e,
    })?;

    let brands: Vec<Brand> = serde_json::from_str(&content).map_err(|e| CatalogError::Parse {
        path: path.to_path_buf(),
        source: e,
    })?;

    validate(&brands)?;
    tracing::info!(count = brands.len(), path = %path.display(), "catalog loaded");
    Ok(brands)
}

fn validate(brands: &[Brand]) -> Result<(), CatalogError> {
    let mut seen = HashSet::new();
    for brand in brands {
        if brand.id.trim().is_empty() {
            return Err(CatalogError::Validation {
                message: format!("brand '{}' has an empty id", brand.name),
            });
        }
        if !seen.insert(brand.id.as_str()) {
            return Err(CatalogError::Validation {
                message: format!("duplicate brand id '{}'", brand.id),
            });
        }
    }
    Ok(())
}
