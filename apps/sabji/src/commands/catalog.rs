//! # Catalog Commands
//!
//! Search and detail lookups over the built-in catalog.

use sabji_core::types::{Category, Mode, QuantityUnit};
use sabji_core::{Catalog, CatalogEntry};
use serde::Serialize;
use tracing::debug;

use crate::error::ApiError;

/// One catalog item plus what the pricing screen needs to open it.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CatalogItemDetail {
    pub item: CatalogEntry,
    pub default_mode: Mode,
    /// Canonical quantities for the default mode.
    pub units: &'static [QuantityUnit],
}

/// Searches by English, Hindi or Marathi name.
///
/// ## Returns
/// Matching items in catalog order (vegetables, fruits, dairy, kirana)
pub fn search_catalog(
    catalog: &Catalog,
    query: &str,
    category: Option<Category>,
) -> Vec<CatalogEntry> {
    let hits: Vec<CatalogEntry> = catalog.search(query, category).into_iter().cloned().collect();
    debug!(query = %query, category = ?category, count = hits.len(), "search_catalog command");
    hits
}

/// Gets one item by id.
pub fn get_catalog_item(catalog: &Catalog, id: &str) -> Result<CatalogItemDetail, ApiError> {
    debug!(id = %id, "get_catalog_item command");

    let item = catalog.require(id)?;
    let default_mode = item.default_mode();
    Ok(CatalogItemDetail {
        item: item.clone(),
        default_mode,
        units: default_mode.units(),
    })
}
