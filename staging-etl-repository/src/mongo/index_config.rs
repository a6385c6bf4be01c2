//! Index definitions for the staging collection.

use mongodb::bson::{doc, Document};
use mongodb::IndexModel;

use crate::types::IndexSpec;

/// The secondary indexes the staging collection carries, in creation order:
///
/// - `customer_id` ascending, for per-customer lookups
/// - `(store_id, date_key)` ascending, for store/day rollups
pub fn staging_indexes() -> Vec<IndexSpec> {
    vec![
        IndexSpec::ascending("customer_id"),
        IndexSpec::compound_ascending(["store_id", "date_key"]),
    ]
}

/// Build the key document for an index, preserving key order.
pub(crate) fn index_keys(spec: &IndexSpec) -> Document {
    let mut keys = Document::new();
    for (field, order) in &spec.keys {
        keys.insert(field.clone(), order.as_i32());
    }
    keys
}

/// Build the driver index model for an index.
pub(crate) fn index_model(spec: &IndexSpec) -> IndexModel {
    IndexModel::builder().keys(index_keys(spec)).build()
}
