//! Aggregation pipelines over the staging collection and result parsing.

use mongodb::bson::{doc, Bson, Document};

use crate::errors::StoreError;
use crate::types::{RevenueBucket, RevenueDimension, RevenueKey};

/// Build a pipeline summing `amount` per `dimension`, largest total first.
///
/// Ties are broken by group key so results are stable across runs.
pub(crate) fn revenue_pipeline(dimension: RevenueDimension, limit: Option<u32>) -> Vec<Document> {
    let mut pipeline = vec![
        doc! {
            "$group": {
                "_id": format!("${}", dimension.field_path()),
                "total": { "$sum": "$amount" }
            }
        },
        doc! { "$sort": { "total": -1, "_id": 1 } },
    ];

    if let Some(limit) = limit {
        pipeline.push(doc! { "$limit": i64::from(limit) });
    }

    pipeline
}

/// Parse one `{ _id, total }` result document.
pub(crate) fn parse_bucket(result: &Document) -> Result<RevenueBucket, StoreError> {
    let key = match result.get("_id") {
        None | Some(Bson::Null) => RevenueKey::Missing,
        Some(Bson::Int32(id)) => RevenueKey::Id(i64::from(*id)),
        Some(Bson::Int64(id)) => RevenueKey::Id(*id),
        Some(Bson::String(label)) => RevenueKey::Label(label.clone()),
        Some(other) => {
            return Err(StoreError::parse(format!("unexpected group key: {}", other)));
        }
    };

    let total = match result.get("total") {
        Some(Bson::Double(total)) => *total,
        Some(Bson::Int32(total)) => f64::from(*total),
        Some(Bson::Int64(total)) => *total as f64,
        other => {
            return Err(StoreError::parse(format!("unexpected total: {:?}", other)));
        }
    };

    Ok(RevenueBucket { key, total })
}
