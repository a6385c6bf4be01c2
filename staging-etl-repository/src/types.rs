//! Request and response types for staging store operations.

use std::fmt;

/// Sort direction of an index key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortOrder {
    Ascending,
    Descending,
}

impl SortOrder {
    /// Numeric direction as used in index key documents.
    pub fn as_i32(self) -> i32 {
        match self {
            SortOrder::Ascending => 1,
            SortOrder::Descending => -1,
        }
    }
}

/// A secondary index over one or more document fields.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IndexSpec {
    /// Indexed fields in key order.
    pub keys: Vec<(String, SortOrder)>,
}

impl IndexSpec {
    /// Single-field ascending index.
    pub fn ascending(field: impl Into<String>) -> Self {
        Self {
            keys: vec![(field.into(), SortOrder::Ascending)],
        }
    }

    /// Compound ascending index over the given fields, in order.
    pub fn compound_ascending<I, S>(fields: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            keys: fields
                .into_iter()
                .map(|f| (f.into(), SortOrder::Ascending))
                .collect(),
        }
    }

    /// Index name in the document store's default naming scheme
    /// (`field_1_other_-1`).
    pub fn default_name(&self) -> String {
        self.keys
            .iter()
            .map(|(field, order)| format!("{}_{}", field, order.as_i32()))
            .collect::<Vec<_>>()
            .join("_")
    }
}

/// Field a revenue aggregation groups by.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RevenueDimension {
    Store,
    Rating,
    Customer,
}

impl RevenueDimension {
    /// Document path of the grouping field.
    pub fn field_path(self) -> &'static str {
        match self {
            RevenueDimension::Store => "store_id",
            RevenueDimension::Rating => "film.rating",
            RevenueDimension::Customer => "customer_id",
        }
    }
}

/// Group key of a revenue bucket.
///
/// Variants are declared in BSON comparison order (null, numbers, strings), so
/// `Ord` matches an ascending `_id` sort on the server.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub enum RevenueKey {
    /// Documents where the grouping field is null or absent.
    Missing,
    Id(i64),
    Label(String),
}

impl fmt::Display for RevenueKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RevenueKey::Id(id) => write!(f, "{}", id),
            RevenueKey::Label(label) => write!(f, "{}", label),
            RevenueKey::Missing => write!(f, "<none>"),
        }
    }
}

/// Total revenue for one group key.
#[derive(Debug, Clone, PartialEq)]
pub struct RevenueBucket {
    pub key: RevenueKey,
    pub total: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_index_default_names() {
        assert_eq!(IndexSpec::ascending("customer_id").default_name(), "customer_id_1");
        assert_eq!(
            IndexSpec::compound_ascending(["store_id", "date_key"]).default_name(),
            "store_id_1_date_key_1"
        );
    }

    #[test]
    fn test_descending_direction() {
        let spec = IndexSpec {
            keys: vec![("amount".to_string(), SortOrder::Descending)],
        };
        assert_eq!(spec.default_name(), "amount_-1");
    }

    #[test]
    fn test_revenue_key_display() {
        assert_eq!(RevenueKey::Id(2).to_string(), "2");
        assert_eq!(RevenueKey::Label("PG-13".to_string()).to_string(), "PG-13");
        assert_eq!(RevenueKey::Missing.to_string(), "<none>");
    }

    #[test]
    fn test_revenue_key_order_follows_bson() {
        let mut keys = vec![
            RevenueKey::Label("R".to_string()),
            RevenueKey::Id(2),
            RevenueKey::Missing,
            RevenueKey::Label("G".to_string()),
            RevenueKey::Id(1),
        ];
        keys.sort();

        assert_eq!(
            keys,
            vec![
                RevenueKey::Missing,
                RevenueKey::Id(1),
                RevenueKey::Id(2),
                RevenueKey::Label("G".to_string()),
                RevenueKey::Label("R".to_string()),
            ]
        );
    }
}
