//! In-memory doubles of the store traits for pipeline tests.

use async_trait::async_trait;
use chrono::{TimeZone, Utc};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

use staging_etl_repository::{
    IndexSpec, PaymentSource, RevenueBucket, RevenueDimension, RevenueKey, SourceError,
    StagingStore, StoreError,
};
use staging_etl_shared::{Amount, FilmInfo, PaymentDate, SourceRow, StagingDocument};

/// A Sakila-shaped row with the given identifiers.
pub(crate) fn payment_row(payment_id: i32, customer_id: i32, store_id: i32, amount: &str) -> SourceRow {
    SourceRow {
        payment_id,
        customer_id,
        staff_id: 1,
        rental_id: payment_id * 10,
        amount: Amount::from(amount),
        payment_date: PaymentDate::Text(format!("2005-05-{:02}T10:00:00", (payment_id % 28) + 1)),
        store_id,
        film_id: 100 + payment_id,
        title: format!("FILM {}", payment_id),
        rating: Some(if payment_id % 2 == 0 { "PG" } else { "R" }.to_string()),
    }
}

/// A document that no source row produces, standing in for stale contents.
pub(crate) fn unrelated_document(payment_id: i32) -> StagingDocument {
    StagingDocument {
        payment_id,
        customer_id: 999,
        staff_id: 9,
        rental_id: 0,
        store_id: 9,
        film: FilmInfo {
            film_id: 0,
            title: "STALE".to_string(),
            rating: None,
        },
        amount: 0.0,
        payment_date: Utc.with_ymd_and_hms(2001, 1, 1, 0, 0, 0).unwrap(),
        date_key: 20010101,
        loaded_at: Utc.with_ymd_and_hms(2001, 1, 1, 0, 0, 0).unwrap(),
    }
}

/// Payment source returning a fixed set of rows, or failing.
pub(crate) struct MockPaymentSource {
    rows: Vec<SourceRow>,
    fail: bool,
    pub calls: AtomicUsize,
    pub last_limit: Mutex<Option<u32>>,
}

impl MockPaymentSource {
    pub fn with_rows(rows: Vec<SourceRow>) -> Self {
        Self {
            rows,
            fail: false,
            calls: AtomicUsize::new(0),
            last_limit: Mutex::new(None),
        }
    }

    pub fn failing() -> Self {
        Self {
            fail: true,
            ..Self::with_rows(Vec::new())
        }
    }
}

#[async_trait]
impl PaymentSource for MockPaymentSource {
    async fn fetch_payments(&self, limit: u32) -> Result<Vec<SourceRow>, SourceError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        *self.last_limit.lock().unwrap() = Some(limit);

        if self.fail {
            return Err(SourceError::connection("connection refused"));
        }
        Ok(self.rows.clone())
    }
}

/// Which staging store operation should fail.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum FailOn {
    Nothing,
    Insert,
    Index,
    Aggregate,
}

/// Staging store keeping documents and indexes in memory.
pub(crate) struct InMemoryStagingStore {
    pub documents: Mutex<Vec<StagingDocument>>,
    pub indexes: Mutex<Vec<IndexSpec>>,
    pub insert_calls: AtomicUsize,
    pub shutdowns: AtomicUsize,
    fail_on: FailOn,
}

impl InMemoryStagingStore {
    pub fn new() -> Self {
        Self::failing_on(FailOn::Nothing)
    }

    pub fn failing_on(fail_on: FailOn) -> Self {
        Self {
            documents: Mutex::new(Vec::new()),
            indexes: Mutex::new(Vec::new()),
            insert_calls: AtomicUsize::new(0),
            shutdowns: AtomicUsize::new(0),
            fail_on,
        }
    }

    pub fn seeded(documents: Vec<StagingDocument>) -> Self {
        let store = Self::new();
        *store.documents.lock().unwrap() = documents;
        store
    }

    pub fn document_count(&self) -> usize {
        self.documents.lock().unwrap().len()
    }

    pub fn index_names(&self) -> Vec<String> {
        self.indexes
            .lock()
            .unwrap()
            .iter()
            .map(IndexSpec::default_name)
            .collect()
    }
}

#[async_trait]
impl StagingStore for InMemoryStagingStore {
    async fn clear(&self) -> Result<u64, StoreError> {
        let mut documents = self.documents.lock().unwrap();
        let deleted = documents.len() as u64;
        documents.clear();
        Ok(deleted)
    }

    async fn insert_documents(&self, documents: &[StagingDocument]) -> Result<usize, StoreError> {
        self.insert_calls.fetch_add(1, Ordering::SeqCst);
        if self.fail_on == FailOn::Insert {
            return Err(StoreError::insert("write concern error"));
        }
        if documents.is_empty() {
            return Err(StoreError::insert("empty bulk write"));
        }
        self.documents
            .lock()
            .unwrap()
            .extend(documents.iter().cloned());
        Ok(documents.len())
    }

    async fn create_index(&self, index: &IndexSpec) -> Result<String, StoreError> {
        if self.fail_on == FailOn::Index {
            return Err(StoreError::index_creation("index build aborted"));
        }
        let mut indexes = self.indexes.lock().unwrap();
        if !indexes.contains(index) {
            indexes.push(index.clone());
        }
        Ok(index.default_name())
    }

    async fn revenue_by(
        &self,
        dimension: RevenueDimension,
        limit: Option<u32>,
    ) -> Result<Vec<RevenueBucket>, StoreError> {
        if self.fail_on == FailOn::Aggregate {
            return Err(StoreError::query("aggregation failed"));
        }

        let documents = self.documents.lock().unwrap();
        let mut buckets: Vec<RevenueBucket> = Vec::new();
        for doc in documents.iter() {
            let key = match dimension {
                RevenueDimension::Store => RevenueKey::Id(i64::from(doc.store_id)),
                RevenueDimension::Customer => RevenueKey::Id(i64::from(doc.customer_id)),
                RevenueDimension::Rating => match &doc.film.rating {
                    Some(rating) => RevenueKey::Label(rating.clone()),
                    None => RevenueKey::Missing,
                },
            };
            match buckets.iter_mut().find(|b| b.key == key) {
                Some(bucket) => bucket.total += doc.amount,
                None => buckets.push(RevenueBucket {
                    key,
                    total: doc.amount,
                }),
            }
        }

        buckets.sort_by(|a, b| {
            b.total
                .total_cmp(&a.total)
                .then_with(|| a.key.cmp(&b.key))
        });
        if let Some(limit) = limit {
            buckets.truncate(limit as usize);
        }
        Ok(buckets)
    }

    async fn health_check(&self) -> Result<bool, StoreError> {
        Ok(true)
    }

    async fn shutdown(&self) {
        self.shutdowns.fetch_add(1, Ordering::SeqCst);
    }
}
