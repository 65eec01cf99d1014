//! The operations a sampling model needs from the backing store.

mod mongo;

use std::future::Future;

use mongodb::IndexModel;
use mongodb::bson::{Bson, Document};

use crate::error::Result;

/// Options for a find: sort, limit, skip and projection.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct FindSpec {
    pub sort: Option<Document>,
    pub limit: Option<i64>,
    pub skip: Option<u64>,
    pub projection: Option<Document>,
}

/// Outcome of a bulk update.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct UpdateSummary {
    pub matched: u64,
    pub modified: u64,
}

/// A single collection in a document store.
///
/// Implemented for `mongodb::Collection<Document>`.
pub trait Store: Send + Sync {
    /// Collection name, used in error messages and logs.
    fn collection_name(&self) -> String;

    fn find(
        &self,
        filter: Document,
        spec: FindSpec,
    ) -> impl Future<Output = Result<Vec<Document>>> + Send;

    fn aggregate(&self, pipeline: Vec<Document>)
    -> impl Future<Output = Result<Vec<Document>>> + Send;

    /// Apply an update pipeline to every matching record.
    fn update_many(
        &self,
        filter: Document,
        pipeline: Vec<Document>,
    ) -> impl Future<Output = Result<UpdateSummary>> + Send;

    /// Insert records and return their identifiers in input order.
    fn insert_many(&self, documents: Vec<Document>)
    -> impl Future<Output = Result<Vec<Bson>>> + Send;

    fn create_index(&self, index: IndexModel) -> impl Future<Output = Result<()>> + Send;
}
