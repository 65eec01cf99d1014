//! Find handle with seed-based sampling.

use mongodb::bson::{Document, doc};

use crate::error::Result;
use crate::model::Model;
use crate::plugin::{DEFAULT_SAMPLE_LIMIT, SEED_FIELD};
use crate::store::{FindSpec, Store};

/// A pending find against a model's collection.
pub struct Query<'a, S> {
    model: &'a Model<S>,
    filter: Document,
    spec: FindSpec,
}

impl<'a, S: Store> Query<'a, S> {
    pub(crate) fn new(model: &'a Model<S>, filter: Document) -> Self {
        Self { model, filter, spec: FindSpec::default() }
    }

    pub fn filter(&self) -> &Document {
        &self.filter
    }

    pub fn spec(&self) -> &FindSpec {
        &self.spec
    }

    /// Merge sort keys into the current sort. Keys already present keep their
    /// position; their direction is replaced.
    pub fn sort(mut self, sort: Document) -> Self {
        let current = self.spec.sort.get_or_insert_with(Document::new);
        for (key, direction) in sort {
            current.insert(key, direction);
        }
        self
    }

    pub fn limit(mut self, limit: i64) -> Self {
        self.spec.limit = Some(limit);
        self
    }

    pub fn skip(mut self, skip: u64) -> Self {
        self.spec.skip = Some(skip);
        self
    }

    pub fn projection(mut self, projection: Document) -> Self {
        self.spec.projection = Some(projection);
        self
    }

    pub async fn exec(self) -> Result<Vec<Document>> {
        self.model.store().find(self.filter, self.spec).await
    }

    /// Sort by seed, cap at `limit` (50 when `None`), execute, then give the
    /// returned records new seeds before handing them back.
    ///
    /// `limit` is passed to the store unchecked.
    pub async fn quick_sample(self, limit: impl Into<Option<i64>>) -> Result<Vec<Document>> {
        let model = self.model;
        model.require_seed()?;

        let limit = limit.into().unwrap_or(DEFAULT_SAMPLE_LIMIT);
        let records = self.sort(doc! { SEED_FIELD: 1 }).limit(limit).exec().await?;

        log::debug!("Sampled {} record(s) from '{}' (limit={limit})", records.len(), model.name());
        model.refresh_seeds(&records).await?;
        Ok(records)
    }
}
