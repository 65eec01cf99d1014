//! Aggregation pipeline handle with seed-based sampling.

use mongodb::bson::{Document, doc};

use crate::error::Result;
use crate::model::Model;
use crate::plugin::{DEFAULT_SAMPLE_LIMIT, SEED_FIELD};
use crate::store::Store;

/// A pending aggregation against a model's collection.
pub struct Aggregate<'a, S> {
    model: &'a Model<S>,
    pipeline: Vec<Document>,
}

impl<'a, S: Store> Aggregate<'a, S> {
    pub(crate) fn new(model: &'a Model<S>, pipeline: Vec<Document>) -> Self {
        Self { model, pipeline }
    }

    pub fn pipeline(&self) -> &[Document] {
        &self.pipeline
    }

    /// Append a raw stage.
    pub fn append(mut self, stage: Document) -> Self {
        self.pipeline.push(stage);
        self
    }

    pub fn sort(self, sort: Document) -> Self {
        self.append(doc! { "$sort": sort })
    }

    pub fn limit(self, limit: i64) -> Self {
        self.append(doc! { "$limit": limit })
    }

    pub async fn exec(self) -> Result<Vec<Document>> {
        self.model.store().aggregate(self.pipeline).await
    }

    /// Append `$sort` on the seed and `$limit` (50 when `None`), execute, then
    /// reassign seeds for every returned record that has an `_id`.
    pub async fn quick_sample(self, limit: impl Into<Option<i64>>) -> Result<Vec<Document>> {
        let model = self.model;
        model.require_seed()?;

        let limit = limit.into().unwrap_or(DEFAULT_SAMPLE_LIMIT);
        let records = self.sort(doc! { SEED_FIELD: 1 }).limit(limit).exec().await?;

        log::debug!(
            "Sampled {} record(s) from '{}' via pipeline (limit={limit})",
            records.len(),
            model.name()
        );
        model.refresh_seeds(&records).await?;
        Ok(records)
    }
}
