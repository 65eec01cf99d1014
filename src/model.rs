//! A schema bound to a store.

use mongodb::bson::{Bson, Document};

use crate::aggregate::Aggregate;
use crate::error::{Error, Result};
use crate::plugin::{QuickSample, QuickSampleConfig, SEED_FIELD};
use crate::query::Query;
use crate::reassign;
use crate::schema::Schema;
use crate::store::{Store, UpdateSummary};

/// Typed entry point to one collection.
pub struct Model<S> {
    schema: Schema,
    store: S,
    sampling: QuickSampleConfig,
}

impl<S: Store> Model<S> {
    pub fn new(schema: Schema, store: S) -> Self {
        let sampling = QuickSample::config_for(&schema).unwrap_or_default();
        Self { schema, store, sampling }
    }

    pub fn name(&self) -> &str {
        self.schema.name()
    }

    pub fn schema(&self) -> &Schema {
        &self.schema
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn sample_config(&self) -> &QuickSampleConfig {
        &self.sampling
    }

    /// Apply defaults, validate and insert one record.
    pub async fn insert_one(&self, document: Document) -> Result<Bson> {
        let mut ids = self.insert_many(vec![document]).await?;
        ids.pop().ok_or_else(|| Error::Validation {
            path: "_id".to_string(),
            message: "store returned no identifier".to_string(),
        })
    }

    /// Apply defaults, validate and insert records. Nothing is written if any
    /// record fails validation.
    pub async fn insert_many(&self, documents: Vec<Document>) -> Result<Vec<Bson>> {
        let mut prepared = Vec::with_capacity(documents.len());
        for mut document in documents {
            self.schema.apply_defaults(&mut document);
            self.schema.validate(&document)?;
            prepared.push(document);
        }
        if prepared.is_empty() {
            return Ok(Vec::new());
        }
        self.store.insert_many(prepared).await
    }

    /// Create every index the schema declares. Returns how many were requested.
    pub async fn ensure_indexes(&self) -> Result<usize> {
        let indexes = self.schema.index_models();
        let count = indexes.len();
        for index in indexes {
            self.store.create_index(index).await?;
        }
        log::debug!("Ensured {count} index(es) on '{}'", self.store.collection_name());
        Ok(count)
    }

    pub fn find(&self, filter: Document) -> Query<'_, S> {
        Query::new(self, filter)
    }

    pub fn aggregate(&self, pipeline: Vec<Document>) -> Aggregate<'_, S> {
        Aggregate::new(self, pipeline)
    }

    /// Give a seed to every record that lacks one.
    pub async fn backfill_seeds(&self) -> Result<UpdateSummary> {
        self.require_seed()?;
        reassign::backfill(&self.store).await
    }

    /// Fails with `SchemaMismatch` unless the schema defines the seed path.
    pub(crate) fn require_seed(&self) -> Result<()> {
        if self.schema.has_path(SEED_FIELD) {
            Ok(())
        } else {
            Err(Error::SchemaMismatch {
                model: self.schema.name().to_string(),
                field: SEED_FIELD.to_string(),
            })
        }
    }

    /// Reassign seeds for freshly sampled records. Skipped when no record has
    /// an identifier.
    pub(crate) async fn refresh_seeds(
        &self,
        records: &[Document],
    ) -> Result<Option<UpdateSummary>> {
        if !reassign::has_any_identified_record(records) {
            log::debug!(
                "Sample on '{}' returned no identified records; seeds left as-is",
                self.schema.name()
            );
            return Ok(None);
        }

        let ids = reassign::collect_identifiers(records);
        let summary = reassign::reassign(&self.store, ids, self.sampling.auto_insert).await?;
        Ok(Some(summary))
    }
}
