//! Seed-based sampling operations.

use mongodb::Client;
use mongodb::bson::Document;

use crate::connection::ConnectionManager;
use crate::error::Result;
use crate::schema::Schema;
use crate::store::UpdateSummary;

impl ConnectionManager {
    /// Sample records matching `filter` and refresh their seeds (runs in Tokio runtime)
    pub fn sample_documents(
        &self,
        client: &Client,
        database: &str,
        collection: &str,
        schema: &Schema,
        filter: Document,
        limit: Option<i64>,
    ) -> Result<Vec<Document>> {
        let model = Self::model(client, database, collection, schema);
        self.runtime.block_on(async { model.find(filter).quick_sample(limit).await })
    }

    /// Run `pipeline`, then sample its output and refresh seeds (runs in Tokio runtime)
    pub fn sample_pipeline(
        &self,
        client: &Client,
        database: &str,
        collection: &str,
        schema: &Schema,
        pipeline: Vec<Document>,
        limit: Option<i64>,
    ) -> Result<Vec<Document>> {
        let model = Self::model(client, database, collection, schema);
        self.runtime.block_on(async { model.aggregate(pipeline).quick_sample(limit).await })
    }

    /// Seed every record that has none (runs in Tokio runtime)
    pub fn backfill_seeds(
        &self,
        client: &Client,
        database: &str,
        collection: &str,
        schema: &Schema,
    ) -> Result<UpdateSummary> {
        let model = Self::model(client, database, collection, schema);
        self.runtime.block_on(async { model.backfill_seeds().await })
    }
}
