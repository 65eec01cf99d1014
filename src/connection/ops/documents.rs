//! Schema-aware insert and index operations.

use mongodb::Client;
use mongodb::bson::{Bson, Document};

use crate::connection::ConnectionManager;
use crate::error::Result;
use crate::schema::Schema;

impl ConnectionManager {
    /// Insert records with schema defaults applied (runs in Tokio runtime)
    pub fn insert_documents(
        &self,
        client: &Client,
        database: &str,
        collection: &str,
        schema: &Schema,
        documents: Vec<Document>,
    ) -> Result<Vec<Bson>> {
        let model = Self::model(client, database, collection, schema);
        self.runtime.block_on(async { model.insert_many(documents).await })
    }

    /// Create the indexes `schema` declares (runs in Tokio runtime)
    pub fn ensure_indexes(
        &self,
        client: &Client,
        database: &str,
        collection: &str,
        schema: &Schema,
    ) -> Result<usize> {
        let model = Self::model(client, database, collection, schema);
        self.runtime.block_on(async { model.ensure_indexes().await })
    }
}
