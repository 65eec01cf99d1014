//! `Store` over the official MongoDB driver.

use futures::TryStreamExt;
use mongodb::bson::{Bson, Document};
use mongodb::options::FindOptions;
use mongodb::{Collection, IndexModel};

use super::{FindSpec, Store, UpdateSummary};
use crate::error::Result;

impl Store for Collection<Document> {
    fn collection_name(&self) -> String {
        self.name().to_string()
    }

    async fn find(&self, filter: Document, spec: FindSpec) -> Result<Vec<Document>> {
        let mut options = FindOptions::default();
        options.sort = spec.sort;
        options.limit = spec.limit;
        options.skip = spec.skip;
        options.projection = spec.projection;

        let cursor = Collection::find(self, filter).with_options(options).await?;
        let documents: Vec<Document> = cursor.try_collect().await?;
        Ok(documents)
    }

    async fn aggregate(&self, pipeline: Vec<Document>) -> Result<Vec<Document>> {
        let cursor = Collection::aggregate(self, pipeline).await?;
        let documents: Vec<Document> = cursor.try_collect().await?;
        Ok(documents)
    }

    async fn update_many(
        &self,
        filter: Document,
        pipeline: Vec<Document>,
    ) -> Result<UpdateSummary> {
        let result = Collection::update_many(self, filter, pipeline).await?;
        Ok(UpdateSummary { matched: result.matched_count, modified: result.modified_count })
    }

    async fn insert_many(&self, documents: Vec<Document>) -> Result<Vec<Bson>> {
        let result = Collection::insert_many(self, documents).await?;
        let mut ids: Vec<(usize, Bson)> = result.inserted_ids.into_iter().collect();
        ids.sort_unstable_by_key(|(index, _)| *index);
        Ok(ids.into_iter().map(|(_, id)| id).collect())
    }

    async fn create_index(&self, index: IndexModel) -> Result<()> {
        Collection::create_index(self, index).await?;
        Ok(())
    }
}
