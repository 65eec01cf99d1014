//! In-process `Store` that records every call, for unit tests.

use std::sync::Mutex;

use mongodb::IndexModel;
use mongodb::bson::{Bson, Document};

use crate::error::{Error, Result};
use crate::store::{FindSpec, Store, UpdateSummary};

#[derive(Default)]
pub(crate) struct RecordingStore {
    results: Vec<Document>,
    fail_reads: bool,
    fail_updates: bool,
    finds: Mutex<Vec<(Document, FindSpec)>>,
    pipelines: Mutex<Vec<Vec<Document>>>,
    updates: Mutex<Vec<(Document, Vec<Document>)>>,
    inserted: Mutex<Vec<Document>>,
    indexes: Mutex<Vec<IndexModel>>,
}

impl RecordingStore {
    /// Every find and aggregate returns `results` as-is.
    pub fn returning(results: Vec<Document>) -> Self {
        Self { results, ..Default::default() }
    }

    pub fn failing_reads(mut self) -> Self {
        self.fail_reads = true;
        self
    }

    pub fn failing_updates(mut self) -> Self {
        self.fail_updates = true;
        self
    }

    pub fn finds(&self) -> Vec<(Document, FindSpec)> {
        self.finds.lock().unwrap().clone()
    }

    pub fn pipelines(&self) -> Vec<Vec<Document>> {
        self.pipelines.lock().unwrap().clone()
    }

    pub fn updates(&self) -> Vec<(Document, Vec<Document>)> {
        self.updates.lock().unwrap().clone()
    }

    pub fn inserted(&self) -> Vec<Document> {
        self.inserted.lock().unwrap().clone()
    }

    pub fn indexes(&self) -> Vec<IndexModel> {
        self.indexes.lock().unwrap().clone()
    }

    fn read(&self) -> Result<Vec<Document>> {
        if self.fail_reads {
            return Err(Error::Io(std::io::Error::other("read failed")));
        }
        Ok(self.results.clone())
    }
}

impl Store for RecordingStore {
    fn collection_name(&self) -> String {
        "recording".to_string()
    }

    async fn find(&self, filter: Document, spec: FindSpec) -> Result<Vec<Document>> {
        self.finds.lock().unwrap().push((filter, spec));
        self.read()
    }

    async fn aggregate(&self, pipeline: Vec<Document>) -> Result<Vec<Document>> {
        self.pipelines.lock().unwrap().push(pipeline);
        self.read()
    }

    async fn update_many(
        &self,
        filter: Document,
        pipeline: Vec<Document>,
    ) -> Result<UpdateSummary> {
        self.updates.lock().unwrap().push((filter, pipeline));
        if self.fail_updates {
            return Err(Error::Io(std::io::Error::other("update failed")));
        }
        Ok(UpdateSummary::default())
    }

    async fn insert_many(&self, documents: Vec<Document>) -> Result<Vec<Bson>> {
        let mut inserted = self.inserted.lock().unwrap();
        let start = inserted.len();
        inserted.extend(documents);
        Ok((start..inserted.len()).map(|i| Bson::Int64(i as i64)).collect())
    }

    async fn create_index(&self, index: IndexModel) -> Result<()> {
        self.indexes.lock().unwrap().push(index);
        Ok(())
    }
}
