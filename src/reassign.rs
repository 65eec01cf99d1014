//! Post-sample seed reassignment.
//!
//! After a sample is fetched, every returned record gets a fresh seed so the
//! next sample starts from a different ordering. The new values come from the
//! server's `$rand` operator inside an update pipeline, which is evaluated once
//! per matched document.

use mongodb::bson::{Bson, Document, doc};

use crate::error::{Error, Result};
use crate::plugin::SEED_FIELD;
use crate::store::{Store, UpdateSummary};

/// True when at least one record carries an `_id`.
///
/// Reassignment fires on partial identifier presence too; it then covers only
/// the identifiers that are present.
pub fn has_any_identified_record(records: &[Document]) -> bool {
    records.iter().any(|record| record.get("_id").is_some())
}

/// Identifiers of the records that have one, in result order.
pub fn collect_identifiers(records: &[Document]) -> Vec<Bson> {
    records.iter().filter_map(|record| record.get("_id").cloned()).collect()
}

/// Matches records with a missing, null or empty-string seed.
pub fn unseeded_filter() -> Document {
    doc! { SEED_FIELD: { "$in": [Bson::Null, ""] } }
}

/// Filter selecting the records whose seed must be replaced.
pub fn reassignment_filter(ids: Vec<Bson>, auto_insert: bool) -> Document {
    let by_id = doc! { "_id": { "$in": ids } };
    if auto_insert { doc! { "$or": [by_id, unseeded_filter()] } } else { by_id }
}

/// Update pipeline giving each matched record its own server-side random seed.
pub fn seed_update() -> Vec<Document> {
    vec![doc! { "$set": { SEED_FIELD: { "$rand": {} } } }]
}

/// Replace the seeds of `ids` (and, with `auto_insert`, of every unseeded
/// record) in one bulk update.
pub async fn reassign<S: Store>(
    store: &S,
    ids: Vec<Bson>,
    auto_insert: bool,
) -> Result<UpdateSummary> {
    let requested = ids.len();
    let filter = reassignment_filter(ids, auto_insert);

    let summary = store.update_many(filter, seed_update()).await.map_err(|err| {
        Error::Reassignment { namespace: store.collection_name(), source: Box::new(err) }
    })?;

    log::debug!(
        "Reassigned seeds on '{}': requested={requested} matched={} modified={} auto_insert={auto_insert}",
        store.collection_name(),
        summary.matched,
        summary.modified,
    );
    Ok(summary)
}

/// Seed every record that has none, without sampling.
pub async fn backfill<S: Store>(store: &S) -> Result<UpdateSummary> {
    let summary = store.update_many(unseeded_filter(), seed_update()).await.map_err(|err| {
        Error::Reassignment { namespace: store.collection_name(), source: Box::new(err) }
    })?;

    log::debug!("Backfilled seeds on '{}': modified={}", store.collection_name(), summary.modified);
    Ok(summary)
}
