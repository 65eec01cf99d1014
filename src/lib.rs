//! Fast approximate random sampling for MongoDB collections.
//!
//! Every record carries a `__seed` in [0, 1). A sample sorts by that seed and
//! takes the first `limit` records, which an index on the seed makes cheap.
//! The returned records then receive fresh server-generated seeds, so the next
//! sample sees a different ordering.
//!
//! ```no_run
//! # async fn demo(collection: mongodb::Collection<mongodb::bson::Document>) -> quicksample::Result<()> {
//! use mongodb::bson::doc;
//! use quicksample::{FieldSpec, FieldType, Model, QuickSample, QuickSampleConfig, Schema};
//!
//! let mut schema = Schema::new("Quote");
//! schema.add("text", FieldSpec::new(FieldType::String).required());
//! QuickSample::install(&mut schema, QuickSampleConfig::default())?;
//!
//! let quotes = Model::new(schema, collection);
//! quotes.ensure_indexes().await?;
//! let picks = quotes.find(doc! { "lang": "en" }).quick_sample(10).await?;
//! # let _ = picks;
//! # Ok(())
//! # }
//! ```
//!
//! The resulting distribution is approximately, not exactly, uniform.

pub mod aggregate;
pub mod config;
pub mod connection;
pub mod error;
pub mod model;
pub mod plugin;
pub mod query;
pub mod reassign;
pub mod schema;
pub mod store;

#[cfg(test)]
pub(crate) mod testing;

pub use aggregate::Aggregate;
pub use config::ConnectionConfig;
pub use error::{Error, Result};
pub use model::Model;
pub use plugin::{
    DEFAULT_SAMPLE_LIMIT, QuickSample, QuickSampleConfig, SEED_FIELD, SeedFieldOptions,
};
pub use query::Query;
pub use schema::{DefaultValue, FieldOptions, FieldSpec, FieldType, Plugin, Schema};
pub use store::{FindSpec, Store, UpdateSummary};
