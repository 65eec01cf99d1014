//! Test fixtures for integration tests.

#![allow(dead_code)]

use mongodb::bson::{Bson, Document, doc};
use quicksample::{FieldSpec, FieldType, QuickSample, QuickSampleConfig, SEED_FIELD, Schema};

/// A quote schema with the sampling plugin installed.
pub fn quote_schema(config: QuickSampleConfig) -> Schema {
    let mut schema = Schema::new("Quote");
    schema
        .add("text", FieldSpec::new(FieldType::String).required())
        .add("author", FieldSpec::new(FieldType::String))
        .add("kind", FieldSpec::new(FieldType::String));
    QuickSample::install(&mut schema, config).expect("install sampling plugin");
    schema
}

/// The same schema without the plugin.
pub fn plain_quote_schema() -> Schema {
    let mut schema = Schema::new("PlainQuote");
    schema.add("text", FieldSpec::new(FieldType::String).required());
    schema
}

/// Quotes without seeds; the model fills them in on insert.
pub fn quotes(count: usize) -> Vec<Document> {
    (0..count)
        .map(|i| {
            doc! {
                "text": format!("Quote {}", i),
                "author": if i % 2 == 0 { "even" } else { "odd" },
                "kind": "seeded",
                "index": i as i32,
            }
        })
        .collect()
}

/// Raw records that bypass the model: null, empty-string and missing seeds.
pub fn unseeded_records() -> Vec<Document> {
    vec![
        doc! { "text": "null seed", "kind": "raw", SEED_FIELD: Bson::Null },
        doc! { "text": "empty seed", "kind": "raw", SEED_FIELD: "" },
        doc! { "text": "no seed", "kind": "raw" },
    ]
}

/// Seed of a record, if it is a number.
pub fn seed_of(record: &Document) -> Option<f64> {
    record.get_f64(SEED_FIELD).ok()
}
