//! The QuickSample schema plugin: installs the `__seed` path.

use mongodb::bson::Bson;
use serde::{Deserialize, Serialize};

use crate::config;
use crate::error::{Error, Result};
use crate::schema::{DefaultValue, FieldOptions, FieldSpec, FieldType, Plugin, Schema};

/// Reserved path holding each record's sort seed.
pub const SEED_FIELD: &str = "__seed";

/// Number of records a sample returns when no limit is given.
pub const DEFAULT_SAMPLE_LIMIT: i64 = 50;

const PLUGIN_NAME: &str = "quickSample";

/// Uniform draw in [0, 1).
pub fn random_seed() -> f64 {
    rand::random::<f64>()
}

fn seed_default() -> Bson {
    Bson::Double(random_seed())
}

/// Constraints for the seed path. The path name and numeric type are fixed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeedFieldOptions {
    #[serde(default = "default_true")]
    pub index: bool,
    #[serde(default)]
    pub sparse: bool,
    #[serde(default)]
    pub required: bool,
    #[serde(default)]
    pub min: Option<f64>,
    #[serde(default)]
    pub max: Option<f64>,
}

impl Default for SeedFieldOptions {
    fn default() -> Self {
        Self { index: true, sparse: false, required: false, min: None, max: None }
    }
}

/// Sampling configuration attached to a schema.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuickSampleConfig {
    /// Sweep records without a seed into every reassignment.
    #[serde(default = "default_true")]
    pub auto_insert: bool,
    #[serde(flatten)]
    pub field: SeedFieldOptions,
}

impl Default for QuickSampleConfig {
    fn default() -> Self {
        Self { auto_insert: true, field: SeedFieldOptions::default() }
    }
}

impl QuickSampleConfig {
    pub fn from_json(json: &str) -> Result<Self> {
        config::parse_json(json)
    }

    /// Load from a JSON file.
    pub fn load(path: impl AsRef<std::path::Path>) -> Result<Self> {
        config::load_json(path)
    }
}

fn default_true() -> bool {
    true
}

/// Seed-based sampling plugin.
#[derive(Debug, Clone, Default)]
pub struct QuickSample {
    config: QuickSampleConfig,
}

impl QuickSample {
    pub fn new(config: QuickSampleConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &QuickSampleConfig {
        &self.config
    }

    /// Install onto `schema`. See [`Schema::plugin`] for re-installation rules.
    pub fn install(schema: &mut Schema, config: QuickSampleConfig) -> Result<()> {
        schema.plugin(&Self::new(config))
    }

    /// Configuration the plugin was installed with on `schema`.
    pub fn config_for(schema: &Schema) -> Option<QuickSampleConfig> {
        let options = schema.plugin_options(PLUGIN_NAME)?;
        serde_json::from_value(options.clone()).ok()
    }

    fn field_spec(&self) -> FieldSpec {
        let field = &self.config.field;
        FieldSpec::new(FieldType::Number)
            .with_default(DefaultValue::Generator(seed_default))
            .with_options(FieldOptions {
                required: field.required,
                min: field.min,
                max: field.max,
                index: field.index,
                sparse: field.sparse,
            })
    }
}

impl Plugin for QuickSample {
    fn name(&self) -> &'static str {
        PLUGIN_NAME
    }

    fn options(&self) -> Result<serde_json::Value> {
        Ok(serde_json::to_value(&self.config)?)
    }

    fn apply(&self, schema: &mut Schema) -> Result<()> {
        if schema.has_path(SEED_FIELD) {
            return Err(Error::FieldConflict {
                plugin: PLUGIN_NAME.to_string(),
                schema: schema.name().to_string(),
                path: SEED_FIELD.to_string(),
            });
        }
        schema.add(SEED_FIELD, self.field_spec());
        log::debug!("Installed '{SEED_FIELD}' on schema '{}'", schema.name());
        Ok(())
    }
}
