//! Record schemas: typed paths, per-record defaults, validation and plugins.
//!
//! The Rust driver stores plain documents; a `Schema` adds the small amount of
//! structure a model needs on top of that (which paths exist, how they are
//! defaulted at creation time, which ones are indexed).

mod field;

pub use field::*;

use std::collections::BTreeMap;

use mongodb::IndexModel;
use mongodb::bson::{Document, doc};
use mongodb::options::IndexOptions;

use crate::error::{Error, Result};

/// Extension that mutates a schema when installed.
pub trait Plugin {
    /// Registry key; a schema holds at most one installation per name.
    fn name(&self) -> &'static str;

    /// Options recorded alongside the installation.
    fn options(&self) -> Result<serde_json::Value>;

    /// Apply the plugin to a schema that does not carry it yet.
    fn apply(&self, schema: &mut Schema) -> Result<()>;
}

/// Named set of typed paths bound to one collection.
#[derive(Clone, Debug)]
pub struct Schema {
    name: String,
    paths: BTreeMap<String, FieldSpec>,
    plugins: BTreeMap<String, serde_json::Value>,
}

impl Schema {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into(), paths: BTreeMap::new(), plugins: BTreeMap::new() }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Define (or redefine) a top-level path.
    pub fn add(&mut self, path: impl Into<String>, spec: FieldSpec) -> &mut Self {
        self.paths.insert(path.into(), spec);
        self
    }

    pub fn path(&self, path: &str) -> Option<&FieldSpec> {
        self.paths.get(path)
    }

    pub fn has_path(&self, path: &str) -> bool {
        self.paths.contains_key(path)
    }

    /// All paths, sorted by name.
    pub fn paths(&self) -> impl Iterator<Item = (&str, &FieldSpec)> {
        self.paths.iter().map(|(name, spec)| (name.as_str(), spec))
    }

    /// Install a plugin.
    ///
    /// A second installation with identical options does nothing; one with
    /// different options is rejected.
    pub fn plugin<P: Plugin>(&mut self, plugin: &P) -> Result<()> {
        let name = plugin.name();
        let options = plugin.options()?;

        if let Some(existing) = self.plugins.get(name) {
            if *existing == options {
                log::warn!("Plugin '{name}' already installed on schema '{}'", self.name);
                return Ok(());
            }
            return Err(Error::AlreadyInstalled {
                plugin: name.to_string(),
                schema: self.name.clone(),
            });
        }

        plugin.apply(self)?;
        self.plugins.insert(name.to_string(), options);
        Ok(())
    }

    /// Options a plugin was installed with, if it is installed.
    pub fn plugin_options(&self, name: &str) -> Option<&serde_json::Value> {
        self.plugins.get(name)
    }

    /// Fill every absent path that declares a default. Present values,
    /// including explicit nulls, are left alone.
    pub fn apply_defaults(&self, document: &mut Document) {
        for (path, spec) in &self.paths {
            if document.contains_key(path) {
                continue;
            }
            if let Some(default) = &spec.default {
                document.insert(path.clone(), default.value());
            }
        }
    }

    /// Check a document against every declared path. Unknown keys pass.
    pub fn validate(&self, document: &Document) -> Result<()> {
        for (path, spec) in &self.paths {
            spec.check(document.get(path))
                .map_err(|message| Error::Validation { path: path.clone(), message })?;
        }
        Ok(())
    }

    /// One ascending index per indexed path.
    pub fn index_models(&self) -> Vec<IndexModel> {
        self.paths
            .iter()
            .filter(|(_, spec)| spec.options.index)
            .map(|(path, spec)| {
                let keys = doc! { path.as_str(): 1 };
                if spec.options.sparse {
                    IndexModel::builder()
                        .keys(keys)
                        .options(IndexOptions::builder().sparse(true).build())
                        .build()
                } else {
                    IndexModel::builder().keys(keys).build()
                }
            })
            .collect()
    }
}
