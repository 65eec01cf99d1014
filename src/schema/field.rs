//! Field definitions for schema paths.

use mongodb::bson::Bson;
use serde::{Deserialize, Serialize};

/// Storage type of a schema path.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum FieldType {
    Number,
    String,
    Boolean,
    ObjectId,
    Date,
    Document,
    Array,
    /// Any BSON value is accepted.
    Mixed,
}

impl FieldType {
    pub fn label(self) -> &'static str {
        match self {
            FieldType::Number => "Number",
            FieldType::String => "String",
            FieldType::Boolean => "Boolean",
            FieldType::ObjectId => "ObjectId",
            FieldType::Date => "Date",
            FieldType::Document => "Document",
            FieldType::Array => "Array",
            FieldType::Mixed => "Mixed",
        }
    }

    /// Whether a non-null value is acceptable for this type.
    pub fn matches(self, value: &Bson) -> bool {
        match self {
            FieldType::Number => matches!(
                value,
                Bson::Int32(_) | Bson::Int64(_) | Bson::Double(_) | Bson::Decimal128(_)
            ),
            FieldType::String => matches!(value, Bson::String(_)),
            FieldType::Boolean => matches!(value, Bson::Boolean(_)),
            FieldType::ObjectId => matches!(value, Bson::ObjectId(_)),
            FieldType::Date => matches!(value, Bson::DateTime(_)),
            FieldType::Document => matches!(value, Bson::Document(_)),
            FieldType::Array => matches!(value, Bson::Array(_)),
            FieldType::Mixed => true,
        }
    }
}

/// Value assigned to a path when a record is created without it.
#[derive(Clone, Debug)]
pub enum DefaultValue {
    /// The same value for every record.
    Value(Bson),
    /// Called once per record at creation time.
    Generator(fn() -> Bson),
}

impl DefaultValue {
    pub fn value(&self) -> Bson {
        match self {
            DefaultValue::Value(value) => value.clone(),
            DefaultValue::Generator(generate) => generate(),
        }
    }
}

/// Caller-tunable constraints on a path.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct FieldOptions {
    #[serde(default)]
    pub required: bool,
    #[serde(default)]
    pub min: Option<f64>,
    #[serde(default)]
    pub max: Option<f64>,
    #[serde(default)]
    pub index: bool,
    #[serde(default)]
    pub sparse: bool,
}

/// A single schema path.
#[derive(Clone, Debug)]
pub struct FieldSpec {
    pub field_type: FieldType,
    pub default: Option<DefaultValue>,
    pub options: FieldOptions,
}

impl FieldSpec {
    pub fn new(field_type: FieldType) -> Self {
        Self { field_type, default: None, options: FieldOptions::default() }
    }

    pub fn with_default(mut self, default: DefaultValue) -> Self {
        self.default = Some(default);
        self
    }

    pub fn with_options(mut self, options: FieldOptions) -> Self {
        self.options = options;
        self
    }

    pub fn indexed(mut self) -> Self {
        self.options.index = true;
        self
    }

    pub fn required(mut self) -> Self {
        self.options.required = true;
        self
    }

    /// Check one value against this path's type and constraints.
    /// Returns a human-readable reason on failure.
    pub fn check(&self, value: Option<&Bson>) -> Result<(), String> {
        let value = match value {
            None | Some(Bson::Null) => {
                if self.options.required {
                    return Err("path is required".into());
                }
                return Ok(());
            }
            Some(value) => value,
        };

        if !self.field_type.matches(value) {
            return Err(format!(
                "expected {}, found {:?}",
                self.field_type.label(),
                value.element_type()
            ));
        }

        if let Some(number) = as_f64(value) {
            if let Some(min) = self.options.min
                && number < min
            {
                return Err(format!("{number} is less than minimum {min}"));
            }
            if let Some(max) = self.options.max
                && number > max
            {
                return Err(format!("{number} is greater than maximum {max}"));
            }
        }

        Ok(())
    }
}

fn as_f64(value: &Bson) -> Option<f64> {
    match value {
        Bson::Int32(v) => Some(f64::from(*v)),
        Bson::Int64(v) => Some(*v as f64),
        Bson::Double(v) => Some(*v),
        _ => None,
    }
}
