//! Tag-dispatched factory registry for bodies and force laws
//!
//! The registry maps a textual type tag to a builder that validates and
//! decodes a declarative record into a concrete instance. Each builder is
//! self-describing: it publishes its tag, a human description, and a
//! field-name to description map, which the registry exposes for tooling.
//!
//! This layer is the only place raw records are inspected; everything past
//! it operates on strongly typed entities. Registries are populated once at
//! startup and read-only afterwards, which is what keeps the simulator and
//! `Body` ignorant of the open set of concrete variants.

use crate::errors::DecodingError;
use crate::math::{Scalar, Vec2};
use serde_json::{Value, json};
use std::collections::HashMap;

pub mod body_builders;
pub mod force_law_builders;

pub use body_builders::{BasicBodyBuilder, MassLosingBodyBuilder};
pub use force_law_builders::{
    MovingTowardsFixedPointBuilder, NewtonUniversalGravitationBuilder, NoForceBuilder,
};

use crate::physics::body::Body;
use crate::physics::force_laws::ForceLaw;

/// Decodes declarative records with a fixed type tag into instances of `T`
pub trait Builder<T>: Send + Sync {
    /// Tag this builder answers to
    fn type_tag(&self) -> &'static str;

    /// One-line human description of the variant
    fn description(&self) -> &'static str;

    /// Field-name to description map for the variant's data fields
    fn data_schema(&self) -> Value;

    /// Validate and decode `record` into a concrete instance
    fn build(&self, record: &Value) -> Result<T, DecodingError>;

    /// Self-describing record for tooling: `{"type", "desc", "data"}`
    fn info(&self) -> Value {
        json!({
            "type": self.type_tag(),
            "desc": self.description(),
            "data": self.data_schema(),
        })
    }
}

/// Registry mapping type tags to builders
///
/// Populated once via chained [`with_builder`](Factory::with_builder) calls;
/// lookups dispatch on the record's `"type"` string.
pub struct Factory<T> {
    builders: HashMap<String, Box<dyn Builder<T>>>,
}

impl<T> Factory<T> {
    pub fn new() -> Self {
        Self {
            builders: HashMap::new(),
        }
    }

    /// Register a builder, returning self for method chaining
    pub fn with_builder(mut self, builder: Box<dyn Builder<T>>) -> Self {
        self.register(builder);
        self
    }

    pub fn register(&mut self, builder: Box<dyn Builder<T>>) {
        self.builders
            .insert(builder.type_tag().to_string(), builder);
    }

    /// Decode `record` by dispatching on its `"type"` tag
    pub fn create(&self, record: &Value) -> Result<T, DecodingError> {
        let tag = record
            .get("type")
            .and_then(Value::as_str)
            .ok_or(DecodingError::MissingTag)?;

        let builder = self
            .builders
            .get(tag)
            .ok_or_else(|| DecodingError::UnknownTag(tag.to_string()))?;

        builder.build(record)
    }

    /// Registered tags, sorted
    pub fn list_available(&self) -> Vec<&str> {
        let mut tags: Vec<&str> = self.builders.values().map(|b| b.type_tag()).collect();
        tags.sort_unstable();
        tags
    }

    /// Self-describing records for every registered builder, sorted by tag
    pub fn schema(&self) -> Value {
        let mut infos: Vec<(&str, Value)> = self
            .builders
            .values()
            .map(|b| (b.type_tag(), b.info()))
            .collect();
        infos.sort_unstable_by_key(|(tag, _)| *tag);
        Value::Array(infos.into_iter().map(|(_, info)| info).collect())
    }
}

impl<T> Default for Factory<T> {
    fn default() -> Self {
        Self::new()
    }
}

/// Factory with all built-in body variants registered
pub fn standard_body_factory() -> Factory<Body> {
    Factory::new()
        .with_builder(Box::new(BasicBodyBuilder))
        .with_builder(Box::new(MassLosingBodyBuilder))
}

/// Factory with all built-in force laws registered
pub fn standard_force_law_factory() -> Factory<Box<dyn ForceLaw>> {
    Factory::new()
        .with_builder(Box::new(NewtonUniversalGravitationBuilder))
        .with_builder(Box::new(MovingTowardsFixedPointBuilder))
        .with_builder(Box::new(NoForceBuilder))
}

// Decoding helpers shared by the builders. Each failure names the tag and
// field so input problems are diagnosable from the error alone.

pub(crate) fn require_str<'a>(
    record: &'a Value,
    tag: &str,
    field: &str,
) -> Result<&'a str, DecodingError> {
    match record.get(field) {
        None => Err(DecodingError::missing(tag, field)),
        Some(value) => value
            .as_str()
            .ok_or_else(|| DecodingError::mistyped(tag, field, "a string")),
    }
}

pub(crate) fn require_scalar(record: &Value, tag: &str, field: &str) -> Result<Scalar, DecodingError> {
    match record.get(field) {
        None => Err(DecodingError::missing(tag, field)),
        Some(value) => value
            .as_f64()
            .ok_or_else(|| DecodingError::mistyped(tag, field, "a number")),
    }
}

pub(crate) fn require_vec2(record: &Value, tag: &str, field: &str) -> Result<Vec2, DecodingError> {
    match record.get(field) {
        None => Err(DecodingError::missing(tag, field)),
        Some(value) => decode_vec2(value)
            .ok_or_else(|| DecodingError::mistyped(tag, field, "an array of two numbers")),
    }
}

pub(crate) fn optional_scalar(
    record: &Value,
    tag: &str,
    field: &str,
) -> Result<Option<Scalar>, DecodingError> {
    match record.get(field) {
        None => Ok(None),
        Some(value) => value
            .as_f64()
            .map(Some)
            .ok_or_else(|| DecodingError::mistyped(tag, field, "a number")),
    }
}

pub(crate) fn optional_vec2(
    record: &Value,
    tag: &str,
    field: &str,
) -> Result<Option<Vec2>, DecodingError> {
    match record.get(field) {
        None => Ok(None),
        Some(value) => decode_vec2(value)
            .map(Some)
            .ok_or_else(|| DecodingError::mistyped(tag, field, "an array of two numbers")),
    }
}

/// The `"data"` sub-object of a record, when present
pub(crate) fn optional_params<'a>(
    record: &'a Value,
    tag: &str,
) -> Result<Option<&'a Value>, DecodingError> {
    match record.get("data") {
        None => Ok(None),
        Some(value) if value.is_object() => Ok(Some(value)),
        Some(_) => Err(DecodingError::mistyped(tag, "data", "an object")),
    }
}

fn decode_vec2(value: &Value) -> Option<Vec2> {
    let components = value.as_array()?;
    if components.len() != 2 {
        return None;
    }
    Some(Vec2::new(
        components[0].as_f64()?,
        components[1].as_f64()?,
    ))
}
