use std::collections::HashMap;

use rand::RngCore;
use serde_json::Value;

use datasmith_core::{Bound, Field};

use crate::errors::GenerateError;
use crate::kind::FieldKind;
use crate::value::CellValue;

mod identity;
mod primitive;
mod temporal;

/// The constraints a field declaration carries, as the dispatch contract
/// sees them. Which entries are honored depends on the field kind.
#[derive(Debug, Clone, Copy, Default)]
pub struct Constraints<'a> {
    pub min_length: Option<u32>,
    pub max_length: Option<u32>,
    pub min_value: Option<&'a Bound>,
    pub max_value: Option<&'a Bound>,
    pub format: Option<&'a str>,
    pub values: Option<&'a [Value]>,
}

impl<'a> From<&'a Field> for Constraints<'a> {
    fn from(field: &'a Field) -> Self {
        Self {
            min_length: field.min_length(),
            max_length: field.max_length(),
            min_value: field.min_value(),
            max_value: field.max_value(),
            format: field.format(),
            values: field.values(),
        }
    }
}

/// Produces one cell per call for a single field kind.
pub trait Generator {
    fn kind(&self) -> FieldKind;

    fn generate(
        &self,
        constraints: &Constraints<'_>,
        rng: &mut dyn RngCore,
    ) -> Result<CellValue, GenerateError>;
}

/// Lookup table of generators keyed by field kind.
pub struct GeneratorRegistry {
    generators: HashMap<FieldKind, Box<dyn Generator>>,
}

impl GeneratorRegistry {
    pub fn new() -> Self {
        let mut registry = Self {
            generators: HashMap::new(),
        };
        identity::register(&mut registry);
        primitive::register(&mut registry);
        temporal::register(&mut registry);
        registry.register(Box::new(UnsupportedGenerator));
        registry
    }

    pub fn register(&mut self, generator: Box<dyn Generator>) {
        self.generators.insert(generator.kind(), generator);
    }

    pub fn generator(&self, kind: FieldKind) -> Option<&dyn Generator> {
        self.generators.get(&kind).map(Box::as_ref)
    }
}

impl Default for GeneratorRegistry {
    fn default() -> Self {
        Self::new()
    }
}

/// Unknown tags degrade to null placeholders instead of failing the run;
/// only malformed constraints on a supported tag are fatal.
struct UnsupportedGenerator;

impl Generator for UnsupportedGenerator {
    fn kind(&self) -> FieldKind {
        FieldKind::Unsupported
    }

    fn generate(
        &self,
        _constraints: &Constraints<'_>,
        _rng: &mut dyn RngCore,
    ) -> Result<CellValue, GenerateError> {
        Ok(CellValue::Null)
    }
}

pub(crate) fn int_bound(key: &str, bound: Option<&Bound>) -> Result<Option<i64>, GenerateError> {
    match bound {
        None => Ok(None),
        Some(Bound::Int(value)) => Ok(Some(*value)),
        Some(Bound::Text(text)) => Err(GenerateError::InvalidConstraint(format!(
            "{key} must be an integer, got '{text}'"
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_recognized_kind_has_a_generator() {
        let registry = GeneratorRegistry::new();
        for tag in datasmith_core::FIELD_TYPES {
            let kind = FieldKind::parse(tag);
            assert!(
                registry.generator(kind).is_some(),
                "no generator registered for '{tag}'"
            );
        }
        assert!(registry.generator(FieldKind::Unsupported).is_some());
    }
}
