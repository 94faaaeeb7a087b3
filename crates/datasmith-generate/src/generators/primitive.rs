use fake::Fake;
use fake::faker::lorem::en::Paragraph;
use rand::{Rng, RngCore};
use serde_json::Value;

use crate::errors::GenerateError;
use crate::generators::{Constraints, Generator, GeneratorRegistry, int_bound};
use crate::kind::FieldKind;
use crate::value::CellValue;

const DEFAULT_INT_MIN: i64 = 0;
const DEFAULT_INT_MAX: i64 = 999;
const DEFAULT_FLOAT_MIN: f64 = 0.0;
const DEFAULT_FLOAT_MAX: f64 = 999.0;
const DEFAULT_STR_MAX: u32 = 20;
const DEFAULT_LOREM_SENTENCES: u32 = 3;

const ALPHANUMERIC: &[u8] = b"abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789";
const LETTERS: &[u8] = b"abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ";
const DIGITS: &[u8] = b"0123456789";

pub(super) fn register(registry: &mut GeneratorRegistry) {
    registry.register(Box::new(BooleanGenerator));
    registry.register(Box::new(CatGenerator));
    registry.register(Box::new(IntGenerator));
    registry.register(Box::new(FloatGenerator {
        kind: FieldKind::Float,
    }));
    registry.register(Box::new(FloatGenerator {
        kind: FieldKind::Decimal,
    }));
    registry.register(Box::new(FloatGenerator {
        kind: FieldKind::Double,
    }));
    registry.register(Box::new(StrGenerator));
    registry.register(Box::new(LoremGenerator));
}

struct BooleanGenerator;

impl Generator for BooleanGenerator {
    fn kind(&self) -> FieldKind {
        FieldKind::Boolean
    }

    fn generate(
        &self,
        _constraints: &Constraints<'_>,
        rng: &mut dyn RngCore,
    ) -> Result<CellValue, GenerateError> {
        Ok(CellValue::Bool(rng.random_bool(0.5)))
    }
}

/// Uniform pick among the declared literals; `values` is mandatory.
struct CatGenerator;

impl Generator for CatGenerator {
    fn kind(&self) -> FieldKind {
        FieldKind::Cat
    }

    fn generate(
        &self,
        constraints: &Constraints<'_>,
        rng: &mut dyn RngCore,
    ) -> Result<CellValue, GenerateError> {
        let values = match constraints.values {
            Some(values) if !values.is_empty() => values,
            _ => {
                return Err(GenerateError::InvalidConstraint(
                    "categorical fields require a non-empty values list".to_string(),
                ));
            }
        };
        let pick = &values[rng.random_range(0..values.len())];
        Ok(CellValue::Text(literal_text(pick)))
    }
}

fn literal_text(value: &Value) -> String {
    match value {
        Value::String(text) => text.clone(),
        other => other.to_string(),
    }
}

struct IntGenerator;

impl Generator for IntGenerator {
    fn kind(&self) -> FieldKind {
        FieldKind::Int
    }

    fn generate(
        &self,
        constraints: &Constraints<'_>,
        rng: &mut dyn RngCore,
    ) -> Result<CellValue, GenerateError> {
        let min = int_bound("min_value", constraints.min_value)?.unwrap_or(DEFAULT_INT_MIN);
        let max = int_bound("max_value", constraints.max_value)?.unwrap_or(DEFAULT_INT_MAX);
        if min > max {
            return Err(GenerateError::InvalidConstraint(format!(
                "min_value {min} exceeds max_value {max}"
            )));
        }
        Ok(CellValue::Int(rng.random_range(min..=max)))
    }
}

struct FloatGenerator {
    kind: FieldKind,
}

impl Generator for FloatGenerator {
    fn kind(&self) -> FieldKind {
        self.kind
    }

    fn generate(
        &self,
        constraints: &Constraints<'_>,
        rng: &mut dyn RngCore,
    ) -> Result<CellValue, GenerateError> {
        let min = int_bound("min_value", constraints.min_value)?
            .map(|value| value as f64)
            .unwrap_or(DEFAULT_FLOAT_MIN);
        let max = int_bound("max_value", constraints.max_value)?
            .map(|value| value as f64)
            .unwrap_or(DEFAULT_FLOAT_MAX);
        if min > max {
            return Err(GenerateError::InvalidConstraint(format!(
                "min_value {min} exceeds max_value {max}"
            )));
        }
        let value = rng.random_range(min..=max);
        Ok(match self.kind {
            FieldKind::Float => CellValue::Float(value),
            _ => CellValue::Decimal(value),
        })
    }
}

/// Bounded random text, or a bothify-style template when `format` is set:
/// `#` becomes a random digit, `?` a random letter, the rest is literal.
struct StrGenerator;

impl Generator for StrGenerator {
    fn kind(&self) -> FieldKind {
        FieldKind::Str
    }

    fn generate(
        &self,
        constraints: &Constraints<'_>,
        rng: &mut dyn RngCore,
    ) -> Result<CellValue, GenerateError> {
        if let Some(template) = constraints.format {
            let mut out = String::with_capacity(template.len());
            for ch in template.chars() {
                match ch {
                    '#' => out.push(DIGITS[rng.random_range(0..DIGITS.len())] as char),
                    '?' => out.push(LETTERS[rng.random_range(0..LETTERS.len())] as char),
                    other => out.push(other),
                }
            }
            return Ok(CellValue::Text(out));
        }

        let max = constraints.max_length.unwrap_or(DEFAULT_STR_MAX);
        let min = constraints.min_length.unwrap_or(max);
        if min > max {
            return Err(GenerateError::InvalidConstraint(format!(
                "min_length {min} exceeds max_length {max}"
            )));
        }
        let length = rng.random_range(min..=max) as usize;
        let text: String = (0..length)
            .map(|_| ALPHANUMERIC[rng.random_range(0..ALPHANUMERIC.len())] as char)
            .collect();
        Ok(CellValue::Text(text))
    }
}

/// Filler prose; `max_length` is the sentence count.
struct LoremGenerator;

impl Generator for LoremGenerator {
    fn kind(&self) -> FieldKind {
        FieldKind::Lorem
    }

    fn generate(
        &self,
        constraints: &Constraints<'_>,
        rng: &mut dyn RngCore,
    ) -> Result<CellValue, GenerateError> {
        let sentences = constraints
            .max_length
            .unwrap_or(DEFAULT_LOREM_SENTENCES) as usize;
        let text: String = Paragraph(sentences..sentences + 1).fake_with_rng(rng);
        Ok(CellValue::Text(text))
    }
}
