use std::time::Instant;

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use tracing::{debug, info};

use datasmith_core::Schema;

use crate::errors::GenerateError;
use crate::generators::{Constraints, GeneratorRegistry};
use crate::kind::FieldKind;
use crate::value::CellValue;

/// One generated column. Columns keep field declaration order inside a
/// [`Table`].
#[derive(Debug, Clone)]
pub struct Column {
    pub name: String,
    pub kind: FieldKind,
    pub cells: Vec<CellValue>,
}

/// Fully assembled in-memory table.
#[derive(Debug, Clone)]
pub struct Table {
    pub name: String,
    pub columns: Vec<Column>,
}

impl Table {
    pub fn rows(&self) -> usize {
        self.columns
            .first()
            .map(|column| column.cells.len())
            .unwrap_or(0)
    }
}

/// Entry point for turning a validated schema into a table.
pub struct GenerationEngine {
    registry: GeneratorRegistry,
}

impl GenerationEngine {
    pub fn new() -> Self {
        Self {
            registry: GeneratorRegistry::new(),
        }
    }

    /// Generate every column of the schema, in field declaration order.
    ///
    /// A single column failure aborts the run; no partial table is
    /// returned.
    pub fn run(&self, schema: &Schema) -> Result<Table, GenerateError> {
        let spec = schema.names();
        let rows = spec.rows();
        let base_seed = spec.seed() as u64;

        info!(
            table = %spec.name(),
            rows,
            fields = schema.fields().len(),
            seed = spec.seed(),
            "generating table"
        );

        let mut columns = Vec::with_capacity(schema.fields().len());
        for field in schema.fields() {
            let start = Instant::now();
            let constraints = Constraints::from(field);
            let seed = hash_seed(base_seed, field.name());
            let cells = self.column(field.kind(), &constraints, rows, seed)?;
            debug!(
                column = %field.name(),
                kind = %field.kind(),
                duration_ms = start.elapsed().as_millis() as u64,
                "column generated"
            );
            columns.push(Column {
                name: field.name().to_string(),
                kind: FieldKind::parse(field.kind()),
                cells,
            });
        }

        Ok(Table {
            name: spec.name().to_string(),
            columns,
        })
    }

    /// Generate `rows` cells for `tag` under `constraints`, seeded by
    /// `seed`.
    ///
    /// Unrecognized tags yield a column of null placeholders; a malformed
    /// constraint on a recognized tag fails the column as a whole, never
    /// partially.
    pub fn column(
        &self,
        tag: &str,
        constraints: &Constraints<'_>,
        rows: u64,
        seed: u64,
    ) -> Result<Vec<CellValue>, GenerateError> {
        let kind = FieldKind::parse(tag);
        let generator = self.registry.generator(kind).ok_or_else(|| {
            GenerateError::Column {
                tag: tag.to_string(),
                source: Box::new(GenerateError::InvalidConstraint(
                    "no generator registered".to_string(),
                )),
            }
        })?;

        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let mut cells = Vec::with_capacity(rows as usize);
        for _ in 0..rows {
            let cell = generator
                .generate(constraints, &mut rng)
                .map_err(|err| GenerateError::Column {
                    tag: tag.to_string(),
                    source: Box::new(err),
                })?;
            cells.push(cell);
        }
        Ok(cells)
    }
}

impl Default for GenerationEngine {
    fn default() -> Self {
        Self::new()
    }
}

fn hash_seed(seed: u64, key: &str) -> u64 {
    let mut hash = seed ^ 0xcbf29ce484222325;
    for byte in key.as_bytes() {
        hash ^= *byte as u64;
        hash = hash.wrapping_mul(0x100000001b3);
    }
    hash
}
