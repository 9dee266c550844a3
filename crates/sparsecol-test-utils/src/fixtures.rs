//! Reusable schema fixtures.
//!
//! - [`two_column_sizes`] — the minimal `[4, 8]` layout.
//! - [`transform_schema`] — a game-style transform record, 44 bytes per index.
//! - [`EntityColumns`] — typed keys over a small entity schema.

use sparsecol_core::{ColumnKey, ColumnSchema, SchemaBuilder};

/// Element sizes of the minimal two-column layout.
pub fn two_column_sizes() -> [usize; 2] {
    [4, 8]
}

/// Position (12 bytes), rotation (16 bytes), scale (12 bytes), layer (4 bytes).
pub fn transform_schema() -> ColumnSchema {
    let mut builder = SchemaBuilder::new();
    builder.raw_column("position", 12).unwrap();
    builder.raw_column("rotation", 16).unwrap();
    builder.raw_column("scale", 12).unwrap();
    builder.raw_column("layer", 4).unwrap();
    builder.build()
}

/// Typed keys for a small entity record.
#[derive(Clone, Copy, Debug)]
pub struct EntityColumns {
    pub id: ColumnKey<u32>,
    pub health: ColumnKey<f32>,
    pub velocity: ColumnKey<[u8; 8]>,
    pub alive: ColumnKey<bool>,
}

impl EntityColumns {
    /// Build the entity schema and its keys.
    pub fn schema() -> (ColumnSchema, Self) {
        let mut builder = SchemaBuilder::new();
        let id = builder.column::<u32>("id").unwrap();
        let health = builder.column::<f32>("health").unwrap();
        let velocity = builder.column::<[u8; 8]>("velocity").unwrap();
        let alive = builder.column::<bool>("alive").unwrap();
        (
            builder.build(),
            Self {
                id,
                health,
                velocity,
                alive,
            },
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn transform_schema_layout() {
        let schema = transform_schema();
        assert_eq!(schema.sizes(), &[12, 16, 12, 4]);
        assert_eq!(schema.slot_bytes(), 44);
    }

    #[test]
    fn entity_keys_match_schema() {
        let (schema, cols) = EntityColumns::schema();
        assert_eq!(schema.column_size(cols.velocity.id()), Some(8));
        assert_eq!(schema.column_by_name("alive"), Some(cols.alive.id()));
    }
}
