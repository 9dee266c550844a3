//! Column schema: the fixed list of columns and their element sizes.
//!
//! A [`ColumnSchema`] is built once and never changes afterwards. The
//! store keeps its own copy, so the slice or builder it was created from
//! can be dropped or mutated freely.

use std::fmt;
use std::marker::PhantomData;

use indexmap::IndexMap;
use smallvec::SmallVec;

use crate::element::Element;
use crate::error::StoreError;
use crate::id::ColumnId;

/// Number of slots in a page. Repeated here so the schema can report
/// per-page memory without depending on the store crate.
const SLOTS_PER_PAGE: usize = 4096;

/// Definition of a single column.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ColumnDef {
    /// Human-readable name for diagnostics and lookup.
    pub name: String,
    /// Width of one element in bytes.
    pub element_size: usize,
}

/// The ordered, immutable set of columns stored per index.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ColumnSchema {
    columns: Vec<ColumnDef>,
    /// Element sizes in column order, kept contiguous for the hot path.
    sizes: SmallVec<[usize; 8]>,
    by_name: IndexMap<String, ColumnId>,
}

impl ColumnSchema {
    /// Build a schema of unnamed columns from raw element sizes.
    ///
    /// Columns are named `column_0`, `column_1`, ... The sizes are copied.
    pub fn from_sizes(column_sizes: &[usize]) -> Self {
        let mut builder = SchemaBuilder::new();
        for (i, &size) in column_sizes.iter().enumerate() {
            builder.push(format!("column_{i}"), size);
        }
        builder.build()
    }

    /// Number of columns.
    pub fn column_count(&self) -> usize {
        self.columns.len()
    }

    /// Whether the schema has no columns.
    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }

    /// Element size of a column, or `None` if it is out of range.
    pub fn column_size(&self, column: ColumnId) -> Option<usize> {
        self.sizes.get(column.index()).copied()
    }

    /// Element sizes in column order.
    pub fn sizes(&self) -> &[usize] {
        &self.sizes
    }

    /// Look up a column's definition.
    pub fn column(&self, column: ColumnId) -> Option<&ColumnDef> {
        self.columns.get(column.index())
    }

    /// Find a column by name.
    pub fn column_by_name(&self, name: &str) -> Option<ColumnId> {
        self.by_name.get(name).copied()
    }

    /// Iterate over columns in registration order.
    pub fn iter(&self) -> impl Iterator<Item = (ColumnId, &ColumnDef)> {
        self.columns
            .iter()
            .enumerate()
            .map(|(i, def)| (ColumnId(i as u32), def))
    }

    /// Bytes occupied by one index across all columns.
    pub fn slot_bytes(&self) -> usize {
        self.sizes.iter().fold(0usize, |acc, &s| acc.saturating_add(s))
    }

    /// Bytes allocated for one page across all columns.
    pub fn page_bytes(&self) -> usize {
        self.slot_bytes().saturating_mul(SLOTS_PER_PAGE)
    }

    /// Validate an access against the schema.
    ///
    /// Returns [`StoreError::UnknownColumn`] if `column` is out of range
    /// and [`StoreError::SizeMismatch`] if `size` differs from the
    /// column's recorded element size.
    pub fn check(&self, size: usize, column: ColumnId) -> Result<(), StoreError> {
        let expected = self
            .column_size(column)
            .ok_or(StoreError::UnknownColumn {
                column,
                column_count: self.column_count(),
            })?;
        if size != expected {
            return Err(StoreError::SizeMismatch {
                column,
                expected,
                requested: size,
            });
        }
        Ok(())
    }

    /// Bind an existing column to a typed key, checking the element width.
    pub fn key<T: Element>(&self, column: ColumnId) -> Result<ColumnKey<T>, StoreError> {
        self.check(T::SIZE, column)?;
        Ok(ColumnKey::new(column))
    }
}

/// Incremental, typed construction of a [`ColumnSchema`].
///
/// ```
/// use sparsecol_core::SchemaBuilder;
///
/// let mut builder = SchemaBuilder::new();
/// let position = builder.column::<[u8; 12]>("position").unwrap();
/// let health = builder.column::<f32>("health").unwrap();
/// let schema = builder.build();
/// assert_eq!(schema.column_count(), 2);
/// assert_eq!(schema.column_size(health.id()), Some(4));
/// assert_eq!(schema.column_size(position.id()), Some(12));
/// ```
#[derive(Debug, Default)]
pub struct SchemaBuilder {
    schema: ColumnSchema,
}

impl SchemaBuilder {
    /// Create an empty builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a column holding values of type `T`.
    pub fn column<T: Element>(
        &mut self,
        name: impl Into<String>,
    ) -> Result<ColumnKey<T>, StoreError> {
        let id = self.raw_column(name, T::SIZE)?;
        Ok(ColumnKey::new(id))
    }

    /// Register an untyped column of `element_size` bytes.
    pub fn raw_column(
        &mut self,
        name: impl Into<String>,
        element_size: usize,
    ) -> Result<ColumnId, StoreError> {
        let name = name.into();
        if self.schema.by_name.contains_key(&name) {
            return Err(StoreError::DuplicateColumn { name });
        }
        Ok(self.push(name, element_size))
    }

    /// Number of columns registered so far.
    pub fn len(&self) -> usize {
        self.schema.column_count()
    }

    /// Whether no columns have been registered.
    pub fn is_empty(&self) -> bool {
        self.schema.is_empty()
    }

    /// Seal the schema.
    pub fn build(self) -> ColumnSchema {
        self.schema
    }

    fn push(&mut self, name: String, element_size: usize) -> ColumnId {
        let id = ColumnId(self.schema.columns.len() as u32);
        self.schema.by_name.insert(name.clone(), id);
        self.schema.sizes.push(element_size);
        self.schema.columns.push(ColumnDef { name, element_size });
        id
    }
}

/// A column identifier tied to its element type.
///
/// Obtained from [`SchemaBuilder::column`] or [`ColumnSchema::key`]; the
/// element width was checked against the schema when the key was made.
#[must_use]
pub struct ColumnKey<T> {
    id: ColumnId,
    _marker: PhantomData<fn() -> T>,
}

impl<T: Element> ColumnKey<T> {
    fn new(id: ColumnId) -> Self {
        Self {
            id,
            _marker: PhantomData,
        }
    }

    /// The underlying column.
    pub fn id(&self) -> ColumnId {
        self.id
    }

    /// Element width in bytes.
    pub fn size(&self) -> usize {
        T::SIZE
    }
}

impl<T> Clone for ColumnKey<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for ColumnKey<T> {}

impl<T> PartialEq for ColumnKey<T> {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl<T> Eq for ColumnKey<T> {}

impl<T> fmt::Debug for ColumnKey<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ColumnKey")
            .field("id", &self.id)
            .field("type", &std::any::type_name::<T>())
            .finish()
    }
}
