//! Identifier -> label lookup tables built from `(id, value)` records.
//!
//! Dropdowns receive their options as an ordered list of records and need a
//! quick way to go from a selected id back to its label. The table is built
//! with first-seen-wins semantics: once an id is present, whether it came
//! from a seed table or an earlier record, later records with the same id are
//! dropped.
//!
//! Two I/O contracts are offered:
//! - [`build`] takes the seed by value and returns the finished table. The
//!   caller's own copy can never be touched.
//! - [`extend`] writes into a `&mut LookupTable` the caller keeps.

use log::debug;
use serde::{Deserialize, Deserializer, Serialize};
use std::collections::BTreeMap;

/// Mapping from option identifier to its display value.
pub type LookupTable = BTreeMap<String, String>;

/// A selectable option and its human-readable label.
///
/// A missing or `null` id deserializes as `""`, so the record is skipped
/// when the table is built instead of failing the whole input.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Record {
    #[serde(default, deserialize_with = "null_as_empty")]
    pub id: String,
    pub value: String,
}

impl Record {
    pub fn new(id: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            value: value.into(),
        }
    }
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

/// Anything that can be read as an `(id, value)` pair.
pub trait LookupEntry {
    fn lookup_id(&self) -> &str;
    fn lookup_value(&self) -> &str;
}

impl LookupEntry for Record {
    fn lookup_id(&self) -> &str {
        &self.id
    }

    fn lookup_value(&self) -> &str {
        &self.value
    }
}

impl<A: AsRef<str>, B: AsRef<str>> LookupEntry for (A, B) {
    fn lookup_id(&self) -> &str {
        self.0.as_ref()
    }

    fn lookup_value(&self) -> &str {
        self.1.as_ref()
    }
}

impl<T: LookupEntry + ?Sized> LookupEntry for &T {
    fn lookup_id(&self) -> &str {
        (**self).lookup_id()
    }

    fn lookup_value(&self) -> &str {
        (**self).lookup_value()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Outcome {
    Inserted,
    Duplicate,
    MissingId,
}

fn insert_entry<E: LookupEntry>(table: &mut LookupTable, entry: &E) -> Outcome {
    let id = entry.lookup_id();
    if id.is_empty() {
        debug!("skipping record with empty id (value {:?})", entry.lookup_value());
        return Outcome::MissingId;
    }
    if table.contains_key(id) {
        return Outcome::Duplicate;
    }
    table.insert(id.to_owned(), entry.lookup_value().to_owned());
    Outcome::Inserted
}

/// Fold `records` into `seed`, keeping the first value seen for every id.
///
/// Seeded entries always win over records. Records with an empty id are
/// skipped. An empty value is a real value and is kept.
pub fn build<I>(records: I, seed: LookupTable) -> LookupTable
where
    I: IntoIterator,
    I::Item: LookupEntry,
{
    let mut builder = LookupTableBuilder::with_seed(seed);
    builder.insert_all(records);
    builder.finish()
}

/// In-place variant of [`build`]. Returns how many entries were added.
pub fn extend<I>(table: &mut LookupTable, records: I) -> usize
where
    I: IntoIterator,
    I::Item: LookupEntry,
{
    records
        .into_iter()
        .filter(|entry| insert_entry(table, entry) == Outcome::Inserted)
        .count()
}

/// Incremental builder for a [`LookupTable`].
#[derive(Debug, Clone, Default)]
pub struct LookupTableBuilder {
    table: LookupTable,
    skipped: usize,
}

impl LookupTableBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from an existing table whose entries take precedence.
    pub fn with_seed(seed: LookupTable) -> Self {
        Self {
            table: seed,
            skipped: 0,
        }
    }

    /// Insert a single entry. Returns `true` if it was added to the table.
    pub fn insert<E: LookupEntry>(&mut self, entry: E) -> bool {
        match insert_entry(&mut self.table, &entry) {
            Outcome::Inserted => true,
            Outcome::Duplicate => false,
            Outcome::MissingId => {
                self.skipped += 1;
                false
            }
        }
    }

    /// Insert every entry in order. Returns how many were added.
    pub fn insert_all<I>(&mut self, records: I) -> usize
    where
        I: IntoIterator,
        I::Item: LookupEntry,
    {
        records
            .into_iter()
            .filter(|entry| self.insert(entry))
            .count()
    }

    pub fn len(&self) -> usize {
        self.table.len()
    }

    pub fn is_empty(&self) -> bool {
        self.table.is_empty()
    }

    /// Number of records rejected for having an empty id.
    pub fn skipped(&self) -> usize {
        self.skipped
    }

    pub fn finish(self) -> LookupTable {
        self.table
    }
}

impl<E: LookupEntry> Extend<E> for LookupTableBuilder {
    fn extend<I: IntoIterator<Item = E>>(&mut self, iter: I) {
        self.insert_all(iter);
    }
}
