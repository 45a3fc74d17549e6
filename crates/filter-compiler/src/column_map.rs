use crate::registrar::ColumnEntry;
use serde::Serialize;
use std::collections::BTreeMap;

/// Columns keyed by schema, then table.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ColumnMap(BTreeMap<String, BTreeMap<String, Vec<String>>>);

impl ColumnMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends the entry's columns to `(schema, table)`, creating it if absent.
    pub fn merge(&mut self, entry: ColumnEntry) {
        self.0
            .entry(entry.schema)
            .or_default()
            .entry(entry.table)
            .or_default()
            .extend(entry.columns);
    }

    pub fn get(&self, schema: &str, table: &str) -> Option<&[String]> {
        self.0
            .get(schema)
            .and_then(|tables| tables.get(table))
            .map(Vec::as_slice)
    }

    pub fn tables(&self, schema: &str) -> Option<&BTreeMap<String, Vec<String>>> {
        self.0.get(schema)
    }

    pub fn contains(&self, schema: &str, table: &str) -> bool {
        self.get(schema, table).is_some()
    }

    /// Iterates over `(schema, table, columns)` in key order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str, &[String])> {
        self.0.iter().flat_map(|(schema, tables)| {
            tables
                .iter()
                .map(move |(table, columns)| (schema.as_str(), table.as_str(), columns.as_slice()))
        })
    }

    /// Number of (schema, table) pairs.
    pub fn len(&self) -> usize {
        self.0.values().map(BTreeMap::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn clear(&mut self) {
        self.0.clear();
    }
}
