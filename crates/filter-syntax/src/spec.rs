use serde::Serialize;

/// One `|`-delimited rule of a filter, describing a single table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Entry {
    /// The entry text exactly as it appeared between separators.
    pub raw: String,
    /// Tokens in input order, trailing empty tokens removed.
    pub tokens: Vec<String>,
}

impl Entry {
    pub fn new(raw: impl Into<String>, tokens: Vec<String>) -> Self {
        Self {
            raw: raw.into(),
            tokens,
        }
    }

    pub fn raw(&self) -> &str {
        &self.raw
    }

    pub fn tokens(&self) -> &[String] {
        &self.tokens
    }

    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }
}

/// A parsed filter: the ordered list of its entries.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct FilterSpec {
    pub entries: Vec<Entry>,
}

impl FilterSpec {
    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Number of entries that carry at least one token.
    pub fn table_count(&self) -> usize {
        self.entries.iter().filter(|e| !e.is_empty()).count()
    }
}
