use crate::{
    WILDCARD,
    registrar::{ColumnEntry, compute_registration},
};
use thiserror::Error;

pub mod normal;
pub mod ob10;

/// Format convention governing how tokens map to schema, table and columns.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Dialect {
    /// `[schema.]table[.column...]`, used by every source except OceanBase 1.0.
    Normal,
    /// `tenant.schema.table.column[...]`, used by OceanBase 1.0.
    Ob10,
}

/// Values passed down from the filter that influence parsing.
#[derive(Debug, Clone, Copy, Default)]
pub struct ParseContext<'a> {
    pub tenant: Option<&'a str>,
    pub branch_db: Option<&'a str>,
}

/// Result of running a dialect over a parsed filter.
///
/// Holds everything the filter needs to merge into its own state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Compilation {
    pub output: String,
    pub requirements: Vec<ColumnEntry>,
    pub reflections: Vec<ColumnEntry>,
    /// False if any column token seen was not the wildcard.
    pub all_match: bool,
}

impl Compilation {
    pub fn new() -> Self {
        Self {
            output: String::new(),
            requirements: Vec::new(),
            reflections: Vec::new(),
            all_match: true,
        }
    }

    fn register(&mut self, schema: &str, table: &str, columns: &[String]) {
        // No trimming: " *" is a column name, not a wildcard.
        if columns.iter().any(|column| column != WILDCARD) {
            self.all_match = false;
        }

        let (required, reflected) = compute_registration(schema, table, columns);
        self.requirements.push(required);
        self.reflections.push(reflected);
    }
}

impl Default for Compilation {
    fn default() -> Self {
        Self::new()
    }
}

/// Why an OceanBase 1.0 filter could not be compiled.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Rejection {
    #[error("no source filter was supplied")]
    MissingSource,

    #[error("entry '{entry}' has {found} token(s), tenant, schema, table and a column are required")]
    TooFewTokens { entry: String, found: usize },
}

/// A rejected compilation together with the work done before the bad entry.
///
/// `partial.output` is never published, but its column entries and all-match
/// contribution still apply.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rejected {
    pub partial: Compilation,
    pub rejection: Rejection,
}
