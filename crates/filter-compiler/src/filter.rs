use crate::{
    WILDCARD,
    column_map::ColumnMap,
    config::FilterConfig,
    dialect::{Compilation, Dialect, ParseContext, Rejected, Rejection, normal, ob10},
    error::FilterError,
    source_type::SourceType,
};
use std::fmt;
use tracing::{debug, warn};


/// Table/column filter for a change-data-capture stream.
///
/// Fragments are accumulated first and compiled once the source type is known.
/// The two dialects compile differently:
/// - the normal dialect parses the accumulated fragments once and caches the
///   result, so later appends and branch db changes are ignored;
/// - the OceanBase 1.0 dialect re-parses the fragment given at construction on
///   every call and replaces the requirement map, while the reflection map is
///   only ever appended to.
#[derive(Debug, Clone)]
pub struct DataFilter {
    /// Schema override kept for callers still using one schema per stream.
    branch_db: Option<String>,
    /// Normal-dialect output, set on first successful compile.
    filter_info: Option<String>,
    /// Fragment supplied at construction, used by the OceanBase 1.0 dialect.
    source_filter: Option<String>,
    /// Filter sent to the store.
    compiled: Option<String>,
    buffer: String,
    requirements: ColumnMap,
    reflection: ColumnMap,
    /// Cleared once any requested column is not `*`.
    all_match: bool,
    tenant: Option<String>,
}

impl DataFilter {
    /// Creates an empty filter, to be filled with [`DataFilter::add_tables_fields`].
    ///
    /// A filter built this way has no source fragment and cannot be compiled
    /// for OceanBase 1.0.
    pub fn new() -> Self {
        Self {
            branch_db: None,
            filter_info: None,
            source_filter: None,
            compiled: None,
            buffer: String::new(),
            requirements: ColumnMap::new(),
            reflection: ColumnMap::new(),
            all_match: true,
            tenant: None,
        }
    }

    /// Creates a filter from a formatted string such as
    /// `"table1;field1;field2|table2;field1"`.
    pub fn with_fields(table_fields: impl Into<String>) -> Self {
        let table_fields = table_fields.into();
        Self {
            buffer: table_fields.clone(),
            source_filter: Some(table_fields),
            ..Self::new()
        }
    }

    /// Like [`DataFilter::with_fields`], prefixing every normal-dialect table
    /// reference with `tenant`.
    pub fn with_tenant(tenant: impl Into<String>, table_fields: impl Into<String>) -> Self {
        Self {
            tenant: Some(tenant.into()),
            ..Self::with_fields(table_fields)
        }
    }

    pub fn from_config(config: &FilterConfig) -> Self {
        let mut filter = match &config.tenant {
            Some(tenant) => Self::with_tenant(tenant, config.filter.as_str()),
            None => Self::with_fields(config.filter.as_str()),
        };
        if let Some(db) = &config.branch_db {
            filter.set_branch_db(db);
        }
        filter
    }

    /// Sets the schema that replaces any schema taken from the input.
    pub fn set_branch_db(&mut self, db: impl Into<String>) {
        self.branch_db = Some(db.into());
    }

    /// Appends more filter text. It must use the same format as the rest of
    /// the filter; no separator is inserted.
    pub fn add_tables_fields(&mut self, table_fields: &str) {
        self.buffer.push_str(table_fields);
    }

    /// Compiles the filter for `source_type`.
    ///
    /// Returns `Ok(false)` when OceanBase 1.0 input is missing or malformed. The
    /// compiled string is then left as it was, but a malformed filter still
    /// resets the requirement map and keeps the columns of the entries before
    /// the malformed one.
    pub fn compile(&mut self, source_type: SourceType) -> Result<bool, FilterError> {
        let dialect = source_type.dialect();
        let compiled = match dialect {
            Dialect::Normal => self.compile_normal()?,
            Dialect::Ob10 => self.compile_ob10()?,
        };

        debug!(
            "Compiled {:?} filter for {}: success={}, all_match={}",
            dialect, source_type, compiled, self.all_match
        );
        Ok(compiled)
    }

    /// Resolves `source_type` by name, then compiles.
    pub fn compile_for(&mut self, source_type: &str) -> Result<bool, FilterError> {
        let source_type = source_type.parse::<SourceType>()?;
        self.compile(source_type)
    }

    fn compile_normal(&mut self) -> Result<bool, FilterError> {
        if self.filter_info.is_some() {
            return Ok(true);
        }

        let spec = filter_syntax::parse(&self.buffer)?;
        let compilation = normal::compile(&spec, &self.context());

        self.filter_info = Some(compilation.output.clone());
        self.apply(compilation);
        Ok(true)
    }

    fn compile_ob10(&mut self) -> Result<bool, FilterError> {
        let Some(source) = self.source_filter.as_deref() else {
            return Ok(reject(Rejection::MissingSource));
        };

        let spec = filter_syntax::parse(source)?;
        self.requirements.clear();

        let result = ob10::compile(&spec, &self.context());
        match result {
            Ok(compilation) => {
                self.apply(compilation);
                Ok(true)
            }
            Err(Rejected { partial, rejection }) => {
                self.merge(partial);
                Ok(reject(rejection))
            }
        }
    }

    fn context(&self) -> ParseContext<'_> {
        ParseContext {
            tenant: self.tenant.as_deref(),
            branch_db: self.branch_db.as_deref(),
        }
    }

    fn apply(&mut self, compilation: Compilation) {
        let output = self.merge(compilation);
        self.compiled = Some(output);
    }

    /// Folds columns and the all-match flag into the filter, returning the output.
    fn merge(&mut self, compilation: Compilation) -> String {
        self.all_match &= compilation.all_match;
        for entry in compilation.requirements {
            self.requirements.merge(entry);
        }
        for entry in compilation.reflections {
            self.reflection.merge(entry);
        }
        compilation.output
    }

    /// The filter to send to the store, `None` until a compile succeeds.
    pub fn compiled(&self) -> Option<&str> {
        self.compiled.as_deref()
    }

    /// True while every requested column is `*`, so rows need no column pruning.
    pub fn is_all_match(&self) -> bool {
        self.all_match
    }

    pub fn requirement_map(&self) -> &ColumnMap {
        &self.requirements
    }

    pub fn reflection_map(&self) -> &ColumnMap {
        &self.reflection
    }

    pub fn tenant(&self) -> Option<&str> {
        self.tenant.as_deref()
    }

    pub fn branch_db(&self) -> Option<&str> {
        self.branch_db.as_deref()
    }

    /// Columns required for `schema.table`, falling back to the `*` schema.
    pub fn required_columns(&self, schema: &str, table: &str) -> Option<&[String]> {
        self.requirements
            .get(schema, table)
            .or_else(|| self.requirements.get(WILDCARD, table))
    }

    /// Whether `column` of an incoming row for `schema.table` must be kept.
    ///
    /// Tables without a recorded column list keep every column; which tables
    /// are streamed at all is decided by the store from the compiled filter.
    pub fn is_column_required(&self, schema: &str, table: &str, column: &str) -> bool {
        if self.all_match {
            return true;
        }

        match self.required_columns(schema, table) {
            Some(columns) => columns.iter().any(|c| c == WILDCARD || c == column),
            None => true,
        }
    }
}

fn reject(rejection: Rejection) -> bool {
    warn!("Rejected OceanBase 1.0 filter: {}", rejection);
    false
}

impl Default for DataFilter {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for DataFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.compiled().unwrap_or_default())
    }
}
