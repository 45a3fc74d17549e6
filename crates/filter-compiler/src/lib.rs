//! Compiles compact table/column filter strings into the canonical form requested
//! from the upstream log store, together with the per-table column lookups used
//! to prune incoming row-change events.
//!
//! ```rust
//! use filter_compiler::{DataFilter, SourceType};
//!
//! let mut filter = DataFilter::with_fields("db1.orders;id;amount|db1.users;*");
//! assert!(filter.compile(SourceType::MySql).unwrap());
//! assert_eq!(filter.compiled(), Some("db1.orders|db1.users"));
//! assert!(!filter.is_all_match());
//! ```

pub mod column_map;
pub mod config;
pub mod dialect;
pub mod error;
pub mod filter;
pub mod registrar;
pub mod source_type;
pub mod table_filter;

pub use column_map::ColumnMap;
pub use config::FilterConfig;
pub use error::FilterError;
pub use filter::DataFilter;
pub use source_type::SourceType;
pub use table_filter::TableFilter;

/// Separator placed between table references in a compiled filter.
pub const FILTER_SEPARATOR: &str = "|";

/// Separator placed between the parts of a single table reference.
pub const FILTER_SEPARATOR_INNER: &str = ".";

/// Wildcard used for "any schema" and "all columns".
pub const WILDCARD: &str = "*";
