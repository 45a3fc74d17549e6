use crate::source_type::SourceType;
use serde::Deserialize;

/// Serializable description of a filter, as read from a config file.
///
/// ```json
/// { "tenant": "ten1", "filter": "db1.t1.c1|db1.t2.*", "source_type": "mysql" }
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct FilterConfig {
    #[serde(default)]
    pub tenant: Option<String>,

    pub filter: String,

    /// Schema that replaces any schema named in `filter`.
    #[serde(default)]
    pub branch_db: Option<String>,

    #[serde(default)]
    pub source_type: SourceType,
}
