use crate::{dialect::Dialect, error::FilterError};
use serde::Deserialize;
use std::{fmt, str::FromStr};

/// Type of the database the change stream originates from.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Deserialize)]
#[serde(try_from = "String")]
pub enum SourceType {
    #[default]
    MySql,
    OceanBase,
    HBase,
    Oracle,
    /// Legacy OceanBase 1.0, whose filters carry the tenant in every entry.
    OceanBase1,
    Unknown,
}

impl SourceType {
    /// The filter dialect used for this source.
    pub fn dialect(&self) -> Dialect {
        match self {
            SourceType::OceanBase1 => Dialect::Ob10,
            _ => Dialect::Normal,
        }
    }
}

impl FromStr for SourceType {
    type Err = FilterError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "mysql" => Ok(SourceType::MySql),
            "oceanbase" | "ob" => Ok(SourceType::OceanBase),
            "hbase" => Ok(SourceType::HBase),
            "oracle" => Ok(SourceType::Oracle),
            "oceanbase1" | "ob1" | "ob1.0" => Ok(SourceType::OceanBase1),
            "unknown" => Ok(SourceType::Unknown),
            other => Err(FilterError::UnsupportedSourceType(other.to_string())),
        }
    }
}

impl TryFrom<String> for SourceType {
    type Error = FilterError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl fmt::Display for SourceType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SourceType::MySql => write!(f, "mysql"),
            SourceType::OceanBase => write!(f, "oceanbase"),
            SourceType::HBase => write!(f, "hbase"),
            SourceType::Oracle => write!(f, "oracle"),
            SourceType::OceanBase1 => write!(f, "oceanbase1"),
            SourceType::Unknown => write!(f, "unknown"),
        }
    }
}
