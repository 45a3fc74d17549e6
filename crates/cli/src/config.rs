use crate::error::CliError;
use filter_compiler::{FilterConfig, SourceType};
use std::path::Path;

/// Command-line values that override or replace a config file.
#[derive(Debug, Default)]
pub struct Overrides {
    pub filter: Option<String>,
    pub source_type: Option<String>,
    pub tenant: Option<String>,
    pub branch_db: Option<String>,
}

pub async fn load_config<P: AsRef<Path>>(path: P) -> Result<FilterConfig, CliError> {
    let source = tokio::fs::read_to_string(path).await?;
    let config = serde_json::from_str(&source)?;
    Ok(config)
}

/// Builds the effective config from an optional file and the command-line flags.
pub async fn resolve_config(
    path: Option<&str>,
    overrides: Overrides,
) -> Result<FilterConfig, CliError> {
    let mut config = match (path, overrides.filter) {
        (Some(path), _) => load_config(path).await?,
        (None, Some(filter)) => FilterConfig {
            filter,
            ..Default::default()
        },
        (None, None) => return Err(CliError::MissingFilter),
    };

    if let Some(source_type) = overrides.source_type {
        config.source_type = source_type.parse::<SourceType>()?;
    }
    if overrides.tenant.is_some() {
        config.tenant = overrides.tenant;
    }
    if overrides.branch_db.is_some() {
        config.branch_db = overrides.branch_db;
    }

    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn config_file(json: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(json.as_bytes()).unwrap();
        file
    }

    #[tokio::test]
    async fn test_load_config_from_file() {
        let file = config_file(r#"{ "filter": "ten1.db1.t1.c1", "source_type": "ob1" }"#);
        let config = load_config(file.path()).await.unwrap();

        assert_eq!(config.filter, "ten1.db1.t1.c1");
        assert_eq!(config.source_type, SourceType::OceanBase1);
    }

    #[tokio::test]
    async fn test_flags_override_file() {
        let file = config_file(r#"{ "filter": "t1;c1", "tenant": "ten1" }"#);
        let path = file.path().to_str().unwrap();
        let overrides = Overrides {
            source_type: Some("oracle".to_string()),
            branch_db: Some("legacydb".to_string()),
            ..Default::default()
        };

        let config = resolve_config(Some(path), overrides).await.unwrap();

        assert_eq!(config.source_type, SourceType::Oracle);
        assert_eq!(config.tenant.as_deref(), Some("ten1"));
        assert_eq!(config.branch_db.as_deref(), Some("legacydb"));
    }

    #[tokio::test]
    async fn test_filter_flag_without_file() {
        let overrides = Overrides {
            filter: Some("db1.t1.*".to_string()),
            ..Default::default()
        };

        let config = resolve_config(None, overrides).await.unwrap();

        assert_eq!(config.filter, "db1.t1.*");
        assert_eq!(config.source_type, SourceType::MySql);
    }

    #[tokio::test]
    async fn test_missing_filter() {
        let err = resolve_config(None, Overrides::default()).await.unwrap_err();
        assert!(matches!(err, CliError::MissingFilter));
    }

    #[tokio::test]
    async fn test_invalid_json() {
        let file = config_file("{ not json");
        let err = load_config(file.path()).await.unwrap_err();
        assert!(matches!(err, CliError::ConfigDeserialize(_)));
    }
}
