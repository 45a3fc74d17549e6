use crate::error::CliError;
use filter_compiler::{ColumnMap, DataFilter};
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct CompileReport<'a> {
    pub compiled: Option<&'a str>,
    pub all_match: bool,
    pub requirements: &'a ColumnMap,
    pub reflection: &'a ColumnMap,
}

impl<'a> CompileReport<'a> {
    pub fn from_filter(filter: &'a DataFilter) -> Self {
        Self {
            compiled: filter.compiled(),
            all_match: filter.is_all_match(),
            requirements: filter.requirement_map(),
            reflection: filter.reflection_map(),
        }
    }
}

fn generate_report_json(filter: &DataFilter) -> Result<String, CliError> {
    let json = serde_json::to_string_pretty(&CompileReport::from_filter(filter))
        .map_err(CliError::JsonSerialize)?;
    Ok(json)
}

pub async fn write_report(filter: &DataFilter, path: String) -> Result<(), CliError> {
    let report_json = generate_report_json(filter)?;
    tokio::fs::write(path, report_json).await?;
    Ok(())
}

pub fn print_report(filter: &DataFilter) -> Result<(), CliError> {
    let report_json = generate_report_json(filter)?;
    println!("{report_json}");
    Ok(())
}
