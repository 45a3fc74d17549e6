use tracing::trace;

/// Columns requested for one (schema, table) pair.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnEntry {
    pub schema: String,
    pub table: String,
    pub columns: Vec<String>,
}

/// Computes the entries recorded for `(schema, table)`.
///
/// Returns the entry for the requirement map and the entry for the reflection
/// map, in that order. Column order and duplicates are kept as given.
pub fn compute_registration(
    schema: &str,
    table: &str,
    columns: &[String],
) -> (ColumnEntry, ColumnEntry) {
    trace!("Registering {} column(s) for {schema}.{table}", columns.len());

    let entry = ColumnEntry {
        schema: schema.to_string(),
        table: table.to_string(),
        columns: columns.to_vec(),
    };

    (entry.clone(), entry)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_registration_keeps_order_and_duplicates() {
        let columns = vec!["c2".to_string(), "c1".to_string(), "c2".to_string()];
        let (required, reflected) = compute_registration("db1", "t1", &columns);

        assert_eq!(required, reflected);
        assert_eq!(required.schema, "db1");
        assert_eq!(required.table, "t1");
        assert_eq!(required.columns, columns);
    }
}
