use super::{Compilation, ParseContext, Rejected, Rejection};
use crate::{FILTER_SEPARATOR, FILTER_SEPARATOR_INNER};
use filter_syntax::FilterSpec;

/// Tenant, schema, table and at least one column.
const MIN_TOKENS: usize = 4;

/// Compiles `tenant.schema.table.column[...]` entries.
///
/// Columns are keyed under `tenant.schema`. Every entry keeps its trailing
/// separator in the output. Entries are processed in order, so a rejection
/// carries whatever the entries before the malformed one registered.
pub fn compile(spec: &FilterSpec, ctx: &ParseContext<'_>) -> Result<Compilation, Rejected> {
    let mut compilation = Compilation::new();
    let mut output = String::new();

    for entry in spec.entries() {
        let tokens = entry.tokens();
        if tokens.len() < MIN_TOKENS {
            return Err(Rejected {
                partial: compilation,
                rejection: Rejection::TooFewTokens {
                    entry: entry.raw().to_string(),
                    found: tokens.len(),
                },
            });
        }

        let tenant = tokens[0].as_str();
        let schema = ctx.branch_db.unwrap_or(tokens[1].as_str());
        let table = tokens[2].as_str();
        let qualified_schema = format!("{tenant}{FILTER_SEPARATOR_INNER}{schema}");

        output.push_str(&qualified_schema);
        output.push_str(FILTER_SEPARATOR_INNER);
        output.push_str(table);
        output.push_str(FILTER_SEPARATOR);

        compilation.register(&qualified_schema, table, &tokens[3..]);
    }

    compilation.output = output;
    Ok(compilation)
}
