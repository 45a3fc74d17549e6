use super::{Compilation, ParseContext};
use crate::{FILTER_SEPARATOR, FILTER_SEPARATOR_INNER, WILDCARD};
use filter_syntax::FilterSpec;

/// Compiles `[schema.]table[.column...]` entries.
///
/// Entries with one or two tokens name a table and an optional column; the
/// schema falls back to the branch db or the wildcard. Longer entries start
/// with the schema. Entries without tokens are skipped.
pub fn compile(spec: &FilterSpec, ctx: &ParseContext<'_>) -> Compilation {
    let mut compilation = Compilation::new();
    let mut output = String::new();

    for entry in spec.entries() {
        let tokens = entry.tokens();
        let Some(first) = tokens.first() else {
            continue;
        };

        let (schema, table, columns) = if tokens.len() <= 2 {
            (ctx.branch_db.unwrap_or(WILDCARD), first.as_str(), &tokens[1..])
        } else {
            (tokens[0].as_str(), tokens[1].as_str(), &tokens[2..])
        };

        if let Some(tenant) = ctx.tenant {
            output.push_str(tenant);
            output.push_str(FILTER_SEPARATOR_INNER);
        }
        output.push_str(schema);
        output.push_str(FILTER_SEPARATOR_INNER);
        output.push_str(table);
        output.push_str(FILTER_SEPARATOR);

        if !columns.is_empty() {
            compilation.register(schema, table, columns);
        }
    }

    if let Some(stripped) = output.strip_suffix(FILTER_SEPARATOR) {
        let len = stripped.len();
        output.truncate(len);
    }

    compilation.output = output;
    compilation
}
