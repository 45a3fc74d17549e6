use crate::{
    error::SyntaxError,
    spec::{Entry, FilterSpec},
};
use pest::{Parser, iterators::Pair};
use pest_derive::Parser;
use tracing::trace;

#[cfg(test)]
mod tests;

#[derive(Parser)]
#[grammar = "grammar/filter.pest"]
pub struct FilterParser;

/// Splits a filter string into entries and tokens.
///
/// Empty trailing entries (`"a|b|"`) and empty trailing tokens (`"t1;c1;"`) are
/// dropped, while leading and interior empties are kept in place. Input without
/// any `|` is always one entry, so `""` is a single entry with no tokens while
/// `"|"` has no entries at all.
pub fn parse(input: &str) -> Result<FilterSpec, SyntaxError> {
    let pairs = FilterParser::parse(Rule::filter, input).map_err(SyntaxError::from_pest_error)?;

    let mut entries = pairs
        .flat_map(|filter| filter.into_inner())
        .filter(|pair| pair.as_rule() == Rule::entry)
        .map(parse_entry)
        .collect::<Vec<_>>();

    if entries.len() > 1 {
        while entries.last().is_some_and(|entry| entry.raw.is_empty()) {
            entries.pop();
        }
    }

    trace!("Parsed filter into {} entries", entries.len());
    Ok(FilterSpec { entries })
}

fn parse_entry(pair: Pair<Rule>) -> Entry {
    let raw = pair.as_str();

    let mut tokens = pair
        .into_inner()
        .filter(|token| token.as_rule() == Rule::token)
        .map(|token| token.as_str().to_string())
        .collect::<Vec<_>>();

    while tokens.last().is_some_and(|token| token.is_empty()) {
        tokens.pop();
    }

    Entry::new(raw, tokens)
}
