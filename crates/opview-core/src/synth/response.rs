//! Response resolution: canonical return types and response unions.

use std::collections::BTreeSet;

use crate::model::Operation;
use crate::target::Dialect;

/// Union of every candidate response type.
///
/// An explicit aggregate return type on the operation wins verbatim.
/// Otherwise each response contributes its declared type, falling back to
/// the no-content marker, and the candidates are joined as a set so the
/// result is independent of response-declaration order.
pub fn response_union(op: &Operation, dialect: &Dialect) -> String {
    if let Some(aggregate) = aggregate_return_type(op) {
        return aggregate.to_string();
    }
    join_candidates(candidate_types(op, dialect), dialect)
}

/// The single type expression a renderer should declare as the operation's
/// result.
///
/// Same base as [`response_union`], with one tie-break: exactly one
/// success-class response carrying no declared type means "no content",
/// not a union. The dialect's response envelope, when present, wraps the
/// base expression.
pub fn canonical_return_type(op: &Operation, dialect: &Dialect) -> String {
    let base = match aggregate_return_type(op) {
        Some(aggregate) => aggregate.to_string(),
        None => {
            let successes: Vec<_> = op.responses.iter().filter(|r| r.is_success()).collect();
            if successes.len() == 1 && successes[0].declared_type().is_none() {
                dialect.no_content_type.to_string()
            } else {
                join_candidates(candidate_types(op, dialect), dialect)
            }
        }
    };
    match dialect.response_envelope {
        Some(envelope) => format!("{}[{}]", envelope, base),
        None => base,
    }
}

fn aggregate_return_type(op: &Operation) -> Option<&str> {
    op.return_type.as_deref().filter(|s| !s.is_empty())
}

fn candidate_types(op: &Operation, dialect: &Dialect) -> BTreeSet<String> {
    op.responses
        .iter()
        .map(|r| {
            r.declared_type()
                .unwrap_or(dialect.no_content_type)
                .to_string()
        })
        .collect()
}

fn join_candidates(candidates: BTreeSet<String>, dialect: &Dialect) -> String {
    if candidates.is_empty() {
        return dialect.no_content_type.to_string();
    }
    candidates
        .into_iter()
        .collect::<Vec<_>>()
        .join(dialect.union_separator)
}
