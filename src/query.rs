//! Full-text query construction

use serde::{Deserialize, Serialize};

/// Match semantics declared by search requests.
///
/// Only `All` (boolean AND) is implemented; `Any` and `Exact` are accepted on
/// the wire but currently build the same AND query.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum MatchType {
    #[default]
    All,
    Any,
    Exact,
}

/// Build a boolean AND query for the external full-text engine from already
/// sanitized input: tokens joined with an infix `&`.
///
/// Returns `""` when no tokens survive. The caller must treat that as "no
/// search" and short-circuit to an empty, zero-total result page instead of
/// invoking the engine.
pub fn build_ts_query(sanitized: &str, _match_type: MatchType) -> String {
    sanitized.split_whitespace().collect::<Vec<_>>().join(" & ")
}
