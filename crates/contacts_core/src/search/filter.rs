//! Free-text contact filter compiled to SQLite `LIKE` predicates.
//!
//! # Invariants
//! - A blank filter matches every contact.
//! - Every whitespace-separated term must match (`AND` semantics).
//! - A term matches when it occurs in `first`, `last` or `"first last"`,
//!   case-insensitively for ASCII.
//! - `%`, `_` and `\` in user text match literally.

use rusqlite::types::Value;

const LIKE_ESCAPE: char = '\\';

/// Compiled filter ready to be appended to a `WHERE` clause.
#[derive(Debug, Clone, PartialEq)]
pub struct FilterClause {
    /// SQL fragment starting with ` AND`, or empty for match-all.
    pub sql: String,
    /// Positional values for every `?` in `sql`, in order.
    pub bind_values: Vec<Value>,
}

impl FilterClause {
    pub fn is_match_all(&self) -> bool {
        self.sql.is_empty()
    }
}

/// Compiles an optional user filter into a SQL predicate.
pub fn compile_filter(filter: Option<&str>) -> FilterClause {
    let terms = filter.map(split_terms).unwrap_or_default();

    let mut sql = String::new();
    let mut bind_values = Vec::with_capacity(terms.len());
    for term in terms {
        sql.push_str(" AND ((first || ' ' || last) LIKE ? ESCAPE '\\')");
        bind_values.push(Value::Text(like_pattern(term)));
    }

    FilterClause { sql, bind_values }
}

fn split_terms(filter: &str) -> Vec<&str> {
    filter.split_whitespace().collect()
}

/// Wraps a literal term as a `%term%` pattern with wildcards escaped.
fn like_pattern(term: &str) -> String {
    let mut pattern = String::with_capacity(term.len() + 2);
    pattern.push('%');
    for ch in term.chars() {
        if matches!(ch, '%' | '_' | LIKE_ESCAPE) {
            pattern.push(LIKE_ESCAPE);
        }
        pattern.push(ch);
    }
    pattern.push('%');
    pattern
}

#[cfg(test)]
mod tests {
    use super::{compile_filter, like_pattern};
    use rusqlite::types::Value;

    #[test]
    fn none_and_blank_filters_match_all() {
        assert!(compile_filter(None).is_match_all());
        assert!(compile_filter(Some("")).is_match_all());
        assert!(compile_filter(Some("  \t ")).is_match_all());
    }

    #[test]
    fn each_term_adds_one_predicate() {
        let clause = compile_filter(Some(" al  smi "));
        assert_eq!(clause.sql.matches('?').count(), 2);
        assert_eq!(
            clause.bind_values,
            vec![
                Value::Text("%al%".to_string()),
                Value::Text("%smi%".to_string())
            ]
        );
    }

    #[test]
    fn like_wildcards_are_escaped() {
        assert_eq!(like_pattern("50%_off\\"), "%50\\%\\_off\\\\%");
    }
}
