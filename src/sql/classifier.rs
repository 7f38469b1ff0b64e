use lazy_static::lazy_static;
use regex::Regex;
use std::collections::HashMap;
use std::fmt;

/// Commands that read or modify table contents.
pub const DML_COMMANDS: [&str; 5] = ["SELECT", "INSERT", "UPDATE", "DELETE", "MERGE"];

/// Commands that alter schema objects.
pub const DDL_COMMANDS: [&str; 5] = ["CREATE", "ALTER", "DROP", "TRUNCATE", "RENAME"];

lazy_static! {
    // Shape patterns: case-insensitive, dot matches newlines, anchored at the
    // start only. Trailing text after a valid shape is accepted.
    static ref DML_PATTERNS: HashMap<&'static str, Regex> = HashMap::from([
        ("SELECT", Regex::new(r"(?is)^SELECT\s+.*\s+FROM\s+.*").unwrap()),
        ("INSERT", Regex::new(r"(?is)^INSERT\s+INTO\s+.*").unwrap()),
        ("UPDATE", Regex::new(r"(?is)^UPDATE\s+.*\s+SET\s+.*").unwrap()),
        ("DELETE", Regex::new(r"(?is)^DELETE\s+FROM\s+.*").unwrap()),
        ("MERGE", Regex::new(r"(?is)^MERGE\s+INTO\s+.*").unwrap()),
    ]);
    static ref DDL_PATTERNS: HashMap<&'static str, Regex> = HashMap::from([
        ("CREATE", Regex::new(r"(?is)^CREATE\s+(TABLE|DATABASE|INDEX|VIEW)\s+.*").unwrap()),
        ("ALTER", Regex::new(r"(?is)^ALTER\s+(TABLE|DATABASE|INDEX|VIEW)\s+.*").unwrap()),
        ("DROP", Regex::new(r"(?is)^DROP\s+(TABLE|DATABASE|INDEX|VIEW)\s+.*").unwrap()),
        ("TRUNCATE", Regex::new(r"(?is)^TRUNCATE\s+TABLE\s+.*").unwrap()),
        ("RENAME", Regex::new(r"(?is)^RENAME\s+(TABLE|DATABASE|INDEX|VIEW)\s+.*").unwrap()),
    ]);
}

/// Coarse category of an SQL statement.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QueryType {
    Dml,
    Ddl,
    Invalid,
}

impl fmt::Display for QueryType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            QueryType::Dml => write!(f, "DML"),
            QueryType::Ddl => write!(f, "DDL"),
            QueryType::Invalid => write!(f, "INVALID"),
        }
    }
}

/// Assigns a coarse category and validates the statement shape.
///
/// The first token, upper-cased, selects the candidate command. An
/// unrecognized first token (or no tokens at all) is `Invalid` with no
/// pattern check. Otherwise the tokens are re-joined with single spaces and
/// tested against the command's shape pattern; a non-match also yields
/// `Invalid`. The command is `Some` exactly when the category is not
/// `Invalid`, and is always a member of the set matching the category.
///
/// # Arguments
/// * `tokens` - The tokenized statement.
///
/// # Returns
/// The query type and the recognized command, if any.
pub fn classify(tokens: &[String]) -> (QueryType, Option<&'static str>) {
    let candidate = match tokens.first() {
        Some(t) => t.to_uppercase(),
        None => return (QueryType::Invalid, None),
    };

    let (query_type, command) = if let Some(c) = DML_COMMANDS.iter().find(|c| **c == candidate) {
        (QueryType::Dml, *c)
    } else if let Some(c) = DDL_COMMANDS.iter().find(|c| **c == candidate) {
        (QueryType::Ddl, *c)
    } else {
        return (QueryType::Invalid, None);
    };

    // Lossy relative to the original text: adjacent punctuation gains
    // surrounding spaces. The patterns only care about keyword order.
    let reconstructed = tokens.join(" ");
    let patterns = match query_type {
        QueryType::Dml => &*DML_PATTERNS,
        _ => &*DDL_PATTERNS,
    };

    match patterns.get(command) {
        Some(pattern) if pattern.is_match(&reconstructed) => (query_type, Some(command)),
        _ => (QueryType::Invalid, None),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sql::tokenizer::tokenize;

    #[test]
    fn test_classify_select() {
        let tokens = tokenize("SELECT * FROM employees;");
        assert_eq!(classify(&tokens), (QueryType::Dml, Some("SELECT")));
    }

    #[test]
    fn test_classify_is_case_insensitive() {
        let tokens = tokenize("select name from users");
        assert_eq!(classify(&tokens), (QueryType::Dml, Some("SELECT")));
    }

    #[test]
    fn test_classify_ddl_commands() {
        for sql in [
            "CREATE TABLE users (id INT)",
            "ALTER TABLE users ADD email",
            "DROP VIEW stale_report",
            "TRUNCATE TABLE logs",
            "RENAME TABLE old TO new",
        ] {
            let tokens = tokenize(sql);
            let (query_type, command) = classify(&tokens);
            assert_eq!(query_type, QueryType::Ddl, "{}", sql);
            assert!(command.is_some(), "{}", sql);
        }
    }

    #[test]
    fn test_empty_tokens_are_invalid() {
        assert_eq!(classify(&[]), (QueryType::Invalid, None));
    }

    #[test]
    fn test_unknown_first_token_is_invalid() {
        let tokens = tokenize("FOO BAR");
        assert_eq!(classify(&tokens), (QueryType::Invalid, None));
    }

    #[test]
    fn test_known_command_bad_shape_is_invalid() {
        // SELECT without a FROM clause fails the shape pattern.
        let tokens = tokenize("SELECT name");
        assert_eq!(classify(&tokens), (QueryType::Invalid, None));

        let tokens = tokenize("TRUNCATE logs");
        assert_eq!(classify(&tokens), (QueryType::Invalid, None));
    }

    #[test]
    fn test_pattern_has_no_end_anchor() {
        // Trailing text after a valid shape still matches.
        let tokens = tokenize("DELETE FROM users WHERE 1 = 1 nonsense trailing");
        assert_eq!(classify(&tokens), (QueryType::Dml, Some("DELETE")));
    }

    #[test]
    fn test_from_anywhere_satisfies_select_shape() {
        // "SELECT FROM x FROM" style inputs are accepted; the shape check is
        // keyword presence, not grammar.
        let tokens = tokenize("SELECT x FROM y");
        assert_eq!(classify(&tokens), (QueryType::Dml, Some("SELECT")));
    }

    #[test]
    fn test_multiline_statement_matches() {
        let tokens = tokenize("SELECT id,\n  name\nFROM users");
        assert_eq!(classify(&tokens), (QueryType::Dml, Some("SELECT")));
    }

    #[test]
    fn test_command_sets_are_disjoint() {
        for c in DML_COMMANDS {
            assert!(!DDL_COMMANDS.contains(&c));
        }
    }
}
