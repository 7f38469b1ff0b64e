use super::classifier::{QueryType, DDL_COMMANDS, DML_COMMANDS};

/// Maps a classification to its human-readable verdict.
///
/// Pure lookup: a command that is a member of the set matching the query
/// type yields `"Valid {query_type} command: {command}."`, anything else
/// yields the generic syntax-error message. Through the normal pipeline the
/// mismatch branch never fires, since the classifier only pairs a command
/// with its own category.
pub fn label(query_type: QueryType, command: Option<&str>) -> String {
    match (query_type, command) {
        (QueryType::Dml, Some(c)) if DML_COMMANDS.contains(&c.to_uppercase().as_str()) => {
            format!("Valid {} command: {}.", query_type, c)
        }
        (QueryType::Ddl, Some(c)) if DDL_COMMANDS.contains(&c.to_uppercase().as_str()) => {
            format!("Valid {} command: {}.", query_type, c)
        }
        _ => "Syntax Error: Invalid query structure.".to_string(),
    }
}
