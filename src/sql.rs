pub mod classifier;
pub mod semantics;
pub mod tokenizer;
pub mod tree;

pub use classifier::QueryType;
pub use tree::SyntaxTreeNode;

use tracing::trace;

/// The outcome of one compilation pass.
///
/// `command` and `tree` are `Some` exactly when `query_type` is not
/// `Invalid`. Each pass is stateless; nothing is shared across calls.
#[derive(Debug)]
pub struct CompileResult {
    pub tokens: Vec<String>,
    pub query_type: QueryType,
    pub command: Option<&'static str>,
    pub tree: Option<SyntaxTreeNode>,
    pub message: String,
}

/// Runs the full pipeline over one statement: tokenize, classify, and for
/// recognized statements build the syntax tree and the semantic verdict.
///
/// Malformed SQL is a normal result, never an error: any input yields a
/// `CompileResult`, with invalid statements folded into `QueryType::Invalid`
/// and the short-circuit message below. Note this message differs from the
/// one `semantics::label` produces for invalid input; both are deliberate.
///
/// # Arguments
/// * `query` - The raw SQL statement.
///
/// # Returns
/// The `CompileResult` for this statement.
pub fn compile(query: &str) -> CompileResult {
    let tokens = tokenizer::tokenize(query);
    trace!(count = tokens.len(), "Tokenized statement.");

    let (query_type, command) = classifier::classify(&tokens);
    let command = match command {
        Some(c) => c,
        None => {
            trace!("Statement did not classify.");
            return CompileResult {
                tokens,
                query_type: QueryType::Invalid,
                command: None,
                tree: None,
                message: "Invalid query structure.".to_string(),
            };
        }
    };
    trace!(%query_type, command, "Classified statement.");

    let tree = tree::build(&tokens, command);
    let message = semantics::label(query_type, Some(command));

    CompileResult {
        tokens,
        query_type,
        command: Some(command),
        tree: Some(tree),
        message,
    }
}
