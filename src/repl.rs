/// The REPL (Read-Eval-Print-Loop) module.
use crate::sql;
use crate::{console, echo, echo_lines, error, errors};
use std::io::{self, BufRead};
use tracing::info;

const NAME: &str = env!("CARGO_PKG_NAME");
const VERSION: &str = env!("CARGO_PKG_VERSION");

const BANNER: &str = r#"
Type an SQL statement to classify it.
Type 'help' or '\h' for help, 'exit' or '\q' to leave.
"#;

const HELP: &str = r#"List of all commands:

?         (\h) Synonym for `help'.
version   (\v) Show the version.
quit      (\q) Quit.

Anything else is compiled: tokens, query type, syntax tree and the
semantic verdict are printed for the statement."#;

/// Start an interactive prompt session on stdin.
pub fn start() -> Result<(), errors::Error> {
    info!("Starting REPL session...");

    echo!("Welcome to the {} {} REPL.\n", NAME, VERSION);
    echo_lines!("{}\n", BANNER);

    let stdin = io::stdin();
    let mut buffer = String::new();

    loop {
        console::print_prompt()?;

        buffer.clear();
        if stdin.lock().read_line(&mut buffer)? == 0 {
            echo!("\nBye\n");
            break;
        }

        match buffer.trim() {
            "" => continue,
            "exit" | "quit" | "\\q" => {
                echo!("Bye\n");
                break;
            }
            "version" | "\\v" => {
                echo!("{} version: {}\n", NAME, VERSION);
            }
            "help" | "\\h" | "\\?" | "?" => {
                echo_lines!("{}\n", HELP);
            }
            statement => {
                report(&sql::compile(statement));
            }
        }
    }

    Ok(())
}

/// Print the four output fields of one compilation pass.
pub fn report(result: &sql::CompileResult) {
    echo_lines!("Tokens: {:?}", result.tokens);
    echo_lines!("Query type: {}", result.query_type);
    if let Some(command) = result.command {
        echo_lines!("Command: {}", command);
    }
    if let Some(tree) = &result.tree {
        echo_lines!("Syntax tree:\n{}", tree);
    }
    if result.query_type == sql::QueryType::Invalid {
        error!("{}\n", result.message);
    } else {
        echo!("{}\n", result.message);
    }
}
