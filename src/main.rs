use clap::Parser;
use minisqlc::{echo, repl, sql};

const VERSION: &str = env!("CARGO_PKG_VERSION");

#[derive(Parser)]
#[command(
    name = "minisqlc",
    version = VERSION,
    about = "Tiny SQL statement classifier."
)]
struct Cli {
    /// Compile a single statement and exit.
    #[arg(short, long)]
    command: Option<String>,
}

fn main() {
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    if let Some(statement) = cli.command {
        repl::report(&sql::compile(&statement));
        return;
    }

    match repl::start() {
        Ok(_) => (),
        Err(e) => echo!("Error: {}\n", e),
    }
}
