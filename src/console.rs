/// Terminal output helpers for the prompt loop.
use crossterm::{
    cursor, execute,
    style::{self, Color, SetForegroundColor},
    ExecutableCommand,
};

use std::io::{self, Write};

const NAME: &str = env!("CARGO_PKG_NAME");

pub fn print_prompt() -> io::Result<()> {
    execute!(std::io::stdout(), cursor::MoveToColumn(0))?;
    io::stdout()
        .execute(style::SetAttribute(style::Attribute::Bold))?
        .execute(SetForegroundColor(Color::Green))?
        .execute(style::Print(format!("{}> ", NAME)))?
        .execute(style::SetAttribute(style::Attribute::Reset))?;
    io::stdout().flush()?;
    Ok(())
}

pub fn echo(s: String) {
    if io::stdout().execute(style::Print(s)).is_ok() {
        let _ = io::stdout().flush();
    }
}

pub fn error(s: String) {
    let _ = io::stdout()
        .execute(SetForegroundColor(Color::Red))
        .and_then(|out| out.execute(style::Print(s)))
        .and_then(|out| out.execute(style::ResetColor));
    let _ = io::stdout().flush();
}

pub fn echo_lines(s: String) {
    for l in s.lines() {
        if io::stdout()
            .execute(style::Print(format!("{}\n", l)))
            .is_err()
        {
            continue;
        }
        let _ = io::stdout().flush();
    }
}

#[macro_export]
macro_rules! echo {
    ($($arg:tt)*) => {
        $crate::console::echo(format!($($arg)*))
    };
}

#[macro_export]
macro_rules! error {
    ($($arg:tt)*) => {
        $crate::console::error(format!($($arg)*))
    };
}

#[macro_export]
macro_rules! echo_lines {
    ($($arg:tt)*) => {
        $crate::console::echo_lines(format!($($arg)*))
    };
}
