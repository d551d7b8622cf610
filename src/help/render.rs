//! Help screen rendering

use crate::help::{wrap, TabTable, DESCRIPTION_WIDTH, ENTRY_WIDTH};
use crate::model::{App, Command, Flag, Scope};
use crate::parser::is_option;
use std::io::{self, Write};
use tracing::trace;

/// Render the help screen for the command chain named in `tokens`.
///
/// Option-shaped tokens are skipped, and so are tokens that do not name a
/// child of the command reached so far (such as the program name).
pub fn render_help<S, W>(app: &App, tokens: &[S], out: &mut W) -> io::Result<()>
where
    S: AsRef<str>,
    W: Write,
{
    let mut chain: Vec<&str> = Vec::new();
    let mut last: Option<&Command> = None;
    let mut options = app.options();
    let mut commands = app.commands();

    for token in tokens {
        let token = token.as_ref();
        if is_option(token) {
            continue;
        }

        if let Some(command) = commands.iter().find(|c| c.name() == token) {
            chain.push(command.name());
            last = Some(command);
            options = command.options();
            commands = command.commands();
        }
    }
    trace!(chain = %chain.join(" "), "rendering help");

    if !app.name().is_empty() {
        write!(out, "{}", app.name())?;
        if !app.version().is_empty() {
            write!(out, " version {}", app.version())?;
        }
        writeln!(out)?;
        writeln!(out)?;
    }

    if !app.description().is_empty() {
        for line in wrap(app.description(), DESCRIPTION_WIDTH) {
            writeln!(out, "{}", line)?;
        }
    }

    if let Some(command) = last {
        writeln!(out)?;
        writeln!(out, "Details for command: {}", chain.join(" "))?;
        writeln!(out)?;
        writeln!(out, "{}", wrap(command.description(), DESCRIPTION_WIDTH).join("\n"))?;
    }

    let mut table = TabTable::new();

    if !options.is_empty() {
        writeln!(out)?;
        writeln!(out, "Available options.")?;
        writeln!(out)?;

        for option in options {
            table.push(&option_row(option));
        }
        table.flush(out)?;
    }

    if !commands.is_empty() {
        writeln!(out)?;
        writeln!(out, "Available commands.")?;
        writeln!(out, "Use --help {{command}} {{subcommand}} for details.")?;
        writeln!(out)?;

        for command in commands {
            let lines = wrap(command.description(), ENTRY_WIDTH);
            table.push(&format!("- {}\t{}\n", command.name(), lines.join("\n\t")));
        }
        table.flush(out)?;
    }

    Ok(())
}

/// `--long \t -s \t description (default value: "x")`
fn option_row(option: &Flag) -> String {
    let default = option.value().render_default();
    let description = if default.is_empty() {
        option.description().to_string()
    } else {
        format!("{} (default value: \"{}\")", option.description(), default)
    };

    let long = option.long().map(|l| format!("--{}", l)).unwrap_or_default();
    let short = option.short().map(|s| format!("-{}", s)).unwrap_or_default();
    let lines = wrap(&description, ENTRY_WIDTH);

    format!("{}\t{}\t{}\n", long, short, lines.join("\n\t\t"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_option_row_with_default() {
        let flag = Flag::string("str", Some('s'), "String option", "abc");
        assert_eq!(
            option_row(&flag),
            "--str\t-s\tString option (default value: \"abc\")\n"
        );
    }

    #[test]
    fn test_option_row_hides_empty_string_default() {
        let flag = Flag::string("str", None, "String option", "");
        assert_eq!(option_row(&flag), "--str\t\tString option\n");
    }

    #[test]
    fn test_option_row_keeps_numeric_zero_default() {
        let flag = Flag::int32("", Some('n'), "Count", 0);
        assert_eq!(option_row(&flag), "\t-n\tCount (default value: \"0\")\n");
    }

    #[test]
    fn test_option_row_wraps_long_descriptions() {
        let flag = Flag::bool(
            "dry",
            Some('d'),
            "Test the build environment and every configured toolchain, but do not compile",
            false,
        );
        assert_eq!(
            option_row(&flag),
            "--dry\t-d\tTest the build environment and every configured toolchain, but do\n\
             \t\tnot compile (default value: \"false\")\n"
        );
    }
}
