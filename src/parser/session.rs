//! Argument resolution
//!
//! A [`Session`] walks an argument list left to right against an [`App`],
//! tracking the active command as a path of child indices from the root.
//! Option values and invoked flags are written into the app in place; the
//! path itself lives only as long as the session.

use crate::error::{ParseError, ParseResult};
use crate::help;
use crate::model::{App, Command, Flag};
use crate::parser::token::{self, Token};
use std::io::{self, Write};
use std::process;
use tracing::{debug, trace, warn};

/// Transient state of a single parse
pub struct Session<'a> {
    app: &'a mut App,

    /// Child indices from the root to the active command
    path: Vec<usize>,

    /// Tokens handed to the help renderer when the help option is set
    help_tokens: Vec<String>,
}

/// Options and commands of the active scope
struct ActiveScope<'s> {
    options: &'s mut Vec<Flag>,
    commands: &'s mut Vec<Command>,
}

impl<'a> Session<'a> {
    pub fn new(app: &'a mut App, help_tokens: Vec<String>) -> Self {
        Session {
            app,
            path: Vec::new(),
            help_tokens,
        }
    }

    /// Resolve every argument, then render help if it was requested
    pub fn resolve<S: AsRef<str>>(mut self, args: &[S], auto_help_on_error: bool) -> ParseResult<()> {
        let mut index = 0;

        while index < args.len() {
            let arg = args[index].as_ref();
            let next = args.get(index + 1).map(|s| s.as_ref());

            match self.step(arg, next) {
                Ok(consumed) => index += consumed,
                Err(err) if auto_help_on_error && err.triggers_help() => self.exit_with_help(&err),
                Err(err) => return Err(err),
            }
        }

        if self.app.help_requested() {
            debug!("help option set, rendering help");
            let mut stdout = io::stdout().lock();
            if let Err(err) = help::render_help(&*self.app, &self.help_tokens, &mut stdout) {
                warn!(error = %err, "failed to write help");
            }
        }

        Ok(())
    }

    /// Resolve one token (plus an optional value token); returns how many
    /// arguments were consumed
    fn step(&mut self, arg: &str, next: Option<&str>) -> ParseResult<usize> {
        trace!(arg, depth = self.path.len(), "resolving token");

        match token::classify(arg) {
            Token::ShortCluster(packed) => match self.short_cluster(packed, next)? {
                Some(consumed) => Ok(consumed),
                None => self.long_or_command(arg, next),
            },
            Token::Long => self.long_or_command(arg, next),
            Token::Word => self.command(arg),
        }
    }

    /// `-abc`: each packed character is looked up by short name.
    ///
    /// Returns `None` when no character matched, so the caller can fall back
    /// to long options and commands. Unmatched characters are ignored when
    /// at least one other character matched.
    fn short_cluster(&mut self, packed: &str, next: Option<&str>) -> ParseResult<Option<usize>> {
        let options = self.scope().options;
        let shorts: Vec<char> = packed.chars().collect();
        let mut matched = false;
        let mut consumed_next = false;

        for (position, &short) in shorts.iter().enumerate() {
            let is_last = position + 1 == shorts.len();

            let Some(option) = options.iter_mut().find(|o| o.short() == Some(short)) else {
                trace!(%short, "no option bound to packed short name");
                continue;
            };
            matched = true;

            if option.is_bool() {
                match next.filter(|n| is_last && token::is_bool_literal(n)) {
                    Some(literal) => {
                        assign(option, &literal.to_ascii_lowercase())?;
                        consumed_next = true;
                    }
                    None => assign(option, "true")?,
                }
                continue;
            }

            // Only the last packed character can take the following token
            let value = next
                .filter(|n| is_last && !n.is_empty())
                .ok_or_else(|| ParseError::OptionExpectsValue(format!("-{}", short)))?;
            assign(option, value)?;
            consumed_next = true;
        }

        Ok(matched.then_some(if consumed_next { 2 } else { 1 }))
    }

    fn long_or_command(&mut self, arg: &str, next: Option<&str>) -> ParseResult<usize> {
        let name = token::option_name(arg)?;
        match self.long_option(arg, name, next)? {
            Some(consumed) => Ok(consumed),
            None => self.command(arg),
        }
    }

    /// `--name [value]`; returns `None` if no option has this long name
    fn long_option(&mut self, arg: &str, name: &str, next: Option<&str>) -> ParseResult<Option<usize>> {
        let options = self.scope().options;
        let Some(option) = options.iter_mut().find(|o| o.long() == Some(name)) else {
            return Ok(None);
        };

        if option.is_bool() {
            return match next.filter(|n| token::is_bool_literal(n)) {
                Some(literal) => {
                    assign(option, &literal.to_ascii_lowercase())?;
                    Ok(Some(2))
                }
                None => {
                    assign(option, "true")?;
                    Ok(Some(1))
                }
            };
        }

        match next.filter(|n| !n.is_empty()) {
            Some(value) => {
                assign(option, value)?;
                Ok(Some(2))
            }
            None => Err(ParseError::OptionExpectsValue(arg.to_string())),
        }
    }

    /// Descend into the child command named `arg`
    fn command(&mut self, arg: &str) -> ParseResult<usize> {
        let index = {
            let commands = self.scope().commands;
            let index = commands
                .iter()
                .position(|c| c.name() == arg)
                .ok_or_else(|| ParseError::UnregisteredToken(arg.to_string()))?;
            commands[index].mark_invoked();
            index
        };

        self.path.push(index);
        debug!(command = arg, depth = self.path.len(), "command invoked");
        Ok(1)
    }

    fn scope(&mut self) -> ActiveScope<'_> {
        let (options, commands) = self.app.parts_mut();
        descend(options, commands, &self.path)
    }

    /// Print the root help and terminate with status 1
    fn exit_with_help(&self, err: &ParseError) -> ! {
        debug!(error = %err, "parse failed, printing help and exiting");
        let no_tokens: [&str; 0] = [];
        let mut stdout = io::stdout().lock();
        let _ = help::render_help(&*self.app, &no_tokens, &mut stdout);
        let _ = stdout.flush();
        process::exit(1);
    }
}

fn descend<'s>(
    options: &'s mut Vec<Flag>,
    commands: &'s mut Vec<Command>,
    path: &[usize],
) -> ActiveScope<'s> {
    match path.split_first() {
        None => ActiveScope { options, commands },
        Some((&index, rest)) => {
            let (options, commands) = commands[index].parts_mut();
            descend(options, commands, rest)
        }
    }
}

fn assign(option: &mut Flag, text: &str) -> ParseResult<()> {
    option
        .set(text)
        .map_err(|source| ParseError::Conversion {
            option: option.display_name(),
            source,
        })?;
    trace!(option = %option.display_name(), value = text, "option set");
    Ok(())
}
