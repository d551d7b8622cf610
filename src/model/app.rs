//! The root scope
//!
//! An [`App`] owns the application-level options and the top-level commands.
//! It is the entry point for parsing and for rendering help.

use crate::error::ParseResult;
use crate::help;
use crate::model::{Command, Flag, Scope};
use crate::parser::Session;
use std::env;
use std::io::{self, Write};

/// Application declaration: metadata, root options and commands
#[derive(Debug, Clone, Default, PartialEq)]
pub struct App {
    /// Application name
    name: String,

    /// Application version
    version: String,

    /// Application description
    description: String,

    /// Application-level options
    options: Vec<Flag>,

    /// Available commands
    commands: Vec<Command>,
}

impl App {
    /// Create an app with a name and a description
    pub fn new(name: impl Into<String>, description: impl Into<String>) -> Self {
        App {
            name: name.into(),
            description: description.into(),
            ..Default::default()
        }
    }

    /// Set the version shown in the help header
    pub fn with_version(mut self, version: impl Into<String>) -> Self {
        self.version = version.into();
        self
    }

    /// Add root options
    pub fn with_options(mut self, options: impl IntoIterator<Item = Flag>) -> Self {
        self.options.extend(options);
        self
    }

    /// Add root commands
    pub fn with_commands(mut self, commands: impl IntoIterator<Item = Command>) -> Self {
        self.commands.extend(commands);
        self
    }

    /// Register the `-h/--help` option at the root
    pub fn with_help(mut self) -> Self {
        self.options.push(Flag::help());
        self
    }

    pub fn add_option(&mut self, option: Flag) {
        self.options.push(option);
    }

    pub fn add_command(&mut self, command: Command) {
        self.commands.push(command);
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn version(&self) -> &str {
        &self.version
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    /// Root options and commands, borrowed together
    pub(crate) fn parts_mut(&mut self) -> (&mut Vec<Flag>, &mut Vec<Command>) {
        (&mut self.options, &mut self.commands)
    }

    /// Every invoked command from the root downward
    pub fn invoked_chain(&self) -> Vec<&Command> {
        let mut chain = Vec::new();
        let mut current = self.invoked_command();
        while let Some(command) = current {
            chain.push(command);
            current = command.invoked_command();
        }
        chain
    }

    /// Follow a path of command names from the root
    pub fn command_path(&self, path: &[&str]) -> Option<&Command> {
        let (first, rest) = path.split_first()?;
        let mut command = self.command(first)?;
        for name in rest {
            command = command.command(name)?;
        }
        Some(command)
    }

    /// Whether a help option along the invoked chain was set to true
    pub fn help_requested(&self) -> bool {
        let chain = self.invoked_chain();
        self.options
            .iter()
            .chain(chain.iter().flat_map(|c| c.options().iter()))
            .any(|o| o.is_help() && o.get::<bool>().unwrap_or(false))
    }

    /// Forget every parsed value and invoked flag
    pub fn reset(&mut self) {
        for option in &mut self.options {
            option.value_mut().reset();
        }
        for command in &mut self.commands {
            command.reset();
        }
    }

    /// Resolve an argument list (without the program name) against this app.
    ///
    /// With `auto_help_on_error`, unknown tokens, malformed option names and
    /// missing option values print the root help to stdout and exit the
    /// process with status 1. Conversion errors are always returned.
    pub fn resolve<S: AsRef<str>>(&mut self, args: &[S], auto_help_on_error: bool) -> ParseResult<()> {
        let help_tokens = args.iter().map(|a| a.as_ref().to_string()).collect();
        Session::new(self, help_tokens).resolve(args, auto_help_on_error)
    }

    /// Resolve the process arguments.
    ///
    /// The first element is the program name; it is skipped for parsing but
    /// kept for help rendering.
    pub fn parse(&mut self, auto_help_on_error: bool) -> ParseResult<()> {
        let argv: Vec<String> = env::args().collect();
        let args = argv.get(1..).unwrap_or_default();
        Session::new(self, argv.clone()).resolve(args, auto_help_on_error)
    }

    /// Render help for the command chain named in `tokens`
    pub fn render_help<S: AsRef<str>, W: Write>(&self, tokens: &[S], out: &mut W) -> io::Result<()> {
        help::render_help(self, tokens, out)
    }

    /// Render help into a string
    pub fn help_text<S: AsRef<str>>(&self, tokens: &[S]) -> String {
        let mut buffer = Vec::new();
        // Writing into a Vec cannot fail
        let _ = self.render_help(tokens, &mut buffer);
        String::from_utf8_lossy(&buffer).into_owned()
    }

    /// Print help for the process arguments to stdout
    pub fn print_help(&self) -> io::Result<()> {
        let argv: Vec<String> = env::args().collect();
        self.render_help(&argv, &mut io::stdout().lock())
    }
}

impl Scope for App {
    fn options(&self) -> &[Flag] {
        &self.options
    }

    fn commands(&self) -> &[Command] {
        &self.commands
    }
}
