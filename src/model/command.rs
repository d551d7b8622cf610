//! Command nodes

use crate::model::{Flag, Scope};

/// A command, or sub-command, called by the user
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Command {
    /// Name matched against command tokens
    name: String,

    /// Description shown in help
    description: String,

    /// Options bound to the command
    options: Vec<Flag>,

    /// Sub-commands
    commands: Vec<Command>,

    /// Set once the parser matched this command
    invoked: bool,
}

impl Command {
    /// Create a command without options or sub-commands
    pub fn new(name: impl Into<String>, description: impl Into<String>) -> Self {
        Command {
            name: name.into(),
            description: description.into(),
            ..Default::default()
        }
    }

    /// Add options
    pub fn with_options(mut self, options: impl IntoIterator<Item = Flag>) -> Self {
        self.options.extend(options);
        self
    }

    /// Add sub-commands
    pub fn with_commands(mut self, commands: impl IntoIterator<Item = Command>) -> Self {
        self.commands.extend(commands);
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

    pub fn description(&self) -> &str {
        &self.description
    }

    /// Whether the parser matched this command
    pub fn is_invoked(&self) -> bool {
        self.invoked
    }

    /// Options and sub-commands, borrowed together
    pub(crate) fn parts_mut(&mut self) -> (&mut Vec<Flag>, &mut Vec<Command>) {
        (&mut self.options, &mut self.commands)
    }

    pub(crate) fn mark_invoked(&mut self) {
        self.invoked = true;
    }

    /// Clear option values and invoked flags in this subtree
    pub(crate) fn reset(&mut self) {
        self.invoked = false;
        for option in &mut self.options {
            option.value_mut().reset();
        }
        for command in &mut self.commands {
            command.reset();
        }
    }
}

impl Scope for Command {
    fn options(&self) -> &[Flag] {
        &self.options
    }

    fn commands(&self) -> &[Command] {
        &self.commands
    }
}
