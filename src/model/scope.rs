//! Lookups shared by the root scope and command nodes

use crate::model::{Command, Flag};

/// A level of the command tree: a set of options plus child commands
pub trait Scope {
    /// Options bound to this level
    fn options(&self) -> &[Flag];

    /// Child commands of this level
    fn commands(&self) -> &[Command];

    /// Find an option by long name
    fn option(&self, long: &str) -> Option<&Flag> {
        self.options().iter().find(|o| o.long() == Some(long))
    }

    /// Find an option by short name
    fn option_by_short(&self, short: char) -> Option<&Flag> {
        self.options().iter().find(|o| o.short() == Some(short))
    }

    /// Find a child command by name
    fn command(&self, name: &str) -> Option<&Command> {
        self.commands().iter().find(|c| c.name() == name)
    }

    /// The first child command that was invoked, if any
    fn invoked_command(&self) -> Option<&Command> {
        self.commands().iter().find(|c| c.is_invoked())
    }
}
