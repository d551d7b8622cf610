//! Options (flags)
//!
//! A [`Flag`] binds a long name and/or a short name to a typed [`Value`].

use crate::error::ValueResult;
use crate::value::{OptionType, Value};

/// An application or command level option
#[derive(Debug, Clone, PartialEq)]
pub struct Flag {
    /// Short name (i.e. 'd')
    short: Option<char>,

    /// Long name (i.e. "debug")
    long: Option<String>,

    /// Description shown in help
    description: String,

    /// Current and default value
    value: Value,

    /// Whether setting this flag requests the help screen
    help: bool,
}

impl Flag {
    /// Create an option backed by any supported Rust type.
    ///
    /// An empty `long` means the option has no long name.
    pub fn new<T: OptionType>(long: &str, short: Option<char>, description: &str, default: T) -> Self {
        Self::with_value(long, short, description, T::into_value(default))
    }

    /// Create an option around an existing value
    pub fn with_value(long: &str, short: Option<char>, description: &str, value: Value) -> Self {
        Flag {
            short,
            long: (!long.is_empty()).then(|| long.to_string()),
            description: description.to_string(),
            value,
            help: false,
        }
    }

    /// Create a string option
    pub fn string(long: &str, short: Option<char>, description: &str, default: &str) -> Self {
        Self::new(long, short, description, default.to_string())
    }

    /// Create a bool option
    pub fn bool(long: &str, short: Option<char>, description: &str, default: bool) -> Self {
        Self::new(long, short, description, default)
    }

    /// Create a 32-bit integer option
    pub fn int32(long: &str, short: Option<char>, description: &str, default: i32) -> Self {
        Self::new(long, short, description, default)
    }

    /// Create a 64-bit integer option
    pub fn int64(long: &str, short: Option<char>, description: &str, default: i64) -> Self {
        Self::new(long, short, description, default)
    }

    /// Create a 32-bit unsigned integer option
    pub fn uint32(long: &str, short: Option<char>, description: &str, default: u32) -> Self {
        Self::new(long, short, description, default)
    }

    /// Create a 64-bit unsigned integer option
    pub fn uint64(long: &str, short: Option<char>, description: &str, default: u64) -> Self {
        Self::new(long, short, description, default)
    }

    /// Create a 32-bit float option
    pub fn float32(long: &str, short: Option<char>, description: &str, default: f32) -> Self {
        Self::new(long, short, description, default)
    }

    /// Create a 64-bit float option
    pub fn float64(long: &str, short: Option<char>, description: &str, default: f64) -> Self {
        Self::new(long, short, description, default)
    }

    /// The `-h/--help` option.
    ///
    /// Once set, a completed parse renders the help for the invoked command.
    pub fn help() -> Self {
        let mut flag = Self::bool("help", Some('h'), "Show the application's help", false);
        flag.help = true;
        flag
    }

    pub fn short(&self) -> Option<char> {
        self.short
    }

    pub fn long(&self) -> Option<&str> {
        self.long.as_deref()
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn value(&self) -> &Value {
        &self.value
    }

    pub fn value_mut(&mut self) -> &mut Value {
        &mut self.value
    }

    /// Whether this is the help option
    pub fn is_help(&self) -> bool {
        self.help
    }

    pub fn is_bool(&self) -> bool {
        self.value.is_bool()
    }

    pub fn is_set(&self) -> bool {
        self.value.is_set()
    }

    /// Effective value (current if set, else default)
    pub fn get<T: OptionType>(&self) -> ValueResult<T> {
        self.value.get()
    }

    /// Parse `text` into the current value
    pub fn set(&mut self, text: &str) -> ValueResult<()> {
        self.value.parse_and_set(text)
    }

    /// Text of the effective value
    pub fn render(&self) -> String {
        self.value.render()
    }

    /// Name as typed on the command line, preferring the long form
    pub fn display_name(&self) -> String {
        match (&self.long, self.short) {
            (Some(long), _) => format!("--{}", long),
            (None, Some(short)) => format!("-{}", short),
            (None, None) => String::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_long_means_none() {
        let flag = Flag::bool("", Some('z'), "Z factor", false);
        assert_eq!(flag.long(), None);
        assert_eq!(flag.short(), Some('z'));
        assert_eq!(flag.display_name(), "-z");
    }

    #[test]
    fn test_display_name_prefers_long() {
        let flag = Flag::string("output", Some('o'), "", "");
        assert_eq!(flag.display_name(), "--output");
    }

    #[test]
    fn test_help_flag() {
        let flag = Flag::help();
        assert!(flag.is_help());
        assert!(flag.is_bool());
        assert_eq!(flag.long(), Some("help"));
        assert_eq!(flag.short(), Some('h'));
        assert!(!flag.get::<bool>().unwrap());
    }

    #[test]
    fn test_set_and_get() {
        let mut flag = Flag::uint32("port", Some('p'), "Port", 80);
        assert_eq!(flag.get::<u32>().unwrap(), 80);
        flag.set("8080").unwrap();
        assert_eq!(flag.get::<u32>().unwrap(), 8080);
        assert!(flag.get::<i32>().is_err());
    }
}
