//! Typed option values
//!
//! A [`Value`] is a closed sum over the eight supported kinds. Each variant
//! wraps a [`Slot`] holding the current value (if one was assigned) and the
//! default value.

use crate::error::{ValueError, ValueResult};
use crate::value::ValueKind;
use std::num::{ParseFloatError, ParseIntError};
use std::str::FromStr;

/// Current and default value of a single option
#[derive(Debug, Clone, PartialEq)]
pub struct Slot<T> {
    current: Option<T>,
    default: T,
}

impl<T> Slot<T> {
    /// Create an unset slot with a default value
    pub fn new(default: T) -> Self {
        Slot {
            current: None,
            default,
        }
    }

    /// The assigned value, if any
    pub fn current(&self) -> Option<&T> {
        self.current.as_ref()
    }

    /// The default value
    pub fn default_value(&self) -> &T {
        &self.default
    }

    /// The assigned value, falling back to the default
    pub fn effective(&self) -> &T {
        self.current.as_ref().unwrap_or(&self.default)
    }

    /// Assign a value
    pub fn set(&mut self, value: T) {
        self.current = Some(value);
    }

    /// Whether a value was assigned
    pub fn is_set(&self) -> bool {
        self.current.is_some()
    }

    /// Forget the assigned value
    pub fn reset(&mut self) {
        self.current = None;
    }

    /// Turn the assigned value (if any) into the default
    fn promote(&mut self) {
        if let Some(value) = self.current.take() {
            self.default = value;
        }
    }

    fn pick(&self, default_only: bool) -> &T {
        if default_only {
            &self.default
        } else {
            self.effective()
        }
    }
}

/// A typed option value
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    String(Slot<String>),
    Bool(Slot<bool>),
    Int32(Slot<i32>),
    Int64(Slot<i64>),
    UInt32(Slot<u32>),
    UInt64(Slot<u64>),
    Float32(Slot<f32>),
    Float64(Slot<f64>),
}

impl Value {
    /// An unset value of the given kind whose default is the kind's zero
    pub fn zero(kind: ValueKind) -> Self {
        match kind {
            ValueKind::String => Value::String(Slot::new(String::new())),
            ValueKind::Bool => Value::Bool(Slot::new(false)),
            ValueKind::Int32 => Value::Int32(Slot::new(0)),
            ValueKind::Int64 => Value::Int64(Slot::new(0)),
            ValueKind::UInt32 => Value::UInt32(Slot::new(0)),
            ValueKind::UInt64 => Value::UInt64(Slot::new(0)),
            ValueKind::Float32 => Value::Float32(Slot::new(0.0)),
            ValueKind::Float64 => Value::Float64(Slot::new(0.0)),
        }
    }

    /// An unset value whose default is parsed from text
    pub fn with_default_text(kind: ValueKind, text: &str) -> ValueResult<Self> {
        let mut value = Value::zero(kind);
        value.parse_and_set(text)?;
        match &mut value {
            Value::String(slot) => slot.promote(),
            Value::Bool(slot) => slot.promote(),
            Value::Int32(slot) => slot.promote(),
            Value::Int64(slot) => slot.promote(),
            Value::UInt32(slot) => slot.promote(),
            Value::UInt64(slot) => slot.promote(),
            Value::Float32(slot) => slot.promote(),
            Value::Float64(slot) => slot.promote(),
        }
        Ok(value)
    }

    /// The kind of this value
    pub fn kind(&self) -> ValueKind {
        match self {
            Value::String(_) => ValueKind::String,
            Value::Bool(_) => ValueKind::Bool,
            Value::Int32(_) => ValueKind::Int32,
            Value::Int64(_) => ValueKind::Int64,
            Value::UInt32(_) => ValueKind::UInt32,
            Value::UInt64(_) => ValueKind::UInt64,
            Value::Float32(_) => ValueKind::Float32,
            Value::Float64(_) => ValueKind::Float64,
        }
    }

    /// Whether this is a boolean value (eligible for look-ahead)
    pub fn is_bool(&self) -> bool {
        matches!(self, Value::Bool(_))
    }

    /// Parse `text` into the current value.
    ///
    /// Booleans never fail: the empty string and any casing of `true` are
    /// true, everything else is false. The match is exact, so `untrue` is false.
    pub fn parse_and_set(&mut self, text: &str) -> ValueResult<()> {
        let kind = self.kind();
        match self {
            Value::String(slot) => slot.set(text.to_string()),
            Value::Bool(slot) => slot.set(text.is_empty() || text.eq_ignore_ascii_case("true")),
            Value::Int32(slot) => slot.set(parse_integer(text, kind)?),
            Value::Int64(slot) => slot.set(parse_integer(text, kind)?),
            Value::UInt32(slot) => slot.set(parse_integer(text, kind)?),
            Value::UInt64(slot) => slot.set(parse_integer(text, kind)?),
            Value::Float32(slot) => slot.set(parse_float(text, kind)?),
            Value::Float64(slot) => slot.set(parse_float(text, kind)?),
        }
        Ok(())
    }

    /// Whether a value was assigned.
    ///
    /// Strings count as set only when the assigned text is non-empty.
    pub fn is_set(&self) -> bool {
        match self {
            Value::String(slot) => slot.current().is_some_and(|s| !s.is_empty()),
            Value::Bool(slot) => slot.is_set(),
            Value::Int32(slot) => slot.is_set(),
            Value::Int64(slot) => slot.is_set(),
            Value::UInt32(slot) => slot.is_set(),
            Value::UInt64(slot) => slot.is_set(),
            Value::Float32(slot) => slot.is_set(),
            Value::Float64(slot) => slot.is_set(),
        }
    }

    /// Forget any assigned value
    pub fn reset(&mut self) {
        match self {
            Value::String(slot) => slot.reset(),
            Value::Bool(slot) => slot.reset(),
            Value::Int32(slot) => slot.reset(),
            Value::Int64(slot) => slot.reset(),
            Value::UInt32(slot) => slot.reset(),
            Value::UInt64(slot) => slot.reset(),
            Value::Float32(slot) => slot.reset(),
            Value::Float64(slot) => slot.reset(),
        }
    }

    /// Text of the current value, or of the default when unset
    pub fn render(&self) -> String {
        self.show(false)
    }

    /// Text of the default value
    pub fn render_default(&self) -> String {
        self.show(true)
    }

    /// Effective value as a concrete Rust type
    pub fn get<T: OptionType>(&self) -> ValueResult<T> {
        T::from_value(self).ok_or(ValueError::TypeMismatch {
            expected: T::KIND,
            actual: self.kind(),
        })
    }

    fn show(&self, default_only: bool) -> String {
        match self {
            Value::String(slot) => effective_string(slot, default_only).to_string(),
            Value::Bool(slot) => slot.pick(default_only).to_string(),
            Value::Int32(slot) => slot.pick(default_only).to_string(),
            Value::Int64(slot) => slot.pick(default_only).to_string(),
            Value::UInt32(slot) => slot.pick(default_only).to_string(),
            Value::UInt64(slot) => slot.pick(default_only).to_string(),
            Value::Float32(slot) => format!("{:.6}", slot.pick(default_only)),
            Value::Float64(slot) => format!("{:.6}", slot.pick(default_only)),
        }
    }
}

fn effective_string(slot: &Slot<String>, default_only: bool) -> &str {
    match slot.current() {
        Some(current) if !default_only && !current.is_empty() => current,
        _ => slot.default_value(),
    }
}

fn parse_integer<T>(text: &str, kind: ValueKind) -> ValueResult<T>
where
    T: FromStr<Err = ParseIntError>,
{
    text.parse().map_err(|source| ValueError::InvalidInteger {
        kind,
        text: text.to_string(),
        source,
    })
}

fn parse_float<T>(text: &str, kind: ValueKind) -> ValueResult<T>
where
    T: FromStr<Err = ParseFloatError>,
{
    text.parse().map_err(|source| ValueError::InvalidFloat {
        kind,
        text: text.to_string(),
        source,
    })
}

/// Rust types that can back an option value
pub trait OptionType: Sized {
    /// The value kind this type maps to
    const KIND: ValueKind;

    /// Wrap a default into an unset [`Value`]
    fn into_value(default: Self) -> Value;

    /// Read the effective value, or `None` on a kind mismatch
    fn from_value(value: &Value) -> Option<Self>;
}

impl OptionType for String {
    const KIND: ValueKind = ValueKind::String;

    fn into_value(default: Self) -> Value {
        Value::String(Slot::new(default))
    }

    fn from_value(value: &Value) -> Option<Self> {
        match value {
            Value::String(slot) => Some(effective_string(slot, false).to_string()),
            _ => None,
        }
    }
}

macro_rules! copy_option_type {
    ($ty:ty, $variant:ident) => {
        impl OptionType for $ty {
            const KIND: ValueKind = ValueKind::$variant;

            fn into_value(default: Self) -> Value {
                Value::$variant(Slot::new(default))
            }

            fn from_value(value: &Value) -> Option<Self> {
                match value {
                    Value::$variant(slot) => Some(*slot.effective()),
                    _ => None,
                }
            }
        }
    };
}

copy_option_type!(bool, Bool);
copy_option_type!(i32, Int32);
copy_option_type!(i64, Int64);
copy_option_type!(u32, UInt32);
copy_option_type!(u64, UInt64);
copy_option_type!(f32, Float32);
copy_option_type!(f64, Float64);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_string_value() {
        let mut value = String::into_value("default".to_string());
        assert_eq!(value.render(), "default");

        value.parse_and_set("abc").unwrap();
        assert_eq!(value.render(), "abc");
        assert_eq!(value.render_default(), "default");
        assert_eq!(value.get::<String>().unwrap(), "abc");
    }

    #[test]
    fn test_empty_string_falls_back_to_default() {
        let mut value = String::into_value("default".to_string());
        value.parse_and_set("").unwrap();
        assert_eq!(value.render(), "default");
        assert!(!value.is_set());
    }

    #[test]
    fn test_bool_parse_never_fails() {
        let mut value = bool::into_value(false);
        for (text, expected) in [
            ("", true),
            ("true", true),
            ("TRUE", true),
            ("True", true),
            ("false", false),
            ("yes", false),
            ("0", false),
            ("untrue", false),
            ("trueish", false),
        ] {
            value.parse_and_set(text).unwrap();
            assert_eq!(value.get::<bool>().unwrap(), expected, "text: {:?}", text);
            assert!(value.is_set());
        }
    }

    #[test]
    fn test_bool_set_to_zero_value_is_distinguished() {
        let mut value = bool::into_value(true);
        assert!(!value.is_set());
        value.parse_and_set("false").unwrap();
        assert!(value.is_set());
        assert_eq!(value.render(), "false");
        assert_eq!(value.render_default(), "true");
    }

    #[test]
    fn test_integers() {
        let mut value = i32::into_value(7);
        assert_eq!(value.render(), "7");
        value.parse_and_set("-42").unwrap();
        assert_eq!(value.render(), "-42");
        assert_eq!(value.get::<i32>().unwrap(), -42);

        let mut value = i64::into_value(0);
        value.parse_and_set("9000000000").unwrap();
        assert_eq!(value.get::<i64>().unwrap(), 9_000_000_000);

        let mut value = u64::into_value(1);
        value.parse_and_set("18446744073709551615").unwrap();
        assert_eq!(value.render(), "18446744073709551615");
    }

    #[test]
    fn test_integer_conversion_errors() {
        let mut value = u32::into_value(3);
        let err = value.parse_and_set("-1").unwrap_err();
        assert!(matches!(
            err,
            ValueError::InvalidInteger {
                kind: ValueKind::UInt32,
                ..
            }
        ));
        assert!(!value.is_set());
        assert_eq!(value.render(), "3");

        let mut value = i32::into_value(0);
        assert!(value.parse_and_set("4294967296").is_err());
        assert!(value.parse_and_set("12abc").is_err());
    }

    #[test]
    fn test_float_render_uses_six_decimals() {
        let mut value = f32::into_value(1.5);
        assert_eq!(value.render(), "1.500000");
        value.parse_and_set("3.25").unwrap();
        assert_eq!(value.render(), "3.250000");

        let mut value = f64::into_value(0.0);
        assert_eq!(value.render_default(), "0.000000");
        value.parse_and_set("2.718281828").unwrap();
        assert_eq!(value.render(), "2.718282");
    }

    #[test]
    fn test_float64_keeps_double_precision() {
        let mut value = f64::into_value(0.0);
        value.parse_and_set("0.1").unwrap();
        assert_eq!(value.get::<f64>().unwrap(), 0.1_f64);
    }

    #[test]
    fn test_float_conversion_error() {
        let mut value = f32::into_value(0.0);
        let err = value.parse_and_set("pi").unwrap_err();
        assert!(matches!(err, ValueError::InvalidFloat { .. }));
    }

    #[test]
    fn test_type_mismatch() {
        let value = bool::into_value(false);
        let err = value.get::<String>().unwrap_err();
        assert!(matches!(
            err,
            ValueError::TypeMismatch {
                expected: ValueKind::String,
                actual: ValueKind::Bool,
            }
        ));
    }

    #[test]
    fn test_with_default_text() {
        let value = Value::with_default_text(ValueKind::UInt64, "8080").unwrap();
        assert!(!value.is_set());
        assert_eq!(value.render_default(), "8080");
        assert_eq!(value.get::<u64>().unwrap(), 8080);

        assert!(Value::with_default_text(ValueKind::Int32, "many").is_err());
    }

    #[test]
    fn test_reset() {
        let mut value = i64::into_value(5);
        value.parse_and_set("6").unwrap();
        value.reset();
        assert!(!value.is_set());
        assert_eq!(value.render(), "5");
    }
}
