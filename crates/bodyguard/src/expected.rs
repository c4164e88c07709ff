//! Expected shapes: literals and matchers.
//!
//! An expected tree is built by test code right before a check. Leaves are
//! either plain literals compared for equality or [`Matcher`]s that decide for
//! themselves. Containers are matchers too (see [`crate::object`] and
//! [`crate::array`]).

use crate::predicate::Matcher;
use std::collections::BTreeMap;
use std::fmt;
use std::sync::Arc;

/// One node of an expected shape.
#[derive(Debug, Clone)]
pub enum Expected {
    /// Compared by equality against the actual value
    Literal(Literal),
    /// Delegates the decision to a predicate
    Matcher(Arc<dyn Matcher>),
}

impl Expected {
    /// Wrap any matcher, including user-defined ones.
    pub fn matcher(matcher: impl Matcher + 'static) -> Self {
        Expected::Matcher(Arc::new(matcher))
    }

    /// Like `Display`, but quotes string literals so they read well inside containers.
    pub(crate) fn write_nested(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Expected::Literal(literal) => literal.write_nested(f),
            Expected::Matcher(matcher) => matcher.describe(f),
        }
    }
}

impl fmt::Display for Expected {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Expected::Literal(literal) => write!(f, "{literal}"),
            Expected::Matcher(matcher) => matcher.describe(f),
        }
    }
}

/// A concrete JSON value written by the caller.
///
/// Unlike decoded values, literals remember whether a number was written as
/// an integer, which drives the integer-to-float coercion in the engine.
#[derive(Debug, Clone, PartialEq)]
pub enum Literal {
    Null,
    Bool(bool),
    Integer(i128),
    Float(f64),
    String(String),
    Array(Vec<Literal>),
    Object(BTreeMap<String, Literal>),
}

impl Literal {
    /// Declared type name, used in mismatch messages.
    pub fn kind(&self) -> &'static str {
        match self {
            Literal::Null => "null",
            Literal::Bool(_) => "bool",
            Literal::Integer(_) => "int",
            Literal::Float(_) => "float",
            Literal::String(_) => "string",
            Literal::Array(_) => "array",
            Literal::Object(_) => "object",
        }
    }

    fn write_nested(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Literal::String(s) => write!(f, "{s:?}"),
            other => write!(f, "{other}"),
        }
    }
}

impl fmt::Display for Literal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Literal::Null => f.write_str("null"),
            Literal::Bool(b) => write!(f, "{b}"),
            Literal::Integer(n) => write!(f, "{n}"),
            Literal::Float(n) => write!(f, "{n}"),
            Literal::String(s) => f.write_str(s),
            Literal::Array(items) => {
                f.write_str("[")?;
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        f.write_str(",")?;
                    }
                    item.write_nested(f)?;
                }
                f.write_str("]")
            }
            Literal::Object(map) => {
                f.write_str("{")?;
                for (i, (key, item)) in map.iter().enumerate() {
                    if i > 0 {
                        f.write_str(",")?;
                    }
                    write!(f, "{key:?}:")?;
                    item.write_nested(f)?;
                }
                f.write_str("}")
            }
        }
    }
}

impl From<serde_json::Value> for Literal {
    fn from(value: serde_json::Value) -> Self {
        use serde_json::Value as Json;

        match value {
            Json::Null => Literal::Null,
            Json::Bool(b) => Literal::Bool(b),
            Json::Number(n) => {
                if let Some(i) = n.as_i64() {
                    Literal::Integer(i128::from(i))
                } else if let Some(u) = n.as_u64() {
                    Literal::Integer(i128::from(u))
                } else {
                    Literal::Float(n.as_f64().unwrap_or(f64::NAN))
                }
            }
            Json::String(s) => Literal::String(s),
            Json::Array(items) => Literal::Array(items.into_iter().map(Literal::from).collect()),
            Json::Object(map) => {
                Literal::Object(map.into_iter().map(|(k, v)| (k, Literal::from(v))).collect())
            }
        }
    }
}

impl From<Literal> for Expected {
    fn from(literal: Literal) -> Self {
        Expected::Literal(literal)
    }
}

macro_rules! impl_literal_from {
    ($($ty:ty => |$v:ident| $build:expr),* $(,)?) => {
        $(
            impl From<$ty> for Literal {
                fn from($v: $ty) -> Self {
                    $build
                }
            }

            impl From<$ty> for Expected {
                fn from(value: $ty) -> Self {
                    Expected::Literal(Literal::from(value))
                }
            }
        )*
    };
}

impl_literal_from! {
    () => |_v| Literal::Null,
    bool => |v| Literal::Bool(v),
    &str => |v| Literal::String(v.to_string()),
    String => |v| Literal::String(v),
    &String => |v| Literal::String(v.clone()),
    i8 => |v| Literal::Integer(i128::from(v)),
    i16 => |v| Literal::Integer(i128::from(v)),
    i32 => |v| Literal::Integer(i128::from(v)),
    i64 => |v| Literal::Integer(i128::from(v)),
    u8 => |v| Literal::Integer(i128::from(v)),
    u16 => |v| Literal::Integer(i128::from(v)),
    u32 => |v| Literal::Integer(i128::from(v)),
    u64 => |v| Literal::Integer(i128::from(v)),
    isize => |v| Literal::Integer(v as i128),
    usize => |v| Literal::Integer(v as i128),
    f32 => |v| Literal::Float(f64::from(v)),
    f64 => |v| Literal::Float(v),
}

impl From<serde_json::Value> for Expected {
    fn from(value: serde_json::Value) -> Self {
        Expected::Literal(Literal::from(value))
    }
}

/// Partial object shape: `object! { "id" => uuid(), "name" => "jdoe" }`.
#[macro_export]
macro_rules! object {
    ($($key:expr => $value:expr),* $(,)?) => {{
        let fields: ::std::vec::Vec<(::std::string::String, $crate::Expected)> =
            ::std::vec![$((::std::string::String::from($key), $crate::Expected::from($value))),*];
        $crate::object(fields)
    }};
}

/// Strict object shape: same syntax as [`object!`], but extra keys fail.
#[macro_export]
macro_rules! strict_object {
    ($($key:expr => $value:expr),* $(,)?) => {{
        let fields: ::std::vec::Vec<(::std::string::String, $crate::Expected)> =
            ::std::vec![$((::std::string::String::from($key), $crate::Expected::from($value))),*];
        $crate::strict_object(fields)
    }};
}

/// Ordered array shape: `array![1, string(), "three"]`.
#[macro_export]
macro_rules! array {
    ($($value:expr),* $(,)?) => {{
        let elements: ::std::vec::Vec<$crate::Expected> =
            ::std::vec![$($crate::Expected::from($value)),*];
        $crate::array(elements)
    }};
}

/// Unordered array shape: same syntax as [`array!`].
#[macro_export]
macro_rules! unordered_array {
    ($($value:expr),* $(,)?) => {{
        let elements: ::std::vec::Vec<$crate::Expected> =
            ::std::vec![$($crate::Expected::from($value)),*];
        $crate::unordered_array(elements)
    }};
}
