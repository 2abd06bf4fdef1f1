//! Typed conversions for property values
//!
//! The document model stores every value as raw text; interpreting that text
//! as a domain type is the caller's concern. These free functions are the
//! supported way to do it: `to_*` parses a stored string, `from_*` renders a
//! typed value into a string suitable for [`set_property`]. The `from_*` and
//! `to_*` pairs round-trip.
//!
//! [`set_property`]: crate::ini::document::Section::set_property

use std::fmt;

/// Errors from interpreting a property value as a typed quantity
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValueError {
    /// The text is not a recognized boolean
    InvalidBool(String),
    /// The text is not a valid integer
    InvalidInt(String),
    /// The text is not a valid floating-point number
    InvalidFloat(String),
    /// The text is not a `x, y, z` triple of numbers
    InvalidVec3(String),
}

impl fmt::Display for ValueError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValueError::InvalidBool(text) => write!(f, "not a boolean value: {:?}", text),
            ValueError::InvalidInt(text) => write!(f, "not an integer value: {:?}", text),
            ValueError::InvalidFloat(text) => write!(f, "not a float value: {:?}", text),
            ValueError::InvalidVec3(text) => write!(f, "not an x, y, z triple: {:?}", text),
        }
    }
}

impl std::error::Error for ValueError {}

/// Accepts `true`/`false` in any case, plus `1`/`0`.
pub fn to_bool(text: &str) -> Result<bool, ValueError> {
    match text.trim().to_ascii_lowercase().as_str() {
        "true" | "1" => Ok(true),
        "false" | "0" => Ok(false),
        _ => Err(ValueError::InvalidBool(text.to_string())),
    }
}

pub fn to_int(text: &str) -> Result<i64, ValueError> {
    text.trim()
        .parse()
        .map_err(|_| ValueError::InvalidInt(text.to_string()))
}

pub fn to_float(text: &str) -> Result<f64, ValueError> {
    text.trim()
        .parse()
        .map_err(|_| ValueError::InvalidFloat(text.to_string()))
}

/// Parses a comma-separated `x, y, z` triple.
pub fn to_vec3(text: &str) -> Result<(f64, f64, f64), ValueError> {
    let invalid = || ValueError::InvalidVec3(text.to_string());
    let mut parts = text.split(',');
    let component = |part: Option<&str>| -> Result<f64, ValueError> {
        part.ok_or_else(invalid)?
            .trim()
            .parse()
            .map_err(|_| invalid())
    };
    let x = component(parts.next())?;
    let y = component(parts.next())?;
    let z = component(parts.next())?;
    if parts.next().is_some() {
        return Err(invalid());
    }
    Ok((x, y, z))
}

pub fn from_bool(value: bool) -> String {
    value.to_string()
}

pub fn from_int(value: i64) -> String {
    value.to_string()
}

pub fn from_float(value: f64) -> String {
    value.to_string()
}

pub fn from_vec3(value: (f64, f64, f64)) -> String {
    format!("{}, {}, {}", value.0, value.1, value.2)
}
