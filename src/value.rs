use serde_derive::{Deserialize, Serialize};
use std::fmt;

/// The value of a text input: either a string or a number.
#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
#[serde(untagged)]
pub enum InputValue {
    Number(f64),
    Text(String),
}

impl InputValue {
    /// Empty strings, zero and NaN are falsy; everything else is truthy.
    pub fn is_truthy(&self) -> bool {
        match self {
            Self::Text(text) => !text.is_empty(),
            Self::Number(number) => *number != 0.0 && !number.is_nan(),
        }
    }
}

/// Truthiness of an optional value, absent values being falsy.
pub fn is_truthy(value: Option<&InputValue>) -> bool {
    value.map_or(false, InputValue::is_truthy)
}

impl fmt::Display for InputValue {
    fn fmt(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Self::Text(text) => formatter.write_str(text),
            Self::Number(number) if number.fract() == 0.0 && number.abs() < 1e15 => {
                write!(formatter, "{}", *number as i64)
            }
            Self::Number(number) => write!(formatter, "{}", number),
        }
    }
}

impl From<&str> for InputValue {
    fn from(text: &str) -> Self {
        Self::Text(text.to_owned())
    }
}

impl From<String> for InputValue {
    fn from(text: String) -> Self {
        Self::Text(text)
    }
}

impl From<f64> for InputValue {
    fn from(number: f64) -> Self {
        Self::Number(number)
    }
}

impl From<i32> for InputValue {
    fn from(number: i32) -> Self {
        Self::Number(number.into())
    }
}
