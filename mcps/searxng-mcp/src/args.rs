//! Lenient extraction of tool arguments
//!
//! Agents send loosely typed JSON. [`Arg`] keeps "absent", "present with the
//! wrong type" and "present" apart so handlers can ignore a mistyped optional
//! argument instead of failing the whole call.

use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// One decoded tool argument
#[derive(Debug, Clone, PartialEq)]
pub enum Arg<T> {
    /// Not present in the argument map
    Absent,
    /// Present, but not of the expected JSON type (including `null`)
    Mismatch,
    /// Present with the expected type
    Present(T),
}

impl<T> Default for Arg<T> {
    fn default() -> Self {
        Arg::Absent
    }
}

impl<T> Arg<T> {
    /// The value, treating a type mismatch as absent
    pub fn ok(self) -> Option<T> {
        match self {
            Arg::Present(value) => Some(value),
            Arg::Absent | Arg::Mismatch => None,
        }
    }

    pub fn is_mismatch(&self) -> bool {
        matches!(self, Arg::Mismatch)
    }
}

impl Arg<String> {
    /// Non-empty string value
    pub fn non_empty(self) -> Option<String> {
        self.ok().filter(|s| !s.is_empty())
    }

    /// Comma-separated list, trimmed, empty elements dropped
    ///
    /// `None` when nothing usable is left, so callers fall back to defaults.
    pub fn list(self) -> Option<Vec<String>> {
        let items: Vec<String> = self
            .ok()?
            .split(',')
            .map(str::trim)
            .filter(|item| !item.is_empty())
            .map(str::to_string)
            .collect();

        (!items.is_empty()).then_some(items)
    }
}

impl Arg<f64> {
    /// Number truncated toward zero
    pub fn truncated(self) -> Option<i64> {
        self.ok().map(|n| n.trunc() as i64)
    }
}

/// JSON types an [`Arg`] can hold
pub trait ArgValue: Sized {
    fn from_json(value: Value) -> Option<Self>;
}

impl ArgValue for String {
    fn from_json(value: Value) -> Option<Self> {
        match value {
            Value::String(s) => Some(s),
            _ => None,
        }
    }
}

impl ArgValue for f64 {
    fn from_json(value: Value) -> Option<Self> {
        value.as_f64()
    }
}

impl<'de, T: ArgValue> Deserialize<'de> for Arg<T> {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = Value::deserialize(deserializer)?;
        Ok(T::from_json(value).map_or(Arg::Mismatch, Arg::Present))
    }
}
