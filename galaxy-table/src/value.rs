//! Cell values for catalog tables.
//!
//! Catalogs carry a mix of identifiers, photometric floats, and angular
//! coordinates. [`Value`] covers those shapes plus `Null` for cells a
//! right join could not fill. Coordinates may be stored either as bare
//! floats (interpreted as degrees, the survey convention) or as typed
//! [`Angle`] values; [`Value::as_degrees`] normalizes both.

use galaxy_core::Angle;
use serde::{Deserialize, Serialize};

/// A single table cell.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Value {
    /// Integer value.
    Int(i64),
    /// Float value.
    Float(f64),
    /// String value.
    Str(String),
    /// Boolean value.
    Bool(bool),
    /// Unit-tagged angular value.
    Angle(Angle),
    /// Missing value.
    Null,
}

impl Value {
    /// Numeric view of the cell, if it holds a number.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Self::Int(v) => Some(*v as f64),
            Self::Float(v) => Some(*v),
            Self::Angle(a) => Some(a.degrees()),
            _ => None,
        }
    }

    /// The cell as degrees.
    ///
    /// Bare numbers are taken to already be in degrees; [`Value::Angle`]
    /// cells convert explicitly. This is what makes matching insensitive
    /// to whether a catalog tagged its coordinate columns with units.
    pub fn as_degrees(&self) -> Option<f64> {
        self.as_f64()
    }

    pub fn as_int(&self) -> Option<i64> {
        match self {
            Self::Int(v) => Some(*v),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::Str(s) => Some(s),
            _ => None,
        }
    }

    pub fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }
}

impl From<i64> for Value {
    fn from(v: i64) -> Self {
        Self::Int(v)
    }
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Self::Float(v)
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Self::Str(v.to_string())
    }
}

impl From<String> for Value {
    fn from(v: String) -> Self {
        Self::Str(v)
    }
}

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Self::Bool(v)
    }
}

impl From<Angle> for Value {
    fn from(v: Angle) -> Self {
        Self::Angle(v)
    }
}
