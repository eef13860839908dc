//! Value enum for dynamic cell values

use std::cmp::Ordering;
use std::fmt;

use chrono::DateTime;
use chrono::Utc;
use rust_decimal::prelude::FromPrimitive;
use rust_decimal::Decimal;
use serde::Deserialize;
use serde::Serialize;

/// A dynamic value extracted from a row for one cell.
///
/// All data access in the engine is mediated by column accessors returning
/// `CellValue`; the engine never inspects row contents directly. Sorting
/// compares these values, and the default cell renderer displays them.
///
/// # Example
///
/// ```
/// use tabulon::CellValue;
///
/// let name = CellValue::from("WETH / USDC");
/// let volume = CellValue::from(1_250_000.5);
/// let empty = CellValue::Null;
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CellValue {
    /// Null/empty value. Sorts before every non-null value.
    Null,
    /// Boolean value.
    Bool(bool),
    /// 64-bit integer.
    Int(i64),
    /// 64-bit floating point.
    Float(f64),
    /// Arbitrary precision decimal.
    Decimal(Decimal),
    /// Text value.
    Text(String),
    /// Date and time with timezone, compared as time values.
    DateTime(DateTime<Utc>),
}

/// Comparison family of a value. Values are mutually comparable only within
/// one family; `Int`, `Float` and `Decimal` share the numeric family.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Family {
    Null,
    Bool,
    Number,
    Text,
    DateTime,
}

impl CellValue {
    /// Returns `true` if this is a null value.
    pub fn is_null(&self) -> bool {
        matches!(self, CellValue::Null)
    }

    /// Returns the type name of this value.
    pub fn type_name(&self) -> &'static str {
        match self {
            CellValue::Null => "null",
            CellValue::Bool(_) => "bool",
            CellValue::Int(_) => "int",
            CellValue::Float(_) => "float",
            CellValue::Decimal(_) => "decimal",
            CellValue::Text(_) => "text",
            CellValue::DateTime(_) => "datetime",
        }
    }

    pub(crate) fn family(&self) -> Family {
        match self {
            CellValue::Null => Family::Null,
            CellValue::Bool(_) => Family::Bool,
            CellValue::Int(_) | CellValue::Float(_) | CellValue::Decimal(_) => Family::Number,
            CellValue::Text(_) => Family::Text,
            CellValue::DateTime(_) => Family::DateTime,
        }
    }

    /// Compares two values, returning `None` when they are not mutually
    /// comparable (different families, or a NaN float).
    ///
    /// `Null` compares equal to itself and before any non-null value, so a
    /// column with missing entries still has a total order. Text comparison
    /// is plain codepoint order, locale-agnostic.
    pub fn try_cmp(&self, other: &CellValue) -> Option<Ordering> {
        match (self, other) {
            (CellValue::Null, CellValue::Null) => Some(Ordering::Equal),
            (CellValue::Null, _) => Some(Ordering::Less),
            (_, CellValue::Null) => Some(Ordering::Greater),

            (CellValue::Bool(a), CellValue::Bool(b)) => Some(a.cmp(b)),

            (CellValue::Int(a), CellValue::Int(b)) => Some(a.cmp(b)),
            (CellValue::Float(a), CellValue::Float(b)) => a.partial_cmp(b),
            (CellValue::Decimal(a), CellValue::Decimal(b)) => Some(a.cmp(b)),
            (CellValue::Int(a), CellValue::Float(b)) => (*a as f64).partial_cmp(b),
            (CellValue::Float(a), CellValue::Int(b)) => a.partial_cmp(&(*b as f64)),
            (CellValue::Int(a), CellValue::Decimal(b)) => Some(Decimal::from(*a).cmp(b)),
            (CellValue::Decimal(a), CellValue::Int(b)) => Some(a.cmp(&Decimal::from(*b))),
            (CellValue::Float(a), CellValue::Decimal(b)) => {
                Decimal::from_f64(*a).map(|a| a.cmp(b))
            }
            (CellValue::Decimal(a), CellValue::Float(b)) => {
                Decimal::from_f64(*b).map(|b| a.cmp(&b))
            }

            (CellValue::Text(a), CellValue::Text(b)) => Some(a.cmp(b)),

            (CellValue::DateTime(a), CellValue::DateTime(b)) => Some(a.cmp(b)),

            _ => None,
        }
    }

    /// Returns `true` if this value breaks total ordering within its own
    /// family (a NaN float).
    pub(crate) fn is_unordered(&self) -> bool {
        matches!(self, CellValue::Float(f) if f.is_nan())
    }
}

impl fmt::Display for CellValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CellValue::Null => Ok(()),
            CellValue::Bool(b) => write!(f, "{b}"),
            CellValue::Int(n) => write!(f, "{n}"),
            CellValue::Float(n) => write!(f, "{n}"),
            CellValue::Decimal(d) => write!(f, "{d}"),
            CellValue::Text(s) => f.write_str(s),
            CellValue::DateTime(dt) => f.write_str(&dt.to_rfc3339()),
        }
    }
}

// =============================================================================
// From implementations
// =============================================================================

impl From<bool> for CellValue {
    fn from(v: bool) -> Self {
        CellValue::Bool(v)
    }
}

impl From<i32> for CellValue {
    fn from(v: i32) -> Self {
        CellValue::Int(v as i64)
    }
}

impl From<i64> for CellValue {
    fn from(v: i64) -> Self {
        CellValue::Int(v)
    }
}

impl From<u32> for CellValue {
    fn from(v: u32) -> Self {
        CellValue::Int(v as i64)
    }
}

impl From<f64> for CellValue {
    fn from(v: f64) -> Self {
        CellValue::Float(v)
    }
}

impl From<Decimal> for CellValue {
    fn from(v: Decimal) -> Self {
        CellValue::Decimal(v)
    }
}

impl From<String> for CellValue {
    fn from(v: String) -> Self {
        CellValue::Text(v)
    }
}

impl From<&str> for CellValue {
    fn from(v: &str) -> Self {
        CellValue::Text(v.to_string())
    }
}

impl From<DateTime<Utc>> for CellValue {
    fn from(v: DateTime<Utc>) -> Self {
        CellValue::DateTime(v)
    }
}

impl<T: Into<CellValue>> From<Option<T>> for CellValue {
    fn from(v: Option<T>) -> Self {
        match v {
            Some(inner) => inner.into(),
            None => CellValue::Null,
        }
    }
}

impl Default for CellValue {
    fn default() -> Self {
        CellValue::Null
    }
}
