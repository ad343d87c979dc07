//! Range queries.

use std::cmp::Ordering;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{Result, SynparseError};
use crate::query::field_prefix;

/// Numeric type of a field, used to interpret range bounds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NumericType {
    /// 64-bit signed integer.
    Integer,
    /// 64-bit floating point.
    Float,
}

impl NumericType {
    /// Parse a bound for this numeric type.
    pub fn parse(&self, text: &str) -> Result<NumericValue> {
        let trimmed = text.trim();
        match self {
            NumericType::Integer => trimmed.parse::<i64>().map(NumericValue::Integer).map_err(|_| {
                SynparseError::ambiguous_range(format!("'{text}' is not an integer"))
            }),
            NumericType::Float => trimmed.parse::<f64>().map(NumericValue::Float).map_err(|_| {
                SynparseError::ambiguous_range(format!("'{text}' is not a number"))
            }),
        }
    }
}

/// A numeric range bound.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum NumericValue {
    Integer(i64),
    Float(f64),
}

impl NumericValue {
    fn as_f64(&self) -> f64 {
        match *self {
            NumericValue::Integer(v) => v as f64,
            NumericValue::Float(v) => v,
        }
    }
}

impl PartialOrd for NumericValue {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        match (self, other) {
            (NumericValue::Integer(a), NumericValue::Integer(b)) => a.partial_cmp(b),
            _ => self.as_f64().partial_cmp(&other.as_f64()),
        }
    }
}

impl fmt::Display for NumericValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NumericValue::Integer(v) => write!(f, "{v}"),
            NumericValue::Float(v) => write!(f, "{v:?}"),
        }
    }
}

fn write_range<L: fmt::Display, U: fmt::Display>(
    prefix: String,
    lower: Option<L>,
    upper: Option<U>,
    include_lower: bool,
    include_upper: bool,
) -> String {
    let lower = lower.map_or_else(|| "*".to_string(), |v| quote_bound(&v.to_string()));
    let upper = upper.map_or_else(|| "*".to_string(), |v| quote_bound(&v.to_string()));
    format!(
        "{prefix}{}{lower} TO {upper}{}",
        if include_lower { '[' } else { '{' },
        if include_upper { ']' } else { '}' }
    )
}

fn quote_bound(bound: &str) -> String {
    if bound.is_empty() || bound.chars().any(|c| c.is_whitespace() || matches!(c, ']' | '}')) {
        format!("\"{bound}\"")
    } else {
        bound.to_string()
    }
}

/// A lexicographic range over terms. A `None` bound is open.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TermRangeQuery {
    field: String,
    lower: Option<String>,
    upper: Option<String>,
    include_lower: bool,
    include_upper: bool,
}

impl TermRangeQuery {
    /// Create a term range query.
    pub fn new<S: Into<String>>(
        field: S,
        lower: Option<String>,
        upper: Option<String>,
        include_lower: bool,
        include_upper: bool,
    ) -> Self {
        TermRangeQuery {
            field: field.into(),
            lower,
            upper,
            include_lower,
            include_upper,
        }
    }

    /// Get the field name.
    pub fn field(&self) -> &str {
        &self.field
    }

    /// Get the lower bound.
    pub fn lower(&self) -> Option<&str> {
        self.lower.as_deref()
    }

    /// Get the upper bound.
    pub fn upper(&self) -> Option<&str> {
        self.upper.as_deref()
    }

    /// Whether the lower bound is inclusive.
    pub fn include_lower(&self) -> bool {
        self.include_lower
    }

    /// Whether the upper bound is inclusive.
    pub fn include_upper(&self) -> bool {
        self.include_upper
    }

    /// Render as `field:[a TO b]`, with `*` for open bounds.
    pub fn to_string_with_field(&self, default_field: &str) -> String {
        write_range(
            field_prefix(&self.field, default_field),
            self.lower.as_deref(),
            self.upper.as_deref(),
            self.include_lower,
            self.include_upper,
        )
    }
}

/// A numeric range. A `None` bound is open.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NumericRangeQuery {
    field: String,
    numeric_type: NumericType,
    lower: Option<NumericValue>,
    upper: Option<NumericValue>,
    include_lower: bool,
    include_upper: bool,
}

impl NumericRangeQuery {
    /// Create a numeric range query.
    ///
    /// Fails with an ambiguous range error when `lower > upper`.
    pub fn new<S: Into<String>>(
        field: S,
        numeric_type: NumericType,
        lower: Option<NumericValue>,
        upper: Option<NumericValue>,
        include_lower: bool,
        include_upper: bool,
    ) -> Result<Self> {
        if let (Some(lo), Some(hi)) = (lower, upper) {
            if lo > hi {
                return Err(SynparseError::ambiguous_range(format!(
                    "lower bound {lo} is greater than upper bound {hi}"
                )));
            }
        }

        Ok(NumericRangeQuery {
            field: field.into(),
            numeric_type,
            lower,
            upper,
            include_lower,
            include_upper,
        })
    }

    /// Get the field name.
    pub fn field(&self) -> &str {
        &self.field
    }

    /// Get the numeric type.
    pub fn numeric_type(&self) -> NumericType {
        self.numeric_type
    }

    /// Get the lower bound.
    pub fn lower(&self) -> Option<NumericValue> {
        self.lower
    }

    /// Get the upper bound.
    pub fn upper(&self) -> Option<NumericValue> {
        self.upper
    }

    /// Render as `field:[1 TO 5]`.
    pub fn to_string_with_field(&self, default_field: &str) -> String {
        write_range(
            field_prefix(&self.field, default_field),
            self.lower,
            self.upper,
            self.include_lower,
            self.include_upper,
        )
    }
}
