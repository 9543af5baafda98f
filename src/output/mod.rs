//! Estimate records and their tabular serialization.

mod csv;

pub use csv::CsvWriter;

use std::fmt::Display;

/// Column names, in output order
pub const COLUMNS: [&str; 7] = [
    "N",
    "Wide_Area",
    "Wide_Relative_Error",
    "Narrow_Area",
    "Narrow_Relative_Error",
    "Wide_Absolute_Error",
    "Narrow_Absolute_Error",
];

/// One row of the accuracy sweep
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct EstimateRecord {
    pub n: usize,
    pub wide_area: f64,
    pub wide_relative_error: Option<f64>,
    pub narrow_area: f64,
    pub narrow_relative_error: Option<f64>,
    pub wide_absolute_error: f64,
    pub narrow_absolute_error: f64,
}
impl EstimateRecord {
    /// Field values in [`COLUMNS`] order
    pub fn values(&self) -> [Value; 7] {
        [
            Value::Usize(self.n),
            Value::Float(self.wide_area),
            self.wide_relative_error.into(),
            Value::Float(self.narrow_area),
            self.narrow_relative_error.into(),
            Value::Float(self.wide_absolute_error),
            Value::Float(self.narrow_absolute_error),
        ]
    }
}

/// A single output cell
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Value {
    Usize(usize),
    Float(f64),
    Undefined,
}
impl From<Option<f64>> for Value {
    fn from(value: Option<f64>) -> Self {
        value.map_or(Value::Undefined, Value::Float)
    }
}
impl Display for Value {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Value::Usize(v) => v.fmt(f),
            Value::Float(v) => v.fmt(f),
            Value::Undefined => f.write_str("undefined"),
        }
    }
}
