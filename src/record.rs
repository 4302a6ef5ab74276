//! Decoded records and their field values.

use alloc::{borrow::Cow, string::String, vec::Vec};
use core::fmt;

/// A decoded field value.
///
/// The variant for a field is fixed by its message kind and name in the
/// message profile, so records of the same kind expose the same variant for
/// the same field.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Signed(i64),
    Unsigned(u64),
    /// A scaled or floating point value.
    Float(f64),
    Text(String),
    /// The symbolic name of an enumerated value, such as `cycling`.
    Label(Cow<'static, str>),
    /// Fields declared with more than one value.
    Array(Vec<Value>),
}

impl Value {
    /// Numeric values as `f64`. Text, labels and arrays are not numeric.
    pub fn as_f64(&self) -> Option<f64> {
        match *self {
            Self::Signed(x) => Some(x as f64),
            Self::Unsigned(x) => Some(x as f64),
            Self::Float(x) => Some(x),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::Text(s) => Some(s),
            Self::Label(s) => Some(s),
            _ => None,
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Signed(x) => write!(f, "{x}"),
            Self::Unsigned(x) => write!(f, "{x}"),
            Self::Float(x) => write!(f, "{x}"),
            Self::Text(s) => f.write_str(s),
            Self::Label(s) => f.write_str(s),
            Self::Array(values) => {
                f.write_str("[")?;
                for (i, value) in values.iter().enumerate() {
                    if i != 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{value}")?;
                }
                f.write_str("]")
            }
        }
    }
}

/// One named value within a record.
#[derive(Debug, Clone, PartialEq)]
pub struct Field {
    pub name: Cow<'static, str>,
    /// Physical units, empty when dimensionless.
    pub units: Cow<'static, str>,
    pub value: Value,
}

impl Field {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn units(&self) -> &str {
        &self.units
    }

    pub fn value(&self) -> &Value {
        &self.value
    }
}

/// One decoded data message.
#[derive(Debug, Clone, PartialEq)]
pub struct Record {
    /// Message name from the profile, such as `record` or `lap`.
    pub kind: Cow<'static, str>,
    /// Fields in definition order, followed by any expanded components.
    pub fields: Vec<Field>,
    /// Seconds since the Unix epoch.
    pub timestamp: Option<i64>,
}

impl Record {
    pub fn kind(&self) -> &str {
        &self.kind
    }

    pub fn fields(&self) -> &[Field] {
        &self.fields
    }

    pub fn timestamp(&self) -> Option<i64> {
        self.timestamp
    }

    /// The first field with a name, if present.
    pub fn field(&self, name: &str) -> Option<&Field> {
        self.fields.iter().find(|f| f.name == name)
    }

    /// The numeric value of a field, if present and numeric.
    pub fn number(&self, name: &str) -> Option<f64> {
        self.field(name).and_then(|f| f.value.as_f64())
    }
}
