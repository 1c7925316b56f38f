//! Heterogeneous slot values.

use std::fmt;

use slate_core::TypeTag;

use crate::record::Record;

/// A value held by one record slot.
///
/// Every variant corresponds to one [`TypeTag`]; [`Value::tag`] recovers
/// the tag for type checking against a schema. Records nest: a slot can
/// hold a whole [`Record`], which renders recursively in display output.
///
/// # Examples
///
/// ```
/// use slate_core::TypeTag;
/// use slate_record::Value;
///
/// let v = Value::from("hello");
/// assert_eq!(v.tag(), TypeTag::Str);
/// assert_eq!(v.to_string(), "\"hello\"");
///
/// assert_eq!(Value::default_for(TypeTag::Int), Value::Int(0));
/// ```
#[derive(Clone, Debug, PartialEq)]
pub enum Value {
    /// Signed 64-bit integer.
    Int(i64),
    /// Unsigned 64-bit integer.
    Uint(u64),
    /// 64-bit float.
    Float(f64),
    /// Boolean.
    Bool(bool),
    /// Owned UTF-8 string.
    Str(String),
    /// A nested record.
    Record(Record),
}

impl Value {
    /// The type tag of this value.
    pub fn tag(&self) -> TypeTag {
        match self {
            Self::Int(_) => TypeTag::Int,
            Self::Uint(_) => TypeTag::Uint,
            Self::Float(_) => TypeTag::Float,
            Self::Bool(_) => TypeTag::Bool,
            Self::Str(_) => TypeTag::Str,
            Self::Record(_) => TypeTag::Record,
        }
    }

    /// The zero value for `tag`: `0`, `0.0`, `false`, the empty string,
    /// or the record with no fields.
    pub fn default_for(tag: TypeTag) -> Value {
        match tag {
            TypeTag::Int => Self::Int(0),
            TypeTag::Uint => Self::Uint(0),
            TypeTag::Float => Self::Float(0.0),
            TypeTag::Bool => Self::Bool(false),
            TypeTag::Str => Self::Str(String::new()),
            TypeTag::Record => Self::Record(Record::unit()),
        }
    }

    /// Move the value out, leaving the zero value of the same type behind.
    ///
    /// For nested records the schema stays in place and every slot is
    /// drained recursively, so the vacated record keeps its shape.
    ///
    /// # Examples
    ///
    /// ```
    /// use slate_record::Value;
    ///
    /// let mut v = Value::from("moved");
    /// assert_eq!(v.take(), Value::from("moved"));
    /// assert_eq!(v, Value::from(""));
    /// ```
    pub fn take(&mut self) -> Value {
        match self {
            Self::Record(record) => Self::Record(record.take()),
            other => {
                let zero = Value::default_for(other.tag());
                std::mem::replace(other, zero)
            }
        }
    }
}

impl fmt::Display for Value {
    // Strings render quoted; nested records render recursively with
    // balanced parentheses; everything else uses the standard form.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Int(v) => write!(f, "{v}"),
            Self::Uint(v) => write!(f, "{v}"),
            Self::Float(v) => write!(f, "{v}"),
            Self::Bool(v) => write!(f, "{v}"),
            Self::Str(v) => write!(f, "\"{v}\""),
            Self::Record(v) => write!(f, "{v}"),
        }
    }
}

impl From<i32> for Value {
    fn from(v: i32) -> Self {
        Self::Int(i64::from(v))
    }
}

impl From<i64> for Value {
    fn from(v: i64) -> Self {
        Self::Int(v)
    }
}

impl From<u32> for Value {
    fn from(v: u32) -> Self {
        Self::Uint(u64::from(v))
    }
}

impl From<u64> for Value {
    fn from(v: u64) -> Self {
        Self::Uint(v)
    }
}

impl From<f32> for Value {
    fn from(v: f32) -> Self {
        Self::Float(f64::from(v))
    }
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Self::Float(v)
    }
}

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Self::Bool(v)
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

impl From<Record> for Value {
    fn from(v: Record) -> Self {
        Self::Record(v)
    }
}
