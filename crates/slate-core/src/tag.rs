//! Declared-type tags for record slots.

use std::fmt;

/// Classification of the value a record slot holds.
///
/// A schema pairs every field name with a `TypeTag`; values carry the same
/// tag at runtime, and every get/set/construct/merge operation checks that
/// the two agree. The tag also determines the slot's zero value when a
/// field is left out of an initializer list or drained by a move.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TypeTag {
    /// Signed 64-bit integer. Zero value: `0`.
    Int,
    /// Unsigned 64-bit integer. Zero value: `0`.
    Uint,
    /// 64-bit float. Zero value: `0.0`.
    Float,
    /// Boolean. Zero value: `false`.
    Bool,
    /// Owned UTF-8 string. Zero value: the empty string.
    Str,
    /// A nested record. Zero value: the record with no fields.
    ///
    /// The tag does not constrain the nested record's schema; any record
    /// value satisfies a `Record`-tagged slot.
    Record,
}

impl fmt::Display for TypeTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Int => "int",
            Self::Uint => "uint",
            Self::Float => "float",
            Self::Bool => "bool",
            Self::Str => "str",
            Self::Record => "record",
        };
        f.write_str(name)
    }
}
