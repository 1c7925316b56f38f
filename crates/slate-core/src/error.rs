//! Error types for schema definition, record operations, and the
//! default-type registry.
//!
//! Schema and registry errors are structural — they indicate a programming
//! error and surface at definition or registration time. Record errors are
//! recoverable and are returned to the immediate caller; nothing in this
//! workspace logs-and-continues past one.

use std::error::Error;
use std::fmt;

use crate::name::FieldName;
use crate::tag::TypeTag;

/// Errors detected while defining a schema.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SchemaError {
    /// Two slots in the schema share the same field name.
    DuplicateFieldName {
        /// The repeated name.
        name: FieldName,
    },
}

impl fmt::Display for SchemaError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DuplicateFieldName { name } => {
                write!(f, "duplicate field name '{name}' in schema")
            }
        }
    }
}

impl Error for SchemaError {}

/// Errors from record construction, access, and merging.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum RecordError {
    /// The named field does not exist in the record's schema.
    UnknownField {
        /// The foreign name.
        name: FieldName,
    },
    /// A value's type does not match its slot's declared type.
    TypeMismatch {
        /// The field whose slot rejected the value.
        name: FieldName,
        /// The slot's declared type.
        expected: TypeTag,
        /// The type of the supplied value.
        found: TypeTag,
    },
    /// An initializer list names the same field twice.
    DuplicateInitializer {
        /// The repeated name.
        name: FieldName,
    },
}

impl fmt::Display for RecordError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnknownField { name } => {
                write!(f, "field '{name}' does not exist in the schema")
            }
            Self::TypeMismatch {
                name,
                expected,
                found,
            } => {
                write!(
                    f,
                    "type mismatch for field '{name}': expected {expected}, found {found}"
                )
            }
            Self::DuplicateInitializer { name } => {
                write!(f, "field '{name}' appears more than once in the initializer list")
            }
        }
    }
}

impl Error for RecordError {}

/// Errors from the default-type registry.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum RegistryError {
    /// A second, different type was registered for a name that already
    /// has a default type.
    ConflictingDefault {
        /// The name with a conflicting registration.
        name: FieldName,
        /// The type already registered.
        registered: TypeTag,
        /// The type the failed registration requested.
        requested: TypeTag,
    },
}

impl fmt::Display for RegistryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ConflictingDefault {
                name,
                registered,
                requested,
            } => {
                write!(
                    f,
                    "conflicting default type for field '{name}': \
                     already registered as {registered}, requested {requested}"
                )
            }
        }
    }
}

impl Error for RegistryError {}
