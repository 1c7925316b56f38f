//! Slate: fixed-schema named records for Rust.
//!
//! A [`record::Schema`] fixes an ordered, name-unique set of typed
//! fields; a [`record::Record`] stores one value per field and resolves
//! every operation through the field's name. This is the top-level
//! facade crate that re-exports the public API from the slate
//! sub-crates. For most users, adding `slate` as a single dependency is
//! sufficient.
//!
//! # Quick start
//!
//! ```rust
//! use std::sync::Arc;
//! use slate::prelude::*;
//!
//! // Shape: a person with a numeric id, an age, and a name.
//! let schema = Arc::new(Schema::new([
//!     FieldDecl::new("id", TypeTag::Uint),
//!     FieldDecl::new("age", TypeTag::Float),
//!     FieldDecl::new("name", TypeTag::Str),
//! ]).unwrap());
//!
//! // Initializers are unordered; missing fields take zero values.
//! let mut person = Record::new(Arc::clone(&schema), [
//!     FieldSlot::new("name", "Bob"),
//!     FieldSlot::new("id", 111u64),
//! ]).unwrap();
//! assert_eq!(person.to_string(), "(id: 111, age: 0, name: \"Bob\")");
//!
//! // Field access goes through names, checked against the schema.
//! person.set("age", 16.5).unwrap();
//! assert_eq!(person.get("age").unwrap(), &Value::Float(16.5));
//!
//! // Merge copies exactly the fields both schemas name.
//! let update_schema = Arc::new(Schema::new([
//!     FieldDecl::new("id", TypeTag::Uint),
//!     FieldDecl::new("age", TypeTag::Float),
//! ]).unwrap());
//! let update = Record::new(update_schema, [
//!     FieldSlot::new("id", 333u64),
//!     FieldSlot::new("age", 99.9),
//! ]).unwrap();
//! person.update_from(&update).unwrap();
//! assert_eq!(person.to_string(), "(id: 333, age: 99.9, name: \"Bob\")");
//! ```
//!
//! # Modules
//!
//! Each module corresponds to a sub-crate. Use them for types not in the
//! prelude:
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`types`] | `slate-core` | Field names, type tags, errors, the default-type registry |
//! | [`record`] | `slate-record` | Schemas, records, field slots, the merge engine |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

/// Field names, type tags, error types, and the default-type registry
/// (`slate-core`).
pub use slate_core as types;

/// Schemas, records, field slots, and the merge/update engine
/// (`slate-record`).
pub use slate_record as record;

/// Common imports for typical slate usage.
///
/// ```rust
/// use slate::prelude::*;
/// ```
///
/// This imports the most frequently used types: schemas, records, field
/// slots, values, type tags, and the error enums.
pub mod prelude {
    // Core types
    pub use slate_core::{DefaultTypeRegistry, FieldName, TypeTag};

    // Errors
    pub use slate_core::{RecordError, RegistryError, SchemaError};

    // Records
    pub use slate_record::{FieldDecl, FieldSlot, Record, Schema, TaggedError, Value};
}
