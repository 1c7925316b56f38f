//! Named records: fixed-schema, heterogeneous, ordered collections of
//! values addressed by field name.
//!
//! A [`Schema`] fixes the ordered, name-unique set of `(name, type)` pairs
//! that shape a record. A [`Record`] stores one [`Value`] per schema slot
//! and resolves every get/set/construct/merge through the schema's
//! name→slot map, so lookups are O(1) and a name can never address two
//! slots. Construction accepts unordered [`FieldSlot`] initializers;
//! fields left out take their type's zero value.
//!
//! # Quick start
//!
//! ```
//! use std::sync::Arc;
//! use slate_core::TypeTag;
//! use slate_record::{FieldDecl, FieldSlot, Record, Schema};
//!
//! let schema = Arc::new(Schema::new([
//!     FieldDecl::new("x", TypeTag::Int),
//!     FieldDecl::new("y", TypeTag::Int),
//! ]).unwrap());
//!
//! // Initializer order does not matter.
//! let point = Record::new(schema, [
//!     FieldSlot::new("y", 2),
//!     FieldSlot::new("x", 1),
//! ]).unwrap();
//!
//! assert_eq!(point.to_string(), "(x: 1, y: 2)");
//! ```

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod record;
pub mod schema;
pub mod slot;
pub mod tagged;
pub mod value;

mod merge;

pub use record::Record;
pub use schema::{FieldDecl, Schema};
pub use slot::FieldSlot;
pub use tagged::TaggedError;
pub use value::Value;
