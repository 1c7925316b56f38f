//! Core types for slate named records.
//!
//! This is the leaf crate with zero internal dependencies. It defines
//! the vocabulary shared by the rest of the workspace: field names,
//! declared-type tags, the error taxonomy, and the default-type registry.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod error;
pub mod name;
pub mod registry;
pub mod tag;

pub use error::{RecordError, RegistryError, SchemaError};
pub use name::FieldName;
pub use registry::DefaultTypeRegistry;
pub use tag::TypeTag;
