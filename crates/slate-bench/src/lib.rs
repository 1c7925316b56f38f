//! Benchmark fixtures for slate named records.
//!
//! Provides schema and record builders shared by the criterion benches:
//!
//! - [`wide_schema`]: an n-field all-int schema for scaling measurements
//! - [`populated`]: a fully-initialized record over [`wide_schema`]

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use std::sync::Arc;

use slate_core::TypeTag;
use slate_record::{FieldDecl, FieldSlot, Record, Schema};

/// Build a schema with `n` int fields named `f0`..`f{n-1}`.
pub fn wide_schema(n: usize) -> Arc<Schema> {
    let schema = Schema::new((0..n).map(|i| FieldDecl::new(format!("f{i}"), TypeTag::Int)))
        .expect("generated names are distinct");
    Arc::new(schema)
}

/// Build a record over [`wide_schema`] with every field initialized to
/// its index.
pub fn populated(n: usize) -> Record {
    let slots = (0..n).map(|i| FieldSlot::new(format!("f{i}"), i as i64));
    Record::new(wide_schema(n), slots).expect("slots match the generated schema")
}
