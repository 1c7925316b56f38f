//! Errors that carry a record of context fields.
//!
//! A [`TaggedError`] wraps a [`Record`] whose fields describe where and
//! why the error arose. The [`tagged_error!`](crate::tagged_error) macro
//! builds one with `file` and `line` captured automatically, followed by
//! any caller-supplied `(name, value)` pairs.

use std::error::Error;
use std::fmt;
use std::sync::Arc;

use slate_core::SchemaError;

use crate::record::Record;
use crate::schema::{FieldDecl, Schema};
use crate::slot::FieldSlot;

/// An error whose payload is a record of named context fields.
///
/// Renders exactly like the record it carries, so a tagged error built
/// from `(file, line, iarg)` displays as
/// `(file: "src/lib.rs", line: 21, iarg: 123)`.
///
/// # Examples
///
/// ```
/// use slate_record::{FieldSlot, TaggedError, Value};
///
/// let err = TaggedError::new([
///     FieldSlot::new("op", "connect"),
///     FieldSlot::new("attempts", 3),
/// ]);
/// assert_eq!(err.to_string(), "(op: \"connect\", attempts: 3)");
/// assert_eq!(err.context().get("attempts").unwrap(), &Value::Int(3));
/// ```
#[derive(Clone, Debug)]
pub struct TaggedError {
    context: Record,
}

impl TaggedError {
    /// Build a tagged error from context slots, in order.
    ///
    /// The slots' names and value types define the context record's
    /// schema on the spot.
    ///
    /// # Panics
    ///
    /// Panics if two slots share a name — duplicate context fields are a
    /// programming error at the error's definition site.
    pub fn new(slots: impl IntoIterator<Item = FieldSlot>) -> Self {
        let (decls, values): (Vec<_>, Vec<_>) = slots
            .into_iter()
            .map(|slot| {
                let tag = slot.value().tag();
                let (name, value) = slot.into_parts();
                (FieldDecl::new(name, tag), value)
            })
            .unzip();
        let schema = match Schema::new(decls) {
            Ok(schema) => Arc::new(schema),
            Err(SchemaError::DuplicateFieldName { name }) => {
                panic!("duplicate context field '{name}' in tagged error")
            }
        };
        Self {
            context: Record::from_parts(schema, values),
        }
    }

    /// The record of context fields.
    pub fn context(&self) -> &Record {
        &self.context
    }
}

impl fmt::Display for TaggedError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.context)
    }
}

impl Error for TaggedError {}

/// Build a [`TaggedError`] with `file` and `line` context captured from
/// the call site, followed by any `(name, value)` pairs.
///
/// # Examples
///
/// ```
/// use slate_record::tagged_error;
///
/// let err = tagged_error!(("what", "lookup failed"), ("key", 42));
/// let rendered = err.to_string();
/// assert!(rendered.starts_with("(file: "));
/// assert!(rendered.ends_with("what: \"lookup failed\", key: 42)"));
/// ```
#[macro_export]
macro_rules! tagged_error {
    ($(($name:expr, $value:expr)),* $(,)?) => {
        $crate::TaggedError::new([
            $crate::FieldSlot::new("file", file!()),
            $crate::FieldSlot::new("line", line!()),
            $($crate::FieldSlot::new($name, $value)),*
        ])
    };
}
