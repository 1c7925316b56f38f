//! Record storage and name-addressed access.

use std::fmt;
use std::sync::Arc;

use smallvec::{smallvec, SmallVec};

use slate_core::{FieldName, RecordError};

use crate::schema::Schema;
use crate::slot::FieldSlot;
use crate::value::Value;

/// An instance of a [`Schema`]: one [`Value`] per schema slot, stored
/// index-parallel to the schema's field order.
///
/// Records are plain values with no internal synchronization; each is
/// exclusively owned by one logical owner at a time. Copies are deep.
/// All access goes through field names — the schema's name→index map
/// makes every lookup O(1), and the schema's no-duplicate-name invariant
/// makes every lookup unambiguous.
///
/// # Examples
///
/// ```
/// use std::sync::Arc;
/// use slate_core::TypeTag;
/// use slate_record::{FieldDecl, FieldSlot, Record, Schema, Value};
///
/// let schema = Arc::new(Schema::new([
///     FieldDecl::new("id", TypeTag::Uint),
///     FieldDecl::new("name", TypeTag::Str),
/// ]).unwrap());
///
/// let mut person = Record::new(schema, [FieldSlot::new("id", 111u64)]).unwrap();
/// person.set("name", "Bob").unwrap();
///
/// assert_eq!(person.get("id").unwrap(), &Value::Uint(111));
/// assert_eq!(person.to_string(), "(id: 111, name: \"Bob\")");
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct Record {
    schema: Arc<Schema>,
    slots: Vec<Value>,
}

impl Record {
    /// Create a record with every slot at its type's zero value.
    pub fn empty(schema: Arc<Schema>) -> Self {
        let slots = schema
            .fields()
            .map(|(_, tag)| Value::default_for(tag))
            .collect();
        Self { schema, slots }
    }

    /// The record with no fields. This is the zero value of
    /// [`TypeTag::Record`](slate_core::TypeTag::Record)-typed slots.
    pub fn unit() -> Self {
        Self {
            schema: Arc::new(Schema::empty()),
            slots: Vec::new(),
        }
    }

    /// Construct a record from an unordered set of initializer slots.
    ///
    /// Each initializer is matched to its schema slot by name; fields with
    /// no initializer take their type's zero value. Permuting the
    /// initializer list produces an identical record.
    ///
    /// # Errors
    ///
    /// - [`RecordError::UnknownField`] — an initializer names a field the
    ///   schema does not declare.
    /// - [`RecordError::TypeMismatch`] — an initializer's value does not
    ///   match the slot's declared type.
    /// - [`RecordError::DuplicateInitializer`] — the same field is named
    ///   twice, even though order is irrelevant to the result.
    pub fn new(
        schema: Arc<Schema>,
        initializers: impl IntoIterator<Item = FieldSlot>,
    ) -> Result<Self, RecordError> {
        let mut record = Self::empty(schema);
        let mut seen: SmallVec<[bool; 8]> = smallvec![false; record.slots.len()];

        for slot in initializers {
            let (name, value) = slot.into_parts();
            let Some(index) = record.schema.index_of(name.as_str()) else {
                return Err(RecordError::UnknownField { name });
            };
            if seen[index] {
                return Err(RecordError::DuplicateInitializer { name });
            }
            let expected = record.slots[index].tag();
            if value.tag() != expected {
                return Err(RecordError::TypeMismatch {
                    name,
                    expected,
                    found: value.tag(),
                });
            }
            record.slots[index] = value;
            seen[index] = true;
        }
        Ok(record)
    }

    /// Assemble a record from a schema and slot values already known to
    /// be index-parallel and type-correct.
    pub(crate) fn from_parts(schema: Arc<Schema>, slots: Vec<Value>) -> Self {
        debug_assert_eq!(schema.len(), slots.len());
        Self { schema, slots }
    }

    /// The schema defining this record's shape.
    pub fn schema(&self) -> &Arc<Schema> {
        &self.schema
    }

    /// Number of fields.
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    /// Returns `true` if the record has no fields.
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Read the value of the field called `name`.
    ///
    /// # Errors
    ///
    /// [`RecordError::UnknownField`] if `name` is foreign to the schema.
    pub fn get(&self, name: &str) -> Result<&Value, RecordError> {
        match self.schema.index_of(name) {
            Some(index) => Ok(&self.slots[index]),
            None => Err(RecordError::UnknownField {
                name: FieldName::new(name),
            }),
        }
    }

    /// Overwrite the value of the field called `name` in place.
    ///
    /// # Errors
    ///
    /// [`RecordError::UnknownField`] if `name` is foreign to the schema;
    /// [`RecordError::TypeMismatch`] if the value's type does not match
    /// the slot's declared type. On error the record is unchanged.
    pub fn set(&mut self, name: &str, value: impl Into<Value>) -> Result<(), RecordError> {
        let value = value.into();
        let Some(index) = self.schema.index_of(name) else {
            return Err(RecordError::UnknownField {
                name: FieldName::new(name),
            });
        };
        let expected = self.slots[index].tag();
        if value.tag() != expected {
            return Err(RecordError::TypeMismatch {
                name: FieldName::new(name),
                expected,
                found: value.tag(),
            });
        }
        self.slots[index] = value;
        Ok(())
    }

    /// Move every slot value out into a new record, leaving this record's
    /// slots at their types' zero values.
    ///
    /// Nested records are drained recursively but keep their schemas, so
    /// the vacated record retains its full shape.
    ///
    /// # Examples
    ///
    /// ```
    /// use std::sync::Arc;
    /// use slate_core::TypeTag;
    /// use slate_record::{FieldDecl, FieldSlot, Record, Schema};
    ///
    /// let schema = Arc::new(Schema::new([
    ///     FieldDecl::new("i", TypeTag::Int),
    ///     FieldDecl::new("a", TypeTag::Str),
    /// ]).unwrap());
    /// let mut source = Record::new(Arc::clone(&schema), [
    ///     FieldSlot::new("i", 23),
    ///     FieldSlot::new("a", "a string to be moved"),
    /// ]).unwrap();
    ///
    /// let moved = source.take();
    /// assert_eq!(moved.to_string(), "(i: 23, a: \"a string to be moved\")");
    /// assert_eq!(source.to_string(), "(i: 0, a: \"\")");
    /// ```
    pub fn take(&mut self) -> Record {
        Record {
            schema: Arc::clone(&self.schema),
            slots: self.slots.iter_mut().map(Value::take).collect(),
        }
    }

    /// Iterate `(name, value)` pairs in schema order.
    pub fn entries(&self) -> impl Iterator<Item = (&FieldName, &Value)> {
        self.schema.names().zip(self.slots.iter())
    }

    /// Iterate the field names in schema order.
    pub fn names(&self) -> impl Iterator<Item = &FieldName> {
        self.schema.names()
    }

    pub(crate) fn slot_mut(&mut self, index: usize) -> &mut Value {
        &mut self.slots[index]
    }

    pub(crate) fn slot_at(&self, index: usize) -> &Value {
        &self.slots[index]
    }
}

impl fmt::Display for Record {
    // Renders `(name1: value1, name2: value2)` in schema order, with
    // string values quoted and nested records parenthesized recursively.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("(")?;
        for (i, (name, value)) in self.entries().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{name}: {value}")?;
        }
        f.write_str(")")
    }
}
