//! Field slots: the (name, value) pairs records are built from.

use std::fmt;

use slate_core::{DefaultTypeRegistry, FieldName};

use crate::value::Value;

/// One named value: the atomic initializer and loose-field unit.
///
/// A slot pairs a [`FieldName`] with a [`Value`]. Two slots address the
/// same field iff their names match, regardless of value. Slots are the
/// input to [`Record::new`](crate::Record::new) and
/// [`Record::apply`](crate::Record::apply).
///
/// # Examples
///
/// ```
/// use slate_record::FieldSlot;
///
/// let slot = FieldSlot::new("age", 16.5);
/// assert_eq!(slot.name().as_str(), "age");
/// assert_eq!(slot.to_string(), "age: 16.5");
///
/// // String values render quoted.
/// assert_eq!(FieldSlot::new("name", "Bob").to_string(), "name: \"Bob\"");
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct FieldSlot {
    name: FieldName,
    value: Value,
}

impl FieldSlot {
    /// Create a slot from a name and any value convertible to [`Value`].
    pub fn new(name: impl Into<FieldName>, value: impl Into<Value>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
        }
    }

    /// Create a default-valued slot whose type comes from `registry`.
    ///
    /// Returns `None` if the registry has no default type for `name` —
    /// the caller then falls back to pinning the type with a concrete
    /// value.
    ///
    /// # Examples
    ///
    /// ```
    /// use slate_core::{DefaultTypeRegistry, FieldName, TypeTag};
    /// use slate_record::FieldSlot;
    ///
    /// let registry = DefaultTypeRegistry::new();
    /// registry.register(FieldName::new("age"), TypeTag::Float).unwrap();
    ///
    /// let slot = FieldSlot::with_default_type(FieldName::new("age"), &registry).unwrap();
    /// assert_eq!(slot.to_string(), "age: 0");
    ///
    /// assert!(FieldSlot::with_default_type(FieldName::new("other"), &registry).is_none());
    /// ```
    pub fn with_default_type(name: FieldName, registry: &DefaultTypeRegistry) -> Option<Self> {
        let tag = registry.resolve(name.as_str())?;
        Some(Self {
            name,
            value: Value::default_for(tag),
        })
    }

    /// The slot's field name.
    pub fn name(&self) -> &FieldName {
        &self.name
    }

    /// The slot's value.
    pub fn value(&self) -> &Value {
        &self.value
    }

    /// Split the slot into its name and value.
    pub fn into_parts(self) -> (FieldName, Value) {
        (self.name, self.value)
    }
}

impl fmt::Display for FieldSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.name, self.value)
    }
}
