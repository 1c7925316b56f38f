//! Symbolic field names.

use std::fmt;
use std::sync::Arc;

/// The symbolic name addressing one record slot.
///
/// Two `FieldName`s refer to the same field iff their character sequences
/// are identical. Names are immutable once created and cheap to clone —
/// the backing string is shared, so a name can be held simultaneously by
/// a schema, a registry, and any number of initializer slots.
///
/// # Examples
///
/// ```
/// use slate_core::FieldName;
///
/// let a = FieldName::new("age");
/// let b = FieldName::new("age");
/// assert_eq!(a, b);
/// assert_eq!(a.as_str(), "age");
/// assert_eq!(a.to_string(), "age");
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct FieldName(Arc<str>);

impl FieldName {
    /// Create a field name from any string-like value.
    pub fn new(name: impl Into<Arc<str>>) -> Self {
        Self(name.into())
    }

    /// The name as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for FieldName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for FieldName {
    fn from(name: &str) -> Self {
        Self::new(name)
    }
}

impl From<String> for FieldName {
    fn from(name: String) -> Self {
        Self::new(name)
    }
}

impl AsRef<str> for FieldName {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl std::borrow::Borrow<str> for FieldName {
    fn borrow(&self) -> &str {
        self.as_str()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::hash_map::DefaultHasher;
    use std::hash::{Hash, Hasher};

    fn hash_of(name: &FieldName) -> u64 {
        let mut hasher = DefaultHasher::new();
        name.hash(&mut hasher);
        hasher.finish()
    }

    #[test]
    fn identical_strings_compare_equal() {
        let a = FieldName::new("velocity");
        let b = FieldName::from("velocity".to_string());
        assert_eq!(a, b);
        assert_eq!(hash_of(&a), hash_of(&b));
    }

    #[test]
    fn distinct_strings_compare_unequal() {
        assert_ne!(FieldName::new("x"), FieldName::new("y"));
    }

    #[test]
    fn clones_share_the_backing_string() {
        let a = FieldName::new("shared");
        let b = a.clone();
        assert!(std::ptr::eq(a.as_str(), b.as_str()));
    }

    #[test]
    fn ordering_is_lexicographic() {
        assert!(FieldName::new("a") < FieldName::new("b"));
        assert!(FieldName::new("ab") < FieldName::new("b"));
    }
}
