//! Record schemas: ordered, name-unique field declarations.

use indexmap::IndexMap;

use slate_core::{FieldName, SchemaError, TypeTag};

/// Declaration of one schema field: a name paired with its declared type.
///
/// # Examples
///
/// ```
/// use slate_core::TypeTag;
/// use slate_record::FieldDecl;
///
/// let decl = FieldDecl::new("age", TypeTag::Float);
/// assert_eq!(decl.name.as_str(), "age");
/// assert_eq!(decl.tag, TypeTag::Float);
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FieldDecl {
    /// The field's name.
    pub name: FieldName,
    /// The field's declared type.
    pub tag: TypeTag,
}

impl FieldDecl {
    /// Create a declaration from a name and type tag.
    pub fn new(name: impl Into<FieldName>, tag: TypeTag) -> Self {
        Self {
            name: name.into(),
            tag,
        }
    }
}

/// The ordered set of `(name, type)` pairs defining a record's shape.
///
/// A schema is validated once, at construction: no two fields may share a
/// name. The name→slot-index map is built at the same time, so every
/// later lookup by name is O(1). Field order is significant for display
/// and storage layout, but not for matching initializers — records are
/// name-addressed from the caller's point of view.
///
/// Schemas are immutable; records share them through `Arc`.
///
/// # Examples
///
/// ```
/// use slate_core::{FieldName, SchemaError, TypeTag};
/// use slate_record::{FieldDecl, Schema};
///
/// let schema = Schema::new([
///     FieldDecl::new("id", TypeTag::Uint),
///     FieldDecl::new("name", TypeTag::Str),
/// ]).unwrap();
/// assert_eq!(schema.len(), 2);
/// assert_eq!(schema.index_of("name"), Some(1));
///
/// // Repeating a name fails loudly at definition time.
/// let err = Schema::new([
///     FieldDecl::new("id", TypeTag::Uint),
///     FieldDecl::new("id", TypeTag::Int),
/// ]).unwrap_err();
/// assert_eq!(err, SchemaError::DuplicateFieldName { name: FieldName::new("id") });
/// ```
#[derive(Clone, Debug)]
pub struct Schema {
    fields: IndexMap<FieldName, TypeTag>,
}

impl Schema {
    /// Define a schema from field declarations, in order.
    ///
    /// Fails with [`SchemaError::DuplicateFieldName`] if any name repeats.
    pub fn new(decls: impl IntoIterator<Item = FieldDecl>) -> Result<Self, SchemaError> {
        let mut fields = IndexMap::new();
        for decl in decls {
            if fields.insert(decl.name.clone(), decl.tag).is_some() {
                return Err(SchemaError::DuplicateFieldName { name: decl.name });
            }
        }
        Ok(Self { fields })
    }

    /// The schema with no fields.
    pub fn empty() -> Self {
        Self {
            fields: IndexMap::new(),
        }
    }

    /// Number of fields.
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Returns `true` if the schema has no fields.
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Whether `name` is one of this schema's fields.
    pub fn contains(&self, name: &str) -> bool {
        self.fields.contains_key(name)
    }

    /// The slot index of `name`, if it belongs to this schema.
    pub fn index_of(&self, name: &str) -> Option<usize> {
        self.fields.get_index_of(name)
    }

    /// The declared type of `name`, if it belongs to this schema.
    pub fn tag_of(&self, name: &str) -> Option<TypeTag> {
        self.fields.get(name).copied()
    }

    /// The `(name, type)` pair at `index`, in declaration order.
    pub fn field_at(&self, index: usize) -> Option<(&FieldName, TypeTag)> {
        self.fields.get_index(index).map(|(name, &tag)| (name, tag))
    }

    /// Iterate the `(name, type)` pairs in declaration order.
    pub fn fields(&self) -> impl Iterator<Item = (&FieldName, TypeTag)> {
        self.fields.iter().map(|(name, &tag)| (name, tag))
    }

    /// Iterate the field names in declaration order.
    pub fn names(&self) -> impl Iterator<Item = &FieldName> {
        self.fields.keys()
    }
}

impl PartialEq for Schema {
    // Order-sensitive: two schemas are equal only if they declare the
    // same fields in the same order.
    fn eq(&self, other: &Self) -> bool {
        self.fields.len() == other.fields.len()
            && self.fields.iter().zip(other.fields.iter()).all(|(a, b)| a == b)
    }
}

impl Eq for Schema {}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn decl(name: &str, tag: TypeTag) -> FieldDecl {
        FieldDecl::new(name, tag)
    }

    #[test]
    fn unique_names_are_accepted() {
        let schema = Schema::new([
            decl("id", TypeTag::Uint),
            decl("age", TypeTag::Float),
            decl("name", TypeTag::Str),
        ])
        .unwrap();
        assert_eq!(schema.len(), 3);
        assert!(schema.contains("age"));
        assert_eq!(schema.tag_of("age"), Some(TypeTag::Float));
    }

    #[test]
    fn duplicate_name_is_rejected() {
        let err = Schema::new([
            decl("fieldA", TypeTag::Int),
            decl("B", TypeTag::Float),
            decl("fieldA", TypeTag::Float),
        ])
        .unwrap_err();
        assert_eq!(
            err,
            SchemaError::DuplicateFieldName {
                name: FieldName::new("fieldA")
            }
        );
    }

    #[test]
    fn duplicate_with_identical_tag_is_still_rejected() {
        let err = Schema::new([decl("x", TypeTag::Int), decl("x", TypeTag::Int)]).unwrap_err();
        assert_eq!(
            err,
            SchemaError::DuplicateFieldName {
                name: FieldName::new("x")
            }
        );
    }

    #[test]
    fn index_follows_declaration_order() {
        let schema = Schema::new([
            decl("first", TypeTag::Int),
            decl("second", TypeTag::Float),
        ])
        .unwrap();
        assert_eq!(schema.index_of("first"), Some(0));
        assert_eq!(schema.index_of("second"), Some(1));
        assert_eq!(schema.index_of("third"), None);

        let (name, tag) = schema.field_at(1).unwrap();
        assert_eq!(name.as_str(), "second");
        assert_eq!(tag, TypeTag::Float);
    }

    #[test]
    fn equality_is_order_sensitive() {
        let ab = Schema::new([decl("a", TypeTag::Int), decl("b", TypeTag::Int)]).unwrap();
        let ba = Schema::new([decl("b", TypeTag::Int), decl("a", TypeTag::Int)]).unwrap();
        assert_ne!(ab, ba);
        assert_eq!(ab, ab.clone());
    }

    #[test]
    fn empty_schema_has_no_fields() {
        let schema = Schema::empty();
        assert!(schema.is_empty());
        assert_eq!(schema.fields().count(), 0);
    }

    proptest! {
        /// Any list of distinct names defines a schema whose indices are
        /// exactly the declaration positions.
        #[test]
        fn distinct_names_always_define(names in prop::collection::hash_set("[a-z]{1,8}", 0..12)) {
            let names: Vec<String> = names.into_iter().collect();
            let schema = Schema::new(
                names.iter().map(|n| FieldDecl::new(n.as_str(), TypeTag::Int)),
            ).unwrap();
            prop_assert_eq!(schema.len(), names.len());
            for (i, n) in names.iter().enumerate() {
                prop_assert_eq!(schema.index_of(n.as_str()), Some(i));
            }
        }

        /// Appending an already-declared name makes definition fail.
        #[test]
        fn repeated_name_always_fails(
            names in prop::collection::hash_set("[a-z]{1,8}", 1..8),
            pick in 0usize..8,
        ) {
            let names: Vec<String> = names.into_iter().collect();
            let repeat = names[pick % names.len()].clone();
            let decls = names
                .iter()
                .map(|n| FieldDecl::new(n.as_str(), TypeTag::Int))
                .chain(std::iter::once(FieldDecl::new(repeat.as_str(), TypeTag::Float)));
            prop_assert_eq!(
                Schema::new(decls).unwrap_err(),
                SchemaError::DuplicateFieldName { name: FieldName::new(repeat.as_str()) }
            );
        }
    }
}
