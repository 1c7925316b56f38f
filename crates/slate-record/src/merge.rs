//! The merge/update engine: copying or moving matching-named fields
//! from a source into a target record.
//!
//! All three operations share the same overlap rule: a field is merged
//! iff its name exists in the target's schema. Fields present only in
//! the source are silently ignored; fields present only in the target
//! are left untouched. Merging is not transactional — a type mismatch
//! stops the merge at the offending field, leaving earlier fields
//! already applied.

use std::sync::Arc;

use slate_core::RecordError;

use crate::record::Record;
use crate::slot::FieldSlot;

impl Record {
    /// Copy every field of `source` whose name exists in this record's
    /// schema into the matching slot.
    ///
    /// # Errors
    ///
    /// [`RecordError::TypeMismatch`] if an overlapping field is declared
    /// with a different type in the two schemas. Fields merged before the
    /// mismatch keep their new values.
    ///
    /// # Examples
    ///
    /// ```
    /// use std::sync::Arc;
    /// use slate_core::TypeTag;
    /// use slate_record::{FieldDecl, FieldSlot, Record, Schema};
    ///
    /// let person = Arc::new(Schema::new([
    ///     FieldDecl::new("id", TypeTag::Int),
    ///     FieldDecl::new("age", TypeTag::Float),
    /// ]).unwrap());
    /// let update = Arc::new(Schema::new([
    ///     FieldDecl::new("age", TypeTag::Float),
    /// ]).unwrap());
    ///
    /// let mut target = Record::new(person, [
    ///     FieldSlot::new("id", 111),
    ///     FieldSlot::new("age", 16.5),
    /// ]).unwrap();
    /// let source = Record::new(update, [FieldSlot::new("age", 99.9)]).unwrap();
    ///
    /// target.update_from(&source).unwrap();
    /// assert_eq!(target.to_string(), "(id: 111, age: 99.9)");
    /// ```
    pub fn update_from(&mut self, source: &Record) -> Result<(), RecordError> {
        for (name, value) in source.entries() {
            let Some(index) = self.schema().index_of(name.as_str()) else {
                continue;
            };
            let expected = self.slot_at(index).tag();
            if value.tag() != expected {
                return Err(RecordError::TypeMismatch {
                    name: name.clone(),
                    expected,
                    found: value.tag(),
                });
            }
            *self.slot_mut(index) = value.clone();
        }
        Ok(())
    }

    /// Move every field of `source` whose name exists in this record's
    /// schema into the matching slot, draining the moved-out source slots
    /// to their types' zero values.
    ///
    /// This is not a read-only operation on `source`: after a successful
    /// call, every overlapping source field reads back as its default,
    /// while non-overlapping source fields are untouched.
    ///
    /// # Errors
    ///
    /// [`RecordError::TypeMismatch`] as for [`Record::update_from`];
    /// fields moved before the mismatch stay moved.
    pub fn drain_from(&mut self, source: &mut Record) -> Result<(), RecordError> {
        let source_schema = Arc::clone(source.schema());
        for (source_index, (name, _)) in source_schema.fields().enumerate() {
            let Some(target_index) = self.schema().index_of(name.as_str()) else {
                continue;
            };
            let expected = self.slot_at(target_index).tag();
            let found = source.slot_at(source_index).tag();
            if found != expected {
                return Err(RecordError::TypeMismatch {
                    name: name.clone(),
                    expected,
                    found,
                });
            }
            *self.slot_mut(target_index) = source.slot_mut(source_index).take();
        }
        Ok(())
    }

    /// Merge loose slots into this record, consuming them.
    ///
    /// Slots naming fields foreign to the schema are silently ignored,
    /// matching the record-to-record overlap rule. Slots are applied in
    /// order, so when two slots name the same field the later one wins.
    ///
    /// # Errors
    ///
    /// [`RecordError::TypeMismatch`] if a matching slot carries a value of
    /// the wrong type; earlier slots stay applied.
    ///
    /// # Examples
    ///
    /// ```
    /// use std::sync::Arc;
    /// use slate_core::TypeTag;
    /// use slate_record::{FieldDecl, FieldSlot, Record, Schema};
    ///
    /// let schema = Arc::new(Schema::new([
    ///     FieldDecl::new("x", TypeTag::Int),
    ///     FieldDecl::new("y", TypeTag::Int),
    /// ]).unwrap());
    /// let mut record = Record::new(schema, [
    ///     FieldSlot::new("x", 1),
    ///     FieldSlot::new("y", 2),
    /// ]).unwrap();
    ///
    /// record.apply([FieldSlot::new("y", 20), FieldSlot::new("x", -10)]).unwrap();
    /// assert_eq!(record.to_string(), "(x: -10, y: 20)");
    /// ```
    pub fn apply(
        &mut self,
        slots: impl IntoIterator<Item = FieldSlot>,
    ) -> Result<(), RecordError> {
        for slot in slots {
            let (name, value) = slot.into_parts();
            let Some(index) = self.schema().index_of(name.as_str()) else {
                continue;
            };
            let expected = self.slot_at(index).tag();
            if value.tag() != expected {
                return Err(RecordError::TypeMismatch {
                    name,
                    expected,
                    found: value.tag(),
                });
            }
            *self.slot_mut(index) = value;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::{FieldDecl, Schema};
    use crate::value::Value;
    use proptest::prelude::*;
    use slate_core::{FieldName, TypeTag};

    fn schema(decls: &[(&str, TypeTag)]) -> Arc<Schema> {
        Arc::new(
            Schema::new(decls.iter().map(|&(name, tag)| FieldDecl::new(name, tag))).unwrap(),
        )
    }

    fn person() -> Record {
        let schema = schema(&[
            ("id", TypeTag::Uint),
            ("age", TypeTag::Float),
            ("name", TypeTag::Str),
            ("address", TypeTag::Str),
        ]);
        Record::new(
            schema,
            [
                FieldSlot::new("id", 111u64),
                FieldSlot::new("age", 16.5),
                FieldSlot::new("name", "Bob"),
                FieldSlot::new("address", "101 Main St. Big City"),
            ],
        )
        .unwrap()
    }

    #[test]
    fn update_changes_exactly_the_overlap() {
        let mut target = person();
        let update_schema = schema(&[("id", TypeTag::Uint), ("age", TypeTag::Float)]);
        let update = Record::new(
            update_schema,
            [FieldSlot::new("id", 333u64), FieldSlot::new("age", 99.9)],
        )
        .unwrap();

        target.update_from(&update).unwrap();
        assert_eq!(
            target.to_string(),
            "(id: 333, age: 99.9, name: \"Bob\", address: \"101 Main St. Big City\")"
        );
        // Source is untouched by a copying merge.
        assert_eq!(update.to_string(), "(id: 333, age: 99.9)");
    }

    #[test]
    fn source_only_fields_are_ignored() {
        let mut target = Record::new(
            schema(&[("size", TypeTag::Uint), ("fldx", TypeTag::Float)]),
            [FieldSlot::new("size", 999u64), FieldSlot::new("fldx", 0.333)],
        )
        .unwrap();
        let source = Record::new(
            schema(&[("size", TypeTag::Uint), ("extra", TypeTag::Str)]),
            [
                FieldSlot::new("size", 888u64),
                FieldSlot::new("extra", "not copied"),
            ],
        )
        .unwrap();

        target.update_from(&source).unwrap();
        assert_eq!(target.to_string(), "(size: 888, fldx: 0.333)");
    }

    #[test]
    fn disjoint_schemas_merge_as_a_no_op() {
        let mut target = Record::new(
            schema(&[("a", TypeTag::Int)]),
            [FieldSlot::new("a", 1)],
        )
        .unwrap();
        let before = target.clone();
        let source = Record::new(
            schema(&[("b", TypeTag::Int)]),
            [FieldSlot::new("b", 2)],
        )
        .unwrap();

        target.update_from(&source).unwrap();
        assert_eq!(target, before);
    }

    #[test]
    fn conflicting_declared_types_are_a_mismatch() {
        let mut target = Record::empty(schema(&[("v", TypeTag::Int)]));
        let source = Record::new(
            schema(&[("v", TypeTag::Str)]),
            [FieldSlot::new("v", "five")],
        )
        .unwrap();

        let err = target.update_from(&source).unwrap_err();
        assert_eq!(
            err,
            RecordError::TypeMismatch {
                name: FieldName::new("v"),
                expected: TypeTag::Int,
                found: TypeTag::Str,
            }
        );
    }

    #[test]
    fn drain_moves_the_overlap_and_resets_the_source() {
        let mut target = Record::empty(schema(&[
            ("x", TypeTag::Int),
            ("z", TypeTag::Str),
        ]));
        let mut source = Record::new(
            schema(&[
                ("x", TypeTag::Int),
                ("z", TypeTag::Str),
                ("only", TypeTag::Str),
            ]),
            [
                FieldSlot::new("x", 5),
                FieldSlot::new("z", "moved out string"),
                FieldSlot::new("only", "stays"),
            ],
        )
        .unwrap();

        target.drain_from(&mut source).unwrap();
        assert_eq!(target.to_string(), "(x: 5, z: \"moved out string\")");
        // Moved-out fields read back as defaults; the rest is untouched.
        assert_eq!(source.to_string(), "(x: 0, z: \"\", only: \"stays\")");
    }

    #[test]
    fn drain_of_nested_record_keeps_source_shape() {
        let inner = Record::new(
            schema(&[("x", TypeTag::Str)]),
            [FieldSlot::new("x", "another one")],
        )
        .unwrap();
        let mut source = Record::new(
            schema(&[("b", TypeTag::Record)]),
            [FieldSlot::new("b", inner)],
        )
        .unwrap();
        let mut target = Record::empty(schema(&[("b", TypeTag::Record)]));

        target.drain_from(&mut source).unwrap();
        assert_eq!(target.to_string(), "(b: (x: \"another one\"))");
        assert_eq!(source.to_string(), "(b: (x: \"\"))");
    }

    #[test]
    fn apply_updates_matching_slots_in_order() {
        let mut record = Record::new(
            schema(&[("x", TypeTag::Int), ("y", TypeTag::Int)]),
            [FieldSlot::new("x", 1), FieldSlot::new("y", 2)],
        )
        .unwrap();

        record.apply([FieldSlot::new("x", 5)]).unwrap();
        assert_eq!(record.to_string(), "(x: 5, y: 2)");

        // Later slots win; foreign slots are skipped.
        record
            .apply([
                FieldSlot::new("y", 20),
                FieldSlot::new("elsewhere", 1),
                FieldSlot::new("y", 21),
            ])
            .unwrap();
        assert_eq!(record.to_string(), "(x: 5, y: 21)");
    }

    #[test]
    fn apply_type_mismatch_reports_the_field() {
        let mut record = Record::empty(schema(&[("x", TypeTag::Int)]));
        let err = record.apply([FieldSlot::new("x", true)]).unwrap_err();
        assert_eq!(
            err,
            RecordError::TypeMismatch {
                name: FieldName::new("x"),
                expected: TypeTag::Int,
                found: TypeTag::Bool,
            }
        );
    }

    proptest! {
        /// After `update_from`, shared fields hold the source values,
        /// target-only fields are byte-identical to before, and
        /// source-only fields never appear in the target.
        #[test]
        fn update_overlap_property(
            a in any::<i64>(),
            b in "[ -~]{0,16}",
            c in any::<u32>(),
            b2 in "[ -~]{0,16}",
            c2 in any::<u32>(),
            d in any::<i64>(),
        ) {
            let target_schema = schema(&[
                ("a", TypeTag::Int),
                ("b", TypeTag::Str),
                ("c", TypeTag::Uint),
            ]);
            let source_schema = schema(&[
                ("b", TypeTag::Str),
                ("c", TypeTag::Uint),
                ("d", TypeTag::Int),
            ]);

            let mut target = Record::new(target_schema, [
                FieldSlot::new("a", a),
                FieldSlot::new("b", b.as_str()),
                FieldSlot::new("c", c),
            ]).unwrap();
            let source = Record::new(source_schema, [
                FieldSlot::new("b", b2.as_str()),
                FieldSlot::new("c", c2),
                FieldSlot::new("d", d),
            ]).unwrap();

            target.update_from(&source).unwrap();

            prop_assert_eq!(target.get("a").unwrap(), &Value::Int(a));
            prop_assert_eq!(target.get("b").unwrap(), &Value::Str(b2.clone()));
            prop_assert_eq!(target.get("c").unwrap(), &Value::Uint(u64::from(c2)));
            prop_assert!(target.get("d").is_err());
        }

        /// Drain-merge moves values and leaves source overlap at defaults.
        #[test]
        fn drain_property(x in any::<i64>(), s in "[ -~]{0,16}") {
            let shape = [("x", TypeTag::Int), ("s", TypeTag::Str)];
            let mut source = Record::new(schema(&shape), [
                FieldSlot::new("x", x),
                FieldSlot::new("s", s.as_str()),
            ]).unwrap();
            let mut target = Record::empty(schema(&shape));

            target.drain_from(&mut source).unwrap();

            prop_assert_eq!(target.get("x").unwrap(), &Value::Int(x));
            prop_assert_eq!(target.get("s").unwrap(), &Value::Str(s.clone()));
            prop_assert_eq!(source.get("x").unwrap(), &Value::Int(0));
            prop_assert_eq!(source.get("s").unwrap(), &Value::Str(String::new()));
        }
    }
}
