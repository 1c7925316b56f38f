//! The default-type registry: an optional, write-once-per-name mapping
//! from field names to declared types.
//!
//! When an initializer does not pin a field's type with a concrete value,
//! the registry supplies the declared type. Registration is expected to
//! happen during program initialization, before any record relying on a
//! name's implicit type is constructed — a single-writer-then-many-readers
//! discipline. The registry is the only process-wide state in this
//! workspace; records themselves carry no shared state.

use std::sync::{Mutex, OnceLock, PoisonError};

use indexmap::IndexMap;

use crate::error::RegistryError;
use crate::name::FieldName;
use crate::tag::TypeTag;

/// Mapping from field names to their declared default types.
///
/// Each name may be registered at most once per registry: re-registering
/// the same name with the same tag is a no-op, while a different tag is a
/// [`RegistryError::ConflictingDefault`].
///
/// Prefer passing a registry explicitly to the code that needs implicit
/// types; [`DefaultTypeRegistry::global`] exists for the common case of a
/// single process-wide table populated at startup.
///
/// # Examples
///
/// ```
/// use slate_core::{DefaultTypeRegistry, FieldName, TypeTag};
///
/// let registry = DefaultTypeRegistry::new();
/// registry.register(FieldName::new("age"), TypeTag::Float).unwrap();
///
/// assert_eq!(registry.resolve("age"), Some(TypeTag::Float));
/// assert_eq!(registry.resolve("name"), None);
///
/// // Same name, same tag: fine. Different tag: rejected.
/// registry.register(FieldName::new("age"), TypeTag::Float).unwrap();
/// assert!(registry.register(FieldName::new("age"), TypeTag::Int).is_err());
/// ```
#[derive(Debug, Default)]
pub struct DefaultTypeRegistry {
    entries: Mutex<IndexMap<FieldName, TypeTag>>,
}

/// Lazily-initialized process-wide registry instance.
static GLOBAL: OnceLock<DefaultTypeRegistry> = OnceLock::new();

impl DefaultTypeRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// The process-wide registry.
    ///
    /// Writes are mutex-guarded, so concurrent registration cannot corrupt
    /// the map, but the intended lifecycle is still registration during
    /// startup followed by read-only use.
    pub fn global() -> &'static DefaultTypeRegistry {
        GLOBAL.get_or_init(DefaultTypeRegistry::new)
    }

    /// Register `tag` as the default type for `name`.
    ///
    /// Registering the same tag again for the same name is idempotent.
    /// Registering a different tag fails with
    /// [`RegistryError::ConflictingDefault`] and leaves the existing entry
    /// in place.
    pub fn register(&self, name: FieldName, tag: TypeTag) -> Result<(), RegistryError> {
        let mut entries = self.lock();
        match entries.get(&name) {
            Some(&registered) if registered != tag => Err(RegistryError::ConflictingDefault {
                name,
                registered,
                requested: tag,
            }),
            Some(_) => Ok(()),
            None => {
                entries.insert(name, tag);
                Ok(())
            }
        }
    }

    /// Look up the registered default type for `name`, if any.
    pub fn resolve(&self, name: &str) -> Option<TypeTag> {
        self.lock().get(name).copied()
    }

    /// Number of registered names.
    pub fn len(&self) -> usize {
        self.lock().len()
    }

    /// Returns `true` if no names are registered.
    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    /// The registered `(name, tag)` pairs in registration order.
    pub fn entries(&self) -> Vec<(FieldName, TypeTag)> {
        self.lock()
            .iter()
            .map(|(name, &tag)| (name.clone(), tag))
            .collect()
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, IndexMap<FieldName, TypeTag>> {
        // The map holds no invariants spanning the lock, so a poisoned
        // guard is still a valid map.
        self.entries.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
