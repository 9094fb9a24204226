// ============================================================================
// Metadata Store
// Class/property keyed annotation table with optional inheritance
// ============================================================================

use super::errors::{MetadataError, MetadataResult};
use crate::domain::{ClassId, InheritanceMode, StoreConfig};
use crate::interfaces::{AnnotationKind, AnnotationToken};
use parking_lot::RwLock;
use smallvec::SmallVec;
use std::any::Any;
use std::collections::{BTreeMap, HashMap};
use std::sync::{Arc, OnceLock};

type ErasedValue = Arc<dyn Any + Send + Sync>;

/// Annotations of one kind on one type, by property name
type PropertyTable = BTreeMap<String, ErasedValue>;

/// A type followed by its ancestors, nearest first
type Lineage = SmallVec<[ClassId; 4]>;

static GLOBAL_STORE: OnceLock<MetadataStore> = OnceLock::new();

/// Thread-safe table of `(type, property, kind) -> value` associations.
///
/// Entries are written when a decorator is applied and read by any number of
/// callers afterwards. Writing the same key again replaces the previous value.
pub struct MetadataStore {
    config: StoreConfig,

    /// Annotation tables grouped by owning type and kind
    entries: RwLock<HashMap<(ClassId, AnnotationToken), PropertyTable>>,

    /// Child type -> parent type
    parents: RwLock<HashMap<ClassId, ClassId>>,
}

impl MetadataStore {
    /// Create a store with a validated configuration
    pub fn new(config: StoreConfig) -> MetadataResult<Self> {
        config.validate()?;

        Ok(Self {
            config,
            entries: RwLock::new(HashMap::new()),
            parents: RwLock::new(HashMap::new()),
        })
    }

    /// Process-wide store used by [`Decorator::apply`](super::Decorator::apply)
    /// and the type-targeted readers.
    pub fn global() -> &'static MetadataStore {
        GLOBAL_STORE.get_or_init(MetadataStore::default)
    }

    pub fn config(&self) -> &StoreConfig {
        &self.config
    }

    // ========================================================================
    // Writing
    // ========================================================================

    /// Attach `value` to `property` of `class` under kind `K`.
    ///
    /// Returns the value it replaced, if any.
    pub fn decorate<K: AnnotationKind>(
        &self,
        class: ClassId,
        property: &str,
        value: K::Value,
    ) -> Option<K::Value> {
        let token = K::token();
        let previous = self
            .entries
            .write()
            .entry((class, token))
            .or_default()
            .insert(property.to_owned(), Arc::new(value));

        let previous = previous.and_then(|old| old.downcast_ref::<K::Value>().cloned());
        if previous.is_some() {
            tracing::debug!(class = %class, property, kind = %token, "annotation overwritten");
        } else {
            tracing::debug!(class = %class, property, kind = %token, "annotation attached");
        }

        previous
    }

    /// Declare `parent` as the parent type of `child`.
    ///
    /// Replaces any parent previously registered for `child`.
    pub fn register_parent(&self, child: ClassId, parent: ClassId) -> MetadataResult<()> {
        if child == parent {
            return Err(MetadataError::SelfInheritance { class: child });
        }

        let mut parents = self.parents.write();

        // Acyclic by construction, so this walk terminates.
        let mut cursor = Some(parent);
        while let Some(class) = cursor {
            if class == child {
                return Err(MetadataError::InheritanceCycle { child, parent });
            }
            cursor = parents.get(&class).copied();
        }

        parents.insert(child, parent);
        tracing::debug!(child = %child, parent = %parent, "parent type registered");

        Ok(())
    }

    // ========================================================================
    // Reading
    // ========================================================================

    /// Resolve `property` of `class` under kind `K`, or `default` when
    /// neither the type nor its visible ancestors carry it.
    pub fn decorator_of<K: AnnotationKind>(
        &self,
        class: ClassId,
        property: &str,
        default: K::Value,
    ) -> K::Value {
        self.find::<K>(class, property).unwrap_or(default)
    }

    /// Resolve `property` of `class` under kind `K`, honoring inheritance.
    pub fn find<K: AnnotationKind>(&self, class: ClassId, property: &str) -> Option<K::Value> {
        let token = K::token();
        let lineage = self.lineage(class);
        let entries = self.entries.read();

        let found = lineage.iter().find_map(|owner| {
            entries
                .get(&(*owner, token))
                .and_then(|table| table.get(property))
                .and_then(|value| value.downcast_ref::<K::Value>())
                .map(|value| (*owner, value.clone()))
        });

        match found {
            Some((owner, value)) => {
                tracing::trace!(class = %class, property, kind = %token, owner = %owner, "annotation resolved");
                Some(value)
            },
            None => {
                tracing::trace!(class = %class, property, kind = %token, "annotation missing");
                None
            },
        }
    }

    /// Annotation attached to `class` itself, ignoring ancestors.
    pub fn own<K: AnnotationKind>(&self, class: ClassId, property: &str) -> Option<K::Value> {
        self.entries
            .read()
            .get(&(class, K::token()))
            .and_then(|table| table.get(property))
            .and_then(|value| value.downcast_ref::<K::Value>())
            .cloned()
    }

    /// Every property of `class` carrying kind `K`, sorted by property name.
    ///
    /// Inherited properties are included; the nearest declaration wins.
    pub fn annotated<K: AnnotationKind>(&self, class: ClassId) -> Vec<(String, K::Value)> {
        let token = K::token();
        let lineage = self.lineage(class);
        let entries = self.entries.read();

        let mut merged: BTreeMap<&str, K::Value> = BTreeMap::new();
        // Farthest ancestor first so nearer types overwrite.
        for owner in lineage.iter().rev() {
            let Some(table) = entries.get(&(*owner, token)) else {
                continue;
            };
            for (property, value) in table {
                if let Some(value) = value.downcast_ref::<K::Value>() {
                    merged.insert(property.as_str(), value.clone());
                }
            }
        }

        merged
            .into_iter()
            .map(|(property, value)| (property.to_owned(), value))
            .collect()
    }

    pub fn parent_of(&self, class: ClassId) -> Option<ClassId> {
        self.parents.read().get(&class).copied()
    }

    /// Number of stored annotations across all types and kinds
    pub fn len(&self) -> usize {
        self.entries.read().values().map(BTreeMap::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// `class` followed by the ancestors visible under the configuration
    fn lineage(&self, class: ClassId) -> Lineage {
        let mut lineage = Lineage::new();
        lineage.push(class);

        if self.config.inheritance == InheritanceMode::Own {
            return lineage;
        }

        let parents = self.parents.read();
        let mut cursor = parents.get(&class).copied();
        while let Some(parent) = cursor {
            if lineage.len() > self.config.max_depth {
                break;
            }
            lineage.push(parent);
            cursor = parents.get(&parent).copied();
        }

        lineage
    }
}

impl Default for MetadataStore {
    fn default() -> Self {
        Self {
            config: StoreConfig::default(),
            entries: RwLock::new(HashMap::new()),
            parents: RwLock::new(HashMap::new()),
        }
    }
}

impl std::fmt::Debug for MetadataStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MetadataStore")
            .field("config", &self.config)
            .field("entries", &self.len())
            .field("parents", &self.parents.read().len())
            .finish()
    }
}
