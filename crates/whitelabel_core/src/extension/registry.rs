//! In-process extension registry.
//!
//! # Responsibility
//! - Store registered extensions per point name in registration order.
//! - Return typed, owned snapshots of the entries for one point.
//!
//! # Invariants
//! - Sequences are append-only; entries are never deduplicated or removed.
//! - All entries stored under one name share one payload type.
//! - Query results never alias registry storage.
//! - A [`FrozenRegistry`] exposes no mutation path.

use crate::extension::point::{Extension, ExtensionPoint, ExtensionPointName};
use log::{debug, warn};
use std::any::{type_name, Any, TypeId};
use std::collections::BTreeMap;
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::sync::Arc;

struct Slot {
    payload_type: TypeId,
    payload_type_name: &'static str,
    entries: Vec<Box<dyn Any + Send + Sync>>,
}

/// Mutable registry used during the bootstrap of one branded experience.
#[derive(Default)]
pub struct ExtensionRegistry {
    slots: BTreeMap<ExtensionPointName, Slot>,
}

impl ExtensionRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends one extension under its point name.
    ///
    /// The first registration for a name fixes the payload type for that
    /// name; registering a different payload type later is rejected.
    pub fn register<T>(&mut self, extension: Extension<T>) -> Result<(), ExtensionRegistryError>
    where
        T: Send + Sync + 'static,
    {
        let point = extension.point();
        let slot = self.slots.entry(point).or_insert_with(|| Slot {
            payload_type: TypeId::of::<T>(),
            payload_type_name: type_name::<T>(),
            entries: Vec::new(),
        });

        if slot.payload_type != TypeId::of::<T>() {
            warn!(
                "event=extension_register module=extension status=error point={} registered={} attempted={}",
                point,
                slot.payload_type_name,
                type_name::<T>()
            );
            return Err(ExtensionRegistryError::PayloadTypeMismatch {
                point,
                registered: slot.payload_type_name,
                attempted: type_name::<T>(),
            });
        }

        slot.entries.push(Box::new(extension.into_payload()));
        debug!(
            "event=extension_register module=extension status=ok point={} count={}",
            point,
            slot.entries.len()
        );
        Ok(())
    }

    /// Returns every entry registered for `point`, in registration order.
    ///
    /// Returns an empty vector when nothing is registered. Querying with a
    /// point whose payload type differs from the registered one is rejected.
    pub fn extensions_for<T>(
        &self,
        point: &ExtensionPoint<T>,
    ) -> Result<Vec<Extension<T>>, ExtensionRegistryError>
    where
        T: Clone + 'static,
    {
        let Some(slot) = self.slots.get(&point.name()) else {
            return Ok(vec![]);
        };
        if slot.payload_type != TypeId::of::<T>() {
            warn!(
                "event=extension_query module=extension status=error point={} registered={} attempted={}",
                point.name(),
                slot.payload_type_name,
                type_name::<T>()
            );
            return Err(ExtensionRegistryError::PayloadTypeMismatch {
                point: point.name(),
                registered: slot.payload_type_name,
                attempted: type_name::<T>(),
            });
        }
        Ok(slot
            .entries
            .iter()
            .filter_map(|entry| entry.downcast_ref::<T>())
            .map(|payload| point.implement_with(payload.clone()))
            .collect())
    }

    /// Returns the only entry for a single-valued consumer.
    ///
    /// `Ok(None)` when nothing is registered; more than one entry is an
    /// authoring error and nothing is returned.
    pub fn single_for<T>(
        &self,
        point: &ExtensionPoint<T>,
    ) -> Result<Option<Extension<T>>, ExtensionRegistryError>
    where
        T: Clone + 'static,
    {
        let mut entries = self.extensions_for(point)?;
        if entries.len() > 1 {
            return Err(ExtensionRegistryError::TooManyExtensions {
                point: point.name(),
                found: entries.len(),
            });
        }
        Ok(entries.pop())
    }

    /// Number of entries registered under `name`.
    pub fn len_for(&self, name: ExtensionPointName) -> usize {
        self.slots.get(&name).map_or(0, |slot| slot.entries.len())
    }

    /// Point names with at least one registration, sorted.
    pub fn point_names(&self) -> Vec<ExtensionPointName> {
        self.slots.keys().copied().collect()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Ends the registration phase.
    pub fn freeze(self) -> FrozenRegistry {
        debug!(
            "event=extension_freeze module=extension status=ok points={}",
            self.slots.len()
        );
        FrozenRegistry {
            inner: Arc::new(self),
        }
    }
}

impl std::fmt::Debug for ExtensionRegistry {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_map()
            .entries(
                self.slots
                    .iter()
                    .map(|(name, slot)| (name, (slot.payload_type_name, slot.entries.len()))),
            )
            .finish()
    }
}

/// Read-only registry shared with the rendering shell.
#[derive(Debug, Clone)]
pub struct FrozenRegistry {
    inner: Arc<ExtensionRegistry>,
}

impl FrozenRegistry {
    pub fn extensions_for<T>(
        &self,
        point: &ExtensionPoint<T>,
    ) -> Result<Vec<Extension<T>>, ExtensionRegistryError>
    where
        T: Clone + 'static,
    {
        self.inner.extensions_for(point)
    }

    pub fn single_for<T>(
        &self,
        point: &ExtensionPoint<T>,
    ) -> Result<Option<Extension<T>>, ExtensionRegistryError>
    where
        T: Clone + 'static,
    {
        self.inner.single_for(point)
    }

    pub fn len_for(&self, name: ExtensionPointName) -> usize {
        self.inner.len_for(name)
    }

    pub fn point_names(&self) -> Vec<ExtensionPointName> {
        self.inner.point_names()
    }
}

impl From<ExtensionRegistry> for FrozenRegistry {
    fn from(registry: ExtensionRegistry) -> Self {
        registry.freeze()
    }
}

/// Registration and cardinality errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExtensionRegistryError {
    PayloadTypeMismatch {
        point: ExtensionPointName,
        registered: &'static str,
        attempted: &'static str,
    },
    TooManyExtensions {
        point: ExtensionPointName,
        found: usize,
    },
}

impl Display for ExtensionRegistryError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::PayloadTypeMismatch {
                point,
                registered,
                attempted,
            } => write!(
                f,
                "extension point {point} holds `{registered}` payloads; refusing `{attempted}`"
            ),
            Self::TooManyExtensions { point, found } => {
                write!(f, "only one {point} extension allowed, found {found}")
            }
        }
    }
}

impl Error for ExtensionRegistryError {}

#[cfg(test)]
mod tests {
    use super::{ExtensionRegistry, ExtensionRegistryError};
    use crate::extension::point::{ExtensionPoint, ExtensionPointName};

    const NUMBERS: ExtensionPoint<u32> = ExtensionPoint::of_type(ExtensionPointName::BottomBarItem);
    const LABELS: ExtensionPoint<String> =
        ExtensionPoint::single(ExtensionPointName::MainViewContent);

    #[test]
    fn preserves_registration_order() {
        let mut registry = ExtensionRegistry::new();
        for value in [3, 1, 2] {
            registry
                .register(NUMBERS.implement_with(value))
                .expect("registration");
        }

        let values: Vec<u32> = registry
            .extensions_for(&NUMBERS)
            .expect("query")
            .into_iter()
            .map(|extension| extension.into_payload())
            .collect();
        assert_eq!(values, vec![3, 1, 2]);
    }

    #[test]
    fn empty_point_returns_empty_sequence() {
        let registry = ExtensionRegistry::new();
        assert_eq!(registry.extensions_for(&NUMBERS), Ok(vec![]));
        assert_eq!(registry.single_for(&LABELS), Ok(None));
        assert!(registry.is_empty());
    }

    #[test]
    fn rejects_second_payload_type_under_same_name() {
        let mut registry = ExtensionRegistry::new();
        registry
            .register(NUMBERS.implement_with(7))
            .expect("first registration");

        let impostor = ExtensionPoint::<&'static str>::of_type(ExtensionPointName::BottomBarItem);
        let err = registry
            .register(impostor.implement_with("seven"))
            .expect_err("mismatched payload type must fail");
        assert!(matches!(
            err,
            ExtensionRegistryError::PayloadTypeMismatch {
                point: ExtensionPointName::BottomBarItem,
                ..
            }
        ));
        assert_eq!(registry.len_for(ExtensionPointName::BottomBarItem), 1);
    }

    #[test]
    fn query_with_mismatched_payload_type_fails() {
        let mut registry = ExtensionRegistry::new();
        registry
            .register(NUMBERS.implement_with(7))
            .expect("registration");

        let impostor = ExtensionPoint::<String>::of_type(ExtensionPointName::BottomBarItem);
        let expected = ExtensionRegistryError::PayloadTypeMismatch {
            point: ExtensionPointName::BottomBarItem,
            registered: "u32",
            attempted: std::any::type_name::<String>(),
        };
        assert_eq!(registry.extensions_for(&impostor), Err(expected.clone()));
        assert_eq!(registry.single_for(&impostor), Err(expected));
        assert_eq!(registry.len_for(ExtensionPointName::BottomBarItem), 1);
    }

    #[test]
    fn single_for_rejects_multiple_entries() {
        let mut registry = ExtensionRegistry::new();
        registry
            .register(LABELS.implement_with("a".to_string()))
            .expect("registration");
        assert_eq!(
            registry
                .single_for(&LABELS)
                .expect("one entry")
                .map(|extension| extension.into_payload()),
            Some("a".to_string())
        );

        registry
            .register(LABELS.implement_with("b".to_string()))
            .expect("registry accepts extra entries");
        let err = registry.single_for(&LABELS).expect_err("two entries");
        assert_eq!(
            err,
            ExtensionRegistryError::TooManyExtensions {
                point: ExtensionPointName::MainViewContent,
                found: 2,
            }
        );
        assert_eq!(
            err.to_string(),
            "only one MainViewContent extension allowed, found 2"
        );
    }

    #[test]
    fn frozen_registry_keeps_query_surface() {
        let mut registry = ExtensionRegistry::new();
        registry
            .register(NUMBERS.implement_with(1))
            .expect("registration");
        let frozen = registry.freeze();
        let shared = frozen.clone();

        assert_eq!(frozen.extensions_for(&NUMBERS).expect("query").len(), 1);
        assert_eq!(shared.len_for(ExtensionPointName::BottomBarItem), 1);
        assert_eq!(
            shared.point_names(),
            vec![ExtensionPointName::BottomBarItem]
        );
    }
}
