//! Per-object-type style selections.
//!
//! The store maps an object type to the style currently selected for it.
//! Slots are keyed by the object type's [`TypeId`] and hold a value of that
//! type's own [`PlotObject::Styles`], so a slot can only ever be written and
//! read through the same `T`.

use crate::error::DispatchError;
use crate::style::{PlotObject, StyleVariant};
use std::any::{type_name, Any, TypeId};
use std::collections::HashMap;
use std::fmt;
use std::hash::{Hash, Hasher};

/// Identity of a plottable type.
#[derive(Clone, Copy)]
pub struct ObjectKey {
    id: TypeId,
    name: &'static str,
}

impl ObjectKey {
    pub fn of<T: ?Sized + 'static>() -> Self {
        Self {
            id: TypeId::of::<T>(),
            name: type_name::<T>(),
        }
    }

    /// Fully qualified type name.
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Type name without its module path.
    pub fn short_name(&self) -> &'static str {
        strip_path(self.name)
    }
}

impl PartialEq for ObjectKey {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for ObjectKey {}

impl Hash for ObjectKey {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

impl fmt::Debug for ObjectKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ObjectKey({})", self.short_name())
    }
}

impl fmt::Display for ObjectKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.short_name())
    }
}

pub(crate) fn short_type_name<T: ?Sized>() -> &'static str {
    strip_path(type_name::<T>())
}

fn strip_path(full: &'static str) -> &'static str {
    let base = full.split('<').next().unwrap_or(full);
    base.rsplit("::").next().unwrap_or(base)
}

struct Slot {
    alternative: &'static str,
    styles: Box<dyn Any>,
}

/// Remembers the last style selected for each object type.
///
/// Selecting replaces the previous entry for that type; entries are never
/// merged or removed.
#[derive(Default)]
pub struct StyleStore {
    slots: HashMap<ObjectKey, Slot>,
}

impl StyleStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Selects `styles` for objects of type `T`, returning the previous
    /// selection if there was one.
    pub fn select<T: PlotObject>(&mut self, styles: T::Styles) -> Option<T::Styles> {
        let key = ObjectKey::of::<T>();
        let alternative = styles.alternative();
        log::debug!("selected {} for {}", alternative, key);

        self.slots
            .insert(
                key,
                Slot {
                    alternative,
                    styles: Box::new(styles),
                },
            )
            .and_then(|slot| slot.styles.downcast().ok().map(|boxed| *boxed))
    }

    /// The selection for `T`.
    ///
    /// Fails with [`DispatchError::UnresolvedStyle`] if nothing was ever
    /// selected for `T`.
    pub fn get<T: PlotObject>(&self) -> Result<&T::Styles, DispatchError> {
        let key = ObjectKey::of::<T>();
        let slot = self
            .slots
            .get(&key)
            .ok_or(DispatchError::UnresolvedStyle {
                object: key.short_name(),
            })?;

        slot.styles
            .downcast_ref::<T::Styles>()
            .ok_or(DispatchError::StyleMismatch {
                object: key.name(),
                expected: type_name::<T::Styles>(),
            })
    }

    pub fn contains<T: 'static>(&self) -> bool {
        self.slots.contains_key(&ObjectKey::of::<T>())
    }

    /// Name of the alternative selected for `T`.
    pub fn alternative<T: 'static>(&self) -> Option<&'static str> {
        self.slots
            .get(&ObjectKey::of::<T>())
            .map(|slot| slot.alternative)
    }

    pub fn keys(&self) -> impl Iterator<Item = ObjectKey> + '_ {
        self.slots.keys().copied()
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }
}

impl fmt::Debug for StyleStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map()
            .entries(
                self.slots
                    .iter()
                    .map(|(key, slot)| (key.short_name(), slot.alternative)),
            )
            .finish()
    }
}
