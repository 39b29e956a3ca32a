use alloc::{string::String, vec::Vec};

use crate::{any::TypeInfo, component::ComponentDescriptor};

/// One type known to the catalog.
#[derive(Debug, Clone)]
pub enum Entry {
    /// A type carrying the component marker.
    Component(ComponentDescriptor),
    /// A type without the marker. The scanner walks past it.
    Plain { namespace: String, type_info: TypeInfo },
}

impl Entry {
    #[inline]
    #[must_use]
    pub fn namespace(&self) -> &str {
        match self {
            Self::Component(descriptor) => descriptor.namespace(),
            Self::Plain { namespace, .. } => namespace,
        }
    }

    #[inline]
    #[must_use]
    pub fn type_info(&self) -> TypeInfo {
        match self {
            Self::Component(descriptor) => descriptor.type_info(),
            Self::Plain { type_info, .. } => *type_info,
        }
    }
}

/// Explicit list of the types the program declares, grouped by namespace when scanned.
///
/// Order of insertion is the order types are visited inside one namespace.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    entries: Vec<Entry>,
}

impl Catalog {
    #[inline]
    #[must_use]
    pub const fn new() -> Self {
        Self { entries: Vec::new() }
    }

    /// Adds a marked type.
    #[inline]
    #[must_use]
    pub fn component(mut self, descriptor: impl Into<ComponentDescriptor>) -> Self {
        self.entries.push(Entry::Component(descriptor.into()));
        self
    }

    /// Adds an unmarked type living in `namespace`.
    #[inline]
    #[must_use]
    pub fn declare<T: ?Sized + 'static>(mut self, namespace: impl Into<String>) -> Self {
        self.entries.push(Entry::Plain {
            namespace: namespace.into(),
            type_info: TypeInfo::of::<T>(),
        });
        self
    }

    #[inline]
    #[must_use]
    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Extend<Entry> for Catalog {
    fn extend<I: IntoIterator<Item = Entry>>(&mut self, iter: I) {
        self.entries.extend(iter);
    }
}

impl Extend<ComponentDescriptor> for Catalog {
    fn extend<I: IntoIterator<Item = ComponentDescriptor>>(&mut self, iter: I) {
        self.entries.extend(iter.into_iter().map(Entry::Component));
    }
}

impl FromIterator<ComponentDescriptor> for Catalog {
    fn from_iter<I: IntoIterator<Item = ComponentDescriptor>>(iter: I) -> Self {
        let mut catalog = Self::new();
        catalog.extend(iter);
        catalog
    }
}
