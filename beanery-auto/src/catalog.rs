use alloc::vec::Vec;
use beanery::Catalog;

use crate::entry_getters::__COMPONENTS;

pub trait AutoCatalog {
    /// Adds every `#[component]` linked into the binary, sorted by namespace then by type name.
    #[must_use]
    fn provide_auto_components(self) -> Self;
}

impl AutoCatalog for Catalog {
    #[inline]
    fn provide_auto_components(mut self) -> Self {
        let mut components = __COMPONENTS.iter().map(|getter| getter()).collect::<Vec<_>>();
        components.sort_by(|a, b| (a.namespace(), a.type_info().name).cmp(&(b.namespace(), b.type_info().name)));

        self.extend(components);
        self
    }
}
