use alloc::{collections::BTreeMap, string::String, vec::Vec};
use tracing::{debug, warn};

use crate::{any::TypeInfo, utils::thread_safety::RcAnyThreadSafety};

/// A registered singleton.
#[derive(Clone)]
pub(crate) struct Bean {
    pub(crate) type_info: TypeInfo,
    pub(crate) name: String,
    pub(crate) instance: RcAnyThreadSafety,
}

/// Singletons of one context, in registration order, indexed by type and by name.
#[derive(Default)]
pub(crate) struct BeanRegistry {
    beans: Vec<Bean>,
    by_type: BTreeMap<TypeInfo, usize>,
    by_name: BTreeMap<String, TypeInfo>,
}

impl BeanRegistry {
    #[inline]
    pub(crate) fn get(&self, type_info: &TypeInfo) -> Option<RcAnyThreadSafety> {
        self.by_type.get(type_info).map(|&pos| self.beans[pos].instance.clone())
    }

    #[inline]
    pub(crate) fn contains(&self, type_info: &TypeInfo) -> bool {
        self.by_type.contains_key(type_info)
    }

    #[inline]
    pub(crate) fn type_named(&self, name: &str) -> Option<TypeInfo> {
        self.by_name.get(name).copied()
    }

    /// Stores `bean` unless its type is already registered. Returns the instance that ends up registered.
    ///
    /// A name already bound to another type is rebound to this one.
    pub(crate) fn insert(&mut self, bean: Bean) -> RcAnyThreadSafety {
        if let Some(&pos) = self.by_type.get(&bean.type_info) {
            debug!(type_info = %bean.type_info, "Already registered, instance dropped");
            return self.beans[pos].instance.clone();
        }

        if let Some(previous) = self.by_name.insert(bean.name.clone(), bean.type_info) {
            warn!(name = %bean.name, %previous, current = %bean.type_info, "Bean name rebound");
        }

        let instance = bean.instance.clone();
        self.by_type.insert(bean.type_info, self.beans.len());
        self.beans.push(bean);
        instance
    }

    /// Sorted bean names.
    #[inline]
    pub(crate) fn names(&self) -> impl Iterator<Item = &str> {
        self.by_name.keys().map(String::as_str)
    }

    #[inline]
    pub(crate) fn iter(&self) -> core::slice::Iter<'_, Bean> {
        self.beans.iter()
    }

    #[inline]
    pub(crate) fn len(&self) -> usize {
        self.beans.len()
    }
}
