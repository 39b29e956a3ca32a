use alloc::{collections::BTreeMap, vec::Vec};
use tracing::debug;

use crate::{any::TypeInfo, component::ComponentDescriptor, errors::BootstrapErrorKind};

/// A scanned component and its position in scan order.
#[derive(Debug, Clone)]
pub(crate) struct Candidate {
    pub(crate) descriptor: ComponentDescriptor,
    pub(crate) order: usize,
}

/// Components found by scanning, in scan order, with lookups by type and by bound capability.
#[derive(Debug, Default)]
pub(crate) struct Candidates {
    candidates: Vec<Candidate>,
    by_type: BTreeMap<TypeInfo, usize>,
    by_capability: BTreeMap<TypeInfo, Vec<usize>>,
}

impl Candidates {
    /// Appends a candidate unless its type was already reached, e.g. through an overlapping root.
    pub(crate) fn push(&mut self, descriptor: &ComponentDescriptor) -> bool {
        let type_info = descriptor.type_info();
        if self.by_type.contains_key(&type_info) {
            debug!(%type_info, "Candidate already found");
            return false;
        }

        let order = self.candidates.len();
        for capability in descriptor.capabilities() {
            self.by_capability.entry(capability).or_default().push(order);
        }
        self.by_type.insert(type_info, order);
        self.candidates.push(Candidate {
            descriptor: descriptor.clone(),
            order,
        });
        true
    }

    #[inline]
    pub(crate) fn get(&self, type_info: &TypeInfo) -> Option<&Candidate> {
        self.by_type.get(type_info).map(|&order| &self.candidates[order])
    }

    /// Candidates binding `capability`, in scan order.
    pub(crate) fn implementations(&self, capability: &TypeInfo) -> impl Iterator<Item = &Candidate> {
        self.by_capability
            .get(capability)
            .into_iter()
            .flatten()
            .map(|&order| &self.candidates[order])
    }

    #[inline]
    pub(crate) fn is_capability(&self, type_info: &TypeInfo) -> bool {
        self.by_capability.contains_key(type_info)
    }

    #[inline]
    pub(crate) fn iter(&self) -> core::slice::Iter<'_, Candidate> {
        self.candidates.iter()
    }

    #[inline]
    pub(crate) fn len(&self) -> usize {
        self.candidates.len()
    }

    /// Fails on the first capability, in scan order of its first implementation, bound by more than one candidate.
    pub(crate) fn check_unique(&self) -> Result<(), BootstrapErrorKind> {
        let ambiguous = self
            .by_capability
            .iter()
            .filter(|(_, orders)| orders.len() > 1)
            .min_by_key(|(_, orders)| orders[0]);

        match ambiguous {
            Some((&capability, orders)) => Err(BootstrapErrorKind::AmbiguousCapability {
                capability,
                implementations: orders.iter().map(|&order| self.candidates[order].descriptor.type_info()).collect(),
            }),
            None => Ok(()),
        }
    }
}
