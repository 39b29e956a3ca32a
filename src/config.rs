use alloc::{string::String, vec::Vec};

use crate::errors::ConfigurationErrorKind;

/// Namespace roots to scan for components.
///
/// Roots are scanned in the order they're listed; that order is the first key of the candidate order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ComponentScan {
    pub base_packages: Vec<String>,
}

/// How a capability with several implementing candidates is bound.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum CapabilityBinding {
    /// The first implementing candidate in scan order wins.
    #[default]
    FirstMatch,
    /// Every capability must be bound by exactly one candidate, bootstrap fails otherwise.
    Unique,
}

/// Config for a context
/// ## Fields
/// - `component_scan`:
///   Namespace roots to scan. Required: a config without it (or with no roots) is rejected before any scanning.
///
/// - `capability_binding`:
///   Policy for capabilities bound by more than one candidate. See [`CapabilityBinding`].
#[derive(Debug, Clone, Default)]
pub struct Config {
    pub component_scan: Option<ComponentScan>,
    pub capability_binding: CapabilityBinding,
}

impl Config {
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a namespace root to scan, creating the component scan if there's none yet.
    #[inline]
    #[must_use]
    pub fn base_package(mut self, root: impl Into<String>) -> Self {
        self.component_scan
            .get_or_insert_with(ComponentScan::default)
            .base_packages
            .push(root.into());
        self
    }

    #[inline]
    #[must_use]
    pub fn base_packages<I, S>(self, roots: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        roots.into_iter().fold(self, Self::base_package)
    }

    #[inline]
    #[must_use]
    pub const fn capability_binding(mut self, capability_binding: CapabilityBinding) -> Self {
        self.capability_binding = capability_binding;
        self
    }

    pub(crate) fn roots(&self) -> Result<&[String], ConfigurationErrorKind> {
        let Some(ComponentScan { base_packages }) = &self.component_scan else {
            return Err(ConfigurationErrorKind::NoComponentScan);
        };
        if base_packages.is_empty() {
            return Err(ConfigurationErrorKind::NoBasePackages);
        }
        Ok(base_packages)
    }
}
