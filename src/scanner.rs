use alloc::vec::Vec;
use tracing::{debug, warn};

use crate::{
    catalog::{Catalog, Entry},
    component::ComponentDescriptor,
    errors::ScanErrorKind,
};

/// Walks a namespace root of a [`Catalog`] and collects the marked types under it.
pub(crate) struct NamespaceScanner<'a> {
    catalog: &'a Catalog,
}

#[derive(Default)]
struct Node<'a> {
    entries: Vec<&'a Entry>,
    children: Vec<(&'a str, Node<'a>)>,
}

impl<'a> Node<'a> {
    fn child(&mut self, segment: &'a str) -> &mut Self {
        let pos = match self.children.iter().position(|(name, _)| *name == segment) {
            Some(pos) => pos,
            None => {
                self.children.push((segment, Node::default()));
                self.children.len() - 1
            }
        };
        &mut self.children[pos].1
    }

    fn is_empty(&self) -> bool {
        self.entries.is_empty() && self.children.iter().all(|(_, child)| child.is_empty())
    }

    fn collect(&self, components: &mut Vec<&'a ComponentDescriptor>) {
        for entry in &self.entries {
            if let Entry::Component(descriptor) = entry {
                components.push(descriptor);
            }
        }
        for (_, child) in &self.children {
            child.collect(components);
        }
    }
}

impl<'a> NamespaceScanner<'a> {
    #[inline]
    pub(crate) const fn new(catalog: &'a Catalog) -> Self {
        Self { catalog }
    }

    /// Marked types under `root`, depth-first: a namespace's own entries in catalog order,
    /// then its sub-namespaces in the order they first appear.
    pub(crate) fn scan(&self, root: &str) -> Result<Vec<&'a ComponentDescriptor>, ScanErrorKind> {
        if !is_valid_namespace(root) {
            return Err(ScanErrorKind::UnresolvedRoot { root: root.into() });
        }

        let mut tree = Node::default();
        for entry in self.catalog.entries() {
            let namespace = entry.namespace();
            let Some(relative) = relative_to(namespace, root) else {
                continue;
            };
            if !is_valid_namespace(namespace) {
                let err = ScanErrorKind::MalformedEntry {
                    namespace: namespace.into(),
                    type_info: entry.type_info(),
                };
                warn!(%err, "Skip entry");
                continue;
            }

            let node = if relative.is_empty() {
                &mut tree
            } else {
                relative.split("::").fold(&mut tree, Node::child)
            };
            node.entries.push(entry);
        }

        if tree.is_empty() {
            return Err(ScanErrorKind::UnresolvedRoot { root: root.into() });
        }

        let mut components = Vec::new();
        tree.collect(&mut components);

        debug!(root, found = components.len(), "Scanned");
        Ok(components)
    }
}

/// Part of `namespace` below `root`: `Some("")` for the root itself, `None` outside of it.
fn relative_to<'n>(namespace: &'n str, root: &str) -> Option<&'n str> {
    let rest = namespace.strip_prefix(root)?;
    if rest.is_empty() {
        return Some(rest);
    }
    rest.strip_prefix("::")
}

/// `::`-separated path of identifiers.
pub(crate) fn is_valid_namespace(namespace: &str) -> bool {
    namespace.split("::").all(|segment| {
        let mut chars = segment.chars();
        match chars.next() {
            Some(first) => (first.is_alphabetic() || first == '_') && chars.all(|c| c.is_alphanumeric() || c == '_'),
            None => false,
        }
    })
}

#[cfg(test)]
mod tests {
    extern crate std;

    use alloc::{
        format,
        string::{String, ToString as _},
        vec::Vec,
    };
    use tracing_test::traced_test;

    use super::{is_valid_namespace, relative_to, NamespaceScanner};
    use crate::{
        any::TypeInfo,
        catalog::Catalog,
        component::ComponentDescriptor,
        errors::ScanErrorKind,
    };

    struct UserRepository;
    struct OrderRepository;
    struct UserServiceImpl;
    struct ExternalWebClient;
    struct AuditLog;
    struct UserDto;

    fn names(components: &[&ComponentDescriptor]) -> Vec<&'static str> {
        components.iter().map(|descriptor| descriptor.type_info().short_name()).collect()
    }

    #[test]
    fn test_valid_namespace() {
        assert!(is_valid_namespace("app"));
        assert!(is_valid_namespace("app::services::_internal2"));
        assert!(!is_valid_namespace(""));
        assert!(!is_valid_namespace("app::"));
        assert!(!is_valid_namespace("app::::services"));
        assert!(!is_valid_namespace("app::2fa"));
        assert!(!is_valid_namespace("app::user-services"));
    }

    #[test]
    fn test_relative_to() {
        assert_eq!(relative_to("app", "app"), Some(""));
        assert_eq!(relative_to("app::services::impls", "app"), Some("services::impls"));
        assert_eq!(relative_to("application", "app"), None);
        assert_eq!(relative_to("other::app", "app"), None);
    }

    #[test]
    #[traced_test]
    fn test_depth_first_order() {
        let catalog = Catalog::new()
            .component(ComponentDescriptor::of::<UserServiceImpl>("app::services"))
            .component(ComponentDescriptor::of::<ExternalWebClient>("app::client"))
            .component(ComponentDescriptor::of::<UserRepository>("app::services::repositories"))
            .component(ComponentDescriptor::of::<AuditLog>("app"))
            .component(ComponentDescriptor::of::<OrderRepository>("app::services"));

        let components = NamespaceScanner::new(&catalog).scan("app").unwrap();

        assert_eq!(
            names(&components),
            ["AuditLog", "UserServiceImpl", "OrderRepository", "UserRepository", "ExternalWebClient"]
        );
    }

    #[test]
    #[traced_test]
    fn test_unmarked_ignored() {
        let catalog = Catalog::new()
            .declare::<UserDto>("app::dto")
            .component(ComponentDescriptor::of::<UserRepository>("app::repositories"));

        let components = NamespaceScanner::new(&catalog).scan("app").unwrap();
        assert_eq!(names(&components), ["UserRepository"]);

        let components = NamespaceScanner::new(&catalog).scan("app::dto").unwrap();
        assert!(components.is_empty());
    }

    #[test]
    #[traced_test]
    fn test_unresolved_root() {
        let catalog = Catalog::new().component(ComponentDescriptor::of::<UserRepository>("app::repositories"));
        let scanner = NamespaceScanner::new(&catalog);

        for root in ["missing", "app::repo", "app::", ""] {
            match scanner.scan(root) {
                Err(ScanErrorKind::UnresolvedRoot { root: unresolved }) => assert_eq!(unresolved, root),
                other => panic!("Unexpected result for `{root}`: {other:?}"),
            }
        }
    }

    #[test]
    #[traced_test]
    fn test_malformed_entry_skipped() {
        let catalog = Catalog::new()
            .component(ComponentDescriptor::of::<UserServiceImpl>("app::::services"))
            .component(ComponentDescriptor::of::<UserRepository>("app::repositories"));

        let components = NamespaceScanner::new(&catalog).scan("app").unwrap();

        assert_eq!(names(&components), ["UserRepository"]);
        assert_eq!(components[0].type_info(), TypeInfo::of::<UserRepository>());
        assert!(logs_contain("Skip entry"));
    }
}
