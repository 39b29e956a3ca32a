use alloc::{boxed::Box, string::String, vec::Vec};
use core::fmt::{self, Debug, Formatter};
use parking_lot::Mutex;
use tracing::{debug, debug_span, error, info_span};

use crate::{
    any::TypeInfo,
    candidates::{Candidate, Candidates},
    catalog::Catalog,
    config::{CapabilityBinding, Config},
    constructor::select,
    errors::{BootstrapErrorKind, InstantiatorErrorKind, ResolveErrorKind},
    graph::DependencyGraph,
    registry::{Bean, BeanRegistry},
    scanner::NamespaceScanner,
    utils::thread_safety::{handle, RcAnyThreadSafety, RcThreadSafety, SendSafety, SyncSafety},
};

/// Application context: the candidates found by scanning and the singletons built from them.
///
/// Cloning is cheap and shares the registry. Two contexts built with [`Context::new`] never share beans.
#[derive(Clone)]
pub struct Context {
    pub(crate) inner: RcThreadSafety<ContextInner>,
}

pub(crate) struct ContextInner {
    candidates: Candidates,
    registry: Mutex<BeanRegistry>,
}

impl Context {
    /// Scans every configured root of `catalog` and registers the components found, dependencies first.
    ///
    /// # Errors
    /// - [`BootstrapErrorKind::Configuration`] when `config` declares no roots.
    /// - [`BootstrapErrorKind::Scan`] when a root has nothing under it or isn't a namespace.
    /// - [`BootstrapErrorKind::AmbiguousCapability`] when [`CapabilityBinding::Unique`] is set and a capability has several implementations.
    /// - [`BootstrapErrorKind::Cycle`] when constructors depend on each other in a cycle.
    ///
    /// A component that fails to build isn't an error here: it's logged and left unregistered.
    pub fn new(catalog: &Catalog, config: &Config) -> Result<Self, BootstrapErrorKind> {
        let span = info_span!("bootstrap");
        let _guard = span.enter();

        let roots = config.roots()?;
        let scanner = NamespaceScanner::new(catalog);

        let mut candidates = Candidates::default();
        for root in roots {
            for descriptor in scanner.scan(root)? {
                candidates.push(descriptor);
            }
        }
        if config.capability_binding == CapabilityBinding::Unique {
            candidates.check_unique()?;
        }

        let order = DependencyGraph::new(&candidates).topological_order()?;

        let context = Self {
            inner: RcThreadSafety::new(ContextInner {
                candidates,
                registry: Mutex::new(BeanRegistry::default()),
            }),
        };
        for type_info in order {
            if let Some(candidate) = context.inner.candidates.get(&type_info) {
                if let Err(err) = context.register(candidate) {
                    error!(%type_info, %err, "Component not registered");
                }
            }
        }

        debug!(
            candidates = context.inner.candidates.len(),
            registered = context.len(),
            "Context started"
        );
        Ok(context)
    }

    /// Bean of type `T`, either a component or a capability (`dyn Trait`) one of them binds.
    ///
    /// A component that isn't registered yet is built on demand.
    ///
    /// # Errors
    /// - Any of the [`ResolveErrorKind`] kinds for which [`ResolveErrorKind::is_bean_not_found`] holds.
    /// - [`ResolveErrorKind::InstanceMismatch`] when the instance stored for `T` isn't a `T`.
    pub fn get<T>(&self) -> Result<RcThreadSafety<T>, ResolveErrorKind>
    where
        T: ?Sized + SendSafety + SyncSafety + 'static,
    {
        let type_info = TypeInfo::of::<T>();

        let span = info_span!("get", bean = type_info.name);
        let _guard = span.enter();

        let instance = self.resolve(&type_info)?;
        handle(&instance).ok_or(ResolveErrorKind::InstanceMismatch { type_info })
    }

    /// Bean registered under `name`, viewed as `T`: its own type or a capability it binds.
    ///
    /// # Errors
    /// - [`ResolveErrorKind::NoBeanNamed`] when no bean has this name.
    /// - [`ResolveErrorKind::IncorrectType`] when the bean can't be viewed as `T`.
    pub fn get_by_name<T>(&self, name: &str) -> Result<RcThreadSafety<T>, ResolveErrorKind>
    where
        T: ?Sized + SendSafety + SyncSafety + 'static,
    {
        let expected = TypeInfo::of::<T>();

        let span = info_span!("get_by_name", name, bean = expected.name);
        let _guard = span.enter();

        let named = {
            let registry = self.inner.registry.lock();
            registry
                .type_named(name)
                .and_then(|type_info| registry.get(&type_info).map(|instance| (type_info, instance)))
        };
        let Some((actual, instance)) = named else {
            debug!("Name not found");
            return Err(ResolveErrorKind::NoBeanNamed { name: name.into() });
        };

        let instance = if actual == expected {
            Some(instance)
        } else {
            self.inner
                .candidates
                .get(&actual)
                .and_then(|candidate| candidate.descriptor.cast(&expected, &instance))
        };
        instance
            .and_then(|instance| handle(&instance))
            .ok_or(ResolveErrorKind::IncorrectType { expected, actual })
    }

    /// Whether a bean of type `T`, or a bean binding capability `T`, is registered. Nothing is built.
    #[must_use]
    pub fn contains<T: ?Sized + 'static>(&self) -> bool {
        let type_info = TypeInfo::of::<T>();
        let registry = self.inner.registry.lock();

        registry.contains(&type_info)
            || registry.iter().any(|bean| {
                self.inner
                    .candidates
                    .get(&bean.type_info)
                    .is_some_and(|candidate| candidate.descriptor.binds(&type_info))
            })
    }

    #[inline]
    #[must_use]
    pub fn contains_name(&self, name: &str) -> bool {
        self.inner.registry.lock().type_named(name).is_some()
    }

    /// Names of the registered beans, sorted.
    #[must_use]
    pub fn bean_names(&self) -> Vec<String> {
        self.inner.registry.lock().names().map(String::from).collect()
    }

    /// Number of registered beans.
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.inner.registry.lock().len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Types found by scanning and the names they register under, in scan order.
    pub fn candidates(&self) -> impl Iterator<Item = (TypeInfo, String)> + '_ {
        self.inner
            .candidates
            .iter()
            .map(|Candidate { descriptor, .. }| (descriptor.type_info(), descriptor.bean_name()))
    }
}

impl Context {
    /// Erased handle of `type_info`: of the component itself, or of the capability for capability types.
    fn resolve(&self, type_info: &TypeInfo) -> Result<RcAnyThreadSafety, ResolveErrorKind> {
        if self.inner.candidates.is_capability(type_info) {
            return self.resolve_capability(type_info);
        }

        let registered = self.inner.registry.lock().get(type_info);
        if let Some(instance) = registered {
            debug!("Found in registry");
            return Ok(instance);
        }
        debug!("Not found in registry");

        let Some(candidate) = self.inner.candidates.get(type_info) else {
            return Err(ResolveErrorKind::NoBean { type_info: *type_info });
        };
        self.register(candidate).map_err(|err| {
            error!(%err, "Component not registered");
            ResolveErrorKind::NotConstructed {
                type_info: *type_info,
                source: Box::new(err),
            }
        })
    }

    /// The first candidate binding `capability` in scan order, built if needed.
    /// When it can't be built, the first registered bean binding it, in registration order.
    fn resolve_capability(&self, capability: &TypeInfo) -> Result<RcAnyThreadSafety, ResolveErrorKind> {
        if let Some(candidate) = self.inner.candidates.implementations(capability).next() {
            match self.register(candidate) {
                Ok(instance) => {
                    if let Some(instance) = candidate.descriptor.cast(capability, &instance) {
                        debug!(implementation = %candidate.descriptor.type_info(), "Capability bound");
                        return Ok(instance);
                    }
                }
                Err(err) => error!(implementation = %candidate.descriptor.type_info(), %err, "Component not registered"),
            }
        }

        let registry = self.inner.registry.lock();
        for Bean { type_info, instance, .. } in registry.iter() {
            let cast = self
                .inner
                .candidates
                .get(type_info)
                .and_then(|candidate| candidate.descriptor.cast(capability, instance));
            if let Some(instance) = cast {
                debug!(implementation = %type_info, "Capability bound to registered bean");
                return Ok(instance);
            }
        }

        Err(ResolveErrorKind::NoImplementation { type_info: *capability })
    }

    /// Builds and stores `candidate` unless it's registered already.
    ///
    /// The registry isn't locked while the constructor runs, it may build its own dependencies on demand.
    fn register(&self, candidate: &Candidate) -> Result<RcAnyThreadSafety, InstantiatorErrorKind> {
        let type_info = candidate.descriptor.type_info();

        let span = debug_span!("register", bean = type_info.name);
        let _guard = span.enter();

        let registered = self.inner.registry.lock().get(&type_info);
        if let Some(instance) = registered {
            return Ok(instance);
        }

        let plan = select(&candidate.descriptor)?;
        let instance = (plan.constructor.instantiator)(self)?;

        let instance = self.inner.registry.lock().insert(Bean {
            type_info,
            name: candidate.descriptor.bean_name(),
            instance,
        });
        debug!("Registered");

        Ok(instance)
    }
}

impl Debug for Context {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("Context")
            .field("candidates", &self.inner.candidates.len())
            .field("registered", &self.len())
            .finish()
    }
}
