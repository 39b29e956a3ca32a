use alloc::{
    string::{String, ToString as _},
    vec::Vec,
};
use core::{
    fmt::{self, Debug, Formatter},
    marker::PhantomData,
};

use crate::{
    any::TypeInfo,
    dependency::Dependency,
    dependency_resolver::DependencyResolver,
    errors::InstantiateErrorKind,
    instantiator::{boxed_instantiator, BoxedInstantiator, Instantiator},
    utils::thread_safety::{erase, handle, RcAnyThreadSafety, RcThreadSafety, SendSafety, SyncSafety},
};

/// Converts a concrete bean handle into a capability handle.
///
/// ```rust
/// use beanery::{upcast, utils::thread_safety::RcThreadSafety};
///
/// trait WebClient: Send + Sync {}
///
/// struct ExternalWebClient;
///
/// impl WebClient for ExternalWebClient {}
///
/// let cast: fn(RcThreadSafety<ExternalWebClient>) -> RcThreadSafety<dyn WebClient> = upcast!(dyn WebClient);
/// let _client = cast(RcThreadSafety::new(ExternalWebClient));
/// ```
#[macro_export]
macro_rules! upcast {
    ($($capability:tt)+) => {
        |this| this as $crate::utils::thread_safety::RcThreadSafety<$($capability)+>
    };
}

type BoxedCast = RcThreadSafety<dyn Fn(&RcAnyThreadSafety) -> Option<RcAnyThreadSafety> + Send + Sync>;

/// A declared constructor together with its parameter list.
#[derive(Clone)]
pub struct Constructor {
    pub(crate) instantiator: BoxedInstantiator,
    pub(crate) dependencies: Vec<Dependency>,
}

impl Constructor {
    #[inline]
    #[must_use]
    pub fn dependencies(&self) -> &[Dependency] {
        &self.dependencies
    }
}

impl Debug for Constructor {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("Constructor").field("dependencies", &self.dependencies).finish_non_exhaustive()
    }
}

#[derive(Clone)]
struct Capability {
    type_info: TypeInfo,
    cast: BoxedCast,
}

/// A marked type: its identity, namespace, optional explicit name, constructors and the capabilities it binds.
///
/// Built through [`ComponentBuilder`], immutable afterwards. Cloning is cheap, constructors are shared.
#[derive(Clone)]
pub struct ComponentDescriptor {
    type_info: TypeInfo,
    namespace: String,
    name: Option<String>,
    constructors: Vec<Constructor>,
    capabilities: Vec<Capability>,
}

impl ComponentDescriptor {
    /// Starts describing component `T` declared in `namespace` (a `::`-separated module path).
    #[inline]
    #[must_use]
    pub fn of<T: SendSafety + SyncSafety + 'static>(namespace: impl Into<String>) -> ComponentBuilder<T> {
        ComponentBuilder {
            descriptor: Self {
                type_info: TypeInfo::of::<T>(),
                namespace: namespace.into(),
                name: None,
                constructors: Vec::new(),
                capabilities: Vec::new(),
            },
            _type: PhantomData,
        }
    }

    #[inline]
    #[must_use]
    pub const fn type_info(&self) -> TypeInfo {
        self.type_info
    }

    #[inline]
    #[must_use]
    pub fn namespace(&self) -> &str {
        &self.namespace
    }

    /// Explicit name from the marker, if any.
    #[inline]
    #[must_use]
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// Declared constructors, in declaration order.
    #[inline]
    #[must_use]
    pub fn constructors(&self) -> &[Constructor] {
        &self.constructors
    }

    /// Name the bean is registered under: the explicit name when present and non-empty,
    /// otherwise the type's short name with its first character lower-cased.
    #[must_use]
    pub fn bean_name(&self) -> String {
        match self.name.as_deref() {
            Some(name) if !name.is_empty() => name.to_string(),
            _ => lower_first(self.type_info.short_name()),
        }
    }

    /// Capabilities bound by this component, in declaration order.
    pub fn capabilities(&self) -> impl Iterator<Item = TypeInfo> + '_ {
        self.capabilities.iter().map(|capability| capability.type_info)
    }

    #[inline]
    #[must_use]
    pub fn binds(&self, capability: &TypeInfo) -> bool {
        self.capabilities.iter().any(|Capability { type_info, .. }| type_info == capability)
    }

    /// Views an erased instance of this component as `capability`.
    /// `None` when the capability isn't bound or the instance isn't of this component's type.
    pub(crate) fn cast(&self, capability: &TypeInfo, instance: &RcAnyThreadSafety) -> Option<RcAnyThreadSafety> {
        self.capabilities
            .iter()
            .find(|Capability { type_info, .. }| type_info == capability)
            .and_then(|Capability { cast, .. }| cast(instance))
    }
}

impl Debug for ComponentDescriptor {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("ComponentDescriptor")
            .field("type_info", &self.type_info)
            .field("namespace", &self.namespace)
            .field("name", &self.name)
            .field("constructors", &self.constructors)
            .field("capabilities", &self.capabilities().collect::<Vec<_>>())
            .finish()
    }
}

fn lower_first(name: &str) -> String {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) => first.to_lowercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Typed builder of a [`ComponentDescriptor`], so constructors and casts are checked against `T`.
#[must_use]
pub struct ComponentBuilder<T> {
    descriptor: ComponentDescriptor,
    _type: PhantomData<fn() -> T>,
}

impl<T: SendSafety + SyncSafety + 'static> ComponentBuilder<T> {
    /// Sets the explicit bean name. An empty name falls back to the derived one.
    #[inline]
    pub fn named(mut self, name: impl Into<String>) -> Self {
        self.descriptor.name = Some(name.into());
        self
    }

    /// Declares a constructor. Declaration order breaks ties between constructors with the same parameter count.
    #[inline]
    pub fn constructor<Inst, Deps>(mut self, instantiator: Inst) -> Self
    where
        Inst: Instantiator<Deps, Provides = T, Error = InstantiateErrorKind> + Send + Sync,
        Deps: DependencyResolver,
    {
        self.descriptor.constructors.push(Constructor {
            instantiator: boxed_instantiator(instantiator),
            dependencies: Inst::dependencies(),
        });
        self
    }

    /// Binds capability `C`, usually a `dyn Trait` implemented by `T`. See [`upcast!`](crate::upcast).
    #[inline]
    pub fn implements<C>(mut self, cast: fn(RcThreadSafety<T>) -> RcThreadSafety<C>) -> Self
    where
        C: ?Sized + SendSafety + SyncSafety + 'static,
    {
        self.descriptor.capabilities.push(Capability {
            type_info: TypeInfo::of::<C>(),
            cast: RcThreadSafety::new(move |instance: &RcAnyThreadSafety| handle::<T>(instance).map(|this| erase(cast(this)))),
        });
        self
    }

    #[inline]
    #[must_use]
    pub fn build(self) -> ComponentDescriptor {
        self.descriptor
    }
}

impl<T> From<ComponentBuilder<T>> for ComponentDescriptor {
    #[inline]
    fn from(builder: ComponentBuilder<T>) -> Self {
        builder.descriptor
    }
}

#[cfg(test)]
mod tests {
    use super::ComponentDescriptor;
    use crate::{
        any::TypeInfo,
        inject::Inject,
        utils::thread_safety::{erase, handle, RcThreadSafety},
    };

    trait WebClient: Send + Sync {
        fn get(&self, url: &str) -> &'static str;
    }

    struct ExternalWebClient;

    impl WebClient for ExternalWebClient {
        fn get(&self, _url: &str) -> &'static str {
            "externalUser1, externalUser2"
        }
    }

    struct UserRepository;
    struct UserServiceImpl;

    #[test]
    fn test_bean_name() {
        let derived = ComponentDescriptor::of::<UserRepository>("app::repositories").build();
        let explicit = ComponentDescriptor::of::<UserRepository>("app::repositories").named("users").build();
        let empty = ComponentDescriptor::of::<UserServiceImpl>("app::services").named("").build();

        assert_eq!(derived.bean_name(), "userRepository");
        assert_eq!(explicit.bean_name(), "users");
        assert_eq!(explicit.name(), Some("users"));
        assert_eq!(empty.bean_name(), "userServiceImpl");
    }

    #[test]
    fn test_constructors_keep_declaration_order() {
        let descriptor = ComponentDescriptor::of::<UserServiceImpl>("app::services")
            .constructor(|| Ok(UserServiceImpl))
            .constructor(|Inject(_): Inject<UserRepository>| Ok(UserServiceImpl))
            .build();

        let counts = descriptor
            .constructors()
            .iter()
            .map(|constructor| constructor.dependencies().len())
            .collect::<alloc::vec::Vec<_>>();
        assert_eq!(counts, [0, 1]);
        assert_eq!(descriptor.constructors()[1].dependencies()[0].type_info, TypeInfo::of::<UserRepository>());
    }

    #[test]
    fn test_cast_to_capability() {
        let descriptor = ComponentDescriptor::of::<ExternalWebClient>("app::client")
            .implements::<dyn WebClient>(upcast!(dyn WebClient))
            .build();
        let capability = TypeInfo::of::<dyn WebClient>();

        assert!(descriptor.binds(&capability));
        assert!(!descriptor.binds(&TypeInfo::of::<ExternalWebClient>()));

        let instance = erase(RcThreadSafety::new(ExternalWebClient));
        let client = descriptor.cast(&capability, &instance).unwrap();
        assert_eq!(handle::<dyn WebClient>(&client).unwrap().get("/users"), "externalUser1, externalUser2");

        let unrelated = erase(RcThreadSafety::new(UserRepository));
        assert!(descriptor.cast(&capability, &unrelated).is_none());
    }
}
