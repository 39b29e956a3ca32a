use alloc::{vec, vec::Vec};
use tracing::debug;

use crate::{
    any::TypeInfo,
    dependency::Dependency,
    dependency_resolver::DependencyResolver,
    utils::thread_safety::{RcThreadSafety, SendSafety, SyncSafety},
    Context, ResolveErrorKind,
};

/// Required bean parameter. `Dep` is either a concrete component or a capability (`dyn Trait`).
///
/// When the bean can't be resolved the dependent constructor isn't called and its registration fails.
pub struct Inject<Dep: ?Sized>(pub RcThreadSafety<Dep>);

impl<Dep: ?Sized + SendSafety + SyncSafety + 'static> DependencyResolver for Inject<Dep> {
    type Error = ResolveErrorKind;

    fn resolve(context: &Context) -> Result<Self, Self::Error> {
        context.get().map(Self)
    }

    fn dependencies() -> Vec<Dependency> {
        vec![Dependency {
            type_info: TypeInfo::of::<Dep>(),
            optional: false,
        }]
    }
}

/// Optional bean parameter: a bean that can't be found or built is passed as `None`
/// and the dependent constructor still runs.
impl<Dep: ?Sized + SendSafety + SyncSafety + 'static> DependencyResolver for Option<Inject<Dep>> {
    type Error = ResolveErrorKind;

    fn resolve(context: &Context) -> Result<Self, Self::Error> {
        match context.get() {
            Ok(dependency) => Ok(Some(Inject(dependency))),
            Err(err) => {
                debug!(%err, "Optional dependency is absent");
                Ok(None)
            }
        }
    }

    fn dependencies() -> Vec<Dependency> {
        vec![Dependency {
            type_info: TypeInfo::of::<Dep>(),
            optional: true,
        }]
    }
}
