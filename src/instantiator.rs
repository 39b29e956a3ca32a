use alloc::{boxed::Box, vec::Vec};
use tracing::debug;

use super::{
    dependency::Dependency,
    dependency_resolver::DependencyResolver,
    errors::{InstantiateErrorKind, InstantiatorErrorKind},
    utils::thread_safety::{erase, RcAnyThreadSafety, RcThreadSafety, SendSafety, SyncSafety},
};
use crate::Context;

/// A component constructor: takes resolved parameters, returns the bean.
///
/// Implemented for every `FnMut(A, B, ..) -> Result<T, E>` whose parameters are [`DependencyResolver`]s,
/// so plain associated functions like `UserService::new` and closures both work.
pub trait Instantiator<Deps>: Clone + 'static
where
    Deps: DependencyResolver,
{
    type Provides: 'static;
    type Error: Into<InstantiateErrorKind>;

    fn instantiate(&mut self, dependencies: Deps) -> Result<Self::Provides, Self::Error>;

    #[inline]
    #[must_use]
    fn dependencies() -> Vec<Dependency> {
        Deps::dependencies()
    }
}

pub(crate) type BoxedInstantiator = RcThreadSafety<dyn Fn(&Context) -> Result<RcAnyThreadSafety, InstantiatorErrorKind> + Send + Sync>;

#[must_use]
pub(crate) fn boxed_instantiator<Inst, Deps>(instantiator: Inst) -> BoxedInstantiator
where
    Inst: Instantiator<Deps> + Send + Sync,
    Inst::Provides: SendSafety + SyncSafety,
    Deps: DependencyResolver,
{
    RcThreadSafety::new(move |context: &Context| {
        let dependencies = match Deps::resolve(context) {
            Ok(dependencies) => dependencies,
            Err(err) => return Err(InstantiatorErrorKind::Deps(Box::new(err.into()))),
        };
        let bean = match instantiator.clone().instantiate(dependencies) {
            Ok(bean) => bean,
            Err(err) => return Err(InstantiatorErrorKind::Factory(err.into())),
        };

        debug!("Instantiated");

        Ok(erase(RcThreadSafety::new(bean)))
    })
}

macro_rules! impl_instantiator {
    (
        [$($ty:ident),*]
    ) => {
        #[allow(non_snake_case)]
        impl<F, Response, Err, $($ty,)*> Instantiator<($($ty,)*)> for F
        where
            F: FnMut($($ty,)*) -> Result<Response, Err> + Clone + 'static,
            Response: 'static,
            Err: Into<InstantiateErrorKind>,
            $( $ty: DependencyResolver, )*
        {
            type Provides = Response;
            type Error = Err;

            fn instantiate(&mut self, ($($ty,)*): ($($ty,)*)) -> Result<Self::Provides, Self::Error> {
                self($($ty,)*)
            }
        }
    };
}

all_the_tuples!(impl_instantiator);

/// Wrapper to create an instantiator that just returns passed value.
/// It can be used when the value was created outside the container.
#[inline]
#[must_use]
pub fn instance<T: Clone + 'static>(val: T) -> impl Instantiator<(), Provides = T, Error = InstantiateErrorKind> {
    move || Ok(val.clone())
}

#[cfg(test)]
mod tests {
    use super::{DependencyResolver, InstantiateErrorKind, Instantiator};
    use crate::inject::Inject;

    struct Repo;
    struct Client;

    #[test]
    #[allow(dead_code)]
    fn test_factory_helper() {
        fn resolver<Deps: DependencyResolver, F: Instantiator<Deps>>(_f: F) {}
        fn resolver_with_dep<Deps: DependencyResolver>() {
            resolver(|| Ok::<_, InstantiateErrorKind>(()));
        }
    }

    #[test]
    fn test_dependencies_follow_signature() {
        fn dependencies_of<Deps: DependencyResolver, F: Instantiator<Deps>>(_f: &F) -> usize {
            F::dependencies().len()
        }

        let none = || Ok::<_, InstantiateErrorKind>(Repo);
        let two = |Inject(_): Inject<Repo>, _: Option<Inject<Client>>| Ok::<_, InstantiateErrorKind>(Client);

        assert_eq!(dependencies_of(&none), 0);
        assert_eq!(dependencies_of(&two), 2);
    }
}
