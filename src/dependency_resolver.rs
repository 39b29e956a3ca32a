use alloc::vec::Vec;

use super::errors::ResolveErrorKind;
use crate::{dependency::Dependency, Context};

/// A constructor parameter the context knows how to fill.
pub trait DependencyResolver: Sized {
    type Error: Into<ResolveErrorKind>;

    fn resolve(context: &Context) -> Result<Self, Self::Error>;

    /// Parameter types in declaration order. Their count is what the constructor selector compares.
    #[must_use]
    fn dependencies() -> Vec<Dependency>;
}

macro_rules! impl_dependency_resolver {
    (
        [$($ty:ident),*]
    ) => {
        #[allow(non_snake_case, unused_mut)]
        impl<$($ty,)*> DependencyResolver for ($($ty,)*)
        where
            $( $ty: DependencyResolver, )*
        {
            type Error = ResolveErrorKind;

            #[inline]
            #[allow(unused_variables)]
            fn resolve(context: &Context) -> Result<Self, Self::Error> {
                Ok(($($ty::resolve(context).map_err(Into::into)?,)*))
            }

            #[inline]
            fn dependencies() -> Vec<Dependency> {
                let mut dependencies = Vec::new();
                $( dependencies.extend($ty::dependencies()); )*
                dependencies
            }
        }
    };
}

all_the_tuples!(impl_dependency_resolver);
