use alloc::{boxed::Box, string::String};

use super::instantiator::InstantiatorErrorKind;
use crate::any::TypeInfo;

#[derive(thiserror::Error, Debug)]
pub enum ResolveErrorKind {
    #[error("Bean of type `{}` not found", .type_info.name)]
    NoBean { type_info: TypeInfo },
    #[error("Bean named `{name}` not found")]
    NoBeanNamed { name: String },
    #[error("Bean of type `{}` not found, its construction failed", .type_info.name)]
    NotConstructed {
        type_info: TypeInfo,
        #[source]
        source: Box<InstantiatorErrorKind>,
    },
    #[error("No implementation of capability `{}` found", .type_info.name)]
    NoImplementation { type_info: TypeInfo },
    #[error("Incorrect bean type. Actual: `{}`, expected: `{}`", .actual.name, .expected.name)]
    IncorrectType { expected: TypeInfo, actual: TypeInfo },
    #[error("Bean registered as `{}` holds an instance of another type", .type_info.name)]
    InstanceMismatch { type_info: TypeInfo },
}

impl ResolveErrorKind {
    /// `true` for every kind that means "there is no bean to hand out",
    /// `false` when a bean exists but can't be viewed as the requested type.
    #[inline]
    #[must_use]
    pub const fn is_bean_not_found(&self) -> bool {
        !matches!(self, Self::IncorrectType { .. } | Self::InstanceMismatch { .. })
    }
}
