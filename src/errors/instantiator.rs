use alloc::boxed::Box;

use super::{dependency_resolver::ResolveErrorKind, instantiate::InstantiateErrorKind};
use crate::any::TypeInfo;

/// Failure to build a candidate: no constructor to select, a dependency that couldn't be resolved,
/// or the constructor body itself.
#[derive(thiserror::Error, Debug)]
pub enum InstantiatorErrorKind {
    #[error("Type `{}` declares no constructor", .type_info.name)]
    NoConstructor { type_info: TypeInfo },
    #[error(transparent)]
    Deps(Box<ResolveErrorKind>),
    #[error(transparent)]
    Factory(InstantiateErrorKind),
}
