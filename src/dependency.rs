use crate::any::TypeInfo;

/// One constructor parameter.
///
/// `optional` parameters receive nothing instead of failing the constructor when the bean can't be resolved.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Dependency {
    pub type_info: TypeInfo,
    pub optional: bool,
}
