use alloc::{boxed::Box, fmt};
use core::fmt::{Display, Formatter};

use super::scan::ScanErrorKind;
use crate::any::TypeInfo;

#[derive(thiserror::Error, Debug)]
pub enum ConfigurationErrorKind {
    #[error("Configuration declares no component scan")]
    NoComponentScan,
    #[error("Component scan declares no base packages")]
    NoBasePackages,
}

#[derive(thiserror::Error, Debug)]
pub enum CycleErrorKind {
    CyclicDependency { graph: (TypeInfo, Box<[TypeInfo]>) },
}

impl Display for CycleErrorKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            CycleErrorKind::CyclicDependency {
                graph: (type_info, type_infos),
            } => {
                write!(f, "Cyclic dependency detected: ")?;
                write!(f, "{type_info}")?;
                for type_info in type_infos.iter() {
                    write!(f, " -> {type_info}")?;
                }
            }
        }
        Ok(())
    }
}

/// Fatal failure of [`crate::Context::new`]. Nothing is registered when this is returned.
#[derive(thiserror::Error, Debug)]
pub enum BootstrapErrorKind {
    #[error(transparent)]
    Configuration(#[from] ConfigurationErrorKind),
    #[error(transparent)]
    Scan(#[from] ScanErrorKind),
    #[error(transparent)]
    Cycle(#[from] CycleErrorKind),
    #[error("Capability `{}` is bound by {} candidates, expected exactly one", .capability.name, .implementations.len())]
    AmbiguousCapability {
        capability: TypeInfo,
        implementations: Box<[TypeInfo]>,
    },
}

#[cfg(test)]
mod tests {
    extern crate std;

    use alloc::string::ToString as _;

    use super::CycleErrorKind;
    use crate::any::TypeInfo;

    struct A;
    struct B;

    #[test]
    fn test_cycle_display() {
        let err = CycleErrorKind::CyclicDependency {
            graph: (TypeInfo::of::<A>(), [TypeInfo::of::<B>(), TypeInfo::of::<A>()].into()),
        };

        let message = err.to_string();
        assert!(message.starts_with("Cyclic dependency detected: "));
        assert!(message.ends_with("::A -> beanery::errors::bootstrap::tests::B -> beanery::errors::bootstrap::tests::A"));
    }
}
