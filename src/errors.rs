mod bootstrap;
mod dependency_resolver;
mod instantiate;
mod instantiator;
mod scan;

pub use bootstrap::{BootstrapErrorKind, ConfigurationErrorKind, CycleErrorKind};
pub use dependency_resolver::ResolveErrorKind;
pub use instantiate::InstantiateErrorKind;
pub use instantiator::InstantiatorErrorKind;
pub use scan::ScanErrorKind;

/// Result of a constructor body.
pub type InstantiatorResult<T, Err = InstantiateErrorKind> = Result<T, Err>;
