#![no_std]

extern crate alloc;

#[macro_use]
pub(crate) mod macros;

pub(crate) mod any;
pub(crate) mod candidates;
pub(crate) mod catalog;
pub(crate) mod component;
pub(crate) mod config;
pub(crate) mod constructor;
pub(crate) mod context;
pub(crate) mod dependency;
pub(crate) mod dependency_resolver;
pub(crate) mod errors;
pub(crate) mod graph;
pub(crate) mod inject;
pub(crate) mod instantiator;
pub(crate) mod registry;
pub(crate) mod scanner;

pub mod utils;

pub use any::TypeInfo;
pub use catalog::{Catalog, Entry};
pub use component::{ComponentBuilder, ComponentDescriptor, Constructor};
pub use config::{CapabilityBinding, ComponentScan, Config};
pub use context::Context;
pub use dependency::Dependency;
pub use dependency_resolver::DependencyResolver;
pub use errors::{
    BootstrapErrorKind, ConfigurationErrorKind, CycleErrorKind, InstantiateErrorKind, InstantiatorErrorKind, InstantiatorResult,
    ResolveErrorKind, ScanErrorKind,
};
pub use inject::Inject;
pub use instantiator::{instance, Instantiator};
