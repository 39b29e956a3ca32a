#![no_std]

extern crate alloc;

mod catalog;

pub mod entry_getters;

pub use catalog::AutoCatalog;

#[cfg(feature = "macros")]
pub use beanery_auto_macros::component;
