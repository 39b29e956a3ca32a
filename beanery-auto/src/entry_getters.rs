use beanery::ComponentDescriptor;

pub use linkme::{self, distributed_slice};

/// Descriptors of every `#[component]` linked into the binary, in link order.
#[distributed_slice]
pub static __COMPONENTS: [fn() -> ComponentDescriptor];
