//! Pointer and marker aliases switched by the `thread_safe` feature.
//!
//! With `thread_safe` (default) beans are held in [`alloc::sync::Arc`] and must be `Send + Sync`,
//! without it they are held in [`alloc::rc::Rc`] and carry no bounds.

#[cfg(feature = "thread_safe")]
mod thread_safe {
    use alloc::sync::Arc;
    use core::any::Any;

    pub trait SendSafety: Send {}
    pub trait SyncSafety: Sync {}

    impl<T: Send + ?Sized> SendSafety for T {}
    impl<T: Sync + ?Sized> SyncSafety for T {}

    pub type RcThreadSafety<T> = Arc<T>;
    pub type RcAnyThreadSafety = RcThreadSafety<dyn Any + Send + Sync>;
}

#[cfg(not(feature = "thread_safe"))]
mod thread_unsafe {
    use alloc::rc::Rc;
    use core::any::Any;

    pub trait SendSafety {}
    pub trait SyncSafety {}

    impl<T: ?Sized> SendSafety for T {}
    impl<T: ?Sized> SyncSafety for T {}

    pub type RcThreadSafety<T> = Rc<T>;
    pub type RcAnyThreadSafety = RcThreadSafety<dyn Any>;
}

#[cfg(feature = "thread_safe")]
pub use thread_safe::{RcAnyThreadSafety, RcThreadSafety, SendSafety, SyncSafety};

#[cfg(not(feature = "thread_safe"))]
pub use thread_unsafe::{RcAnyThreadSafety, RcThreadSafety, SendSafety, SyncSafety};

/// Hides a bean handle behind [`RcAnyThreadSafety`].
///
/// The handle itself is what gets erased, so unsized beans (`dyn Trait`) go through the same path
/// as concrete ones and [`handle`] can recover either.
#[inline]
#[must_use]
pub(crate) fn erase<T>(handle: RcThreadSafety<T>) -> RcAnyThreadSafety
where
    T: ?Sized + SendSafety + SyncSafety + 'static,
{
    RcThreadSafety::new(handle)
}

#[inline]
#[must_use]
pub(crate) fn handle<T>(erased: &RcAnyThreadSafety) -> Option<RcThreadSafety<T>>
where
    T: ?Sized + 'static,
{
    erased.downcast_ref::<RcThreadSafety<T>>().cloned()
}
