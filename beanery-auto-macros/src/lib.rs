extern crate alloc;

use proc_macro::TokenStream;
use quote::{quote, ToTokens};
use std::env::var_os;

mod attr_parsing;
mod component;

/// Marks the inherent `impl` block of a component.
///
/// ```rust,ignore
/// #[component(name = "users", implements(dyn UserService))]
/// impl UserServiceImpl {
///     #[constructor]
///     fn new(Inject(repository): Inject<UserRepository>) -> Result<Self, InstantiateErrorKind> {
///         Ok(Self { repository })
///     }
/// }
/// ```
///
/// Every `#[constructor]` function is declared in source order. The component lives in the namespace
/// of the module the block is written in.
#[proc_macro_attribute]
pub fn component(attr: TokenStream, item: TokenStream) -> TokenStream {
    expand(component::expand(attr.into(), item.into()))
}

fn expand<T>(result: syn::Result<T>) -> TokenStream
where
    T: ToTokens,
{
    match result {
        Ok(tokens) => {
            let tokens = (quote! { #tokens }).into();
            if var_os("MACROS_DEBUG").is_some() {
                eprintln!("{tokens}");
            }
            tokens
        }
        Err(err) => err.into_compile_error().into(),
    }
}
