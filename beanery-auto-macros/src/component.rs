mod attr;

use crate::component::attr::{check_constructor_attrs, is_constructor, ComponentArgs};

use alloc::{string::String, vec::Vec};
use proc_macro2::TokenStream;
use quote::{format_ident, quote, quote_spanned, ToTokens as _};
use syn::{parse2, spanned::Spanned as _, Error, FnArg, Ident, ImplItem, ImplItemFn, Item, ItemImpl, ReturnType, Type};

fn check_constructor(impl_item_fn: &ImplItemFn) -> syn::Result<()> {
    check_constructor_attrs(&impl_item_fn.attrs)?;

    if impl_item_fn.sig.asyncness.is_some() {
        return Err(Error::new_spanned(impl_item_fn.sig.asyncness, "constructors can't be async"));
    }
    if !impl_item_fn.sig.generics.params.is_empty() {
        return Err(Error::new_spanned(&impl_item_fn.sig.generics, "constructors can't be generic"));
    }
    if matches!(impl_item_fn.sig.output, ReturnType::Default) {
        return Err(Error::new_spanned(
            &impl_item_fn.sig,
            "constructor must return `Result<Self, InstantiateErrorKind>`",
        ));
    }
    if let Some(receiver) = impl_item_fn.sig.inputs.iter().find(|input| matches!(input, FnArg::Receiver(_))) {
        return Err(Error::new_spanned(receiver, "constructors with `self` are not supported"));
    }
    Ok(())
}

/// `__COMPONENT_` followed by the type written as an identifier.
fn generate_identifier(self_ty: &Type) -> Ident {
    let self_ty_uppercase = self_ty
        .into_token_stream()
        .to_string()
        .chars()
        .map(|c| if c.is_ascii_alphanumeric() { c.to_ascii_uppercase() } else { '_' })
        .collect::<String>();

    format_ident!("__COMPONENT_{}", self_ty_uppercase)
}

fn generate_component_getter(self_ty: &Type, args: &ComponentArgs, constructors: &[Ident]) -> TokenStream {
    let getter_name = generate_identifier(self_ty);

    let name_quote = args.name.as_ref().map(|(_, name)| {
        quote! { .named(#name) }
    });
    let constructors_quote = constructors.iter().map(|fn_name| {
        quote_spanned! { fn_name.span() => .constructor(<#self_ty>::#fn_name) }
    });
    let implements_quote = args.implements.iter().flat_map(|(_, capabilities)| capabilities).map(|capability| {
        quote_spanned! { capability.span() => .implements::<#capability>(::beanery::upcast!(#capability)) }
    });

    quote_spanned! { self_ty.span() =>
        #[::beanery_auto::entry_getters::distributed_slice(::beanery_auto::entry_getters::__COMPONENTS)]
        #[linkme(crate = ::beanery_auto::entry_getters::linkme)]
        static #getter_name: fn() -> ::beanery::ComponentDescriptor = || {
            ::beanery::ComponentDescriptor::of::<#self_ty>(::core::module_path!())
                #name_quote
                #( #constructors_quote )*
                #( #implements_quote )*
                .into()
        };
    }
}

pub(crate) fn expand(args: TokenStream, item: TokenStream) -> syn::Result<TokenStream> {
    let args = parse2::<ComponentArgs>(args)?;
    let mut item = parse2::<Item>(item)?;

    match item {
        Item::Impl(ItemImpl { trait_: Some(_), .. }) => Err(Error::new_spanned(item, "#[component] can't be used on trait impls")),
        Item::Impl(ItemImpl { ref generics, .. }) if !generics.params.is_empty() => {
            Err(Error::new_spanned(generics, "#[component] can't be used on generic impls"))
        }
        Item::Impl(ItemImpl {
            trait_: None,
            ref mut items,
            ref self_ty,
            ..
        }) => {
            let mut constructors = Vec::new();
            for impl_item_fn in items.iter_mut().filter_map(|item| match item {
                ImplItem::Fn(impl_item_fn) => Some(impl_item_fn),
                _ => None,
            }) {
                if !impl_item_fn.attrs.iter().any(is_constructor) {
                    continue;
                }
                check_constructor(impl_item_fn)?;

                // Remove `constructor` attribute from final code
                impl_item_fn.attrs.retain(|attr| !is_constructor(attr));
                constructors.push(impl_item_fn.sig.ident.clone());
            }

            let getter_quote = generate_component_getter(self_ty, &args, &constructors);

            Ok(quote! {
                #item
                #getter_quote
            })
        }
        _ => Err(Error::new_spanned(item, "#[component] can only be used on `impl` blocks")),
    }
}
