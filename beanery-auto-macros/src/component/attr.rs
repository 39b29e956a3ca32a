use syn::{
    parse::{Parse, ParseStream},
    Attribute, LitStr, Token, Type,
};

use crate::attr_parsing::{parse_assignment_attribute, parse_list_attribute};

pub(crate) mod kw {
    syn::custom_keyword!(name);
    syn::custom_keyword!(implements);
}

/// Arguments of `#[component(..)]`.
pub(crate) struct ComponentArgs {
    pub(super) name: Option<(kw::name, LitStr)>,
    pub(super) implements: Option<(kw::implements, Vec<Type>)>,
}

impl Parse for ComponentArgs {
    fn parse(input: ParseStream) -> syn::Result<Self> {
        let mut name = None;
        let mut implements = None;

        while !input.is_empty() {
            let lh = input.lookahead1();
            if lh.peek(kw::name) {
                parse_assignment_attribute(input, &mut name)?;
            } else if lh.peek(kw::implements) {
                parse_list_attribute(input, &mut implements)?;
            } else {
                return Err(lh.error());
            }

            let _ = input.parse::<Token![,]>();
        }

        Ok(Self { name, implements })
    }
}

pub(crate) fn is_constructor(attr: &Attribute) -> bool {
    attr.path().is_ident("constructor")
}

/// `#[constructor]` takes no arguments.
pub(crate) fn check_constructor_attrs(attrs: &[Attribute]) -> syn::Result<()> {
    for attr in attrs.iter().filter(|attr| is_constructor(attr)) {
        attr.meta.require_path_only()?;
    }
    Ok(())
}
