use core::any;
use quote::ToTokens;
use syn::{
    parse::{Parse, ParseStream},
    Token,
};

fn keyword_name<K>() -> &'static str {
    any::type_name::<K>().rsplit("::").next().unwrap_or_default()
}

pub(crate) fn parse_assignment_attribute<K, T>(input: ParseStream<'_>, out: &mut Option<(K, T)>) -> syn::Result<()>
where
    K: Parse + ToTokens,
    T: Parse,
{
    let kw = input.parse()?;
    input.parse::<Token![=]>()?;
    let inner = input.parse()?;

    if out.is_some() {
        let msg = "` specified more than once";
        return Err(syn::Error::new_spanned(kw, ["`", keyword_name::<K>(), msg].concat()));
    }

    *out = Some((kw, inner));

    Ok(())
}

/// Parses `kw(a, b, ..)` into `out`.
pub(crate) fn parse_list_attribute<K, T>(input: ParseStream<'_>, out: &mut Option<(K, Vec<T>)>) -> syn::Result<()>
where
    K: Parse + ToTokens,
    T: Parse,
{
    let kw = input.parse()?;
    let content;
    syn::parenthesized!(content in input);
    let inner = content.parse_terminated(T::parse, Token![,])?;

    if out.is_some() {
        let msg = "` specified more than once";
        return Err(syn::Error::new_spanned(kw, ["`", keyword_name::<K>(), msg].concat()));
    }

    *out = Some((kw, inner.into_iter().collect()));

    Ok(())
}
