//! `#[derive(ToValue)]` implementation
//!
//! | Input | Value |
//! |---|---|
//! | struct with named fields | `Object`, one property per field |
//! | tuple struct | `Array`, fields in order |
//! | unit struct | empty `Object` |
//!
//! Field attributes:
//! - `#[samir(rename = "key")]`: property name
//! - `#[samir(hidden)]`: non-enumerable property (kept, but not hashed)
//! - `#[samir(skip)]`: leave the field out

use proc_macro2::TokenStream;
use quote::quote;
use syn::ext::IdentExt;
use syn::{parse2, parse_quote, Data, DeriveInput, Field, Fields, GenericParam, LitStr, Result};

#[derive(Default)]
struct FieldArgs {
    rename: Option<LitStr>,
    hidden: bool,
    skip: bool,
}

impl FieldArgs {
    fn from_field(field: &Field) -> Result<Self> {
        let mut args = Self::default();
        for attr in field.attrs.iter().filter(|a| a.path().is_ident("samir")) {
            attr.parse_nested_meta(|meta| {
                if meta.path.is_ident("rename") {
                    args.rename = Some(meta.value()?.parse()?);
                } else if meta.path.is_ident("hidden") {
                    args.hidden = true;
                } else if meta.path.is_ident("skip") {
                    args.skip = true;
                } else {
                    return Err(meta.error("expected `rename`, `hidden` or `skip`"));
                }
                Ok(())
            })?;
        }
        if args.skip && (args.hidden || args.rename.is_some()) {
            return Err(syn::Error::new_spanned(
                field,
                "`skip` cannot be combined with `rename` or `hidden`",
            ));
        }
        Ok(args)
    }
}

pub fn expand(item: TokenStream) -> Result<TokenStream> {
    let mut input: DeriveInput = parse2(item)?;
    let name = &input.ident;

    let fields = match &input.data {
        Data::Struct(data) => &data.fields,
        _ => return Err(syn::Error::new_spanned(&input, "expected struct")),
    };

    let body = match fields {
        Fields::Named(named) => {
            let mut inserts = Vec::with_capacity(named.named.len());
            for field in &named.named {
                let args = FieldArgs::from_field(field)?;
                if args.skip {
                    continue;
                }
                let Some(ident) = &field.ident else {
                    continue;
                };
                let key = args
                    .rename
                    .unwrap_or_else(|| LitStr::new(&ident.unraw().to_string(), ident.span()));
                let value = quote! { ::samir::ToValue::to_value(&self.#ident) };
                inserts.push(if args.hidden {
                    quote! { object.define_hidden(#key, #value); }
                } else {
                    quote! { object.insert(#key, #value); }
                });
            }
            quote! {
                let object = ::samir::value::Object::new();
                #(#inserts)*
                ::samir::Value::Object(object)
            }
        }
        Fields::Unnamed(unnamed) => {
            let mut items = Vec::with_capacity(unnamed.unnamed.len());
            for (i, field) in unnamed.unnamed.iter().enumerate() {
                let args = FieldArgs::from_field(field)?;
                if args.hidden || args.rename.is_some() {
                    return Err(syn::Error::new_spanned(
                        field,
                        "tuple fields only support `skip`",
                    ));
                }
                if args.skip {
                    continue;
                }
                let index = syn::Index::from(i);
                items.push(quote! { ::samir::ToValue::to_value(&self.#index) });
            }
            quote! {
                let items: ::std::vec::Vec<::samir::Value> = ::std::vec![#(#items),*];
                ::samir::Value::Array(items.into())
            }
        }
        Fields::Unit => quote! {
            ::samir::Value::Object(::samir::value::Object::new())
        },
    };

    // Every type parameter must itself convert
    for param in &mut input.generics.params {
        if let GenericParam::Type(ty) = param {
            ty.bounds.push(parse_quote!(::samir::ToValue));
        }
    }
    let (impl_generics, ty_generics, where_clause) = input.generics.split_for_impl();

    Ok(quote! {
        impl #impl_generics ::samir::ToValue for #name #ty_generics #where_clause {
            fn to_value(&self) -> ::samir::Value {
                #body
            }
        }
    })
}
