//! Procedural macros for envconf record definitions.
//!
//! `#[derive(Record)]` turns a struct with named fields into an
//! `envconf::Record`: one field descriptor per field, in declaration order,
//! plus the assignment glue that stores converted values back into the
//! struct. The generated code refers to the `envconf` facade crate.

#![warn(missing_docs, clippy::pedantic)]

use proc_macro::TokenStream;
use proc_macro2::{Span, TokenStream as TokenStream2, TokenTree};
use quote::{ToTokens, format_ident, quote};
use syn::ext::IdentExt;
use syn::{Data, DeriveInput, Field, Fields, Lit, Token, Type, Visibility, parse_macro_input};

/// Derives `envconf::Record` and `envconf::Destination` for a struct.
///
/// Field options go in an `#[envconf(...)]` attribute:
///
/// * `required` or `required = "true"` reports the field as missing when no
///   value is found. Any other string value leaves the field optional.
/// * `default = "value"` is converted when no value is found. Integer and
///   boolean literals are accepted and used in their written form.
///
/// Other options are ignored. Fields typed `String`, `i64`, `bool`, or a `Vec`
/// of those are populated; fields of any other type fail at runtime once a
/// value reaches them. Private fields (no `pub`, or `pub(self)`) are never
/// looked up.
#[proc_macro_derive(Record, attributes(envconf))]
pub fn derive_record(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    expand(&input)
        .unwrap_or_else(syn::Error::into_compile_error)
        .into()
}

#[derive(Clone, Debug, PartialEq, Eq)]
enum Kind {
    String,
    Int,
    Bool,
    StringList,
    IntList,
    BoolList,
    Unsupported(String),
}

impl Kind {
    fn variant(&self) -> Option<syn::Ident> {
        let name = match self {
            Self::String => "String",
            Self::Int => "Int",
            Self::Bool => "Bool",
            Self::StringList => "StringList",
            Self::IntList => "IntList",
            Self::BoolList => "BoolList",
            Self::Unsupported(_) => return None,
        };
        Some(format_ident!("{}", name))
    }

    fn to_field_kind(&self) -> TokenStream2 {
        if let Self::Unsupported(ty) = self {
            return quote!(::envconf::FieldKind::Unsupported(#ty));
        }
        let variant = self.variant();
        quote!(::envconf::FieldKind::#variant)
    }
}

#[derive(Debug, Default)]
struct FieldOptions {
    required: bool,
    default: Option<String>,
}

fn expand(input: &DeriveInput) -> syn::Result<TokenStream2> {
    let fields = match &input.data {
        Data::Struct(data) => match &data.fields {
            Fields::Named(named) => &named.named,
            Fields::Unnamed(_) | Fields::Unit => {
                return Err(syn::Error::new_spanned(
                    &input.ident,
                    "Record can only be derived for structs with named fields",
                ));
            }
        },
        Data::Enum(_) | Data::Union(_) => {
            return Err(syn::Error::new_spanned(
                &input.ident,
                "Record can only be derived for structs",
            ));
        }
    };

    let mut descriptors = Vec::with_capacity(fields.len());
    let mut arms = Vec::with_capacity(fields.len());
    for (index, field) in fields.iter().enumerate() {
        let ident = field
            .ident
            .as_ref()
            .ok_or_else(|| syn::Error::new(Span::call_site(), "expected a named field"))?;
        let name = ident.unraw().to_string();
        let options = parse_options(field)?;
        let kind = classify(&field.ty);

        let field_kind = kind.to_field_kind();
        let mut descriptor = quote!(::envconf::FieldDescriptor::new(#name, #field_kind));
        if options.required {
            descriptor = quote!(#descriptor.required());
        }
        if let Some(default) = &options.default {
            descriptor = quote!(#descriptor.with_default(#default));
        }
        if !is_exported(&field.vis) {
            descriptor = quote!(#descriptor.private());
        }
        descriptors.push(descriptor);

        if let Some(variant) = kind.variant() {
            arms.push(quote! {
                (#index, ::envconf::FieldValue::#variant(value)) => {
                    self.#ident = value;
                    ::core::result::Result::Ok(())
                }
            });
        }
    }

    let ident = &input.ident;
    let (impl_generics, ty_generics, where_clause) = input.generics.split_for_impl();

    Ok(quote! {
        #[automatically_derived]
        impl #impl_generics ::envconf::Record for #ident #ty_generics #where_clause {
            fn fields(&self) -> ::std::vec::Vec<::envconf::FieldDescriptor> {
                ::std::vec![#(#descriptors),*]
            }

            fn assign(
                &mut self,
                index: usize,
                value: ::envconf::FieldValue,
            ) -> ::core::result::Result<(), ::envconf::FieldValue> {
                match (index, value) {
                    #(#arms)*
                    (_, value) => ::core::result::Result::Err(value),
                }
            }
        }

        #[automatically_derived]
        impl #impl_generics ::envconf::Destination for #ident #ty_generics #where_clause {
            fn kind(&self) -> ::envconf::DestinationKind {
                ::envconf::DestinationKind::Struct
            }

            fn as_record(
                &self,
            ) -> ::core::result::Result<&dyn ::envconf::Record, ::envconf::DestinationKind> {
                ::core::result::Result::Ok(self)
            }

            fn as_record_mut(
                &mut self,
            ) -> ::core::result::Result<&mut dyn ::envconf::Record, ::envconf::DestinationKind> {
                ::core::result::Result::Ok(self)
            }
        }
    })
}

fn parse_options(field: &Field) -> syn::Result<FieldOptions> {
    let mut options = FieldOptions::default();
    for attr in field.attrs.iter().filter(|attr| attr.path().is_ident("envconf")) {
        attr.parse_nested_meta(|meta| {
            if meta.path.is_ident("required") {
                options.required = if meta.input.peek(Token![=]) {
                    match meta.value()?.parse::<Lit>()? {
                        Lit::Str(value) => value.value() == "true",
                        Lit::Bool(value) => value.value,
                        other => {
                            return Err(syn::Error::new_spanned(
                                other,
                                "`required` expects a string or boolean literal",
                            ));
                        }
                    }
                } else {
                    true
                };
            } else if meta.path.is_ident("default") {
                let value = match meta.value()?.parse::<Lit>()? {
                    Lit::Str(value) => value.value(),
                    Lit::Int(value) => value.base10_digits().to_owned(),
                    Lit::Bool(value) => value.value.to_string(),
                    other => {
                        return Err(syn::Error::new_spanned(
                            other,
                            "`default` expects a string, integer, or boolean literal",
                        ));
                    }
                };
                options.default = Some(value);
            } else if meta.input.peek(Token![=]) {
                meta.value()?.parse::<syn::Expr>()?;
            } else if !meta.input.is_empty() && !meta.input.peek(Token![,]) {
                meta.input.parse::<TokenTree>()?;
            }
            Ok(())
        })?;
    }
    Ok(options)
}

fn is_exported(vis: &Visibility) -> bool {
    match vis {
        Visibility::Public(_) => true,
        Visibility::Restricted(restricted) => !restricted.path.is_ident("self"),
        Visibility::Inherited => false,
    }
}

fn classify(ty: &Type) -> Kind {
    if let Some(kind) = scalar(ty) {
        return kind;
    }
    let list = list_element(ty).and_then(scalar).map(|element| match element {
        Kind::String => Kind::StringList,
        Kind::Int => Kind::IntList,
        Kind::Bool => Kind::BoolList,
        other => other,
    });
    list.unwrap_or_else(|| Kind::Unsupported(type_name(ty)))
}

fn scalar(ty: &Type) -> Option<Kind> {
    let segment = last_segment(ty)?;
    if !segment.arguments.is_none() {
        return None;
    }
    match segment.ident.to_string().as_str() {
        "String" => Some(Kind::String),
        "i64" => Some(Kind::Int),
        "bool" => Some(Kind::Bool),
        _ => None,
    }
}

fn list_element(ty: &Type) -> Option<&Type> {
    let segment = last_segment(ty)?;
    if segment.ident != "Vec" {
        return None;
    }
    let syn::PathArguments::AngleBracketed(args) = &segment.arguments else {
        return None;
    };
    if args.args.len() != 1 {
        return None;
    }
    match args.args.first()? {
        syn::GenericArgument::Type(inner) => Some(inner),
        _ => None,
    }
}

fn last_segment(ty: &Type) -> Option<&syn::PathSegment> {
    match ty {
        Type::Path(path) if path.qself.is_none() => path.path.segments.last(),
        Type::Group(group) => last_segment(&group.elem),
        Type::Paren(paren) => last_segment(&paren.elem),
        _ => None,
    }
}

fn type_name(ty: &Type) -> String {
    ty.to_token_stream()
        .to_string()
        .replace(" <", "<")
        .replace("< ", "<")
        .replace(" >", ">")
        .replace(" ,", ",")
        .replace(":: ", "::")
        .replace(" ::", "::")
}
