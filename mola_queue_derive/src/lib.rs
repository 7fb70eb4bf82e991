use proc_macro::TokenStream;
use quote::quote;
use syn::{
    parse::{Parse, ParseStream}, parse_macro_input, Data, DataStruct, DeriveInput, Field, Fields, Ident, LitStr, Token, Type, TypePath
};

const LINK_KINDS: [&str; 4] = ["SListLink", "STailQLink", "ListLink", "TailQLink"];

/// A `#[linked(key = "value")]` attribute.
///
/// On the struct the key is `crate_path`, on a field it is `adapter`.
struct LinkedAttribute {
    key: Ident,
    value: LitStr,
}

/// Parses the attribute in the format: `key = "value"`.
impl Parse for LinkedAttribute {
    fn parse(input: ParseStream) -> syn::Result<Self> {
        let key: Ident = input.parse()?;
        let _: Token![=] = input.parse()?;
        let value: LitStr = input.parse()?;
        Ok(LinkedAttribute { key, value })
    }
}

fn linked_attribute(attrs: &[syn::Attribute], expected: &str) -> syn::Result<Option<LitStr>> {
    for attr in attrs {
        if attr.path().is_ident("linked") {
            let parsed = attr.parse_args::<LinkedAttribute>()?;
            if parsed.key != expected {
                return Err(syn::Error::new(
                    parsed.key.span(),
                    format!("expected attribute `{expected}`"),
                ));
            }
            return Ok(Some(parsed.value));
        }
    }
    Ok(None)
}

/// The link kind of a field, if its type is one of the link types.
fn link_kind(field: &Field) -> Option<Ident> {
    if let Type::Path(TypePath { path, .. }) = &field.ty {
        let ident = &path.segments.last()?.ident;
        if LINK_KINDS.iter().any(|kind| ident == kind) {
            return Some(ident.clone());
        }
    }
    None
}

/// Derive macro exposing the link fields of a record.
///
/// Every field whose type is `SListLink`, `STailQLink`, `ListLink` or
/// `TailQLink` gets a `HasLink` implementation, so the record can be used
/// with the container's default adapter. A record carrying several links of
/// the same kind names one adapter per field instead:
///
/// ```ignore
/// #[derive(Linked)]
/// struct Conn {
///     #[linked(adapter = "ByAge")]
///     age: TailQLink,
///     #[linked(adapter = "ByIdle")]
///     idle: TailQLink,
/// }
///
/// let mut by_age = TailQ::<Conn, ByAge>::new();
/// ```
#[proc_macro_derive(Linked, attributes(linked))]
pub fn linked_derive(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    match expand(&input) {
        Ok(tokens) => tokens.into(),
        Err(e) => e.to_compile_error().into(),
    }
}

fn expand(input: &DeriveInput) -> syn::Result<proc_macro2::TokenStream> {
    let struct_name = &input.ident;
    let vis = &input.vis;
    let (impl_generics, ty_generics, where_clause) = input.generics.split_for_impl();

    // Find absolute crate path
    let crate_path = match linked_attribute(&input.attrs, "crate_path")? {
        Some(path) => {
            let path: syn::Path = path.parse()?;
            quote! { #path }
        }
        None => quote! { ::mola_queue },
    };
    let traits_path = quote! { #crate_path::linked_list::intrusive::traits };

    let fields = match &input.data {
        Data::Struct(DataStruct {
            fields: Fields::Named(fields),
            ..
        }) => &fields.named,
        _ => {
            return Err(syn::Error::new_spanned(
                input,
                "Linked derive macro only supports structs with named fields",
            ));
        }
    };

    let mut seen: Vec<Ident> = Vec::new();
    let mut impls = Vec::new();

    for field in fields {
        let Some(kind) = link_kind(field) else {
            continue;
        };
        let field_name = field.ident.as_ref().expect("named field");
        let link_type = &field.ty;

        if let Some(adapter) = linked_attribute(&field.attrs, "adapter")? {
            if !input.generics.params.is_empty() {
                return Err(syn::Error::new_spanned(
                    &input.generics,
                    "adapter fields require a struct without generic parameters",
                ));
            }
            let adapter = Ident::new(&adapter.value(), adapter.span());
            let doc = format!("Adapter for the `{field_name}` link of [`{struct_name}`].");
            impls.push(quote! {
                #[doc = #doc]
                #vis struct #adapter;

                impl #traits_path::Adapter for #adapter {
                    type Elem = #struct_name;
                    type Link = #link_type;

                    #[inline]
                    fn link(elem: &Self::Elem) -> &Self::Link {
                        &elem.#field_name
                    }

                    #[inline]
                    fn link_mut(elem: &mut Self::Elem) -> &mut Self::Link {
                        &mut elem.#field_name
                    }
                }
            });
            continue;
        }

        if seen.contains(&kind) {
            return Err(syn::Error::new_spanned(
                field_name,
                format!("more than one `{kind}` field: name an adapter with `#[linked(adapter = \"...\")]`"),
            ));
        }
        seen.push(kind);

        impls.push(quote! {
            impl #impl_generics #traits_path::HasLink<#link_type> for #struct_name #ty_generics #where_clause {
                #[inline]
                fn link(&self) -> &#link_type {
                    &self.#field_name
                }

                #[inline]
                fn link_mut(&mut self) -> &mut #link_type {
                    &mut self.#field_name
                }
            }
        });
    }

    if impls.is_empty() {
        return Err(syn::Error::new_spanned(
            struct_name,
            "Struct must have a field of type 'SListLink', 'STailQLink', 'ListLink' or 'TailQLink'",
        ));
    }

    Ok(quote! {
        #(#impls)*
    })
}
