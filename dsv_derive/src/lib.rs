use proc_macro::TokenStream;
use proc_macro2::TokenStream as TokenStream2;
use quote::{format_ident, quote};
use syn::{
    parse_macro_input, spanned::Spanned, Attribute, DeriveInput, Expr, Field, Ident, LitInt, LitStr,
    Type,
};

/// Record level `#[dsv(...)]` options
struct Container {
    version: Option<LitInt>,
    tag: Type,
}

fn container_attrs(attrs: &[Attribute]) -> syn::Result<Container> {
    let mut version = None;
    let mut tag: Option<Type> = None;
    for attr in attrs.iter().filter(|attr| attr.path().is_ident("dsv")) {
        attr.parse_nested_meta(|meta| {
            if meta.path.is_ident("version") {
                version = Some(meta.value()?.parse::<LitInt>()?);
                Ok(())
            } else if meta.path.is_ident("tag") {
                let lit: LitStr = meta.value()?.parse()?;
                match lit.value().as_str() {
                    "u8" | "i32" => {
                        tag = Some(lit.parse()?);
                        Ok(())
                    }
                    _ => Err(meta.error("version tags are either \"u8\" or \"i32\"")),
                }
            } else {
                Err(meta.error("unsupported dsv container attribute"))
            }
        })?;
    }

    if tag.is_some() && version.is_none() {
        return Err(syn::Error::new(
            proc_macro2::Span::call_site(),
            "a tag width requires a version",
        ));
    }

    Ok(Container {
        version,
        tag: tag.unwrap_or_else(|| syn::parse_quote!(i32)),
    })
}

#[derive(Clone, Copy, PartialEq)]
enum Shape {
    Plain,
    Bytes,
    Recycle,
    IndexGated,
    FlagGated,
}

enum Count {
    Prefixed,
    Expr(Expr, String),
}

#[derive(Default)]
struct FieldOpts {
    count: Option<Count>,
    shape: Option<Shape>,
    parallel: bool,
    limit: Option<LitInt>,
    width: Option<Type>,
    when: Option<Expr>,
    with: Option<Expr>,
    expect: Option<LitInt>,
}

fn set_shape(opts: &mut FieldOpts, shape: Shape, meta: &syn::meta::ParseNestedMeta) -> syn::Result<()> {
    if opts.shape.is_some() {
        return Err(meta.error("only one of bytes, recycle, index_gated, flag_gated is allowed"));
    }
    opts.shape = Some(shape);
    Ok(())
}

fn field_attrs(f: &Field) -> syn::Result<FieldOpts> {
    let mut opts = FieldOpts::default();
    for attr in f.attrs.iter().filter(|attr| attr.path().is_ident("dsv")) {
        attr.parse_nested_meta(|meta| {
            if meta.path.is_ident("len") {
                let lit: LitStr = meta.value()?.parse()?;
                if opts.count.is_some() {
                    return Err(meta.error("len and prefixed are exclusive"));
                }
                opts.count = Some(Count::Expr(lit.parse()?, lit.value()));
            } else if meta.path.is_ident("prefixed") {
                if opts.count.is_some() {
                    return Err(meta.error("len and prefixed are exclusive"));
                }
                opts.count = Some(Count::Prefixed);
            } else if meta.path.is_ident("bytes") {
                set_shape(&mut opts, Shape::Bytes, &meta)?;
            } else if meta.path.is_ident("recycle") {
                set_shape(&mut opts, Shape::Recycle, &meta)?;
            } else if meta.path.is_ident("index_gated") {
                set_shape(&mut opts, Shape::IndexGated, &meta)?;
            } else if meta.path.is_ident("flag_gated") {
                set_shape(&mut opts, Shape::FlagGated, &meta)?;
            } else if meta.path.is_ident("parallel") {
                opts.parallel = true;
            } else if meta.path.is_ident("limit") {
                opts.limit = Some(meta.value()?.parse()?);
            } else if meta.path.is_ident("width") {
                let lit: LitStr = meta.value()?.parse()?;
                opts.width = Some(lit.parse()?);
            } else if meta.path.is_ident("when") {
                let lit: LitStr = meta.value()?.parse()?;
                opts.when = Some(lit.parse()?);
            } else if meta.path.is_ident("with") {
                let lit: LitStr = meta.value()?.parse()?;
                opts.with = Some(lit.parse()?);
            } else if meta.path.is_ident("expect") {
                opts.expect = Some(meta.value()?.parse()?);
            } else {
                return Err(meta.error("unsupported dsv field attribute"));
            }
            Ok(())
        })?;
    }

    let standalone = [
        opts.width.is_some(),
        opts.when.is_some(),
        opts.with.is_some(),
        opts.expect.is_some(),
    ];
    let counted = opts.count.is_some() || opts.shape.is_some() || opts.parallel;
    if standalone.iter().filter(|x| **x).count() + usize::from(counted) > 1 {
        return Err(syn::Error::new(
            f.span(),
            "width, when, with, expect and counted reads cannot be combined",
        ));
    }

    if opts.count.is_none() && (opts.shape.is_some() || opts.parallel || opts.limit.is_some()) {
        return Err(syn::Error::new(
            f.span(),
            "field needs a count: add `len = \"...\"` or `prefixed`",
        ));
    }

    Ok(opts)
}

fn field_label(ident: &Ident) -> String {
    let name = ident.to_string();
    name.trim_start_matches("r#").to_string()
}

fn count_tokens(count: &Count) -> TokenStream2 {
    match count {
        Count::Prefixed => quote! { <i32 as ::dsv::Decode>::decode(reader)? },
        Count::Expr(expr, _) => quote! { #expr },
    }
}

fn same_count(a: &Option<Count>, b: &Option<Count>) -> bool {
    match (a, b) {
        (Some(Count::Expr(_, x)), Some(Count::Expr(_, y))) => x == y,
        _ => false,
    }
}

fn single_field(ident: &Ident, ty: &Type, opts: &FieldOpts) -> TokenStream2 {
    let label = field_label(ident);

    if let Some(width) = &opts.width {
        return quote! {
            let #ident: #ty = <#ty as ::std::convert::From<i32>>::from(
                i32::from(<#width as ::dsv::Decode>::decode(reader)?)
            );
        };
    }

    if let Some(cond) = &opts.when {
        return quote! {
            let #ident: #ty = if #cond {
                ::std::option::Option::Some(::dsv::Decode::decode(reader)?)
            } else {
                ::std::option::Option::None
            };
        };
    }

    if let Some(with) = &opts.with {
        return quote! { let #ident: #ty = #with?; };
    }

    if let Some(expected) = &opts.expect {
        return quote! { let #ident: #ty = ::dsv::read_marker(reader, #label, #expected)?; };
    }

    let count = match &opts.count {
        Some(count) => count_tokens(count),
        None => return quote! { let #ident: #ty = <#ty as ::dsv::Decode>::decode(reader)?; },
    };

    let limit = opts.limit.as_ref().map(|limit| {
        quote! { ::dsv::check_limit(reader, #label, __len, #limit)?; }
    });

    let read = match opts.shape.unwrap_or(Shape::Plain) {
        Shape::Plain => quote! { <#ty as ::dsv::DecodeLen>::decode_len(reader, __len)? },
        Shape::Bytes => quote! { ::dsv::read_blob(reader, __len, #label)? },
        Shape::Recycle => quote! { ::dsv::read_recycle(reader, __len, #label)? },
        Shape::IndexGated => quote! { ::dsv::read_index_gated(reader, __len)? },
        Shape::FlagGated => quote! { ::dsv::read_flag_gated(reader, __len)? },
    };

    quote! {
        let #ident: #ty = {
            let __len: i32 = #count;
            #limit
            #read
        };
    }
}

fn parallel_group(fields: &[(&Ident, &Type, FieldOpts)]) -> syn::Result<TokenStream2> {
    let idents = fields.iter().map(|(ident, _, _)| *ident);
    let types = fields.iter().map(|(_, ty, _)| *ty);
    let count = fields[0]
        .2
        .count
        .as_ref()
        .map(count_tokens)
        .unwrap_or_default();
    let reader_fn = match fields.len() {
        2 => quote! { ::dsv::read_parallel2 },
        3 => quote! { ::dsv::read_parallel3 },
        _ => {
            return Err(syn::Error::new(
                fields[0].0.span(),
                "parallel groups hold two or three fields sharing a len",
            ))
        }
    };

    Ok(quote! {
        let (#(#idents),*): (#(#types),*) = {
            let __len: i32 = #count;
            #reader_fn(reader, __len)?
        };
    })
}

fn expand(input: DeriveInput) -> syn::Result<TokenStream2> {
    let ident = input.ident;
    let record_name = ident.to_string();

    if !input.generics.params.is_empty() {
        return Err(syn::Error::new(
            input.generics.span(),
            "Decode cannot be derived for generic records",
        ));
    }

    let named_fields = match input.data {
        syn::Data::Struct(syn::DataStruct {
            fields: syn::Fields::Named(x),
            ..
        }) => x,
        _ => {
            return Err(syn::Error::new(
                ident.span(),
                "Decode can only be derived for structs with named fields",
            ))
        }
    };

    let container = container_attrs(&input.attrs)?;
    let tag = &container.tag;

    let version_check = container.version.as_ref().map(|version| {
        quote! { ::dsv::check_version::<#tag>(reader, #record_name, #version)?; }
    });

    let version_const = match &container.version {
        Some(version) => quote! { ::std::option::Option::Some(#version) },
        None => quote! { ::std::option::Option::None },
    };

    let mut parsed = Vec::with_capacity(named_fields.named.len());
    for f in named_fields.named.iter() {
        let name = f
            .ident
            .as_ref()
            .ok_or_else(|| syn::Error::new(f.span(), "expected a named field"))?;
        parsed.push((name, &f.ty, field_attrs(f)?));
    }

    let mut stmts = Vec::with_capacity(parsed.len());
    let mut rest = parsed.as_slice();
    while let Some((head, tail)) = rest.split_first() {
        if head.2.parallel {
            let group_len = 1 + tail
                .iter()
                .take_while(|(_, _, opts)| opts.parallel && same_count(&opts.count, &head.2.count))
                .count();
            let (group, remainder) = rest.split_at(group_len);
            stmts.push(parallel_group(group)?);
            rest = remainder;
        } else {
            stmts.push(single_field(head.0, head.1, &head.2));
            rest = tail;
        }
    }

    let names = parsed.iter().map(|(name, _, _)| *name);
    let inner = format_ident!("decode_fields");

    Ok(quote! {
        impl ::dsv::Decode for #ident {
            fn decode(reader: &mut ::dsv::Reader<'_>) -> ::std::result::Result<Self, ::dsv::Error> {
                fn #inner(reader: &mut ::dsv::Reader<'_>) -> ::std::result::Result<#ident, ::dsv::Error> {
                    #version_check
                    #(#stmts)*
                    ::std::result::Result::Ok(#ident { #(#names),* })
                }

                #inner(reader).map_err(|e| e.within(#record_name))
            }
        }

        impl ::dsv::Record for #ident {
            const NAME: &'static str = #record_name;
            const VERSION: ::std::option::Option<i32> = #version_const;
        }
    })
}

/// Generates a `Decode` and `Record` implementation from a record declaration
///
/// ```ignore
/// use dsv::{Decode, Slots};
///
/// #[derive(Decode)]
/// #[dsv(version = 0)]
/// pub struct Layer {
///     id: i32,
///     #[dsv(prefixed)]
///     ids: Vec<i32>,
///     node_cursor: i32,
///     #[dsv(index_gated, len = "node_cursor - 1")]
///     nodes: Slots<Node>,
/// }
/// ```
///
/// Fields are read in declaration order and every field is bound to a local
/// of the same name, so count, `when` and `with` expressions may refer to any
/// field declared above them (and to `reader` itself).
///
/// Container attributes:
///
/// - `#[dsv(version = N)]`: the record opens with an `i32` version tag that
///   must equal `N`
/// - `#[dsv(version = N, tag = "u8")]`: same with a single byte tag
///
/// Field attributes:
///
/// - `prefixed` / `len = "expr"`: where the element count comes from
/// - `bytes`, `recycle`, `index_gated`, `flag_gated`: how the counted data is laid out
/// - `parallel`: consecutive fields with the same `len` are read in lockstep
/// - `limit = N`: counts above `N` are rejected
/// - `width = "i16"`: an enum read through the given integer width
/// - `when = "expr"`: an `Option` that is only present when `expr` holds
/// - `with = "expr"`: a custom read that evaluates to a `Result`
/// - `expect = N`: an `i32` marker that must equal `N`
#[proc_macro_derive(Decode, attributes(dsv))]
pub fn derive(input: TokenStream) -> TokenStream {
    let dinput = parse_macro_input!(input as DeriveInput);
    expand(dinput)
        .unwrap_or_else(syn::Error::into_compile_error)
        .into()
}
