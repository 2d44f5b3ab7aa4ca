use std::collections::HashSet;

use proc_macro::TokenStream;
use proc_macro2::{Literal, TokenStream as TokenStream2};
use quote::{format_ident, quote};
use syn::punctuated::Punctuated;
use syn::spanned::Spanned;
use syn::{
    parse_macro_input, parse_quote, Data, DeriveInput, Expr, ExprLit, Fields, GenericArgument,
    Ident, Lit, PathArguments, Token, Type,
};

/// Names the points of a `fixed_vec::Vector` newtype.
///
/// ```ignore
/// #[derive(Debug, Clone, Copy, PartialEq, NamedAxes)]
/// #[axes(r, g, b)]
/// struct Rgb<T = f64>(Vector<T, 3>);
/// ```
///
/// Generates `FixedVector` (so arithmetic returns `Rgb`), a `new(r, g, b)`
/// constructor, `r()`/`set_r()`/`r_mut()` per axis, operator overloads,
/// `Index<usize>`, `Display` and conversions to and from the wrapped vector.
#[proc_macro_derive(NamedAxes, attributes(axes))]
pub fn named_axes_derive(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    expand(&input)
        .unwrap_or_else(syn::Error::into_compile_error)
        .into()
}

fn expand(input: &DeriveInput) -> syn::Result<TokenStream2> {
    let name = &input.ident;
    let axes = parse_axes(input)?;
    let field_ty = wrapped_field(input)?;
    let (scalar, dim) = vector_params(field_ty)?;

    if dim != axes.len() {
        return Err(syn::Error::new(
            field_ty.span(),
            format!(
                "NamedAxes names {} axes but the wrapped vector has {} points",
                axes.len(),
                dim
            ),
        ));
    }

    let mut generics = input.generics.clone();
    generics.make_where_clause().predicates.push(parse_quote! {
        #scalar: ::fixed_vec::Element
    });
    let (impl_generics, ty_generics, where_clause) = generics.split_for_impl();

    let n = Literal::usize_unsuffixed(dim);
    let vector = quote! { ::fixed_vec::Vector<#scalar, #n> };
    let indexes: Vec<_> = (0..dim).map(syn::Index::from).collect();
    let setters: Vec<_> = axes.iter().map(|axis| format_ident!("set_{}", axis)).collect();
    let borrows: Vec<_> = axes.iter().map(|axis| format_ident!("{}_mut", axis)).collect();

    let expanded = quote! {
        impl #impl_generics ::fixed_vec::Points<#scalar> for #name #ty_generics #where_clause {
            fn points(&self) -> &[#scalar] {
                ::fixed_vec::Points::points(&self.0)
            }

            fn length(&self) -> usize {
                ::fixed_vec::Points::length(&self.0)
            }
        }

        impl #impl_generics ::fixed_vec::FixedVector<#scalar, #n> for #name #ty_generics #where_clause {
            fn as_vector(&self) -> &#vector {
                &self.0
            }

            fn from_vector(vector: #vector) -> Self {
                Self(vector)
            }
        }

        impl #impl_generics #name #ty_generics #where_clause {
            pub fn new(#(#axes: #scalar),*) -> Self {
                Self(::fixed_vec::Vector::from_points([#(#axes),*]))
            }

            #(
                pub fn #axes(&self) -> #scalar {
                    self.0[#indexes]
                }

                pub fn #setters(&mut self, value: #scalar) {
                    *self.0.__axis_mut(#indexes) = value;
                }

                pub fn #borrows(&mut self) -> &mut #scalar {
                    self.0.__axis_mut(#indexes)
                }
            )*
        }

        impl #impl_generics ::core::convert::From<#vector> for #name #ty_generics #where_clause {
            fn from(vector: #vector) -> Self {
                Self(vector)
            }
        }

        impl #impl_generics ::core::convert::From<#name #ty_generics> for #vector #where_clause {
            fn from(named: #name #ty_generics) -> Self {
                named.0
            }
        }

        impl #impl_generics ::core::ops::Index<usize> for #name #ty_generics #where_clause {
            type Output = #scalar;

            fn index(&self, index: usize) -> &#scalar {
                &self.0[index]
            }
        }

        impl #impl_generics ::core::fmt::Display for #name #ty_generics #where_clause {
            fn fmt(&self, f: &mut ::core::fmt::Formatter<'_>) -> ::core::fmt::Result {
                ::core::fmt::Display::fmt(&self.0, f)
            }
        }

        impl #impl_generics ::core::ops::Add for #name #ty_generics #where_clause {
            type Output = Self;

            fn add(self, rhs: Self) -> Self {
                Self(self.0 + rhs.0)
            }
        }

        impl #impl_generics ::core::ops::Sub for #name #ty_generics #where_clause {
            type Output = Self;

            fn sub(self, rhs: Self) -> Self {
                Self(self.0 - rhs.0)
            }
        }

        impl #impl_generics ::core::ops::Mul for #name #ty_generics #where_clause {
            type Output = Self;

            fn mul(self, rhs: Self) -> Self {
                Self(self.0 * rhs.0)
            }
        }

        impl #impl_generics ::core::ops::Div for #name #ty_generics #where_clause {
            type Output = Self;

            fn div(self, rhs: Self) -> Self {
                Self(self.0 / rhs.0)
            }
        }

        impl #impl_generics ::core::ops::Mul<#scalar> for #name #ty_generics #where_clause {
            type Output = Self;

            fn mul(self, rhs: #scalar) -> Self {
                Self(self.0 * rhs)
            }
        }

        impl #impl_generics ::core::ops::Div<#scalar> for #name #ty_generics #where_clause {
            type Output = Self;

            fn div(self, rhs: #scalar) -> Self {
                Self(self.0 / rhs)
            }
        }

        impl #impl_generics ::core::ops::Neg for #name #ty_generics #where_clause {
            type Output = Self;

            fn neg(self) -> Self {
                Self(-self.0)
            }
        }

        impl #impl_generics ::core::ops::AddAssign for #name #ty_generics #where_clause {
            fn add_assign(&mut self, rhs: Self) {
                self.0 += rhs.0;
            }
        }

        impl #impl_generics ::core::ops::SubAssign for #name #ty_generics #where_clause {
            fn sub_assign(&mut self, rhs: Self) {
                self.0 -= rhs.0;
            }
        }

        impl #impl_generics ::core::ops::MulAssign<#scalar> for #name #ty_generics #where_clause {
            fn mul_assign(&mut self, rhs: #scalar) {
                self.0 *= rhs;
            }
        }
    };

    Ok(expanded)
}

/// Reads `#[axes(a, b, ...)]`, rejecting a missing, empty or repeated list.
fn parse_axes(input: &DeriveInput) -> syn::Result<Vec<Ident>> {
    let attr = input
        .attrs
        .iter()
        .find(|attr| attr.path().is_ident("axes"))
        .ok_or_else(|| {
            syn::Error::new(
                input.ident.span(),
                "NamedAxes requires an #[axes(...)] attribute listing the axis names",
            )
        })?;

    let axes = attr.parse_args_with(Punctuated::<Ident, Token![,]>::parse_terminated)?;
    if axes.is_empty() {
        return Err(syn::Error::new(attr.span(), "#[axes(...)] must name at least one axis"));
    }

    let mut seen = HashSet::new();
    for axis in &axes {
        if !seen.insert(axis.to_string()) {
            return Err(syn::Error::new(axis.span(), format!("axis `{axis}` is named twice")));
        }
    }

    Ok(axes.into_iter().collect())
}

/// The type of the single unnamed field.
fn wrapped_field(input: &DeriveInput) -> syn::Result<&Type> {
    let data_struct = match &input.data {
        Data::Struct(data_struct) => data_struct,
        _ => {
            return Err(syn::Error::new(
                input.ident.span(),
                "NamedAxes can only be derived for structs",
            ));
        }
    };

    match &data_struct.fields {
        Fields::Unnamed(fields) if fields.unnamed.len() == 1 => Ok(&fields.unnamed[0].ty),
        fields => Err(syn::Error::new(
            if matches!(fields, Fields::Unit) { input.ident.span() } else { fields.span() },
            "NamedAxes can only be derived for tuple structs with a single `Vector<T, N>` field",
        )),
    }
}

/// Splits `Vector<T, N>` into its scalar type and literal length.
fn vector_params(ty: &Type) -> syn::Result<(&Type, usize)> {
    let not_a_vector = || {
        syn::Error::new(
            ty.span(),
            "expected `Vector<T, N>` with an integer literal for `N`",
        )
    };

    let Type::Path(type_path) = ty else {
        return Err(not_a_vector());
    };
    let segment = type_path.path.segments.last().ok_or_else(not_a_vector)?;
    if segment.ident != "Vector" {
        return Err(not_a_vector());
    }
    let PathArguments::AngleBracketed(args) = &segment.arguments else {
        return Err(not_a_vector());
    };
    if args.args.len() != 2 {
        return Err(not_a_vector());
    }

    let scalar = match &args.args[0] {
        GenericArgument::Type(scalar) => scalar,
        _ => return Err(not_a_vector()),
    };
    let dim = match &args.args[1] {
        GenericArgument::Const(Expr::Lit(ExprLit { lit: Lit::Int(lit), .. })) => {
            lit.base10_parse::<usize>()?
        }
        _ => return Err(not_a_vector()),
    };

    Ok((scalar, dim))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn expand_err(input: DeriveInput) -> String {
        expand(&input).unwrap_err().to_string()
    }

    #[test]
    fn expands_generic_tuple_struct() {
        let input: DeriveInput = parse_quote! {
            #[axes(x, y, z)]
            pub struct Vector3<T = f64>(Vector<T, 3>);
        };
        let tokens = expand(&input).unwrap().to_string();
        assert!(tokens.contains("fn set_z"));
        assert!(tokens.contains("fn y_mut"));
        assert!(tokens.contains("FixedVector < T , 3 >"));
    }

    #[test]
    fn expands_concrete_scalar() {
        let input: DeriveInput = parse_quote! {
            #[axes(r, g, b)]
            struct Rgb(fixed_vec::Vector<f32, 3>);
        };
        let tokens = expand(&input).unwrap().to_string();
        assert!(tokens.contains("Element"));
        assert!(tokens.contains("r : f32 , g : f32 , b : f32"));
        assert!(tokens.contains("fn set_g"));
    }

    #[test]
    fn rejects_missing_axes() {
        let err = expand_err(parse_quote! { struct V(Vector<f64, 2>); });
        assert!(err.contains("requires an #[axes(...)]"));
    }

    #[test]
    fn rejects_empty_axes() {
        let err = expand_err(parse_quote! { #[axes()] struct V(Vector<f64, 2>); });
        assert!(err.contains("at least one axis"));
    }

    #[test]
    fn rejects_duplicate_axes() {
        let err = expand_err(parse_quote! { #[axes(x, x)] struct V(Vector<f64, 2>); });
        assert!(err.contains("axis `x` is named twice"));
    }

    #[test]
    fn rejects_axis_count_mismatch() {
        let err = expand_err(parse_quote! { #[axes(x, y)] struct V(Vector<f64, 3>); });
        assert!(err.contains("names 2 axes but the wrapped vector has 3 points"));
    }

    #[test]
    fn rejects_named_fields() {
        let err = expand_err(parse_quote! {
            #[axes(x, y)]
            struct V { inner: Vector<f64, 2> }
        });
        assert!(err.contains("tuple structs with a single"));
    }

    #[test]
    fn rejects_enums() {
        let err = expand_err(parse_quote! { #[axes(x)] enum V { A } });
        assert!(err.contains("only be derived for structs"));
    }

    #[test]
    fn rejects_non_literal_length() {
        let err = expand_err(parse_quote! { #[axes(x, y)] struct V(Vector<f64, N>); });
        assert!(err.contains("integer literal"));
    }

    #[test]
    fn rejects_other_wrapped_types() {
        let err = expand_err(parse_quote! { #[axes(x, y)] struct V([f64; 2]); });
        assert!(err.contains("expected `Vector<T, N>`"));
    }
}
