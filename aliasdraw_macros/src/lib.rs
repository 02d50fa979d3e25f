//! `#[derive(WeightedEnum)]` for `aliasdraw`.
//!
//! Weights that are numeric literals or arithmetic on them are evaluated
//! here, so a negative, infinite or all-zero weighting is a compile error
//! pointing at the offending attribute. Anything else (a `const`, a function
//! call) is emitted as `(expr) as f64` and checked when the sampler is built.

use proc_macro::TokenStream;
use proc_macro2::{Literal, TokenStream as TokenStream2};
use quote::quote;
use syn::{
    BinOp, Data, DeriveInput, Expr, Fields, Lit, UnOp, Variant, parse_macro_input,
    spanned::Spanned,
};

/// Variant attribute: #[weight(<expr>)]
#[proc_macro_derive(WeightedEnum, attributes(weight))]
pub fn derive_weighted_enum(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    expand(&input)
        .unwrap_or_else(syn::Error::into_compile_error)
        .into()
}

enum Weight {
    Const(f64),
    Deferred(Expr),
}

fn expand(input: &DeriveInput) -> syn::Result<TokenStream2> {
    let enum_ident = &input.ident;
    let Data::Enum(data_enum) = &input.data else {
        return Err(syn::Error::new(
            enum_ident.span(),
            "WeightedEnum can only be derived for enums",
        ));
    };
    if !input.generics.params.is_empty() {
        return Err(syn::Error::new(
            input.generics.span(),
            "WeightedEnum does not support generic enums",
        ));
    }
    if data_enum.variants.is_empty() {
        return Err(syn::Error::new(
            enum_ident.span(),
            "WeightedEnum needs at least one variant",
        ));
    }

    let mut entries = Vec::with_capacity(data_enum.variants.len());
    let mut any_positive = false;
    let mut all_const = true;
    for variant in &data_enum.variants {
        if !matches!(variant.fields, Fields::Unit) {
            return Err(syn::Error::new(
                variant.span(),
                "WeightedEnum only supports fieldless variants",
            ));
        }
        let ident = &variant.ident;
        let weight = match variant_weight(variant)? {
            Weight::Const(w) => {
                any_positive |= w > 0.0;
                let lit = Literal::f64_suffixed(w);
                quote! { #lit }
            }
            Weight::Deferred(expr) => {
                all_const = false;
                quote! { (#expr) as f64 }
            }
        };
        entries.push(quote! { (Self::#ident, #weight) });
    }
    if all_const && !any_positive {
        return Err(syn::Error::new(
            enum_ident.span(),
            "at least one variant needs a positive #[weight(...)]",
        ));
    }

    Ok(quote! {
        impl aliasdraw::WeightedEnum for #enum_ident {
            const ENTRIES: &'static [(Self, f64)] = &[
                #(#entries),*
            ];
        }

        impl #enum_ident {
            /// Sampler over the variants, seeded from OS entropy.
            pub fn sampler() -> ::core::result::Result<aliasdraw::AliasSampler<Self>, aliasdraw::BuildError> {
                <Self as aliasdraw::WeightedEnum>::sampler()
            }

            /// Sampler over the variants whose stream starts from `seed`.
            pub fn seeded_sampler(seed: u64) -> ::core::result::Result<aliasdraw::AliasSampler<Self>, aliasdraw::BuildError> {
                <Self as aliasdraw::WeightedEnum>::sampler_with(
                    aliasdraw::SamplerConfig::default().with_seed(seed),
                )
            }
        }
    })
}

fn variant_weight(variant: &Variant) -> syn::Result<Weight> {
    let mut found: Option<Expr> = None;
    for attr in &variant.attrs {
        if !attr.path().is_ident("weight") {
            continue;
        }
        if found.is_some() {
            return Err(syn::Error::new(
                attr.span(),
                "duplicate #[weight(...)] on variant",
            ));
        }
        found = Some(attr.parse_args::<Expr>()?);
    }
    let Some(expr) = found else {
        return Err(syn::Error::new(
            variant.span(),
            "missing #[weight(...)] on variant",
        ));
    };

    match eval_const(&expr) {
        Some(w) if !w.is_finite() => Err(syn::Error::new(
            expr.span(),
            format!("weight evaluates to {w}; it must be finite"),
        )),
        Some(w) if w < 0.0 => Err(syn::Error::new(
            expr.span(),
            format!("weight must be non-negative, got {w}"),
        )),
        // -0.0 has no literal token; emit plain zero.
        Some(w) if w == 0.0 => Ok(Weight::Const(0.0)),
        Some(w) => Ok(Weight::Const(w)),
        None => Ok(Weight::Deferred(expr)),
    }
}

/// Evaluate numeric literals combined with `+ - * /`, unary minus and
/// parentheses. Integers are evaluated as floats, so `1/100` is `0.01`.
fn eval_const(expr: &Expr) -> Option<f64> {
    match expr {
        Expr::Lit(el) => match &el.lit {
            Lit::Int(int) => int.base10_digits().parse().ok(),
            Lit::Float(float) => float.base10_digits().parse().ok(),
            _ => None,
        },
        Expr::Unary(u) if matches!(u.op, UnOp::Neg(_)) => eval_const(&u.expr).map(|v| -v),
        Expr::Paren(p) => eval_const(&p.expr),
        Expr::Group(g) => eval_const(&g.expr),
        Expr::Binary(b) => {
            let lhs = eval_const(&b.left)?;
            let rhs = eval_const(&b.right)?;
            match b.op {
                BinOp::Add(_) => Some(lhs + rhs),
                BinOp::Sub(_) => Some(lhs - rhs),
                BinOp::Mul(_) => Some(lhs * rhs),
                BinOp::Div(_) => Some(lhs / rhs),
                _ => None,
            }
        }
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use syn::parse_quote;

    fn expand_err(input: DeriveInput) -> String {
        match expand(&input) {
            Ok(_) => panic!("expected a compile error"),
            Err(e) => e.to_string(),
        }
    }

    #[test]
    fn evaluates_literal_arithmetic() {
        assert_eq!(eval_const(&parse_quote!(1 / 100)), Some(0.01));
        assert_eq!(eval_const(&parse_quote!((2 + 3) * 0.5)), Some(2.5));
        assert_eq!(eval_const(&parse_quote!(-4)), Some(-4.0));
        assert_eq!(eval_const(&parse_quote!(1 / 0)), Some(f64::INFINITY));
    }

    #[test]
    fn leaves_non_literals_alone() {
        assert_eq!(eval_const(&parse_quote!(GC / 2.0)), None);
        assert_eq!(eval_const(&parse_quote!(weight())), None);
        assert_eq!(eval_const(&parse_quote!(3 % 2)), None);
    }

    #[test]
    fn rejects_negative_literal() {
        let err = expand_err(parse_quote! {
            enum E { #[weight(1)] A, #[weight(1 - 2)] B }
        });
        assert!(err.contains("non-negative"), "{err}");
    }

    #[test]
    fn rejects_infinite_literal() {
        let err = expand_err(parse_quote! {
            enum E { #[weight(1 / 0)] A }
        });
        assert!(err.contains("finite"), "{err}");
    }

    #[test]
    fn rejects_all_zero_literals() {
        let err = expand_err(parse_quote! {
            enum E { #[weight(0)] A, #[weight(0.0)] B }
        });
        assert!(err.contains("positive"), "{err}");
    }

    #[test]
    fn zero_weights_with_a_const_are_left_to_runtime() {
        let input: DeriveInput = parse_quote! {
            enum E { #[weight(0)] A, #[weight(W)] B }
        };
        assert!(expand(&input).is_ok());
    }

    #[test]
    fn rejects_missing_duplicate_and_fields() {
        assert!(expand_err(parse_quote! { enum E { A } }).contains("missing"));
        assert!(
            expand_err(parse_quote! { enum E { #[weight(1)] #[weight(2)] A } })
                .contains("duplicate")
        );
        assert!(expand_err(parse_quote! { enum E { #[weight(1)] A(u8) } }).contains("fieldless"));
        assert!(expand_err(parse_quote! { enum E {} }).contains("at least one variant"));
        assert!(expand_err(parse_quote! { struct S; }).contains("only be derived for enums"));
    }
}
