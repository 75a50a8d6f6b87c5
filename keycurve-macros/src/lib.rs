use proc_macro::TokenStream;
use quote::quote;
use syn::parse::{Parse, ParseStream};
use syn::punctuated::Punctuated;
use syn::{Ident, Lit, Token, parse_macro_input};

/// Creates a `Curve` at compile time from `time => value` pairs.
///
/// The keys are checked and sorted by time during expansion, so the generated
/// code only builds the key vector. An optional scheme name followed by `;`
/// selects the interpolation type.
///
/// # Format
///
/// `[<type>;] <time> => <value>, ...` where:
/// - `type` is one of `linear`, `smoothstep`, `catmull`, `cardinal`, `spline`, `step`
///   (defaults to smoothstep)
/// - `time` and `value` are integer or float literals, optionally negated
///
/// # Examples
///
/// ```ignore
/// use keycurve::curve;
///
/// // Default smoothstep interpolation
/// let fade = curve!(0.0 => 0.0, 1.0 => 1.0);
///
/// // Explicit scheme
/// let bounce = curve!(spline; 0.0 => 0.0, 0.5 => 1.0, 1.0 => 0.0);
///
/// // Keys may be written in any order
/// let ramp = curve!(linear; 1 => 10, 0 => 0);
/// ```
#[proc_macro]
pub fn curve(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as CurveInput);

    let variant = match input.curve_type {
        Some(ident) => match type_variant(&ident.to_string()) {
            Ok(variant) => variant,
            Err(e) => {
                let error_msg = format!("Invalid curve!: {}", e);
                return TokenStream::from(quote! { compile_error!(#error_msg) });
            }
        },
        None => "Smoothstep",
    };
    let variant = Ident::new(variant, proc_macro2::Span::call_site());

    let mut keys = input.keys;
    keys.sort_by(|a, b| a.0.total_cmp(&b.0));

    let keys = keys.iter().map(|(time, value)| {
        let time = number_tokens(*time);
        let value = number_tokens(*value);
        quote! { keycurve::Key::new(#time, #value) }
    });

    let expanded = quote! {
        {
            let keys: ::std::vec::Vec<keycurve::Key> = ::std::vec![#(#keys),*];
            keycurve::Curve::from_keys(keys).with_type(keycurve::CurveType::#variant)
        }
    };

    TokenStream::from(expanded)
}

struct CurveInput {
    curve_type: Option<Ident>,
    keys: Vec<(f64, f64)>,
}

impl Parse for CurveInput {
    fn parse(input: ParseStream) -> syn::Result<Self> {
        let curve_type = if input.peek(Ident) && input.peek2(Token![;]) {
            let ident: Ident = input.parse()?;
            input.parse::<Token![;]>()?;
            Some(ident)
        } else {
            None
        };

        let pairs = Punctuated::<KeyPair, Token![,]>::parse_terminated(input)?;
        let keys = pairs.into_iter().map(|p| (p.time, p.value)).collect();

        Ok(Self { curve_type, keys })
    }
}

struct KeyPair {
    time: f64,
    value: f64,
}

impl Parse for KeyPair {
    fn parse(input: ParseStream) -> syn::Result<Self> {
        let time = parse_number(input)?;
        input.parse::<Token![=>]>()?;
        let value = parse_number(input)?;
        Ok(Self { time, value })
    }
}

/// Parses an optionally negated integer or float literal.
fn parse_number(input: ParseStream) -> syn::Result<f64> {
    let negative = input.parse::<Option<Token![-]>>()?.is_some();
    let lit: Lit = input.parse()?;
    let value = match &lit {
        Lit::Float(f) => f.base10_parse::<f64>()?,
        Lit::Int(i) => i.base10_parse::<i64>()? as f64,
        _ => return Err(syn::Error::new(lit.span(), "expected a number")),
    };
    if !value.is_finite() {
        return Err(syn::Error::new(lit.span(), "number is not finite"));
    }
    Ok(if negative { -value } else { value })
}

/// Emits a float literal, with negation as a separate token.
fn number_tokens(x: f64) -> proc_macro2::TokenStream {
    let magnitude = x.abs();
    if x.is_sign_negative() {
        quote! { -#magnitude }
    } else {
        quote! { #magnitude }
    }
}

fn type_variant(name: &str) -> Result<&'static str, String> {
    match name.to_lowercase().as_str() {
        "linear" => Ok("Linear"),
        "smoothstep" => Ok("Smoothstep"),
        "catmull" => Ok("Catmull"),
        "cardinal" => Ok("Cardinal"),
        "spline" => Ok("Spline"),
        "step" => Ok("Step"),
        _ => Err(format!("unknown curve type '{}'", name)),
    }
}
