//! SolveKit Macros
//!
//! Procedural macro for solution registration.
//!
//! ## Macros
//!
//! - `#[solvekit::solution]` - Register a solution entry point under a platform

use proc_macro::TokenStream;
use proc_macro2::TokenStream as TokenStream2;
use quote::{format_ident, quote};
use syn::{FnArg, ItemFn, Type, parse_macro_input};

// ============================================================================
// Attribute Parsing Helpers
// ============================================================================

mod attr {
    use syn::meta::ParseNestedMeta;

    /// Get the attribute name as a string
    pub fn name(meta: &ParseNestedMeta) -> String {
        meta.path
            .get_ident()
            .map(|i| i.to_string())
            .unwrap_or_default()
    }

    /// Parse a string literal attribute: `attr = "value"`
    pub fn string(meta: &ParseNestedMeta) -> syn::Result<String> {
        let value: syn::LitStr = meta.value()?.parse()?;
        Ok(value.value())
    }

    /// Create an unknown attribute error
    pub fn unknown(meta: &ParseNestedMeta, name: &str) -> syn::Error {
        meta.error(format!("unknown attribute: {}", name))
    }
}

/// Register a solution entry point
///
/// The argument shape is taken from the signature:
///
/// - no arguments: the solution needs no input, or reads it from stdin
/// - one integer argument: the test number selects a hard-coded input
/// - one `&[String]` argument: the lines of the input file
///
/// The function may return `()` or `Result<(), E>` for any `E` convertible
/// into `Box<dyn Error + Send + Sync>`.
///
/// # Example
///
/// ```ignore
/// #[solvekit::solution(platform = "AdventOfCode")]
/// fn y2015_d01p1(input: &[String]) {
///     // ...
/// }
///
/// // Name differs from the function identifier
/// #[solvekit::solution(platform = "AtCoder", name = "ABC424A")]
/// fn abc424a() -> std::io::Result<()> { ... }
/// ```
#[proc_macro_attribute]
pub fn solution(args: TokenStream, item: TokenStream) -> TokenStream {
    let args = TokenStream2::from(args);
    let func = parse_macro_input!(item as ItemFn);

    solution_impl(args, func)
        .unwrap_or_else(|e| e.to_compile_error())
        .into()
}

fn solution_impl(args: TokenStream2, func: ItemFn) -> Result<TokenStream2, syn::Error> {
    let config = parse_solution_config(args)?;
    let shape = classify_signature(&func)?;

    let fn_name = &func.sig.ident;
    let wrapper_name = format_ident!("_solvekit_entry_{}", fn_name);
    let name = config.name.unwrap_or_else(|| fn_name.to_string());
    let platform = config.platform.ok_or_else(|| {
        syn::Error::new_spanned(
            &func.sig.ident,
            "SolveKit: missing `platform = \"...\"` in #[solution]",
        )
    })?;

    let (wrapper, entry) = match shape {
        Shape::NoInput => (
            quote! {
                fn #wrapper_name() -> ::solvekit::Outcome {
                    ::solvekit::internal::IntoOutcome::into_outcome(#fn_name())
                }
            },
            quote! { ::solvekit::EntryPoint::NoInput(#wrapper_name) },
        ),
        Shape::TestSelector => (
            quote! {
                fn #wrapper_name(test: u8) -> ::solvekit::Outcome {
                    ::solvekit::internal::IntoOutcome::into_outcome(#fn_name(test.into()))
                }
            },
            quote! { ::solvekit::EntryPoint::TestSelector(#wrapper_name) },
        ),
        Shape::Lines => (
            quote! {
                fn #wrapper_name(lines: &[::std::string::String]) -> ::solvekit::Outcome {
                    ::solvekit::internal::IntoOutcome::into_outcome(#fn_name(lines))
                }
            },
            quote! { ::solvekit::EntryPoint::Lines(#wrapper_name) },
        ),
    };

    Ok(quote! {
        #func

        #[doc(hidden)]
        #[allow(non_snake_case)]
        #wrapper

        ::solvekit::internal::inventory::submit! {
            ::solvekit::SolutionDef {
                platform: #platform,
                name: #name,
                entry: #entry,
                file: file!(),
                line: line!(),
                module_path: module_path!(),
            }
        }
    })
}

#[derive(Default)]
struct SolutionConfig {
    platform: Option<String>,
    name: Option<String>,
}

fn parse_solution_config(args: TokenStream2) -> Result<SolutionConfig, syn::Error> {
    let mut config = SolutionConfig::default();

    if args.is_empty() {
        return Ok(config);
    }

    let parser = syn::meta::parser(|meta| {
        let name = attr::name(&meta);
        match name.as_str() {
            "platform" => config.platform = Some(attr::string(&meta)?),
            "name" => config.name = Some(attr::string(&meta)?),
            _ => return Err(attr::unknown(&meta, &name)),
        }
        Ok(())
    });

    syn::parse::Parser::parse2(parser, args)?;

    for value in [&config.platform, &config.name].into_iter().flatten() {
        if value.is_empty() || value.contains(['.', '-']) {
            return Err(syn::Error::new(
                proc_macro2::Span::call_site(),
                format!(
                    "SolveKit: `{}` cannot be used as a platform or solution name (no '.' or '-', not empty)",
                    value
                ),
            ));
        }
    }

    Ok(config)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Shape {
    NoInput,
    TestSelector,
    Lines,
}

fn classify_signature(func: &ItemFn) -> syn::Result<Shape> {
    if func.sig.asyncness.is_some() {
        return Err(syn::Error::new_spanned(
            func.sig.asyncness,
            "SolveKit: solutions cannot be async",
        ));
    }
    if !func.sig.generics.params.is_empty() {
        return Err(syn::Error::new_spanned(
            &func.sig.generics,
            "SolveKit: solutions cannot be generic",
        ));
    }

    let mut inputs = func.sig.inputs.iter();
    let shape = match (inputs.next(), inputs.next()) {
        (None, _) => Shape::NoInput,
        (Some(FnArg::Typed(arg)), None) => match &*arg.ty {
            Type::Reference(_) => Shape::Lines,
            Type::Path(_) => Shape::TestSelector,
            other => {
                return Err(syn::Error::new_spanned(
                    other,
                    "SolveKit: argument must be an integer test number or `&[String]`",
                ));
            }
        },
        _ => {
            return Err(syn::Error::new_spanned(
                &func.sig.inputs,
                "SolveKit: solution must take no arguments, a test number, or `&[String]`",
            ));
        }
    };
    Ok(shape)
}
