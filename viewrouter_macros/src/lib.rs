use proc_macro::TokenStream;
use quote::{format_ident, quote};
use syn::{
    parse::{Parse, ParseStream},
    parse_macro_input, Ident, ItemFn, LitBool, LitStr, Result as SynResult, Token,
};

struct RouteArgs {
    pattern: LitStr,
    clear: bool,
}

impl Parse for RouteArgs {
    fn parse(input: ParseStream) -> SynResult<Self> {
        let pattern: LitStr = input.parse()?;
        let mut clear = true;
        while !input.is_empty() {
            input.parse::<Token![,]>()?;
            if input.is_empty() {
                break;
            }
            let ident: Ident = input.parse()?;
            input.parse::<Token![=]>()?;
            match ident.to_string().as_str() {
                "clear" => clear = input.parse::<LitBool>()?.value,
                other => {
                    return Err(syn::Error::new(
                        ident.span(),
                        format!("unexpected argument {other}, expected `clear`"),
                    ))
                }
            }
        }
        Ok(RouteArgs { pattern, clear })
    }
}

fn is_name_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}

/// Parameter names declared by `:name` markers, in order.
///
/// Parenthesized groups are skipped whole, whether they are a parameter's
/// custom expression or literal text, so `:` inside them never starts a
/// parameter. This mirrors how the router compiles templates.
fn param_names(pattern: &str) -> Vec<&str> {
    let mut names = Vec::new();
    let mut depth = 0usize;
    let mut i = 0;

    while i < pattern.len() {
        let rest = &pattern[i..];
        let Some(c) = rest.chars().next() else {
            break;
        };
        match c {
            '(' => depth += 1,
            ')' => depth = depth.saturating_sub(1),
            ':' if depth == 0 => {
                let len = rest[1..]
                    .find(|c: char| !is_name_char(c))
                    .unwrap_or(rest.len() - 1);
                names.push(&rest[1..1 + len]);
                i += 1 + len;
                continue;
            }
            _ => {}
        }
        i += c.len_utf8();
    }
    names
}

fn check_pattern(pattern: &str) -> Result<(), String> {
    let names = param_names(pattern);
    for (i, name) in names.iter().enumerate() {
        if name.is_empty() {
            return Err(format!("empty parameter name in route pattern {pattern:?}"));
        }
        if names[..i].contains(name) {
            return Err(format!(
                "duplicate parameter :{name} in route pattern {pattern:?}"
            ));
        }
    }
    Ok(())
}

/// Declare a route on a handler function.
///
/// `#[route("/class/:id")]` or `#[route("/class/:id", clear = false)]` keeps
/// the function as written and adds a sibling `<fn>_route()` returning a
/// `viewrouter::RouteDef` for `RouteTable::register_def` or
/// `RouterBuilder::route_def`. Routes clear the stack by default.
#[proc_macro_attribute]
pub fn route(attr: TokenStream, item: TokenStream) -> TokenStream {
    let args = parse_macro_input!(attr as RouteArgs);
    let input = parse_macro_input!(item as ItemFn);

    if let Err(msg) = check_pattern(&args.pattern.value()) {
        return syn::Error::new(args.pattern.span(), msg)
            .to_compile_error()
            .into();
    }

    let fn_vis = &input.vis;
    let fn_name = &input.sig.ident;
    let def_name = format_ident!("{}_route", fn_name);
    let pattern = &args.pattern;
    let clear = args.clear;
    let doc = format!("Route definition for `{}` at `{}`.", fn_name, pattern.value());

    let expanded = quote! {
        #input

        #[doc = #doc]
        #fn_vis fn #def_name() -> ::viewrouter::RouteDef {
            ::viewrouter::RouteDef {
                pattern: #pattern,
                clear_on_match: #clear,
                handler: #fn_name,
            }
        }
    };
    TokenStream::from(expanded)
}
