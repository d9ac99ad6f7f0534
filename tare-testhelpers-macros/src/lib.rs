use unsynn::*;

keyword! {
    KAsync = "async";
    KFn = "fn";
}

unsynn! {
    /// Attributes, qualifiers and visibility ahead of `fn`.
    struct Prefix {
        items: Any<Cons<Except<Either<KFn, KAsync>>, TokenTree>>,
    }

    /// Name, parameters and return type.
    struct Signature {
        items: Any<Cons<Except<BraceGroup>, TokenTree>>,
    }

    struct TestFn {
        prefix: Prefix,
        _fn: KFn,
        signature: Signature,
        body: BraceGroup,
        _end: EndOfStream,
    }

    struct AsyncFn {
        _prefix: Prefix,
        _async: KAsync,
        _rest: Any<TokenTree>,
    }
}

impl quote::ToTokens for Prefix {
    fn to_tokens(&self, tokens: &mut unsynn::TokenStream) {
        self.items.to_tokens(tokens)
    }
}

impl quote::ToTokens for Signature {
    fn to_tokens(&self, tokens: &mut unsynn::TokenStream) {
        self.items.to_tokens(tokens)
    }
}

fn compile_error(message: &str) -> proc_macro::TokenStream {
    quote::quote! { compile_error!(#message); }.into()
}

/// `#[test]` that installs the tracing subscriber before the body runs.
///
/// ```ignore
/// #[tare_testhelpers::test]
/// fn fills_port() {
///     // trace output of the engines is captured per test
/// }
/// ```
#[proc_macro_attribute]
pub fn test(
    attr: proc_macro::TokenStream,
    item: proc_macro::TokenStream,
) -> proc_macro::TokenStream {
    if !attr.is_empty() {
        return compile_error("#[tare_testhelpers::test] takes no arguments");
    }

    let item = TokenStream::from(item);
    if item.clone().to_token_iter().parse::<AsyncFn>().is_ok() {
        return compile_error("#[tare_testhelpers::test] does not support async tests");
    }
    let Ok(TestFn {
        prefix,
        signature,
        body,
        ..
    }) = item.to_token_iter().parse::<TestFn>()
    else {
        return compile_error("#[tare_testhelpers::test] must be placed on a function");
    };
    let body = body.0.stream();

    quote::quote! {
        #[::core::prelude::rust_2024::test]
        #prefix fn #signature {
            ::tare_testhelpers::setup();

            #body
        }
    }
    .into()
}
