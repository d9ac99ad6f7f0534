use core::result::Result;

use proc_macro2::{Delimiter, Group, Ident, Literal, Span, TokenStream, TokenTree};
use quote::quote_spanned;
use unsynn::*;

keyword! {
    KEnum = "enum";
    KPub = "pub";
    KStruct = "struct";
    KTare = "tare";
    KUnion = "union";
    KWhere = "where";
}

operator! {
    Arrow = "->";
    Dash = "-";
    Equals = "=";
    LAngle = "<";
    RAngle = ">";
}

unsynn! {
    /// `pub`, `pub(crate)`, `pub(in path)`
    enum Vis {
        Restricted(Cons<KPub, ParenthesisGroup>),
        Public(KPub),
    }

    /// `#[...]`
    struct Attribute {
        _pound: Pound,
        body: BracketGroupContaining<AttributeBody>,
    }

    enum AttributeBody {
        Tare(TareAttr),
        /// `tare` followed by anything but a valid argument list.
        Malformed(Cons<KTare, Any<TokenTree>>),
        Other(Any<TokenTree>),
    }

    /// `tare(default = "1", skip)`
    struct TareAttr {
        _tare: KTare,
        args: ParenthesisGroupContaining<CommaDelimitedVec<TareArg>>,
    }

    struct TareArg {
        key: Ident,
        value: Option<Cons<Equals, ArgValue>>,
    }

    enum ArgValue {
        Str(LiteralString),
        Negative(Cons<Dash, Literal>),
        Literal(Literal),
        Ident(Ident),
    }

    /// One token tree, or a whole `<...>` run so that commas between generic
    /// arguments stay inside the type.
    struct AngleTokenTree(
        Either<Cons<LAngle, Vec<Cons<Except<RAngle>, Either<Arrow, AngleTokenTree>>>, RAngle>, TokenTree>,
    );

    /// Field type, up to the next top-level comma.
    struct FieldType(Many<Cons<Except<Comma>, AngleTokenTree>>);

    struct NamedField {
        attrs: Vec<Attribute>,
        _vis: Option<Vis>,
        name: Ident,
        _colon: Colon,
        _ty: FieldType,
    }

    struct TupleField {
        attrs: Vec<Attribute>,
        _vis: Option<Vis>,
        _ty: FieldType,
    }

    enum StructBody {
        Named(BraceGroupContaining<CommaDelimitedVec<NamedField>>),
        Tuple(Cons<ParenthesisGroupContaining<CommaDelimitedVec<TupleField>>, Semicolon>),
        Unit(Semicolon),
        Generic(Cons<Either<LAngle, KWhere>, Any<TokenTree>>),
    }

    struct StructDecl {
        attrs: Vec<Attribute>,
        _vis: Option<Vis>,
        _struct: KStruct,
        name: Ident,
        body: StructBody,
    }

    enum OtherKeyword {
        Enum(KEnum),
        Union(KUnion),
    }

    struct OtherDecl {
        _attrs: Vec<Attribute>,
        _vis: Option<Vis>,
        keyword: OtherKeyword,
        name: Ident,
        _rest: Any<TokenTree>,
    }

    enum AdtDecl {
        Struct(StructDecl),
        Other(OtherDecl),
    }
}

/// Errors that can occur while parsing derive input.
///
/// Some errors are caught by rustc itself, so we don't emit duplicate diagnostics.
#[derive(Debug)]
pub enum ParseError {
    /// Malformed Rust that rustc reports on its own.
    RustcWillCatch {
        /// What rustc will complain about.
        reason: &'static str,
    },

    /// A tare-specific error, reported with `compile_error!`.
    TareError {
        /// The error message to display
        message: String,
        /// The span to point the error at
        span: Span,
    },
}

impl ParseError {
    /// Create a "rustc will catch this" error.
    pub fn rustc_will_catch(reason: &'static str) -> Self {
        ParseError::RustcWillCatch { reason }
    }

    /// Create a tare-specific error with a span.
    pub fn tare_error(message: impl Into<String>, span: Span) -> Self {
        ParseError::TareError {
            message: message.into(),
            span,
        }
    }

    /// Convert to a `compile_error!` TokenStream, or None if rustc will catch it.
    pub fn to_compile_error(&self) -> Option<TokenStream> {
        match self {
            ParseError::RustcWillCatch { .. } => None,
            ParseError::TareError { message, span } => {
                Some(quote_spanned! { *span => compile_error!(#message); })
            }
        }
    }
}

/// How a field is accessed on `self`.
#[derive(Debug, Clone)]
pub enum Member {
    /// Named field.
    Ident(Ident),
    /// Tuple field index.
    Index(usize),
}

impl quote::ToTokens for Member {
    fn to_tokens(&self, tokens: &mut TokenStream) {
        match self {
            Member::Ident(ident) => tokens.extend([TokenTree::Ident(ident.clone())]),
            Member::Index(index) => {
                tokens.extend([TokenTree::Literal(Literal::usize_unsuffixed(*index))])
            }
        }
    }
}

/// The value of `default = ...`.
#[derive(Debug, Clone)]
pub enum DefaultLiteral {
    /// A string literal, passed through so rustc handles its escapes.
    Token(TokenStream),
    /// A number or bool, stringified.
    Text(String),
}

impl quote::ToTokens for DefaultLiteral {
    fn to_tokens(&self, tokens: &mut TokenStream) {
        match self {
            DefaultLiteral::Token(lit) => tokens.extend(lit.clone()),
            DefaultLiteral::Text(text) => tokens.extend([TokenTree::Literal(Literal::string(text))]),
        }
    }
}

/// The value of `unset = ...`. Absent means a wholesale reset.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnsetMode {
    /// `"-"`
    Skip,
    /// `"walk"`
    Walk,
}

/// Parsed `#[tare(...)]` field attributes.
#[derive(Debug, Clone, Default)]
pub struct PAttrs {
    /// `default = ...`
    pub default: Option<DefaultLiteral>,
    /// `unset = ...`
    pub unset: Option<UnsetMode>,
    /// `rename = "..."`
    pub rename: Option<String>,
    /// `skip`
    pub skip: bool,
}

/// A parsed struct field.
#[derive(Debug, Clone)]
pub struct PField {
    /// Access path on `self`.
    pub member: Member,
    /// Effective name.
    pub name: String,
    /// Field attributes.
    pub attrs: PAttrs,
}

/// Shape of the struct body.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PStructKind {
    /// `struct S { a: A }`
    Named,
    /// `struct S(A);`
    Tuple,
    /// `struct S;`
    Unit,
}

/// A parsed struct.
#[derive(Debug, Clone)]
pub struct PStruct {
    /// Type name.
    pub name: Ident,
    /// Body shape.
    pub kind: PStructKind,
    /// Fields in declaration order.
    pub fields: Vec<PField>,
}

/// Recursively flattens transparent groups (groups with `Delimiter::None`) in a token stream.
///
/// `macro_rules!` wraps captured fragments such as `$vis:vis` in invisible
/// groups; unwrapping them lets the inner tokens be parsed normally.
fn flatten_transparent_groups(input: TokenStream) -> TokenStream {
    input
        .into_iter()
        .flat_map(|tt| match tt {
            TokenTree::Group(group) if group.delimiter() == Delimiter::None => {
                flatten_transparent_groups(group.stream())
            }
            TokenTree::Group(group) => {
                let mut new_group =
                    Group::new(group.delimiter(), flatten_transparent_groups(group.stream()));
                new_group.set_span(group.span());
                core::iter::once(TokenTree::Group(new_group)).collect()
            }
            other => core::iter::once(other).collect(),
        })
        .collect()
}

/// Text of a plain string literal, for keys read at expansion time.
fn string_value(value: &ArgValue, key: &Ident) -> Result<String, ParseError> {
    let ArgValue::Str(lit) = value else {
        return Err(ParseError::tare_error(
            format!("expected a string literal for `{key}`"),
            key.span(),
        ));
    };
    let repr = lit.as_str();
    let text = repr
        .strip_prefix('"')
        .and_then(|inner| inner.strip_suffix('"'))
        .unwrap_or(repr);
    if text.contains('\\') {
        return Err(ParseError::tare_error(
            format!("escape sequences are not supported in `{key}`"),
            key.span(),
        ));
    }
    Ok(text.to_string())
}

fn default_value(value: &ArgValue, key: &Ident) -> Result<DefaultLiteral, ParseError> {
    let unsupported =
        |span| ParseError::tare_error("expected a string, number, or bool for `default`", span);
    match value {
        ArgValue::Str(lit) => Ok(DefaultLiteral::Token(lit.to_token_stream())),
        ArgValue::Literal(lit) => {
            let repr = lit.to_string();
            if repr.starts_with("r\"") || repr.starts_with("r#") {
                Ok(DefaultLiteral::Token(TokenTree::Literal(lit.clone()).into()))
            } else if repr.starts_with(|c: char| c.is_ascii_digit()) {
                Ok(DefaultLiteral::Text(repr))
            } else {
                Err(unsupported(lit.span()))
            }
        }
        ArgValue::Negative(negative) => {
            let repr = negative.second.to_string();
            if repr.starts_with(|c: char| c.is_ascii_digit()) {
                Ok(DefaultLiteral::Text(format!("-{repr}")))
            } else {
                Err(unsupported(negative.second.span()))
            }
        }
        ArgValue::Ident(ident) if ident == "true" || ident == "false" => {
            Ok(DefaultLiteral::Text(ident.to_string()))
        }
        ArgValue::Ident(ident) => Err(unsupported(ident.span())),
    }
}

fn apply_arg(arg: &TareArg, attrs: &mut PAttrs) -> Result<(), ParseError> {
    let key = &arg.key;
    let value = arg.value.as_ref().map(|assign| &assign.second);
    let duplicate = || ParseError::tare_error(format!("duplicate `{key}`"), key.span());

    match (key.to_string().as_str(), value) {
        ("skip", None) => {
            if attrs.skip {
                return Err(duplicate());
            }
            attrs.skip = true;
        }
        ("skip", Some(_)) => {
            return Err(ParseError::tare_error("`skip` takes no value", key.span()));
        }
        ("default", Some(value)) => {
            if attrs.default.is_some() {
                return Err(duplicate());
            }
            attrs.default = Some(default_value(value, key)?);
        }
        ("unset", Some(value)) => {
            if attrs.unset.is_some() {
                return Err(duplicate());
            }
            attrs.unset = match string_value(value, key)?.as_str() {
                "" => None,
                "-" => Some(UnsetMode::Skip),
                "walk" => Some(UnsetMode::Walk),
                other => {
                    return Err(ParseError::tare_error(
                        format!("unknown unset mode {other:?}; expected \"-\" or \"walk\""),
                        key.span(),
                    ));
                }
            };
        }
        ("rename", Some(value)) => {
            if attrs.rename.is_some() {
                return Err(duplicate());
            }
            attrs.rename = Some(string_value(value, key)?);
        }
        (name @ ("default" | "unset" | "rename"), None) => {
            return Err(ParseError::tare_error(
                format!("expected `{name} = \"...\"`"),
                key.span(),
            ));
        }
        (other, _) => {
            return Err(ParseError::tare_error(
                format!(
                    "unknown tare attribute `{other}`; expected one of `default`, `unset`, `rename`, `skip`"
                ),
                key.span(),
            ));
        }
    }
    Ok(())
}

/// Collects the `#[tare(...)]` attributes of one field. Others are ignored.
fn field_attrs(attrs: &[Attribute], span: Span) -> Result<PAttrs, ParseError> {
    let mut parsed = PAttrs::default();
    for attr in attrs {
        match &attr.body.content {
            AttributeBody::Tare(tare) => {
                for arg in tare.args.content.iter() {
                    apply_arg(&arg.value, &mut parsed)?;
                }
            }
            AttributeBody::Malformed(_) => {
                return Err(ParseError::tare_error(
                    "expected `#[tare(key = value, ...)]`",
                    span,
                ));
            }
            AttributeBody::Other(_) => {}
        }
    }
    Ok(parsed)
}

fn named_field(field: &NamedField) -> Result<PField, ParseError> {
    let attrs = field_attrs(&field.attrs, field.name.span())?;
    let raw = field.name.to_string();
    let name = match &attrs.rename {
        Some(rename) => rename.clone(),
        None => raw.strip_prefix("r#").unwrap_or(&raw).to_string(),
    };
    Ok(PField {
        member: Member::Ident(field.name.clone()),
        name,
        attrs,
    })
}

fn tuple_field(field: &TupleField, position: usize, span: Span) -> Result<PField, ParseError> {
    let attrs = field_attrs(&field.attrs, span)?;
    let name = attrs.rename.clone().unwrap_or_else(|| position.to_string());
    Ok(PField {
        member: Member::Index(position),
        name,
        attrs,
    })
}

fn struct_from_grammar(decl: &StructDecl) -> Result<PStruct, ParseError> {
    let span = decl.name.span();
    if decl
        .attrs
        .iter()
        .any(|attr| !matches!(attr.body.content, AttributeBody::Other(_)))
    {
        return Err(ParseError::tare_error(
            "`#[tare(...)]` is only supported on fields",
            span,
        ));
    }

    let (kind, fields) = match &decl.body {
        StructBody::Named(body) => (
            PStructKind::Named,
            body.content
                .iter()
                .map(|field| named_field(&field.value))
                .collect::<Result<Vec<_>, _>>()?,
        ),
        StructBody::Tuple(body) => (
            PStructKind::Tuple,
            body.first
                .content
                .iter()
                .enumerate()
                .map(|(position, field)| tuple_field(&field.value, position, span))
                .collect::<Result<Vec<_>, _>>()?,
        ),
        StructBody::Unit(_) => (PStructKind::Unit, Vec::new()),
        StructBody::Generic(_) => {
            return Err(ParseError::tare_error(
                "`#[derive(Tare)]` does not support generic structs; implement `Tare` by hand",
                span,
            ));
        }
    };

    Ok(PStruct {
        name: decl.name.clone(),
        kind,
        fields,
    })
}

/// Parses the input of `#[derive(Tare)]`.
pub fn parse_struct(input: TokenStream) -> Result<PStruct, ParseError> {
    let mut tokens = flatten_transparent_groups(input).to_token_iter();
    let decl = tokens
        .parse::<Cons<AdtDecl, EndOfStream>>()
        .map_err(|_| ParseError::rustc_will_catch("expected a struct"))?
        .first;

    match decl {
        AdtDecl::Struct(decl) => struct_from_grammar(&decl),
        AdtDecl::Other(other) => {
            let keyword = match other.keyword {
                OtherKeyword::Enum(_) => "enum",
                OtherKeyword::Union(_) => "union",
            };
            Err(ParseError::tare_error(
                format!(
                    "`#[derive(Tare)]` only supports structs, not {keyword}s; use `tare::text_scalar!` or implement `Tare` by hand"
                ),
                other.name.span(),
            ))
        }
    }
}
