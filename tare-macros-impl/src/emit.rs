use proc_macro2::TokenStream;
use quote::quote;

use crate::{PStruct, PStructKind, UnsetMode, parse_struct};

/// Expands `#[derive(Tare)]`.
///
/// Parse errors become a `compile_error!`; malformed Rust that rustc reports
/// on its own expands to nothing.
pub fn derive_tare(input: TokenStream) -> TokenStream {
    match parse_struct(input) {
        Ok(parsed) => emit_struct(&parsed),
        Err(err) => err.to_compile_error().unwrap_or_default(),
    }
}

fn emit_struct(parsed: &PStruct) -> TokenStream {
    let tare = quote! { ::tare };
    let name = &parsed.name;

    let accessible = parsed
        .fields
        .iter()
        .filter(|f| !f.attrs.skip)
        .map(|f| &f.member);
    let is_zero_body = quote! { true #( && #tare::Tare::is_zero(&self.#accessible) )* };

    let inits = parsed.fields.iter().map(|f| {
        if f.attrs.skip {
            quote! { ::core::default::Default::default() }
        } else {
            quote! { #tare::Tare::zero() }
        }
    });
    let zero_body = match parsed.kind {
        PStructKind::Named => {
            let members = parsed.fields.iter().map(|f| &f.member);
            quote! { Self { #( #members: #inits ),* } }
        }
        PStructKind::Tuple => quote! { Self( #( #inits ),* ) },
        PStructKind::Unit => quote! { Self },
    };

    let entries = parsed.fields.iter().map(|f| {
        let field_name = &f.name;
        let mut entry = quote! { #tare::Field::new(#field_name) };
        if let Some(default) = &f.attrs.default {
            entry = quote! { #entry.with_default(#tare::DefaultSpec::parse(#default)) };
        }
        match f.attrs.unset {
            Some(UnsetMode::Skip) => {
                entry = quote! { #entry.with_unset(#tare::UnsetSpec::Skip) };
            }
            Some(UnsetMode::Walk) => {
                entry = quote! { #entry.with_unset(#tare::UnsetSpec::Walk) };
            }
            None => {}
        }
        if f.attrs.skip {
            entry = quote! { #entry.skipped() };
        }
        entry
    });

    let moved = parsed
        .fields
        .iter()
        .filter(|f| !f.attrs.skip)
        .map(|f| &f.member);

    let arms = parsed
        .fields
        .iter()
        .enumerate()
        .filter(|(_, f)| !f.attrs.skip)
        .map(|(index, f)| {
            let member = &f.member;
            quote! {
                #index => ::core::option::Option::Some(&mut self.#member as &mut dyn #tare::Tare),
            }
        });

    quote! {
        #[automatically_derived]
        impl #tare::Tare for #name {
            fn is_zero(&self) -> bool {
                #is_zero_body
            }

            fn set_zero(&mut self) {
                *self = <Self as #tare::Tare>::zero();
            }

            fn zero() -> Self {
                #zero_body
            }

            fn poke(&mut self) -> #tare::Poke<'_> {
                #tare::Poke::Struct(self)
            }

            fn as_set_defaults(
                &mut self,
            ) -> ::core::option::Option<&mut dyn #tare::SetDefaults> {
                use #tare::spez::*;
                match (&&SpezEmpty::<Self>::SPEZ).spez_set_defaults() {
                    ::core::option::Option::Some(cast) => ::core::option::Option::Some(cast(self)),
                    ::core::option::Option::None => ::core::option::Option::None,
                }
            }

            fn as_set_tagged_defaults(
                &mut self,
            ) -> ::core::option::Option<&mut dyn #tare::SetTaggedDefaults> {
                use #tare::spez::*;
                match (&&SpezEmpty::<Self>::SPEZ).spez_set_tagged_defaults() {
                    ::core::option::Option::Some(cast) => ::core::option::Option::Some(cast(self)),
                    ::core::option::Option::None => ::core::option::Option::None,
                }
            }
        }

        #[automatically_derived]
        impl #tare::PokeStruct for #name {
            fn fields(&self) -> &'static [#tare::Field] {
                const FIELDS: &[#tare::Field] = &[ #( #entries ),* ];
                FIELDS
            }

            fn field_mut(
                &mut self,
                index: usize,
            ) -> ::core::option::Option<&mut dyn #tare::Tare> {
                match index {
                    #( #arms )*
                    _ => ::core::option::Option::None,
                }
            }

            fn fill_staged(
                &mut self,
                fill: &mut dyn ::core::ops::FnMut(
                    &mut dyn #tare::Tare,
                ) -> ::core::result::Result<(), #tare::DecodeError>,
            ) -> ::core::result::Result<(), #tare::DecodeError> {
                let mut staged = <Self as #tare::Tare>::zero();
                fill(&mut staged)?;
                #( self.#moved = staged.#moved; )*
                ::core::result::Result::Ok(())
            }
        }
    }
}
