//! Procedural macros for the `hct` crate.

use proc_macro::TokenStream;
use quote::quote;

/// Turn a struct with exactly three component fields into a color model.
///
/// The fields are made public, the usual derives are added and a `new`
/// constructor, `to_components` and a `From<Components>` conversion are
/// generated.
#[proc_macro]
pub fn gen_model(input: TokenStream) -> TokenStream {
    let mut input = syn::parse_macro_input!(input as syn::ItemStruct);

    if input.fields.len() != 3 {
        return quote! {
            compile_error!("Models must have exactly 3 fields, one for each component of the color.");
        }
        .into();
    }

    if !input.generics.params.is_empty() {
        return quote! {
            compile_error!("Models can not be generic.");
        }
        .into();
    }

    let (names, types): (Vec<_>, Vec<_>) = input
        .fields
        .iter()
        .map(|f| (f.ident.clone(), f.ty.clone()))
        .unzip();

    let [Some(field1), Some(field2), Some(field3)] = [&names[0], &names[1], &names[2]] else {
        return quote! {
            compile_error!("Model fields must be named.");
        }
        .into();
    };
    let [ty1, ty2, ty3] = [&types[0], &types[1], &types[2]];

    // Components are always read from outside the model.
    input.fields.iter_mut().for_each(|f| {
        f.vis = syn::Visibility::Public(Default::default());
    });

    input
        .attrs
        .push(syn::parse_quote!(#[derive(Clone, Copy, Debug, PartialEq)]));

    let struct_name = &input.ident;

    let model_impl = quote! {
        impl #struct_name {
            /// Create a new model from its three components.
            pub const fn new(#field1: #ty1, #field2: #ty2, #field3: #ty3) -> Self {
                Self {
                    #field1,
                    #field2,
                    #field3,
                }
            }

            /// Convert this model into generic components.
            pub fn to_components(&self) -> crate::color::Components {
                crate::color::Components(self.#field1, self.#field2, self.#field3)
            }
        }

        impl From<crate::color::Components> for #struct_name {
            fn from(value: crate::color::Components) -> Self {
                Self::new(value.0, value.1, value.2)
            }
        }
    };

    quote! {
        #input
        #model_impl
    }
    .into()
}
