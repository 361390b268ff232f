use proc_macro::TokenStream;
use quote::quote;

extern crate proc_macro;

/// Implements `crate::Packet` for a packet struct.
///
/// ```ignore
/// #[packet(0x10)]
/// pub struct SClickContainer { .. }
/// ```
#[proc_macro_attribute]
pub fn packet(input: TokenStream, item: TokenStream) -> TokenStream {
    let ast = syn::parse_macro_input!(item as syn::DeriveInput);
    let id = syn::parse_macro_input!(input as syn::Expr);

    let name = &ast.ident;
    let (impl_generics, ty_generics, where_clause) = ast.generics.split_for_impl();

    let gen = quote! {
        #ast
        impl #impl_generics crate::Packet for #name #ty_generics #where_clause {
            const PACKET_ID: i32 = #id;
        }
    };

    gen.into()
}
