//! Derive macros for the composable TodoMVC architecture
//!
//! This crate provides procedural macros to reduce boilerplate when building
//! reducer-driven applications.
//!
//! # Available Macros
//!
//! - `#[derive(Action)]` - Classifies action variants and names them for logs
//!
//! # Example
//!
//! ```ignore
//! use todomvc_macros::Action;
//!
//! #[derive(Action, Clone, Debug)]
//! enum TodoAction {
//!     #[mutation]
//!     CreateTodo { title: String },
//!
//!     #[view]
//!     Navigate { fragment: String },
//! }
//!
//! // Generated methods:
//! assert!(TodoAction::CreateTodo { title: "test".into() }.is_mutation());
//! assert!(TodoAction::Navigate { fragment: "#/active".into() }.is_view());
//! assert_eq!(TodoAction::CreateTodo { title: "test".into() }.action_name(), "CreateTodo");
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

use proc_macro::TokenStream;
use proc_macro2::TokenStream as TokenStream2;
use quote::quote;
use syn::{parse_macro_input, Attribute, Data, DeriveInput, Fields, Ident};

/// Derive macro for Action enums
///
/// Generates helper methods for action enums:
/// - `is_mutation()` - Returns true if this variant changes persisted data
/// - `is_view()` - Returns true if this variant only changes transient view state
/// - `action_name()` - Returns the variant name, for logs and metrics
///
/// Variants with neither attribute (e.g. effect feedback) return false from both.
///
/// # Attributes
///
/// - `#[mutation]` - Mark a variant as changing persisted data
/// - `#[view]` - Mark a variant as view-only
///
/// # Panics
///
/// This macro will produce a compile error (not a runtime panic) if:
/// - Applied to a non-enum type
/// - A variant has both `#[mutation]` and `#[view]` attributes
///
/// # Example
///
/// ```ignore
/// #[derive(Action, Clone, Debug)]
/// enum TodoAction {
///     #[mutation]
///     ToggleTodo { id: TodoId },
///
///     #[view]
///     StartEditing { id: TodoId },
///
///     PersistFailed { error: String },
/// }
///
/// let action = TodoAction::ToggleTodo { id };
/// assert!(action.is_mutation());
/// assert!(!action.is_view());
/// ```
#[proc_macro_derive(Action, attributes(mutation, view))]
pub fn derive_action(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    let name = &input.ident;

    let Data::Enum(data_enum) = &input.data else {
        return syn::Error::new_spanned(
            input,
            "#[derive(Action)] can only be used on enums"
        )
        .to_compile_error()
        .into();
    };

    let mut mutation_arms = Vec::new();
    let mut view_arms = Vec::new();
    let mut name_arms = Vec::new();

    for variant in &data_enum.variants {
        let is_mutation = has_attribute(&variant.attrs, "mutation");
        let is_view = has_attribute(&variant.attrs, "view");

        if is_mutation && is_view {
            return syn::Error::new_spanned(
                variant,
                "Variant cannot be both #[mutation] and #[view]"
            )
            .to_compile_error()
            .into();
        }

        let pattern = variant_pattern(&variant.ident, &variant.fields);

        if is_mutation {
            mutation_arms.push(quote! { #pattern => true, });
        }

        if is_view {
            view_arms.push(quote! { #pattern => true, });
        }

        let variant_name = variant.ident.to_string();
        name_arms.push(quote! { #pattern => #variant_name, });
    }

    let expanded = quote! {
        impl #name {
            /// Returns true if this action changes persisted data
            #[must_use]
            #[allow(unreachable_patterns)]
            pub const fn is_mutation(&self) -> bool {
                match self {
                    #(#mutation_arms)*
                    _ => false,
                }
            }

            /// Returns true if this action only changes transient view state
            #[must_use]
            #[allow(unreachable_patterns)]
            pub const fn is_view(&self) -> bool {
                match self {
                    #(#view_arms)*
                    _ => false,
                }
            }

            /// Returns the variant name
            #[must_use]
            pub const fn action_name(&self) -> &'static str {
                match self {
                    #(#name_arms)*
                }
            }
        }
    };

    TokenStream::from(expanded)
}

/// Build a match pattern that ignores the variant's fields
fn variant_pattern(variant: &Ident, fields: &Fields) -> TokenStream2 {
    match fields {
        Fields::Named(_) => quote! { Self::#variant { .. } },
        Fields::Unnamed(_) => quote! { Self::#variant(..) },
        Fields::Unit => quote! { Self::#variant },
    }
}

/// Helper function to check if an attribute list contains a specific attribute
fn has_attribute(attrs: &[Attribute], name: &str) -> bool {
    attrs.iter().any(|attr| {
        attr.path().is_ident(name)
    })
}
