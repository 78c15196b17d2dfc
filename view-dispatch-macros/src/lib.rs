//! Procedural macros for view-dispatch

use darling::{FromDeriveInput, FromMeta, FromVariant};
use proc_macro::TokenStream;
use quote::quote;
use syn::{parse_macro_input, DeriveInput};

/// How variant identifiers become action names
#[derive(Debug, Clone, Copy, Default)]
enum RenameRule {
    /// Keep the variant identifier as-is
    #[default]
    PascalCase,
    SnakeCase,
    ScreamingSnakeCase,
}

impl FromMeta for RenameRule {
    fn from_string(value: &str) -> darling::Result<Self> {
        match value {
            "PascalCase" => Ok(RenameRule::PascalCase),
            "snake_case" => Ok(RenameRule::SnakeCase),
            "SCREAMING_SNAKE_CASE" => Ok(RenameRule::ScreamingSnakeCase),
            other => Err(darling::Error::unknown_value(other)),
        }
    }
}

impl RenameRule {
    fn apply(self, ident: &str) -> String {
        match self {
            RenameRule::PascalCase => ident.to_string(),
            RenameRule::SnakeCase => to_snake_case(ident),
            RenameRule::ScreamingSnakeCase => to_snake_case(ident).to_uppercase(),
        }
    }
}

/// Container-level attributes for #[derive(Action)]
#[derive(Debug, FromDeriveInput)]
#[darling(attributes(action), supports(enum_any))]
struct ActionOpts {
    ident: syn::Ident,
    generics: syn::Generics,
    data: darling::ast::Data<ActionVariant, ()>,

    /// Naming rule for variants without an explicit name
    #[darling(default)]
    rename_all: RenameRule,

    /// Category shared by every variant
    #[darling(default)]
    category: Option<String>,
}

/// Variant-level attributes
#[derive(Debug, FromVariant)]
#[darling(attributes(action))]
struct ActionVariant {
    ident: syn::Ident,
    fields: darling::ast::Fields<()>,

    /// Explicit action name
    #[darling(default)]
    name: Option<String>,

    /// Explicit category override
    #[darling(default)]
    category: Option<String>,

    /// Leave this variant uncategorized
    #[darling(default)]
    skip_category: bool,
}

/// Convert PascalCase to snake_case
fn to_snake_case(s: &str) -> String {
    let mut result = String::new();
    for (i, ch) in s.chars().enumerate() {
        if ch.is_uppercase() {
            if i > 0 {
                result.push('_');
            }
            result.extend(ch.to_lowercase());
        } else {
            result.push(ch);
        }
    }
    result
}

/// Derive macro for the Action trait
///
/// Generates a `name()` method returning each variant's action name.
///
/// Container attributes:
/// - `rename_all = "PascalCase" | "snake_case" | "SCREAMING_SNAKE_CASE"`
/// - `category = "..."`: category for every variant
///
/// Variant attributes:
/// - `name = "..."`: explicit action name
/// - `category = "..."`: category override
/// - `skip_category`: no category for this variant
///
/// When any variant ends up with a category, `ActionCategory` is implemented too.
///
/// # Example
/// ```ignore
/// #[derive(Action, Clone, Debug)]
/// #[action(rename_all = "SCREAMING_SNAKE_CASE", category = "github_repos")]
/// enum RepoAction {
///     FetchNextPage { store_id: String },
///     #[action(name = "UNLOAD_PAGE_ID")]
///     Unload { store_id: String, page_id: u64 },
/// }
///
/// let action = RepoAction::FetchNextPage { store_id: "repoListA".into() };
/// assert_eq!(action.name(), "FETCH_NEXT_PAGE");
/// assert_eq!(action.category(), Some("github_repos"));
/// ```
#[proc_macro_derive(Action, attributes(action))]
pub fn derive_action(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);

    let opts = match ActionOpts::from_derive_input(&input) {
        Ok(opts) => opts,
        Err(e) => return e.write_errors().into(),
    };

    let name = &opts.ident;
    let (impl_generics, ty_generics, where_clause) = opts.generics.split_for_impl();

    let variants = match &opts.data {
        darling::ast::Data::Enum(variants) => variants,
        _ => {
            return syn::Error::new_spanned(&input, "Action can only be derived for enums")
                .to_compile_error()
                .into();
        }
    };

    let patterns: Vec<_> = variants
        .iter()
        .map(|v| {
            let variant_name = &v.ident;
            match &v.fields.style {
                darling::ast::Style::Unit => quote! { #name::#variant_name },
                darling::ast::Style::Tuple => quote! { #name::#variant_name(..) },
                darling::ast::Style::Struct => quote! { #name::#variant_name { .. } },
            }
        })
        .collect();

    let name_arms = variants.iter().zip(&patterns).map(|(v, pattern)| {
        let action_name = v
            .name
            .clone()
            .unwrap_or_else(|| opts.rename_all.apply(&v.ident.to_string()));
        quote! { #pattern => #action_name }
    });

    let mut expanded = quote! {
        impl #impl_generics ::view_dispatch::Action for #name #ty_generics #where_clause {
            fn name(&self) -> &'static str {
                match self {
                    #(#name_arms),*
                }
            }
        }
    };

    let categories: Vec<Option<String>> = variants
        .iter()
        .map(|v| {
            if v.skip_category {
                None
            } else {
                v.category.clone().or_else(|| opts.category.clone())
            }
        })
        .collect();

    if categories.iter().any(Option::is_some) {
        let category_arms = categories.iter().zip(&patterns).map(|(cat, pattern)| {
            let cat_expr = match cat {
                Some(c) => quote! { ::core::option::Option::Some(#c) },
                None => quote! { ::core::option::Option::None },
            };
            quote! { #pattern => #cat_expr }
        });

        expanded = quote! {
            #expanded

            impl #impl_generics ::view_dispatch::ActionCategory for #name #ty_generics #where_clause {
                fn category(&self) -> ::core::option::Option<&'static str> {
                    match self {
                        #(#category_arms),*
                    }
                }
            }
        };
    }

    TokenStream::from(expanded)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rename_rule_known_values() {
        assert!(matches!(
            RenameRule::from_string("PascalCase"),
            Ok(RenameRule::PascalCase)
        ));
        assert!(matches!(
            RenameRule::from_string("snake_case"),
            Ok(RenameRule::SnakeCase)
        ));
        assert!(matches!(
            RenameRule::from_string("SCREAMING_SNAKE_CASE"),
            Ok(RenameRule::ScreamingSnakeCase)
        ));
    }

    #[test]
    fn test_rename_rule_unknown_value_is_error() {
        assert!(RenameRule::from_string("kebab-case").is_err());
        assert!(RenameRule::from_string("screaming_snake_case").is_err());
        assert!(RenameRule::from_string("").is_err());
    }

    #[test]
    fn test_rename_rule_apply() {
        assert_eq!(RenameRule::PascalCase.apply("FetchNextPage"), "FetchNextPage");
        assert_eq!(RenameRule::SnakeCase.apply("FetchNextPage"), "fetch_next_page");
        assert_eq!(
            RenameRule::ScreamingSnakeCase.apply("UnloadPageId"),
            "UNLOAD_PAGE_ID"
        );
    }

    #[test]
    fn test_unknown_rename_all_rejects_derive_input() {
        let input: DeriveInput = syn::parse_quote! {
            #[action(rename_all = "kebab-case")]
            enum Paging {
                FetchNextPage,
            }
        };
        assert!(ActionOpts::from_derive_input(&input).is_err());

        let input: DeriveInput = syn::parse_quote! {
            #[action(rename_all = "SCREAMING_SNAKE_CASE")]
            enum Paging {
                FetchNextPage,
            }
        };
        assert!(matches!(
            ActionOpts::from_derive_input(&input).map(|opts| opts.rename_all),
            Ok(RenameRule::ScreamingSnakeCase)
        ));
    }
}
