#[macro_use]
extern crate quote;

use proc_macro::TokenStream;
use regex::Regex;
use syn::{parse_macro_input, Attribute, Data, DeriveInput, Ident, ItemEnum, Meta, NestedMeta};

fn snake_case(ident: &Ident) -> String {
	let re = Regex::new(r"[A-Z0-9]{1}[a-z0-9]*").unwrap();
	re.find_iter(&ident.to_string())
		.map(|m| m.as_str().to_ascii_lowercase())
		.collect::<Vec<String>>()
		.join("_")
}

fn has_option(attrs: &[Attribute], option: &str) -> bool {
	attrs.iter().any(|a| {
		if a.path.is_ident("enum_from_str") {
			if let Ok(Meta::List(list)) = a.parse_meta() {
				return list.nested.iter().any(|n| {
					if let NestedMeta::Meta(Meta::Path(path)) = n {
						path.is_ident(option)
					} else {
						false
					}
				});
			}
			panic!("No options found in attribute `enum_from_str`")
		}
		false
	})
}

/// Derives `FromStr` for fieldless enums.
///
/// Accepts variant names as written (`HarvestGather`) and in snake case (`harvest_gather`).
/// With `#[enum_from_str(use_primitives)]` numeric strings are also accepted
/// and resolved through `FromPrimitive::from_i64`.
#[proc_macro_derive(FromStr, attributes(enum_from_str))]
pub fn enum_from_str_derive(input: TokenStream) -> TokenStream {
	let item = parse_macro_input!(input as DeriveInput);
	if let Data::Enum(data) = item.data {
		let name = item.ident;
		let variants = data.variants.iter().map(|v| &v.ident).collect::<Vec<_>>();
		let snake_variants = variants.iter().map(|v| snake_case(v));
		let variants2 = variants.clone();

		let other_cases = if has_option(&item.attrs, "use_primitives") {
			quote! {
				n => {
					if let Ok(num) = n.parse() {
						if let Some(result) = Self::from_i64(num) {
							return Ok(result);
						}
					}
					return Err(speedmine_macro::ParseEnumError);
				}
			}
		} else {
			quote! {_ => return Err(speedmine_macro::ParseEnumError)}
		};
		TokenStream::from(quote! {
			impl std::str::FromStr for #name {
				type Err = speedmine_macro::ParseEnumError;

				fn from_str(s: &str) -> Result<Self, Self::Err> {
					Ok(match s {
						#(
							stringify!(#variants) => Self::#variants,
						)*
						#(
							#snake_variants => Self::#variants2,
						)*
						#other_cases,
					})
				}
			}
		})
	} else {
		panic!("Can only derive FromStr for enums")
	}
}

/// Generates `is_<variant>` checkers for every variant of a fieldless `Copy` enum.
#[proc_macro_attribute]
pub fn variant_checkers(_attr: TokenStream, item: TokenStream) -> TokenStream {
	let item = parse_macro_input!(item as ItemEnum);

	let name = &item.ident;
	let variants = item.variants.iter().map(|v| &v.ident);
	let checkers = variants
		.clone()
		.map(|v| format_ident!("is_{}", snake_case(v)));

	TokenStream::from(quote! {
		#item
		impl #name {
			#(
				#[inline]
				pub fn #checkers(self) -> bool {
					matches!(self, Self::#variants)
				}
			)*
		}
	})
}
