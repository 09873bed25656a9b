// Copyright 2024-2025 Irreducible Inc.

extern crate proc_macro;

mod fnv_hashable;

use proc_macro::TokenStream;
use syn::{parse_macro_input, DeriveInput};

/// Derives `fnv_hash::FnvHashable`.
///
/// Struct fields contribute in declaration order. Enum values contribute the zero-based index of
/// their variant as a `u32`, followed by that variant's fields. A field marked
/// `#[fnv_hashable(skip)]` does not participate in the digest. The impl requires
/// `FnvHashable` of every hashed field type that mentions a type parameter, so a parameter used
/// only by skipped fields needs no bound.
///
/// ```ignore
/// #[derive(FnvHashable)]
/// struct Entry {
///     key: String,
///     value: Option<u64>,
///     #[fnv_hashable(skip)]
///     hits: usize,
/// }
/// ```
#[proc_macro_derive(FnvHashable, attributes(fnv_hashable))]
pub fn derive_fnv_hashable(input: TokenStream) -> TokenStream {
	let input = parse_macro_input!(input as DeriveInput);
	fnv_hashable::expand(&input)
		.unwrap_or_else(syn::Error::into_compile_error)
		.into()
}
