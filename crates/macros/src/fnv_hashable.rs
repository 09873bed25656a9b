// Copyright 2024-2025 Irreducible Inc.

mod parse;

use parse::{reject_attributes, FieldAttributes};
use proc_macro2::{Ident, Literal, TokenStream, TokenTree};
use quote::{format_ident, quote, ToTokens};
use syn::{
	parse_quote, Data, DataEnum, DataStruct, DeriveInput, Field, Fields, Generics, Index, Member,
	Type, Variant,
};

/// Expands `#[derive(FnvHashable)]` into an `impl ::fnv_hash::FnvHashable` block.
pub fn expand(input: &DeriveInput) -> syn::Result<TokenStream> {
	reject_attributes(&input.attrs)?;

	let name = &input.ident;
	let generics = add_trait_bounds(input.generics.clone(), &input.data)?;
	let (impl_generics, type_generics, where_clause) = generics.split_for_impl();
	let body = match &input.data {
		Data::Struct(data) => expand_struct(data)?,
		Data::Enum(data) => expand_enum(data)?,
		Data::Union(data) => {
			return Err(syn::Error::new_spanned(
				data.union_token,
				"FnvHashable cannot be derived for unions",
			));
		}
	};

	Ok(quote! {
		impl #impl_generics ::fnv_hash::FnvHashable for #name #type_generics #where_clause {
			#[allow(unused_variables)]
			fn hash_into<__H: ::fnv_hash::FnvHasher>(&self, __hasher: &mut __H) {
				#body
			}
		}
	})
}

/// Bounds the type of every hashed field that mentions a type parameter.
///
/// Parameters used only by skipped fields stay unbounded.
fn add_trait_bounds(mut generics: Generics, data: &Data) -> syn::Result<Generics> {
	let type_params = generics
		.type_params()
		.map(|param| param.ident.clone())
		.collect::<Vec<_>>();
	if type_params.is_empty() {
		return Ok(generics);
	}

	let mut bounded = Vec::<&Type>::new();
	for field in hashed_fields(data)? {
		let ty = &field.ty;
		let is_new = !bounded
			.iter()
			.any(|seen| seen.to_token_stream().to_string() == ty.to_token_stream().to_string());
		if is_new && mentions_any(ty.to_token_stream(), &type_params) {
			bounded.push(ty);
		}
	}
	if bounded.is_empty() {
		return Ok(generics);
	}

	let where_clause = generics.make_where_clause();
	for ty in bounded {
		where_clause
			.predicates
			.push(parse_quote!(#ty: ::fnv_hash::FnvHashable));
	}
	Ok(generics)
}

fn hashed_fields(data: &Data) -> syn::Result<Vec<&Field>> {
	let fields: Vec<&Field> = match data {
		Data::Struct(data) => data.fields.iter().collect(),
		Data::Enum(data) => data
			.variants
			.iter()
			.flat_map(|variant| variant.fields.iter())
			.collect(),
		Data::Union(_) => Vec::new(),
	};

	let mut hashed = Vec::with_capacity(fields.len());
	for field in fields {
		if !FieldAttributes::parse(&field.attrs)?.skip {
			hashed.push(field);
		}
	}
	Ok(hashed)
}

fn mentions_any(tokens: TokenStream, idents: &[Ident]) -> bool {
	tokens.into_iter().any(|token| match token {
		TokenTree::Ident(ident) => idents.contains(&ident),
		TokenTree::Group(group) => mentions_any(group.stream(), idents),
		_ => false,
	})
}

fn expand_struct(data: &DataStruct) -> syn::Result<TokenStream> {
	let mut statements = Vec::new();
	for (index, field) in data.fields.iter().enumerate() {
		if FieldAttributes::parse(&field.attrs)?.skip {
			continue;
		}
		let member = match &field.ident {
			Some(ident) => Member::Named(ident.clone()),
			None => Member::Unnamed(Index::from(index)),
		};
		statements.push(quote! {
			::fnv_hash::FnvHashable::hash_into(&self.#member, __hasher);
		});
	}
	Ok(quote!(#(#statements)*))
}

fn expand_enum(data: &DataEnum) -> syn::Result<TokenStream> {
	if data.variants.is_empty() {
		return Ok(quote!(match *self {}));
	}

	let arms = data
		.variants
		.iter()
		.enumerate()
		.map(|(index, variant)| expand_variant(index, variant))
		.collect::<syn::Result<Vec<_>>>()?;
	Ok(quote! {
		match self {
			#(#arms)*
		}
	})
}

fn expand_variant(index: usize, variant: &Variant) -> syn::Result<TokenStream> {
	reject_attributes(&variant.attrs)?;

	let ident = &variant.ident;
	let discriminant = Literal::u32_suffixed(index as u32);
	let mut statements = vec![quote! {
		::fnv_hash::FnvHashable::hash_into(&#discriminant, __hasher);
	}];

	let pattern = match &variant.fields {
		Fields::Named(fields) => {
			let mut bindings = Vec::new();
			for field in &fields.named {
				if FieldAttributes::parse(&field.attrs)?.skip {
					continue;
				}
				let binding = &field.ident;
				statements.push(quote! {
					::fnv_hash::FnvHashable::hash_into(#binding, __hasher);
				});
				bindings.push(binding);
			}
			quote!(Self::#ident { #(#bindings,)* .. })
		}
		Fields::Unnamed(fields) => {
			let mut elements = Vec::new();
			for (position, field) in fields.unnamed.iter().enumerate() {
				if FieldAttributes::parse(&field.attrs)?.skip {
					elements.push(quote!(_));
					continue;
				}
				let binding = format_ident!("__field{}", position);
				statements.push(quote! {
					::fnv_hash::FnvHashable::hash_into(#binding, __hasher);
				});
				elements.push(quote!(#binding));
			}
			quote!(Self::#ident(#(#elements),*))
		}
		Fields::Unit => quote!(Self::#ident),
	};

	Ok(quote! {
		#pattern => {
			#(#statements)*
		}
	})
}
