// Copyright 2024-2025 Irreducible Inc.

use syn::Attribute;

pub const ATTRIBUTE_NAME: &str = "fnv_hashable";

/// Options accepted in `#[fnv_hashable(...)]` on a field.
#[derive(Debug, Clone, Copy, Default)]
pub struct FieldAttributes {
	pub skip: bool,
}

impl FieldAttributes {
	pub fn parse(attrs: &[Attribute]) -> syn::Result<Self> {
		let mut field_attributes = Self::default();
		for attr in attrs
			.iter()
			.filter(|attr| attr.path().is_ident(ATTRIBUTE_NAME))
		{
			attr.parse_nested_meta(|meta| {
				if meta.path.is_ident("skip") {
					field_attributes.skip = true;
					Ok(())
				} else {
					Err(meta.error("expected `fnv_hashable(skip)`"))
				}
			})?;
		}
		Ok(field_attributes)
	}
}

/// Fails on `#[fnv_hashable(...)]` placed anywhere but on a field.
pub fn reject_attributes(attrs: &[Attribute]) -> syn::Result<()> {
	match attrs
		.iter()
		.find(|attr| attr.path().is_ident(ATTRIBUTE_NAME))
	{
		Some(attr) => Err(syn::Error::new_spanned(
			attr,
			"`fnv_hashable` attributes are only supported on fields",
		)),
		None => Ok(()),
	}
}
