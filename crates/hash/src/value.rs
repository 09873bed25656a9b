// Copyright 2024-2025 Irreducible Inc.

use std::borrow::Cow;

use crate::{FnvHashable, FnvHasher};

/// A dynamically shaped hashable value.
///
/// Statically typed data should implement [`FnvHashable`] directly. `Value` covers data whose
/// shape is only known at runtime, e.g. rows decoded from an external source. Every `From`
/// conversion contributes exactly what the source value would, and [`Value::Composite`] is
/// visited depth-first, left to right. A byte slice converts to a composite of `u8` leaves like
/// any other sequence; use [`Value::raw_bytes`] for the single-chunk form of [`RawBytes`].
///
/// [`RawBytes`]: crate::RawBytes
#[derive(Debug, Clone, PartialEq)]
pub enum Value<'a> {
	Bool(bool),
	U8(u8),
	U16(u16),
	U32(u32),
	U64(u64),
	U128(u128),
	I8(i8),
	I16(i16),
	I32(i32),
	I64(i64),
	I128(i128),
	F32(f32),
	F64(f64),
	Text(Cow<'a, str>),
	/// Raw bytes contributed as one chunk, even when empty.
	Bytes(Cow<'a, [u8]>),
	/// An absent optional: one empty chunk.
	Absent,
	/// An ordered list of nested contributions. Contributes nothing when empty.
	Composite(Vec<Value<'a>>),
}

impl<'a> Value<'a> {
	pub fn composite(items: impl IntoIterator<Item = impl Into<Value<'a>>>) -> Self {
		Self::Composite(items.into_iter().map(Into::into).collect())
	}

	/// Bytes contributed as a single chunk, the dynamic counterpart of [`crate::RawBytes`].
	pub fn raw_bytes(bytes: impl Into<Cow<'a, [u8]>>) -> Self {
		Self::Bytes(bytes.into())
	}

	/// Converts borrowed text and bytes into owned data.
	pub fn into_owned(self) -> Value<'static> {
		match self {
			Self::Bool(v) => Value::Bool(v),
			Self::U8(v) => Value::U8(v),
			Self::U16(v) => Value::U16(v),
			Self::U32(v) => Value::U32(v),
			Self::U64(v) => Value::U64(v),
			Self::U128(v) => Value::U128(v),
			Self::I8(v) => Value::I8(v),
			Self::I16(v) => Value::I16(v),
			Self::I32(v) => Value::I32(v),
			Self::I64(v) => Value::I64(v),
			Self::I128(v) => Value::I128(v),
			Self::F32(v) => Value::F32(v),
			Self::F64(v) => Value::F64(v),
			Self::Text(text) => Value::Text(Cow::Owned(text.into_owned())),
			Self::Bytes(bytes) => Value::Bytes(Cow::Owned(bytes.into_owned())),
			Self::Absent => Value::Absent,
			Self::Composite(items) => {
				Value::Composite(items.into_iter().map(Value::into_owned).collect())
			}
		}
	}
}

impl FnvHashable for Value<'_> {
	fn hash_into<H: FnvHasher>(&self, hasher: &mut H) {
		match self {
			Self::Bool(v) => v.hash_into(hasher),
			Self::U8(v) => v.hash_into(hasher),
			Self::U16(v) => v.hash_into(hasher),
			Self::U32(v) => v.hash_into(hasher),
			Self::U64(v) => v.hash_into(hasher),
			Self::U128(v) => v.hash_into(hasher),
			Self::I8(v) => v.hash_into(hasher),
			Self::I16(v) => v.hash_into(hasher),
			Self::I32(v) => v.hash_into(hasher),
			Self::I64(v) => v.hash_into(hasher),
			Self::I128(v) => v.hash_into(hasher),
			Self::F32(v) => v.hash_into(hasher),
			Self::F64(v) => v.hash_into(hasher),
			Self::Text(text) => hasher.combine_bytes(text.as_bytes()),
			Self::Bytes(bytes) => hasher.combine_bytes(bytes),
			Self::Absent => hasher.combine_bytes(&[]),
			Self::Composite(items) => {
				for item in items {
					item.hash_into(hasher);
				}
			}
		}
	}
}

macro_rules! impl_value_from {
	($($ty:ty => $variant:ident),* $(,)?) => {
		$(
			impl From<$ty> for Value<'_> {
				fn from(value: $ty) -> Self {
					Self::$variant(value)
				}
			}
		)*
	};
}

impl_value_from!(
	bool => Bool,
	u8 => U8,
	u16 => U16,
	u32 => U32,
	u64 => U64,
	u128 => U128,
	i8 => I8,
	i16 => I16,
	i32 => I32,
	i64 => I64,
	i128 => I128,
	f32 => F32,
	f64 => F64,
);

impl From<usize> for Value<'_> {
	fn from(value: usize) -> Self {
		Self::U64(value as u64)
	}
}

impl From<isize> for Value<'_> {
	fn from(value: isize) -> Self {
		Self::I64(value as i64)
	}
}

impl<'a> From<&'a str> for Value<'a> {
	fn from(value: &'a str) -> Self {
		Self::Text(Cow::Borrowed(value))
	}
}

impl From<String> for Value<'_> {
	fn from(value: String) -> Self {
		Self::Text(Cow::Owned(value))
	}
}

impl<'a> From<&'a [u8]> for Value<'a> {
	fn from(value: &'a [u8]) -> Self {
		Self::composite(value.iter().copied())
	}
}

impl<'a, T: Into<Value<'a>>> From<Option<T>> for Value<'a> {
	fn from(value: Option<T>) -> Self {
		value.map_or(Self::Absent, Into::into)
	}
}

impl<'a, T: Into<Value<'a>>> From<Vec<T>> for Value<'a> {
	fn from(value: Vec<T>) -> Self {
		Self::composite(value)
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::{contributions, hash, Fnv1024a, Fnv32, Fnv64a, RawBytes};

	#[test]
	fn test_leaves_match_typed_values() {
		assert_eq!(contributions(&Value::from(-5i32)), contributions(&-5i32));
		assert_eq!(contributions(&Value::from(2.5f64)), contributions(&2.5f64));
		assert_eq!(contributions(&Value::from(true)), contributions(&true));
		assert_eq!(contributions(&Value::from(9usize)), contributions(&9usize));
		assert_eq!(contributions(&Value::from("abc")), contributions("abc"));
	}

	#[test]
	fn test_byte_slices_follow_sequence_rule() {
		for bytes in [&b""[..], &b"ab"[..]] {
			assert_eq!(contributions(&Value::from(bytes)), contributions(bytes));
			assert_eq!(
				contributions(&Value::from(bytes)),
				contributions(&Value::from(bytes.to_vec()))
			);
			assert_eq!(hash::<Fnv32, _>(&Value::from(bytes)), hash::<Fnv32, _>(bytes));
		}
		assert!(contributions(&Value::from(&b""[..])).is_empty());
		assert_eq!(contributions(&Value::from(&b"ab"[..])), vec![vec![b'a'], vec![b'b']]);
	}

	#[test]
	fn test_raw_bytes_is_one_chunk() {
		assert_eq!(
			contributions(&Value::raw_bytes(&b"\x00\x01"[..])),
			contributions(&RawBytes(&b"\x00\x01"[..]))
		);
		assert_eq!(contributions(&Value::raw_bytes(Vec::<u8>::new())), vec![Vec::<u8>::new()]);
	}

	#[test]
	fn test_optional_and_sequence_match_typed_values() {
		let typed = vec![None, Some(1u16), Some(2)];
		let dynamic = Value::from(typed.clone());
		assert_eq!(contributions(&dynamic), contributions(&typed));
		assert_eq!(hash::<Fnv64a, _>(&dynamic), hash::<Fnv64a, _>(&typed));
		assert_eq!(hash::<Fnv1024a, _>(&dynamic), hash::<Fnv1024a, _>(&typed));
	}

	#[test]
	fn test_composite_is_depth_first() {
		let nested = Value::Composite(vec![
			Value::from(1u8),
			Value::Composite(vec![Value::from(2u8), Value::Absent]),
			Value::from(3u8),
		]);
		assert_eq!(contributions(&nested), vec![vec![1], vec![2], vec![], vec![3]]);
		assert_eq!(hash::<Fnv32, _>(&nested), hash::<Fnv32, _>(&(1u8, (2u8, None::<u8>), 3u8)));
	}

	#[test]
	fn test_empty_composite_contributes_nothing() {
		assert!(contributions(&Value::Composite(Vec::new())).is_empty());
		assert_eq!(contributions(&Value::Absent), vec![Vec::<u8>::new()]);
	}

	#[test]
	fn test_into_owned_preserves_contribution() {
		let text = String::from("borrowed");
		let value = Value::composite([Value::from(text.as_str()), Value::Absent]);
		let expected = contributions(&value);
		let owned: Value<'static> = value.into_owned();
		drop(text);
		assert_eq!(contributions(&owned), expected);
	}
}
