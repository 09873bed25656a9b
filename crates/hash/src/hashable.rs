// Copyright 2024-2025 Irreducible Inc.

use std::{borrow::Cow, collections::VecDeque, rc::Rc, sync::Arc};

use crate::FnvHasher;

/// A value that can feed a Fowler–Noll–Vo hasher.
///
/// An implementation decides which bytes the value contributes and in what order, either by
/// passing raw chunks to [`FnvHasher::combine_bytes`] or by delegating to nested values through
/// [`FnvHasher::combine`]. Only what is explicitly fed participates in the digest.
///
/// ```
/// use fnv_hash::{Fnv64a, FnvHashable, FnvHasher};
///
/// struct Record {
///     id: u64,
///     name: String,
///     cached_len: usize,
/// }
///
/// impl FnvHashable for Record {
///     fn hash_into<H: FnvHasher>(&self, hasher: &mut H) {
///         hasher.combine(&self.id);
///         hasher.combine(&self.name);
///     }
/// }
///
/// let a = Record { id: 7, name: "seven".into(), cached_len: 5 };
/// let b = Record { id: 7, name: "seven".into(), cached_len: 0 };
/// assert_eq!(fnv_hash::hash::<Fnv64a, _>(&a), fnv_hash::hash::<Fnv64a, _>(&b));
/// ```
///
/// Built-in contributions:
/// - fixed-width numbers: their little-endian bytes as one chunk (`usize` and `isize` are widened
///   to 64 bits first);
/// - `bool`: a single `0` or `1` byte;
/// - text: its UTF-8 bytes as one chunk, without length prefix or terminator;
/// - `Option`: the wrapped value, or one empty chunk when absent;
/// - sequences and tuples: every element in order, nothing at all when empty.
pub trait FnvHashable {
	fn hash_into<H: FnvHasher>(&self, hasher: &mut H);
}

macro_rules! impl_hashable_le_bytes {
	($($ty:ty),* $(,)?) => {
		$(
			impl FnvHashable for $ty {
				#[inline]
				fn hash_into<H: FnvHasher>(&self, hasher: &mut H) {
					hasher.combine_bytes(&self.to_le_bytes())
				}
			}
		)*
	};
}

impl_hashable_le_bytes!(u8, u16, u32, u64, u128, i8, i16, i32, i64, i128, f32, f64);

impl FnvHashable for usize {
	#[inline]
	fn hash_into<H: FnvHasher>(&self, hasher: &mut H) {
		(*self as u64).hash_into(hasher)
	}
}

impl FnvHashable for isize {
	#[inline]
	fn hash_into<H: FnvHasher>(&self, hasher: &mut H) {
		(*self as i64).hash_into(hasher)
	}
}

impl FnvHashable for bool {
	#[inline]
	fn hash_into<H: FnvHasher>(&self, hasher: &mut H) {
		hasher.combine_bytes(&[u8::from(*self)])
	}
}

impl FnvHashable for str {
	#[inline]
	fn hash_into<H: FnvHasher>(&self, hasher: &mut H) {
		hasher.combine_bytes(self.as_bytes())
	}
}

impl FnvHashable for String {
	#[inline]
	fn hash_into<H: FnvHasher>(&self, hasher: &mut H) {
		self.as_str().hash_into(hasher)
	}
}

impl<T: FnvHashable> FnvHashable for Option<T> {
	fn hash_into<H: FnvHasher>(&self, hasher: &mut H) {
		match self {
			Some(value) => value.hash_into(hasher),
			None => hasher.combine_bytes(&[]),
		}
	}
}

impl<T: FnvHashable> FnvHashable for [T] {
	fn hash_into<H: FnvHasher>(&self, hasher: &mut H) {
		for element in self {
			element.hash_into(hasher);
		}
	}
}

impl<T: FnvHashable, const N: usize> FnvHashable for [T; N] {
	fn hash_into<H: FnvHasher>(&self, hasher: &mut H) {
		self.as_slice().hash_into(hasher)
	}
}

impl<T: FnvHashable> FnvHashable for Vec<T> {
	fn hash_into<H: FnvHasher>(&self, hasher: &mut H) {
		self.as_slice().hash_into(hasher)
	}
}

impl<T: FnvHashable> FnvHashable for VecDeque<T> {
	fn hash_into<H: FnvHasher>(&self, hasher: &mut H) {
		for element in self {
			element.hash_into(hasher);
		}
	}
}

macro_rules! impl_hashable_delegate {
	($($wrapper:ident),*) => {
		$(
			impl<T: FnvHashable + ?Sized> FnvHashable for $wrapper<T> {
				#[inline]
				fn hash_into<H: FnvHasher>(&self, hasher: &mut H) {
					(**self).hash_into(hasher)
				}
			}
		)*
	};
}

impl_hashable_delegate!(Box, Rc, Arc);

impl<T: FnvHashable + ?Sized> FnvHashable for &T {
	#[inline]
	fn hash_into<H: FnvHasher>(&self, hasher: &mut H) {
		(**self).hash_into(hasher)
	}
}

impl<T: FnvHashable + ?Sized> FnvHashable for &mut T {
	#[inline]
	fn hash_into<H: FnvHasher>(&self, hasher: &mut H) {
		(**self).hash_into(hasher)
	}
}

impl<B> FnvHashable for Cow<'_, B>
where
	B: FnvHashable + ToOwned + ?Sized,
{
	#[inline]
	fn hash_into<H: FnvHasher>(&self, hasher: &mut H) {
		(**self).hash_into(hasher)
	}
}

macro_rules! impl_hashable_tuple {
	($($name:ident)*) => {
		impl<$($name: FnvHashable),*> FnvHashable for ($($name,)*) {
			#[allow(non_snake_case, unused_variables)]
			fn hash_into<H: FnvHasher>(&self, hasher: &mut H) {
				let ($($name,)*) = self;
				$($name.hash_into(hasher);)*
			}
		}
	};
}

impl_hashable_tuple!();
impl_hashable_tuple!(A);
impl_hashable_tuple!(A B);
impl_hashable_tuple!(A B C);
impl_hashable_tuple!(A B C D);
impl_hashable_tuple!(A B C D E);
impl_hashable_tuple!(A B C D E F);
impl_hashable_tuple!(A B C D E F G);
impl_hashable_tuple!(A B C D E F G I);

/// Wrapper that contributes a byte container as a single raw chunk.
///
/// A `Vec<u8>` or `[u8]` is a sequence of `u8` values and contributes one chunk per byte, with
/// nothing at all when empty. `RawBytes` contributes the whole buffer at once, so an empty buffer
/// becomes an empty chunk.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct RawBytes<B>(pub B);

impl<B: AsRef<[u8]>> FnvHashable for RawBytes<B> {
	#[inline]
	fn hash_into<H: FnvHasher>(&self, hasher: &mut H) {
		hasher.combine_bytes(self.0.as_ref())
	}
}
