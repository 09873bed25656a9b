// Copyright 2024-2025 Irreducible Inc.

use std::marker::PhantomData;

use fnv_algebra::{FnvDigest, U1024, U256, U512};

use crate::{Fnv1, Fnv1a, FnvHasher, Variant};

/// Stateful FNV accumulator of a fixed digest width and variant.
///
/// A freshly constructed engine holds the offset basis. Every non-empty chunk is absorbed byte by
/// byte with the variant's rule. An empty chunk passed to [`FnvHasher::combine_bytes`] still
/// multiplies the digest by the prime once, which is what makes an absent optional distinguishable
/// from nothing at all.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FnvEngine<D: FnvDigest, V: Variant> {
	state: D,
	_variant: PhantomData<V>,
}

impl<D: FnvDigest, V: Variant> FnvEngine<D, V> {
	pub const fn new() -> Self {
		Self {
			state: D::OFFSET_BASIS,
			_variant: PhantomData,
		}
	}

	#[inline]
	pub fn digest(&self) -> D {
		self.state
	}

	pub fn reset(&mut self) {
		self.state = D::OFFSET_BASIS;
	}

	/// Variant and width, e.g. `FNV-1a/64`.
	pub fn name() -> String {
		format!("{}/{}", V::NAME, D::BITS)
	}

	/// Absorbs `bytes` as part of a continuous stream, without the empty-chunk rule.
	///
	/// Splitting a stream into pieces and absorbing them one after another gives the same digest
	/// as absorbing it in one go.
	#[inline]
	pub fn absorb_stream(&mut self, bytes: &[u8]) {
		self.state = bytes
			.iter()
			.fold(self.state, |digest, &byte| V::absorb_byte(digest, byte));
	}
}

impl<D: FnvDigest, V: Variant> Default for FnvEngine<D, V> {
	fn default() -> Self {
		Self::new()
	}
}

impl<D: FnvDigest, V: Variant> FnvHasher for FnvEngine<D, V> {
	type Digest = D;

	fn new() -> Self {
		Self::new()
	}

	#[inline]
	fn combine_bytes(&mut self, bytes: &[u8]) {
		if bytes.is_empty() {
			self.state = self.state.wrapping_mul(D::PRIME);
		} else {
			self.absorb_stream(bytes);
		}
	}

	fn digest(&self) -> D {
		FnvEngine::digest(self)
	}

	fn reset(&mut self) {
		FnvEngine::reset(self);
	}
}

pub type Fnv1Hasher<D> = FnvEngine<D, Fnv1>;
pub type Fnv1aHasher<D> = FnvEngine<D, Fnv1a>;

pub type Fnv32 = Fnv1Hasher<u32>;
pub type Fnv32a = Fnv1aHasher<u32>;
pub type Fnv64 = Fnv1Hasher<u64>;
pub type Fnv64a = Fnv1aHasher<u64>;
pub type Fnv128 = Fnv1Hasher<u128>;
pub type Fnv128a = Fnv1aHasher<u128>;
pub type Fnv256 = Fnv1Hasher<U256>;
pub type Fnv256a = Fnv1aHasher<U256>;
pub type Fnv512 = Fnv1Hasher<U512>;
pub type Fnv512a = Fnv1aHasher<U512>;
pub type Fnv1024 = Fnv1Hasher<U1024>;
pub type Fnv1024a = Fnv1aHasher<U1024>;
