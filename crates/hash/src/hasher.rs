// Copyright 2023-2025 Irreducible Inc.

use crate::FnvHashable;

/// Trait representing a consumer of the chunked byte stream produced by [`FnvHashable`] values.
///
/// Unlike [`digest::Digest`], a hasher sees chunk boundaries: every call to
/// [`FnvHasher::combine_bytes`] is one chunk, and a zero-length chunk is meaningful. Reading the
/// digest does not finalize the hasher, so more data may be combined afterwards.
pub trait FnvHasher: Sized {
	/// The value read back by [`FnvHasher::digest`].
	type Digest;

	fn new() -> Self;

	/// Feeds one chunk of raw bytes to the hasher.
	fn combine_bytes(&mut self, bytes: &[u8]);

	/// Feeds the contribution of `value` to the hasher.
	fn combine<T: FnvHashable + ?Sized>(&mut self, value: &T) {
		value.hash_into(self)
	}

	#[must_use]
	fn chain<T: FnvHashable + ?Sized>(mut self, value: &T) -> Self {
		self.combine(value);
		self
	}

	#[must_use]
	fn chain_bytes(mut self, bytes: &[u8]) -> Self {
		self.combine_bytes(bytes);
		self
	}

	/// Current digest. Repeated reads return the same value until more data is combined.
	fn digest(&self) -> Self::Digest;

	/// Returns the hasher to its freshly constructed state.
	fn reset(&mut self);
}

/// Hashes a single value with a fresh hasher of type `H`.
pub fn hash<H: FnvHasher, T: FnvHashable + ?Sized>(value: &T) -> H::Digest {
	H::new().chain(value).digest()
}

/// Hashes a single chunk of raw bytes with a fresh hasher of type `H`.
pub fn hash_bytes<H: FnvHasher>(bytes: &[u8]) -> H::Digest {
	H::new().chain_bytes(bytes).digest()
}
