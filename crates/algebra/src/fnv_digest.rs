// Copyright 2024-2025 Irreducible Inc.

use std::fmt::Debug;

use digest::generic_array::{ArrayLength, GenericArray};

use crate::Error;

/// Fixed-width unsigned value used as the accumulator of an FNV hash.
///
/// The width is part of the type, so constant selection and output size are resolved at compile
/// time. Both operations are total: overflow in [`FnvDigest::wrapping_mul`] silently wraps modulo
/// `2^BITS`.
pub trait FnvDigest: Debug + Default + Copy + Eq + Send + Sync + 'static {
	/// Number of bits in the digest.
	const BITS: usize;
	/// Number of bytes in the big-endian encoding of the digest.
	const BYTES: usize = Self::BITS / 8;
	/// The `fnv_prime` for this width.
	const PRIME: Self;
	/// The `offset_basis` for this width, i.e. the digest before any data is absorbed.
	const OFFSET_BASIS: Self;

	/// Length of [`FnvDigest::to_digest_bytes`] as a type-level integer.
	type OutputSize: ArrayLength<u8> + 'static;

	/// XORs `byte` into the low 8 bits of the digest.
	fn xor_byte(self, byte: u8) -> Self;

	/// Multiplies two digests, keeping the low `BITS` bits of the product.
	fn wrapping_mul(self, rhs: Self) -> Self;

	/// Big-endian encoding of the digest.
	fn to_digest_bytes(&self) -> GenericArray<u8, Self::OutputSize>;

	/// Decodes a digest from its big-endian encoding.
	fn from_digest_bytes(bytes: &[u8]) -> Result<Self, Error>;
}
