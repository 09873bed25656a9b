// Copyright 2024-2025 Irreducible Inc.

use crypto_bigint::{Encoding, U1024, U256, U512};
use digest::{
	consts::{U128, U16, U32, U4, U64, U8},
	generic_array::GenericArray,
};

use crate::{constants::*, Error, FnvDigest};

#[inline]
fn check_len(expected: usize, bytes: &[u8]) -> Result<(), Error> {
	if bytes.len() != expected {
		return Err(Error::LengthMismatch {
			expected,
			actual: bytes.len(),
		});
	}
	Ok(())
}

macro_rules! impl_native_digest {
	($name:ty, $output:ty, $prime:expr, $offset:expr) => {
		impl FnvDigest for $name {
			const BITS: usize = <$name>::BITS as usize;
			const PRIME: Self = $prime;
			const OFFSET_BASIS: Self = $offset;

			type OutputSize = $output;

			#[inline(always)]
			fn xor_byte(self, byte: u8) -> Self {
				self ^ byte as Self
			}

			#[inline(always)]
			fn wrapping_mul(self, rhs: Self) -> Self {
				<$name>::wrapping_mul(self, rhs)
			}

			fn to_digest_bytes(&self) -> GenericArray<u8, Self::OutputSize> {
				let mut out = GenericArray::default();
				out.copy_from_slice(&<$name>::to_be_bytes(*self));
				out
			}

			fn from_digest_bytes(bytes: &[u8]) -> Result<Self, Error> {
				check_len(Self::BYTES, bytes)?;
				let mut repr = [0u8; std::mem::size_of::<$name>()];
				repr.copy_from_slice(bytes);
				Ok(<$name>::from_be_bytes(repr))
			}
		}
	};
}

impl_native_digest!(u32, U4, FNV32_PRIME, FNV32_OFFSET_BASIS);
impl_native_digest!(u64, U8, FNV64_PRIME, FNV64_OFFSET_BASIS);
impl_native_digest!(u128, U16, FNV128_PRIME, FNV128_OFFSET_BASIS);

macro_rules! impl_multi_word_digest {
	($name:ty, $bits:expr, $output:ty, $prime:expr, $offset:expr) => {
		impl FnvDigest for $name {
			const BITS: usize = $bits;
			const PRIME: Self = $prime;
			const OFFSET_BASIS: Self = $offset;

			type OutputSize = $output;

			#[inline]
			fn xor_byte(self, byte: u8) -> Self {
				self ^ <$name>::from_u8(byte)
			}

			#[inline]
			fn wrapping_mul(self, rhs: Self) -> Self {
				<$name>::wrapping_mul(&self, &rhs)
			}

			fn to_digest_bytes(&self) -> GenericArray<u8, Self::OutputSize> {
				let mut out = GenericArray::default();
				out.copy_from_slice(&Encoding::to_be_bytes(self));
				out
			}

			fn from_digest_bytes(bytes: &[u8]) -> Result<Self, Error> {
				check_len(Self::BYTES, bytes)?;
				Ok(<$name>::from_be_slice(bytes))
			}
		}
	};
}

impl_multi_word_digest!(U256, 256, U32, FNV256_PRIME, FNV256_OFFSET_BASIS);
impl_multi_word_digest!(U512, 512, U64, FNV512_PRIME, FNV512_OFFSET_BASIS);
impl_multi_word_digest!(U1024, 1024, U128, FNV1024_PRIME, FNV1024_OFFSET_BASIS);
