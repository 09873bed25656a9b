// Copyright 2024-2025 Irreducible Inc.

use std::fmt::Debug;

use fnv_algebra::FnvDigest;

/// Order of the multiply and XOR steps applied to every absorbed byte.
pub trait Variant: Debug + Default + Copy + Eq + Send + Sync + 'static {
	/// Short name used in engine names and benchmark labels.
	const NAME: &'static str;

	fn absorb_byte<D: FnvDigest>(digest: D, byte: u8) -> D;
}

/// FNV-1: multiply by the prime, then XOR the byte.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Fnv1;

impl Variant for Fnv1 {
	const NAME: &'static str = "FNV-1";

	#[inline(always)]
	fn absorb_byte<D: FnvDigest>(digest: D, byte: u8) -> D {
		digest.wrapping_mul(D::PRIME).xor_byte(byte)
	}
}

/// FNV-1a: XOR the byte, then multiply by the prime.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Fnv1a;

impl Variant for Fnv1a {
	const NAME: &'static str = "FNV-1a";

	#[inline(always)]
	fn absorb_byte<D: FnvDigest>(digest: D, byte: u8) -> D {
		digest.xor_byte(byte).wrapping_mul(D::PRIME)
	}
}
