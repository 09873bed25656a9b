// Copyright 2024-2025 Irreducible Inc.

//! Adapters to the hashing traits of the wider ecosystem.
//!
//! Both [`digest::Update`] and [`std::hash::Hasher::write`] treat their input as one continuous
//! stream, so they absorb bytes with [`FnvEngine::absorb_stream`] and ignore chunk boundaries.
//! The empty-chunk rule only applies through [`crate::FnvHasher::combine_bytes`].

use std::{
	collections::{HashMap, HashSet},
	hash::BuildHasherDefault,
};

use digest::{FixedOutput, FixedOutputReset, HashMarker, Output, OutputSizeUser, Reset, Update};
use fnv_algebra::FnvDigest;

use crate::{Fnv64a, FnvEngine, Variant};

impl<D: FnvDigest, V: Variant> HashMarker for FnvEngine<D, V> {}

impl<D: FnvDigest, V: Variant> Update for FnvEngine<D, V> {
	fn update(&mut self, data: &[u8]) {
		self.absorb_stream(data);
	}
}

impl<D: FnvDigest, V: Variant> OutputSizeUser for FnvEngine<D, V> {
	type OutputSize = D::OutputSize;
}

impl<D: FnvDigest, V: Variant> FixedOutput for FnvEngine<D, V> {
	fn finalize_into(self, out: &mut Output<Self>) {
		*out = self.digest().to_digest_bytes();
	}
}

impl<D: FnvDigest, V: Variant> Reset for FnvEngine<D, V> {
	fn reset(&mut self) {
		FnvEngine::reset(self);
	}
}

impl<D: FnvDigest, V: Variant> FixedOutputReset for FnvEngine<D, V> {
	fn finalize_into_reset(&mut self, out: &mut Output<Self>) {
		*out = self.digest().to_digest_bytes();
		FnvEngine::reset(self);
	}
}

impl<D: FnvDigest + Into<u64>, V: Variant> std::hash::Hasher for FnvEngine<D, V> {
	fn finish(&self) -> u64 {
		self.digest().into()
	}

	fn write(&mut self, bytes: &[u8]) {
		self.absorb_stream(bytes);
	}
}

/// [`std::hash::BuildHasher`] for 64-bit FNV-1a.
pub type FnvBuildHasher = BuildHasherDefault<Fnv64a>;

/// A [`HashMap`] keyed with 64-bit FNV-1a.
pub type FnvHashMap<K, T> = HashMap<K, T, FnvBuildHasher>;

/// A [`HashSet`] hashed with 64-bit FNV-1a.
pub type FnvHashSet<T> = HashSet<T, FnvBuildHasher>;

#[cfg(test)]
mod tests {
	use std::hash::{BuildHasher, Hasher};

	use digest::Digest;
	use hex_literal::hex;

	use super::*;
	use crate::{Fnv128a, Fnv32, Fnv32a, Fnv512, FnvHasher};

	#[test]
	fn test_digest_trait_known_answers() {
		assert_eq!(<Fnv32a as Digest>::digest(b"").as_slice(), hex!("811c9dc5"));
		assert_eq!(<Fnv32a as Digest>::digest(b"a").as_slice(), hex!("e40c292c"));
		assert_eq!(<Fnv32 as Digest>::digest(b"foobar").as_slice(), hex!("31f0b262"));
		assert_eq!(
			<Fnv128a as Digest>::digest(b"foobar").as_slice(),
			hex!("343e1662793c64bf6f0d3597ba446f18")
		);
	}

	#[test]
	fn test_update_ignores_chunk_boundaries() {
		let mut split = <Fnv512 as Digest>::new();
		Digest::update(&mut split, b"foo");
		Digest::update(&mut split, b"");
		Digest::update(&mut split, b"bar");
		assert_eq!(split.finalize(), <Fnv512 as Digest>::digest(b"foobar"));
	}

	#[test]
	fn test_finalize_reset() {
		let mut hasher = <Fnv32a as Digest>::new();
		Digest::update(&mut hasher, b"a");
		assert_eq!(hasher.finalize_reset().as_slice(), hex!("e40c292c"));
		assert_eq!(FnvHasher::digest(&hasher), 0x811c9dc5);
	}

	#[test]
	fn test_std_hasher() {
		let mut hasher = Fnv64a::default();
		hasher.write(b"foo");
		hasher.write(b"bar");
		assert_eq!(hasher.finish(), 0x85944171f73967e8);

		let mut hasher = Fnv32a::default();
		hasher.write(b"a");
		assert_eq!(hasher.finish(), 0xe40c292c);
	}

	#[test]
	fn test_hash_map() {
		let mut map = FnvHashMap::default();
		map.insert("one", 1);
		map.insert("two", 2);
		assert_eq!(map.get("one"), Some(&1));
		assert_eq!(map.get("three"), None);

		let set: FnvHashSet<u32> = (0..100).collect();
		assert_eq!(set.len(), 100);

		let build = FnvBuildHasher::default();
		assert_eq!(build.hash_one(42u64), build.hash_one(42u64));
	}
}
