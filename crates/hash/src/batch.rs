// Copyright 2024-2025 Irreducible Inc.

use rayon::prelude::*;
use tracing::instrument;

use crate::{hash, hash_bytes, FnvHashable, FnvHasher};

/// Hashes every item with its own fresh hasher of type `H`.
///
/// Items are processed in parallel on the rayon thread pool. The result is in input order and
/// equal to hashing the items one by one.
#[instrument(skip_all, level = "debug", fields(count = items.len()))]
pub fn digest_all<H, T>(items: &[T]) -> Vec<H::Digest>
where
	H: FnvHasher,
	H::Digest: Send,
	T: FnvHashable + Sync,
{
	items.par_iter().map(hash::<H, T>).collect()
}

/// Hashes every byte buffer as a single chunk with its own fresh hasher of type `H`.
#[instrument(skip_all, level = "debug", fields(count = items.len()))]
pub fn digest_all_bytes<H, B>(items: &[B]) -> Vec<H::Digest>
where
	H: FnvHasher,
	H::Digest: Send,
	B: AsRef<[u8]> + Sync,
{
	items
		.par_iter()
		.map(|item| hash_bytes::<H>(item.as_ref()))
		.collect()
}
