// Copyright 2024-2025 Irreducible Inc.

use crate::{FnvHashable, FnvHasher};

/// A hasher that records the chunks it is fed instead of folding them into a digest.
///
/// This exposes the exact chunk stream a value contributes, which is what every real engine
/// consumes. Replaying the recorded chunks into an engine gives the same digest as combining the
/// value directly.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ChunkRecorder {
	chunks: Vec<Vec<u8>>,
}

impl ChunkRecorder {
	pub fn chunks(&self) -> &[Vec<u8>] {
		&self.chunks
	}

	pub fn into_chunks(self) -> Vec<Vec<u8>> {
		self.chunks
	}

	/// Feeds the recorded chunks, in order, to another hasher.
	pub fn replay<H: FnvHasher>(&self, hasher: &mut H) {
		for chunk in &self.chunks {
			hasher.combine_bytes(chunk);
		}
	}
}

impl FnvHasher for ChunkRecorder {
	type Digest = Vec<Vec<u8>>;

	fn new() -> Self {
		Self::default()
	}

	fn combine_bytes(&mut self, bytes: &[u8]) {
		self.chunks.push(bytes.to_vec());
	}

	fn digest(&self) -> Self::Digest {
		self.chunks.clone()
	}

	fn reset(&mut self) {
		self.chunks.clear();
	}
}

/// Returns the ordered chunks that `value` contributes to a hasher.
pub fn contributions<T: FnvHashable + ?Sized>(value: &T) -> Vec<Vec<u8>> {
	ChunkRecorder::new().chain(value).into_chunks()
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::{hash, Fnv256a, Fnv64};

	#[test]
	fn test_replay_matches_direct_hashing() {
		let value = (Some("text"), None::<u32>, vec![1.5f64, -0.25], true);
		let mut recorder = ChunkRecorder::new();
		recorder.combine(&value);

		let mut replayed = Fnv64::new();
		recorder.replay(&mut replayed);
		assert_eq!(replayed.digest(), hash::<Fnv64, _>(&value));

		let mut replayed = Fnv256a::new();
		recorder.replay(&mut replayed);
		assert_eq!(replayed.digest(), hash::<Fnv256a, _>(&value));
	}

	#[test]
	fn test_reset_clears_chunks() {
		let mut recorder = ChunkRecorder::new().chain("abc");
		assert_eq!(recorder.chunks().len(), 1);
		recorder.reset();
		assert!(recorder.chunks().is_empty());
	}
}
