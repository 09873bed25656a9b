// Copyright 2024-2025 Irreducible Inc.

use fnv_hash::{
	contributions, hash, Fnv1024, Fnv1024a, Fnv128, Fnv128a, Fnv256, Fnv256a, Fnv32, Fnv32a,
	Fnv512, Fnv512a, Fnv64, Fnv64a, FnvHasher, RawBytes,
};
use paste::paste;
use proptest::{collection::vec, prelude::*};

macro_rules! hasher_properties {
	($($hasher:ident),* $(,)?) => {
		paste! {
			$(
				proptest! {
					#[test]
					fn [<test_deterministic_ $hasher:snake>](
						numbers in vec(any::<Option<u64>>(), 0..32),
						text in ".{0,40}",
						flag in any::<bool>(),
					) {
						let value = (&numbers, &text, flag);
						prop_assert_eq!(hash::<$hasher, _>(&value), hash::<$hasher, _>(&value));

						let mut replayed = $hasher::new();
						for chunk in contributions(&value) {
							replayed.combine_bytes(&chunk);
						}
						prop_assert_eq!(replayed.digest(), hash::<$hasher, _>(&value));
					}
				}

				#[test]
				fn [<test_order_sensitive_ $hasher:snake>]() {
					assert_ne!(hash::<$hasher, _>(&[1u32, 2]), hash::<$hasher, _>(&[2u32, 1]));
					assert_ne!(hash::<$hasher, _>(&("ab", "c")), hash::<$hasher, _>(&("c", "ab")));
				}

				#[test]
				fn [<test_absence_distinct_ $hasher:snake>]() {
					let with_absent = [None, Some(1u32), Some(2), Some(3)];
					let without = [Some(1u32), Some(2), Some(3)];
					assert_ne!(hash::<$hasher, _>(&with_absent), hash::<$hasher, _>(&without));

					assert_ne!(
						hash::<$hasher, _>(&[None::<u32>; 4]),
						hash::<$hasher, _>(&[None::<u32>; 3])
					);

					let empty: Vec<Option<u32>> = Vec::new();
					assert_ne!(hash::<$hasher, _>(&empty), hash::<$hasher, _>(&vec![None::<u32>]));
					assert_eq!(hash::<$hasher, _>(&empty), $hasher::new().digest());
				}

				#[test]
				fn [<test_signed_zero_differs_ $hasher:snake>]() {
					assert_ne!(hash::<$hasher, _>(&0.0f64), hash::<$hasher, _>(&-0.0f64));
					assert_ne!(hash::<$hasher, _>(&0.0f32), hash::<$hasher, _>(&-0.0f32));
				}
			)*
		}
	};
}

hasher_properties!(
	Fnv32, Fnv32a, Fnv64, Fnv64a, Fnv128, Fnv128a, Fnv256, Fnv256a, Fnv512, Fnv512a, Fnv1024,
	Fnv1024a,
);

proptest! {
	#[test]
	fn test_raw_bytes_match_byte_chunk(bytes in vec(any::<u8>(), 0..64)) {
		let mut direct = Fnv128a::new();
		direct.combine_bytes(&bytes);
		prop_assert_eq!(hash::<Fnv128a, _>(&RawBytes(&bytes)), direct.digest());
	}

	#[test]
	fn test_text_contributes_utf8(text in "\\PC{0,16}") {
		prop_assert_eq!(contributions(text.as_str()), vec![text.as_bytes().to_vec()]);
	}
}

#[test]
fn test_signed_zero_encodings() {
	assert_eq!(contributions(&0.0f64), vec![vec![0u8; 8]]);
	assert_eq!(contributions(&-0.0f64), vec![vec![0, 0, 0, 0, 0, 0, 0, 0x80]]);
	assert_eq!(contributions(&-0.0f32), vec![vec![0, 0, 0, 0x80]]);
}

#[test]
fn test_absent_optional_is_not_a_no_op() {
	let with_absent = hash::<Fnv64a, _>(&(1u8, None::<u8>, 2u8));
	let without = hash::<Fnv64a, _>(&(1u8, 2u8));
	assert_ne!(with_absent, without);
	assert_eq!(contributions(&(1u8, None::<u8>, 2u8)), vec![vec![1], vec![], vec![2]]);
}
