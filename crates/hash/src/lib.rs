// Copyright 2023-2025 Irreducible Inc.

//! Fowler–Noll–Vo hashing of structured data.
//!
//! An [`FnvEngine`] is parameterized by a digest width (any [`FnvDigest`]) and a [`Variant`]
//! ([`Fnv1`] or [`Fnv1a`]). Values reach the engine through [`FnvHashable`], which expands a
//! value into an ordered stream of byte chunks.
//!
//! ```
//! use fnv_hash::{Fnv32a, FnvHasher};
//!
//! let mut hasher = Fnv32a::new();
//! hasher.combine_bytes(b"a");
//! assert_eq!(hasher.digest(), 0xe40c292c);
//! ```

extern crate self as fnv_hash;

pub mod batch;
pub mod engine;
pub mod hashable;
pub mod hasher;
pub mod interop;
pub mod recorder;
pub mod value;
pub mod variant;

pub use batch::*;
pub use engine::*;
pub use fnv_algebra::{Error, FnvDigest, U1024, U256, U512};
pub use fnv_macros::FnvHashable;
pub use hashable::*;
pub use hasher::*;
pub use interop::*;
pub use recorder::*;
pub use value::*;
pub use variant::*;
