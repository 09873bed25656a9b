// Copyright 2024-2025 Irreducible Inc.

//! Digest algebra for the Fowler–Noll–Vo hash family.
//!
//! Every supported digest width is a type implementing [`FnvDigest`]. The trait carries the
//! published `fnv_prime` and `offset_basis` for the width together with the two operations the
//! hash needs: XOR with a single byte and multiplication modulo `2^BITS`.

mod constants;
mod error;
mod fnv_digest;
mod impls;

pub use crypto_bigint::{U1024, U256, U512};
pub use error::Error;
pub use fnv_digest::FnvDigest;
