// Copyright 2024-2025 Irreducible Inc.

//! Published FNV parameters.
//!
//! Every `offset_basis` is the FNV-0 hash of the ASCII string `chongo <Landon Curt Noll> /\../\`
//! with the corresponding prime.

use crypto_bigint::{U1024, U256, U512};

pub const FNV32_PRIME: u32 = 16777619;
pub const FNV32_OFFSET_BASIS: u32 = 2166136261;

pub const FNV64_PRIME: u64 = 1099511628211;
pub const FNV64_OFFSET_BASIS: u64 = 14695981039346656037;

pub const FNV128_PRIME: u128 = 0x0000000001000000000000000000013B;
pub const FNV128_OFFSET_BASIS: u128 = 0x6c62272e07bb014262b821756295c58d;

pub const FNV256_PRIME: U256 =
	U256::from_be_hex("0000000000000000000001000000000000000000000000000000000000000163");
pub const FNV256_OFFSET_BASIS: U256 =
	U256::from_be_hex("dd268dbcaac550362d98c384c4e576ccc8b1536847b6bbb31023b4c8caee0535");

pub const FNV512_PRIME: U512 = U512::from_be_hex(concat!(
	"0000000000000000000000000000000000000000010000000000000000000000",
	"0000000000000000000000000000000000000000000000000000000000000157",
));
pub const FNV512_OFFSET_BASIS: U512 = U512::from_be_hex(concat!(
	"b86db0b1171f4416dca1e50f309990acac87d059c90000000000000000000d21",
	"e948f68a34c192f62ea79bc942dbe7ce182036415f56e34bac982aac4afe9fd9",
));

pub const FNV1024_PRIME: U1024 = U1024::from_be_hex(concat!(
	"0000000000000000000000000000000000000000000000000000000000000000",
	"0000000000000000000001000000000000000000000000000000000000000000",
	"0000000000000000000000000000000000000000000000000000000000000000",
	"000000000000000000000000000000000000000000000000000000000000018d",
));
pub const FNV1024_OFFSET_BASIS: U1024 = U1024::from_be_hex(concat!(
	"0000000000000000005f7a76758ecc4d32e56d5a591028b74b29fc4223fdada1",
	"6c3bf34eda3674da9a21d9000000000000000000000000000000000000000000",
	"000000000000000000000000000000000000000000000000000000000004c6d7",
	"eb6e73802734510a555f256cc005ae556bde8cc9c6a93b21aff4b16c71ee90b3",
));
