// Copyright 2024-2025 Irreducible Inc.

/// Error returned when a digest cannot be reconstructed from its byte encoding.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum Error {
	#[error("expected {expected} digest bytes, got {actual}")]
	LengthMismatch { expected: usize, actual: usize },
}
