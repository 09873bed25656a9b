// Copyright 2024-2025 Irreducible Inc.

use std::{env, sync::OnceLock};

const NUM_THREADS_VAR: &str = "RAYON_NUM_THREADS";

/// Makes `RAYON_NUM_THREADS=1` run parallel batch hashing inline on the calling thread.
///
/// With a single thread requested, the global pool is built with `use_current_thread`, which keeps
/// profiles and panics on the caller's stack. Any other setting leaves pool construction to rayon.
///
/// The global pool can only be built once, so this returns an error if something initialized it
/// earlier. The result is memoized; a reference is returned because `ThreadPoolBuildError` is not
/// `Clone`. Call it first thing in `main` or in a test.
pub fn adjust_thread_pool() -> &'static Result<(), rayon::ThreadPoolBuildError> {
	static ONCE_GUARD: OnceLock<Result<(), rayon::ThreadPoolBuildError>> = OnceLock::new();

	ONCE_GUARD.get_or_init(|| {
		// `rayon::current_num_threads` would initialize the global pool, so read the variable.
		if single_thread_requested(env::var(NUM_THREADS_VAR).ok().as_deref()) {
			rayon::ThreadPoolBuilder::new()
				.num_threads(1)
				.use_current_thread()
				.build_global()
		} else {
			Ok(())
		}
	})
}

fn single_thread_requested(num_threads: Option<&str>) -> bool {
	num_threads.is_some_and(|value| value.trim() == "1")
}
