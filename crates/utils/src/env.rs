// Copyright 2024 Irreducible Inc.

/// Read boolean flag from the environment variable.
pub fn boolean_env_flag_set(flag: &str) -> bool {
	match std::env::var(flag) {
		Ok(val) => is_truthy(&val),
		Err(_) => false,
	}
}

fn is_truthy(val: &str) -> bool {
	["1", "on", "ON", "true", "TRUE", "yes", "YES"].contains(&val)
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_truthy_values() {
		for val in ["1", "on", "TRUE", "yes"] {
			assert!(is_truthy(val));
		}
		for val in ["", "0", "off", "no", "True "] {
			assert!(!is_truthy(val));
		}
	}

	#[test]
	fn test_unset_flag_is_false() {
		assert!(!boolean_env_flag_set("FNV_UTILS_TEST_FLAG_THAT_IS_NEVER_SET"));
	}
}
