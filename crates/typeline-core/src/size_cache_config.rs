//! Global switch for the text-size cache
//!
//! Every text run keeps the size of its whole text in a single-slot cache.
//! **The cache is enabled by default.** Turning it off makes every size
//! query walk the text again, which is handy when chasing a suspected
//! stale-size bug.
//!
//! # Example
//!
//! ```
//! use typeline_core::size_cache_config;
//!
//! size_cache_config::set_size_cache_enabled(false);
//! assert!(!size_cache_config::is_size_cache_enabled());
//!
//! size_cache_config::set_size_cache_enabled(true);
//! ```
//!
//! # Environment Variable
//!
//! Set `TYPELINE_SIZE_CACHE=0` to disable the cache at startup:
//!
//! ```bash
//! TYPELINE_SIZE_CACHE=0 ./my_app
//! ```

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::OnceLock;

pub const ENV_VAR: &str = "TYPELINE_SIZE_CACHE";

static SIZE_CACHE_ENABLED: AtomicBool = AtomicBool::new(true);

static ENV_CHECKED: OnceLock<()> = OnceLock::new();

fn check_env() {
    ENV_CHECKED.get_or_init(|| {
        if let Ok(val) = std::env::var(ENV_VAR) {
            if is_off_value(&val) {
                SIZE_CACHE_ENABLED.store(false, Ordering::SeqCst);
                log::info!("Typeline size cache disabled via {} env var", ENV_VAR);
            }
        }
    });
}

fn is_off_value(val: &str) -> bool {
    matches!(val.trim().to_lowercase().as_str(), "0" | "false" | "no" | "off")
}

/// Check if the size cache is enabled
///
/// The environment variable is read on first call; runtime changes via
/// [`set_size_cache_enabled`] take precedence afterwards.
pub fn is_size_cache_enabled() -> bool {
    check_env();
    SIZE_CACHE_ENABLED.load(Ordering::SeqCst)
}

/// Enable or disable the size cache at runtime
///
/// Overrides the environment variable.
pub fn set_size_cache_enabled(enabled: bool) {
    check_env();
    SIZE_CACHE_ENABLED.store(enabled, Ordering::SeqCst);
    log::debug!(
        "Typeline size cache {} via runtime call",
        if enabled { "enabled" } else { "disabled" }
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn off_values_are_recognised() {
        for val in ["0", "false", "NO", " off "] {
            assert!(is_off_value(val), "{val:?} should disable the cache");
        }
        for val in ["1", "true", "yes", ""] {
            assert!(!is_off_value(val), "{val:?} should keep the cache on");
        }
    }

    #[test]
    fn runtime_toggle_round_trips() {
        // Global state: leave the cache enabled for other tests.
        set_size_cache_enabled(false);
        assert!(!is_size_cache_enabled());

        set_size_cache_enabled(true);
        assert!(is_size_cache_enabled());
    }
}
