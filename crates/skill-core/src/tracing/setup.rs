//! Subscriber setup for the rating crates.

use std::sync::Once;

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Env var holding per-crate levels, e.g. `skill_rating=debug,skill_core=warn`.
pub const LOG_ENV: &str = "SKILL_LOG";

/// Filter used when `SKILL_LOG` is unset or does not parse.
pub const DEFAULT_FILTER: &str = "skill_core=info,skill_rating=info";

static INIT: Once = Once::new();

/// The filter `init_tracing` installs: `SKILL_LOG` if it parses, otherwise
/// `DEFAULT_FILTER`.
pub fn env_filter() -> EnvFilter {
    EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER))
}

/// Install a fmt subscriber once per process. Later calls do nothing, and a
/// subscriber someone else installed first is left in place.
pub fn init_tracing() {
    INIT.call_once(|| {
        let layer = fmt::layer()
            .with_target(true)
            .with_thread_ids(true)
            .with_file(true)
            .with_line_number(true);
        if tracing_subscriber::registry()
            .with(layer)
            .with(env_filter())
            .try_init()
            .is_err()
        {
            ::tracing::debug!("global subscriber already set; keeping it");
        }
    });
}
