//! Tests for tracing initialization.

use std::sync::Mutex;

use skill_core::tracing::{env_filter, init_tracing, DEFAULT_FILTER, LOG_ENV};
use tracing_subscriber::EnvFilter;

/// Serializes tests that touch SKILL_LOG.
static TRACING_MUTEX: Mutex<()> = Mutex::new(());

#[test]
fn test_skill_log_per_crate_levels() {
    let _lock = TRACING_MUTEX.lock().unwrap();
    std::env::set_var("SKILL_LOG", "skill_rating=debug,skill_core=warn");
    init_tracing();
    std::env::remove_var("SKILL_LOG");
}

#[test]
fn test_init_tracing_idempotent() {
    let _lock = TRACING_MUTEX.lock().unwrap();
    init_tracing();
    init_tracing();
    init_tracing();
}

#[test]
fn test_invalid_skill_log_falls_back() {
    let _lock = TRACING_MUTEX.lock().unwrap();
    std::env::set_var(LOG_ENV, "skill_rating=loud");
    let fallback = EnvFilter::new(DEFAULT_FILTER).to_string();
    assert_eq!(env_filter().to_string(), fallback);
    init_tracing();
    std::env::remove_var(LOG_ENV);
}

#[test]
fn test_unset_skill_log_uses_default() {
    let _lock = TRACING_MUTEX.lock().unwrap();
    std::env::remove_var(LOG_ENV);
    assert_eq!(
        env_filter().to_string(),
        EnvFilter::new(DEFAULT_FILTER).to_string()
    );
}

#[test]
fn test_valid_skill_log_is_used() {
    let _lock = TRACING_MUTEX.lock().unwrap();
    std::env::set_var(LOG_ENV, "skill_rating=debug");
    let filter = env_filter().to_string();
    std::env::remove_var(LOG_ENV);
    assert!(filter.contains("skill_rating=debug"), "{filter}");
}

#[test]
fn test_events_after_init_do_not_panic() {
    let _lock = TRACING_MUTEX.lock().unwrap();
    init_tracing();
    tracing::info!(mean = 300.0, variance = 250_000.0, "rating seeded");
    tracing::debug!(side = "user", "side updated");
}
