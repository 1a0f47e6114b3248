//! Platform abstraction layer
//!
//! Handles browser/native differences for logging and wall-clock sampling.
//! The engine itself never reads the clock; hosts sample `now_ms` here and
//! pass it into `tick`/`submit_input`.

/// Initialize the logging backend. Call once at host startup.
#[cfg(target_arch = "wasm32")]
pub fn init_logging() {
    console_error_panic_hook::set_once();
    if console_log::init_with_level(log::Level::Info).is_err() {
        log::warn!("Logger already initialized");
    }
}

#[cfg(not(target_arch = "wasm32"))]
pub fn init_logging() {
    let _ = env_logger::try_init();
}

/// Current wall-clock time in milliseconds, suitable for the engine's
/// `now_ms` parameters and for RNG seeding.
#[cfg(target_arch = "wasm32")]
pub fn now_ms() -> f64 {
    js_sys::Date::now()
}

#[cfg(not(target_arch = "wasm32"))]
pub fn now_ms() -> f64 {
    use std::time::{SystemTime, UNIX_EPOCH};
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs_f64() * 1000.0)
        .unwrap_or(0.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_now_ms_advances() {
        let a = now_ms();
        let b = now_ms();
        assert!(b >= a);
        assert!(a > 0.0);
    }
}
