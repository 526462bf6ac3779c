use log::LevelFilter;

/// Environment variable that turns on debug logging for the CLI and server.
pub const DEBUG_ENV_VAR: &str = "WORDGRID_DEBUG";

/// Default level before any `RUST_LOG` override.
#[must_use]
pub fn default_level(debug_enabled: bool) -> LevelFilter {
    if debug_enabled {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    }
}

/// Initialize logging.
///
/// # Behavior
/// - **Native (CLI, server):** `debug_enabled` picks Debug or Info; `RUST_LOG` overrides it.
///   Calling this twice is harmless; the second call is ignored.
/// - **WASM:** logs to the browser console at Debug or Info level.
pub fn init_logger(debug_enabled: bool) {
    #[cfg(target_arch = "wasm32")]
    {
        let level = default_level(debug_enabled).to_level().unwrap_or(log::Level::Info);

        match console_log::init_with_level(level) {
            Ok(()) => {
                log::info!("WASM logger initialized at {level:?} level");
            }
            Err(e) => {
                // Keep running without logs rather than failing module init.
                let msg = format!("Failed to initialize console_log: {}. Logging will be unavailable.", e);
                web_sys::console::error_1(&msg.into());
            }
        }
    }

    #[cfg(not(target_arch = "wasm32"))]
    {
        let level = default_level(debug_enabled);

        let mut builder = env_logger::Builder::new();
        builder
            .filter(None, level)
            .format_timestamp(None)
            .format_module_path(false)
            .format_target(false);

        // Let RUST_LOG override our defaults if explicitly set
        if let Ok(spec) = std::env::var("RUST_LOG") {
            builder.parse_filters(&spec);
        }

        if builder.try_init().is_ok() {
            log::debug!("Native logger initialized at {level:?} level");
        }
    }
}
