//! Logging initialization for the SchemaCheck service.
//!
//! Library code logs through the `log` facade; the binary installs an
//! `env_logger` backend once at startup. The default level is `info` and can
//! be overridden with `RUST_LOG`.

/// Initialize the process-wide logger.
///
/// Returns an error if a logger is already installed, so call sites use
/// `logging::init().ok()` and keep going; tests and embedders may have set
/// one up already.
pub fn init() -> Result<(), log::SetLoggerError> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).try_init()
}
