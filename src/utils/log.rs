// src/utils/log.rs

//! Structured logging for the region analysis library.
//!
//! Built on the `tracing` crate: level-based, structured, and context-aware.
//! Initialize the subscriber once before using the library:
//!
//! ```
//! regionscan::utils::log::init_subscriber(tracing::Level::DEBUG);
//! ```
//!
//! Then use the re-exported macros throughout:
//! `trace!`, `debug!`, `info!`, `warn!`, `error!`.

pub use tracing::{Level, debug, error, info, instrument, span, trace, warn};
use tracing_subscriber::FmtSubscriber;

/// Initializes a global logging subscriber.
///
/// Call once at the beginning of the program. Sets up a subscriber that
/// logs to standard error.
pub fn init_subscriber(max_level: Level) {
    let subscriber = FmtSubscriber::builder()
        .with_max_level(max_level)
        .with_target(false)
        .finish();

    tracing::subscriber::set_global_default(subscriber)
        .expect("Setting default tracing subscriber failed");
}
