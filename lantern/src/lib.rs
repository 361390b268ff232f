//! The bridge's per-player side: one actor per session owns the player's
//! inventory state and serialises every inventory packet through it.

use lantern_config::ADVANCED_CONFIG;

pub mod error;
pub mod session;

pub use error::LanternError;
pub use session::{Event, Session, SessionHandle};

/// Installs the global logger as configured in `features.toml`.
pub fn init_logger() {
    let logging = &ADVANCED_CONFIG.logging;
    if !logging.enabled {
        return;
    }
    let mut logger = simple_logger::SimpleLogger::new();
    if !logging.timestamp {
        logger = logger.without_timestamps();
    }
    if logging.env {
        logger = logger.env();
    }
    logger = logger.with_level(logging.level.into());
    logger = logger.with_colors(logging.color);
    logger = logger.with_threads(logging.threads);
    if let Err(err) = logger.init() {
        eprintln!("Couldn't install the logger: {err}");
    }
}
