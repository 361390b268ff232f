use std::fmt::Display;

use lantern_inventory::InventoryError;
use log::log;
use thiserror::Error;

pub trait LanternError: Send + std::error::Error + Display {
    fn is_kick(&self) -> bool;

    fn log(&self) {
        log!(self.severity(), "{}", self.to_string());
    }

    fn severity(&self) -> log::Level;

    fn client_kick_reason(&self) -> Option<String>;
}

impl<ErrorType: LanternError + 'static> From<ErrorType> for Box<dyn LanternError> {
    fn from(error: ErrorType) -> Self {
        Box::new(error)
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SessionError {
    #[error("the session has ended")]
    ChannelClosed,
    #[error("server opened unknown menu type {0}")]
    UnknownWindow(i32),
}

impl LanternError for SessionError {
    fn is_kick(&self) -> bool {
        false
    }

    fn severity(&self) -> log::Level {
        match self {
            Self::ChannelClosed => log::Level::Debug,
            Self::UnknownWindow(_) => log::Level::Warn,
        }
    }

    fn client_kick_reason(&self) -> Option<String> {
        None
    }
}

// a rejected request is answered and resynced, never a reason to kick
impl LanternError for InventoryError {
    fn is_kick(&self) -> bool {
        false
    }

    fn severity(&self) -> log::Level {
        InventoryError::severity(self)
    }

    fn client_kick_reason(&self) -> Option<String> {
        None
    }
}
