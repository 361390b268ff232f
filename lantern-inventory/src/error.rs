use lantern_protocol::bedrock::ContainerSlotType;
use log::Level;
use thiserror::Error;

/// Why an item stack request was rejected.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum InventoryError {
    #[error("client expected net id {claimed} in {container:?} slot {slot}, cached stack has {cached}")]
    StaleNetId {
        container: ContainerSlotType,
        slot: u8,
        claimed: i32,
        cached: i32,
    },
    #[error("{0:?} cannot hold this item")]
    IllegalPlacement(ContainerSlotType),
    #[error("no free slot to park the cursor in")]
    NoTempSlot,
    #[error("auto craft still had ingredients left after {0} passes")]
    AutoCraftExhausted(usize),
    #[error("unsupported action {0}")]
    UnsupportedAction(&'static str),
    #[error("unexpected {0} in craft sequence")]
    InvalidCraftSequence(&'static str),
    #[error("unknown recipe net id {0}")]
    UnknownRecipe(u32),
    #[error("no Java button for banner pattern {0:?}")]
    UnknownPattern(String),
    #[error("invalid slot {1} in {0:?}")]
    InvalidSlot(ContainerSlotType, u8),
    #[error("no open window with id {0}")]
    UnknownWindow(i32),
    #[error("no bundle with id {0}")]
    BundleNotFound(i32),
    #[error("request has no actions")]
    EmptyRequest,
    #[error("transfer cannot be expressed as clicks: {0}")]
    InvalidTransfer(&'static str),
}

impl InventoryError {
    /// Expected outcomes of client prediction, rejected without noise.
    pub fn is_silent(&self) -> bool {
        matches!(self, Self::IllegalPlacement(_))
    }

    pub fn severity(&self) -> Level {
        match self {
            Self::IllegalPlacement(_) => Level::Trace,
            Self::StaleNetId { .. }
            | Self::InvalidTransfer(_)
            | Self::UnknownWindow(_)
            | Self::BundleNotFound(_)
            | Self::EmptyRequest => Level::Debug,
            Self::NoTempSlot
            | Self::AutoCraftExhausted(_)
            | Self::InvalidCraftSequence(_)
            | Self::UnknownRecipe(_)
            | Self::UnknownPattern(_)
            | Self::InvalidSlot(..) => Level::Warn,
            Self::UnsupportedAction(_) => Level::Error,
        }
    }
}
