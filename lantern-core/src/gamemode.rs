use num_derive::{FromPrimitive, ToPrimitive};
use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default, Serialize, Deserialize, FromPrimitive, ToPrimitive)]
#[serde(rename_all = "lowercase")]
#[repr(i8)]
pub enum GameMode {
    Undefined = -1,
    #[default]
    Survival,
    Creative,
    Adventure,
    Spectator,
}

impl GameMode {
    /// Creative players edit their inventory directly instead of clicking.
    pub const fn edits_directly(self) -> bool {
        matches!(self, Self::Creative)
    }
}

impl From<i8> for GameMode {
    fn from(value: i8) -> Self {
        num_traits::FromPrimitive::from_i8(value).unwrap_or(Self::Undefined)
    }
}
