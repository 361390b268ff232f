use lantern_protocol::java::ClickMode;

/// One Java window click.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Click {
    Left,
    Right,
    LeftShift,
    DropOne,
    DropAll,
    LeftOutside,
    RightOutside,
    /// Number key `0..9` over a slot.
    SwapToHotbar(u8),
    /// Left click with an item onto a bundle in a slot.
    LeftBundle,
    /// Left click with a bundle on the cursor onto an item in a slot.
    LeftBundleFromCursor,
    /// Right click taking one entry out of a bundle.
    RightBundle,
}

impl Click {
    pub const OUTSIDE_SLOT: i16 = -999;

    /// Shortcut for swapping a slot with hotbar slot `hotbar_slot`.
    pub fn hotbar_swap(hotbar_slot: u8) -> Option<Self> {
        (hotbar_slot < 9).then_some(Self::SwapToHotbar(hotbar_slot))
    }

    pub const fn mode(self) -> ClickMode {
        match self {
            Self::Left
            | Self::Right
            | Self::LeftOutside
            | Self::RightOutside
            | Self::LeftBundle
            | Self::LeftBundleFromCursor
            | Self::RightBundle => ClickMode::Pickup,
            Self::LeftShift => ClickMode::QuickMove,
            Self::DropOne | Self::DropAll => ClickMode::Throw,
            Self::SwapToHotbar(_) => ClickMode::Swap,
        }
    }

    pub const fn button(self) -> i8 {
        match self {
            Self::Right | Self::RightOutside | Self::DropAll | Self::RightBundle => 1,
            Self::SwapToHotbar(slot) => slot as i8,
            _ => 0,
        }
    }

    pub const fn is_outside(self) -> bool {
        matches!(self, Self::LeftOutside | Self::RightOutside)
    }

    pub const fn is_drop(self) -> bool {
        matches!(self, Self::DropOne | Self::DropAll)
    }
}
