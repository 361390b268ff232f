//! Typed keys of the Java container property packet.

use num_derive::FromPrimitive;

pub trait WindowProperty: Sized {
    fn from_id(id: i16) -> Option<Self>;
}

macro_rules! primitive_property {
    ($($name:ident),*) => {
        $(impl WindowProperty for $name {
            fn from_id(id: i16) -> Option<Self> {
                num_traits::FromPrimitive::from_i16(id)
            }
        })*
    };
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, FromPrimitive)]
pub enum Furnace {
    FireIcon,
    MaximumFuelBurnTime,
    ProgressArrow,
    MaximumProgress,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EnchantmentTable {
    LevelRequirement { slot: usize },
    EnchantmentSeed,
    EnchantmentId { slot: usize },
    EnchantmentLevel { slot: usize },
}

impl WindowProperty for EnchantmentTable {
    fn from_id(id: i16) -> Option<Self> {
        let slot = usize::try_from(id).ok()?;
        match slot {
            0..=2 => Some(Self::LevelRequirement { slot }),
            3 => Some(Self::EnchantmentSeed),
            4..=6 => Some(Self::EnchantmentId { slot: slot - 4 }),
            7..=9 => Some(Self::EnchantmentLevel { slot: slot - 7 }),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, FromPrimitive)]
pub enum Beacon {
    PowerLevel,
    FirstPotionEffect,
    SecondPotionEffect,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, FromPrimitive)]
pub enum Anvil {
    RepairCost,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, FromPrimitive)]
pub enum BrewingStand {
    BrewTime,
    FuelTime,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, FromPrimitive)]
pub enum Lectern {
    PageNumber,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Crafter {
    /// `0` enables the grid slot, anything else disables it.
    SlotState { slot: usize },
    Triggered,
}

impl WindowProperty for Crafter {
    fn from_id(id: i16) -> Option<Self> {
        match usize::try_from(id).ok()? {
            slot @ 0..=8 => Some(Self::SlotState { slot }),
            9 => Some(Self::Triggered),
            _ => None,
        }
    }
}

primitive_property!(Furnace, Beacon, Anvil, BrewingStand, Lectern);
