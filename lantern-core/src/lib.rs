pub mod gamemode;
pub mod item;
pub mod math;

pub use gamemode::GameMode;
pub use item::{ItemStack, AIR};
