#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;

pub mod core;
#[cfg(feature = "std")]
mod logging;
#[cfg(feature = "std")]
pub mod player;
pub mod prelude;
#[cfg(feature = "std")]
pub mod ui;

pub use crate::core::*;
#[cfg(feature = "std")]
pub use logging::init_logging;
#[cfg(feature = "std")]
pub use player::{CliPlayer, Player, RandomPlayer};
