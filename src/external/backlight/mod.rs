//! Control of display backlights through X11 RandR output properties
mod interface;

pub use interface::*;

pub mod fractional;
pub mod mock;
pub mod property;
pub mod x11;

#[cfg(test)]
mod test;
