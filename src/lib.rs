//! Get and set the display backlight of an X11 system
//!
//! The backlight is controlled through the `Backlight` output property which
//! drivers attach to the RandR output of the built-in panel.

pub mod external;

pub use external::backlight::{
    fractional::FractionalBacklight, x11::X11Backlight, BacklightController, BacklightError,
    BacklightRange,
};
