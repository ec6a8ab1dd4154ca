//! Validation of the RandR replies the backlight session depends on.
//!
//! These work on reply fields only and don't need a display server.

use super::{BacklightError, BacklightRange, Result};
use x11rb::protocol::randr::{GetOutputPropertyReply, QueryOutputPropertyReply};
use x11rb::protocol::xproto::{Atom, AtomEnum};

/// Output properties were introduced in RandR 1.2.
pub const REQUIRED_VERSION: (u32, u32) = (1, 2);

/// Name of the output property drivers use for the backlight.
pub const BACKLIGHT_NAME: &str = "Backlight";

/// Name used for the same property by older drivers.
pub const LEGACY_BACKLIGHT_NAME: &str = "BACKLIGHT";

pub fn check_version(major: u32, minor: u32) -> Result<()> {
    let (required_major, required_minor) = REQUIRED_VERSION;
    if major != required_major || minor < required_minor {
        return Err(BacklightError::UnsupportedVersion { major, minor });
    }
    Ok(())
}

/// Decode the value of a backlight property.
///
/// The property has to be a single signed integer in 32-bit format.
pub fn decode_value(type_: Atom, format: u8, num_items: u32, data: &[u8]) -> Result<i32> {
    if type_ != u32::from(AtomEnum::INTEGER) || num_items != 1 || format != 32 {
        return Err(BacklightError::PropertyFormat);
    }
    let bytes: [u8; 4] = data
        .get(..4)
        .and_then(|bytes| bytes.try_into().ok())
        .ok_or(BacklightError::PropertyFormat)?;
    Ok(i32::from_ne_bytes(bytes))
}

pub fn decode_range(is_range: bool, valid_values: &[i32]) -> Result<BacklightRange> {
    match valid_values {
        [min, max] if is_range && min <= max => Ok(BacklightRange::new(*min, *max)),
        _ => Err(BacklightError::RangeShape),
    }
}

/// Decode the value carried by a `GetOutputProperty` reply.
pub fn value_from_reply(reply: &GetOutputPropertyReply) -> Result<i32> {
    decode_value(reply.type_, reply.format, reply.num_items, &reply.data)
}

impl TryFrom<&QueryOutputPropertyReply> for BacklightRange {
    type Error = BacklightError;

    fn try_from(reply: &QueryOutputPropertyReply) -> Result<BacklightRange> {
        decode_range(reply.range, &reply.valid_values)
    }
}
