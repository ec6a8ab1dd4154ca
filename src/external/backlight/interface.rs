use thiserror::Error;
use x11rb::errors::{ConnectError, ConnectionError, ReplyError};

/// The range of values the display server accepts for the backlight property.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BacklightRange {
    /// Lowest valid value
    pub min: i32,
    /// Highest valid value
    pub max: i32,
}

impl BacklightRange {
    pub fn new(min: i32, max: i32) -> BacklightRange {
        BacklightRange { min, max }
    }

    /// Whether `value` lies within the range, bounds included.
    pub fn contains(&self, value: i32) -> bool {
        (self.min..=self.max).contains(&value)
    }

    /// Number of steps between the lowest and the highest value.
    pub fn span(&self) -> i64 {
        self.max as i64 - self.min as i64
    }
}

/// Errors returned when talking to the backlight.
///
/// Each variant corresponds to a single point of failure, so callers can tell
/// a missing feature apart from a broken connection.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum BacklightError {
    #[error("couldn't connect to the X11 display: {0}")]
    Connect(#[from] ConnectError),

    #[error("RandR X11 extension unsupported")]
    MissingExtension,

    #[error("couldn't query the RandR version: {0}")]
    VersionReply(#[source] ReplyError),

    #[error("RandR version {major}.{minor} is too old, at least 1.2 is needed")]
    UnsupportedVersion { major: u32, minor: u32 },

    #[error("couldn't resolve the backlight property atom: {0}")]
    AtomReply(#[source] ReplyError),

    #[error("display server has no backlight property")]
    PropertyAbsent,

    #[error("couldn't fetch screen resources: {0}")]
    ResourcesReply(#[source] ReplyError),

    #[error("screen has no outputs")]
    NoOutputs,

    #[error("couldn't query the valid backlight values: {0}")]
    RangeReply(#[source] ReplyError),

    #[error("valid backlight values are not a range of two bounds")]
    RangeShape,

    #[error("couldn't read the backlight property: {0}")]
    PropertyReply(#[source] ReplyError),

    #[error("backlight property isn't a single 32-bit integer")]
    PropertyFormat,

    #[error("couldn't write the backlight property: {0}")]
    Write(#[from] ConnectionError),

    #[error("backlight range is unknown")]
    RangeUnavailable,

    #[error("backlight range {0:?} has a single value")]
    EmptyRange(BacklightRange),

    #[error("backlight fraction {0} isn't a finite number")]
    InvalidFraction(f64),

    #[error("{0}")]
    Mock(String),
}

/// Shorthand for results of backlight operations.
pub type Result<T, E = BacklightError> = std::result::Result<T, E>;

/// Control of a display's backlight, expressed in the raw units of the device.
pub trait BacklightController {
    /// Read the current backlight value from the device.
    fn get(&self) -> Result<i32>;

    /// Write a new backlight value.
    ///
    /// The value isn't checked against [BacklightController::range], callers
    /// have to keep within the bounds themselves.
    fn set(&self, value: i32) -> Result<()>;

    /// Get the valid range of backlight values, if the device provides one.
    fn range(&self) -> Option<BacklightRange>;

    /// The lowest valid value, 0 if the range is unknown.
    fn min(&self) -> i32 {
        self.range().unwrap_or_default().min
    }

    /// The highest valid value, 0 if the range is unknown.
    fn max(&self) -> i32 {
        self.range().unwrap_or_default().max
    }
}

impl<B: BacklightController + ?Sized> BacklightController for &B {
    fn get(&self) -> Result<i32> {
        (**self).get()
    }

    fn set(&self, value: i32) -> Result<()> {
        (**self).set(value)
    }

    fn range(&self) -> Option<BacklightRange> {
        (**self).range()
    }
}
