use super::{BacklightController, BacklightError, BacklightRange, Result};
use log::debug;

/// Maps the raw backlight range of a [BacklightController] onto `[0, 1]`.
///
/// The mapping is linear, `0` being the lowest and `1` the highest valid value.
#[derive(Debug, Clone)]
pub struct FractionalBacklight<B: BacklightController> {
    controller: B,
}

impl<B: BacklightController> FractionalBacklight<B> {
    pub fn new(controller: B) -> FractionalBacklight<B> {
        FractionalBacklight { controller }
    }

    pub fn controller(&self) -> &B {
        &self.controller
    }

    pub fn into_inner(self) -> B {
        self.controller
    }

    fn usable_range(&self) -> Result<BacklightRange> {
        let range = self
            .controller
            .range()
            .ok_or(BacklightError::RangeUnavailable)?;
        if range.span() == 0 {
            return Err(BacklightError::EmptyRange(range));
        }
        Ok(range)
    }

    /// Get the current backlight as a fraction of the valid range.
    pub fn get_fraction(&self) -> Result<f64> {
        let range = self.usable_range()?;
        let value = self.controller.get()?;
        Ok((value as i64 - range.min as i64) as f64 / range.span() as f64)
    }

    /// Set the backlight to a fraction of the valid range.
    ///
    /// Fractions outside of `[0, 1]` are clamped, NaN and infinities are refused.
    pub fn set_fraction(&self, fraction: f64) -> Result<()> {
        if !fraction.is_finite() {
            return Err(BacklightError::InvalidFraction(fraction));
        }
        let range = self.usable_range()?;
        let fraction = fraction.clamp(0.0, 1.0);
        let value = range.min as i64 + (fraction * range.span() as f64).round() as i64;
        debug!("Fraction {} of {:?} is {}", fraction, range, value);
        self.controller.set(value as i32)
    }
}
