use crate::external::backlight::{
    fractional::FractionalBacklight, mock::MockBacklightController, BacklightController,
    BacklightError, BacklightRange,
};

fn backlight(value: i32, min: i32, max: i32) -> FractionalBacklight<MockBacklightController> {
    FractionalBacklight::new(MockBacklightController::new(
        value,
        Some(BacklightRange::new(min, max)),
    ))
}

#[test]
fn test_getting_fraction() {
    assert_eq!(backlight(0, 0, 100).get_fraction().unwrap(), 0.0);
    assert_eq!(backlight(100, 0, 100).get_fraction().unwrap(), 1.0);
    assert_eq!(backlight(30, 10, 50).get_fraction().unwrap(), 0.5);
}

#[test]
fn test_setting_fraction() {
    let backlight = backlight(0, 10, 50);
    backlight.set_fraction(0.25).unwrap();
    assert_eq!(backlight.controller().get().unwrap(), 20);
    backlight.set_fraction(0.0).unwrap();
    assert_eq!(backlight.controller().get().unwrap(), 10);
    backlight.set_fraction(1.0).unwrap();
    assert_eq!(backlight.controller().get().unwrap(), 50);
}

#[test]
fn test_rounding() {
    let backlight = backlight(0, 0, 3);
    backlight.set_fraction(0.5).unwrap();
    assert_eq!(backlight.controller().get().unwrap(), 2);
    backlight.set_fraction(0.1).unwrap();
    assert_eq!(backlight.controller().get().unwrap(), 0);
}

#[test]
fn test_clamping() {
    let backlight = backlight(5, 0, 10);
    backlight.set_fraction(1.5).unwrap();
    assert_eq!(backlight.controller().get().unwrap(), 10);
    backlight.set_fraction(-0.5).unwrap();
    assert_eq!(backlight.controller().get().unwrap(), 0);
}

#[test]
fn test_full_i32_range() {
    let backlight = backlight(0, i32::MIN, i32::MAX);
    backlight.set_fraction(1.0).unwrap();
    assert_eq!(backlight.controller().get().unwrap(), i32::MAX);
    backlight.set_fraction(0.0).unwrap();
    assert_eq!(backlight.controller().get().unwrap(), i32::MIN);
}

#[test]
fn test_invalid_fractions() {
    let backlight = backlight(5, 0, 10);
    for fraction in [f64::NAN, f64::INFINITY, f64::NEG_INFINITY] {
        assert!(matches!(
            backlight.set_fraction(fraction),
            Err(BacklightError::InvalidFraction(_))
        ));
    }
    assert_eq!(backlight.controller().get().unwrap(), 5);
}

#[test]
fn test_unusable_ranges() {
    let without_range = FractionalBacklight::new(MockBacklightController::new(5, None));
    assert!(matches!(
        without_range.get_fraction(),
        Err(BacklightError::RangeUnavailable)
    ));
    assert!(matches!(
        without_range.set_fraction(0.5),
        Err(BacklightError::RangeUnavailable)
    ));

    let single_value = backlight(5, 5, 5);
    assert!(matches!(
        single_value.get_fraction(),
        Err(BacklightError::EmptyRange(_))
    ));
    assert!(matches!(
        single_value.set_fraction(0.5),
        Err(BacklightError::EmptyRange(_))
    ));
}

#[test]
fn test_controller_errors() {
    let backlight = backlight(5, 0, 10);
    backlight.controller().set_failure_mode(true);
    assert!(matches!(
        backlight.get_fraction(),
        Err(BacklightError::Mock(_))
    ));
    assert!(backlight.set_fraction(0.5).is_err());
    backlight.controller().set_failure_mode(false);
    assert_eq!(backlight.into_inner().get().unwrap(), 5);
}
